//! User output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;
use whereclause_rs::models::{Role, User};

use super::helpers::truncate_str;

/// JSON output structure for the users command.
#[derive(Serialize)]
pub struct UsersListOutput<'a> {
    pub users: Vec<UserOutput<'a>>,
}

/// JSON output structure for a single user.
#[derive(Serialize)]
pub struct UserOutput<'a> {
    pub id: i64,
    pub version: i64,
    pub name: &'a str,
    pub role: &'static str,
}

/// Formats users as JSON.
pub fn format_users_json(users: &[&User]) -> Result<String, serde_json::Error> {
    let users_output: Vec<UserOutput> = users
        .iter()
        .map(|u| UserOutput {
            id: u.id,
            version: u.version,
            name: &u.name,
            role: u.role.as_str(),
        })
        .collect();

    let output = UsersListOutput {
        users: users_output,
    };

    serde_json::to_string_pretty(&output)
}

/// Formats users as a table.
pub fn format_users_table(users: &[&User], use_colors: bool) -> String {
    if users.is_empty() {
        return "No users found.\n".to_string();
    }

    let mut output = String::new();

    let header = format!("{:<6} {:<24} {}", "ID", "Name", "Role");
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for user in users {
        let line = format!(
            "{:<6} {:<24} {}",
            user.id,
            truncate_str(&user.name, 24),
            format_role(user.role, use_colors)
        );
        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Formats a role, highlighting elevated access.
fn format_role(role: Role, use_colors: bool) -> String {
    let label = role.as_str();
    if !use_colors {
        return label.to_string();
    }
    match role {
        Role::Admin => label.red().to_string(),
        Role::Manager => label.yellow().to_string(),
        Role::User => label.to_string(),
    }
}
