//! Jogging output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;
use whereclause_rs::models::Jogging;

use super::helpers::{optional_cell, truncate_str};

/// JSON output structure for the joggings command.
#[derive(Serialize)]
pub struct JoggingsListOutput<'a> {
    pub joggings: Vec<JoggingOutput<'a>>,
}

/// JSON output structure for a single jogging session.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoggingOutput<'a> {
    pub id: i64,
    pub user: &'a str,
    pub date: String,
    pub time: String,
    pub distance: i64,
    pub location: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_temperature: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_condition: Option<&'a str>,
}

/// Formats jogging sessions as JSON.
pub fn format_joggings_json(joggings: &[&Jogging]) -> Result<String, serde_json::Error> {
    let joggings_output: Vec<JoggingOutput> = joggings
        .iter()
        .map(|j| JoggingOutput {
            id: j.id,
            user: &j.user,
            date: j.date.format("%Y-%m-%d").to_string(),
            time: j.time.format("%H:%M:%S").to_string(),
            distance: j.distance,
            location: &j.location,
            average_temperature: j.average_temperature.as_deref(),
            weather_condition: j.weather_condition.as_deref(),
        })
        .collect();

    let output = JoggingsListOutput {
        joggings: joggings_output,
    };

    serde_json::to_string_pretty(&output)
}

/// Formats jogging sessions as a table.
pub fn format_joggings_table(joggings: &[&Jogging], use_colors: bool) -> String {
    if joggings.is_empty() {
        return "No joggings found.\n".to_string();
    }

    let mut output = String::new();

    let header = format!(
        "{:<6} {:<12} {:<10} {:<8} {:>9} {:<16} {:<6} {}",
        "ID", "User", "Date", "Time", "Distance", "Location", "Temp", "Weather"
    );
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for jogging in joggings {
        let line = format!(
            "{:<6} {:<12} {:<10} {:<8} {:>9} {:<16} {:<6} {}",
            jogging.id,
            truncate_str(&jogging.user, 12),
            jogging.date.format("%Y-%m-%d").to_string(),
            jogging.time.format("%H:%M:%S").to_string(),
            jogging.distance,
            truncate_str(&jogging.location, 16),
            optional_cell(jogging.average_temperature.as_deref()),
            truncate_str(optional_cell(jogging.weather_condition.as_deref()), 20)
        );
        output.push_str(&line);
        output.push('\n');
    }

    output
}
