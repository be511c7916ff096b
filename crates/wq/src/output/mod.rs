//! Output formatting utilities for the wq CLI.
//!
//! This module provides functions for formatting records as tables or JSON.
//!
//! - [`users`] - User listing output
//! - [`joggings`] - Jogging listing output
//! - [`helpers`] - Common formatting utilities (truncation, optional cells)

pub mod helpers;
mod joggings;
mod users;

pub use joggings::{format_joggings_json, format_joggings_table};
pub use users::{format_users_json, format_users_table};
