//! Operator session log.
//!
//! One line is appended per session start:
//! `User: <first> <last> - Date: <timestamp>`. The timestamp keeps
//! the asctime shape existing logs were written with.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::Local;

use crate::error::AppResult;
use crate::models::Operator;

pub fn record_session(log_path: impl AsRef<Path>, operator: &Operator) -> AppResult<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;
    let timestamp = Local::now().format("%a %b %e %H:%M:%S %Y");
    writeln!(file, "User: {} - Date: {}", operator.full_name(), timestamp)?;
    Ok(())
}
