//! Console line rendering
//!
//! Lines are laid out as `[timestamp | ]LEVEL | prefix | message`, with the
//! timestamp rendered as RFC 3339 at second precision in local time.

use super::log_level::LogLevel;
use chrono::{DateTime, Local, SecondsFormat};

const SEPARATOR: &str = " | ";

/// Render the RFC 3339 timestamp used in console lines.
pub fn format_timestamp(datetime: &DateTime<Local>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Render one console line.
///
/// `newline` appends a trailing `\n`; formatted messages carry their own
/// line ending if they want one.
pub fn render_line(
    timestamp: Option<&DateTime<Local>>,
    level: LogLevel,
    prefix: &str,
    message: &str,
    newline: bool,
) -> String {
    let mut line = String::with_capacity(prefix.len() + message.len() + 48);
    if let Some(ts) = timestamp {
        line.push_str(&format_timestamp(ts));
        line.push_str(SEPARATOR);
    }
    line.push_str(level.to_str());
    line.push_str(SEPARATOR);
    line.push_str(prefix);
    line.push_str(SEPARATOR);
    line.push_str(message);
    if newline {
        line.push('\n');
    }
    line
}
