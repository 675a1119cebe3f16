use crate::errors::AppError;
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// Recognized levels, in the order the count table prints them.
pub const LOG_LEVELS: [LogLevel; 4] = [
    LogLevel::Info,
    LogLevel::Error,
    LogLevel::Debug,
    LogLevel::Warning,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Info,
    Error,
    Debug,
    Warning,
}

impl LogLevel {
    /// Matches a level label in any case. Unknown labels have no level.
    pub fn parse(label: &str) -> Option<LogLevel> {
        match label.to_uppercase().as_str() {
            "INFO" => Some(LogLevel::Info),
            "ERROR" => Some(LogLevel::Error),
            "DEBUG" => Some(LogLevel::Debug),
            "WARNING" => Some(LogLevel::Warning),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
            LogLevel::Warning => "WARNING",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub date: String,
    pub time: String,
    pub level: LogLevel,
    pub message: String,
}

/// Parses one `date time LEVEL message` line. The message keeps its internal
/// spaces. A line that does not fit the format produces a notice on stderr
/// and yields nothing, so the caller simply skips it.
pub fn parse_log_line(line: &str) -> Option<LogEntry> {
    let line = line.trim();
    let mut parts = line.splitn(4, ' ');

    let (Some(date), Some(time), Some(level), Some(message)) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        eprintln!("Incorrect format of line: {}", line);
        return None;
    };

    let label = level.to_uppercase();
    let Some(level) = LogLevel::parse(&label) else {
        eprintln!("Unknown log level '{}' in line: '{}'", label, line);
        return None;
    };

    Some(LogEntry {
        date: date.to_string(),
        time: time.to_string(),
        level,
        message: message.trim().to_string(),
    })
}

/// Loads and parses every line of the file at `path`. Lines that fail to
/// parse are skipped; an unreadable file is an error.
pub fn load_logs(path: &Path) -> Result<Vec<LogEntry>, AppError> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            AppError::FileNotFound(path.display().to_string())
        } else {
            AppError::Io(e)
        }
    })?;

    let reader = BufReader::new(file);
    let mut entries = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if let Some(entry) = parse_log_line(&line) {
            entries.push(entry);
        }
    }

    Ok(entries)
}

pub fn count_by_level(entries: &[LogEntry]) -> HashMap<LogLevel, usize> {
    let mut counts = HashMap::new();

    for entry in entries {
        *counts.entry(entry.level).or_insert(0) += 1;
    }

    counts
}

pub fn filter_by_level<'a>(entries: &'a [LogEntry], level: LogLevel) -> Vec<&'a LogEntry> {
    entries
        .iter()
        .filter(|entry| entry.level == level)
        .collect()
}

/// Renders the per-level count table. The level column pads to the widest
/// label present (header included) so the pipes line up; rows follow the
/// `LOG_LEVELS` order.
pub fn render_count_table(counts: &HashMap<LogLevel, usize>) -> String {
    let header_level = "Log level";
    let header_count = "Count";

    let width = counts
        .keys()
        .map(|level| level.as_str().len())
        .max()
        .unwrap_or(0)
        .max(header_level.len());

    let mut out = String::new();
    out.push_str(&format!("{:<width$} | {}\n", header_level, header_count));
    out.push_str(&format!(
        "{}-|{}\n",
        "-".repeat(width),
        "-".repeat(header_count.len())
    ));

    for level in LOG_LEVELS {
        if let Some(count) = counts.get(&level) {
            out.push_str(&format!("{:<width$} | {}\n", level.as_str(), count));
        }
    }

    out
}

/// Renders the detail lines for one level, `date time - message` per entry.
pub fn render_details(entries: &[&LogEntry], level: LogLevel) -> String {
    let mut out = format!("Log details for level '{}':\n", level);

    if entries.is_empty() {
        out.push_str("No entries found for this level.\n");
        return out;
    }

    for entry in entries {
        out.push_str(&format!(
            "{} {} - {}\n",
            entry.date, entry.time, entry.message
        ));
    }

    out
}
