use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::{Mutex, OnceLock};

use chrono::Local;
use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Where log lines go. Stdout belongs to the game itself, so it is not an option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogSink {
    #[default]
    Stderr,
    File,
    Off,
}

enum LogWriter {
    Stderr,
    File(Mutex<File>),
    Off,
}

pub struct Logger {
    prefix: Option<String>,
    writer: LogWriter,
}

impl Logger {
    fn new(prefix: Option<String>, writer: LogWriter) -> Self {
        Self { prefix, writer }
    }

    fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => {
                format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message)
            }
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        match &self.writer {
            LogWriter::Off => {}
            LogWriter::Stderr => eprintln!("{}", self.format_line(file, line, message)),
            LogWriter::File(handle) => {
                let text = self.format_line(file, line, message);
                if let Ok(mut handle) = handle.lock() {
                    let _ = writeln!(handle, "{}", text);
                }
            }
        }
    }
}

/// Installs the process-wide logger. Later calls are ignored.
pub fn init_logger(
    prefix: Option<String>,
    sink: LogSink,
    file_path: Option<&str>,
) -> Result<(), String> {
    let writer = match sink {
        LogSink::Stderr => LogWriter::Stderr,
        LogSink::Off => LogWriter::Off,
        LogSink::File => {
            let path = file_path.ok_or("Log sink is 'file' but no log file was given")?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| format!("Failed to open log file {}: {}", path, e))?;
            LogWriter::File(Mutex::new(file))
        }
    };
    LOGGER.get_or_init(|| Logger::new(prefix, writer));
    Ok(())
}

/// Lines logged before [`init_logger`] are dropped.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_contains_prefix_and_location() {
        let logger = Logger::new(Some("TicTacToe".to_string()), LogWriter::Off);

        let line = logger.format_line("src/games/tictactoe/session.rs", 42, "hello");

        assert!(line.ends_with("[TicTacToe][session.rs:42] hello"));
    }

    #[test]
    fn test_line_without_prefix() {
        let logger = Logger::new(None, LogWriter::Off);

        let line = logger.format_line("C:\\src\\main.rs", 7, "started");

        assert!(line.ends_with("][main.rs:7] started"));
    }

    #[test]
    fn test_file_sink_requires_path() {
        assert!(init_logger(None, LogSink::File, None).is_err());
    }
}
