use colored::{ColoredString, Colorize};
use std::fmt::Display;

#[derive(PartialEq, Eq)]
pub enum Status {
    Info,
    Success,
    Warning,
}

impl Status {
    fn symbol(&self) -> ColoredString {
        match self {
            Self::Info => "~".cyan(),
            Self::Success => "+".green(),
            Self::Warning => "!".yellow(),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Status lines go to stderr; stdout only ever carries zone names.
pub fn status(status: &Status, message: &impl Display) {
    eprintln!("[{status}] {message}");
}

/// Builds the `[FATAL] ` line, each part followed by a single space.
pub fn fatal<S: AsRef<str>>(parts: &[S]) -> String {
    let tokens: String = parts
        .iter()
        .map(|part| format!("{} ", part.as_ref()))
        .collect();
    format!("[FATAL] {tokens}")
}

#[macro_export]
macro_rules! log_info {
    ($message:expr) => {
        $crate::io::logger::status(&$crate::io::logger::Status::Info, &$message.to_string());
    };
}

#[macro_export]
macro_rules! log_success {
    ($message:expr) => {
        $crate::io::logger::status(
            &$crate::io::logger::Status::Success,
            &$message.to_string(),
        );
    };
}

#[macro_export]
macro_rules! log_warn {
    ($message:expr) => {
        $crate::io::logger::status(
            &$crate::io::logger::Status::Warning,
            &$message.to_string(),
        );
    };
}
