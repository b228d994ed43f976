use derive_more::Display;
use types::errors::TrackerError;

#[derive(Debug, Display)]
pub enum CliError {
    #[display("Failed to read script {}: {}", _0, _1)]
    ScriptRead(String, std::io::Error),

    #[display("Invalid script: {}", _0)]
    ScriptFormat(String),

    #[display("Failed to create log directory: {}", _0)]
    LogDirectory(String),

    #[display("{}", _0)]
    Tracker(TrackerError),
}

impl From<TrackerError> for CliError {
    fn from(error: TrackerError) -> Self {
        Self::Tracker(error)
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::ScriptFormat(error.to_string())
    }
}

impl std::error::Error for CliError {}
