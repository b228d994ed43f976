use std::error::Error;

use derive_more::Display;

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[display("Unrecognized signing status: {}", _0)]
    UnrecognizedStatus(String),

    #[display("Config error: {}", _0)]
    Config(String),

    #[display("Io error: {}", _0)]
    Io(String),

    #[display("Serialization error: {}", _0)]
    Serialization(String),

    #[display("Channel error: {}", _0)]
    Channel(String),

    Error(String),
}

impl From<std::io::Error> for TrackerError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_yaml::Error> for TrackerError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

impl Error for TrackerError {}
