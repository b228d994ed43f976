use std::{fs, path::Path};

use serde::Deserialize;
use types::{CeremonyEvent, CeremonySnapshot};

use crate::errors::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelAction {
    Open,
    Close,
}

/// One line of a replay script: a driver event, a status still in wire form,
/// or a user pressing the panel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ScriptStep {
    Panel { panel: PanelAction },
    RawStatus { raw_status: String },
    Event(CeremonyEvent),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CeremonyScript {
    #[serde(default)]
    pub proposal_id: Option<String>,
    pub snapshot: CeremonySnapshot,
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

impl CeremonyScript {
    pub fn from_yaml(contents: &str) -> Result<Self, CliError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self, CliError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CliError::ScriptRead(path.display().to_string(), e))?;
        Self::from_yaml(&contents)
    }
}
