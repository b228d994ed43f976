use chrono::{DateTime, Utc};
use serde::Serialize;
use types::{Copayer, SigningStatus};

pub const STEP_COUNT: usize = 4;

pub const PROPOSAL_CREATED: usize = 0;
pub const WAITING_FOR_COSIGNERS: usize = 1;
pub const SIGNATURE_GENERATION: usize = 2;
pub const BROADCAST_TRANSACTION: usize = 3;

const STEP_TITLES: [&str; STEP_COUNT] = [
    "Proposal Created",
    "Waiting for co-signers",
    "Signature Generation",
    "Broadcast Transaction",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    Pending,
    Active,
    Complete,
}

/// State of a displayed step for the current status.
///
/// Steps are indexed against the phase order directly, so step 0 ("proposal
/// created") is active while `initializing` and complete from
/// `waiting_for_cosigners` on. `error` has no phase index and leaves every
/// step pending.
#[must_use]
pub fn step_status(step_index: usize, status: SigningStatus) -> StepState {
    let Some(current) = status.phase_index() else {
        return StepState::Pending;
    };

    match step_index.cmp(&current) {
        std::cmp::Ordering::Less => StepState::Complete,
        std::cmp::Ordering::Equal => StepState::Active,
        std::cmp::Ordering::Greater => StepState::Pending,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepPayload {
    Proposal {
        created_by: String,
        date: DateTime<Utc>,
    },
    Copayers {
        copayers: Vec<Copayer>,
    },
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub title: &'static str,
    pub payload: StepPayload,
}

/// The four displayed ceremony steps with their static titles.
#[must_use]
pub fn build_steps(created_by: &str, date: DateTime<Utc>, copayers: &[Copayer]) -> Vec<Step> {
    STEP_TITLES
        .iter()
        .enumerate()
        .map(|(index, title)| {
            let payload = match index {
                PROPOSAL_CREATED => StepPayload::Proposal {
                    created_by: created_by.to_string(),
                    date,
                },
                WAITING_FOR_COSIGNERS => StepPayload::Copayers {
                    copayers: copayers.to_vec(),
                },
                _ => StepPayload::None,
            };
            Step { title, payload }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum StepIcon {
    Success,
    Refresh,
    Clock,
    Number(usize),
}

impl StepIcon {
    #[must_use]
    pub const fn for_step(step_index: usize, state: StepState) -> Self {
        match state {
            StepState::Complete => Self::Success,
            StepState::Active if step_index == SIGNATURE_GENERATION => Self::Refresh,
            StepState::Active => Self::Clock,
            StepState::Pending => Self::Number(step_index + 1),
        }
    }
}

/// A step with everything needed to draw it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepView {
    pub index: usize,
    pub title: &'static str,
    pub state: StepState,
    pub icon: StepIcon,
    /// Whether the rail into the next step is filled. `None` on the last step.
    pub connector_complete: Option<bool>,
    pub subtitle: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub show_timestamp: bool,
    pub copayers: Vec<Copayer>,
}

impl StepView {
    #[must_use]
    pub fn from_step(index: usize, step: Step, status: SigningStatus) -> Self {
        let state = step_status(index, status);
        let connector_complete = (index + 1 < STEP_COUNT)
            .then(|| step_status(index + 1, status) != StepState::Pending);

        let (subtitle, timestamp, copayers) = match step.payload {
            StepPayload::Proposal { created_by, date } => (Some(created_by), Some(date), Vec::new()),
            StepPayload::Copayers { copayers } => (None, None, copayers),
            StepPayload::None => (None, None, Vec::new()),
        };

        let show_timestamp = timestamp.is_some()
            && !matches!(status, SigningStatus::Initializing | SigningStatus::Error);

        Self {
            index,
            title: step.title,
            state,
            icon: StepIcon::for_step(index, state),
            connector_complete,
            subtitle,
            timestamp,
            show_timestamp,
            copayers,
        }
    }
}
