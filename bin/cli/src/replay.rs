use ceremony::{CeremonyInterfaceImpl, CeremonySession};
use tracing::{debug, error};
use tracker::{StepState, TrackerConfig, ViewState};

use crate::{
    errors::CliError,
    script::{CeremonyScript, PanelAction, ScriptStep},
};

/// Feeds every script step through a running ceremony loop and collects the
/// view state after each one. The first entry is the state before any step.
pub async fn replay(
    script: CeremonyScript,
    config: &TrackerConfig,
) -> Result<Vec<ViewState>, CliError> {
    let session = CeremonySession::new(script.proposal_id.as_deref(), script.snapshot, config);
    let (mut interface, handle) = CeremonyInterfaceImpl::new(session, config);

    let task = tokio::spawn(async move {
        if let Err(e) = interface.start().await {
            error!("Ceremony loop failed: {}", e);
        }
    });

    let mut views = vec![handle.view_state().await?];
    for step in script.steps {
        match step {
            ScriptStep::Panel {
                panel: PanelAction::Open,
            } => {
                let visible = handle.open_panel().await?;
                debug!("Panel open requested, visible: {}", visible);
            }
            ScriptStep::Panel {
                panel: PanelAction::Close,
            } => {
                let visible = handle.close_panel().await?;
                debug!("Panel close requested, visible: {}", visible);
            }
            ScriptStep::RawStatus { raw_status } => {
                let changed = handle.apply_raw_status(raw_status).await?;
                debug!("Raw status applied, copayers changed: {}", changed);
            }
            ScriptStep::Event(event) => {
                let changed = handle.apply_event(event).await?;
                debug!("Event applied, copayers changed: {}", changed);
            }
        }
        views.push(handle.view_state().await?);
    }

    drop(handle);
    if let Err(e) = task.await {
        error!("Ceremony loop task panicked: {}", e);
    }

    Ok(views)
}

#[must_use]
pub fn render_text(view: &ViewState) -> String {
    let mut out = format!(
        "{} [{}%] {}{}\n",
        view.button_label,
        view.progress_percent,
        view.status,
        if view.panel_visible { " (panel open)" } else { "" }
    );

    for step in &view.steps {
        let marker = match step.state {
            StepState::Complete => "x",
            StepState::Active => ">",
            StepState::Pending => " ",
        };
        out.push_str(&format!("  [{marker}] {}", step.title));
        if let Some(subtitle) = &step.subtitle {
            out.push_str(&format!(" - {subtitle}"));
        }
        if let (true, Some(timestamp)) = (step.show_timestamp, step.timestamp) {
            out.push_str(&format!(" ({})", timestamp.to_rfc3339()));
        }
        out.push('\n');

        for copayer in &step.copayers {
            let signed = if copayer.signed { "signed" } else { "waiting" };
            out.push_str(&format!("      {} ({signed})\n", copayer.name));
        }
    }

    out
}
