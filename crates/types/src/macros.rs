#[macro_export]
macro_rules! status_transition_metrics {
    ($status:expr) => {{
        metrics::counter!("tss_status_transitions_total", "status" => $status.to_string()).increment(1);
    }};
}

#[macro_export]
macro_rules! copayer_update_metrics {
    ($reason:expr) => {{
        metrics::counter!("tss_copayer_updates_total", "reason" => $reason.to_string()).increment(1);
    }};
}

#[macro_export]
macro_rules! progress_metrics {
    ($percent:expr, $session_id:expr) => {{
        metrics::gauge!("tss_progress_percent", "session_id" => $session_id.to_string()).set(f64::from($percent));
    }};
}
