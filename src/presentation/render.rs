use std::{io::Write, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tokio::{sync::watch, task::JoinHandle};

use crate::{domain::ClassificationResult, session::SessionState};

pub fn render_result(out: &mut impl Write, result: &ClassificationResult) -> std::io::Result<()> {
    writeln!(
        out,
        "Category: {}",
        result.category.as_str().to_uppercase()
    )?;
    writeln!(out, "Confidence: {:.1}%", result.confidence * 100.0)?;
    writeln!(out)?;
    writeln!(out, "Suggested response:")?;
    writeln!(out, "\"{}\"", result.suggested_response)?;
    writeln!(out)?;
    writeln!(out, "Detailed analysis:")?;
    writeln!(
        out,
        "Content length: {} characters",
        result.analysis.content_length
    )?;
    writeln!(out, "Keywords: {}", result.analysis.keywords.len())?;
    if !result.analysis.keywords.is_empty() {
        let listed = result
            .analysis
            .keywords
            .iter()
            .map(|keyword| format!("[{keyword}]"))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "{listed}")?;
    }
    writeln!(out, "Reasoning: {}", result.analysis.reasoning)?;
    writeln!(
        out,
        "Processed in: {:.3} seconds",
        result.processing_time
    )?;
    Ok(())
}

pub fn render_json(out: &mut impl Write, result: &ClassificationResult) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)
}

pub fn render_state(out: &mut impl Write, state: &SessionState) -> std::io::Result<()> {
    match state {
        SessionState::Idle => writeln!(out, "Nothing classified yet."),
        SessionState::Loading => writeln!(out, "Analyzing..."),
        SessionState::Success(result) => render_result(out, result),
        SessionState::Failure(message) => writeln!(out, "Error: \"{message}\""),
    }
}

/// Ends when the session is dropped.
pub fn spawn_progress(mut updates: watch::Receiver<SessionState>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut spinner: Option<ProgressBar> = None;
        loop {
            let loading = updates.borrow_and_update().is_loading();
            match (loading, spinner.take()) {
                (true, None) => spinner = Some(start_spinner()),
                (true, Some(active)) => spinner = Some(active),
                (false, Some(active)) => active.finish_and_clear(),
                (false, None) => {}
            }
            if updates.changed().await.is_err() {
                break;
            }
        }
        if let Some(active) = spinner {
            active.finish_and_clear();
        }
    })
}

fn start_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Analyzing...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
