use std::{io::Write, process::ExitCode, sync::Arc};

use anyhow::{bail, Result};
use reqwest::Client;
use tokio::io::{AsyncReadExt, BufReader};

use crate::{
    api::EmailClassifierClient,
    cli::{ClassifyArgs, Command},
    config::AppConfig,
    domain::ClassificationRequest,
    infrastructure::shutdown::Shutdown,
    presentation::{load_text, render_json, render_result, run_form, spawn_progress},
    session::ClassificationSession,
};

pub enum RunOutcome {
    Completed(ExitCode),
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Classified,
    /// Validation failed; nothing was sent.
    Rejected,
    Failed,
}

impl From<Completion> for ExitCode {
    fn from(completion: Completion) -> Self {
        match completion {
            Completion::Classified => ExitCode::SUCCESS,
            Completion::Failed => ExitCode::FAILURE,
            Completion::Rejected => ExitCode::from(2),
        }
    }
}

pub struct ClassifierApp {
    session: ClassificationSession,
    shutdown: Shutdown,
}

impl ClassifierApp {
    pub fn initialize(config: AppConfig, shutdown: Shutdown) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(format!("email-classifier-rust/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        let client = Arc::new(EmailClassifierClient::new(http_client, &config.api)?);
        tracing::info!(
            target: "app",
            endpoint = %client.endpoint(),
            overlap = ?config.session.overlap,
            "classifier ready"
        );

        Ok(Self {
            session: ClassificationSession::new(client, config.session.overlap),
            shutdown,
        })
    }

    pub async fn run(self, command: Command) -> Result<RunOutcome> {
        let ClassifierApp { session, shutdown } = self;
        let progress = spawn_progress(session.subscribe());
        let mut shutdown_listener = shutdown.subscribe();

        let outcome = tokio::select! {
            res = dispatch(&session, command) => res.map(RunOutcome::Completed),
            _ = shutdown_listener.notified() => {
                tracing::info!(target: "app", "interrupted; no longer waiting for the service");
                Ok(RunOutcome::Interrupted)
            }
        };

        // Closing the state channel lets the spinner task clear itself.
        drop(session);
        if let Err(err) = progress.await {
            if err.is_panic() {
                tracing::error!(target: "app", "progress task panicked");
            }
        }
        outcome
    }
}

async fn dispatch(session: &ClassificationSession, command: Command) -> Result<ExitCode> {
    match command {
        Command::Classify(args) => {
            let mut stdout = std::io::stdout();
            let mut stderr = std::io::stderr();
            let completion = classify_once(session, args, &mut stdout, &mut stderr).await?;
            Ok(completion.into())
        }
        Command::Interactive => {
            let input = BufReader::new(tokio::io::stdin());
            run_form(session, input, &mut std::io::stdout()).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn classify_once(
    session: &ClassificationSession,
    args: ClassifyArgs,
    out: &mut impl Write,
    err_out: &mut impl Write,
) -> Result<Completion> {
    let content = read_content(&args).await?;
    let request = match ClassificationRequest::new(content, args.subject, args.sender) {
        Ok(request) => request,
        Err(err) => {
            writeln!(err_out, "{err}")?;
            return Ok(Completion::Rejected);
        }
    };

    session.submit(&request).await;
    let state = session.state();
    if let Some(result) = state.result() {
        if args.json {
            render_json(out, result)?;
        } else {
            render_result(out, result)?;
        }
        Ok(Completion::Classified)
    } else if let Some(message) = state.error() {
        writeln!(err_out, "Error: {message}")?;
        Ok(Completion::Failed)
    } else {
        bail!("classification settled in unexpected state {state:?}")
    }
}

async fn read_content(args: &ClassifyArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return Ok(load_text(path).await?.text);
    }
    let mut buf = String::new();
    tokio::io::stdin().read_to_string(&mut buf).await?;
    Ok(buf)
}
