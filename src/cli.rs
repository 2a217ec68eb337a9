use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "email-classifier",
    version,
    about = "Classify emails as produtivo or improdutivo with the remote classification API"
)]
pub struct Cli {
    /// Base URL of the classification API; overrides CLASSIFIER_API_URL
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify one email and exit
    Classify(ClassifyArgs),
    /// Fill in the email form line by line
    Interactive,
}

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Email body. Read from --file or stdin when omitted
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Text file holding the email body
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[arg(short, long)]
    pub subject: Option<String>,

    #[arg(long)]
    pub sender: Option<String>,

    /// Print the raw result as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_classify_with_metadata() {
        let cli = Cli::try_parse_from([
            "email-classifier",
            "classify",
            "Please process my refund",
            "--subject",
            "Refund",
            "--json",
            "--api-url",
            "http://localhost:8000",
        ])
        .unwrap();

        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:8000"));
        let Command::Classify(args) = cli.command else {
            panic!("expected classify");
        };
        assert_eq!(args.text.as_deref(), Some("Please process my refund"));
        assert_eq!(args.subject.as_deref(), Some("Refund"));
        assert!(args.json);
        assert!(args.file.is_none());
    }

    #[test]
    fn text_and_file_conflict() {
        let err = Cli::try_parse_from([
            "email-classifier",
            "classify",
            "body",
            "--file",
            "mail.txt",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
