use std::{io::Write, path::PathBuf};

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::{
    domain::{ClassificationRequest, ValidationError},
    session::ClassificationSession,
};

use super::{
    loader::{load_text, LoadedFile},
    render::render_state,
};

pub const HELP: &str = "\
Type or paste the email body; every plain line is appended to the content.
Commands:
  :subject <text>   set the subject (empty to clear)
  :sender <text>    set the sender (empty to clear)
  :file <path>      replace the content with a text file
  :submit           classify the current content
  :reset            clear the form and the last outcome
  :show             print the form and the last outcome
  :help             print this help
  :quit             leave
Start a line with '::' to enter a literal leading ':'.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormInput {
    Text(String),
    Subject(String),
    Sender(String),
    File(PathBuf),
    Submit,
    Reset,
    Show,
    Help,
    Quit,
    Unknown(String),
}

impl FormInput {
    pub fn parse(line: &str) -> Self {
        if let Some(escaped) = line.strip_prefix("::") {
            return FormInput::Text(format!(":{escaped}"));
        }
        let Some(command) = line.strip_prefix(':') else {
            return FormInput::Text(line.to_string());
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command.trim_end(), ""),
        };
        match name {
            "subject" => FormInput::Subject(arg.to_string()),
            "sender" => FormInput::Sender(arg.to_string()),
            "file" if !arg.is_empty() => FormInput::File(PathBuf::from(arg)),
            "submit" => FormInput::Submit,
            "reset" => FormInput::Reset,
            "show" => FormInput::Show,
            "help" => FormInput::Help,
            "quit" | "q" => FormInput::Quit,
            _ => FormInput::Unknown(command.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub content: String,
    pub subject: String,
    pub sender: String,
    pub file: Option<String>,
}

impl FormDraft {
    pub fn push_line(&mut self, line: &str) {
        if !self.content.is_empty() {
            self.content.push('\n');
        }
        self.content.push_str(line);
    }

    pub fn load_file(&mut self, loaded: LoadedFile) {
        self.content = loaded.text;
        self.file = Some(loaded.name);
    }

    pub fn to_request(&self) -> Result<ClassificationRequest, ValidationError> {
        ClassificationRequest::new(
            self.content.clone(),
            Some(self.subject.clone()),
            Some(self.sender.clone()),
        )
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub async fn run_form<R, W>(session: &ClassificationSession, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut draft = FormDraft::default();
    writeln!(out, "{HELP}")?;
    out.flush()?;

    while let Some(line) = lines.next_line().await? {
        match FormInput::parse(&line) {
            FormInput::Text(text) => draft.push_line(&text),
            FormInput::Subject(subject) => draft.subject = subject,
            FormInput::Sender(sender) => draft.sender = sender,
            FormInput::File(path) => match load_text(&path).await {
                Ok(loaded) => {
                    writeln!(out, "File loaded: {}", loaded.name)?;
                    draft.load_file(loaded);
                }
                Err(err) => writeln!(out, "Error: {err:#}")?,
            },
            FormInput::Submit => match draft.to_request() {
                Ok(request) => {
                    session.submit(&request).await;
                    render_state(out, &session.state())?;
                }
                Err(err) => {
                    tracing::debug!(target: "form", "submit blocked: {err}");
                    writeln!(out, "{err}")?;
                }
            },
            FormInput::Reset => {
                draft.clear();
                session.reset();
                writeln!(out, "Form cleared.")?;
            }
            FormInput::Show => {
                render_draft(out, &draft)?;
                render_state(out, &session.state())?;
            }
            FormInput::Help => writeln!(out, "{HELP}")?,
            FormInput::Quit => break,
            FormInput::Unknown(command) => {
                writeln!(out, "Unknown command :{command} (try :help)")?
            }
        }
        out.flush()?;
    }
    Ok(())
}

fn render_draft(out: &mut impl Write, draft: &FormDraft) -> std::io::Result<()> {
    if let Some(file) = &draft.file {
        writeln!(out, "File loaded: {file}")?;
    }
    writeln!(out, "Subject: {}", draft.subject)?;
    writeln!(out, "Sender: {}", draft.sender)?;
    writeln!(out, "Content ({} characters):", draft.content.chars().count())?;
    writeln!(out, "{}", draft.content)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;
    use crate::{config::OverlapPolicy, session::SessionState, testing};

    #[test]
    fn parses_commands_and_text() {
        assert_eq!(FormInput::parse("hello"), FormInput::Text("hello".into()));
        assert_eq!(FormInput::parse(""), FormInput::Text(String::new()));
        assert_eq!(FormInput::parse("::)"), FormInput::Text(":)".into()));
        assert_eq!(
            FormInput::parse(":subject  Weekly report "),
            FormInput::Subject("Weekly report".into())
        );
        assert_eq!(FormInput::parse(":sender"), FormInput::Sender(String::new()));
        assert_eq!(
            FormInput::parse(":file mail.txt"),
            FormInput::File(PathBuf::from("mail.txt"))
        );
        assert_eq!(FormInput::parse(":file"), FormInput::Unknown("file".into()));
        assert_eq!(FormInput::parse(":submit"), FormInput::Submit);
        assert_eq!(FormInput::parse(":q"), FormInput::Quit);
        assert_eq!(FormInput::parse(":nope"), FormInput::Unknown("nope".into()));
    }

    #[test]
    fn draft_builds_request_and_rejects_blank_content() {
        let mut draft = FormDraft::default();
        assert_eq!(draft.to_request(), Err(ValidationError::EmptyContent));

        draft.push_line("Hi team,");
        draft.push_line("the contract is attached.");
        draft.subject = "Contract".into();
        let request = draft.to_request().unwrap();
        assert_eq!(request.content(), "Hi team,\nthe contract is attached.");
        assert_eq!(request.subject(), Some("Contract"));
        assert_eq!(request.sender(), None);

        draft.load_file(LoadedFile {
            name: "mail.txt".into(),
            text: "replaced".into(),
        });
        assert_eq!(draft.content, "replaced");

        draft.clear();
        assert_eq!(draft, FormDraft::default());
    }

    #[tokio::test]
    async fn session_walkthrough() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/classify"))
            .and(body_json(json!({
                "content": "Please process my refund",
                "subject": "Refund"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(testing::refund_payload()))
            .expect(1)
            .mount(&server)
            .await;
        let session = ClassificationSession::new(
            Arc::new(testing::client_for_server(&server)),
            OverlapPolicy::LastResolved,
        );

        let script = b":submit\n:subject Refund\nPlease process my refund\n:submit\n:reset\n:quit\nignored\n";
        let mut out = Vec::new();
        run_form(&session, &script[..], &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("please enter the email content"));
        assert!(text.contains("Category: PRODUTIVO"));
        assert!(text.ends_with("Form cleared.\n"));
        assert_eq!(session.state(), SessionState::Idle);
    }
}
