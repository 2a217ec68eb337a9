use thiserror::Error;

use super::protocol::TRANSPORT_FAILURE_MESSAGE;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("{message}")]
    Service { status: u16, message: String },
    #[error("{}", TRANSPORT_FAILURE_MESSAGE)]
    Transport(#[source] reqwest::Error),
    #[error("invalid response from classification API: {0}")]
    Decode(#[source] reqwest::Error),
}

impl RemoteError {
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::Service { status, .. } => Some(*status),
            RemoteError::Transport(_) | RemoteError::Decode(_) => None,
        }
    }
}
