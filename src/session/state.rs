use crate::domain::ClassificationResult;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Loading,
    Success(ClassificationResult),
    Failure(String),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn result(&self) -> Option<&ClassificationResult> {
        match self {
            SessionState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SessionState::Failure(message) => Some(message),
            _ => None,
        }
    }
}
