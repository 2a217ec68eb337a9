pub mod email;
pub mod types;

pub use email::{ClassificationRequest, ValidationError};
pub use types::{ApiErrorBody, Category, ClassificationResult, EmailAnalysis};
