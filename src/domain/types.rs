use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[serde(alias = "Produtivo")]
    Produtivo,
    #[serde(alias = "Improdutivo")]
    Improdutivo,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Produtivo => "produtivo",
            Category::Improdutivo => "improdutivo",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailAnalysis {
    pub reasoning: String,
    pub keywords: Vec<String>,
    pub content_length: u64,
    pub has_subject: bool,
    pub sender: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: Category,
    pub confidence: f64,
    pub suggested_response: String,
    pub analysis: EmailAnalysis,
    /// Seconds.
    pub processing_time: f64,
}

// `detail` is an array of objects for request validation errors.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: serde_json::Value,
}

impl ApiErrorBody {
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            serde_json::Value::Null => None,
            serde_json::Value::String(text) if text.trim().is_empty() => None,
            serde_json::Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }
}
