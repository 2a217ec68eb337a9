use reqwest::Client;
use serde_json::{json, Value};
use url::Url;
use wiremock::MockServer;

use crate::{
    api::EmailClassifierClient,
    config::ApiConfig,
    domain::{Category, ClassificationRequest, ClassificationResult, EmailAnalysis},
};

pub fn refund_payload() -> Value {
    json!({
        "category": "produtivo",
        "confidence": 0.9,
        "suggested_response": "Recebemos sua solicitação de reembolso e ela será analisada.",
        "analysis": {
            "reasoning": "Customer asks for a refund",
            "keywords": ["refund"],
            "content_length": 24,
            "has_subject": false,
            "sender": ""
        },
        "processing_time": 0.12
    })
}

pub fn refund_result() -> ClassificationResult {
    ClassificationResult {
        category: Category::Produtivo,
        confidence: 0.9,
        suggested_response: "Recebemos sua solicitação de reembolso e ela será analisada."
            .to_string(),
        analysis: EmailAnalysis {
            reasoning: "Customer asks for a refund".to_string(),
            keywords: vec!["refund".to_string()],
            content_length: 24,
            has_subject: false,
            sender: String::new(),
        },
        processing_time: 0.12,
    }
}

pub fn spam_payload() -> Value {
    json!({
        "category": "improdutivo",
        "confidence": 0.75,
        "suggested_response": "Obrigado pela mensagem.",
        "analysis": {
            "reasoning": "Chain letter",
            "keywords": ["forward", "luck"],
            "content_length": 2,
            "has_subject": false,
            "sender": "unknown"
        },
        "processing_time": 0.05
    })
}

pub fn request(content: &str) -> ClassificationRequest {
    ClassificationRequest::new(content, None, None).unwrap()
}

pub fn client_for(base: &str) -> EmailClassifierClient {
    let config = ApiConfig {
        base_url: Url::parse(base).unwrap(),
    };
    EmailClassifierClient::new(Client::new(), &config).unwrap()
}

pub fn client_for_server(server: &MockServer) -> EmailClassifierClient {
    client_for(&server.uri())
}

/// Base URL of a local port with nothing listening on it.
pub fn unreachable_base() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
