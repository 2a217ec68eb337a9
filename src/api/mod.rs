mod client;
mod error;
mod protocol;

pub use client::EmailClassifierClient;
pub use protocol::TRANSPORT_FAILURE_MESSAGE;
