mod state;
mod tracker;

pub use state::SessionState;
pub use tracker::ClassificationSession;
