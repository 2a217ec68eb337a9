pub mod form;
pub mod loader;
pub mod render;

pub use form::run_form;
pub use loader::load_text;
pub use render::{render_json, render_result, spawn_progress};
