pub mod env;
mod loader;

pub use env::{ApiConfig, AppConfig, DirectoryConfig, OverlapPolicy};
pub use loader::{load_config, parse_base_url};
