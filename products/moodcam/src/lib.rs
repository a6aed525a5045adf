pub mod app;
pub mod config;
pub mod server;
pub mod setup;

pub use app::MoodApp;
pub use config::{ConfigError, ServerConfig, SourceKind};
pub use server::Server;
pub use setup::{load_classifier, open_camera};
