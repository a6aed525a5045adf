pub mod logging;
pub mod rect;
pub mod vec2;

pub use logging::{FileLogger, StdoutLogger, init_file_logger, init_stdout_logger};
pub use rect::Rect;
pub use vec2::Vec2;

// downstream crates log through mood_base::log
pub use log;
