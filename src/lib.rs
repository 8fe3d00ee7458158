// TaskLog - In-memory task logger with render notifications

pub mod config;
pub mod input;
pub mod render;
pub mod session;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use config::Config;
pub use render::{Render, TextRenderer};
pub use session::{Command, Outcome, Session};
pub use store::TaskStore;
pub use task::Task;
