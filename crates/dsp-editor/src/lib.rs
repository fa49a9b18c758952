pub mod code;
pub mod config;
pub mod feedback;
pub mod gesture;
pub mod input;
pub mod playground;
pub mod shortcuts;
pub mod toolbar;
pub mod variables;

pub use config::PlaygroundConfig;
pub use playground::Playground;
