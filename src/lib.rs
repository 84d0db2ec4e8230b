// Library surface for the binary, headless integration tests and reuse.
pub mod app;
pub mod background;
pub mod config;
pub mod input;
pub mod judge;
pub mod runtime;
pub mod score;
pub mod session;
pub mod spawner;
pub mod target;
pub mod ui;
