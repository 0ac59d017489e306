pub mod app;
pub mod config;
pub mod error;
pub mod feedback;
pub mod game;
pub mod input;
pub mod keyboard;
pub mod layout;
pub mod logging;
pub mod render;
