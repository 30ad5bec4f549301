pub mod config;
pub mod engine;
pub mod error;
pub mod fruit;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod timer;
pub mod ui;
pub mod view;
