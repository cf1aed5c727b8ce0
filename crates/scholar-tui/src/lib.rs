pub mod app;
pub mod backend;
pub mod config;
pub mod constants;
pub mod handlers;
pub mod logger;
pub mod services;
pub mod settings;
pub mod types;
pub mod ui;

pub use app::App;
