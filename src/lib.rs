pub mod app;
pub mod catalog;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod progress;
pub mod quiz;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
