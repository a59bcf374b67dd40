//! # Controllers Module
//!
//! The event loop that feeds key and resize events into the view model.

pub mod app_controller;

pub use app_controller::AppController;
