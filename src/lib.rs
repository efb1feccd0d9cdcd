//! Analog clock, digital clock and date actions for deck controllers.
//!
//! The analog face is drawn by [`render::ClockFaceRenderer`], a pure function
//! of its [`config::ClockFaceConfig`] and the time passed in. The actions in
//! [`actions`] wrap it (and the label-based clocks) behind the host lifecycle
//! hooks, and [`plugin::ClocksPlugin`] registers them.

pub mod actions;
pub mod config;
pub mod core;
pub mod error;
pub mod locale;
pub mod plugin;
pub mod render;
pub mod services;

pub use error::{Error, Result};
