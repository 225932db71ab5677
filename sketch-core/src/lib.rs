//! Core logic for two small canvas sketches, independent of any GUI toolkit.
//!
//! Main components:
//! - [`fractal`] — recursive fractal tree and its depth-driven sketch.
//! - [`circles`] — two-circle drag state machine with a distance label.
//! - [`canvas`] — retained, tag-addressed drawing surface both sketches draw on.
//! - [`config`] — tunable parameters and their validation.
//! - [`error`] — error types.
//! - [`types`] — shared type aliases and colours.

pub mod canvas;
pub mod circles;
pub mod config;
pub mod error;
pub mod fractal;
pub mod types;
