//! Transcript rendering and persistence.

pub mod persist;
pub mod render;

pub use persist::write_session;
pub use render::{output_filename, render_session};
