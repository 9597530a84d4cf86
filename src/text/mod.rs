//! Text processing shared by both converters: message normalization and
//! title/slug derivation.

pub mod normalize;
pub mod slug;

pub use normalize::normalize;
pub use slug::{UNTITLED_SESSION, derive_title, slugify, summarize};
