//! Layout of the table container.
//!
//! This module handles:
//! - The container height supplied by the host (and its resizes)
//! - Row positions inside the container
//! - The container's scroll offset, which is reset on every page jump

mod viewport;

pub use viewport::{Viewport, VIEWPORT_HEIGHT_RATIO};
