//! Render model for the presentation layer.
//!
//! The crate does not draw anything itself. It hands the host a `PageView`
//! describing the visible rows, the page buttons of the current group, which
//! arrow controls are enabled, and the container geometry.

mod view;

pub use view::{NavControls, PageButton, PageView};
