//! Data types for the paginated table.

mod cell;
mod config;

pub use cell::*;
pub use config::*;
