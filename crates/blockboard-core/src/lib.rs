//! # Blockboard Core
//!
//! Core types shared by every Blockboard crate:
//! - Axis-aligned geometry (`Point`, `Bounds`)
//! - The layout error taxonomy and its `Result` alias

pub mod error;
pub mod geometry;

pub use error::{LayoutError, Result};
pub use geometry::{Bounds, Point};
