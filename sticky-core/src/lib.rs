//! Composable stick figures for building self-similar line drawings.
//!
//! Main components:
//! - [`tree`] — arena-backed point trees.
//! - [`figure`] — stick figures: transforms, attach, splice and copy.
//! - [`geometry`] — pure point maps behind the transforms.
//! - [`traverse`] — edge orders, segment iterators and the renderer seam.
//! - [`patterns`] — recursive fractal generators built on the figure API.
//! - [`config`] — generator parameters.
//! - [`export`] — plain-text segment export.
//! - [`error`] — error type shared by fallible operations.
//! - [`types`] — shared type aliases and IDs.

pub mod config;
pub mod error;
pub mod export;
pub mod figure;
pub mod geometry;
pub mod patterns;
pub mod traverse;
pub mod tree;
pub mod types;

pub use error::{FigureError, FigureResult};
pub use figure::{Donor, Stick, StickFigure};
pub use traverse::{Order, Renderer, Segment};
pub use types::{NodeId, Point, TreeId};
