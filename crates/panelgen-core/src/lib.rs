//! Core types shared by the panelgen crates.
//!
//! - [`geometry`] - points and sizes in drawing space
//! - [`units`] - physical-unit to pixel conversion
//! - [`shape`] - shape records produced by the drawing reader
//! - [`widget`] - target widget kinds

pub mod geometry;
pub mod shape;
pub mod units;
pub mod widget;
