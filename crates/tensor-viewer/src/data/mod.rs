// src/data/mod.rs
//! Data handling modules for the tensor viewer.
//!
//! This module provides functionality for:
//! - Turning a parsed tensor dataset into renderer-ready primitives.
//! - Defining the data structures handed to the renderer.

pub mod point_cloud;
pub mod types;

// Re-export commonly used types for convenience.
pub use self::point_cloud::present;
pub use self::types::{BoundingBox, PointVertex, RenderPrimitives};
