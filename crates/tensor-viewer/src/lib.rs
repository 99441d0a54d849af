// src/lib.rs
//! Sparse tensor point cloud viewer library.
//!
//! This library loads coordinate-format (`.tns`) tensors, keeps the current
//! dataset in an explicit session, and turns it into renderer-ready point
//! buffers and bounding-box geometry for an external 3D scene.

pub mod app;
pub mod config;
pub mod controls;
pub mod data;
pub mod loader;
pub mod render;
pub mod session;
