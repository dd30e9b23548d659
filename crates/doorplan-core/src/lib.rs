//! Doorplan Core Types and Definitions
//!
//! This crate provides the foundational types for the Doorplan wiring-diagram
//! generator. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Placed-output primitives consumed by exporters ([`draw`] module)
//! - **Model**: The panel / subpanel / door hierarchy ([`model`] module)

pub mod draw;
pub mod geometry;
pub mod model;
