//! qcircuit Core Types and Definitions
//!
//! This crate provides the foundational types shared by every stage of the
//! qcircuit toolchain. It includes:
//!
//! - **Geometry**: Points, sizes and bounds in picture units ([`geometry`] module)
//! - **Grid**: The validated symbol grid and its cell alphabet ([`grid`] module)
//! - **Primitives**: Named drawing boxes and their placements ([`primitive`] module)
//! - **Vocabulary**: The symbol-to-primitive dispatch table ([`vocabulary`] module)

pub mod geometry;
pub mod grid;
pub mod primitive;
pub mod vocabulary;
