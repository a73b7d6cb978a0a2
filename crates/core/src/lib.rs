//! Domain primitives shared by the persistence and HTTP layers.
//!
//! Nothing in this crate performs I/O: it holds the id/timestamp aliases,
//! the domain error type, the access rules that decide who may see or change
//! what, and image upload validation.

pub mod access;
pub mod error;
pub mod images;
pub mod types;
