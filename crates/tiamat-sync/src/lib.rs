//! Tiamat GPU synchronization crate.
//!
//! This crate owns the GPU-timeline synchronization pieces used by higher
//! layers: stage/access sync points, the staging-data resource capability,
//! and the upload recording contract consumed by rendering backends.

pub mod logging;
pub mod sync;
pub mod upload;
