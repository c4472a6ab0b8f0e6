//! Per-frame upload orchestration.
//!
//! Walks a [`SyncGroup`](crate::sync::SyncGroup), consults the staging
//! queries once per member, and records copy + barrier commands through a
//! [`TransferRecorder`](crate::sync::TransferRecorder). Staging refs are not
//! cleared here; the caller clears them once the recorded transfer is safely
//! past the point of consumption.

mod pass;

pub use pass::{UploadStats, record_uploads};
