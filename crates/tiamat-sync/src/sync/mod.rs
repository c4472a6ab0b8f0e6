//! GPU pipeline synchronization declarations.
//!
//! "Synchronization" here is GPU-timeline synchronization (pipeline stages
//! and queues), not thread synchronization. Everything in this module runs on
//! the single render/control thread; the declarations it produces gate the
//! GPU's own out-of-order execution across stages.
//!
//! Convention:
//! - a producer describes the state it leaves a resource in with a [`SyncPoint`]
//! - a consumer describes the state it needs; the pair forms a barrier
//! - staging bytes are caller-owned; resources only borrow them until the
//!   transfer that reads them has been recorded

mod barrier;
mod flags;
mod group;
mod point;
pub mod policy;
mod resource;
mod staging;

pub use barrier::{BarrierRecorder, ResourceBarrier, TransferRecorder};
pub use flags::{Access, PipelineStages};
pub use group::SyncGroup;
pub use point::SyncPoint;
pub use resource::{DeviceResource, Synchronizable};
pub use staging::StagingRef;
