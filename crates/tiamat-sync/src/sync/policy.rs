//! Named sync points for well-known transition patterns.
//!
//! Multi-stage and multi-queue transitions keep recurring with the same
//! stage/access combinations. Each idiom gets a single documented name here
//! instead of being re-derived at every call site, which is the main defense
//! against silently-wrong barrier masks. All presets are pure `const fn`s
//! returning a fixed [`SyncPoint`]; adding a pattern means adding a function.

use super::{Access, PipelineStages, SyncPoint};

/// Host wrote staging memory; source side of the upload barrier.
#[inline]
pub const fn host_staging_write() -> SyncPoint {
    SyncPoint::new(PipelineStages::HOST, Access::HOST_WRITE)
}

/// Storage-buffer transfer ownership release, source side: the transfer
/// stage finished writing and gives the buffer up.
#[inline]
pub const fn storage_transfer_release() -> SyncPoint {
    SyncPoint::new(PipelineStages::TRANSFER, Access::TRANSFER_WRITE)
}

/// Storage-buffer transfer ownership acquire, compute destination: a compute
/// stage takes the buffer over for shader reads.
#[inline]
pub const fn storage_compute_acquire() -> SyncPoint {
    SyncPoint::new(PipelineStages::COMPUTE_SHADER, Access::SHADER_READ)
}

/// Uniform data becomes visible to vertex and fragment shading.
#[inline]
pub const fn uniform_upload_target() -> SyncPoint {
    SyncPoint::new(
        PipelineStages::VERTEX_SHADER.union(PipelineStages::FRAGMENT_SHADER),
        Access::UNIFORM_READ,
    )
}

/// Vertex attributes become readable by vertex input.
#[inline]
pub const fn vertex_upload_target() -> SyncPoint {
    SyncPoint::new(PipelineStages::VERTEX_INPUT, Access::VERTEX_ATTRIBUTE_READ)
}

/// Index data becomes readable by vertex input.
#[inline]
pub const fn index_upload_target() -> SyncPoint {
    SyncPoint::new(PipelineStages::VERTEX_INPUT, Access::INDEX_READ)
}

/// Indirect draw arguments become readable by command generation.
#[inline]
pub const fn indirect_upload_target() -> SyncPoint {
    SyncPoint::new(PipelineStages::DRAW_INDIRECT, Access::INDIRECT_COMMAND_READ)
}
