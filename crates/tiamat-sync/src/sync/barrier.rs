use anyhow::Result;

use super::SyncPoint;

/// A resource memory dependency: the producer's completed state (`src`)
/// gating the consumer's first use (`dst`).
///
/// The barrier itself is just data; a [`BarrierRecorder`] turns it into an
/// API-level pipeline barrier. The `src` point must be established before
/// the dependency gating the consumer is submitted — ordering the surrounding
/// frame code must preserve.
#[derive(Debug, Copy, Clone)]
pub struct ResourceBarrier<H> {
    pub resource: H,
    pub src: SyncPoint,
    pub dst: SyncPoint,
}

impl<H> ResourceBarrier<H> {
    /// Builds a barrier. Debug builds assert that both points name at least
    /// one stage and one access mode; a half-empty point is always a bug.
    #[inline]
    pub fn new(resource: H, src: SyncPoint, dst: SyncPoint) -> Self {
        debug_assert!(src.is_valid(), "source sync point must name a stage and access: {src:?}");
        debug_assert!(dst.is_valid(), "destination sync point must name a stage and access: {dst:?}");
        Self { resource, src, dst }
    }
}

/// Command recorders that can emit pipeline barriers.
///
/// `Handle` is the backend's resource object (a buffer or image). Implicit
/// backends (wgpu) may validate and drop the barrier, relying on their own
/// hazard tracking; explicit backends translate the stage/access masks
/// directly.
pub trait BarrierRecorder {
    type Handle;

    fn resource_barrier(&mut self, barrier: ResourceBarrier<&Self::Handle>);
}

/// A barrier recorder that can also stage bytes and record the copy into a
/// device resource.
///
/// Device-memory allocation sits behind this seam and may fail; everything
/// above it is infallible.
pub trait TransferRecorder: BarrierRecorder {
    fn stage_and_copy(&mut self, dst: &Self::Handle, bytes: &[u8]) -> Result<()>;
}
