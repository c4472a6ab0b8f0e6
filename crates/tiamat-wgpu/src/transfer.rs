use anyhow::{Result, ensure};

use tiamat_sync::sync::{BarrierRecorder, ResourceBarrier, TransferRecorder};

use crate::StagingArena;

/// Transfer recorder over a wgpu device and command encoder.
///
/// One `WgpuTransfer` spans one recording pass: copies go through staging
/// buffers acquired from the arena, and the arena keeps them alive until the
/// caller submits the encoder and calls [`StagingArena::recall`].
///
/// Destination buffers need `COPY_DST` usage; wgpu validates that at
/// submission.
pub struct WgpuTransfer<'a> {
    device: &'a wgpu::Device,
    encoder: &'a mut wgpu::CommandEncoder,
    arena: &'a mut StagingArena,
}

impl<'a> WgpuTransfer<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        encoder: &'a mut wgpu::CommandEncoder,
        arena: &'a mut StagingArena,
    ) -> Self {
        Self { device, encoder, arena }
    }
}

impl BarrierRecorder for WgpuTransfer<'_> {
    type Handle = wgpu::Buffer;

    fn resource_barrier(&mut self, barrier: ResourceBarrier<&wgpu::Buffer>) {
        // wgpu derives barriers from its own usage tracking; the declared
        // points are kept for explicit backends and diagnostics only.
        log::trace!("implicit barrier: src={:?} dst={:?}", barrier.src, barrier.dst);
    }
}

impl TransferRecorder for WgpuTransfer<'_> {
    fn stage_and_copy(&mut self, dst: &wgpu::Buffer, bytes: &[u8]) -> Result<()> {
        ensure!(!bytes.is_empty(), "cannot stage an empty byte range");

        // Copy sizes must be 4-byte aligned; the pad region is zeroed so no
        // stale staging bytes land in the destination.
        let padded = (bytes.len() as u64).next_multiple_of(wgpu::COPY_BUFFER_ALIGNMENT);
        ensure!(
            padded <= self.arena.capacity(),
            "staged size {} exceeds arena capacity {} (group max understated?)",
            bytes.len(),
            self.arena.capacity()
        );
        ensure!(
            padded <= dst.size(),
            "staged size {} does not fit destination buffer of {} bytes",
            bytes.len(),
            dst.size()
        );

        let staging = self.arena.acquire(self.device);
        {
            let mut view = staging.slice(..).get_mapped_range_mut();
            view[..bytes.len()].copy_from_slice(bytes);
            view[bytes.len()..padded as usize].fill(0);
        }
        staging.unmap();

        self.encoder.copy_buffer_to_buffer(&staging, 0, dst, 0, padded);
        self.arena.retire(staging);

        Ok(())
    }
}
