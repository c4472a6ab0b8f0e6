//! wgpu transfer backend for the Tiamat synchronization layer.
//!
//! Implements the `TransferRecorder` contract over a `wgpu::Device` +
//! `wgpu::CommandEncoder`. wgpu tracks resource hazards internally, so
//! explicit barriers recorded through this backend are validated and then
//! dropped; backends for explicit APIs translate the stage/access masks
//! for real.

mod arena;
mod transfer;

pub use arena::StagingArena;
pub use transfer::WgpuTransfer;
