use std::sync::{Arc, Mutex, PoisonError};

use tiamat_sync::sync::{SyncGroup, Synchronizable};

/// Pool of equally-sized, mappable staging buffers for batched uploads.
///
/// Capacity comes from [`SyncGroup::max_sync_size`], so one arena serves a
/// whole group: every staged member fits in any arena buffer. Buffers cycle
/// through three states:
///
/// 1. free and mapped — ready for [`acquire`](StagingArena::acquire)
/// 2. retired — copy recorded, held alive until the encoder is submitted
/// 3. recalled — re-mapping in flight; returns to the free list once the
///    device signals the map (after a poll/maintain)
///
/// Call [`recall`](StagingArena::recall) after submitting the encoder that
/// used the retired buffers.
pub struct StagingArena {
    capacity: u64,
    free: Arc<Mutex<Vec<Arc<wgpu::Buffer>>>>,
    in_flight: Vec<Arc<wgpu::Buffer>>,
}

impl StagingArena {
    /// Creates an arena whose buffers hold `capacity` bytes, rounded up to
    /// the copy alignment. No buffers are allocated until first acquire.
    pub fn new(capacity: u64) -> Self {
        Self {
            capacity: capacity.next_multiple_of(wgpu::COPY_BUFFER_ALIGNMENT),
            free: Arc::new(Mutex::new(Vec::new())),
            in_flight: Vec::new(),
        }
    }

    /// Sizes the arena for a group: one shared allocation size that fits the
    /// largest staged member.
    pub fn for_group<T: Synchronizable>(group: &SyncGroup<'_, T>) -> Self {
        Self::new(group.max_sync_size() as u64)
    }

    /// Buffer size in bytes (copy-aligned).
    #[inline]
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Buffers currently mapped and ready to acquire.
    pub fn ready(&self) -> usize {
        self.lock_free().len()
    }

    /// Returns a mapped staging buffer, reusing a recalled one when available.
    pub fn acquire(&mut self, device: &wgpu::Device) -> Arc<wgpu::Buffer> {
        debug_assert!(self.capacity > 0, "acquire on a zero-capacity arena");

        if let Some(buffer) = self.lock_free().pop() {
            return buffer;
        }

        Arc::new(device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("tiamat staging"),
            size: self.capacity,
            usage: wgpu::BufferUsages::MAP_WRITE | wgpu::BufferUsages::COPY_SRC,
            mapped_at_creation: true,
        }))
    }

    /// Parks a buffer whose copy has been recorded. The arena keeps it alive
    /// until [`recall`](Self::recall); dropping it earlier would invalidate
    /// the recorded copy.
    pub fn retire(&mut self, buffer: Arc<wgpu::Buffer>) {
        debug_assert_eq!(buffer.size(), self.capacity);
        self.in_flight.push(buffer);
    }

    /// Starts re-mapping all retired buffers. Call after submitting the
    /// encoder that recorded their copies; each buffer rejoins the free list
    /// once the device completes the map.
    pub fn recall(&mut self) {
        let recalled = self.in_flight.len();
        for buffer in self.in_flight.drain(..) {
            let free = Arc::clone(&self.free);
            let returned = Arc::clone(&buffer);
            buffer.slice(..).map_async(wgpu::MapMode::Write, move |result| match result {
                Ok(()) => {
                    free.lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .push(returned);
                }
                Err(err) => {
                    log::warn!("staging buffer remap failed, dropping it: {err}");
                }
            });
        }
        if recalled > 0 {
            log::trace!("recalled {recalled} staging buffers");
        }
    }

    fn lock_free(&self) -> std::sync::MutexGuard<'_, Vec<Arc<wgpu::Buffer>>> {
        self.free.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
