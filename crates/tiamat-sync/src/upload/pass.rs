use anyhow::{Context, Result};

use crate::sync::{DeviceResource, ResourceBarrier, SyncGroup, SyncPoint, TransferRecorder};

/// Summary of one recorded upload pass.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct UploadStats {
    /// Members whose bytes were staged and copied this pass.
    pub uploaded: usize,
    /// Members skipped because they had no sync data attached.
    pub skipped: usize,
    /// Total bytes copied.
    pub bytes: usize,
    /// Largest single copy; matches the group's `max_sync_size()` when every
    /// staged member was uploaded.
    pub largest: usize,
}

/// Records staged uploads for every member of `group` that currently has
/// sync data, then declares the `release` → `acquire` dependency for it.
///
/// Each member is queried exactly once. Members without data are skipped
/// entirely. Barriers are emitted per resource, after its copy, so the
/// producer state (`release`, typically a transfer write) is in place before
/// the consumer point (`acquire`) is gated on it. Pick the pair from
/// [`sync::policy`](crate::sync::policy) rather than building masks inline.
///
/// Staging refs are left attached; clearing them after submission is the
/// caller's convention.
pub fn record_uploads<T, R>(
    group: &SyncGroup<'_, T>,
    recorder: &mut R,
    release: SyncPoint,
    acquire: SyncPoint,
) -> Result<UploadStats>
where
    T: DeviceResource,
    R: TransferRecorder<Handle = T::Handle>,
{
    let mut stats = UploadStats::default();

    for member in group.iter() {
        if !member.has_sync_data() {
            stats.skipped += 1;
            continue;
        }

        // Recording-time read; the staging lifetime contract guarantees the
        // bytes are still alive here.
        let bytes = unsafe { member.staging().bytes() };

        recorder
            .stage_and_copy(member.handle(), bytes)
            .with_context(|| format!("staging {} bytes for upload", bytes.len()))?;
        recorder.resource_barrier(ResourceBarrier::new(member.handle(), release, acquire));

        stats.uploaded += 1;
        stats.bytes += bytes.len();
        stats.largest = stats.largest.max(bytes.len());
    }

    log::debug!(
        "upload pass: {} uploaded, {} skipped, {} bytes",
        stats.uploaded,
        stats.skipped,
        stats.bytes
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::{BarrierRecorder, StagingRef, Synchronizable, policy};

    struct GpuBuffer {
        handle: u32,
        staging: StagingRef,
    }

    impl GpuBuffer {
        fn new(handle: u32) -> Self {
            Self { handle, staging: StagingRef::DETACHED }
        }

        fn staged(handle: u32, bytes: &[u8]) -> Self {
            let mut buf = Self::new(handle);
            buf.staging.attach(bytes);
            buf
        }
    }

    impl Synchronizable for GpuBuffer {
        fn staging(&self) -> &StagingRef {
            &self.staging
        }

        fn staging_mut(&mut self) -> &mut StagingRef {
            &mut self.staging
        }
    }

    impl DeviceResource for GpuBuffer {
        type Handle = u32;

        fn handle(&self) -> &u32 {
            &self.handle
        }
    }

    #[derive(Default)]
    struct MockRecorder {
        copies: Vec<(u32, Vec<u8>)>,
        barriers: Vec<(u32, SyncPoint, SyncPoint)>,
        fail_on: Option<u32>,
    }

    impl BarrierRecorder for MockRecorder {
        type Handle = u32;

        fn resource_barrier(&mut self, barrier: ResourceBarrier<&u32>) {
            self.barriers.push((*barrier.resource, barrier.src, barrier.dst));
        }
    }

    impl TransferRecorder for MockRecorder {
        fn stage_and_copy(&mut self, dst: &u32, bytes: &[u8]) -> Result<()> {
            if self.fail_on == Some(*dst) {
                anyhow::bail!("staging allocation failed");
            }
            self.copies.push((*dst, bytes.to_vec()));
            Ok(())
        }
    }

    fn points() -> (SyncPoint, SyncPoint) {
        (policy::storage_transfer_release(), policy::storage_compute_acquire())
    }

    // ── recording ─────────────────────────────────────────────────────────

    #[test]
    fn staged_members_are_copied_and_fenced() {
        let data_a = vec![1u8; 256];
        let data_b = vec![2u8; 1024];

        let r1 = GpuBuffer::staged(1, &data_a);
        let r2 = GpuBuffer::new(2);
        let r3 = GpuBuffer::staged(3, &data_b);

        let group: SyncGroup<'_, GpuBuffer> = [&r1, &r2, &r3].into_iter().collect();
        let mut recorder = MockRecorder::default();
        let (release, acquire) = points();

        let stats = record_uploads(&group, &mut recorder, release, acquire).unwrap();

        assert_eq!(stats.uploaded, 2);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.bytes, 1280);
        assert_eq!(stats.largest, group.max_sync_size());

        assert_eq!(recorder.copies.len(), 2);
        assert_eq!(recorder.copies[0], (1, data_a));
        assert_eq!(recorder.copies[1], (3, data_b));

        // One barrier per uploaded resource, carrying the chosen pair.
        assert_eq!(recorder.barriers.len(), 2);
        for (_, src, dst) in &recorder.barriers {
            assert_eq!(*src, release);
            assert_eq!(*dst, acquire);
        }
    }

    #[test]
    fn empty_group_records_nothing() {
        let group: SyncGroup<'_, GpuBuffer> = SyncGroup::new();
        let mut recorder = MockRecorder::default();
        let (release, acquire) = points();

        let stats = record_uploads(&group, &mut recorder, release, acquire).unwrap();

        assert_eq!(stats, UploadStats::default());
        assert!(recorder.copies.is_empty());
        assert!(recorder.barriers.is_empty());
    }

    #[test]
    fn pass_does_not_clear_staging_refs() {
        let data = vec![5u8; 64];
        let r = GpuBuffer::staged(1, &data);

        let group: SyncGroup<'_, GpuBuffer> = [&r].into_iter().collect();
        let mut recorder = MockRecorder::default();
        let (release, acquire) = points();

        record_uploads(&group, &mut recorder, release, acquire).unwrap();

        // Clearing after the transfer is the caller's call, not ours.
        assert!(r.has_sync_data());
        assert_eq!(r.sync_data_size(), 64);
    }

    // ── failure propagation ───────────────────────────────────────────────

    #[test]
    fn backend_failure_propagates_with_context() {
        let data = vec![0u8; 16];
        let r1 = GpuBuffer::staged(1, &data);
        let r2 = GpuBuffer::staged(2, &data);

        let group: SyncGroup<'_, GpuBuffer> = [&r1, &r2].into_iter().collect();
        let mut recorder = MockRecorder { fail_on: Some(2), ..Default::default() };
        let (release, acquire) = points();

        let err = record_uploads(&group, &mut recorder, release, acquire).unwrap_err();
        assert!(format!("{err:#}").contains("staging 16 bytes"));

        // The first member was recorded before the failure; no barrier was
        // emitted for the failed one.
        assert_eq!(recorder.copies.len(), 1);
        assert_eq!(recorder.barriers.len(), 1);
    }
}
