use super::StagingRef;

/// Capability: a concrete GPU resource type (buffer or image wrapper) that
/// can carry staging bytes across the upload boundary.
///
/// Implementers embed a [`StagingRef`] and expose it through
/// [`staging`](Synchronizable::staging) / [`staging_mut`](Synchronizable::staging_mut);
/// the query triple and `set_sync_data` are provided on top of it. The
/// rendering loop consults [`has_sync_data`](Synchronizable::has_sync_data)
/// once per resource per frame to decide whether an upload command must be
/// recorded this frame.
///
/// Generic code over `T: Synchronizable` monomorphizes against the concrete
/// implementer, so groups and upload passes are always bound to one final
/// resource kind at compile time.
pub trait Synchronizable {
    fn staging(&self) -> &StagingRef;
    fn staging_mut(&mut self) -> &mut StagingRef;

    /// True iff staging bytes are attached (non-null pointer, positive size).
    #[inline]
    fn has_sync_data(&self) -> bool {
        self.staging().has_data()
    }

    /// The attached byte count, exactly as stored. Check
    /// [`has_sync_data`](Self::has_sync_data) first.
    #[inline]
    fn sync_data_size(&self) -> usize {
        self.staging().len()
    }

    /// The attached pointer, exactly as stored. Check
    /// [`has_sync_data`](Self::has_sync_data) first.
    #[inline]
    fn sync_data_ptr(&self) -> *const u8 {
        self.staging().ptr()
    }

    /// Attaches staging bytes, replacing any previous attachment. See
    /// [`StagingRef::set`] for the misuse-shape and lifetime contract.
    #[inline]
    fn set_sync_data(&mut self, data: *const u8, size: usize) {
        self.staging_mut().set(data, size);
    }
}

/// A synchronizable resource with a device-side object to copy into.
///
/// `Handle` is whatever the backend's transfer recorder copies into (for the
/// wgpu backend, `wgpu::Buffer`).
pub trait DeviceResource: Synchronizable {
    type Handle;

    fn handle(&self) -> &Self::Handle;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StorageBuffer {
        staging: StagingRef,
    }

    impl StorageBuffer {
        fn new() -> Self {
            Self { staging: StagingRef::DETACHED }
        }
    }

    impl Synchronizable for StorageBuffer {
        fn staging(&self) -> &StagingRef {
            &self.staging
        }

        fn staging_mut(&mut self) -> &mut StagingRef {
            &mut self.staging
        }
    }

    #[test]
    fn fresh_resource_reports_no_sync_data() {
        let buf = StorageBuffer::new();
        assert!(!buf.has_sync_data());
        assert_eq!(buf.sync_data_size(), 0);
        assert!(buf.sync_data_ptr().is_null());
    }

    #[test]
    fn set_sync_data_round_trips_through_the_queries() {
        let bytes = [9u8; 128];
        let mut buf = StorageBuffer::new();
        buf.set_sync_data(bytes.as_ptr(), bytes.len());

        assert!(buf.has_sync_data());
        assert_eq!(buf.sync_data_size(), 128);
        assert_eq!(buf.sync_data_ptr(), bytes.as_ptr());
    }

    #[test]
    fn queries_track_the_embedded_staging_ref() {
        let bytes = [3u8; 16];
        let mut buf = StorageBuffer::new();
        buf.staging_mut().attach(&bytes);
        assert!(buf.has_sync_data());

        buf.staging_mut().clear();
        assert!(!buf.has_sync_data());
    }
}
