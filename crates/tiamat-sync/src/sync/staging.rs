use bytemuck::NoUninit;

/// Non-owning view of caller-managed staging bytes awaiting upload.
///
/// The view stores a raw pointer + length pair and never copies or frees the
/// bytes. The caller owns the memory and must keep it alive and unmodified
/// from the moment it is attached until the transfer command that reads it
/// has been recorded — conservatively, until that transfer has executed.
/// The view is not cleared automatically after an upload; that is the
/// caller's convention (see [`clear`](StagingRef::clear)).
///
/// [`has_data`](StagingRef::has_data) is the safety rule: it is true iff the
/// pointer is non-null AND the length is positive, which protects against
/// partially-initialized state. The literal accessors [`ptr`](StagingRef::ptr)
/// and [`len`](StagingRef::len) return whatever was stored and never fault;
/// check `has_data` first.
///
/// Deliberately `!Send`/`!Sync`: staging lives on the single render/control
/// thread that manages the resource's upload cycle.
#[derive(Debug, Copy, Clone)]
pub struct StagingRef {
    data: *const u8,
    size: usize,
}

impl Default for StagingRef {
    #[inline]
    fn default() -> Self {
        Self::DETACHED
    }
}

impl StagingRef {
    /// The detached state: null pointer, zero length.
    pub const DETACHED: StagingRef = StagingRef {
        data: std::ptr::null(),
        size: 0,
    };

    /// Stores a pointer + length pair, replacing any previous attachment.
    ///
    /// Both values are stored literally. A null pointer with a nonzero size
    /// (or a non-null pointer with zero size) is reported as "no data" by
    /// [`has_data`](Self::has_data) but is not rejected here. Prefer
    /// [`attach`](Self::attach), which cannot produce those shapes.
    #[inline]
    pub fn set(&mut self, data: *const u8, size: usize) {
        if data.is_null() && size > 0 {
            log::warn!("staging set with null data and size {size}; reads as no data");
        }
        self.data = data;
        self.size = size;
    }

    /// Attaches a borrowed byte slice. See the type docs for the lifetime
    /// contract: the slice's backing storage must outlive the upload.
    #[inline]
    pub fn attach(&mut self, bytes: &[u8]) {
        self.set(bytes.as_ptr(), bytes.len());
    }

    /// Attaches the bytes of a plain-old-data value (uniform blocks, vertex
    /// data). Same lifetime contract as [`attach`](Self::attach).
    #[inline]
    pub fn attach_pod<T: NoUninit>(&mut self, value: &T) {
        self.attach(bytemuck::bytes_of(value));
    }

    /// Resets to the detached state. Callers do this after the transfer that
    /// consumed the bytes has been recorded.
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::DETACHED;
    }

    /// True iff the pointer is non-null AND the length is positive.
    #[inline]
    pub fn has_data(&self) -> bool {
        !self.data.is_null() && self.size > 0
    }

    /// The stored pointer, exactly as set. Null when detached.
    #[inline]
    pub fn ptr(&self) -> *const u8 {
        self.data
    }

    /// The stored length in bytes, exactly as set. Zero when detached.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The recording-time read.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that [`has_data`](Self::has_data) is true
    /// and that the attached bytes are still alive and unmodified (the
    /// lifetime contract in the type docs). The returned slice borrows
    /// `self` but the backing storage is caller-owned.
    #[inline]
    pub unsafe fn bytes(&self) -> &[u8] {
        debug_assert!(self.has_data(), "bytes() called on detached staging");
        unsafe { std::slice::from_raw_parts(self.data, self.size) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── attach / query round-trip ─────────────────────────────────────────

    #[test]
    fn fresh_ref_has_no_data() {
        let s = StagingRef::default();
        assert!(!s.has_data());
        assert!(s.ptr().is_null());
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn set_then_query_returns_stored_values() {
        let bytes = [1u8, 2, 3, 4];
        let mut s = StagingRef::default();
        s.set(bytes.as_ptr(), bytes.len());

        assert!(s.has_data());
        assert_eq!(s.ptr(), bytes.as_ptr());
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn attach_slice_round_trips() {
        let bytes = vec![0u8; 256];
        let mut s = StagingRef::default();
        s.attach(&bytes);

        assert!(s.has_data());
        assert_eq!(s.len(), 256);
        assert_eq!(unsafe { s.bytes() }, bytes.as_slice());
    }

    #[test]
    fn attach_pod_stages_the_value_bytes() {
        #[repr(C)]
        #[derive(Copy, Clone, bytemuck::NoUninit)]
        struct CameraBlock {
            view_proj: [f32; 16],
            exposure: f32,
            _pad: [f32; 3],
        }

        let block = CameraBlock {
            view_proj: [0.0; 16],
            exposure: 1.0,
            _pad: [0.0; 3],
        };
        let mut s = StagingRef::default();
        s.attach_pod(&block);

        assert!(s.has_data());
        assert_eq!(s.len(), std::mem::size_of::<CameraBlock>());
        assert_eq!(s.ptr(), (&raw const block).cast());
    }

    // ── normalization of misuse shapes ────────────────────────────────────

    #[test]
    fn null_and_zero_reads_as_no_data() {
        let mut s = StagingRef::default();
        s.set(std::ptr::null(), 0);
        assert!(!s.has_data());
    }

    #[test]
    fn null_with_nonzero_size_reads_as_no_data() {
        let mut s = StagingRef::default();
        s.set(std::ptr::null(), 64);

        // The predicate normalizes; the accessors still return what was stored.
        assert!(!s.has_data());
        assert!(s.ptr().is_null());
        assert_eq!(s.len(), 64);
    }

    #[test]
    fn nonnull_with_zero_size_reads_as_no_data() {
        let bytes = [7u8; 8];
        let mut s = StagingRef::default();
        s.set(bytes.as_ptr(), 0);

        assert!(!s.has_data());
        assert_eq!(s.ptr(), bytes.as_ptr());
        assert_eq!(s.len(), 0);
    }

    // ── overwrite / clear ─────────────────────────────────────────────────

    #[test]
    fn second_set_replaces_the_first() {
        let first = [1u8; 16];
        let second = [2u8; 32];
        let mut s = StagingRef::default();

        s.attach(&first);
        s.attach(&second);

        // No accumulation: only the second attachment is observable.
        assert_eq!(s.ptr(), second.as_ptr());
        assert_eq!(s.len(), 32);
    }

    #[test]
    fn clear_detaches() {
        let bytes = [0u8; 16];
        let mut s = StagingRef::default();
        s.attach(&bytes);
        s.clear();

        assert!(!s.has_data());
        assert!(s.ptr().is_null());
        assert_eq!(s.len(), 0);
    }
}
