use super::{Access, PipelineStages};

/// A stage/access pair: the atomic unit of a GPU synchronization contract.
///
/// A point on the source side of a barrier names the producer's completed
/// state; on the destination side it names the consumer's first use. A point
/// is meaningful only when both fields are non-empty. The type does not
/// reject half-empty points (the default value is the empty "no sync" point);
/// [`ResourceBarrier::new`](super::ResourceBarrier::new) asserts validity in
/// debug builds when a point is actually recorded.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct SyncPoint {
    pub stages: PipelineStages,
    pub access: Access,
}

impl SyncPoint {
    /// The empty point. Recording a barrier with it is a caller error.
    pub const NONE: SyncPoint = SyncPoint {
        stages: PipelineStages::empty(),
        access: Access::empty(),
    };

    #[inline]
    pub const fn new(stages: PipelineStages, access: Access) -> Self {
        Self { stages, access }
    }

    /// True when both fields are empty.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.stages.is_empty() && self.access.is_empty()
    }

    /// True when the point names at least one stage and one access mode.
    #[inline]
    pub const fn is_valid(self) -> bool {
        !self.stages.is_empty() && !self.access.is_empty()
    }
}
