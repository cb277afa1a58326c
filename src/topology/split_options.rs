use crate::math::Real;

/// The default angular tolerance, in not-atan2 units, below which two triangles sharing
/// an edge are considered to be facing each other.
pub const DEFAULT_PARALLEL_EPSILON: Real = 1.0e-3;

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// Controls how the continuing triangle of a non-manifold edge is selected.
pub struct SplitFlags(u8);

bitflags::bitflags! {
    impl SplitFlags: u8 {
        /// If set, the parallel tolerance is multiplied by the length of the shared edge.
        const SCALE_EPSILON_BY_EDGE_LENGTH = 1;
    }
}

/// Parameters of the body splitting.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitOptions {
    /// A candidate triangle with a not-atan2 angle greater than `PI - parallel_epsilon`
    /// relative to the current triangle is almost facing it. Such a candidate is assumed to
    /// belong to another body merely touching this one, and is ranked last.
    pub parallel_epsilon: Real,
    /// Additional flags.
    pub flags: SplitFlags,
}

impl Default for SplitOptions {
    fn default() -> Self {
        SplitOptions {
            parallel_epsilon: DEFAULT_PARALLEL_EPSILON,
            flags: SplitFlags::empty(),
        }
    }
}

impl SplitOptions {
    /// Options with the given parallel tolerance and no flags.
    pub fn with_parallel_epsilon(parallel_epsilon: Real) -> Self {
        SplitOptions {
            parallel_epsilon,
            ..Default::default()
        }
    }

    /// The tolerance to use for a shared edge of length `edge_length`.
    #[inline]
    pub fn effective_epsilon(&self, edge_length: Real) -> Real {
        if self.flags.contains(SplitFlags::SCALE_EPSILON_BY_EDGE_LENGTH) {
            self.parallel_epsilon * edge_length
        } else {
            self.parallel_epsilon
        }
    }
}
