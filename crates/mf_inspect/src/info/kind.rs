use core::fmt;

/// An enumeration of the "kinds" of an inspected value.
///
/// Each kind corresponds to one variant of [`ValueRef`].
///
/// [`ValueRef`]: crate::ops::ValueRef
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Aggregate with named, ordered fields.
    Struct,
    /// Ordered, indexable collection.
    Sequence,
    /// Optional or owning pointer, transparent to traversal.
    Reference,
    /// Associative container, never traversed into.
    Map,
    /// String, bool, char, integer or float.
    Scalar,
}

impl ValueKind {
    /// Returns `true` for kinds that have no traversable sub-fields.
    ///
    /// `Map` and `Scalar` are leaves, `Struct` and `Sequence` are not.
    /// `Reference` is resolved before classification and is never a leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use mf_inspect::info::ValueKind;
    ///
    /// assert!(ValueKind::Map.is_leaf());
    /// assert!(!ValueKind::Sequence.is_leaf());
    /// ```
    #[inline]
    pub const fn is_leaf(self) -> bool {
        matches!(self, Self::Map | Self::Scalar)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::Sequence => f.pad("Sequence"),
            Self::Reference => f.pad("Reference"),
            Self::Map => f.pad("Map"),
            Self::Scalar => f.pad("Scalar"),
        }
    }
}
