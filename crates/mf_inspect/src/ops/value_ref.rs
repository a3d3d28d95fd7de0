use core::fmt;

use crate::Inspect;
use crate::info::{TypeShape, ValueKind};
use crate::ops::{MapView, SequenceView, StructView};

// -----------------------------------------------------------------------------
// ValueRef

/// An immutable view of an inspected value, one variant per [`ValueKind`].
///
/// Obtained through [`Inspect::inspect_ref`].
pub enum ValueRef<'a> {
    Struct(&'a dyn StructView),
    Sequence(&'a dyn SequenceView),
    Reference(RefView<'a>),
    Map(&'a dyn MapView),
    Scalar(ScalarRef<'a>),
}

impl ValueRef<'_> {
    /// Returns the [`ValueKind`] of this view.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Struct(_) => ValueKind::Struct,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Reference(_) => ValueKind::Reference,
            Self::Map(_) => ValueKind::Map,
            Self::Scalar(_) => ValueKind::Scalar,
        }
    }
}

// -----------------------------------------------------------------------------
// RefView

/// A view of a reference: an optional target plus the static shape of the
/// target, which stays available when the reference is nil.
#[derive(Clone, Copy)]
pub struct RefView<'a> {
    target: Option<&'a dyn Inspect>,
    pointee: TypeShape,
}

impl<'a> RefView<'a> {
    #[inline]
    pub fn new(target: Option<&'a dyn Inspect>, pointee: TypeShape) -> Self {
        Self { target, pointee }
    }

    /// Returns the referenced value, `None` for a nil reference.
    #[inline]
    pub fn target(&self) -> Option<&'a dyn Inspect> {
        self.target
    }

    /// Returns the static shape of the referenced type.
    #[inline]
    pub fn pointee(&self) -> TypeShape {
        self.pointee
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        self.target.is_none()
    }
}

// -----------------------------------------------------------------------------
// ScalarRef

/// A borrowed primitive value.
///
/// Narrow integers are widened to `I64`/`U64`, 128-bit integers keep their
/// own variants, floats keep their width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarRef<'a> {
    Bool(bool),
    Char(char),
    I64(i64),
    U64(u64),
    I128(i128),
    U128(u128),
    F32(f32),
    F64(f64),
    Str(&'a str),
}

impl<'a> ScalarRef<'a> {
    /// Returns the string slice for `Str`, `None` otherwise.
    #[inline]
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => fmt::Display::fmt(v, f),
            Self::Char(v) => fmt::Display::fmt(v, f),
            Self::I64(v) => fmt::Display::fmt(v, f),
            Self::U64(v) => fmt::Display::fmt(v, f),
            Self::I128(v) => fmt::Display::fmt(v, f),
            Self::U128(v) => fmt::Display::fmt(v, f),
            Self::F32(v) => fmt::Display::fmt(v, f),
            Self::F64(v) => fmt::Display::fmt(v, f),
            Self::Str(v) => fmt::Display::fmt(v, f),
        }
    }
}
