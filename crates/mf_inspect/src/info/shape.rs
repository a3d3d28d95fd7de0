use core::any::type_name;

use crate::info::ValueKind;

// -----------------------------------------------------------------------------
// TypeShape

/// Static description of an inspectable type.
///
/// The effective kind is what remains after every reference layer has been
/// removed, so it is known even for a nil reference. This is what lets a
/// `None` field of type `Option<u8>` still be classified as a leaf.
///
/// # Examples
///
/// ```
/// use mf_inspect::info::{Typed, ValueKind};
///
/// let shape = <Option<Box<u8>>>::type_shape();
/// assert_eq!(shape.kind(), ValueKind::Reference);
/// assert_eq!(shape.effective_kind(), ValueKind::Scalar);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeShape {
    type_name: &'static str,
    kind: ValueKind,
    effective_kind: ValueKind,
}

impl TypeShape {
    /// Creates the shape of a non-reference type `T`.
    ///
    /// Reference types must use [`TypeShape::reference_to`] instead.
    #[inline]
    pub fn of<T: ?Sized>(kind: ValueKind) -> Self {
        debug_assert!(
            kind != ValueKind::Reference,
            "use `TypeShape::reference_to` for reference types"
        );
        Self {
            type_name: type_name::<T>(),
            kind,
            effective_kind: kind,
        }
    }

    /// Creates the shape of a reference type `T` pointing at `pointee`.
    #[inline]
    pub fn reference_to<T: ?Sized>(pointee: TypeShape) -> Self {
        Self {
            type_name: type_name::<T>(),
            kind: ValueKind::Reference,
            effective_kind: pointee.effective_kind,
        }
    }

    /// Returns the full type name, as reported by [`core::any::type_name`].
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the declared kind.
    #[inline]
    pub const fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Returns the kind left after peeling every reference layer.
    ///
    /// Never [`ValueKind::Reference`].
    #[inline]
    pub const fn effective_kind(&self) -> ValueKind {
        self.effective_kind
    }
}

// -----------------------------------------------------------------------------
// Typed

/// A trait for obtaining the static [`TypeShape`] of a type.
///
/// Implemented by `#[derive(Inspect)]` and by every built-in mapping.
pub trait Typed {
    /// Returns the shape of `Self`.
    fn type_shape() -> TypeShape;
}

/// Provide dynamic dispatch for [`Typed`].
///
/// Implemented automatically for every `Typed` type.
pub trait DynamicTyped {
    /// See [`Typed::type_shape`].
    fn inspect_type_shape(&self) -> TypeShape;
}

impl<T: Typed + ?Sized> DynamicTyped for T {
    #[inline]
    fn inspect_type_shape(&self) -> TypeShape {
        T::type_shape()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{TypeShape, Typed};
    use crate::info::ValueKind;

    #[test]
    fn nested_references_keep_the_innermost_kind() {
        let shape = <Option<Option<Vec<u8>>>>::type_shape();
        assert_eq!(shape.kind(), ValueKind::Reference);
        assert_eq!(shape.effective_kind(), ValueKind::Sequence);
    }

    #[test]
    fn type_name_is_reported() {
        let shape = TypeShape::of::<u32>(ValueKind::Scalar);
        assert_eq!(shape.type_name(), "u32");
        assert_eq!(shape.kind(), shape.effective_kind());
    }
}
