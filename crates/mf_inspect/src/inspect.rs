use core::fmt;

use crate::info::{DynamicTyped, FieldDescriptor, ValueKind};
use crate::ops::ValueRef;

/// The foundational trait of [`mf_inspect`]: a static mapping from a Rust
/// type onto the closed set of value views.
///
/// # Implementation
///
/// Structs should use `#[derive(Inspect)]`, which also implements
/// [`Typed`] and [`StructView`]. Built-in implementations cover scalars,
/// sequences, references and maps from `core`, `alloc` and `std`; see
/// [`impls`](crate::impls).
///
/// A manual implementation returns the variant matching its kind and
/// implements the corresponding view trait:
///
/// ```
/// use mf_inspect::Inspect;
/// use mf_inspect::info::{TypeShape, Typed, ValueKind};
/// use mf_inspect::ops::{ScalarRef, ValueRef};
///
/// struct Celsius(f64);
///
/// impl Typed for Celsius {
///     fn type_shape() -> TypeShape {
///         TypeShape::of::<Self>(ValueKind::Scalar)
///     }
/// }
///
/// impl Inspect for Celsius {
///     fn inspect_ref(&self) -> ValueRef<'_> {
///         ValueRef::Scalar(ScalarRef::F64(self.0))
///     }
/// }
///
/// assert_eq!(Celsius(21.5).inspect_kind(), ValueKind::Scalar);
/// ```
///
/// # Cycles
///
/// Nothing in the traversal detects cycles. Implementations that hand out
/// a view graph containing a cycle make leaf collection run forever unless
/// a node limit is configured.
///
/// [`mf_inspect`]: crate
/// [`Typed`]: crate::info::Typed
/// [`StructView`]: crate::ops::StructView
pub trait Inspect: DynamicTyped + Send + Sync {
    /// Returns the view of this value.
    fn inspect_ref(&self) -> ValueRef<'_>;

    /// Returns the declared [`ValueKind`] of this value.
    #[inline]
    fn inspect_kind(&self) -> ValueKind {
        self.inspect_ref().kind()
    }

    /// Casts this value to a `&dyn Inspect`.
    #[inline(always)]
    fn as_inspect(&self) -> &dyn Inspect
    where
        Self: Sized,
    {
        self
    }
}

impl fmt::Debug for dyn Inspect + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inspect_ref() {
            ValueRef::Struct(view) => {
                let mut out = f.debug_struct(self.inspect_type_shape().type_name());
                for (descriptor, value) in view.visible_fields() {
                    out.field(descriptor.name(), &value);
                }
                if view.descriptors().iter().all(FieldDescriptor::is_visible) {
                    out.finish()
                } else {
                    out.finish_non_exhaustive()
                }
            }
            ValueRef::Sequence(view) => f.debug_list().entries(view.iter()).finish(),
            ValueRef::Reference(view) => match view.target() {
                Some(target) => f.debug_tuple("Some").field(&target).finish(),
                None => f.write_str("None"),
            },
            ValueRef::Map(view) => f.debug_map().entries(view.iter()).finish(),
            ValueRef::Scalar(scalar) => fmt::Debug::fmt(&scalar, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use crate::fixtures::{Baz, Content, sample_foo};
    use crate::Inspect;

    #[test]
    fn debug_prints_visible_fields_only() {
        let content = Content::new("k", "v", 3);
        let text = format!("{:?}", content.as_inspect());
        assert!(text.contains("key: Str(\"k\")"));
        assert!(text.contains("version: I64(3)"));
        assert!(text.ends_with("version: I64(3) }"));
    }

    #[test]
    fn debug_marks_structs_with_hidden_fields() {
        let baz = Baz::default();
        let text = format!("{:?}", baz.as_inspect());
        assert!(text.ends_with("ptr_b: None, .. }"));

        let content = Content::default();
        assert!(!format!("{:?}", content.as_inspect()).contains(".."));
    }

    #[test]
    fn debug_hides_private_fields() {
        let foo = sample_foo();
        let text = format!("{:?}", foo.as_inspect());
        assert!(!text.contains("hidden"));
        assert!(text.contains("stock"));
    }
}
