use crate::Inspect;
use crate::info::TypeShape;
use crate::ops::{StructView, ValueRef};

/// Follows reference layers until a non-reference value is reached.
///
/// A nil reference at any hop stops the walk; the error carries the static
/// shape of the type the nil reference pointed at.
///
/// # Examples
///
/// ```
/// use mf_inspect::{Inspect, traverse::dereference, info::ValueKind};
///
/// let value = Some(Box::new(5_u8));
/// assert_eq!(dereference(&value).unwrap().inspect_kind(), ValueKind::Scalar);
///
/// let nil: Option<Box<u8>> = None;
/// assert_eq!(dereference(&nil).unwrap_err().effective_kind(), ValueKind::Scalar);
/// ```
pub fn dereference(value: &dyn Inspect) -> Result<&dyn Inspect, TypeShape> {
    let mut current = value;
    while let ValueRef::Reference(view) = current.inspect_ref() {
        current = view.target().ok_or(view.pointee())?;
    }
    Ok(current)
}

/// Normalises `value` to a representative struct.
///
/// 1. References are dereferenced; a nil at any hop fails.
/// 2. A sequence is replaced by its first element that is either a struct
///    or a non-nil reference; an empty sequence, or one with no such
///    element, fails.
/// 3. References are dereferenced again.
/// 4. The result must be a struct.
///
/// Resolution is idempotent: resolving an already resolved struct returns
/// the same struct.
///
/// # Examples
///
/// ```
/// use mf_inspect::{Inspect, resolve};
///
/// #[derive(Inspect)]
/// struct Content {
///     pub key: String,
/// }
///
/// let contents: Vec<Option<Box<Content>>> = vec![
///     None,
///     None,
///     Some(Box::new(Content { key: "z".into() })),
/// ];
///
/// let resolved = resolve(&contents).unwrap();
/// assert_eq!(resolved.descriptors()[0].name(), "key");
///
/// assert!(resolve(&Vec::<Content>::new()).is_none());
/// assert!(resolve(&3_u8).is_none());
/// ```
pub fn resolve(value: &dyn Inspect) -> Option<&dyn StructView> {
    let mut current = dereference(value).ok()?;

    if let ValueRef::Sequence(sequence) = current.inspect_ref() {
        let representative = sequence.iter().find(|element| match element.inspect_ref() {
            ValueRef::Struct(_) => true,
            ValueRef::Reference(view) => !view.is_nil(),
            _ => false,
        })?;
        current = dereference(representative).ok()?;
    }

    match current.inspect_ref() {
        ValueRef::Struct(view) => Some(view),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{dereference, resolve};
    use crate::Inspect;
    use crate::fixtures::{Bar, Content, sample_foo};
    use crate::info::ValueKind;

    fn same(a: &dyn Inspect, b: &dyn Inspect) -> bool {
        core::ptr::addr_eq(a as *const dyn Inspect, b as *const dyn Inspect)
    }

    #[test]
    fn scalars_and_nil_do_not_resolve() {
        assert!(resolve(&false).is_none());
        assert!(resolve(&"hotdog").is_none());
        assert!(resolve(&3.3_f64).is_none());
        assert!(resolve(&Option::<Bar>::None).is_none());
        assert!(resolve(&Some(Box::new(3_i64))).is_none());
        assert!(resolve(&'c').is_none());
    }

    #[test]
    fn struct_resolves_to_itself() {
        let foo = sample_foo();
        let resolved = resolve(&foo).unwrap();
        assert!(same(resolved, &foo));
    }

    #[test]
    fn resolution_is_idempotent() {
        let contents = vec![None, Some(Box::new(Content::new("k", "v", 1)))];
        let first = resolve(&contents).unwrap();
        let second = resolve(first).unwrap();
        assert!(same(first, second));
    }

    #[test]
    fn references_are_followed() {
        let bar = Bar::default();
        let wrapped = Some(Some(Box::new(bar)));
        let resolved = resolve(&wrapped).unwrap();
        assert_eq!(resolved.inspect_kind(), ValueKind::Struct);
    }

    #[test]
    fn sequence_picks_first_non_nil_element() {
        let contents: Vec<Option<Option<Box<Content>>>> = vec![
            None,
            None,
            Some(Some(Box::new(Content::new("z", "", 0)))),
        ];
        let resolved = resolve(&contents).unwrap();
        let key = resolved.field("key").unwrap();
        assert_eq!(alloc::format!("{key:?}"), "Str(\"z\")");
    }

    #[test]
    fn empty_or_all_nil_sequences_fail() {
        assert!(resolve(&Vec::<Content>::new()).is_none());
        assert!(resolve(&vec![Option::<Content>::None, None]).is_none());
        assert!(resolve(&vec![1_u8, 2]).is_none());
    }

    #[test]
    fn first_non_nil_element_decides() {
        // The representative is not re-chosen when it turns out to be nil deeper down.
        let contents: Vec<Option<Option<Content>>> =
            vec![Some(None), Some(Some(Content::new("k", "v", 0)))];
        assert!(resolve(&contents).is_none());
    }

    #[test]
    fn dereference_reports_typed_absence() {
        let nil: Option<Option<Vec<u8>>> = Some(None);
        let shape = dereference(&nil).unwrap_err();
        assert_eq!(shape.kind(), ValueKind::Sequence);
    }
}
