use alloc::format;

use super::{dereference, resolve};
use crate::info::ValueKind;
use crate::{Inspect, InspectConfig};

/// Visits every visible field of the struct `value` resolves to.
///
/// The visitor receives `(child, name, kind)` for each public, non-embedded
/// field, in declaration order:
///
/// - `kind` is the field's kind after peeling references, so it is never
///   [`ValueKind::Reference`].
/// - `child` is `None` when the field is a nil reference.
/// - A sequence field is not reported itself; instead the fields of its
///   representative element are reported with names prefixed by
///   `field + separator`. Sequences that do not resolve contribute nothing.
///
/// Returns `false`, without calling the visitor, if `value` does not resolve
/// to a struct (see [`resolve`]).
///
/// # Examples
///
/// ```
/// use mf_inspect::{Inspect, InspectConfig, each_field};
/// use mf_inspect::info::ValueKind;
///
/// #[derive(Inspect)]
/// struct Item {
///     pub sku: String,
/// }
///
/// #[derive(Inspect)]
/// struct Order {
///     pub id: u64,
///     pub items: Vec<Item>,
///     pub note: Option<String>,
/// }
///
/// let order = Order {
///     id: 7,
///     items: vec![Item { sku: "a".into() }],
///     note: None,
/// };
///
/// let mut seen = Vec::new();
/// let ok = each_field(&order, &InspectConfig::default(), |child, name, kind| {
///     seen.push((name.to_owned(), kind, child.is_some()));
/// });
///
/// assert!(ok);
/// assert_eq!(seen, [
///     ("id".to_owned(), ValueKind::Scalar, true),
///     ("items.sku".to_owned(), ValueKind::Scalar, true),
///     ("note".to_owned(), ValueKind::Scalar, false),
/// ]);
/// ```
pub fn each_field<'a, F>(value: &'a dyn Inspect, config: &InspectConfig, mut visitor: F) -> bool
where
    F: FnMut(Option<&'a dyn Inspect>, &str, ValueKind),
{
    visit_fields(value, config.separator(), &mut visitor)
}

// Takes the visitor as a trait object: nested sequences wrap it in a
// prefixing closure, which would otherwise instantiate without bound.
fn visit_fields<'a>(
    value: &'a dyn Inspect,
    separator: &str,
    visitor: &mut dyn FnMut(Option<&'a dyn Inspect>, &str, ValueKind),
) -> bool {
    let Some(view) = resolve(value) else {
        return false;
    };

    for (descriptor, field) in view.visible_fields() {
        let name = descriptor.name();
        let (child, kind) = match dereference(field) {
            Ok(target) => (Some(target), target.inspect_kind()),
            Err(shape) => (None, shape.effective_kind()),
        };

        match kind {
            ValueKind::Sequence => {
                if let Some(sequence) = child {
                    visit_fields(sequence, separator, &mut |nested, nested_name, nested_kind| {
                        visitor(nested, &format!("{name}{separator}{nested_name}"), nested_kind);
                    });
                }
            }
            // Unreachable after dereferencing.
            ValueKind::Reference => {}
            ValueKind::Struct | ValueKind::Map | ValueKind::Scalar => visitor(child, name, kind),
        }
    }

    true
}
