use alloc::string::String;
use alloc::vec::Vec;

use super::Got;
use super::path::walk;
use crate::{Inspect, InspectConfig};

/// Fetches the value(s) `path` addresses in `value`.
///
/// `path` is split on the configured separator; the empty path returns
/// `value` unchanged. See the [module documentation](crate::access) for
/// the rules, and [`FieldPath`](super::FieldPath) to parse a path once
/// and apply it many times.
///
/// # Examples
///
/// ```
/// use mf_inspect::{Inspect, InspectConfig, Got, get};
/// use mf_inspect::ops::ScalarRef;
///
/// #[derive(Inspect)]
/// struct Line {
///     pub qty: u32,
/// }
///
/// #[derive(Inspect)]
/// struct Invoice {
///     pub lines: Vec<Line>,
/// }
///
/// let invoice = Invoice { lines: vec![Line { qty: 2 }, Line { qty: 5 }] };
/// let got = get(&invoice, "lines.qty", &InspectConfig::default());
///
/// let Got::Fanned(slots) = &got else { panic!("expected fan-out") };
/// assert_eq!(slots.len(), 2);
/// assert_eq!(slots[1].as_scalar(), Some(ScalarRef::U64(5)));
/// ```
pub fn get<'a>(value: &'a dyn Inspect, path: &str, config: &InspectConfig) -> Got<'a> {
    if path.is_empty() {
        return Got::Value(value);
    }
    let segments: Vec<&str> = path.split(config.separator()).collect();
    walk(value, &segments)
}

/// Path operations as methods on inspectable values.
///
/// Implemented for every [`Inspect`] type and for `dyn Inspect`.
pub trait InspectPathAccess {
    /// Fetches `path` using the default configuration.
    fn get_path(&self, path: &str) -> Got<'_> {
        self.get_path_with(path, &InspectConfig::DEFAULT)
    }

    /// Fetches `path` using `config`.
    fn get_path_with(&self, path: &str, config: &InspectConfig) -> Got<'_>;

    /// Lists every leaf path, using the default configuration.
    fn terminal_fields(&self) -> Vec<String>;
}

impl<T: Inspect> InspectPathAccess for T {
    #[inline]
    fn get_path_with(&self, path: &str, config: &InspectConfig) -> Got<'_> {
        get(self, path, config)
    }

    #[inline]
    fn terminal_fields(&self) -> Vec<String> {
        crate::terminal_fields(self, &InspectConfig::DEFAULT)
    }
}

impl InspectPathAccess for dyn Inspect + '_ {
    #[inline]
    fn get_path_with(&self, path: &str, config: &InspectConfig) -> Got<'_> {
        get(self, path, config)
    }

    #[inline]
    fn terminal_fields(&self) -> Vec<String> {
        crate::terminal_fields(self, &InspectConfig::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{InspectPathAccess, get};
    use crate::fixtures::{Bar, Content, Foo, sample_foo, sparse_foo};
    use crate::info::ValueKind;
    use crate::ops::ScalarRef;
    use crate::{Got, Inspect, InspectConfig};

    fn scalars<'a>(got: &Got<'a>) -> Vec<Option<ScalarRef<'a>>> {
        got.leaves().into_iter().map(Got::as_scalar).collect()
    }

    #[test]
    fn empty_path_returns_the_input_unchanged() {
        let foo = Some(Box::new(sample_foo()));
        let Got::Value(value) = foo.get_path("") else {
            panic!("expected a value");
        };
        assert_eq!(value.inspect_kind(), ValueKind::Reference);
    }

    #[test]
    fn sequence_fans_out() {
        let foo = sample_foo();
        let got = foo.get_path("contents.key");
        assert_eq!(got.as_fanned().map(<[_]>::len), Some(2));
        assert_eq!(
            scalars(&got),
            [Some(ScalarRef::Str("k1")), Some(ScalarRef::Str("k2"))]
        );
    }

    #[test]
    fn nested_sequences_nest_results() {
        let grid = vec![
            vec![Content::new("a", "", 0)],
            vec![],
            vec![Content::new("b", "", 0), Content::new("c", "", 0)],
        ];
        let got = grid.get_path("key");

        let outer = got.as_fanned().unwrap();
        assert_eq!(outer.len(), 3);
        assert_eq!(outer[1].as_fanned().map(<[_]>::len), Some(0));
        assert_eq!(outer[2].as_fanned().map(<[_]>::len), Some(2));
        assert_eq!(
            scalars(&got),
            [
                Some(ScalarRef::Str("a")),
                Some(ScalarRef::Str("b")),
                Some(ScalarRef::Str("c"))
            ]
        );
    }

    #[test]
    fn nil_elements_keep_their_slot() {
        let contents = vec![None, Some(Content::new("z", "", 0))];
        let got = contents.get_path("key");
        let slots = got.as_fanned().unwrap();

        let Got::Absent(Some(shape)) = &slots[0] else {
            panic!("expected a typed absence");
        };
        assert_eq!(shape.kind(), ValueKind::Struct);
        assert_eq!(slots[1].as_scalar(), Some(ScalarRef::Str("z")));
    }

    #[test]
    fn nil_struct_pointer_is_typed() {
        let foo = sample_foo();
        let Got::Absent(Some(shape)) = foo.get_path("struct_ptr.stock") else {
            panic!("expected a typed absence");
        };
        // The static shape is the pointee of the `Option`, a `Box<Bar>`.
        assert_eq!(shape.kind(), ValueKind::Reference);
        assert_eq!(shape.effective_kind(), ValueKind::Struct);
        assert!(shape.type_name().contains("Bar"));
    }

    #[test]
    fn final_references_are_followed() {
        let foo = sample_foo();
        assert_eq!(
            foo.get_path("bar.baz.ptr_a").as_scalar(),
            Some(ScalarRef::U64(7))
        );
        let Got::Absent(Some(shape)) = foo.get_path("bar.baz.ptr_b") else {
            panic!("expected a typed absence");
        };
        assert_eq!(shape.effective_kind(), ValueKind::Scalar);

        let sparse = sparse_foo();
        assert_eq!(sparse.get_path("struct_ptr.stock").as_scalar(), Some(ScalarRef::Str("")));
        let Got::Value(bar) = sparse.get_path("struct_ptr") else {
            panic!("expected a value");
        };
        assert_eq!(bar.inspect_kind(), ValueKind::Struct);
    }

    #[test]
    fn misses_are_untyped() {
        let foo = sample_foo();
        assert!(matches!(foo.get_path("nope"), Got::Absent(None)));
        assert!(matches!(foo.get_path("bar.stock.len"), Got::Absent(None)));
        assert!(matches!(foo.get_path("bar.baz.hidden_string"), Got::Absent(None)));
        assert!(matches!(
            scalars(&foo.get_path("contents.nope"))[..],
            [None, None]
        ));
    }

    #[test]
    fn maps_have_no_fields() {
        use alloc::collections::BTreeMap;
        use alloc::string::String;

        let map = BTreeMap::from([(String::from("key"), 1_u8)]);
        assert!(matches!(map.get_path("key"), Got::Absent(None)));
    }

    #[test]
    fn separator_splits_paths() {
        let config = InspectConfig::default().with_separator("/").unwrap();
        let foo = sample_foo();
        assert_eq!(
            get(&foo, "bar/stock", &config).as_scalar(),
            Some(ScalarRef::Str("hotdog"))
        );
        assert!(get(&foo, "bar.stock", &config).is_absent());
    }

    #[test]
    fn works_through_trait_objects() {
        let bar = Bar::default();
        let erased: &dyn Inspect = &bar;
        assert_eq!(erased.get_path("stock").as_scalar(), Some(ScalarRef::Str("")));
        assert_eq!(erased.terminal_fields(), bar.terminal_fields());

        let foos: Vec<Foo> = Vec::new();
        assert!(foos.terminal_fields().is_empty());
    }
}
