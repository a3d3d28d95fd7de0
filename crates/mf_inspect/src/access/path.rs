use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use super::Got;
use crate::ops::ValueRef;
use crate::traverse::dereference;
use crate::{Inspect, InspectConfig};

/// A parsed, reusable field path.
///
/// Parsing splits on the configured separator once, so a path applied to
/// many values is not re-split each time.
///
/// # Examples
///
/// ```
/// use mf_inspect::InspectConfig;
/// use mf_inspect::access::FieldPath;
///
/// let config = InspectConfig::default();
/// let path = FieldPath::parse("bar.baz.name", &config);
///
/// assert_eq!(path.segments(), ["bar", "baz", "name"]);
/// assert_eq!(path.join(&config), "bar.baz.name");
/// assert!(FieldPath::parse("", &config).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath(Box<[String]>);

impl FieldPath {
    /// Splits `path` on the configured separator.
    ///
    /// The empty string has no segments. Any other string has one more
    /// segment than it has separators; empty segments are kept and simply
    /// never match a field.
    pub fn parse(path: &str, config: &InspectConfig) -> Self {
        if path.is_empty() {
            return Self::default();
        }
        Self(path.split(config.separator()).map(String::from).collect())
    }

    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Joins the segments with the configured separator.
    pub fn join(&self, config: &InspectConfig) -> String {
        self.0.join(config.separator())
    }

    /// Fetches the value(s) this path addresses in `value`.
    ///
    /// See the [module documentation](super) for the rules.
    pub fn access<'a>(&self, value: &'a dyn Inspect) -> Got<'a> {
        walk(value, &self.0)
    }
}

impl fmt::Display for FieldPath {
    /// Formats the path with the default separator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut segments = self.0.iter();
        if let Some(first) = segments.next() {
            f.write_str(first)?;
        }
        for segment in segments {
            f.write_str(".")?;
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for FieldPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

pub(super) fn walk<'a, S: AsRef<str>>(value: &'a dyn Inspect, segments: &[S]) -> Got<'a> {
    let Some((head, rest)) = segments.split_first() else {
        return Got::Value(value);
    };

    let current = match dereference(value) {
        Ok(target) => target,
        Err(shape) => return Got::Absent(Some(shape)),
    };

    match current.inspect_ref() {
        ValueRef::Sequence(sequence) => Got::Fanned(
            sequence
                .iter()
                .map(|element| walk(element, segments))
                .collect::<Vec<_>>(),
        ),
        ValueRef::Struct(view) => match view.field(head.as_ref()) {
            Some(field) if rest.is_empty() => match dereference(field) {
                Ok(target) => Got::Value(target),
                Err(shape) => Got::Absent(Some(shape)),
            },
            Some(field) => walk(field, rest),
            None => Got::Absent(None),
        },
        // `dereference` never stops on a reference.
        ValueRef::Map(_) | ValueRef::Scalar(_) | ValueRef::Reference(_) => Got::Absent(None),
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::FieldPath;
    use crate::InspectConfig;
    use crate::fixtures::sample_foo;
    use crate::ops::ScalarRef;

    #[test]
    fn parse_and_join_use_the_separator() {
        let config = InspectConfig::default().with_separator("->").unwrap();
        let path = FieldPath::parse("bar->stock", &config);
        assert_eq!(path.len(), 2);
        assert_eq!(path.join(&config), "bar->stock");
        assert_eq!(path.to_string(), "bar.stock");
    }

    #[test]
    fn empty_segments_are_kept() {
        let path = FieldPath::parse("bar..stock", &InspectConfig::default());
        assert_eq!(path.segments(), ["bar", "", "stock"]);
        assert!(path.access(&sample_foo()).is_absent());
    }

    #[test]
    fn parsed_path_is_reusable() {
        let path: FieldPath = ["bar", "stock"].into_iter().collect();
        for _ in 0..2 {
            let foo = sample_foo();
            assert_eq!(path.access(&foo).as_scalar(), Some(ScalarRef::Str("hotdog")));
        }
    }
}
