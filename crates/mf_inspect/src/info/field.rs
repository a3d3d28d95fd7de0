/// Whether a field takes part in enumeration and path access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Visible to every operation.
    Public,
    /// Never enumerated, never addressable by path.
    Hidden,
}

/// A named, ordered, visibility-tagged member of a struct-like value.
///
/// Descriptors are created by `#[derive(Inspect)]` in declaration order.
/// Only descriptors that are [`Public`](Visibility::Public) and not
/// embedded are visible.
///
/// # Examples
///
/// ```
/// use mf_inspect::{Inspect, ops::StructView};
///
/// #[derive(Inspect)]
/// struct Foo {
///     pub name: String,
///     secret: u8,
/// }
///
/// let foo = Foo { name: "a".into(), secret: 1 };
/// let descriptors = foo.descriptors();
///
/// assert_eq!(descriptors[0].name(), "name");
/// assert!(descriptors[0].is_visible());
/// assert!(!descriptors[1].is_visible());
/// # let _ = foo.secret;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    name: &'static str,
    visibility: Visibility,
    embedded: bool,
}

impl FieldDescriptor {
    /// Creates a new [`FieldDescriptor`].
    #[inline]
    pub const fn new(name: &'static str, visibility: Visibility, embedded: bool) -> Self {
        Self {
            name,
            visibility,
            embedded,
        }
    }

    /// Returns the field name, after any `rename`.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns `true` if the field is embedded into its parent.
    #[inline]
    pub const fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// Returns `true` if the field is public and not embedded.
    #[inline]
    pub const fn is_visible(&self) -> bool {
        matches!(self.visibility, Visibility::Public) && !self.embedded
    }
}
