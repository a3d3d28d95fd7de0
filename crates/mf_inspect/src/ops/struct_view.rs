use crate::Inspect;
use crate::info::FieldDescriptor;

/// A trait used to view the fields of a struct.
///
/// Implemented by `#[derive(Inspect)]`; manual implementations must keep
/// [`descriptors`](StructView::descriptors) and
/// [`field_at`](StructView::field_at) index-aligned.
///
/// # Examples
///
/// ```
/// use mf_inspect::{Inspect, ops::{ScalarRef, StructView, ValueRef}};
///
/// #[derive(Inspect)]
/// struct Foo {
///     pub id: u32,
/// }
///
/// let foo = Foo { id: 7 };
/// let ValueRef::Scalar(id) = foo.field("id").unwrap().inspect_ref() else {
///     unreachable!()
/// };
/// assert_eq!(id, ScalarRef::U64(7));
/// assert!(foo.field("missing").is_none());
/// ```
pub trait StructView: Inspect {
    /// Returns every field descriptor in declaration order, hidden ones included.
    fn descriptors(&self) -> &'static [FieldDescriptor];

    /// Returns the value of the field at `index`.
    ///
    /// Returns `None` for an out-of-range index and for fields that are not
    /// [visible](FieldDescriptor::is_visible).
    fn field_at(&self, index: usize) -> Option<&dyn Inspect>;

    /// Returns the value of the visible field called `name`.
    fn field(&self, name: &str) -> Option<&dyn Inspect> {
        let index = self
            .descriptors()
            .iter()
            .position(|descriptor| descriptor.is_visible() && descriptor.name() == name)?;
        self.field_at(index)
    }
}

impl<'a> dyn StructView + 'a {
    /// Returns an iterator over the visible fields, in declaration order.
    #[inline]
    pub fn visible_fields(&self) -> VisibleFieldIter<'_> {
        VisibleFieldIter {
            view: self,
            index: 0,
        }
    }
}

/// An iterator over the visible fields of a [`StructView`].
pub struct VisibleFieldIter<'a> {
    view: &'a dyn StructView,
    index: usize,
}

impl<'a> Iterator for VisibleFieldIter<'a> {
    type Item = (&'static FieldDescriptor, &'a dyn Inspect);

    fn next(&mut self) -> Option<Self::Item> {
        let descriptors = self.view.descriptors();
        while let Some(descriptor) = descriptors.get(self.index) {
            let index = self.index;
            self.index += 1;
            if !descriptor.is_visible() {
                continue;
            }
            if let Some(value) = self.view.field_at(index) {
                return Some((descriptor, value));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::Inspect;
    use crate::fixtures::{Baz, Content, Wrapper};
    use crate::info::Visibility;
    use crate::ops::{ScalarRef, StructView, ValueRef};

    fn visible_names(view: &dyn StructView) -> Vec<&'static str> {
        view.visible_fields().map(|(descriptor, _)| descriptor.name()).collect()
    }

    #[test]
    fn descriptors_keep_hidden_fields() {
        let baz = Baz::default();
        let descriptors = baz.descriptors();
        assert_eq!(descriptors.len(), 8);
        assert_eq!(descriptors[6].name(), "hidden_string");
        assert_eq!(descriptors[6].visibility(), Visibility::Hidden);
        assert!(baz.field_at(6).is_none());
        assert!(baz.field("hidden_struct").is_none());
        assert_eq!(
            visible_names(&baz),
            ["name", "multiplier", "active", "contents", "ptr_a", "ptr_b"]
        );
    }

    #[test]
    fn field_attributes() {
        #[derive(Inspect, Default)]
        struct Meta {
            pub created: u64,
        }

        #[derive(Inspect, Default)]
        struct Record {
            #[inspect(rename = "ID")]
            pub id: u64,
            #[inspect(embedded)]
            pub meta: Meta,
            #[inspect(rename = "Cache", skip)]
            pub cache: Vec<u8>,
            pub(crate) internal: bool,
            pub r#type: char,
        }

        let record = Record::default();
        assert_eq!(visible_names(&record), ["ID", "type"]);
        assert!(record.field("id").is_none());
        assert!(record.field("ID").is_some());

        let descriptors = record.descriptors();
        assert!(descriptors[1].is_embedded());
        assert_eq!(descriptors[1].visibility(), Visibility::Public);
        assert_eq!(descriptors[2].name(), "Cache");
        assert_eq!(descriptors[2].visibility(), Visibility::Hidden);
        assert_eq!(descriptors[3].visibility(), Visibility::Hidden);
        assert!(record.field_at(1).is_none());
        let _ = (&record.meta.created, &record.cache, record.internal);
    }

    #[test]
    fn unit_structs_have_no_fields() {
        #[derive(Inspect)]
        struct Marker;

        assert!(Marker.descriptors().is_empty());
        assert!(Marker.field_at(0).is_none());
    }

    #[test]
    fn generic_fields_are_viewed() {
        let wrapper = Wrapper {
            inner: Content::new("k", "v", 0),
            label: "l",
        };
        let ValueRef::Scalar(label) = wrapper.field("label").unwrap().inspect_ref() else {
            panic!("expected a scalar");
        };
        assert_eq!(label, ScalarRef::Str("l"));
        assert_eq!(wrapper.field("inner").unwrap().inspect_kind(), crate::info::ValueKind::Struct);
    }
}
