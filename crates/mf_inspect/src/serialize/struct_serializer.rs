use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::SerializeDriver;
use crate::ops::StructView;

/// Serializes the visible fields of a struct.
pub(super) struct StructSerializer<'a> {
    pub view: &'a dyn StructView,
}

impl Serialize for StructSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.view.visible_fields().count();
        let name = self.view.inspect_type_shape().type_name();

        let mut state = serializer.serialize_struct(name, len)?;
        for (descriptor, value) in self.view.visible_fields() {
            state.serialize_field(descriptor.name(), &SerializeDriver::new(value))?;
        }
        state.end()
    }
}
