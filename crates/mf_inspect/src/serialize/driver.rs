use core::fmt;

use serde::{Serialize, Serializer};

use super::struct_serializer::StructSerializer;
use crate::Inspect;
use crate::ops::ValueRef;

/// A [`Serialize`] adapter over any [`Inspect`] value.
///
/// Dispatches on the value's view and recurses through nested values.
#[derive(Clone, Copy)]
pub struct SerializeDriver<'a> {
    value: &'a dyn Inspect,
}

impl<'a> SerializeDriver<'a> {
    #[inline]
    pub fn new(value: &'a dyn Inspect) -> Self {
        Self { value }
    }

    #[inline]
    pub fn value(&self) -> &'a dyn Inspect {
        self.value
    }
}

impl fmt::Debug for SerializeDriver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SerializeDriver").field(&self.value).finish()
    }
}

impl Serialize for SerializeDriver<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value.inspect_ref() {
            ValueRef::Struct(view) => StructSerializer { view }.serialize(serializer),
            ValueRef::Sequence(view) => serializer.collect_seq(view.iter().map(SerializeDriver::new)),
            ValueRef::Reference(view) => match view.target() {
                Some(target) => serializer.serialize_some(&SerializeDriver::new(target)),
                None => serializer.serialize_none(),
            },
            ValueRef::Map(view) => serializer.collect_map(
                view.iter()
                    .map(|(key, value)| (SerializeDriver::new(key), SerializeDriver::new(value))),
            ),
            ValueRef::Scalar(scalar) => scalar.serialize(serializer),
        }
    }
}
