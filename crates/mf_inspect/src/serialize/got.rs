use serde::{Serialize, Serializer};

use super::SerializeDriver;
use crate::Got;

impl Serialize for Got<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Got::Value(value) => SerializeDriver::new(*value).serialize(serializer),
            Got::Absent(_) => serializer.serialize_none(),
            Got::Fanned(items) => serializer.collect_seq(items),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::InspectPathAccess;
    use crate::fixtures::{sample_foo, sparse_foo};

    #[test]
    fn fanned_and_absent_results() {
        let foo = sample_foo();
        let json = serde_json::to_string(&foo.get_path("contents.version")).unwrap();
        assert_eq!(json, "[1,2]");

        let json = serde_json::to_string(&foo.get_path("bar.baz.ptr_b")).unwrap();
        assert_eq!(json, "null");

        let sparse = sparse_foo();
        let json = serde_json::to_string(&sparse.get_path("struct_ptr.baz.active")).unwrap();
        assert_eq!(json, "false");
    }
}
