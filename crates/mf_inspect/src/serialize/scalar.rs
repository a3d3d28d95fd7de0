use serde::{Serialize, Serializer};

use crate::ops::ScalarRef;

impl Serialize for ScalarRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            ScalarRef::Bool(value) => serializer.serialize_bool(value),
            ScalarRef::Char(value) => serializer.serialize_char(value),
            ScalarRef::I64(value) => serializer.serialize_i64(value),
            ScalarRef::U64(value) => serializer.serialize_u64(value),
            ScalarRef::I128(value) => serializer.serialize_i128(value),
            ScalarRef::U128(value) => serializer.serialize_u128(value),
            ScalarRef::F32(value) => serializer.serialize_f32(value),
            ScalarRef::F64(value) => serializer.serialize_f64(value),
            ScalarRef::Str(value) => serializer.serialize_str(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ops::ScalarRef;

    #[test]
    fn scalars_are_native() {
        let cases = [
            (ScalarRef::Bool(true), "true"),
            (ScalarRef::Char('x'), r#""x""#),
            (ScalarRef::I64(-4), "-4"),
            (ScalarRef::U128(u128::MAX), "340282366920938463463374607431768211455"),
            (ScalarRef::Str("s"), r#""s""#),
        ];
        for (scalar, expected) in cases {
            assert_eq!(serde_json::to_string(&scalar).unwrap(), expected);
        }
    }
}
