use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;

use crate::Inspect;
use crate::info::{TypeShape, Typed, ValueKind};
use crate::ops::{ScalarRef, ValueRef};

macro_rules! impl_scalar {
    ($($ty:ty => |$v:ident| $scalar:expr;)*) => {
        $(
            impl Typed for $ty {
                #[inline]
                fn type_shape() -> TypeShape {
                    TypeShape::of::<Self>(ValueKind::Scalar)
                }
            }

            impl Inspect for $ty {
                #[inline]
                fn inspect_ref(&self) -> ValueRef<'_> {
                    let $v = self;
                    ValueRef::Scalar($scalar)
                }
            }
        )*
    };
}

impl_scalar! {
    bool => |v| ScalarRef::Bool(*v);
    char => |v| ScalarRef::Char(*v);
    i8 => |v| ScalarRef::I64(i64::from(*v));
    i16 => |v| ScalarRef::I64(i64::from(*v));
    i32 => |v| ScalarRef::I64(i64::from(*v));
    i64 => |v| ScalarRef::I64(*v);
    isize => |v| ScalarRef::I64(*v as i64);
    i128 => |v| ScalarRef::I128(*v);
    u8 => |v| ScalarRef::U64(u64::from(*v));
    u16 => |v| ScalarRef::U64(u64::from(*v));
    u32 => |v| ScalarRef::U64(u64::from(*v));
    u64 => |v| ScalarRef::U64(*v);
    usize => |v| ScalarRef::U64(*v as u64);
    u128 => |v| ScalarRef::U128(*v);
    f32 => |v| ScalarRef::F32(*v);
    f64 => |v| ScalarRef::F64(*v);
    String => |v| ScalarRef::Str(v.as_str());
    Box<str> => |v| ScalarRef::Str(v);
    Arc<str> => |v| ScalarRef::Str(v);
}

impl Typed for &str {
    #[inline]
    fn type_shape() -> TypeShape {
        TypeShape::of::<Self>(ValueKind::Scalar)
    }
}

impl Inspect for &str {
    #[inline]
    fn inspect_ref(&self) -> ValueRef<'_> {
        ValueRef::Scalar(ScalarRef::Str(self))
    }
}

impl Typed for Cow<'_, str> {
    #[inline]
    fn type_shape() -> TypeShape {
        TypeShape::of::<Self>(ValueKind::Scalar)
    }
}

impl Inspect for Cow<'_, str> {
    #[inline]
    fn inspect_ref(&self) -> ValueRef<'_> {
        ValueRef::Scalar(ScalarRef::Str(self))
    }
}
