//! Shared value graphs for unit tests.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::Inspect;

#[derive(Inspect, Default)]
pub struct Foo {
    pub bar: Bar,
    pub struct_ptr: Option<Box<Bar>>,
    pub contents: Vec<Content>,
}

#[derive(Inspect, Default)]
pub struct Bar {
    pub baz: Baz,
    pub stock: String,
}

#[derive(Inspect, Default)]
pub struct Baz {
    pub name: String,
    pub multiplier: f64,
    pub active: bool,
    pub contents: Vec<Content>,
    pub ptr_a: Option<u8>,
    pub ptr_b: Option<i64>,
    #[allow(dead_code, reason = "present to check that private fields stay invisible")]
    hidden_string: String,
    #[allow(dead_code, reason = "present to check that private fields stay invisible")]
    hidden_struct: Hidden,
}

#[derive(Inspect, Default)]
pub struct Hidden {
    pub inner: String,
}

#[derive(Inspect, Default, Clone)]
pub struct Content {
    pub key: String,
    pub value: String,
    pub version: i64,
}

impl Content {
    pub fn new(key: &str, value: &str, version: i64) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            version,
        }
    }
}

/// A generic struct, to check derive bounds.
#[derive(Inspect)]
pub struct Wrapper<T> {
    pub inner: T,
    pub label: &'static str,
}

/// A fully populated graph: nested structs, a nil struct pointer, and two
/// non-empty content sequences.
pub fn sample_foo() -> Foo {
    Foo {
        bar: Bar {
            baz: Baz {
                name: "baz".into(),
                multiplier: 3.3,
                active: true,
                contents: vec![Content::new("inner", "v", 1)],
                ptr_a: Some(7),
                ptr_b: None,
                hidden_string: "hidden".into(),
                hidden_struct: Hidden {
                    inner: "hidden".into(),
                },
            },
            stock: "hotdog".into(),
        },
        struct_ptr: None,
        contents: vec![Content::new("k1", "v1", 1), Content::new("k2", "v2", 2)],
    }
}

/// A mostly zero-valued graph: empty sequences and a non-nil struct pointer
/// to a default `Bar`.
pub fn sparse_foo() -> Foo {
    Foo {
        struct_ptr: Some(Box::new(Bar::default())),
        ..Foo::default()
    }
}
