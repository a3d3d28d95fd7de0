use alloc::boxed::Box;
use alloc::collections::BTreeMap;

use crate::Inspect;
use crate::info::{TypeShape, Typed, ValueKind};
use crate::ops::{MapIter, MapView, ValueRef};

impl<K, V> Typed for BTreeMap<K, V> {
    #[inline]
    fn type_shape() -> TypeShape {
        TypeShape::of::<Self>(ValueKind::Map)
    }
}

impl<K: Inspect, V: Inspect> Inspect for BTreeMap<K, V> {
    #[inline]
    fn inspect_ref(&self) -> ValueRef<'_> {
        ValueRef::Map(self)
    }
}

impl<K: Inspect, V: Inspect> MapView for BTreeMap<K, V> {
    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn iter(&self) -> MapIter<'_> {
        Box::new(
            BTreeMap::iter(self).map(|(key, value)| (key as &dyn Inspect, value as &dyn Inspect)),
        )
    }
}

#[cfg(feature = "std")]
mod hash_map {
    use alloc::boxed::Box;
    use std::collections::HashMap;

    use crate::Inspect;
    use crate::info::{TypeShape, Typed, ValueKind};
    use crate::ops::{MapIter, MapView, ValueRef};

    impl<K, V, S> Typed for HashMap<K, V, S> {
        #[inline]
        fn type_shape() -> TypeShape {
            TypeShape::of::<Self>(ValueKind::Map)
        }
    }

    impl<K: Inspect, V: Inspect, S: Send + Sync> Inspect for HashMap<K, V, S> {
        #[inline]
        fn inspect_ref(&self) -> ValueRef<'_> {
            ValueRef::Map(self)
        }
    }

    impl<K: Inspect, V: Inspect, S: Send + Sync> MapView for HashMap<K, V, S> {
        #[inline]
        fn len(&self) -> usize {
            HashMap::len(self)
        }

        fn iter(&self) -> MapIter<'_> {
            Box::new(
                HashMap::iter(self)
                    .map(|(key, value)| (key as &dyn Inspect, value as &dyn Inspect)),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;

    use crate::Inspect;
    use crate::ops::ValueRef;

    #[test]
    fn maps_are_leaves_with_entries() {
        let mut map = BTreeMap::new();
        map.insert(String::from("a"), 1_u8);
        map.insert(String::from("b"), 2_u8);

        assert!(map.inspect_kind().is_leaf());
        let ValueRef::Map(view) = map.inspect_ref() else {
            panic!("expected a map");
        };
        assert_eq!(view.len(), 2);
        assert_eq!(view.iter().count(), 2);
    }

    #[cfg(feature = "std")]
    #[test]
    fn hash_maps_are_maps() {
        let map: std::collections::HashMap<u8, String> = std::collections::HashMap::new();
        assert_eq!(map.inspect_kind(), crate::info::ValueKind::Map);
    }
}
