use alloc::boxed::Box;
use alloc::sync::Arc;

use crate::Inspect;
use crate::info::{TypeShape, Typed};
use crate::ops::{RefView, ValueRef};

impl<T: Typed> Typed for Option<T> {
    #[inline]
    fn type_shape() -> TypeShape {
        TypeShape::reference_to::<Self>(T::type_shape())
    }
}

impl<T: Inspect + Typed> Inspect for Option<T> {
    #[inline]
    fn inspect_ref(&self) -> ValueRef<'_> {
        let target = self.as_ref().map(|value| value as &dyn Inspect);
        ValueRef::Reference(RefView::new(target, T::type_shape()))
    }
}

macro_rules! impl_pointer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T: Typed> Typed for $ty {
                #[inline]
                fn type_shape() -> TypeShape {
                    TypeShape::reference_to::<Self>(T::type_shape())
                }
            }

            impl<T: Inspect + Typed> Inspect for $ty {
                #[inline]
                fn inspect_ref(&self) -> ValueRef<'_> {
                    let target: &T = self;
                    ValueRef::Reference(RefView::new(Some(target as &dyn Inspect), T::type_shape()))
                }
            }
        )*
    };
}

impl_pointer!(Box<T>, Arc<T>, &T);
