use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::Inspect;
use crate::info::{TypeShape, Typed, ValueKind};
use crate::ops::{SequenceView, ValueRef};

macro_rules! impl_sequence {
    ($($ty:ty => |$seq:ident, $index:ident| $get:expr;)*) => {
        $(
            impl<T> Typed for $ty {
                #[inline]
                fn type_shape() -> TypeShape {
                    TypeShape::of::<Self>(ValueKind::Sequence)
                }
            }

            impl<T: Inspect> Inspect for $ty {
                #[inline]
                fn inspect_ref(&self) -> ValueRef<'_> {
                    ValueRef::Sequence(self)
                }
            }

            impl<T: Inspect> SequenceView for $ty {
                #[inline]
                fn len(&self) -> usize {
                    <$ty>::len(self)
                }

                #[inline]
                fn get(&self, index: usize) -> Option<&dyn Inspect> {
                    let ($seq, $index) = (self, index);
                    $get.map(|value| value as &dyn Inspect)
                }
            }
        )*
    };
}

impl_sequence! {
    Vec<T> => |seq, index| seq.as_slice().get(index);
    VecDeque<T> => |seq, index| VecDeque::get(seq, index);
}

impl<T> Typed for Box<[T]> {
    #[inline]
    fn type_shape() -> TypeShape {
        TypeShape::of::<Self>(ValueKind::Sequence)
    }
}

impl<T: Inspect> Inspect for Box<[T]> {
    #[inline]
    fn inspect_ref(&self) -> ValueRef<'_> {
        ValueRef::Sequence(self)
    }
}

impl<T: Inspect> SequenceView for Box<[T]> {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Inspect> {
        <[T]>::get(self, index).map(|value| value as &dyn Inspect)
    }
}

impl<T, const N: usize> Typed for [T; N] {
    #[inline]
    fn type_shape() -> TypeShape {
        TypeShape::of::<Self>(ValueKind::Sequence)
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    #[inline]
    fn inspect_ref(&self) -> ValueRef<'_> {
        ValueRef::Sequence(self)
    }
}

impl<T: Inspect, const N: usize> SequenceView for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Inspect> {
        self.as_slice().get(index).map(|value| value as &dyn Inspect)
    }
}

impl<T> Typed for &[T] {
    #[inline]
    fn type_shape() -> TypeShape {
        TypeShape::of::<Self>(ValueKind::Sequence)
    }
}

impl<T: Inspect> Inspect for &[T] {
    #[inline]
    fn inspect_ref(&self) -> ValueRef<'_> {
        ValueRef::Sequence(self)
    }
}

impl<T: Inspect> SequenceView for &[T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Inspect> {
        <[T]>::get(self, index).map(|value| value as &dyn Inspect)
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::VecDeque;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::ops::{SequenceView, ValueRef};
    use crate::Inspect;

    fn elements(value: &dyn Inspect) -> usize {
        match value.inspect_ref() {
            ValueRef::Sequence(seq) => seq.iter().count(),
            _ => panic!("expected a sequence"),
        }
    }

    #[test]
    fn every_sequence_reports_its_elements() {
        assert_eq!(elements(&vec![1_u8, 2, 3]), 3);
        assert_eq!(elements(&VecDeque::from(vec![true])), 1);
        assert_eq!(elements(&[0_i32; 4]), 4);
        assert_eq!(elements(&Vec::<u8>::new().into_boxed_slice()), 0);
        let slice: &[u8] = &[9, 8];
        assert_eq!(elements(&slice), 2);
    }

    #[test]
    fn out_of_range_is_none() {
        let values = vec![1_u8];
        assert!(SequenceView::get(&values, 1).is_none());
        assert!(SequenceView::get(&values, 0).is_some());
    }
}
