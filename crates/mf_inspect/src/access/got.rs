use alloc::vec::Vec;

use crate::Inspect;
use crate::info::TypeShape;
use crate::ops::{ScalarRef, ValueRef};

/// The result of fetching a path.
///
/// Each sequence crossed on the way adds one level of [`Got::Fanned`]
/// nesting; use [`Got::leaves`] to flatten it.
#[derive(Debug)]
pub enum Got<'a> {
    /// The addressed value. Never a reference: a final reference is
    /// followed before it is returned.
    Value(&'a dyn Inspect),
    /// Nothing is there.
    ///
    /// `Some` when a nil reference was met, carrying the static shape of
    /// the type it pointed at. `None` when a field does not exist or the
    /// value has no fields.
    Absent(Option<TypeShape>),
    /// One result per element of a sequence, in order.
    Fanned(Vec<Got<'a>>),
}

impl<'a> Got<'a> {
    #[inline]
    pub fn as_value(&self) -> Option<&'a dyn Inspect> {
        match self {
            Self::Value(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the scalar, if this is a scalar value.
    pub fn as_scalar(&self) -> Option<ScalarRef<'a>> {
        match self.as_value()?.inspect_ref() {
            ValueRef::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent(_))
    }

    #[inline]
    pub fn as_fanned(&self) -> Option<&[Got<'a>]> {
        match self {
            Self::Fanned(items) => Some(items),
            _ => None,
        }
    }

    /// Whether this result addresses leaf data.
    ///
    /// A value is a leaf if its kind is. A typed absence (a nil reference)
    /// is always a leaf, whatever it points at: a nil element in a sequence
    /// of structs ends the path early. A fan-out is a leaf if all of its
    /// slots are.
    pub fn is_leaf(&self) -> bool {
        match self {
            Self::Value(value) => value.inspect_kind().is_leaf(),
            Self::Absent(shape) => shape.is_some(),
            Self::Fanned(items) => items.iter().all(Got::is_leaf),
        }
    }

    /// Flattens all fan-out levels, in order.
    pub fn leaves(&self) -> Vec<&Got<'a>> {
        let mut leaves = Vec::new();
        let mut stack = alloc::vec![self];
        while let Some(got) = stack.pop() {
            match got {
                Self::Fanned(items) => stack.extend(items.iter().rev()),
                _ => leaves.push(got),
            }
        }
        leaves
    }
}
