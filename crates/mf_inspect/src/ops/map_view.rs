use alloc::boxed::Box;

use crate::Inspect;

/// An iterator over the entries of a [`MapView`].
pub type MapIter<'a> = Box<dyn Iterator<Item = (&'a dyn Inspect, &'a dyn Inspect)> + 'a>;

/// A trait used to view an associative container.
///
/// Maps are always leaves: traversal never descends into them, whatever
/// their key and value types are.
pub trait MapView: Inspect {
    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns an iterator over `(key, value)` pairs, in the map's own order.
    fn iter(&self) -> MapIter<'_>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
