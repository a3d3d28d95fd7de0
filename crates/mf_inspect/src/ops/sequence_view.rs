use crate::Inspect;

/// A trait used to view an ordered, indexable collection.
pub trait SequenceView: Inspect {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the element at `index`, if present.
    fn get(&self, index: usize) -> Option<&dyn Inspect>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> dyn SequenceView + 'a {
    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> SequenceIter<'_> {
        SequenceIter {
            sequence: self,
            index: 0,
        }
    }
}

/// An iterator over the elements of a [`SequenceView`].
pub struct SequenceIter<'a> {
    sequence: &'a dyn SequenceView,
    index: usize,
}

impl<'a> Iterator for SequenceIter<'a> {
    type Item = &'a dyn Inspect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.sequence.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let hint = self.sequence.len().saturating_sub(self.index);
        (hint, Some(hint))
    }
}

impl ExactSizeIterator for SequenceIter<'_> {}
