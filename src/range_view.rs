//! Non-owning views over contiguous storage.
//!
//! A view borrows its storage, so it can never outlive it. Building a view
//! out of a temporary is rejected by the borrow checker:
//!
//! ```compile_fail
//! use divconq::range_view::RangeView;
//!
//! let view = RangeView::new(&vec![1, 2, 3]);
//! assert_eq!(view.len(), 3);
//! ```
use rayon::prelude::*;
use std::ops::{Index, IndexMut, Range};

/// A read-only view of a half-open range of some storage.
///
/// `start` is the position of the first viewed element in the storage the
/// view was originally built from, so that sub-views keep track of where
/// they are.
#[derive(Debug)]
pub struct RangeView<'a, T> {
    data: &'a [T],
    start: usize,
}

impl<'a, T> Clone for RangeView<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for RangeView<'a, T> {}

impl<'a, T> RangeView<'a, T> {
    /// Creates a view over the whole storage.
    ///
    /// # Example
    /// ```
    /// use divconq::range_view::RangeView;
    ///
    /// let storage = vec![4, 8, 15, 16, 23, 42];
    /// let view = RangeView::new(&storage);
    ///
    /// assert_eq!(view.len(), 6);
    /// assert_eq!(view[3], 16);
    /// ```
    pub fn new<S>(storage: &'a S) -> RangeView<'a, T>
    where
        S: AsRef<[T]> + ?Sized,
    {
        RangeView {
            data: storage.as_ref(),
            start: 0,
        }
    }

    /// Creates a view over `begin..end` of the storage.
    ///
    /// # Example
    /// ```
    /// use divconq::range_view::RangeView;
    ///
    /// let storage = [4, 8, 15, 16, 23, 42];
    /// let view = RangeView::from_range(&storage, 2..5);
    ///
    /// assert_eq!(view.iter().copied().collect::<Vec<i32>>(), vec![15, 16, 23]);
    /// assert_eq!(view.start(), 2);
    /// ```
    pub fn from_range<S>(storage: &'a S, range: Range<usize>) -> RangeView<'a, T>
    where
        S: AsRef<[T]> + ?Sized,
    {
        RangeView {
            data: &storage.as_ref()[range.clone()],
            start: range.start,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Position of the first element in the original storage.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Position one past the last element in the original storage.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.data.len()
    }

    /// Returns the sub-view from offset `from` to offset `to`.
    ///
    /// # Example
    /// ```
    /// use divconq::range_view::RangeView;
    ///
    /// let storage: Vec<u32> = (0..10).collect();
    /// let view = RangeView::new(&storage).cut(2, 8).cut(1, 3);
    ///
    /// assert_eq!(view.as_slice(), &[3, 4]);
    /// assert_eq!(view.start(), 3);
    /// ```
    pub fn cut(&self, from: usize, to: usize) -> RangeView<'a, T> {
        debug_assert!(from <= to && to <= self.len());
        RangeView {
            data: &self.data[from..to],
            start: self.start + from,
        }
    }

    /// Splits the view in two at offset `mid`.
    pub fn split_at(&self, mid: usize) -> (RangeView<'a, T>, RangeView<'a, T>) {
        (self.cut(0, mid), self.cut(mid, self.len()))
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.data.iter()
    }

    pub fn par_iter(&self) -> rayon::slice::Iter<'a, T>
    where
        T: Sync,
    {
        self.data.par_iter()
    }
}

impl<'a, T> Index<usize> for RangeView<'a, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<'a, T> From<&'a [T]> for RangeView<'a, T> {
    fn from(slice: &'a [T]) -> Self {
        RangeView::new(slice)
    }
}

impl<'a, T> IntoIterator for RangeView<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// A mutable view of a half-open range of some storage.
///
/// Mutable views can only be divided into halves that do not overlap, which
/// is what lets two halves be handed to concurrent tasks.
#[derive(Debug)]
pub struct RangeViewMut<'a, T> {
    data: &'a mut [T],
    start: usize,
}

impl<'a, T> RangeViewMut<'a, T> {
    pub fn new<S>(storage: &'a mut S) -> RangeViewMut<'a, T>
    where
        S: AsMut<[T]> + ?Sized,
    {
        RangeViewMut {
            data: storage.as_mut(),
            start: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Position of the first element in the original storage.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Reborrows the whole view for a shorter lifetime.
    pub fn reborrow(&mut self) -> RangeViewMut<'_, T> {
        RangeViewMut {
            data: &mut *self.data,
            start: self.start,
        }
    }

    /// Returns the mutable sub-view from offset `from` to offset `to`.
    pub fn cut(&mut self, from: usize, to: usize) -> RangeViewMut<'_, T> {
        debug_assert!(from <= to && to <= self.len());
        RangeViewMut {
            data: &mut self.data[from..to],
            start: self.start + from,
        }
    }

    /// Splits the view into two disjoint mutable halves at offset `mid`.
    ///
    /// # Example
    /// ```
    /// use divconq::range_view::RangeViewMut;
    ///
    /// let mut storage = vec![0u32; 6];
    /// let mut view = RangeViewMut::new(&mut storage);
    /// {
    ///     let (mut left, mut right) = view.split_at_mut(2);
    ///     rayon::join(|| left[1] = 1, || right[0] = right.start() as u32);
    /// }
    ///
    /// assert_eq!(storage, vec![0, 1, 2, 0, 0, 0]);
    /// ```
    pub fn split_at_mut(&mut self, mid: usize) -> (RangeViewMut<'_, T>, RangeViewMut<'_, T>) {
        let start = self.start;
        let (left, right) = self.data.split_at_mut(mid);
        (
            RangeViewMut { data: left, start },
            RangeViewMut {
                data: right,
                start: start + mid,
            },
        )
    }

    /// A read-only view of the same range.
    pub fn as_view(&self) -> RangeView<'_, T> {
        RangeView {
            data: &*self.data,
            start: self.start,
        }
    }
}

impl<'a, T> Index<usize> for RangeViewMut<'a, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<'a, T> IndexMut<usize> for RangeViewMut<'a, T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<'a, T> From<&'a mut [T]> for RangeViewMut<'a, T> {
    fn from(slice: &'a mut [T]) -> Self {
        RangeViewMut::new(slice)
    }
}
