use std::{fmt, marker::PhantomData, num::NonZeroUsize, ops, hash};

/// An index into a `[T]`, typed so indices of different collections cannot be mixed up.
#[repr(transparent)]
pub struct Idx<T>(NonZeroUsize, PhantomData<T>);

impl<T> fmt::Debug for Idx<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.usize(), f)
    }
}

impl<T> Idx<T> {
    pub fn new(index: usize) -> Self {
        let index = index + 1;
        Self(unsafe { NonZeroUsize::new_unchecked(index) }, PhantomData)
    }

    /// The following index, wrapping to the start of `slice`
    pub fn next_wrapped(&self, slice: &[T]) -> Self {
        debug_assert!(!slice.is_empty(), "slice must not be empty");
        Self::new((self.usize() + 1) % slice.len())
    }

    /// The preceding index, wrapping to the end of `slice`
    pub fn prev_wrapped(&self, slice: &[T]) -> Self {
        debug_assert!(!slice.is_empty(), "slice must not be empty");
        let index = if self.usize() == 0 {
            slice.len()
        } else {
            self.usize()
        };
        Self::new(index - 1)
    }

    pub fn usize(&self) -> usize {
        self.0.get() - 1
    }
}

// #[derive] does not work where type parameters do not implement the trait
// https://github.com/rust-lang/rust/issues/26925
impl<T> Clone for Idx<T> {
    fn clone(&self) -> Self {
        Self(self.0, PhantomData)
    }
}

impl<T> Copy for Idx<T> { }

impl<T> PartialEq for Idx<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Idx<T> { }

impl<T> hash::Hash for Idx<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> ops::Index<Idx<T>> for [T] {
    type Output = T;

    fn index(&self, index: Idx<T>) -> &Self::Output {
        &self[index.usize()]
    }
}

impl<T> ops::Index<Idx<T>> for Vec<T> {
    type Output = T;

    fn index(&self, index: Idx<T>) -> &Self::Output {
        &self[index.usize()]
    }
}

pub trait SliceExt<T> {
    fn iter_index(&self) -> SliceIndexIter<T>;
}

impl<T> SliceExt<T> for [T] {
    fn iter_index(&self) -> SliceIndexIter<T> {
        SliceIndexIter::new(self)
    }
}

pub struct SliceIndexIter<'a, T> {
    slice: &'a [T],
    index: usize,
}

impl<'a, T> SliceIndexIter<'a, T> {
    fn new(slice: &'a [T]) -> Self {
        Self {
            slice,
            index: 0,
        }
    }
}

impl<'a, T> Iterator for SliceIndexIter<'a, T> {
    type Item = Idx<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.slice.len() {
            let result = Some(Idx::new(self.index));
            self.index += 1;
            result
        } else {
            None
        }
    }
}
