//! Buffer capabilities the distribution operations are written against.
//!
//! Every operation reads or writes a positionally addressed sequence. Rather than
//! fixing a container type, the operations accept anything implementing
//! [`Buffer`] (read) or [`BufferMut`] (read + write): slices, vectors, arrays, and
//! [`Window`], a caller-declared `start..end` view over borrowed storage.
//!
//! Read-only inputs that are only traversed (scores, votes) go through the
//! narrower [`Source`] capability instead: anything that can hand out a
//! cloneable forward iterator over its declared span, including `VecDeque` and
//! arbitrary iterators wrapped in [`Seq`].
//!
//! The declared [`Span`] is what the range checks look at. Slices, vectors and
//! arrays always span their full length; only a `Window` can carry an inverted
//! range, which the operations reject with [`Error::BadRange`].

use std::collections::{vec_deque, VecDeque};
use std::iter::Copied;
use std::slice;

use crate::Error;

/// Declared `[start, end)` bounds of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// `0..len`.
    pub const fn full(len: usize) -> Self {
        Self { start: 0, end: len }
    }

    /// Number of positions covered, or `BadRange` if `end < start`.
    pub fn len(self) -> Result<usize, Error> {
        self.end.checked_sub(self.start).ok_or(Error::BadRange)
    }

    pub fn is_inverted(self) -> bool {
        self.end < self.start
    }
}

/// Read capability: known-length, randomly addressable storage plus declared bounds.
pub trait Buffer<T> {
    /// The full backing storage. Positions outside [`Buffer::span`] are never read.
    fn storage(&self) -> &[T];

    /// Declared bounds within [`Buffer::storage`].
    fn span(&self) -> Span {
        Span::full(self.storage().len())
    }

    /// The positions selected by the span.
    ///
    /// Fails with `BadRange` when the span is inverted or reaches past the storage.
    fn checked(&self) -> Result<&[T], Error> {
        let span = self.span();
        span.len()?;
        self.storage().get(span.start..span.end).ok_or(Error::BadRange)
    }
}

/// Write capability on top of [`Buffer`].
pub trait BufferMut<T>: Buffer<T> {
    fn storage_mut(&mut self) -> &mut [T];

    /// Mutable counterpart of [`Buffer::checked`].
    fn checked_mut(&mut self) -> Result<&mut [T], Error> {
        let span = self.span();
        span.len()?;
        self.storage_mut()
            .get_mut(span.start..span.end)
            .ok_or(Error::BadRange)
    }
}

impl<T> Buffer<T> for [T] {
    fn storage(&self) -> &[T] {
        self
    }
}

impl<T> BufferMut<T> for [T] {
    fn storage_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Buffer<T> for Vec<T> {
    fn storage(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BufferMut<T> for Vec<T> {
    fn storage_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> Buffer<T> for [T; N] {
    fn storage(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> BufferMut<T> for [T; N] {
    fn storage_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// A `start..end` view over borrowed storage (`&[T]` or `&mut [T]`).
///
/// The bounds are taken as given and only validated when an operation runs.
///
/// ```rust
/// use explore::{generate_epsilon_greedy, Error, Span, Window};
///
/// let mut storage = [9.0f32; 6];
/// // Only positions 1..4 form the distribution; the rest is left alone.
/// generate_epsilon_greedy(0.0, 1, &mut Window::new(&mut storage[..], 1, 4)).unwrap();
/// assert_eq!(storage, [9.0, 0.0, 1.0, 0.0, 9.0, 9.0]);
///
/// let span = Span::new(4, 2);
/// assert!(span.is_inverted());
/// let mut w = Window::with_span(&mut storage[..], span);
/// assert_eq!(generate_epsilon_greedy(0.5, 0, &mut w), Err(Error::BadRange));
/// assert_eq!(w.into_inner()[1..4], [0.0, 1.0, 0.0]);
/// ```
#[derive(Debug)]
pub struct Window<S> {
    storage: S,
    span: Span,
}

impl<S> Window<S> {
    pub fn new(storage: S, start: usize, end: usize) -> Self {
        Self {
            storage,
            span: Span::new(start, end),
        }
    }

    pub fn with_span(storage: S, span: Span) -> Self {
        Self { storage, span }
    }

    pub fn into_inner(self) -> S {
        self.storage
    }
}

impl<'a, T> Buffer<T> for Window<&'a [T]> {
    fn storage(&self) -> &[T] {
        self.storage
    }

    fn span(&self) -> Span {
        self.span
    }
}

impl<'a, T> Buffer<T> for Window<&'a mut [T]> {
    fn storage(&self) -> &[T] {
        &*self.storage
    }

    fn span(&self) -> Span {
        self.span
    }
}

impl<'a, T> BufferMut<T> for Window<&'a mut [T]> {
    fn storage_mut(&mut self) -> &mut [T] {
        &mut *self.storage
    }
}

/// Forward-readable input capability for sequences that are only traversed.
///
/// [`Source::values`] yields the positions inside [`Source::bounds`]; the iterator
/// is `Clone` so callers can make more than one pass (softmax reads the maximum
/// first, then exponentiates).
pub trait Source<T> {
    type Values<'a>: Iterator<Item = T> + Clone
    where
        Self: 'a;

    /// Declared bounds of the sequence.
    fn bounds(&self) -> Span;

    /// Iterator over the declared positions.
    ///
    /// Fails with `BadRange` when the bounds are inverted or reach past the storage.
    fn values(&self) -> Result<Self::Values<'_>, Error>;
}

impl<T: Copy> Source<T> for [T] {
    type Values<'a> = Copied<slice::Iter<'a, T>> where Self: 'a;

    fn bounds(&self) -> Span {
        Span::full(self.len())
    }

    fn values(&self) -> Result<Self::Values<'_>, Error> {
        Ok(self.iter().copied())
    }
}

impl<T: Copy> Source<T> for Vec<T> {
    type Values<'a> = Copied<slice::Iter<'a, T>> where Self: 'a;

    fn bounds(&self) -> Span {
        Span::full(self.len())
    }

    fn values(&self) -> Result<Self::Values<'_>, Error> {
        Ok(self.iter().copied())
    }
}

impl<T: Copy, const N: usize> Source<T> for [T; N] {
    type Values<'a> = Copied<slice::Iter<'a, T>> where Self: 'a;

    fn bounds(&self) -> Span {
        Span::full(N)
    }

    fn values(&self) -> Result<Self::Values<'_>, Error> {
        Ok(self.iter().copied())
    }
}

impl<T: Copy> Source<T> for VecDeque<T> {
    type Values<'a> = Copied<vec_deque::Iter<'a, T>> where Self: 'a;

    fn bounds(&self) -> Span {
        Span::full(self.len())
    }

    fn values(&self) -> Result<Self::Values<'_>, Error> {
        Ok(self.iter().copied())
    }
}

impl<'s, T: Copy> Source<T> for Window<&'s [T]> {
    type Values<'a> = Copied<slice::Iter<'a, T>> where Self: 'a;

    fn bounds(&self) -> Span {
        self.span
    }

    fn values(&self) -> Result<Self::Values<'_>, Error> {
        Ok(self.checked()?.iter().copied())
    }
}

impl<'s, T: Copy> Source<T> for Window<&'s mut [T]> {
    type Values<'a> = Copied<slice::Iter<'a, T>> where Self: 'a;

    fn bounds(&self) -> Span {
        self.span
    }

    fn values(&self) -> Result<Self::Values<'_>, Error> {
        Ok(self.checked()?.iter().copied())
    }
}

/// Adapts any cloneable iterator into a [`Source`].
///
/// The length is found by walking a clone of the iterator.
///
/// ```rust
/// use explore::{generate_softmax, Seq};
///
/// let raw = [2.0f32, 7.0, 2.0];
/// let mut pdf = [0.0f32; 2];
/// // Scores computed on the fly; only the first two are used.
/// generate_softmax(0.0, &Seq(raw.iter().map(|s| s * 0.5)), &mut pdf).unwrap();
/// assert_eq!(pdf, [0.5, 0.5]);
/// ```
#[derive(Debug, Clone)]
pub struct Seq<I>(pub I);

impl<T, I> Source<T> for Seq<I>
where
    I: Iterator<Item = T> + Clone,
{
    type Values<'a> = I where Self: 'a;

    fn bounds(&self) -> Span {
        Span::full(self.0.clone().count())
    }

    fn values(&self) -> Result<Self::Values<'_>, Error> {
        Ok(self.0.clone())
    }
}
