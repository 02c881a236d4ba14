//! One-dimensional strided subsets and the arithmetic that composes them.
//!
//! A [`Slice`] selects `count` elements starting at `first`, stepping by
//! `stride`, within a dimension of declared size `declsize`. `length` and
//! `stop` describe the half-open index span `first..stop` the slice touches.

use thiserror::Error;

/// A strided range over one dimension.
///
/// Invariants for well-formed slices: `stop == first + length`,
/// `count == ceil(length / stride)` and `stride >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slice {
    pub first: usize,
    pub stride: usize,
    pub length: usize,
    pub count: usize,
    pub stop: usize,
    /// Declared size of the dimension, 0 when unknown.
    pub declsize: usize,
}

/// A composed sub-range fell outside the range it was composed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid coordinates: merged range {first}..{stop} lies outside enclosing range ending at {limit}")]
pub struct InvalidCoordinates {
    pub first: usize,
    pub stop: usize,
    pub limit: usize,
}

impl Slice {
    /// Build the slice `[first:stride:last]` (both ends inclusive).
    ///
    /// `last` below `first` is clamped to `first`; callers that
    /// need to reject such input do so before construction. `last` must be
    /// below `usize::MAX`, otherwise `stop` saturates and the slice is short.
    pub fn new(first: usize, stride: usize, last: usize) -> Self {
        let stride = stride.max(1);
        let stop = last.max(first).saturating_add(1);
        let length = stop - first;
        Self {
            first,
            stride,
            length,
            count: length.div_ceil(stride),
            stop,
            declsize: 0,
        }
    }

    /// The default slice covering an entire dimension of `declsize` elements.
    pub fn make_whole(declsize: usize) -> Self {
        Self {
            first: 0,
            stride: 1,
            length: declsize,
            count: declsize,
            stop: declsize,
            declsize,
        }
    }

    /// True when this slice covers its whole declared dimension.
    pub fn is_whole(&self) -> bool {
        self.first == 0 && self.stride == 1 && self.stop == self.declsize
    }

    /// Index of the last element touched, clamped to the declared size when known.
    pub fn last(&self) -> usize {
        let last = (self.first + self.length).saturating_sub(1);
        if self.declsize > 0 {
            last.min(self.declsize - 1)
        } else {
            last
        }
    }

    /// Compose `src`, read as a selection within the elements `self` already
    /// selects, into a single strided range.
    ///
    /// ```text
    ///  0  1  2  3  4  5  6  7  8        self = (stride=3 first=1 length=25 stop=26)
    ///           0     1     2           src  = (stride=2 first=3 length=5  stop=8)
    ///                                   ---------------------------------------
    ///                                   out  = (stride=6 first=10 length=13 stop=23)
    /// ```
    pub fn compose(&self, src: &Slice) -> Result<Slice, InvalidCoordinates> {
        let reject = |first: usize, stop: usize| InvalidCoordinates {
            first,
            stop,
            limit: self.stop,
        };
        if self.stride == 0 || src.stride == 0 || src.length == 0 {
            return Err(reject(src.first, src.stop));
        }

        let stride = self
            .stride
            .checked_mul(src.stride)
            .ok_or_else(|| reject(src.first, src.stop))?;
        let first = src
            .first
            .checked_mul(self.stride)
            .and_then(|offset| offset.checked_add(self.first))
            .ok_or_else(|| reject(src.first, src.stop))?;
        let length = ((src.length - 1) / src.stride)
            .checked_mul(stride)
            .and_then(|span| span.checked_add(1))
            .ok_or_else(|| reject(first, usize::MAX))?;
        let stop = first
            .checked_add(length)
            .ok_or_else(|| reject(first, usize::MAX))?;

        if first >= self.stop || stop > self.stop {
            return Err(reject(first, stop));
        }

        Ok(Slice {
            first,
            stride,
            length,
            count: length.div_ceil(stride),
            stop,
            declsize: self.declsize.max(src.declsize),
        })
    }

    /// Replace `self` with its composition with `src`.
    ///
    /// On error `self` is left unchanged.
    pub fn merge(&mut self, src: &Slice) -> Result<Slice, InvalidCoordinates> {
        let merged = self.compose(src)?;
        *self = merged;
        Ok(merged)
    }

    /// Rebase the slice so it runs over `0..count` with stride 1.
    pub fn shift(&mut self) {
        if self.first == 0 && self.stride == 1 {
            return;
        }
        self.first = 0;
        self.stride = 1;
        self.length = self.count;
        self.stop = self.count;
    }
}
