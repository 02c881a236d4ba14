//! Path components and their per-dimension slicing.

use super::slice::Slice;

/// One component of a variable path, e.g. `foo[0:2:10]`.
///
/// The rank of a segment is the number of slices it carries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub name: String,
    pub slices: Vec<Slice>,
    /// Slices were given explicitly (or filled in by [`Segment::qualify_sizes`]).
    pub slices_defined: bool,
    /// Every slice carries the declared size of its dimension.
    pub slices_declsized: bool,
}

/// Per-dimension index vectors of a segment, in the shape a
/// `get_vars`-style array read expects.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SegmentIndices {
    pub start: Vec<usize>,
    pub count: Vec<usize>,
    pub stride: Vec<usize>,
    pub sizes: Vec<usize>,
}

impl Segment {
    /// An unsliced segment.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// A segment with explicitly given slices.
    pub fn with_slices(name: impl Into<String>, slices: Vec<Slice>) -> Self {
        Self {
            name: name.into(),
            slices,
            slices_defined: true,
            slices_declsized: false,
        }
    }

    pub fn rank(&self) -> usize {
        self.slices.len()
    }

    /// True when slices are defined and every one of them is whole.
    ///
    /// A segment whose slices were never defined is not known to be whole.
    pub fn is_whole(&self) -> bool {
        self.slices_defined && self.slices.iter().all(Slice::is_whole)
    }

    /// Fill in declared dimension sizes.
    ///
    /// Segments without explicit slices get one whole slice per dimension;
    /// explicit slices only receive their `declsize`. Extra sizes beyond the
    /// segment's rank are ignored for explicitly sliced segments.
    pub fn qualify_sizes(&mut self, declsizes: &[usize]) {
        if self.slices_defined {
            for (slice, &declsize) in self.slices.iter_mut().zip(declsizes) {
                slice.declsize = declsize;
            }
        } else {
            self.slices = declsizes.iter().copied().map(Slice::make_whole).collect();
        }
        self.slices_defined = true;
        self.slices_declsized = true;
    }

    pub fn transpose(&self) -> SegmentIndices {
        SegmentIndices {
            start: self.slices.iter().map(|s| s.first).collect(),
            count: self.slices.iter().map(|s| s.count).collect(),
            stride: self.slices.iter().map(|s| s.stride).collect(),
            sizes: self.slices.iter().map(|s| s.declsize).collect(),
        }
    }

    /// Number of elements selected by the slices in `start..stop`.
    ///
    /// Returns 0 when the segment's slices are not defined.
    pub fn size(&self, start: usize, stop: usize) -> usize {
        if !self.slices_defined {
            return 0;
        }
        let stop = stop.min(self.rank());
        self.slices
            .get(start..stop)
            .map_or(1, |slices| slices.iter().map(|s| s.count).product())
    }

    /// Leftmost index in `start..stop` from which every slice to the right is
    /// whole, so that those dimensions can be read as one contiguous chunk.
    ///
    /// Returns `stop` when no such index exists or the slices are undefined.
    pub fn safe_index(&self, start: usize, stop: usize) -> usize {
        if !self.slices_defined || stop == 0 {
            return stop;
        }
        let stop = stop.min(self.rank());
        if start >= stop {
            return stop;
        }
        let mut safe = stop - 1;
        while safe > start {
            if !self.slices[safe].is_whole() {
                return safe + 1;
            }
            safe -= 1;
        }
        if self.slices[start].is_whole() { start } else { start + 1 }
    }
}
