//! Layout: shape, strides and offset of a tensor view

use smallvec::SmallVec;
use std::fmt;

/// Inline capacity for dimension lists; matrices and pivot vectors stay well below it
const STACK_DIMS: usize = 4;

/// Extent of each dimension
pub type Shape = SmallVec<[usize; STACK_DIMS]>;

/// Per-dimension step between neighbouring elements, counted in elements
pub type Strides = SmallVec<[isize; STACK_DIMS]>;

/// How a view maps indices onto its storage
///
/// Element `[i0, .., ik]` lives at `offset + sum(i_d * strides[d])`.
/// Transposing swaps entries of `shape` and `strides` and leaves the
/// storage alone, so a transposed row-major matrix reads its buffer in
/// column-major order.
#[derive(Clone, PartialEq, Eq)]
pub struct Layout {
    shape: Shape,
    strides: Strides,
    offset: usize,
}

impl Layout {
    /// Row-major layout over a freshly allocated buffer
    ///
    /// # Example
    /// ```
    /// use pivlu::tensor::Layout;
    /// let layout = Layout::contiguous(&[2, 3]);
    /// assert_eq!(layout.strides(), &[3, 1]);
    /// ```
    pub fn contiguous(shape: &[usize]) -> Self {
        let shape: Shape = shape.iter().copied().collect();
        let strides = row_major_strides(&shape);
        Self {
            shape,
            strides,
            offset: 0,
        }
    }

    /// Dimensions of the view
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Strides of the view, in elements
    #[inline]
    pub fn strides(&self) -> &[isize] {
        &self.strides
    }

    /// Element offset of the first viewed element
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Rank
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Number of viewed elements (1 for a 0-dimensional view)
    #[inline]
    pub fn elem_count(&self) -> usize {
        self.shape.iter().product()
    }

    /// True when the view is row-major over its buffer starting at offset 0
    pub fn is_contiguous(&self) -> bool {
        self.offset == 0 && self.strides == row_major_strides(&self.shape)
    }

    /// Resolve a possibly negative dimension (`-1` is the last one)
    pub fn normalize_dim(&self, d: isize) -> Option<usize> {
        let ndim = self.ndim() as isize;
        let idx = if d < 0 { ndim + d } else { d };
        (0..ndim).contains(&idx).then_some(idx as usize)
    }

    /// Swap two dimensions of the view
    ///
    /// Returns `None` if either dimension is out of range.
    pub fn transpose(&self, dim0: isize, dim1: isize) -> Option<Self> {
        let d0 = self.normalize_dim(dim0)?;
        let d1 = self.normalize_dim(dim1)?;

        let mut layout = self.clone();
        layout.shape.swap(d0, d1);
        layout.strides.swap(d0, d1);
        Some(layout)
    }
}

fn row_major_strides(shape: &[usize]) -> Strides {
    let mut strides: Strides = SmallVec::from_elem(0, shape.len());
    let mut step = 1isize;
    for (stride, &extent) in strides.iter_mut().zip(shape).rev() {
        *stride = step;
        step *= extent as isize;
    }
    strides
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layout")
            .field("shape", &self.shape.as_slice())
            .field("strides", &self.strides.as_slice())
            .field("offset", &self.offset)
            .finish()
    }
}
