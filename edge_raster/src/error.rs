use thiserror::Error;

///
/// Errors that can occur while filling in an edge table
///
/// The `push_*` functions on `AllEdges` treat these as fatal (a caller is drawing something more complicated than the
/// table was sized for), the `try_push_*` functions return them instead.
///
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeTableError {
    /// More edges were added than the table has room for
    #[error("edge table is full (capacity is {capacity} edges)")]
    TooManyEdges { capacity: usize },

    /// More fills were added than the table has room for
    #[error("fill table is full (capacity is {capacity} fills)")]
    TooManyFills { capacity: usize },
}

///
/// Errors that can occur while describing a frame buffer
///
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameError {
    /// The stride is shorter than a row of pixels
    #[error("stride of {stride} pixels is narrower than the frame width of {width} pixels")]
    StrideTooNarrow { width: usize, stride: usize },

    /// The buffer does not contain enough pixels for the frame
    #[error("frame needs {needed} pixels but the buffer only holds {found}")]
    BufferTooSmall { needed: usize, found: usize },
}
