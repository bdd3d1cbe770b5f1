use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlbumError {
    #[error("index {index} out of range for {len} page(s)")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, AlbumError>;

/// Which page actions are currently available, derived fresh per query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub can_step_back: bool,
    pub can_step_forward: bool,
    pub can_remove: bool,
    pub can_rotate: bool,
    pub can_save: bool,
}

/// What happened to a rotate trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateOutcome {
    /// The active page was transposed and the view refreshed
    Applied,
    /// A rotation was already in flight; this trigger was dropped
    Busy,
    /// No active page to rotate
    NothingToRotate,
}

/// A block move reported by the page list.
///
/// Rows `start..=end_inclusive` were lifted as one block. A `destination`
/// past the block lands it with its last row at `destination`; a
/// `destination` before it lands it with its first row there. Destinations
/// inside `start..=end_inclusive + 1` put every row back where it started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowMove {
    pub start: usize,
    pub end_inclusive: usize,
    pub destination: usize,
}
