//! Error types for gradient composition
//!
//! The model has exactly one recoverable error condition (removing a stop
//! below the minimum); everything else here covers the input boundary,
//! where free-text color literals arrive from a front-end.
//!
//! Errors derive `thiserror`, keeping the user-facing message next to
//! each variant.

use thiserror::Error;

use crate::color::ColorError;
use crate::stops::MIN_STOPS;

/// Result type alias for gradient operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type
///
/// # Examples
///
/// ```
/// use gradgen::{Error, StopList};
///
/// let mut stops = StopList::default();
/// let id = stops.iter().next().unwrap().id;
/// assert!(matches!(stops.remove(id), Err(Error::MinimumStops { .. })));
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A stop removal would leave the gradient with too few stops.
    ///
    /// Non-fatal: the collection is left unchanged and the message is meant
    /// to be surfaced to the user directly.
    #[error("a gradient needs at least {required} color stops")]
    MinimumStops { required: usize },

    /// A color literal failed validation at an input boundary
    #[error(transparent)]
    Color(#[from] ColorError),
}

impl Error {
    /// The `MinimumStops` error with the crate-wide minimum filled in
    pub fn minimum_stops() -> Self {
        Error::MinimumStops { required: MIN_STOPS }
    }
}
