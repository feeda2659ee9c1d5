//! This module defines the error types used by the `atlas-grid` crate.
//!
//! Off-grid positions are not errors; they surface as `None` from the
//! mapping functions. Errors here cover configuration and malformed input
//! data only.

#![warn(missing_docs)]

use thiserror::Error;

/// Error type for grid configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Error for an invalid server count along either axis.
    /// Returned when a count is zero or exceeds the 26 available column letters.
    #[error("Invalid server count: {0}")]
    InvalidServerCount(&'static str),
    /// Error for an invalid grid cell size.
    /// Returned when the cell size is not a positive, finite number.
    #[error("Invalid grid size: {0}")]
    InvalidGridSize(&'static str),
}

/// Error type for placement data read from island and ship-path records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    /// A spawn offset string did not contain two numeric components.
    #[error("Invalid spawn offset {offset:?}: {reason}")]
    InvalidOffset {
        /// The offending offset text.
        offset: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}
