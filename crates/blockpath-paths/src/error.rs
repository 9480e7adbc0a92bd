use std::fmt;

use blockpath_core::{Point, Range};

/// Which end of a search a coordinate was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::Goal => f.write_str("goal"),
        }
    }
}

/// Errors raised before a search begins.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The start or goal lies outside the grid.
    #[error("{endpoint} {pos} is outside grid bounds {bounds}")]
    InvalidEndpoint {
        endpoint: Endpoint,
        pos: Point,
        bounds: Range,
    },
}
