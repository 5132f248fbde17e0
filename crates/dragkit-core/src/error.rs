use std::fmt;

/// A vertex could not be mapped into normalized device coordinates.
///
/// Callers treat the vertex as unprojectable and leave it out of hit-testing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    /// `clip.w` was exactly zero; the perspective divide is undefined.
    ZeroW,
    /// The divide produced NaN or infinity (degenerate or non-finite matrix).
    NonFinite,
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::ZeroW => write!(f, "invalid projection: clip-space w is zero"),
            ProjectionError::NonFinite => write!(f, "invalid projection: non-finite NDC result"),
        }
    }
}

impl std::error::Error for ProjectionError {}

/// A drag policy name could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPolicyParseError {
    pub input: String,
}

impl DragPolicyParseError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self { input: input.into() }
    }
}

impl fmt::Display for DragPolicyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown drag policy '{}' (expected offset, follow, or accumulate[:gain])",
            self.input
        )
    }
}

impl std::error::Error for DragPolicyParseError {}
