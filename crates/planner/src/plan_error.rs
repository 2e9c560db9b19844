// ---------------------------------------------------------------------------
// PlanError: rejected inputs and impossible building dimensions
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors raised before any geometry is computed.
///
/// Once a request passes validation, layout and building assembly cannot
/// fail, so every variant here describes bad input rather than a runtime
/// failure.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanError {
    /// A form field did not parse as a number.
    NotANumber { field: &'static str, input: String },
    /// A numeric field parsed but lies outside its accepted range.
    OutOfRange {
        field: &'static str,
        value: i64,
        min: u32,
        max: u32,
    },
    /// Building dimensions are non-positive or too shallow for the template.
    InvalidDimensions(String),
    /// The back row is too narrow to hold the requested bedrooms.
    BedroomsDoNotFit { width: f32, bedrooms: u32 },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::NotANumber { field, input } => {
                write!(f, "{field} must be a whole number, got \"{input}\"")
            }
            PlanError::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{field} must be between {min} and {max}, got {value}"),
            PlanError::InvalidDimensions(msg) => write!(f, "Invalid building dimensions: {msg}"),
            PlanError::BedroomsDoNotFit { width, bedrooms } => write!(
                f,
                "{bedrooms} bedrooms do not fit in a {width:.1} wide building"
            ),
        }
    }
}

impl std::error::Error for PlanError {}
