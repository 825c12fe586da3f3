use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidAmount { field: &'static str, value: f64 },
    ZeroDuration { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidAmount { field, value } => {
                write!(f, "{field} must be a finite non-negative amount, got {value}")
            }
            Self::ZeroDuration { field } => write!(f, "{field} must be greater than zero"),
        }
    }
}

impl std::error::Error for ValidationError {}
