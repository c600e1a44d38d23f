use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlannerError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    #[error("Invalid input '{field}': {message}")]
    InvalidInput { field: String, message: String },

    #[error("Computation failed: {0}")]
    Computation(String),
}

impl PlannerError {
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        PlannerError::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            PlannerError::InvalidInput { .. } => "InvalidInput",
            PlannerError::Computation(_) => "ComputationError",
        }
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            PlannerError::InvalidInput { field, .. } => Some(field),
            PlannerError::Computation(_) => None,
        }
    }
}

pub(crate) fn require_finite(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PlannerError::invalid(field, "must be a finite number"))
    }
}

pub(crate) fn require_range(field: &str, value: f64, min: f64, max: f64) -> Result<f64> {
    let value = require_finite(field, value)?;
    if value < min {
        return Err(PlannerError::invalid(field, format!("must be >= {min}")));
    }
    if value > max {
        return Err(PlannerError::invalid(field, format!("must be <= {max}")));
    }
    Ok(value)
}

pub(crate) fn require_years(field: &str, value: u32, min: u32, max: u32) -> Result<u32> {
    if value < min {
        return Err(PlannerError::invalid(field, format!("must be >= {min}")));
    }
    if value > max {
        return Err(PlannerError::invalid(field, format!("must be <= {max}")));
    }
    Ok(value)
}

pub(crate) fn ensure_finite(what: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PlannerError::Computation(format!(
            "{what} is not a finite number"
        )))
    }
}
