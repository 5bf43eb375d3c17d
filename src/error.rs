// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for model construction, mutation and evaluation.
//!
//! Every error is raised before the model is touched, so a failed call leaves
//! the model exactly as it was.

use thiserror::Error;

use crate::vartype::Vartype;

/// Errors that can occur when building, mutating or evaluating a model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Variable index outside `[0, num_variables)`.
    #[error("variable {index} out of range for a model with {num_variables} variables")]
    OutOfRange { index: usize, num_variables: usize },

    /// Strict neighborhood lookup on a key that is not stored.
    #[error("neighbor {key} not found")]
    NotFound { key: usize },

    /// Strict interaction lookup on a pair with no stored bias.
    #[error("no interaction stored between {u} and {v}")]
    InteractionNotFound { u: usize, v: usize },

    /// The same variable was supplied twice to a pairwise operation.
    #[error("variable {variable} cannot interact with itself")]
    SelfLoop { variable: usize },

    /// Malformed argument: unknown domain name, bad matrix shape, bad generator parameter.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Assignment length does not match the number of variables.
    #[error("sample has {actual} values but the model has {expected} variables")]
    SampleLength { expected: usize, actual: usize },

    /// Assignment value not drawn from the model's domain.
    #[error("value {value} at variable {index} is not in the {vartype} domain")]
    ValueOutOfDomain {
        index: usize,
        value: i8,
        vartype: Vartype,
    },
}

impl ModelError {
    /// Create an InvalidArgument error.
    pub fn invalid(message: impl Into<String>) -> Self {
        ModelError::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_out_of_range() {
        let err = ModelError::OutOfRange {
            index: 7,
            num_variables: 5,
        };
        assert_eq!(
            err.to_string(),
            "variable 7 out of range for a model with 5 variables"
        );
    }

    #[test]
    fn test_display_out_of_domain() {
        let err = ModelError::ValueOutOfDomain {
            index: 2,
            value: 0,
            vartype: Vartype::Spin,
        };
        assert_eq!(
            err.to_string(),
            "value 0 at variable 2 is not in the SPIN domain"
        );
    }

    #[test]
    fn test_invalid_helper() {
        let err = ModelError::invalid("bad shape");
        assert_eq!(err, ModelError::InvalidArgument("bad shape".to_string()));
    }
}
