//! Error types for the sorting trace engine.

/// Engine errors. All of them are detected before any sorting work starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// Selector is not one of the supported algorithms.
    #[error("unknown algorithm '{name}' (expected one of: bubble, selection, insertion, merge, quick, radix)")]
    InvalidAlgorithm { name: String },

    /// Input holds a value the selected algorithm cannot sort.
    #[error("invalid input{}: {reason}", at_index(.index))]
    InvalidInput {
        index: Option<usize>,
        reason: String,
    },

    /// Input is longer than the configured ceiling.
    #[error("input too large: {len} elements (max {max})")]
    InputTooLarge { len: usize, max: usize },
}

fn at_index(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at index {i}"),
        None => String::new(),
    }
}

impl SortError {
    pub fn invalid_input(index: Option<usize>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            index,
            reason: reason.into(),
        }
    }

    /// Transport status for this rejection (HTTP semantics).
    pub fn status(&self) -> u16 {
        match self {
            Self::InvalidAlgorithm { .. } => 404,
            Self::InvalidInput { .. } => 400,
            Self::InputTooLarge { .. } => 400,
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidAlgorithm { .. } => "not_found",
            Self::InvalidInput { .. } => "bad_request",
            Self::InputTooLarge { .. } => "input_too_large",
        }
    }
}

/// Result type for engine operations.
pub type SortResult<T> = Result<T, SortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message_includes_index_when_known() {
        let err = SortError::invalid_input(Some(2), "'x' is not a number");
        assert_eq!(err.to_string(), "invalid input at index 2: 'x' is not a number");

        let err = SortError::invalid_input(None, "expected a JSON array");
        assert_eq!(err.to_string(), "invalid input: expected a JSON array");
    }

    #[test]
    fn status_and_code_mapping() {
        let not_found = SortError::InvalidAlgorithm {
            name: "heap".into(),
        };
        assert_eq!(not_found.status(), 404);
        assert_eq!(not_found.code(), "not_found");

        let too_large = SortError::InputTooLarge { len: 300, max: 256 };
        assert_eq!(too_large.status(), 400);
        assert_eq!(too_large.code(), "input_too_large");
        assert_eq!(too_large.to_string(), "input too large: 300 elements (max 256)");
    }
}
