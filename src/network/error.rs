use thiserror::Error;

#[allow(clippy::module_name_repetitions)]
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum PrefixError {
    #[error("{input} invalid input, does not match IP Address or Prefix: {reason}")]
    InvalidInput { input: String, reason: String },
    #[error("{address} does not include a subnet mask, try {suggestion}")]
    MissingPrefixLength { address: String, suggestion: String },
    #[error("address bit length {0} not handled")]
    UnsupportedAddressFamily(u8),
    #[error("prefix splits into {count} zones, more than the limit of {limit}")]
    TooManyBlocks { count: u128, limit: u128 },
}

impl PrefixError {
    pub fn invalid(input: &str, reason: impl ToString) -> Self {
        Self::InvalidInput {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whitespace-separated tokens for the `[FATAL]` line.
    pub fn fatal_parts(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { input, .. } => vec![
                input.clone(),
                "invalid input, does not match IP Address or Prefix".to_string(),
            ],
            Self::MissingPrefixLength {
                address,
                suggestion,
            } => vec![
                address.clone(),
                "does not include a subnet mask, try".to_string(),
                suggestion.clone(),
            ],
            other => vec![other.to_string()],
        }
    }
}
