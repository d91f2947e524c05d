use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Metadata API key.
///
/// Zeroed on drop and redacted from `Debug` output so it never ends up in
/// logs.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ApiKey {
    value: String,
}

impl ApiKey {
    /// Wraps `value` after trimming; blank input yields `None`.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let mut value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            value.zeroize();
            return None;
        }
        let key = Self {
            value: trimmed.to_string(),
        };
        value.zeroize();
        Some(key)
    }

    /// The raw key, for appending to outgoing requests only.
    pub fn expose_secret(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_keys_are_rejected() {
        assert!(ApiKey::new("").is_none());
        assert!(ApiKey::new("  \n").is_none());
    }

    #[test]
    fn debug_output_is_redacted() {
        let key = ApiKey::new(" abc123 ").unwrap();
        assert_eq!(key.expose_secret(), "abc123");
        assert!(!format!("{key:?}").contains("abc123"));
    }
}
