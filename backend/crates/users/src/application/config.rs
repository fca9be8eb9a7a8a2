//! Application Configuration
//!
//! Configuration for the Users application layer.

/// Users application configuration
#[derive(Debug, Clone, Default)]
pub struct UsersConfig {
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl UsersConfig {
    /// Create config with a pepper
    pub fn with_pepper(pepper: impl Into<Vec<u8>>) -> Self {
        Self {
            password_pepper: Some(pepper.into()),
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_pepper() {
        assert!(UsersConfig::default().pepper().is_none());
    }

    #[test]
    fn test_with_pepper() {
        let config = UsersConfig::with_pepper(b"secret".to_vec());
        assert_eq!(config.pepper(), Some(b"secret".as_slice()));
    }
}
