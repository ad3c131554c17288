//! Page-load session identifier.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::clock::now_ms;

/// Identifier shared by every log line of one page load.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a new session ID from the clock and a process-wide counter.
    pub fn generate() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let counter = COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(format!("{:x}-{:x}", now_ms() as u64, counter))
    }

    /// Create from an existing ID string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(SessionId::generate(), SessionId::generate());
    }

    #[test]
    fn test_from_string() {
        assert_eq!(SessionId::new("abc").to_string(), "abc");
    }
}
