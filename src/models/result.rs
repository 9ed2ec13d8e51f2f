/// Method label reported when every strategy was exhausted
pub const METHOD_NONE: &str = "none";

/// Outcome of a recovery run.
///
/// Invariant: `content` is `Some` iff `confidence > 0.0` iff some strategy
/// in the ladder decoded the image. On exhaustion the result still reports
/// how much work was spent (`attempts_used`, `processing_time_ms`).
#[derive(Debug, Clone, PartialEq)]
pub struct RecoveryResult {
    /// Decoded text, if any strategy succeeded
    pub content: Option<String>,
    /// Confidence ceiling of the succeeding strategy, 0.0 on exhaustion
    pub confidence: f32,
    /// Label of the succeeding strategy, `"none"` on exhaustion
    pub method: &'static str,
    /// Number of strategy tiers tried, at least 1
    pub attempts_used: u32,
    /// Wall-clock time spent inside the ladder, in milliseconds
    pub processing_time_ms: u64,
}

impl RecoveryResult {
    pub(crate) fn success(
        content: String,
        confidence: f32,
        method: &'static str,
        attempts_used: u32,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            content: Some(content),
            confidence,
            method,
            attempts_used,
            processing_time_ms,
        }
    }

    pub(crate) fn exhausted(attempts_used: u32, processing_time_ms: u64) -> Self {
        Self {
            content: None,
            confidence: 0.0,
            method: METHOD_NONE,
            attempts_used,
            processing_time_ms,
        }
    }

    /// True if some strategy decoded the image
    pub fn is_recovered(&self) -> bool {
        self.content.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_invariant() {
        let ok = RecoveryResult::success("hi".into(), 0.9, "enhanced", 2, 12);
        assert!(ok.is_recovered());
        assert!(ok.confidence > 0.0);

        let none = RecoveryResult::exhausted(7, 40);
        assert!(!none.is_recovered());
        assert_eq!(none.confidence, 0.0);
        assert_eq!(none.method, METHOD_NONE);
        assert_eq!(none.attempts_used, 7);
    }
}
