//! Diagnostics reported while processing a batch of candidates.
//!
//! One bad candidate never blocks generation for the others; problems are
//! collected here and surfaced to the host's diagnostic channel instead.
//! Two things can go wrong: a candidate is rejected outright (error, no
//! proxy emitted for it), or a member is skipped while the rest of the
//! proxy still generates (warning).

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    /// The candidate was dropped; no proxy was generated for it.
    Error,
    /// A member was skipped but the proxy still generated.
    Warning,
}

impl Severity {
    /// Returns true if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic tied to one candidate (or one of its members).
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The stage that produced this diagnostic.
    pub stage: &'static str,
    /// The diagnostic message.
    pub message: String,
    /// Candidate or member the diagnostic refers to (e.g. "UserRepository"
    /// or "UserRepository.<unnamed>").
    pub location: String,
}

impl Diagnostic {
    /// A candidate rejected during classification: no proxy is generated
    /// for it and the batch moves on.
    pub fn candidate_dropped(candidate: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            stage: "classify",
            message: message.into(),
            location: candidate.into(),
        }
    }

    /// A non-private member skipped because its name could not be
    /// resolved. The rest of the candidate still generates.
    pub fn member_skipped(candidate: &str) -> Self {
        Self {
            severity: Severity::Warning,
            stage: "describe",
            message: "member name unresolved; member skipped".into(),
            location: format!("{candidate}.<unnamed>"),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} (at {})", self.severity, self.message, self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_dropped_is_error() {
        let diag = Diagnostic::candidate_dropped("Color", "unsupported declaration shape");
        assert!(diag.severity.is_error());
        assert_eq!(diag.stage, "classify");
        assert_eq!(diag.location, "Color");
    }

    #[test]
    fn test_member_skipped_is_warning() {
        let diag = Diagnostic::member_skipped("UserRepository");
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.location, "UserRepository.<unnamed>");
        assert!(diag.to_string().contains("(at UserRepository.<unnamed>)"));
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }
}
