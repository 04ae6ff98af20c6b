//! Type definitions for the inline stage

/// Result of the best-effort inline stage
///
/// A failed inline pass is not an error: the stylesheets compiled fine and
/// the caller may still want to know that. It is reported as `Degraded` so
/// it cannot be mistaken for success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineOutcome {
    /// CSS was inlined into the document
    Inlined(String),
    /// The inlining engine failed; the reason was logged
    Degraded { reason: String },
}

impl InlineOutcome {
    /// The inlined HTML, if inlining succeeded
    #[must_use]
    pub fn html(&self) -> Option<&str> {
        match self {
            InlineOutcome::Inlined(html) => Some(html),
            InlineOutcome::Degraded { .. } => None,
        }
    }

    #[must_use]
    pub fn into_html(self) -> Option<String> {
        match self {
            InlineOutcome::Inlined(html) => Some(html),
            InlineOutcome::Degraded { .. } => None,
        }
    }

    #[must_use]
    pub fn is_degraded(&self) -> bool {
        matches!(self, InlineOutcome::Degraded { .. })
    }
}
