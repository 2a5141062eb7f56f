use crate::submission_window::validation::{ValidationOutcome, WarningKind};
use derive_getters::Getters;
use serde::Deserialize;

pub const DEFAULT_ERROR_MESSAGE: &str =
    "The end date is greater than the start date of the submissions.";
pub const DEFAULT_BOTH_WARNING_MESSAGE: &str =
    "The end and start date is greater than the start date of the event.";
pub const DEFAULT_END_ONLY_WARNING_MESSAGE: &str =
    "The end date is greater than the start date of the event.";

/// Texts shown to the user for each validation outcome.
/// Any message missing from the configuration keeps its default text.
/// The init-only warning has no text unless configured: its panel is shown as is.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(default)]
pub struct OutcomeMessages {
    error: String,
    both_warning: String,
    end_only_warning: String,
    init_only_warning: Option<String>,
}

impl OutcomeMessages {
    pub fn new(
        error: String,
        both_warning: String,
        end_only_warning: String,
        init_only_warning: Option<String>,
    ) -> Self {
        Self {
            error,
            both_warning,
            end_only_warning,
            init_only_warning,
        }
    }

    pub fn for_warning(&self, kind: WarningKind) -> Option<&str> {
        match kind {
            WarningKind::Both => Some(self.both_warning.as_str()),
            WarningKind::EndOnly => Some(self.end_only_warning.as_str()),
            WarningKind::InitOnly => self.init_only_warning.as_deref(),
        }
    }

    /// The text to write for an outcome, if any. Nothing is shown when validation passes.
    pub fn for_outcome(&self, outcome: ValidationOutcome) -> Option<&str> {
        match outcome {
            ValidationOutcome::Pass => None,
            ValidationOutcome::Warning(kind) => self.for_warning(kind),
            ValidationOutcome::Error => Some(self.error.as_str()),
        }
    }
}

impl Default for OutcomeMessages {
    fn default() -> Self {
        Self::new(
            DEFAULT_ERROR_MESSAGE.to_owned(),
            DEFAULT_BOTH_WARNING_MESSAGE.to_owned(),
            DEFAULT_END_ONLY_WARNING_MESSAGE.to_owned(),
            None,
        )
    }
}
