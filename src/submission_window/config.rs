use crate::submission_window::messages::OutcomeMessages;
use derive_getters::Getters;
use serde::Deserialize;

/// How the page asks for confirmation once the dates have been validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationPolicy {
    /// A panel for warnings and another one for errors, each with its own controls.
    #[default]
    Panel,
    /// A single dialog shared by every outcome.
    Modal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    policy: ConfirmationPolicy,
    messages: OutcomeMessages,
}

impl EditorConfig {
    pub fn new(policy: ConfirmationPolicy, messages: OutcomeMessages) -> Self {
        Self { policy, messages }
    }
}
