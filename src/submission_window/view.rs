use crate::submission_window::config::{ConfirmationPolicy, EditorConfig};
use crate::submission_window::editor::EditorState;
use crate::submission_window::validation::ValidationOutcome;
use derive_getters::Getters;

/// What the page has to display for a given editor state.
///
/// Back buttons live inside the warning panel, the error panel or the dialog,
/// so they are shown along with their container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct EditorView {
    read_only_visible: bool,
    edition_visible: bool,
    edit_buttons_visible: bool,
    inputs_disabled: bool,
    /// The end date input must not accept anything before the init date.
    sync_end_minimum: bool,
    warning_panel_visible: bool,
    error_panel_visible: bool,
    dialog_visible: bool,
    /// Text to write in the visible panel or dialog. `None` leaves its text untouched.
    message: Option<String>,
    proceed_visible: bool,
}

impl EditorView {
    pub fn render(state: &EditorState, config: &EditorConfig) -> Self {
        match state {
            EditorState::Viewing => Self {
                read_only_visible: true,
                edit_buttons_visible: true,
                ..Default::default()
            },
            EditorState::Editing => Self {
                edition_visible: true,
                edit_buttons_visible: true,
                sync_end_minimum: true,
                ..Default::default()
            },
            EditorState::ConfirmingWarning(kind) => {
                Self::confirming(config, ValidationOutcome::Warning(*kind))
            }
            EditorState::ConfirmingError => Self::confirming(config, ValidationOutcome::Error),
            // Disabled inputs are left out of the posted form.
            EditorState::Submitted => Self {
                edition_visible: true,
                ..Default::default()
            },
        }
    }

    fn confirming(config: &EditorConfig, outcome: ValidationOutcome) -> Self {
        let message = config.messages().for_outcome(outcome).map(str::to_owned);
        let is_warning = matches!(outcome, ValidationOutcome::Warning(_));

        let mut view = Self {
            edition_visible: true,
            inputs_disabled: true,
            message,
            proceed_visible: is_warning,
            ..Default::default()
        };
        match config.policy() {
            ConfirmationPolicy::Panel if is_warning => view.warning_panel_visible = true,
            ConfirmationPolicy::Panel => view.error_panel_visible = true,
            ConfirmationPolicy::Modal => view.dialog_visible = true,
        }

        view
    }
}
