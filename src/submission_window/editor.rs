use crate::submission_window::validation::{ValidationOutcome, WarningKind, validate};
use crate::submission_window::{EventStart, ProposedWindow};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorState {
    /// Dates are shown read-only.
    #[default]
    Viewing,
    Editing,
    ConfirmingWarning(WarningKind),
    ConfirmingError,
    /// The form is being sent. Nothing happens afterwards.
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    AllowEdit,
    /// Carries the dates read from the form when the user confirmed.
    Confirm(ProposedWindow),
    Cancel,
    Proceed,
    Back,
}

impl EditorState {
    /// Compute the state following `event`.
    /// An event which makes no sense in the current state leaves it unchanged.
    pub fn transition(self, event: EditorEvent, event_start: &EventStart) -> Self {
        match (self, event) {
            (EditorState::Viewing, EditorEvent::AllowEdit) => EditorState::Editing,
            (EditorState::Editing, EditorEvent::Confirm(window)) => {
                let outcome = validate(&window, event_start);
                debug!("Submission window validated [window: {window:?}, outcome: {outcome:?}]");
                match outcome {
                    ValidationOutcome::Pass => EditorState::Submitted,
                    ValidationOutcome::Warning(kind) => EditorState::ConfirmingWarning(kind),
                    ValidationOutcome::Error => EditorState::ConfirmingError,
                }
            }
            (EditorState::Editing, EditorEvent::Cancel) => EditorState::Viewing,
            (EditorState::ConfirmingWarning(_), EditorEvent::Proceed) => EditorState::Submitted,
            (EditorState::ConfirmingWarning(_), EditorEvent::Back)
            | (EditorState::ConfirmingError, EditorEvent::Back) => EditorState::Editing,
            (state, event) => {
                debug!("Ignoring event [state: {state:?}, event: {event:?}]");
                state
            }
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self == EditorState::Submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission_window::editor::EditorEvent::{AllowEdit, Back, Cancel, Confirm, Proceed};
    use crate::submission_window::editor::EditorState::{
        ConfirmingError, ConfirmingWarning, Editing, Submitted, Viewing,
    };
    use parameterized::{ide, parameterized};

    ide!();

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn event_start() -> EventStart {
        EventStart::parse("2024-06-01T00:00:00Z")
    }

    fn passing_window() -> ProposedWindow {
        ProposedWindow::parse("2024-05-01", "2024-05-20")
    }

    fn warning_window() -> ProposedWindow {
        ProposedWindow::parse("2024-06-05", "2024-07-01")
    }

    fn error_window() -> ProposedWindow {
        ProposedWindow::parse("2024-06-10", "2024-05-20")
    }

    #[test]
    fn should_start_in_viewing_state() {
        assert_eq!(Viewing, EditorState::default());
    }

    #[parameterized(
        state = {Viewing, Editing, Editing, Editing, Editing, ConfirmingWarning(WarningKind::Both), ConfirmingWarning(WarningKind::EndOnly), ConfirmingError},
        event = {AllowEdit, Cancel, Confirm(passing_window()), Confirm(warning_window()), Confirm(error_window()), Proceed, Back, Back},
        expected_result = {Editing, Viewing, Submitted, ConfirmingWarning(WarningKind::Both), ConfirmingError, Submitted, Editing, Editing}
    )]
    fn should_transition(state: EditorState, event: EditorEvent, expected_result: EditorState) {
        init();
        assert_eq!(expected_result, state.transition(event, &event_start()));
    }

    #[parameterized(
        state = {Viewing, Viewing, Viewing, Editing, Editing, ConfirmingWarning(WarningKind::Both), ConfirmingError, ConfirmingError, ConfirmingError, Submitted, Submitted},
        event = {Confirm(passing_window()), Proceed, Back, Proceed, Back, Cancel, Proceed, Cancel, AllowEdit, Back, AllowEdit}
    )]
    fn should_ignore_unexpected_event(state: EditorState, event: EditorEvent) {
        init();
        assert_eq!(state, state.transition(event, &event_start()));
    }

    #[test]
    fn should_never_let_error_through() {
        let state = Editing.transition(Confirm(error_window()), &event_start());
        let state = state.transition(Proceed, &event_start());
        assert_eq!(ConfirmingError, state);
        assert!(!state.is_terminal());
    }

    #[test]
    fn should_go_back_to_editing_then_submit_corrected_dates() {
        let state = Viewing
            .transition(AllowEdit, &event_start())
            .transition(Confirm(error_window()), &event_start())
            .transition(Back, &event_start())
            .transition(Confirm(passing_window()), &event_start());
        assert_eq!(Submitted, state);
        assert!(state.is_terminal());
    }

    #[test]
    fn should_submit_after_proceeding_past_warning() {
        let state = Viewing
            .transition(AllowEdit, &event_start())
            .transition(Confirm(warning_window()), &event_start())
            .transition(Proceed, &event_start());
        assert_eq!(Submitted, state);
    }
}
