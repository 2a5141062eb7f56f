use crate::instant::is_before;
use crate::submission_window::{EventStart, ProposedWindow};

/// Which of the submission dates fall after the event start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    Both,
    EndOnly,
    /// Only reachable when the end date is unknown.
    InitOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Submission can go on without asking.
    Pass,
    /// Allowed, once the user has confirmed it.
    Warning(WarningKind),
    /// The submissions end before they start. Never overridable.
    Error,
}

/// Check proposed submission dates against each other and against the event start.
/// The first matching rule wins:
/// 1. the end comes before the init: error,
/// 2. the event starts before both dates: warning,
/// 3. the event starts before the end: warning,
/// 4. the event starts before the init: warning,
/// 5. otherwise: pass.
pub fn validate(window: &ProposedWindow, event_start: &EventStart) -> ValidationOutcome {
    let init = window.init_submission().as_ref();
    let end = window.end_submission().as_ref();

    if is_before(end, init) {
        return ValidationOutcome::Error;
    }

    let init_after_event_start = is_before(event_start.instant(), init);
    let end_after_event_start = is_before(event_start.instant(), end);
    match (init_after_event_start, end_after_event_start) {
        (true, true) => ValidationOutcome::Warning(WarningKind::Both),
        (false, true) => ValidationOutcome::Warning(WarningKind::EndOnly),
        (true, false) => ValidationOutcome::Warning(WarningKind::InitOnly),
        (false, false) => ValidationOutcome::Pass,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission_window::validation::ValidationOutcome::{Error, Pass, Warning};
    use crate::submission_window::validation::WarningKind::{Both, EndOnly, InitOnly};
    use parameterized::{ide, parameterized};

    ide!();

    fn check(event_start: &str, init: &str, end: &str) -> ValidationOutcome {
        validate(
            &ProposedWindow::parse(init, end),
            &EventStart::parse(event_start),
        )
    }

    #[parameterized(
        event_start = {"2024-01-01T00:00", "2024-06-01", "2024-06-01", "2024-06-01", "2024-06-01T12:00:00Z", "2024-06-01", "2024-06-01"},
        init = {"2023-12-01", "2024-05-01", "2024-06-10", "2024-06-05", "2024-06-01T12:00:00Z", "2024-05-01", "2024-06-01"},
        end = {"2023-12-15", "2024-05-20", "2024-05-20", "2024-07-01", "2024-06-01T12:00:00Z", "2024-05-01", "2024-06-01"},
        expected_result = {Pass, Pass, Error, Warning(Both), Pass, Pass, Pass}
    )]
    fn should_validate_window(
        event_start: &str,
        init: &str,
        end: &str,
        expected_result: ValidationOutcome,
    ) {
        assert_eq!(expected_result, check(event_start, init, end));
    }

    #[test]
    fn should_warn_when_end_only_is_after_event_start() {
        assert_eq!(
            Warning(EndOnly),
            check("2024-06-01", "2024-05-01", "2024-06-15")
        );
    }

    #[test]
    fn should_warn_when_event_start_equals_init_and_end_is_after() {
        assert_eq!(
            Warning(EndOnly),
            check("2024-06-01", "2024-06-01", "2024-06-15")
        );
    }

    #[test]
    fn should_warn_when_both_are_after_event_start() {
        assert_eq!(
            Warning(Both),
            check("2024-06-01", "2024-06-02", "2024-06-03")
        );
    }

    #[test]
    fn should_pass_when_both_are_before_event_start() {
        assert_eq!(Pass, check("2024-06-01", "2024-05-01", "2024-05-20"));
    }

    #[test]
    fn should_favour_error_over_warnings() {
        assert_eq!(Error, check("2024-01-01", "2024-06-10", "2024-06-05"));
    }

    #[test]
    fn should_warn_init_only_when_end_is_unknown() {
        assert_eq!(Warning(InitOnly), check("2024-06-01", "2024-06-10", ""));
    }

    #[test]
    fn should_pass_when_every_date_is_unknown() {
        assert_eq!(Pass, check("", "", ""));
    }

    #[test]
    fn should_pass_when_event_start_is_unknown() {
        assert_eq!(Pass, check("", "2024-06-10", "2024-06-20"));
    }

    #[test]
    fn should_not_depend_on_previous_calls() {
        let window = ProposedWindow::parse("2024-06-05", "2024-07-01");
        let event_start = EventStart::parse("2024-06-01");
        assert_eq!(validate(&window, &event_start), validate(&window, &event_start));
    }
}
