pub mod config;
pub mod editor;
pub mod messages;
pub mod validation;
pub mod view;

use crate::instant::parse_optional_instant;
use chrono::NaiveDateTime;
use derive_getters::Getters;

/// The instant the event starts at. Read once when the page loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventStart(Option<NaiveDateTime>);

impl EventStart {
    pub fn new(instant: Option<NaiveDateTime>) -> Self {
        Self(instant)
    }

    /// An unparsable value is kept as an unknown start, which no date is ever before.
    pub fn parse(value: &str) -> Self {
        Self(parse_optional_instant(value))
    }

    pub fn instant(&self) -> Option<&NaiveDateTime> {
        self.0.as_ref()
    }
}

/// The submission dates currently typed in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct ProposedWindow {
    init_submission: Option<NaiveDateTime>,
    end_submission: Option<NaiveDateTime>,
}

impl ProposedWindow {
    pub fn new(
        init_submission: Option<NaiveDateTime>,
        end_submission: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            init_submission,
            end_submission,
        }
    }

    pub fn parse(init_submission: &str, end_submission: &str) -> Self {
        Self::new(
            parse_optional_instant(init_submission),
            parse_optional_instant(end_submission),
        )
    }
}
