use crate::error::{Error, Result};
use derive_getters::Getters;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Words,
    Characters,
}

impl FromStr for Measure {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim() {
            "Words" => Ok(Measure::Words),
            "Characters" => Ok(Measure::Characters),
            other => Err(Error::UnknownMeasure(other.to_owned())),
        }
    }
}

impl Display for Measure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Measure::Words => write!(f, "Words"),
            Measure::Characters => write!(f, "Characters"),
        }
    }
}

/// Bounds a submitted text has to respect, both included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct TextLimit {
    measure: Measure,
    min: usize,
    max: usize,
}

/// A text which is too short or too long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct LimitViolation {
    limit: TextLimit,
    quantity: usize,
}

impl Display for LimitViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You have errors. Allowed {} - {} {}",
            self.limit.min, self.limit.max, self.limit.measure
        )
    }
}

impl TextLimit {
    pub fn new(measure: Measure, min: usize, max: usize) -> Result<Self> {
        if min >= max {
            return Err(Error::InvalidLimitBounds { min, max });
        }

        Ok(Self { measure, min, max })
    }

    /// Build a limit from the raw values rendered in the submission form.
    pub fn parse(measure: &str, min: &str, max: &str) -> Result<Self> {
        let measure = measure.parse::<Measure>()?;
        let min = parse_bound(min)?;
        let max = parse_bound(max)?;
        Self::new(measure, min, max)
    }

    pub fn count(&self, text: &str) -> usize {
        match self.measure {
            Measure::Words => text.split_whitespace().count(),
            Measure::Characters => text.chars().count(),
        }
    }

    pub fn check(&self, text: &str) -> Result<(), LimitViolation> {
        let quantity = self.count(text);
        if quantity < self.min || quantity > self.max {
            Err(LimitViolation {
                limit: *self,
                quantity,
            })
        } else {
            Ok(())
        }
    }
}

fn parse_bound(value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidConfiguration(format!("`{value}` is not a valid bound")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        measure = {Measure::Words, Measure::Words, Measure::Words, Measure::Characters, Measure::Characters},
        text = {"", "one two  three", " leading and trailing ", "abc", "été"},
        expected_result = {0, 3, 3, 3, 3}
    )]
    fn should_count(measure: Measure, text: &str, expected_result: usize) {
        let limit = TextLimit::new(measure, 1, 10).unwrap();
        assert_eq!(expected_result, limit.count(text));
    }

    #[parameterized(
        text = {"one two", "one two three", "one two three four", "one", "one two three four five"},
        expected_result = {true, true, true, false, false}
    )]
    fn should_check_word_limit(text: &str, expected_result: bool) {
        let limit = TextLimit::new(Measure::Words, 2, 4).unwrap();
        assert_eq!(expected_result, limit.check(text).is_ok());
    }

    #[test]
    fn should_report_violation() {
        let limit = TextLimit::new(Measure::Characters, 5, 10).unwrap();
        let violation = limit.check("abc").unwrap_err();
        assert_eq!(3, *violation.quantity());
        assert_eq!(
            "You have errors. Allowed 5 - 10 Characters",
            violation.to_string()
        );
    }

    #[test]
    fn should_reject_min_not_less_than_max() {
        assert_eq!(
            Err(Error::InvalidLimitBounds { min: 10, max: 10 }),
            TextLimit::new(Measure::Words, 10, 10)
        );
    }

    #[test]
    fn should_parse_limit_from_form_values() {
        let expected_limit = TextLimit::new(Measure::Words, 10, 500).unwrap();
        assert_eq!(Ok(expected_limit), TextLimit::parse("Words", "10", " 500"));
    }

    #[parameterized(
        measure = {"Sentences", "Words", "Words"},
        min = {"10", "ten", "10"},
        max = {"500", "500", ""}
    )]
    fn should_fail_to_parse_limit(measure: &str, min: &str, max: &str) {
        assert!(TextLimit::parse(measure, min, max).is_err());
    }
}
