use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("`{0}` is not a recognised date.")]
    UnparsableInstant(String),
    #[error("`{0}` is not a known measure.")]
    UnknownMeasure(String),
    #[error("Max cannot be less than min [min: {min}, max: {max}].")]
    InvalidLimitBounds { min: usize, max: usize },
    #[error("`{0}` is not a tab of this group.")]
    UnknownTab(String),
    #[error("A tab group needs at least one tab.")]
    EmptyTabGroup,
    #[error("Configuration is invalid: {0}")]
    InvalidConfiguration(String),
}
