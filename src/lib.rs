#[macro_use]
extern crate log;

pub mod error;
pub mod instant;
pub mod submission_window;
pub mod tab;
pub mod text_limit;

pub use error::{Error, Result};
