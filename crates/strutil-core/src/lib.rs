pub mod config;
pub mod error;
pub mod logging;

pub mod query;
pub mod thousands;

pub use error::{DecodingError, DigitError};
