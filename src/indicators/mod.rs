pub mod error;
pub mod validation;

pub use error::InvalidIndicatorsError;
pub use validation::*;
