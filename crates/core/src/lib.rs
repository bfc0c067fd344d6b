pub mod error;
pub mod types;
pub mod validation;
pub mod valuator;

pub use error::*;
pub use types::*;
pub use validation::*;
pub use valuator::*;
