pub mod primitives;
pub mod record;
pub mod table;
pub mod valuation;

pub use primitives::*;
pub use record::*;
pub use table::*;
pub use valuation::*;
