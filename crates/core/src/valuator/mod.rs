pub mod bid_valuator;
pub mod compute;
pub mod result;

pub use bid_valuator::BidValuator;
pub use compute::{compute_valuations, select_optimal_bid};
pub use result::OptimalBid;
