use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("bid price must be positive, got {bid_price} in record {index}")]
    InvalidBidPrice { index: usize, bid_price: Decimal },

    #[error("win rate must be within [0, 1], got {win_rate} for bid price {bid_price}")]
    InvalidWinRate { bid_price: Decimal, win_rate: Decimal },

    #[error("bid price {bid_price} appears more than once (record {index})")]
    DuplicateBidPrice { index: usize, bid_price: Decimal },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValuationError {
    #[error("advertiser pay must be provided")]
    MissingInput,

    #[error("win rate table is empty")]
    EmptyDataset,

    #[error("no valuations to choose an optimal bid from")]
    EmptyValuationSet,

    #[error("decimal overflow while valuing bid price {bid_price}")]
    Overflow { bid_price: Decimal },
}
