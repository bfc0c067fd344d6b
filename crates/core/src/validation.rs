use std::collections::BTreeSet;

use crate::{
    error::{TableError, ValuationError},
    types::{
        primitives::{AdvertiserPay, BidPrice},
        record::WinRateRecord,
    },
};

pub fn validate_record(index: usize, record: &WinRateRecord) -> Result<(), TableError> {
    if !record.bid_price.is_positive() {
        return Err(TableError::InvalidBidPrice {
            index,
            bid_price: record.bid_price.as_decimal(),
        });
    }

    if !record.win_rate.is_probability() {
        return Err(TableError::InvalidWinRate {
            bid_price: record.bid_price.as_decimal(),
            win_rate: record.win_rate.as_decimal(),
        });
    }

    Ok(())
}

pub fn validate_records(records: &[WinRateRecord]) -> Result<(), TableError> {
    let mut seen: BTreeSet<BidPrice> = BTreeSet::new();

    for (index, record) in records.iter().enumerate() {
        validate_record(index, record)?;

        if !seen.insert(record.bid_price) {
            return Err(TableError::DuplicateBidPrice {
                index,
                bid_price: record.bid_price.as_decimal(),
            });
        }
    }

    Ok(())
}

pub fn require_advertiser_pay(
    advertiser_pay: Option<AdvertiserPay>,
) -> Result<AdvertiserPay, ValuationError> {
    advertiser_pay.ok_or(ValuationError::MissingInput)
}
