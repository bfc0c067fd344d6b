use std::sync::Arc;

use crate::{
    error::ValuationError,
    types::{primitives::AdvertiserPay, table::WinRateTable, valuation::Valuation},
};

use super::{
    compute::{compute_valuations, select_optimal_bid},
    result::OptimalBid,
};

/// Request-facing handle over a shared, read-only win-rate table.
#[derive(Debug, Clone)]
pub struct BidValuator {
    table: Arc<WinRateTable>,
}

impl BidValuator {
    pub fn new(table: WinRateTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    pub fn table(&self) -> &WinRateTable {
        &self.table
    }

    pub fn valuations(
        &self,
        advertiser_pay: Option<AdvertiserPay>,
    ) -> Result<Vec<Valuation>, ValuationError> {
        compute_valuations(&self.table, advertiser_pay)
    }

    pub fn get_optimal_bid(
        &self,
        advertiser_pay: Option<AdvertiserPay>,
    ) -> Result<OptimalBid, ValuationError> {
        let valuations = self.valuations(advertiser_pay)?;
        select_optimal_bid(&valuations)
    }
}
