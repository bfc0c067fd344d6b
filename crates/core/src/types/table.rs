use std::slice;

use crate::{error::TableError, validation};

use super::{primitives::BidPrice, record::WinRateRecord};

/// Immutable win-rate table, one record per distinct bid price, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WinRateTable {
    records: Vec<WinRateRecord>,
}

impl WinRateTable {
    pub fn new(records: Vec<WinRateRecord>) -> Result<Self, TableError> {
        validation::validate_records(&records)?;
        Ok(Self { records })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[WinRateRecord] {
        &self.records
    }

    pub fn iter(&self) -> slice::Iter<'_, WinRateRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, bid_price: BidPrice) -> Option<&WinRateRecord> {
        self.records
            .iter()
            .find(|record| record.bid_price == bid_price)
    }

    pub fn contains(&self, bid_price: BidPrice) -> bool {
        self.get(bid_price).is_some()
    }
}

impl TryFrom<Vec<WinRateRecord>> for WinRateTable {
    type Error = TableError;

    fn try_from(records: Vec<WinRateRecord>) -> Result<Self, Self::Error> {
        Self::new(records)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn keeps_source_order() {
        let table = WinRateTable::new(vec![
            WinRateRecord::new(d("1.0"), d("0.60")),
            WinRateRecord::new(d("0.1"), d("0.30")),
        ])
        .unwrap();

        let prices: Vec<_> = table.iter().map(|r| r.bid_price.as_decimal()).collect();
        assert_eq!(prices, vec![d("1.0"), d("0.1")]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn looks_up_by_bid_price() {
        let table = WinRateTable::new(vec![WinRateRecord::new(d("0.5"), d("0.45"))]).unwrap();

        let record = table.get(BidPrice::new(d("0.50"))).unwrap();
        assert_eq!(record.win_rate.as_decimal(), d("0.45"));
        assert!(!table.contains(BidPrice::new(d("0.6"))));
    }

    #[test]
    fn construction_runs_validation() {
        let err = WinRateTable::try_from(vec![
            WinRateRecord::new(d("0.5"), d("0.45")),
            WinRateRecord::new(d("0.5"), d("0.50")),
        ])
        .unwrap_err();

        assert!(matches!(err, TableError::DuplicateBidPrice { index: 1, .. }));
    }

    #[test]
    fn empty_table_is_allowed() {
        assert!(WinRateTable::empty().is_empty());
        assert!(WinRateTable::new(Vec::new()).unwrap().is_empty());
    }
}
