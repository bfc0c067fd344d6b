use optibid_core::ValuationError;
use rust_decimal::Decimal;

pub const MISSING_PAY_MESSAGE: &str = "An advertiser pay must be selected before the optimal bid \
     price can be determined. Pick an amount, then ask for the optimal bid again.";

/// Currency text with at least two decimals: `0.5` -> `$0.50`, `-0.09` -> `-$0.09`.
pub fn format_currency(amount: Decimal) -> String {
    let mut value = amount.abs().normalize();
    if value.scale() < 2 {
        value.rescale(2);
    }

    if amount < Decimal::ZERO {
        format!("-${value}")
    } else {
        format!("${value}")
    }
}

/// Label for an advertiser pay choice, e.g. `$ 0.5` or `$ 12.0`.
pub fn format_pay_option(pay: Decimal) -> String {
    let mut value = pay.normalize();
    if value.scale() < 1 {
        value.rescale(1);
    }
    format!("$ {value}")
}

pub fn error_title(err: &ValuationError) -> &'static str {
    match err {
        ValuationError::MissingInput => "Missing parameters",
        ValuationError::EmptyDataset => "No win rate data",
        ValuationError::EmptyValuationSet | ValuationError::Overflow { .. } => {
            "Valuation failed"
        }
    }
}

pub fn render_error(err: &ValuationError) -> String {
    match err {
        ValuationError::MissingInput => MISSING_PAY_MESSAGE.to_string(),
        ValuationError::EmptyDataset => {
            "No historical win rates are loaded, so no bid price can be recommended.".to_string()
        }
        other => format!("Could not compute the optimal bid price: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn pads_to_cents() {
        assert_eq!(format_currency(d("0.5")), "$0.50");
        assert_eq!(format_currency(d("2")), "$2.00");
        assert_eq!(format_currency(d("0.500")), "$0.50");
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn keeps_sub_cent_precision() {
        assert_eq!(format_currency(d("0.125")), "$0.125");
        assert_eq!(format_currency(d("0.6750")), "$0.675");
    }

    #[test]
    fn negative_amounts_lead_with_sign() {
        assert_eq!(format_currency(d("-0.09")), "-$0.09");
    }

    #[test]
    fn pay_options_read_like_dropdown_labels() {
        assert_eq!(format_pay_option(d("0.5")), "$ 0.5");
        assert_eq!(format_pay_option(d("12")), "$ 12.0");
        assert_eq!(format_pay_option(d("12.50")), "$ 12.5");
    }

    #[test]
    fn missing_pay_gets_the_selection_hint() {
        assert_eq!(
            render_error(&ValuationError::MissingInput),
            MISSING_PAY_MESSAGE
        );
        assert!(render_error(&ValuationError::EmptyValuationSet).contains("no valuations"));
    }

    #[test]
    fn titles_name_the_failure() {
        assert_eq!(
            error_title(&ValuationError::MissingInput),
            "Missing parameters"
        );
        assert_eq!(
            error_title(&ValuationError::EmptyDataset),
            "No win rate data"
        );
        assert_eq!(
            error_title(&ValuationError::Overflow {
                bid_price: Decimal::ONE
            }),
            "Valuation failed"
        );
    }
}
