//! Price estimate calculation.
//!
//! Pure functions only: the breakdown is re-derived from scratch on every
//! input change, so two calls with the same inputs are bit-identical.

use super::entities::{GoldRates, Purity};

/// GST applied to the subtotal when the tax toggle is on.
pub const GST_RATE: f64 = 0.03;

/// Everything the calculator consumes besides the rate table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EstimateInput {
    pub weight_grams: f64,
    pub purity: Purity,
    pub include_making: bool,
    pub include_gst: bool,
}

impl Default for EstimateInput {
    fn default() -> Self {
        Self {
            weight_grams: 0.0,
            purity: Purity::default(),
            include_making: true,
            include_gst: true,
        }
    }
}

/// Itemized estimate derived from one [`EstimateInput`] and the current
/// rate table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakdown {
    pub gold_value: f64,
    /// Fixed percentage for the selected purity, exposed for display even
    /// when the charge itself is excluded.
    pub making_charge_percent: f64,
    pub making_charge: f64,
    pub sub_total: f64,
    pub gst_amount: f64,
    pub total_price: f64,
}

impl Breakdown {
    fn zero(making_charge_percent: f64) -> Self {
        Self {
            gold_value: 0.0,
            making_charge_percent,
            making_charge: 0.0,
            sub_total: 0.0,
            gst_amount: 0.0,
            total_price: 0.0,
        }
    }
}

/// Parse a free-form weight entry. Anything that is not a finite,
/// non-negative number coerces to zero — bad input is never an error here.
pub fn parse_weight(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

/// Derive the itemized breakdown for one set of inputs.
///
/// An unset rate table or a zero weight yields a zero breakdown (the
/// making-charge percentage is still taken from the purity mapping).
pub fn compute_estimate(rates: Option<&GoldRates>, input: &EstimateInput) -> Breakdown {
    let making_charge_percent = input.purity.making_charge_rate();

    let Some(rates) = rates else {
        return Breakdown::zero(making_charge_percent);
    };
    if input.weight_grams == 0.0 {
        return Breakdown::zero(making_charge_percent);
    }

    // Rates are quoted per 10 grams; keep the division exact for numeric
    // compatibility with the printed board.
    let purity_rate = rates.rate_for(input.purity);
    let gold_value = (purity_rate / 10.0) * input.weight_grams;

    let making_charge = if input.include_making {
        gold_value * making_charge_percent
    } else {
        0.0
    };
    let sub_total = gold_value + making_charge;
    let gst_amount = if input.include_gst {
        sub_total * GST_RATE
    } else {
        0.0
    };

    Breakdown {
        gold_value,
        making_charge_percent,
        making_charge,
        sub_total,
        gst_amount,
        total_price: sub_total + gst_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> GoldRates {
        GoldRates {
            rate_24k: 72_500.0,
            rate_22k: 67_100.0,
            rate_18k: 55_200.0,
        }
    }

    fn input(weight: f64, purity: Purity, making: bool, gst: bool) -> EstimateInput {
        EstimateInput {
            weight_grams: weight,
            purity,
            include_making: making,
            include_gst: gst,
        }
    }

    #[test]
    fn twenty_two_karat_with_all_charges() {
        let rates = board();
        let breakdown = compute_estimate(Some(&rates), &input(10.0, Purity::K22, true, true));

        assert_eq!(breakdown.gold_value, 67_100.0);
        assert_eq!(breakdown.making_charge_percent, 0.04);
        assert_eq!(breakdown.making_charge, 2_684.0);
        assert_eq!(breakdown.sub_total, 69_784.0);
        assert!((breakdown.gst_amount - 2_093.52).abs() < 1e-9);
        assert!((breakdown.total_price - 71_877.52).abs() < 1e-9);
    }

    #[test]
    fn eighteen_karat_without_making_charge() {
        let rates = board();
        let breakdown = compute_estimate(Some(&rates), &input(10.0, Purity::K18, false, true));

        assert_eq!(breakdown.gold_value, 55_200.0);
        assert_eq!(breakdown.making_charge, 0.0);
        assert_eq!(breakdown.sub_total, 55_200.0);
        assert!((breakdown.gst_amount - 1_656.0).abs() < 1e-9);
        assert!((breakdown.total_price - 56_856.0).abs() < 1e-9);
    }

    #[test]
    fn zero_weight_zeroes_everything_but_the_percent() {
        let rates = board();
        for purity in [Purity::K22, Purity::K18] {
            for making in [true, false] {
                for gst in [true, false] {
                    let breakdown =
                        compute_estimate(Some(&rates), &input(0.0, purity, making, gst));
                    assert_eq!(breakdown.gold_value, 0.0);
                    assert_eq!(breakdown.making_charge, 0.0);
                    assert_eq!(breakdown.gst_amount, 0.0);
                    assert_eq!(breakdown.total_price, 0.0);
                    assert_eq!(breakdown.making_charge_percent, purity.making_charge_rate());
                }
            }
        }
    }

    #[test]
    fn unset_rate_table_yields_zero_breakdown() {
        let breakdown = compute_estimate(None, &input(25.0, Purity::K22, true, true));
        assert_eq!(breakdown.total_price, 0.0);
        assert_eq!(breakdown.making_charge_percent, 0.04);
    }

    #[test]
    fn gst_toggle_off_forces_total_to_subtotal() {
        let rates = board();
        let breakdown = compute_estimate(Some(&rates), &input(7.5, Purity::K22, true, false));
        assert_eq!(breakdown.gst_amount, 0.0);
        assert_eq!(breakdown.total_price, breakdown.sub_total);
    }

    #[test]
    fn ordering_invariant_holds_across_toggles() {
        let rates = board();
        for weight in [0.0, 0.001, 1.0, 10.0, 250.0] {
            for making in [true, false] {
                for gst in [true, false] {
                    let b = compute_estimate(Some(&rates), &input(weight, Purity::K18, making, gst));
                    assert!(b.total_price >= b.sub_total);
                    assert!(b.sub_total >= b.gold_value);
                    assert!(b.gold_value >= 0.0);
                }
            }
        }
    }

    #[test]
    fn recomputation_is_idempotent() {
        let rates = board();
        let params = input(12.34, Purity::K18, true, true);
        let first = compute_estimate(Some(&rates), &params);
        let second = compute_estimate(Some(&rates), &params);
        assert_eq!(first, second);
    }

    #[test]
    fn weight_parsing_coerces_garbage_to_zero() {
        assert_eq!(parse_weight("abc"), 0.0);
        assert_eq!(parse_weight(""), 0.0);
        assert_eq!(parse_weight("-4"), 0.0);
        assert_eq!(parse_weight("NaN"), 0.0);
        assert_eq!(parse_weight("inf"), 0.0);
        assert_eq!(parse_weight(" 12.5 "), 12.5);
    }

    #[test]
    fn unparsed_weight_produces_all_zero_breakdown() {
        let rates = board();
        let weight = parse_weight("abc");
        let breakdown = compute_estimate(Some(&rates), &input(weight, Purity::K22, true, true));
        assert_eq!(breakdown.gold_value, 0.0);
        assert_eq!(breakdown.total_price, 0.0);
    }
}
