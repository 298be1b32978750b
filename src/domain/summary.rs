//! Shareable plain-text summaries and Indian-locale currency formatting.
//!
//! All rounding happens here, at presentation time; the calculator itself
//! never rounds.

use super::entities::{GoldRates, RateTier};
use super::estimate::{Breakdown, EstimateInput};

const SHOP_NAME: &str = "Shri Murari Jewellers";
const SEPARATOR: &str = "--------------------";

/// Format a rupee amount with Indian digit grouping and exactly two
/// fractional digits, e.g. `71877.52` → `"71,877.52"`.
pub fn format_inr(value: f64) -> String {
    let negative = value < 0.0;
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = group_indian(int_part);
    if negative {
        format!("-{grouped}.{frac_part}")
    } else {
        format!("{grouped}.{frac_part}")
    }
}

/// Format a rupee amount with Indian digit grouping and no fraction,
/// as printed on the rate board, e.g. `72500.0` → `"72,500"`.
pub fn format_inr_whole(value: f64) -> String {
    let negative = value < 0.0;
    let fixed = format!("{:.0}", value.abs());
    let grouped = group_indian(&fixed);
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

// Indian grouping: the last three digits form one group, everything before
// them is grouped in twos (12,34,567).
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Render an estimate into the multi-line text handed to the share sink.
///
/// The making-charge and GST lines are omitted entirely — not zeroed —
/// when the corresponding toggle is off. A zero breakdown still renders
/// valid text.
pub fn estimate_summary(input: &EstimateInput, breakdown: &Breakdown) -> String {
    let mut text = format!("Gold Price Estimate from {SHOP_NAME}:\n\n");
    text.push_str(&format!("Weight: {}g\n", input.weight_grams));
    text.push_str(&format!("Purity: {}\n", input.purity.label()));
    text.push_str(SEPARATOR);
    text.push('\n');
    text.push_str(&format!("Gold Value: ₹{}\n", format_inr(breakdown.gold_value)));
    if input.include_making {
        text.push_str(&format!(
            "Making Charges: ₹{}\n",
            format_inr(breakdown.making_charge)
        ));
    }
    if input.include_gst {
        text.push_str(&format!("GST (3%): ₹{}\n", format_inr(breakdown.gst_amount)));
    }
    text.push_str(SEPARATOR);
    text.push('\n');
    text.push_str(&format!(
        "Total Price: ₹{}\n",
        format_inr(breakdown.total_price)
    ));
    text.push_str("\nCalculate your own estimate!");
    text
}

/// Render the current rate board into shareable text, one line per tier.
/// Independent of the calculator.
pub fn rates_summary(rates: &GoldRates) -> String {
    let mut text = format!("Today's Gold Rates from {SHOP_NAME}:\n\n");
    for tier in RateTier::ALL {
        text.push_str(&format!(
            "{} ({}): ₹{}/10g\n",
            tier.label(),
            tier.fineness(),
            format_inr_whole(tier.rate_in(rates))
        ));
    }
    text.push_str("\nFind your perfect piece today!");
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Purity;
    use crate::domain::estimate::compute_estimate;

    fn board() -> GoldRates {
        GoldRates {
            rate_24k: 72_500.0,
            rate_22k: 67_100.0,
            rate_18k: 55_200.0,
        }
    }

    #[test]
    fn inr_grouping_matches_the_locale() {
        assert_eq!(format_inr(0.0), "0.00");
        assert_eq!(format_inr(999.0), "999.00");
        assert_eq!(format_inr(2_684.0), "2,684.00");
        assert_eq!(format_inr(71_877.52), "71,877.52");
        assert_eq!(format_inr(1_234_567.0), "12,34,567.00");
        assert_eq!(format_inr(-55_200.5), "-55,200.50");
        assert_eq!(format_inr_whole(72_500.0), "72,500");
        assert_eq!(format_inr_whole(100_000.0), "1,00,000");
        assert_eq!(format_inr_whole(500.0), "500");
    }

    #[test]
    fn full_estimate_renders_every_line() {
        let input = EstimateInput {
            weight_grams: 10.0,
            purity: Purity::K22,
            include_making: true,
            include_gst: true,
        };
        let breakdown = compute_estimate(Some(&board()), &input);
        let text = estimate_summary(&input, &breakdown);

        assert!(text.starts_with("Gold Price Estimate from Shri Murari Jewellers:"));
        assert!(text.contains("Weight: 10g"));
        assert!(text.contains("Purity: 22 Karat"));
        assert!(text.contains("Gold Value: ₹67,100.00"));
        assert!(text.contains("Making Charges: ₹2,684.00"));
        assert!(text.contains("GST (3%): ₹2,093.52"));
        assert!(text.contains("Total Price: ₹71,877.52"));
        assert!(text.ends_with("Calculate your own estimate!"));
    }

    #[test]
    fn excluded_making_charge_line_is_absent_not_zeroed() {
        let input = EstimateInput {
            weight_grams: 10.0,
            purity: Purity::K18,
            include_making: false,
            include_gst: true,
        };
        let breakdown = compute_estimate(Some(&board()), &input);
        let text = estimate_summary(&input, &breakdown);

        assert!(!text.contains("Making Charges"));
        assert!(text.contains("GST (3%): ₹1,656.00"));
        assert!(text.contains("Total Price: ₹56,856.00"));
    }

    #[test]
    fn excluded_gst_line_is_absent() {
        let input = EstimateInput {
            weight_grams: 10.0,
            purity: Purity::K22,
            include_making: true,
            include_gst: false,
        };
        let breakdown = compute_estimate(Some(&board()), &input);
        let text = estimate_summary(&input, &breakdown);

        assert!(!text.contains("GST"));
        assert!(text.contains("Total Price: ₹69,784.00"));
    }

    #[test]
    fn zero_breakdown_still_renders_valid_text() {
        let input = EstimateInput::default();
        let breakdown = compute_estimate(None, &input);
        let text = estimate_summary(&input, &breakdown);

        assert!(text.contains("Weight: 0g"));
        assert!(text.contains("Total Price: ₹0.00"));
    }

    #[test]
    fn rates_summary_lists_all_three_tiers() {
        let text = rates_summary(&board());
        assert!(text.starts_with("Today's Gold Rates from Shri Murari Jewellers:"));
        assert!(text.contains("24 Karat (99.9% Purity): ₹72,500/10g"));
        assert!(text.contains("22 Karat (91.6% Purity): ₹67,100/10g"));
        assert!(text.contains("18 Karat (75.0% Purity): ₹55,200/10g"));
        assert!(text.ends_with("Find your perfect piece today!"));
    }
}
