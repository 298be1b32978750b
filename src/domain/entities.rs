use serde::{Deserialize, Serialize};

/// Reference gold rates, rupees per 10 grams per purity tier.
///
/// Replaced wholesale by the rate editor; never mutated field-by-field.
/// No ordering is enforced between tiers — whatever the operator enters
/// is what the board shows.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GoldRates {
    pub rate_24k: f64,
    pub rate_22k: f64,
    pub rate_18k: f64,
}

impl GoldRates {
    /// Session defaults shown until the operator first edits the board.
    pub fn seed() -> Self {
        Self {
            rate_24k: 72_500.0,
            rate_22k: 67_100.0,
            rate_18k: 55_200.0,
        }
    }

    pub fn rate_for(&self, purity: Purity) -> f64 {
        match purity {
            Purity::K22 => self.rate_22k,
            Purity::K18 => self.rate_18k,
        }
    }
}

/// Display tier on the rate board. 24k is informational only — it has no
/// [`Purity`] counterpart because ornaments are not sold at that fineness.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RateTier {
    K24,
    K22,
    K18,
}

impl RateTier {
    pub const ALL: [RateTier; 3] = [RateTier::K24, RateTier::K22, RateTier::K18];

    pub fn label(&self) -> &'static str {
        match self {
            RateTier::K24 => "24 Karat",
            RateTier::K22 => "22 Karat",
            RateTier::K18 => "18 Karat",
        }
    }

    pub fn fineness(&self) -> &'static str {
        match self {
            RateTier::K24 => "99.9% Purity",
            RateTier::K22 => "91.6% Purity",
            RateTier::K18 => "75.0% Purity",
        }
    }

    pub fn rate_in(&self, rates: &GoldRates) -> f64 {
        match self {
            RateTier::K24 => rates.rate_24k,
            RateTier::K22 => rates.rate_22k,
            RateTier::K18 => rates.rate_18k,
        }
    }
}

/// Purity selectable in the calculator. Maps to a fixed making-charge
/// percentage that is not derived from the rate table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Purity {
    #[default]
    K22,
    K18,
}

impl Purity {
    pub fn label(&self) -> &'static str {
        match self {
            Purity::K22 => "22 Karat",
            Purity::K18 => "18 Karat",
        }
    }

    pub fn making_charge_rate(&self) -> f64 {
        match self {
            Purity::K22 => 0.04,
            Purity::K18 => 0.055,
        }
    }
}

/// One retail location, as returned by the descriptive-content provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// One director bio, as returned by the descriptive-content provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Director {
    pub name: String,
    pub title: String,
    pub bio: String,
}

/// Payload for the About panels. Absence of this data never affects the
/// rate board or the calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreInfo {
    pub stores: Vec<Store>,
    pub directors: Vec<Director>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn making_charge_mapping_is_fixed() {
        assert_eq!(Purity::K22.making_charge_rate(), 0.04);
        assert_eq!(Purity::K18.making_charge_rate(), 0.055);
    }

    #[test]
    fn rate_lookup_by_purity() {
        let rates = GoldRates::seed();
        assert_eq!(rates.rate_for(Purity::K22), rates.rate_22k);
        assert_eq!(rates.rate_for(Purity::K18), rates.rate_18k);
    }

    #[test]
    fn tier_rate_lookup_covers_all_tiers() {
        let rates = GoldRates {
            rate_24k: 3.0,
            rate_22k: 2.0,
            rate_18k: 1.0,
        };
        let values: Vec<f64> = RateTier::ALL.iter().map(|t| t.rate_in(&rates)).collect();
        assert_eq!(values, vec![3.0, 2.0, 1.0]);
    }
}
