use super::entities::GoldRates;

/// Session-wide state owned by the top-level composition.
///
/// The rate table lives only for the process lifetime; there is no
/// persisted form. `None` is the "rates unavailable" sentinel, distinct
/// from a zero-valued table.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    gold_rates: Option<GoldRates>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            gold_rates: Some(GoldRates::seed()),
        }
    }
}

impl AppState {
    pub fn current_rates(&self) -> Option<GoldRates> {
        self.gold_rates
    }

    /// Wholesale replacement of the rate table. The caller vouches for the
    /// numbers; zero or negative values are accepted as-is.
    pub fn replace_rates(&mut self, rates: GoldRates) {
        self.gold_rates = Some(rates);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_seed_rates() {
        let state = AppState::default();
        assert_eq!(state.current_rates(), Some(GoldRates::seed()));
    }

    #[test]
    fn replace_swaps_the_whole_table() {
        let mut state = AppState::default();
        let edited = GoldRates {
            rate_24k: 80_000.0,
            rate_22k: 0.0,
            rate_18k: -1.0,
        };
        state.replace_rates(edited);
        assert_eq!(state.current_rates(), Some(edited));
    }
}
