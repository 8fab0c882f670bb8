//! Booking session - orchestrates store, source, and domain services
//!
//! The session owns the selection state, the comparison set, and the filter
//! config, and wires them to a skip source. Screens talk to this instead of
//! reaching into the store directly.

use skiphire_domain::{price_bounds, visible_skips, ComparisonSet, FilterConfig};
use skiphire_source::SkipSource;
use skiphire_store::SelectionState;
use skiphire_types::{Result, SkipRecord};
use tracing::{info, warn};

/// One booking wizard session
pub struct BookingSession {
    state: SelectionState,
    source: Box<dyn SkipSource>,
    filter: FilterConfig,
    compare: ComparisonSet,
}

impl BookingSession {
    pub fn new(source: Box<dyn SkipSource>) -> Self {
        Self {
            state: SelectionState::new(),
            source,
            filter: FilterConfig::default(),
            compare: ComparisonSet::new(),
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SelectionState {
        &mut self.state
    }

    pub fn filter(&self) -> &FilterConfig {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut FilterConfig {
        &mut self.filter
    }

    pub fn comparison(&self) -> &ComparisonSet {
        &self.compare
    }

    /// Fetch skips for a location and replace the loaded list.
    ///
    /// On success the filter's price range is re-derived from the actual
    /// min/max of the records. On failure the previous list is kept (empty
    /// on first load) and the error is returned for the caller to surface.
    pub fn load_skips(&mut self, postcode: &str, area: &str) -> Result<usize> {
        match self.source.fetch(postcode, area) {
            Ok(skips) => {
                if let Some(bounds) = price_bounds(&skips) {
                    self.filter.price_range = bounds;
                }
                let count = skips.len();
                self.state.set_skips(skips);
                info!(count, postcode, area, "loaded skips");
                Ok(count)
            }
            Err(e) => {
                warn!(error = %e, postcode, area, "skip fetch failed, keeping previous list");
                Err(e)
            }
        }
    }

    /// Apply a pre-fetched skip list, as when the host runs the fetch on a
    /// worker thread and hands the result back.
    pub fn apply_skips(&mut self, skips: Vec<SkipRecord>) {
        if let Some(bounds) = price_bounds(&skips) {
            self.filter.price_range = bounds;
        }
        self.state.set_skips(skips);
    }

    /// The currently visible skips under the session's filter, sorted by size
    pub fn visible_skips(&self) -> Vec<SkipRecord> {
        visible_skips(self.state.skips(), self.state.has_heavy_waste(), &self.filter)
    }

    /// Toggle a skip in or out of the comparison set
    pub fn toggle_compare(&mut self, id: u32) -> bool {
        self.compare.toggle(id)
    }

    /// The compared skips resolved against the loaded list, in set order
    pub fn compared_skips(&self) -> Vec<&SkipRecord> {
        self.compare.resolve(self.state.skips())
    }

    /// Restore default filters, re-deriving price bounds from loaded records
    pub fn reset_filters(&mut self) {
        self.filter.reset();
        if let Some(bounds) = price_bounds(self.state.skips()) {
            self.filter.price_range = bounds;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use skiphire_source::{FailingSkipSource, StaticSkipSource};

    fn skip(id: u32, size: u32, price: f64) -> SkipRecord {
        SkipRecord {
            id,
            size,
            hire_period_days: 14,
            transport_cost: None,
            per_tonne_cost: None,
            price_before_vat: price,
            vat: 20.0,
            postcode: "NR32".to_string(),
            area: "Lowestoft".to_string(),
            forbidden: false,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
            allowed_on_road: true,
            allows_heavy_waste: true,
        }
    }

    fn session_with(skips: Vec<SkipRecord>) -> BookingSession {
        BookingSession::new(Box::new(StaticSkipSource::new(skips)))
    }

    #[test]
    fn test_load_skips_rederives_price_bounds() {
        let mut session = session_with(vec![skip(1, 4, 278.0), skip(2, 8, 375.0)]);
        let count = session.load_skips("NR32", "Lowestoft").unwrap();
        assert_eq!(count, 2);
        assert_eq!(session.filter().price_range.min(), 278.0);
        assert_eq!(session.filter().price_range.max(), 375.0);
    }

    #[test]
    fn test_fetch_failure_keeps_previous_skips() {
        let mut session = session_with(vec![skip(1, 4, 278.0)]);
        session.load_skips("NR32", "Lowestoft").unwrap();

        session.source = Box::new(FailingSkipSource);
        assert!(session.load_skips("NR32", "Lowestoft").is_err());
        assert_eq!(session.state().skips().len(), 1);
    }

    #[test]
    fn test_fetch_failure_on_first_load_leaves_empty() {
        let mut session = BookingSession::new(Box::new(FailingSkipSource));
        assert!(session.load_skips("NR32", "Lowestoft").is_err());
        assert!(session.state().skips().is_empty());
        assert!(session.visible_skips().is_empty());
    }

    #[test]
    fn test_visible_skips_respects_heavy_waste_selection() {
        let mut heavy_only = skip(2, 8, 350.0);
        heavy_only.allows_heavy_waste = true;
        let mut light_only = skip(1, 4, 200.0);
        light_only.allows_heavy_waste = false;

        let mut session = session_with(vec![light_only, heavy_only]);
        session.load_skips("NR32", "Lowestoft").unwrap();
        assert_eq!(session.visible_skips().len(), 2);

        session.state_mut().toggle_heavy_waste_type("soil");
        let ids: Vec<u32> = session.visible_skips().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_comparison_round_trip() {
        let mut session = session_with(vec![skip(1, 4, 200.0), skip(2, 8, 350.0)]);
        session.load_skips("NR32", "Lowestoft").unwrap();

        assert!(session.toggle_compare(2));
        assert!(session.toggle_compare(1));
        let ids: Vec<u32> = session.compared_skips().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_reset_filters_rederives_bounds() {
        let mut session = session_with(vec![skip(1, 4, 278.0), skip(2, 8, 375.0)]);
        session.load_skips("NR32", "Lowestoft").unwrap();

        session.filter_mut().road_placement_only = true;
        session.reset_filters();
        assert!(!session.filter().road_placement_only);
        assert_eq!(session.filter().price_range.min(), 278.0);
    }
}
