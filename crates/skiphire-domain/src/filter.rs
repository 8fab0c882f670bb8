//! Skip filtering service
//!
//! `visible_skips` applies the five filter clauses as one chained AND and
//! returns the survivors sorted by size. It is pure: callers may re-run it
//! with different configs against the same list on every state change.

use serde::{Deserialize, Serialize};
use skiphire_types::{Error, Result, SkipRecord};

/// Default size bounds, covering every known skip size (cubic yards)
pub const DEFAULT_SIZE_RANGE: (u32, u32) = (0, 40);

/// Default price bounds before real records arrive
pub const DEFAULT_PRICE_RANGE: (f64, f64) = (0.0, 1000.0);

/// Inclusive size range in cubic yards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRange {
    min: u32,
    max: u32,
}

impl SizeRange {
    /// Build a range, rejecting inverted bounds
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min > max {
            return Err(Error::InvalidRange(format!(
                "size min {} exceeds max {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, size: u32) -> bool {
        size >= self.min && size <= self.max
    }
}

impl Default for SizeRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_SIZE_RANGE.0,
            max: DEFAULT_SIZE_RANGE.1,
        }
    }
}

/// Inclusive price range over `price_before_vat`, in pounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl PriceRange {
    /// Build a range, rejecting inverted or non-comparable bounds
    pub fn new(min: f64, max: f64) -> Result<Self> {
        // NaN bounds fail this comparison too
        if !(min <= max) {
            return Err(Error::InvalidRange(format!(
                "price min {} exceeds max {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_PRICE_RANGE.0,
            max: DEFAULT_PRICE_RANGE.1,
        }
    }
}

/// Filter settings owned by the skip-selection screen.
///
/// The heavy-waste restriction is deliberately absent here: it derives from
/// the selection state and is not user-configurable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Only show skips that may be placed on a public road
    pub road_placement_only: bool,

    /// Inclusive size bounds
    pub size_range: SizeRange,

    /// Inclusive bounds over price before VAT
    pub price_range: PriceRange,
}

impl FilterConfig {
    /// Restore defaults (the "Reset Filters" affordance)
    pub fn reset(&mut self) {
        *self = FilterConfig::default();
    }
}

/// Derive price bounds from the actual min/max of loaded records.
///
/// Returns `None` for an empty list; callers keep the default bounds until
/// the fetch resolves.
pub fn price_bounds(skips: &[SkipRecord]) -> Option<PriceRange> {
    let mut prices = skips.iter().map(|s| s.price_before_vat);
    let first = prices.next()?;
    let (min, max) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
    Some(PriceRange { min, max })
}

/// Whether a single record passes every filter clause
pub fn passes(skip: &SkipRecord, has_heavy_waste: bool, config: &FilterConfig) -> bool {
    if skip.forbidden {
        return false;
    }
    if config.road_placement_only && !skip.allowed_on_road {
        return false;
    }
    if has_heavy_waste && !skip.allows_heavy_waste {
        return false;
    }
    config.size_range.contains(skip.size) && config.price_range.contains(skip.price_before_vat)
}

/// The visible subset of skips, sorted ascending by size.
///
/// The sort is stable, so records of equal size keep their original relative
/// order and repeated calls with identical input are deterministic. Empty
/// input or an all-excluding config yields an empty result, not an error.
pub fn visible_skips(
    all_skips: &[SkipRecord],
    has_heavy_waste: bool,
    config: &FilterConfig,
) -> Vec<SkipRecord> {
    let mut filtered: Vec<SkipRecord> = all_skips
        .iter()
        .filter(|skip| passes(skip, has_heavy_waste, config))
        .cloned()
        .collect();
    filtered.sort_by_key(|skip| skip.size);
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use proptest::prelude::*;

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

    fn two_record_fixture() -> Vec<SkipRecord> {
        let mut a = skip(1, 4, 200.0);
        a.allows_heavy_waste = false;
        let mut b = skip(2, 8, 350.0);
        b.allowed_on_road = false;
        vec![a, b]
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        assert!(SizeRange::new(10, 4).is_err());
        assert!(PriceRange::new(500.0, 100.0).is_err());
        assert!(PriceRange::new(f64::NAN, 100.0).is_err());
        assert!(SizeRange::new(4, 4).is_ok());
    }

    #[test]
    fn test_empty_input_is_empty_result() {
        let visible = visible_skips(&[], false, &FilterConfig::default());
        assert!(visible.is_empty());
    }

    #[test]
    fn test_forbidden_always_excluded() {
        let mut s = skip(1, 4, 200.0);
        s.forbidden = true;
        let visible = visible_skips(&[s], false, &FilterConfig::default());
        assert!(visible.is_empty());
    }

    #[test]
    fn test_heavy_waste_keeps_only_heavy_capable() {
        let skips = two_record_fixture();
        let visible = visible_skips(&skips, true, &FilterConfig::default());
        let ids: Vec<u32> = visible.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_road_placement_keeps_only_road_allowed() {
        let skips = two_record_fixture();
        let config = FilterConfig {
            road_placement_only: true,
            ..FilterConfig::default()
        };
        let visible = visible_skips(&skips, false, &config);
        let ids: Vec<u32> = visible.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_size_and_price_bounds_inclusive() {
        let skips = vec![skip(1, 4, 200.0), skip(2, 8, 350.0), skip(3, 12, 500.0)];
        let config = FilterConfig {
            road_placement_only: false,
            size_range: SizeRange::new(4, 8).unwrap(),
            price_range: PriceRange::new(200.0, 350.0).unwrap(),
        };
        let visible = visible_skips(&skips, false, &config);
        let ids: Vec<u32> = visible.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_all_excluding_config_is_empty_not_error() {
        let skips = vec![skip(1, 4, 200.0)];
        let config = FilterConfig {
            road_placement_only: false,
            size_range: SizeRange::new(20, 40).unwrap(),
            price_range: PriceRange::default(),
        };
        assert!(visible_skips(&skips, false, &config).is_empty());
    }

    #[test]
    fn test_sorted_by_size_stable_on_ties() {
        let skips = vec![
            skip(10, 8, 350.0),
            skip(11, 4, 210.0),
            skip(12, 8, 340.0),
            skip(13, 4, 200.0),
        ];
        let visible = visible_skips(&skips, false, &FilterConfig::default());
        let ids: Vec<u32> = visible.iter().map(|s| s.id).collect();
        // Equal sizes keep input order: 11 before 13, 10 before 12
        assert_eq!(ids, vec![11, 13, 10, 12]);
    }

    #[test]
    fn test_price_bounds_from_records() {
        let skips = vec![skip(1, 4, 278.0), skip(2, 8, 375.0), skip(3, 6, 305.0)];
        let bounds = price_bounds(&skips).unwrap();
        assert_eq!(bounds.min(), 278.0);
        assert_eq!(bounds.max(), 375.0);
        assert!(price_bounds(&[]).is_none());
    }

    #[test]
    fn test_input_not_mutated() {
        let skips = vec![skip(2, 8, 350.0), skip(1, 4, 200.0)];
        let before = skips.clone();
        let _ = visible_skips(&skips, false, &FilterConfig::default());
        assert_eq!(skips, before);
    }

    prop_compose! {
        fn arb_skip()(
            id in 1u32..10_000,
            size in 1u32..45,
            price in 0.0f64..1200.0,
            forbidden in any::<bool>(),
            allowed_on_road in any::<bool>(),
            allows_heavy_waste in any::<bool>(),
        ) -> SkipRecord {
            let mut s = skip(id, size, price);
            s.forbidden = forbidden;
            s.allowed_on_road = allowed_on_road;
            s.allows_heavy_waste = allows_heavy_waste;
            s
        }
    }

    proptest! {
        #[test]
        fn prop_every_visible_skip_passes_all_clauses(
            skips in prop::collection::vec(arb_skip(), 0..40),
            has_heavy in any::<bool>(),
            road_only in any::<bool>(),
        ) {
            let config = FilterConfig {
                road_placement_only: road_only,
                ..FilterConfig::default()
            };
            let visible = visible_skips(&skips, has_heavy, &config);
            for s in &visible {
                prop_assert!(passes(s, has_heavy, &config));
            }
            // Excluded records fail at least one clause
            let visible_ids: Vec<u32> = visible.iter().map(|s| s.id).collect();
            for s in &skips {
                if !visible_ids.contains(&s.id) {
                    prop_assert!(!passes(s, has_heavy, &config));
                }
            }
        }

        #[test]
        fn prop_output_sorted_and_stable(
            skips in prop::collection::vec(arb_skip(), 0..40),
        ) {
            let config = FilterConfig::default();
            let visible = visible_skips(&skips, false, &config);
            prop_assert!(visible.windows(2).all(|w| w[0].size <= w[1].size));

            // Stable permutation of the passing subsequence
            let passing: Vec<SkipRecord> = skips
                .iter()
                .filter(|s| passes(s, false, &config))
                .cloned()
                .collect();
            let mut expected = passing;
            expected.sort_by_key(|s| s.size);
            prop_assert_eq!(visible, expected);
        }
    }
}
