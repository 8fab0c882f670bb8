//! Shared selection state for the booking wizard
//!
//! One `SelectionState` instance lives for the application session. All
//! screens hold a reference to it and mutate it only through the operations
//! here; fields stay private so readers never observe a half-applied update.
//! State is mutated from a single logical writer (the UI event loop). A
//! multi-threaded host must wrap the store in its own mutex; the toggle
//! operations are not designed to interleave.

use serde::{Deserialize, Serialize};
use skiphire_domain::wizard;
use skiphire_types::{
    waste_type, HeavyWasteBand, PlasterboardBand, SkipRecord, Step, DEFAULT_WASTE_TYPE,
};

/// In-progress wizard choices plus the loaded skip list.
///
/// Selection vectors preserve insertion order for display. Nothing here is
/// persisted; the state resets with the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionState {
    selected_waste_types: Vec<String>,
    heavy_waste_types: Vec<String>,
    heavy_waste_band: HeavyWasteBand,
    plasterboard_band: PlasterboardBand,
    step: Step,
    skips: Vec<SkipRecord>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            selected_waste_types: vec![DEFAULT_WASTE_TYPE.to_string()],
            heavy_waste_types: Vec::new(),
            heavy_waste_band: HeavyWasteBand::default(),
            plasterboard_band: PlasterboardBand::default(),
            step: Step::default(),
            skips: Vec::new(),
        }
    }
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected waste-type ids, insertion order
    pub fn selected_waste_types(&self) -> &[String] {
        &self.selected_waste_types
    }

    /// Selected heavy-waste sub-category ids, insertion order
    pub fn heavy_waste_types(&self) -> &[String] {
        &self.heavy_waste_types
    }

    pub fn heavy_waste_band(&self) -> HeavyWasteBand {
        self.heavy_waste_band
    }

    pub fn plasterboard_band(&self) -> PlasterboardBand {
        self.plasterboard_band
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Loaded skip records, empty until the fetch resolves
    pub fn skips(&self) -> &[SkipRecord] {
        &self.skips
    }

    /// Whether any heavy-waste sub-category is selected. Drives the
    /// non-configurable allows-heavy-waste filter clause.
    pub fn has_heavy_waste(&self) -> bool {
        !self.heavy_waste_types.is_empty()
    }

    /// Toggle a waste type in or out of the selection.
    ///
    /// Ids are validated against the static catalog: unknown or disabled
    /// waste types are rejected as a no-op. Returns whether the selection
    /// changed. Toggling twice restores the original selection. Does not
    /// touch the heavy-waste sub-selection.
    pub fn toggle_waste_type(&mut self, id: &str) -> bool {
        let Some(waste) = waste_type(id) else {
            return false;
        };
        if !waste.enabled {
            return false;
        }
        if let Some(pos) = self.selected_waste_types.iter().position(|w| w == id) {
            self.selected_waste_types.remove(pos);
        } else {
            self.selected_waste_types.push(id.to_string());
        }
        true
    }

    /// Remove a waste type from the selection; no-op if absent
    pub fn remove_waste_type(&mut self, id: &str) {
        self.selected_waste_types.retain(|w| w != id);
    }

    /// Toggle a heavy-waste sub-category in or out of the selection
    pub fn toggle_heavy_waste_type(&mut self, id: &str) {
        if let Some(pos) = self.heavy_waste_types.iter().position(|w| w == id) {
            self.heavy_waste_types.remove(pos);
        } else {
            self.heavy_waste_types.push(id.to_string());
        }
    }

    /// Replace the heavy-waste percentage band. Values outside the
    /// enumerated set cannot be represented; parsing a wire string rejects
    /// them before this is reached.
    pub fn set_heavy_waste_band(&mut self, band: HeavyWasteBand) {
        self.heavy_waste_band = band;
    }

    /// Replace the plasterboard band
    pub fn set_plasterboard_band(&mut self, band: PlasterboardBand) {
        self.plasterboard_band = band;
    }

    /// Replace the loaded skip list wholesale.
    ///
    /// Dependent filter configs re-derive their default price range from the
    /// new list; that is the caller's responsibility.
    pub fn set_skips(&mut self, skips: Vec<SkipRecord>) {
        self.skips = skips;
    }

    /// Advance the wizard one step, honoring the guard. Returns whether the
    /// step changed; a guard rejection is a no-op, not an error.
    pub fn advance_step(&mut self) -> bool {
        let next = wizard::advance(self.step, self.selected_waste_types.len());
        let changed = next != self.step;
        self.step = next;
        changed
    }

    /// Step back where the flow permits it. Returns whether the step changed.
    pub fn step_back(&mut self) -> bool {
        let prev = wizard::step_back(self.step);
        let changed = prev != self.step;
        self.step = prev;
        changed
    }
}
