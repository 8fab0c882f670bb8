//! Heavy-waste detail panel with tab navigation
//!
//! Mirrors the three detail questions: which heavy-waste types are present,
//! what share of the load they make up, and how plasterboard is handled.

use eframe::egui::{RichText, Ui};
use skiphire_store::SelectionState;
use skiphire_types::{heavy_waste_catalog, HeavyWasteBand, PlasterboardBand};

/// Detail tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Types,
    Percentage,
    Plasterboard,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Types => "Waste Types",
            Tab::Percentage => "Percentage",
            Tab::Plasterboard => "Plasterboard",
        }
    }
}

/// Second wizard screen: heavy-waste detail
pub struct HeavyWastePanel {
    current_tab: Tab,
}

impl HeavyWastePanel {
    pub fn new() -> Self {
        Self {
            current_tab: Tab::default(),
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, state: &mut SelectionState) {
        ui.heading("Heavy Waste Details");
        ui.label("Additional information needed");
        ui.add_space(4.0);
        ui.label(
            RichText::new(
                "Heavy waste has specific requirements and may limit available skip sizes",
            )
            .color(ui.visuals().warn_fg_color),
        );
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            for tab in [Tab::Types, Tab::Percentage, Tab::Plasterboard] {
                let selected = self.current_tab == tab;
                if ui.selectable_label(selected, tab.label()).clicked() {
                    self.current_tab = tab;
                }
                ui.add_space(8.0);
            }
        });
        ui.separator();
        ui.add_space(8.0);

        match self.current_tab {
            Tab::Types => self.types_tab(ui, state),
            Tab::Percentage => self.percentage_tab(ui, state),
            Tab::Plasterboard => self.plasterboard_tab(ui, state),
        }
    }

    fn types_tab(&mut self, ui: &mut Ui, state: &mut SelectionState) {
        ui.label("Select any heavy waste types in your load:");
        ui.add_space(6.0);
        for option in heavy_waste_catalog() {
            let selected = state.heavy_waste_types().iter().any(|id| id == option.id);
            let response = ui.selectable_label(
                selected,
                format!("{} — {}", option.label, option.description),
            );
            if response.clicked() {
                state.toggle_heavy_waste_type(option.id);
            }
        }
    }

    fn percentage_tab(&mut self, ui: &mut Ui, state: &mut SelectionState) {
        ui.label("Roughly how much of the load is heavy waste?");
        ui.add_space(6.0);
        for band in HeavyWasteBand::ALL {
            let selected = state.heavy_waste_band() == band;
            if ui.radio(selected, band.label()).clicked() {
                state.set_heavy_waste_band(band);
            }
        }
    }

    fn plasterboard_tab(&mut self, ui: &mut Ui, state: &mut SelectionState) {
        ui.label("How much plasterboard does the load contain?");
        ui.add_space(6.0);
        for band in PlasterboardBand::ALL {
            let selected = state.plasterboard_band() == band;
            if ui.radio(selected, band.label()).clicked() {
                state.set_plasterboard_band(band);
            }
        }
    }
}
