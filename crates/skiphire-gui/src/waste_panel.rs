//! Waste-type selection panel

use eframe::egui::{RichText, Ui};
use skiphire_store::SelectionState;
use skiphire_types::waste_catalog;

/// First wizard screen: pick one or more waste categories
pub struct WastePanel;

impl WastePanel {
    pub fn new() -> Self {
        Self
    }

    pub fn ui(&mut self, ui: &mut Ui, state: &mut SelectionState) {
        ui.heading("Which type of waste best describes what you are disposing of?");
        ui.add_space(6.0);
        ui.label("Select the waste type that most closely matches your disposal needs.");
        ui.add_space(4.0);
        ui.weak("Multiple waste types can be selected. Plasterboard and heavy construction materials (soil, concrete, etc.) may require special handling.");
        ui.add_space(12.0);

        for waste in waste_catalog() {
            let selected = state
                .selected_waste_types()
                .iter()
                .any(|id| id == waste.id);

            ui.add_enabled_ui(waste.enabled, |ui| {
                let response = ui.selectable_label(
                    selected,
                    format!("{} — {}", waste.name, waste.description),
                );
                if response.clicked() {
                    state.toggle_waste_type(waste.id);
                }
                if selected {
                    ui.indent(waste.id, |ui| {
                        ui.label(RichText::new(waste.examples.join(", ")).weak().small());
                    });
                }
            });
            ui.add_space(4.0);
        }

        if !waste_catalog().iter().all(|w| w.enabled) {
            ui.add_space(8.0);
            ui.weak("Greyed-out categories are not available at this location.");
        }
    }
}
