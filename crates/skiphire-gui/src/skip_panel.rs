//! Skip selection panel: filter bar, results grid, comparison strip

use eframe::egui::{self, RichText, Ui};
use skiphire_app::BookingSession;
use skiphire_domain::{PriceRange, SizeRange, MAX_COMPARE};
use skiphire_types::{format_gbp, HeavyWasteBand};

/// Size range presets (label, min, max), in cubic yards
const SIZE_PRESETS: &[(&str, u32, u32)] = &[
    ("All Sizes", 0, 40),
    ("Small (4-6 yards)", 4, 6),
    ("Medium (8-10 yards)", 8, 10),
    ("Large (12-16 yards)", 12, 16),
    ("Roll-On/Roll-Off (20-40 yards)", 20, 40),
];

/// Price range presets (label, min, max) over price before VAT
const PRICE_PRESETS: &[(&str, f64, f64)] = &[
    ("All Prices", 0.0, 1000.0),
    ("Under £300", 0.0, 300.0),
    ("£300 - £400", 300.0, 400.0),
    ("£400 - £500", 400.0, 500.0),
    ("Over £500", 500.0, 1000.0),
];

/// Third wizard screen: choose a skip size
pub struct SkipPanel {
    /// Id of the skip the user picked, if any
    selected_skip: Option<u32>,
}

impl SkipPanel {
    pub fn new() -> Self {
        Self {
            selected_skip: None,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, session: &mut BookingSession, fetch_error: Option<&str>) {
        ui.heading("Choose Your Skip Size");
        ui.label("Select the skip size that best suits your needs");
        ui.add_space(6.0);

        if let Some(error) = fetch_error {
            ui.label(
                RichText::new(format!("Could not load skips: {}", error))
                    .color(ui.visuals().error_fg_color),
            );
            ui.add_space(6.0);
        }

        self.heavy_waste_banner(ui, session);
        self.filter_bar(ui, session);
        ui.add_space(8.0);

        let visible = session.visible_skips();
        if visible.is_empty() {
            ui.add_space(12.0);
            ui.label(RichText::new("No Matching Skips").strong());
            ui.label("No skips match your current filters. Try adjusting your filter criteria.");
            if ui.button("Reset Filters").clicked() {
                session.reset_filters();
            }
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            for skip in &visible {
                let comparing = session.comparison().contains(skip.id);
                let chosen = self.selected_skip == Some(skip.id);

                ui.horizontal(|ui| {
                    ui.label(RichText::new(format!("{} Yard Skip", skip.size)).strong());
                    ui.label(format!("{} day hire", skip.hire_period_days));
                    ui.label(RichText::new(format_gbp(skip.total_price())).strong());
                    ui.weak(format!("{} + VAT", format_gbp(skip.price_before_vat)));
                    if !skip.allowed_on_road {
                        ui.weak("Not allowed on road");
                    }
                    if skip.allows_heavy_waste {
                        ui.weak("Heavy waste OK");
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.selectable_label(chosen, "Select").clicked() {
                            self.selected_skip = Some(skip.id);
                        }
                        if ui.selectable_label(comparing, "Compare").clicked() {
                            session.toggle_compare(skip.id);
                        }
                    });
                });
                ui.separator();
            }
        });

        self.comparison_strip(ui, session);
    }

    /// Warning banner shown while any heavy-waste sub-category is selected
    fn heavy_waste_banner(&self, ui: &mut Ui, session: &BookingSession) {
        if !session.state().has_heavy_waste() {
            return;
        }
        let types = session.state().heavy_waste_types().join(", ");
        let mut message = format!(
            "Heavy waste restrictions apply. Based on your selection ({}), only skips that support heavy waste are shown.",
            types
        );
        let band = session.state().heavy_waste_band();
        if band != HeavyWasteBand::None {
            message.push_str(&format!(
                " Your selected heavy waste percentage ({}) may affect pricing.",
                band.label()
            ));
        }
        ui.label(RichText::new(message).color(ui.visuals().warn_fg_color));
        ui.add_space(6.0);
    }

    fn filter_bar(&mut self, ui: &mut Ui, session: &mut BookingSession) {
        ui.horizontal(|ui| {
            let mut road_only = session.filter().road_placement_only;
            if ui.checkbox(&mut road_only, "Road placement").changed() {
                session.filter_mut().road_placement_only = road_only;
            }

            let size_label = current_size_label(session);
            egui::ComboBox::from_id_salt("size_filter")
                .selected_text(size_label)
                .show_ui(ui, |ui| {
                    for &(label, min, max) in SIZE_PRESETS {
                        if ui.selectable_label(false, label).clicked() {
                            if let Ok(range) = SizeRange::new(min, max) {
                                session.filter_mut().size_range = range;
                            }
                        }
                    }
                });

            let price_label = current_price_label(session);
            egui::ComboBox::from_id_salt("price_filter")
                .selected_text(price_label)
                .show_ui(ui, |ui| {
                    for &(label, min, max) in PRICE_PRESETS {
                        if ui.selectable_label(false, label).clicked() {
                            if let Ok(range) = PriceRange::new(min, max) {
                                session.filter_mut().price_range = range;
                            }
                        }
                    }
                });
        });
    }

    /// Side-by-side details for the compared skips
    fn comparison_strip(&mut self, ui: &mut Ui, session: &mut BookingSession) {
        let compared: Vec<_> = session
            .compared_skips()
            .into_iter()
            .cloned()
            .collect();
        if compared.is_empty() {
            return;
        }

        ui.add_space(8.0);
        ui.label(
            RichText::new(format!(
                "Comparing {} of {} skips",
                compared.len(),
                MAX_COMPARE
            ))
            .strong(),
        );
        egui::Grid::new("comparison_grid")
            .striped(true)
            .show(ui, |ui| {
                ui.label("");
                for skip in &compared {
                    ui.label(RichText::new(format!("{} yards", skip.size)).strong());
                }
                ui.end_row();

                ui.label("Hire period");
                for skip in &compared {
                    ui.label(format!("{} days", skip.hire_period_days));
                }
                ui.end_row();

                ui.label("Price (ex VAT)");
                for skip in &compared {
                    ui.label(format_gbp(skip.price_before_vat));
                }
                ui.end_row();

                ui.label("VAT");
                for skip in &compared {
                    ui.label(format!("{} ({}%)", format_gbp(skip.vat_amount()), skip.vat));
                }
                ui.end_row();

                ui.label("Total");
                for skip in &compared {
                    ui.label(RichText::new(format_gbp(skip.total_price())).strong());
                }
                ui.end_row();

                ui.label("On road");
                for skip in &compared {
                    ui.label(if skip.allowed_on_road { "Yes" } else { "No" });
                }
                ui.end_row();

                ui.label("Heavy waste");
                for skip in &compared {
                    ui.label(if skip.allows_heavy_waste { "Yes" } else { "No" });
                }
                ui.end_row();
            });
    }
}

fn current_size_label(session: &BookingSession) -> String {
    let range = session.filter().size_range;
    SIZE_PRESETS
        .iter()
        .find(|&&(_, min, max)| range.min() == min && range.max() == max)
        .map(|&(label, _, _)| label.to_string())
        .unwrap_or_else(|| "Custom Size".to_string())
}

fn current_price_label(session: &BookingSession) -> String {
    let range = session.filter().price_range;
    PRICE_PRESETS
        .iter()
        .find(|&&(_, min, max)| range.min() == min && range.max() == max)
        .map(|&(label, _, _)| label.to_string())
        .unwrap_or_else(|| "Custom Price".to_string())
}
