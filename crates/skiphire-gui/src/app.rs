//! Main application structure with step-driven navigation

use std::sync::mpsc;
use std::time::Duration;

use eframe::egui;
use skiphire_app::{BookingSession, Config};
use skiphire_domain::wizard;
use skiphire_source::{HttpSkipSource, SkipSource};
use skiphire_types::{waste_type_name, Result, SkipRecord, Step};

use crate::heavy_waste_panel::HeavyWastePanel;
use crate::skip_panel::SkipPanel;
use crate::waste_panel::WastePanel;

/// Main application state
pub struct SkipHireApp {
    /// Booking session shared by all screens
    session: BookingSession,
    /// Application configuration
    config: Config,
    /// Pending result of the one-shot startup fetch
    fetch_rx: Option<mpsc::Receiver<Result<Vec<SkipRecord>>>>,
    /// Fetch failure message, if any
    fetch_error: Option<String>,
    /// Waste-type panel state
    waste_panel: WastePanel,
    /// Heavy-waste detail panel state
    heavy_waste_panel: HeavyWastePanel,
    /// Skip selection panel state
    skip_panel: SkipPanel,
}

impl SkipHireApp {
    /// Create a new application instance and kick off the skip fetch
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = Config::load().unwrap_or_default();

        let session = BookingSession::new(Box::new(HttpSkipSource::new(config.base_url.clone())));

        // Fetch on a worker thread so the event loop never blocks; the
        // result lands in the store via the channel poll in update().
        let (tx, rx) = mpsc::channel();
        let base_url = config.base_url.clone();
        let postcode = config.postcode.clone();
        let area = config.area.clone();
        std::thread::spawn(move || {
            let source = HttpSkipSource::new(base_url);
            let _ = tx.send(source.fetch(&postcode, &area));
        });

        Self {
            session,
            config,
            fetch_rx: Some(rx),
            fetch_error: None,
            waste_panel: WastePanel::new(),
            heavy_waste_panel: HeavyWastePanel::new(),
            skip_panel: SkipPanel::new(),
        }
    }

    /// Apply a finished fetch, keeping the previous (empty) list on failure
    fn poll_fetch(&mut self, ctx: &egui::Context) {
        let mut finished = false;
        if let Some(rx) = &self.fetch_rx {
            match rx.try_recv() {
                Ok(Ok(skips)) => {
                    self.session.apply_skips(skips);
                    finished = true;
                }
                Ok(Err(e)) => {
                    self.fetch_error = Some(e.to_string());
                    finished = true;
                }
                Err(mpsc::TryRecvError::Empty) => {
                    ctx.request_repaint_after(Duration::from_millis(200));
                }
                Err(mpsc::TryRecvError::Disconnected) => {
                    finished = true;
                }
            }
        }
        if finished {
            self.fetch_rx = None;
        }
    }

    /// Render the step indicator bar
    fn render_step_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for step in [Step::WasteType, Step::HeavyWasteDetail, Step::SkipSelection] {
                let current = self.session.state().step() == step;
                let text = if current {
                    egui::RichText::new(step.label()).strong()
                } else {
                    egui::RichText::new(step.label()).weak()
                };
                ui.label(text);
                ui.add_space(12.0);
            }
        });
    }

    /// Render the footer: selected waste-type chips plus navigation buttons
    fn render_footer(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Selected:");
            let selected: Vec<String> = self
                .session
                .state()
                .selected_waste_types()
                .iter()
                .cloned()
                .collect();
            if selected.is_empty() {
                ui.weak("None selected");
            }
            for id in selected {
                if ui
                    .button(format!("{} ✕", waste_type_name(&id)))
                    .clicked()
                {
                    self.session.state_mut().remove_waste_type(&id);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let step = self.session.state().step();
                let selected_count = self.session.state().selected_waste_types().len();

                if step != Step::SkipSelection {
                    let can_advance = wizard::can_advance(step, selected_count);
                    if ui
                        .add_enabled(can_advance, egui::Button::new("Continue"))
                        .clicked()
                    {
                        self.session.state_mut().advance_step();
                    }
                }
                if step == Step::HeavyWasteDetail && ui.button("Back").clicked() {
                    self.session.state_mut().step_back();
                }
            });
        });
    }
}

impl eframe::App for SkipHireApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_fetch(ctx);

        egui::TopBottomPanel::top("step_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.heading("Skip Hire");
                ui.add_space(16.0);
                self.render_step_bar(ui);
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_footer(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.fetch_rx.is_some() {
                ui.weak(format!(
                    "Fetching skips for {} {}...",
                    self.config.postcode, self.config.area
                ));
            }

            match self.session.state().step() {
                Step::WasteType => {
                    self.waste_panel.ui(ui, self.session.state_mut());
                }
                Step::HeavyWasteDetail => {
                    self.heavy_waste_panel.ui(ui, self.session.state_mut());
                }
                Step::SkipSelection => {
                    self.skip_panel
                        .ui(ui, &mut self.session, self.fetch_error.as_deref());
                }
            }
        });
    }
}
