use egui::{Color32, Ui};
use uc_app::{
    AppResult, Conversion, ConverterConfig, Precision, Session, failure_message, needs_render,
};
use uc_core::Category;
use uc_units::ConvertError;

const SUCCESS_COLOR: Color32 = Color32::from_rgb(0x2e, 0x7d, 0x32);
const ERROR_COLOR: Color32 = Color32::from_rgb(0xc6, 0x28, 0x28);

/// Last result line shown under the form.
#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    Success(String),
    Failure(String),
}

impl Outcome {
    fn from_result(result: Result<Conversion, ConvertError>) -> Self {
        match result {
            Ok(conversion) => Self::Success(conversion.display),
            Err(err) => Self::Failure(failure_message(&err)),
        }
    }
}

pub struct ConverterApp {
    session: Session,
    outcome: Option<Outcome>,
}

impl ConverterApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppResult<ConverterConfig>) -> Self {
        Self::with_config(config)
    }

    /// A config that failed to load is reported in the result line and the
    /// form starts from defaults.
    fn with_config(config: AppResult<ConverterConfig>) -> Self {
        match config {
            Ok(config) => Self {
                session: Session::new(&config),
                outcome: None,
            },
            Err(e) => {
                tracing::warn!(error = %e, "config not loaded, using defaults");
                Self {
                    session: Session::default(),
                    outcome: Some(Outcome::Failure(format!(
                        "Config not loaded, using defaults: {e}"
                    ))),
                }
            }
        }
    }

    fn show_settings(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let current = self.session.category();
            let mut category = current;
            egui::ComboBox::from_label("Category")
                .selected_text(category.name())
                .show_ui(ui, |ui| {
                    for c in Category::ALL {
                        ui.selectable_value(&mut category, c, c.name());
                    }
                });
            if category != current {
                self.session.select_category(category);
                self.outcome = None;
            }

            let mut precision = self.session.precision().get();
            let response = ui.add(
                egui::DragValue::new(&mut precision)
                    .range(0..=Precision::MAX)
                    .prefix("Decimal places: "),
            );
            if response.changed() {
                let result = self.session.set_precision(i64::from(precision));
                self.report(result);
            }
        });
    }

    fn show_units(&mut self, ui: &mut Ui) {
        let units = self.session.units();
        let pair = self.session.pair();

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                let mut from = pair.from.clone();
                unit_picker(ui, "From unit", &units, &mut from);
                if from != pair.from {
                    let result = self.session.set_from(&from);
                    self.report(result);
                }

                let mut to = pair.to.clone();
                unit_picker(ui, "To unit", &units, &mut to);
                if to != pair.to {
                    let result = self.session.set_to(&to);
                    self.report(result);
                }
            });

            if ui.button("↔ Swap").clicked() {
                self.session.swap();
            }
        });
    }

    fn show_value(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label("Value");
            let mut text = self.session.value_text().to_string();
            if ui.text_edit_singleline(&mut text).changed() {
                self.session.set_value_text(text);
            }
        });

        if ui.button("Convert").clicked() {
            self.outcome = Some(Outcome::from_result(self.session.submit()));
        }

        match &self.outcome {
            Some(Outcome::Success(line)) => {
                ui.colored_label(SUCCESS_COLOR, line);
            }
            Some(Outcome::Failure(message)) => {
                ui.colored_label(ERROR_COLOR, message);
            }
            None => {}
        }
    }

    fn show_history(&self, ui: &mut Ui) {
        ui.heading("🧾 Recent conversions");
        let history = self.session.history();
        if history.is_empty() {
            ui.weak("No conversions yet. Try one above!");
            return;
        }
        for (i, entry) in history.recent().enumerate() {
            ui.label(format!("{}. {}", i + 1, entry.text()));
        }
    }

    fn report(&mut self, result: AppResult<()>) {
        if let Err(e) = result {
            self.outcome = Some(Outcome::Failure(e.to_string()));
        }
    }
}

fn unit_picker(ui: &mut Ui, label: &str, units: &[&'static str], selected: &mut String) {
    egui::ComboBox::from_label(label)
        .selected_text(selected.clone())
        .show_ui(ui, |ui| {
            for unit in units {
                ui.selectable_value(selected, unit.to_string(), *unit);
            }
        });
}

impl eframe::App for ConverterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("🔄 Unit Converter");
            ui.label("Simple, fast conversions for Length, Mass, Volume, and Temperature.");
            ui.separator();

            self.show_settings(ui);
            self.show_units(ui);
            self.show_value(ui);

            ui.separator();
            self.show_history(ui);
        });

        // Pickers must show post-swap/repair state on the very next frame
        if needs_render(&self.session.take_changes()) {
            ctx.request_repaint();
        }
    }
}
