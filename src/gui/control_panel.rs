//! Control Panel Widget
//! Left side panel with the data source picker and the date-range filter.

use crate::config::AppConfig;
use crate::data::DateRange;
use chrono::NaiveDate;
use egui::{Color32, RichText};
use std::path::PathBuf;

const ERROR_COLOR: Color32 = Color32::from_rgb(220, 53, 69);

/// Current filter inputs.
#[derive(Clone)]
pub struct FilterSettings {
    pub csv_path: Option<PathBuf>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Left side control panel with file selection and date inputs.
pub struct ControlPanel {
    pub settings: FilterSettings,
    start_text: String,
    end_text: String,
    pub total_records: usize,
    pub filtered_records: usize,
    pub status: String,
}

impl ControlPanel {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            settings: FilterSettings {
                csv_path: config.csv_path.clone(),
                start_date: config.start_date,
                end_date: config.end_date,
            },
            start_text: config.start_date.format("%Y-%m-%d").to_string(),
            end_text: config.end_date.format("%Y-%m-%d").to_string(),
            total_records: 0,
            filtered_records: 0,
            status: "Ready".to_string(),
        }
    }

    /// The currently applied inclusive date range.
    pub fn date_range(&self) -> DateRange {
        DateRange::new(self.settings.start_date, self.settings.end_date)
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🏨 Booking Insights")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Hotel visitor statistics")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .settings
                        .csv_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());

                    ui.label(RichText::new(&path_text).size(12.0).color(
                        if self.settings.csv_path.is_some() {
                            Color32::WHITE
                        } else {
                            Color32::GRAY
                        },
                    ));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = ControlPanelAction::BrowseCsv;
                        }
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Date Filter Section =====
        ui.label(RichText::new("📅 Date Filter").size(14.0).strong());
        ui.add_space(8.0);

        if Self::date_input(ui, "Start Date:", &mut self.start_text, &mut self.settings.start_date)
        {
            action = ControlPanelAction::RangeChanged;
        }
        ui.add_space(5.0);
        if Self::date_input(ui, "End Date:", &mut self.end_text, &mut self.settings.end_date) {
            action = ControlPanelAction::RangeChanged;
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Records Section =====
        ui.label(RichText::new("📊 Records").size(14.0).strong());
        ui.add_space(5.0);
        ui.label(
            RichText::new(format!(
                "{} of {} records in range",
                self.filtered_records, self.total_records
            ))
            .size(12.0),
        );

        ui.add_space(10.0);

        let status_color = if self.status.contains("Error") {
            ERROR_COLOR
        } else if self.status.contains("Loaded") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// One labeled date field. Returns true when the text parsed to a new
    /// valid date; invalid text keeps the last applied bound and turns red.
    fn date_input(
        ui: &mut egui::Ui,
        label: &str,
        text: &mut String,
        date: &mut NaiveDate,
    ) -> bool {
        let mut changed = false;

        ui.horizontal(|ui| {
            ui.add_sized([80.0, 20.0], egui::Label::new(label));

            let valid = NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok();
            let mut edit = egui::TextEdit::singleline(text).desired_width(110.0);
            if !valid {
                edit = edit.text_color(ERROR_COLOR);
            }

            if ui.add(edit).changed() {
                if let Ok(parsed) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
                    if parsed != *date {
                        *date = parsed;
                        changed = true;
                    }
                }
            }
        });

        changed
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseCsv,
    RangeChanged,
}
