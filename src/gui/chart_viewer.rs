//! Chart Viewer Widget
//! Central scrollable panel with the four dashboard cards: the daily trend
//! line, the per-country bars and the two category sparklines.

use crate::charts::{ChartPlotter, DashboardData};
use crate::stats::VisitorCategory;
use egui::{Color32, RichText, ScrollArea};

const CARD_SPACING: f32 = 15.0;
const CHART_HEIGHT: f32 = 330.0;
const SPARK_HEIGHT: f32 = 100.0;

/// Scrollable dashboard area bound to the current derived series.
pub struct ChartViewer {
    data: Option<DashboardData>,
}

impl Default for ChartViewer {
    fn default() -> Self {
        Self { data: None }
    }
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.data = None;
    }

    pub fn set_data(&mut self, data: DashboardData) {
        self.data = Some(data);
    }

    /// Draw the dashboard, two cards per row.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        let Some(data) = self.data.clone() else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        let avail_width = ui.available_width();
        let card_width = ((avail_width - 3.0 * CARD_SPACING) / 2.0).max(320.0);

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(5.0);
                ui.label(RichText::new("Hotel Booking Insights").size(20.0).strong());
                ui.label(
                    RichText::new(format!(
                        "Adults {} | Children {} | Babies {}",
                        data.adults_total, data.children_total, data.babies_total
                    ))
                    .size(12.0)
                    .color(Color32::GRAY),
                );
                ui.add_space(CARD_SPACING);

                ui.horizontal(|ui| {
                    Self::chart_card(ui, card_width, "Daily Visitors Trend", |ui| {
                        ChartPlotter::draw_daily_chart(ui, &data, CHART_HEIGHT);
                    });
                    ui.add_space(CARD_SPACING);
                    Self::chart_card(ui, card_width, "Visitors by Country", |ui| {
                        ChartPlotter::draw_country_chart(ui, &data, CHART_HEIGHT);
                    });
                });

                ui.add_space(CARD_SPACING);

                ui.horizontal(|ui| {
                    Self::sparkline_card(
                        ui,
                        card_width,
                        VisitorCategory::Adults.label(),
                        &data.adults_series,
                        data.adults_total,
                    );
                    ui.add_space(CARD_SPACING);
                    Self::sparkline_card(
                        ui,
                        card_width,
                        VisitorCategory::Children.label(),
                        &data.children_series,
                        data.children_total,
                    );
                });
            });
    }

    /// Draw one titled card frame around a chart.
    fn chart_card(
        ui: &mut egui::Ui,
        width: f32,
        title: &str,
        draw: impl FnOnce(&mut egui::Ui),
    ) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, Color32::from_gray(70)))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(width - 24.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(title).size(16.0).strong());
                    ui.add_space(6.0);
                    draw(ui);
                });
            });
    }

    fn sparkline_card(ui: &mut egui::Ui, width: f32, label: &str, series: &[u64], total: u64) {
        let id = label.to_lowercase().replace(' ', "_");
        Self::chart_card(ui, width, label, |ui| {
            ChartPlotter::draw_sparkline(ui, &id, series, SPARK_HEIGHT);
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Total {label}: {total}"))
                    .size(13.0)
                    .color(Color32::GRAY),
            );
        });
    }
}
