//! Chart Plotter Module
//! Derives the dashboard series and draws them with egui_plot.

use crate::data::{filter_by_range, BookingRecord, DateRange};
use crate::stats::{Aggregator, VisitorCategory};
use chrono::{Datelike, NaiveDate};
use egui::Color32;
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints};

/// Panel colors
pub const LINE_COLOR: Color32 = Color32::from_rgb(30, 144, 255); // Dodger blue
pub const BAR_COLOR: Color32 = Color32::from_rgb(255, 99, 71); // Tomato
pub const SPARK_COLOR: Color32 = Color32::from_rgb(50, 205, 50); // Lime green

/// Derived series behind the four dashboard panels, rebuilt in full from the
/// filtered dataset on every input change.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub daily_visitors: Vec<(NaiveDate, u64)>,
    pub country_visitors: Vec<(String, u64)>,
    pub adults_series: Vec<u64>,
    pub children_series: Vec<u64>,
    pub adults_total: u64,
    pub children_total: u64,
    pub babies_total: u64,
    pub filtered_count: usize,
}

impl DashboardData {
    /// Filter the dataset to `range` and rebuild every panel series.
    pub fn compute(records: &[BookingRecord], range: DateRange) -> Self {
        let filtered = filter_by_range(records, range);

        Self {
            daily_visitors: Aggregator::daily_totals(&filtered),
            country_visitors: Aggregator::group_by_country(&filtered).into_iter().collect(),
            adults_series: Aggregator::category_series(VisitorCategory::Adults, &filtered),
            children_series: Aggregator::category_series(VisitorCategory::Children, &filtered),
            adults_total: Aggregator::total_for(VisitorCategory::Adults, &filtered),
            children_total: Aggregator::total_for(VisitorCategory::Children, &filtered),
            babies_total: Aggregator::total_for(VisitorCategory::Babies, &filtered),
            filtered_count: filtered.len(),
        }
    }
}

/// Draws the dashboard panels using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Daily visitors line chart. X is the arrival date as a day number,
    /// formatted back to a calendar date on the axis.
    pub fn draw_daily_chart(ui: &mut egui::Ui, data: &DashboardData, height: f32) {
        let points: PlotPoints = data
            .daily_visitors
            .iter()
            .map(|&(date, total)| [date.num_days_from_ce() as f64, total as f64])
            .collect();

        Plot::new("daily_visitors")
            .height(height)
            .allow_scroll(false)
            .y_axis_label("Visitors")
            .x_axis_formatter(|mark, _range| {
                NaiveDate::from_num_days_from_ce_opt(mark.value.round() as i32)
                    .map(|date| date.format("%Y-%m-%d").to_string())
                    .unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(points).color(LINE_COLOR).width(1.5).name("Visitors"));
            });
    }

    /// Visitors by country bar chart, one bar per country code.
    pub fn draw_country_chart(ui: &mut egui::Ui, data: &DashboardData, height: f32) {
        let labels: Vec<String> = data
            .country_visitors
            .iter()
            .map(|(country, _)| country.clone())
            .collect();

        let bars: Vec<Bar> = data
            .country_visitors
            .iter()
            .enumerate()
            .map(|(i, (_, total))| Bar::new(i as f64, *total as f64).width(0.6).fill(BAR_COLOR))
            .collect();

        Plot::new("country_visitors")
            .height(height)
            .allow_scroll(false)
            .y_axis_label("Visitors")
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if idx < labels.len() {
                    labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).name("Visitors"));
            });
    }

    /// Sparkline: one visitor column per record, axes and grid hidden.
    pub fn draw_sparkline(ui: &mut egui::Ui, id: &str, series: &[u64], height: f32) {
        let points: PlotPoints = series
            .iter()
            .enumerate()
            .map(|(i, &value)| [i as f64, value as f64])
            .collect();

        Plot::new(format!("spark_{id}"))
            .height(height)
            .show_axes(false)
            .show_grid(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(points).color(SPARK_COLOR).width(1.0));
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: &str, month: &str, day: &str, country: &str, adults: &str) -> BookingRecord {
        BookingRecord {
            year: Some(year.to_string()),
            month: Some(month.to_string()),
            day: Some(day.to_string()),
            country: Some(country.to_string()),
            adults: Some(adults.to_string()),
            children: Some("0".to_string()),
            babies: Some("0".to_string()),
        }
    }

    fn range(start: (i32, u32, u32), end: (i32, u32, u32)) -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        )
    }

    #[test]
    fn computes_every_panel_series_from_the_filtered_view() {
        let records = vec![
            record("2016", "May", "1", "PRT", "2"),
            record("2016", "June", "1", "PRT", "1"),
            record("2018", "January", "1", "GBR", "4"),
        ];

        let data = DashboardData::compute(&records, range((2016, 1, 1), (2016, 12, 31)));

        assert_eq!(data.filtered_count, 2);
        assert_eq!(data.daily_visitors.len(), 2);
        assert_eq!(data.country_visitors, vec![("PRT".to_string(), 3)]);
        assert_eq!(data.adults_series, vec![2, 1]);
        assert_eq!(data.adults_total, 3);
        assert_eq!(data.children_total, 0);
        assert_eq!(data.babies_total, 0);
    }

    #[test]
    fn empty_range_yields_empty_panels() {
        let records = vec![record("2016", "May", "1", "PRT", "2")];
        let data = DashboardData::compute(&records, range((2017, 1, 1), (2016, 1, 1)));

        assert_eq!(data.filtered_count, 0);
        assert!(data.daily_visitors.is_empty());
        assert!(data.country_visitors.is_empty());
        assert_eq!(data.adults_total, 0);
    }
}
