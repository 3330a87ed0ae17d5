//! Booking Insights Main Application
//! Main window wiring the filter sidebar to the dashboard panels.

use crate::charts::DashboardData;
use crate::config::AppConfig;
use crate::data::{BookingRecord, DataLoader};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use egui::SidePanel;
use std::sync::mpsc::{channel, Receiver};
use std::thread;

/// CSV loading result from background thread
enum LoadResult {
    Progress(String),
    Complete(Vec<BookingRecord>),
    Error(String),
}

/// Main application window.
pub struct BookingApp {
    dataset: Vec<BookingRecord>,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl BookingApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::load();
        let mut app = Self {
            dataset: Vec::new(),
            control_panel: ControlPanel::new(&config),
            chart_viewer: ChartViewer::new(),
            load_rx: None,
            is_loading: false,
        };

        // Load the configured CSV at startup when it exists
        if let Some(path) = config.csv_path.filter(|p| p.exists()) {
            app.start_load(path.to_string_lossy().to_string());
        }
        app
    }

    /// Handle CSV file selection via the file dialog.
    fn handle_browse_csv(&mut self) {
        if self.is_loading {
            return; // Already loading
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.control_panel.settings.csv_path = Some(path.clone());
            self.start_load(path.to_string_lossy().to_string());
        }
    }

    /// Start loading a CSV in a background thread.
    fn start_load(&mut self, path: String) {
        self.chart_viewer.clear();
        self.dataset.clear();
        self.control_panel.total_records = 0;
        self.control_panel.filtered_records = 0;
        self.control_panel.set_status("Loading CSV file...");
        self.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let _ = tx.send(LoadResult::Progress("Reading CSV file...".to_string()));

            match DataLoader::load_records(&path) {
                Ok(records) => {
                    let _ = tx.send(LoadResult::Complete(records));
                }
                Err(e) => {
                    tracing::error!("CSV load failed for {path}: {e}");
                    let _ = tx.send(LoadResult::Error(e.to_string()));
                }
            }
        });
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Progress(status) => {
                        self.control_panel.set_status(&status);
                    }
                    LoadResult::Complete(records) => {
                        self.control_panel
                            .set_status(&format!("Loaded {} records", records.len()));
                        self.dataset = records;
                        self.is_loading = false;
                        should_keep_receiver = false;
                        self.recompute();
                    }
                    LoadResult::Error(error) => {
                        // Dataset stays empty; the failure is only reported
                        self.control_panel.set_status(&format!("Error: {error}"));
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    /// Re-filter and re-aggregate the dataset for the current date range.
    fn recompute(&mut self) {
        let range = self.control_panel.date_range();
        let data = DashboardData::compute(&self.dataset, range);

        self.control_panel.total_records = self.dataset.len();
        self.control_panel.filtered_records = data.filtered_count;
        self.chart_viewer.set_data(data);
    }
}

impl eframe::App for BookingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();

        // Request repaint while loading
        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - date filter and data source
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::RangeChanged => self.recompute(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - dashboard
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
