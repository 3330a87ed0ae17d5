//! Booking Insights - Hotel Booking Visitor Dashboard
//!
//! A Rust application that loads a CSV of hotel booking records and displays
//! aggregate visitor statistics filtered by arrival-date range.

mod charts;
mod config;
mod data;
mod gui;
mod stats;

use eframe::egui;
use gui::BookingApp;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([1000.0, 650.0])
            .with_title("Booking Insights"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Booking Insights",
        options,
        Box::new(|cc| Ok(Box::new(BookingApp::new(cc)))),
    )
}
