//! Application entry point for the bibliography cluster explorer.
//!
//! This binary sets up eframe/egui and delegates all interactive logic
//! and rendering to [`Viewer`] from the `viewer` module.

mod demo;
mod viewer;

use viewer::Viewer;

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Bibliography Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(Viewer::new()))),
    )
}
