//! Plot rendering using egui_plot
//!
//! Renders the two telemetry series (pendulum angle, PID output) against
//! device time, with the axis policy of the original experiment rig:
//!
//! - The x-axis starts at a fixed `[0, 10]` s range. Once the newest sample
//!   passes the right edge, the window slides to show the trailing 10 s plus
//!   a 2 s lookahead margin, and then stays put until the edge is passed
//!   again.
//! - The y-axis starts at `[-180, 180]`° and rescales to fit all plotted
//!   data after every sample.

use crate::config::{
    INITIAL_X_RANGE, INITIAL_Y_RANGE, X_LOOKAHEAD_SECS, X_WINDOW_SECS,
};
use crate::types::SampleStore;
use egui::{Color32, Ui};
use egui_plot::{Corner, Legend, Line, Plot, PlotBounds, PlotPoints};

/// Fraction of the data's value range added above and below when the
/// y-axis rescales, so lines do not touch the plot frame.
const Y_MARGIN_FRACTION: f64 = 0.05;

/// Axis state for the live chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotView {
    x_min: f64,
    x_max: f64,
}

impl Default for PlotView {
    fn default() -> Self {
        Self {
            x_min: INITIAL_X_RANGE.0,
            x_max: INITIAL_X_RANGE.1,
        }
    }
}

impl PlotView {
    /// Create a plot view at the initial axis ranges
    pub fn new() -> Self {
        Self::default()
    }

    /// Current x-axis bounds as `(min, max)`
    pub fn x_bounds(&self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }

    /// Slide the x window if the newest timestamp passed its right edge.
    /// Bounds persist between calls otherwise.
    pub fn advance(&mut self, latest_time_s: f64) {
        if latest_time_s > self.x_max {
            self.x_min = latest_time_s - X_WINDOW_SECS;
            self.x_max = latest_time_s + X_LOOKAHEAD_SECS;
        }
    }

    /// y bounds fitting every plotted value of both series, with a small
    /// margin. Falls back to the initial range while the store is empty.
    pub fn y_bounds(store: &SampleStore) -> (f64, f64) {
        if store.is_empty() {
            return INITIAL_Y_RANGE;
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for sample in store.samples() {
            min = min.min(sample.angle_deg).min(sample.pid_output);
            max = max.max(sample.angle_deg).max(sample.pid_output);
        }

        let margin = if max > min {
            (max - min) * Y_MARGIN_FRACTION
        } else {
            // Flat data so far; give the line some room.
            0.5
        };
        (min - margin, max + margin)
    }

    /// Render the chart into `ui` from the full accumulated store
    pub fn render(&mut self, ui: &mut Ui, store: &SampleStore) {
        if let Some(last) = store.last() {
            self.advance(last.time_s);
        }
        let (y_min, y_max) = Self::y_bounds(store);
        let (x_min, x_max) = self.x_bounds();

        let plot = Plot::new("pendulum_plot")
            .legend(
                Legend::default()
                    .position(Corner::RightTop)
                    .background_alpha(0.8),
            )
            .x_axis_label("Waktu (detik)")
            .y_axis_label("Nilai")
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .auto_bounds([false, false]);

        plot.show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [x_min, y_min],
                [x_max, y_max],
            ));

            plot_ui.line(
                Line::new("Sudut Pendulum (°)", PlotPoints::from(store.angle_points()))
                    .color(Color32::RED)
                    .width(1.5),
            );
            plot_ui.line(
                Line::new("Output PID", PlotPoints::from(store.pid_points()))
                    .color(Color32::BLUE)
                    .width(1.5),
            );
        });
    }
}
