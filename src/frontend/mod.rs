//! Frontend: the eframe application shell
//!
//! One fixed window with the live chart and a status line. Each `update`
//! performs one session tick before rendering, and schedules the next
//! repaint at the tick interval, which makes the repaint loop the periodic
//! handler driving data acquisition. Closing the window runs the export and
//! releases the serial connection via [`MonitorSession::close`].

pub mod plot;

pub use plot::PlotView;

use crate::config::TICK_INTERVAL;
use crate::serial::LineSource;
use crate::session::{MonitorSession, SessionState};

/// The main application
pub struct MonitorApp<S: LineSource> {
    session: MonitorSession<S>,
    plot: PlotView,
}

impl<S: LineSource> MonitorApp<S> {
    /// Create the app and start the session ticking
    pub fn new(cc: &eframe::CreationContext<'_>, mut session: MonitorSession<S>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        session.start();

        Self {
            session,
            plot: PlotView::new(),
        }
    }

    fn render_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 8.0;

            let (dot_color, status) = match self.session.state() {
                SessionState::Running => (egui::Color32::GREEN, "Running"),
                SessionState::Idle => (egui::Color32::YELLOW, "Idle"),
                SessionState::Closed => (egui::Color32::GRAY, "Closed"),
            };
            ui.colored_label(dot_color, "●");
            ui.label(status);

            ui.separator();
            ui.label(format!("{} samples", self.session.store().len()));

            if let Some(last) = self.session.store().last() {
                ui.separator();
                ui.label(format!(
                    "Waktu: {:.2} s  Sudut: {:.2}°  PID: {:.2}",
                    last.time_s, last.angle_deg, last.pid_output
                ));
            }
        });
    }
}

impl<S: LineSource + 'static> eframe::App for MonitorApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // One read-parse-append cycle per repaint.
        self.session.tick();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Monitoring Rotary Pendulum Real-Time");
            self.plot.render(ui, self.session.store());
        });

        ctx.request_repaint_after(TICK_INTERVAL);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Export then release the connection; failures are logged inside.
        let _ = self.session.close();
    }
}
