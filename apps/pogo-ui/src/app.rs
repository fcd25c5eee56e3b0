use std::path::PathBuf;
use std::time::Duration;

use crate::views::{AnimationView, PlotView};
use pogo_app::{RunOptions, RunRequest};
use pogo_sim::{Frame, SimulationController};

pub struct PogosimApp {
    // The controller owns all simulation state; the UI only reads
    // parameters, the latest frame and the history.
    controller: SimulationController,
    running: bool,
    param_text: String,
    status: Option<String>,
    error: Option<String>,
    latest_frame: Option<Frame>,
    animation_view: AnimationView,
    plot_view: PlotView,
    run_dir: PathBuf,
}

impl PogosimApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let controller = SimulationController::default();
        let param_text = controller.params().wire_string();

        Self {
            controller,
            running: true,
            param_text,
            status: None,
            error: None,
            latest_frame: None,
            animation_view: AnimationView::default(),
            plot_view: PlotView::default(),
            run_dir: std::env::temp_dir().join("pogosim"),
        }
    }

    fn apply_parameters(&mut self) {
        match self.controller.set_parameters(&self.param_text) {
            Ok(()) => {
                self.error = None;
                self.latest_frame = None;
                self.status = Some("Parameters applied, simulation reset".to_string());
                self.running = true;
            }
            Err(e) => {
                // Nothing was applied; the running state is untouched
                self.error = Some(e.to_string());
            }
        }
    }

    fn restart(&mut self) {
        self.controller.reset_state();
        self.latest_frame = None;
        self.error = None;
        self.status = Some("Simulation reset".to_string());
        self.running = true;
    }

    fn save_run(&mut self) {
        let request = RunRequest {
            base_dir: &self.run_dir,
            params: *self.controller.params(),
            options: RunOptions::default(),
        };
        match pogo_app::ensure_run(&request) {
            Ok(response) => {
                let source = if response.loaded_from_cache {
                    "cached"
                } else {
                    "saved"
                };
                self.status = Some(format!("Run {} ({})", response.run_id, source));
                self.error = None;
            }
            Err(e) => self.error = Some(format!("Save failed: {}", e)),
        }
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Parameters (key=value, ...):");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.param_text).desired_width(420.0),
            );
            let committed =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Apply").clicked() || committed {
                self.apply_parameters();
            }
            if ui.button("Reset").clicked() {
                self.restart();
            }
            let pause_label = if self.running { "Pause" } else { "Resume" };
            if ui.button(pause_label).clicked() {
                self.running = !self.running;
            }
            if ui.button("Save Run").clicked() {
                self.save_run();
            }
        });

        ui.horizontal(|ui| {
            if let Some(error) = &self.error {
                ui.colored_label(egui::Color32::RED, error);
            } else if let Some(status) = &self.status {
                ui.label(status.as_str());
            }
            if let Some(frame) = &self.latest_frame {
                ui.separator();
                ui.monospace(format!(
                    "t = {:6.2} s   x = {:6.3} m   v = {:6.3} m/s   a = {:6.3} m/s²",
                    frame.time_s, frame.position_m, frame.velocity_mps, frame.accel_mps2
                ));
            }
        });
    }
}

impl eframe::App for PogosimApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // One tick per repaint while running; the repaint cadence is the
        // frame clock, the controller never ticks itself.
        if self.running && self.controller.has_ticks_remaining() {
            let frame = self.controller.step();
            if frame.out_of_range {
                self.status = Some(format!(
                    "Reflection overshoot at t = {:.2} s, position {:.2} m",
                    frame.time_s, frame.position_m
                ));
            }
            self.latest_frame = Some(frame);
            ctx.request_repaint_after(Duration::from_secs_f64(self.controller.params().dt_s));
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.show_controls(ui);
        });

        egui::SidePanel::right("plots")
            .default_width(460.0)
            .show(ctx, |ui| {
                self.plot_view.show(ui, self.controller.history());
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.animation_view
                .show(ui, self.controller.params(), self.controller.state());
        });
    }
}
