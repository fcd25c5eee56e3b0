use egui_plot::{Legend, Line, Plot, PlotPoints};
use pogo_sim::HistoryBuffer;

/// Time-series curves of the current run.
pub struct PlotView {
    show_position: bool,
    show_velocity: bool,
    show_acceleration: bool,
}

impl Default for PlotView {
    fn default() -> Self {
        Self {
            show_position: true,
            show_velocity: true,
            show_acceleration: true,
        }
    }
}

impl PlotView {
    pub fn show(&mut self, ui: &mut egui::Ui, history: &HistoryBuffer) {
        ui.heading("Vehicle Dynamics");
        ui.separator();

        ui.horizontal(|ui| {
            ui.checkbox(&mut self.show_position, "Position");
            ui.checkbox(&mut self.show_velocity, "Velocity");
            ui.checkbox(&mut self.show_acceleration, "Acceleration");
        });

        ui.separator();

        if history.is_empty() {
            ui.label("No frames yet - the curves fill in as the simulation runs");
            return;
        }

        let mut lines = Vec::new();
        if self.show_position {
            lines.push(
                Line::new(series(&history.time_s, &history.position_m)).name("Position (m)"),
            );
        }
        if self.show_velocity {
            lines.push(
                Line::new(series(&history.time_s, &history.velocity_mps)).name("Velocity (m/s)"),
            );
        }
        if self.show_acceleration {
            lines.push(
                Line::new(series(&history.time_s, &history.accel_mps2))
                    .name("Acceleration (m/s²)"),
            );
        }

        Plot::new("dynamics_plot")
            .legend(Legend::default())
            .x_axis_label("Time (s)")
            .show(ui, |plot_ui| {
                for line in lines {
                    plot_ui.line(line);
                }
            });
    }
}

fn series(time: &[f64], values: &[f64]) -> PlotPoints {
    let points: Vec<[f64; 2]> = time.iter().zip(values).map(|(t, v)| [*t, *v]).collect();
    points.into()
}
