use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke};
use pogo_sim::{ParameterSet, SimState, DISPLAY_HEIGHT_M};

/// Draws the vehicle inside the 10 m travel envelope.
#[derive(Default)]
pub struct AnimationView;

impl AnimationView {
    pub fn show(&mut self, ui: &mut egui::Ui, params: &ParameterSet, state: SimState) {
        ui.heading("Pogo Oscillation");
        ui.separator();

        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let panel = response.rect;

        // Meters to pixels: fit the envelope height into the panel.
        // Screen y grows downward, world height grows upward.
        let margin = 16.0_f32;
        let scale = (panel.height() - 2.0 * margin) / DISPLAY_HEIGHT_M as f32;
        let bottom_y = panel.bottom() - margin;
        let to_screen_y = |height_m: f64| bottom_y - height_m as f32 * scale;

        let body_w = (params.rocket_width_m as f32 * scale).max(4.0);
        let center_x = panel.center().x;

        // Envelope walls and ground line
        let envelope = Rect::from_min_max(
            Pos2::new(center_x - body_w * 1.5, to_screen_y(DISPLAY_HEIGHT_M)),
            Pos2::new(center_x + body_w * 1.5, to_screen_y(0.0)),
        );
        painter.rect_stroke(envelope, 0.0, Stroke::new(1.0, Color32::GRAY));

        // Vehicle body, "Fuel" label centered like the reference rig
        let body = Rect::from_min_max(
            Pos2::new(
                center_x - body_w / 2.0,
                to_screen_y(state.position_m + params.rocket_height_m),
            ),
            Pos2::new(center_x + body_w / 2.0, to_screen_y(state.position_m)),
        );
        painter.rect_filled(body, 2.0, Color32::from_rgb(60, 100, 220));
        painter.text(
            body.center(),
            Align2::CENTER_CENTER,
            "Fuel",
            FontId::proportional(14.0),
            Color32::WHITE,
        );

        // Height ticks every meter
        for meter in 0..=(DISPLAY_HEIGHT_M as usize) {
            let y = to_screen_y(meter as f64);
            painter.line_segment(
                [
                    Pos2::new(envelope.left() - 6.0, y),
                    Pos2::new(envelope.left(), y),
                ],
                Stroke::new(1.0, Color32::DARK_GRAY),
            );
            painter.text(
                Pos2::new(envelope.left() - 10.0, y),
                Align2::RIGHT_CENTER,
                format!("{} m", meter),
                FontId::proportional(10.0),
                Color32::GRAY,
            );
        }
    }
}
