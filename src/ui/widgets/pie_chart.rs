use crate::engines::PieChart;
use crate::ui::widgets::NoData;
use egui::{Align2, Color32, FontId, Pos2, Sense, Shape, Stroke};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Slice colours, cycled when there are more slices than entries.
const PALETTE: [Color32; 10] = [
    Color32::from_rgb(31, 119, 180),
    Color32::from_rgb(255, 127, 14),
    Color32::from_rgb(44, 160, 44),
    Color32::from_rgb(214, 39, 40),
    Color32::from_rgb(148, 103, 189),
    Color32::from_rgb(140, 86, 75),
    Color32::from_rgb(227, 119, 194),
    Color32::from_rgb(127, 127, 127),
    Color32::from_rgb(188, 189, 34),
    Color32::from_rgb(23, 190, 207),
];

/// Segments per full turn when tessellating wedges.
const SEGMENTS: f32 = 96.0;

/// Slices below this share get no label inside the pie.
const MIN_LABEL_SHARE: f64 = 3.0;

pub struct PieChartWidget;

impl PieChartWidget {
    pub fn show(ui: &mut egui::Ui, chart: &PieChart) {
        if chart.is_empty() {
            NoData::show(ui);
            return;
        }

        let size = ui.available_width().clamp(120.0, 280.0);
        let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let radius = size * 0.45;
        let edge = Stroke::new(1.0, ui.visuals().panel_fill);

        let mut start = -FRAC_PI_2;
        let mut wedges = Vec::with_capacity(chart.slices.len());
        for (i, slice) in chart.slices.iter().enumerate() {
            if slice.share <= 0.0 {
                continue;
            }
            let sweep = (slice.share / 100.0) as f32 * TAU;
            let color = PALETTE[i % PALETTE.len()];

            // Triangle fan: every piece stays convex whatever the sweep.
            let steps = ((sweep / TAU) * SEGMENTS).ceil().max(1.0) as usize;
            for s in 0..steps {
                let a0 = start + sweep * s as f32 / steps as f32;
                let a1 = start + sweep * (s + 1) as f32 / steps as f32;
                painter.add(Shape::convex_polygon(
                    vec![center, point_at(center, radius, a0), point_at(center, radius, a1)],
                    color,
                    Stroke::NONE,
                ));
            }
            painter.line_segment([center, point_at(center, radius, start)], edge);

            if slice.share >= MIN_LABEL_SHARE {
                let mid = start + sweep / 2.0;
                painter.text(
                    point_at(center, radius * 0.65, mid),
                    Align2::CENTER_CENTER,
                    slice.percent_label(),
                    FontId::proportional(11.0),
                    Color32::WHITE,
                );
            }

            wedges.push((start, start + sweep, i));
            start += sweep;
        }

        if let Some(pos) = response.hover_pos() {
            let offset = pos - center;
            if offset.length() <= radius {
                // Angles measured the same way the wedges were laid out.
                let mut angle = offset.y.atan2(offset.x);
                if angle < -FRAC_PI_2 {
                    angle += TAU;
                }
                if let Some(&(_, _, i)) = wedges.iter().find(|(a0, a1, _)| angle >= *a0 && angle < *a1) {
                    let slice = &chart.slices[i];
                    response.on_hover_text(format!(
                        "{}: {:.2} ({})",
                        slice.label,
                        slice.value,
                        slice.percent_label()
                    ));
                }
            }
        }

        Self::legend(ui, chart);
    }

    fn legend(ui: &mut egui::Ui, chart: &PieChart) {
        ui.horizontal_wrapped(|ui| {
            for (i, slice) in chart.slices.iter().enumerate() {
                let (swatch, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), Sense::hover());
                ui.painter().rect_filled(swatch, 2.0, PALETTE[i % PALETTE.len()]);
                ui.label(format!("{} ({})", slice.label, slice.percent_label()));
            }
        });
    }
}

fn point_at(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    center + radius * egui::vec2(angle.cos(), angle.sin())
}
