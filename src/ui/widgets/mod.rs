pub mod bar_chart;
pub mod line_chart;
pub mod metric_card;
pub mod picker;
pub mod pie_chart;
pub mod tables;

pub use bar_chart::BarChartWidget;
pub use line_chart::LineChartWidget;
pub use metric_card::MetricCard;
pub use picker::NamePicker;
pub use pie_chart::PieChartWidget;
pub use tables::{RankingTable, RecordTable};

/// Placeholder drawn instead of a chart or table with nothing in it.
pub struct NoData;

impl NoData {
    pub fn show(ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.set_min_height(60.0);
            ui.centered_and_justified(|ui| {
                ui.weak("No data");
            });
        });
    }
}

/// Tick label for a categorical axis: the label of the point sitting on
/// `value`, or nothing between points.
pub(crate) fn axis_label(ticks: &[(f64, String)], value: f64) -> String {
    ticks
        .iter()
        .find(|(x, _)| (x - value).abs() < 1e-9)
        .map(|(_, label)| label.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_label_only_on_points() {
        let ticks = vec![(0.0, "2019-1".to_string()), (1.0, "2019-2".to_string())];
        assert_eq!(axis_label(&ticks, 1.0), "2019-2");
        assert_eq!(axis_label(&ticks, 0.5), "");
        assert_eq!(axis_label(&ticks, 7.0), "");
    }
}
