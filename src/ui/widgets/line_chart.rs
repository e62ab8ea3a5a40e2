use crate::engines::LineChart;
use crate::ui::widgets::{axis_label, NoData};
use egui_plot::{Line, Plot, PlotPoints};

pub struct LineChartWidget;

impl LineChartWidget {
    pub fn show(ui: &mut egui::Ui, id: &str, chart: &LineChart) {
        if chart.is_empty() {
            NoData::show(ui);
            return;
        }

        let ticks: Vec<(f64, String)> = chart.points.iter().map(|p| (p.x, p.label.clone())).collect();
        let points: PlotPoints<'_> = chart.points.iter().map(|p| [p.x, p.y]).collect();

        Plot::new(id)
            .height(260.0)
            .allow_scroll(false)
            .x_axis_formatter(move |mark, _range| axis_label(&ticks, mark.value))
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(chart.title.clone(), points));
            });
    }
}
