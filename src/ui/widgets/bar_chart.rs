use crate::engines::BarChart;
use crate::ui::widgets::{axis_label, NoData};
use egui_plot::{Bar, BarChart as PlotBarChart, Plot};

pub struct BarChartWidget;

impl BarChartWidget {
    pub fn show(ui: &mut egui::Ui, id: &str, chart: &BarChart) {
        if chart.is_empty() {
            NoData::show(ui);
            return;
        }

        let ticks: Vec<(f64, String)> = chart
            .bars
            .iter()
            .enumerate()
            .map(|(i, (name, _))| (i as f64, name.clone()))
            .collect();
        let bars: Vec<Bar> = chart
            .bars
            .iter()
            .enumerate()
            .map(|(i, (name, value))| Bar::new(i as f64, *value).name(name).width(0.6))
            .collect();

        Plot::new(id)
            .height(260.0)
            .allow_scroll(false)
            .x_axis_formatter(move |mark, _range| axis_label(&ticks, mark.value))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(PlotBarChart::new(chart.title.clone(), bars));
            });
    }
}
