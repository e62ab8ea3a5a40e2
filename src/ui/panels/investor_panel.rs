use crate::engines::figures::format_amount;
use crate::ui::state::AppState;
use crate::ui::widgets::{BarChartWidget, LineChartWidget, PieChartWidget, RecordTable};

pub struct InvestorPanel;

impl InvestorPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &AppState) {
        let Some(report) = &state.investor_report else {
            ui.heading("Investor Analysis");
            ui.separator();
            ui.centered_and_justified(|ui| {
                ui.label("Pick an investor in the sidebar and click 'Find Investor Details'.");
            });
            return;
        };
        let display = state.display();

        ui.heading(&report.investor);
        if report.is_empty() {
            ui.colored_label(egui::Color32::YELLOW, "No investments found for this investor.");
        } else {
            ui.label(format!(
                "{} funding rounds, {} in total",
                report.matched_rows,
                display.money(format_amount(report.total_invested))
            ));
        }
        ui.separator();

        ui.heading("Most Recent Investments");
        RecordTable::show(ui, "recent_investments", &report.recent, display);

        ui.add_space(12.0);

        ui.columns(2, |cols| {
            cols[0].heading("Biggest Investments");
            BarChartWidget::show(&mut cols[0], "biggest_investments", &report.biggest);

            cols[1].heading("Investment Verticals");
            PieChartWidget::show(&mut cols[1], &report.verticals);
        });

        ui.add_space(12.0);

        ui.columns(2, |cols| {
            cols[0].heading("Investment Stage");
            PieChartWidget::show(&mut cols[0], &report.stages);

            cols[1].heading("Investment City");
            PieChartWidget::show(&mut cols[1], &report.cities);
        });

        ui.add_space(12.0);

        ui.columns(2, |cols| {
            cols[0].heading("YoY Investment");
            LineChartWidget::show(&mut cols[0], "yoy_investment", &report.yoy);
        });
    }
}
