use crate::engines::figures::format_amount;
use crate::types::{MomMode, SectorMode};
use crate::ui::state::AppState;
use crate::ui::widgets::{LineChartWidget, MetricCard, PieChartWidget, RankingTable};

pub struct OverallPanel;

impl OverallPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.heading("Overall Analysis");
        ui.separator();

        let display = state.display().clone();
        let report = state.overall_report().clone();
        let mut mom_mode = state.mom_mode;
        let mut sector_mode = state.sector_mode;

        let metrics = &report.metrics;
        ui.columns(4, |cols| {
            MetricCard::show(
                &mut cols[0],
                "Total Investment",
                &display.money(format_amount(metrics.total_investment)),
            );
            let max = metrics
                .max_investment
                .as_ref()
                .map(|(_, amount)| display.money(format_amount(*amount)))
                .unwrap_or_else(|| "—".to_string());
            MetricCard::show(&mut cols[1], "Maximum Investment", &max);
            if let Some((startup, _)) = &metrics.max_investment {
                cols[1].weak(startup);
            }
            let avg = metrics
                .average_funding
                .map(|amount| display.money(format_amount(amount)))
                .unwrap_or_else(|| "—".to_string());
            MetricCard::show(&mut cols[2], "Average Funding", &avg);
            MetricCard::show(
                &mut cols[3],
                "Total Funded Startups",
                &metrics.funded_startups.to_string(),
            );
        });

        ui.add_space(12.0);

        ui.columns(2, |cols| {
            cols[0].heading("MoM Investment");
            egui::ComboBox::from_id_salt("mom_mode")
                .selected_text(mom_mode.label())
                .show_ui(&mut cols[0], |ui| {
                    for mode in MomMode::all() {
                        ui.selectable_value(&mut mom_mode, mode, mode.label());
                    }
                });
            LineChartWidget::show(&mut cols[0], "mom_chart", &report.mom);

            cols[1].heading("Top Sector / Investment Vertical");
            egui::ComboBox::from_id_salt("sector_mode")
                .selected_text(sector_mode.label())
                .show_ui(&mut cols[1], |ui| {
                    for mode in SectorMode::all() {
                        ui.selectable_value(&mut sector_mode, mode, mode.label());
                    }
                });
            PieChartWidget::show(&mut cols[1], &report.sectors);
        });

        ui.add_space(12.0);

        ui.columns(2, |cols| {
            cols[0].heading("Round of Funding");
            PieChartWidget::show(&mut cols[0], &report.rounds);

            cols[1].heading("City of Funding");
            PieChartWidget::show(&mut cols[1], &report.cities);
        });

        ui.add_space(12.0);

        ui.columns(2, |cols| {
            cols[0].heading("Top Startups");
            RankingTable::show(&mut cols[0], "top_startups", &report.top_startups, &display);

            cols[1].heading("Top Investors");
            RankingTable::show(&mut cols[1], "top_investors", &report.top_investors, &display);
        });

        if mom_mode != state.mom_mode || sector_mode != state.sector_mode {
            state.set_mom_mode(mom_mode);
            state.set_sector_mode(sector_mode);
            ui.ctx().request_repaint();
        }
    }
}
