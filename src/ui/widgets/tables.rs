use crate::config::DisplayConfig;
use crate::engines::figures::{format_amount, Ranking};
use crate::types::FundingRecord;
use crate::ui::widgets::NoData;

pub struct RankingTable;

impl RankingTable {
    pub fn show(ui: &mut egui::Ui, id: &str, ranking: &Ranking, display: &DisplayConfig) {
        if ranking.is_empty() {
            NoData::show(ui);
            return;
        }

        egui::Grid::new(id)
            .striped(true)
            .num_columns(3)
            .show(ui, |ui| {
                ui.strong("#");
                ui.strong(&ranking.key_header);
                ui.strong(format!("Amount ({})", display.currency_suffix));
                ui.end_row();

                for (rank, (name, amount)) in ranking.rows.iter().enumerate() {
                    ui.label(format!("{}", rank + 1));
                    ui.label(name);
                    ui.label(format_amount(*amount));
                    ui.end_row();
                }
            });
    }
}

pub struct RecordTable;

impl RecordTable {
    pub fn show(ui: &mut egui::Ui, id: &str, records: &[FundingRecord], display: &DisplayConfig) {
        if records.is_empty() {
            NoData::show(ui);
            return;
        }

        egui::ScrollArea::horizontal().id_salt(id).show(ui, |ui| {
            egui::Grid::new(id)
                .striped(true)
                .num_columns(6)
                .show(ui, |ui| {
                    for header in ["Date", "Startup", "Vertical", "City", "Round"] {
                        ui.strong(header);
                    }
                    ui.strong(format!("Amount ({})", display.currency_suffix));
                    ui.end_row();

                    for record in records {
                        ui.label(
                            record
                                .date
                                .map(|d| d.format("%Y-%m-%d").to_string())
                                .unwrap_or_else(|| "—".to_string()),
                        );
                        for text in [&record.startup, &record.vertical, &record.city, &record.round] {
                            ui.label(text.as_deref().unwrap_or("—"));
                        }
                        ui.label(record.amount.map(format_amount).unwrap_or_else(|| "—".to_string()));
                        ui.end_row();
                    }
                });
        });
    }
}
