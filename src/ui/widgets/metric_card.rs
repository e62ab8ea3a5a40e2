pub struct MetricCard;

impl MetricCard {
    pub fn show(ui: &mut egui::Ui, title: &str, value: &str) {
        ui.group(|ui| {
            ui.set_min_width(180.0);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(title).small().weak());
                ui.label(egui::RichText::new(value).heading().strong());
            });
        });
    }
}
