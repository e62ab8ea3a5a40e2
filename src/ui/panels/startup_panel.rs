use crate::ui::state::AppState;

/// Startup drill-down is not built yet; the panel only acknowledges the pick.
pub struct StartupPanel;

impl StartupPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &AppState) {
        ui.heading("Startup Analysis");
        ui.separator();

        if state.startup_requested {
            let name = state.selected_startup.as_deref().unwrap_or("—");
            ui.label(format!("Selected startup: {}", name));
            ui.colored_label(
                egui::Color32::YELLOW,
                "Startup analysis is not implemented yet.",
            );
        } else {
            ui.label("Pick a startup in the sidebar and click 'Find Startup Details'.");
        }
    }
}
