use super::panels::{InvestorPanel, OverallPanel, Sidebar, StartupPanel};
use super::state::{AppState, View};

pub struct DashboardApp {
    state: AppState,
    sidebar: Sidebar,
    overall_panel: OverallPanel,
    startup_panel: StartupPanel,
    investor_panel: InvestorPanel,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        Self {
            state,
            sidebar: Sidebar::new(),
            overall_panel: OverallPanel::new(),
            startup_panel: StartupPanel::new(),
            investor_panel: InvestorPanel::new(),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(&self.state.status_message);
        });

        // Sidebar - navigation and pickers
        egui::SidePanel::left("sidebar")
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.sidebar.show(ui, &mut self.state);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.state.view {
                View::Overall => self.overall_panel.show(ui, &mut self.state),
                View::Startup => self.startup_panel.show(ui, &self.state),
                View::Investor => self.investor_panel.show(ui, &self.state),
            });
        });
    }
}
