pub mod investor_panel;
pub mod overall_panel;
pub mod sidebar;
pub mod startup_panel;

pub use investor_panel::InvestorPanel;
pub use overall_panel::OverallPanel;
pub use sidebar::Sidebar;
pub use startup_panel::StartupPanel;
