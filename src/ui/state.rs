use crate::config::{AppConfig, DisplayConfig};
use crate::data::{Dataset, DatasetMetadata};
use crate::engines::{InvestorReport, OverallAnalysis, OverallReport};
use crate::types::{MomMode, SectorMode};

/// The three screens reachable from the sidebar selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Overall,
    Startup,
    Investor,
}

impl View {
    pub fn all() -> [Self; 3] {
        [Self::Overall, Self::Startup, Self::Investor]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Overall => "Overall Analysis",
            Self::Startup => "Startup Analysis",
            Self::Investor => "Investor Analysis",
        }
    }
}

/// Central application state for the UI
pub struct AppState {
    pub config: AppConfig,

    // Data
    pub dataset: Dataset,
    pub metadata: DatasetMetadata,
    pub startups: Vec<String>,
    pub investors: Vec<String>,

    // Navigation
    pub view: View,

    // Overall Analysis
    pub mom_mode: MomMode,
    pub sector_mode: SectorMode,
    pub overall: Option<OverallReport>,

    // Investor Analysis
    pub investor_filter: String,
    pub selected_investor: Option<String>,
    pub investor_report: Option<InvestorReport>,

    // Startup Analysis
    pub selected_startup: Option<String>,
    pub startup_requested: bool,

    pub status_message: String,
}

impl AppState {
    pub fn new(config: AppConfig, dataset: Dataset, metadata: DatasetMetadata) -> Self {
        let mut state = Self {
            config,
            startups: Vec::new(),
            investors: Vec::new(),
            dataset,
            metadata,
            view: View::default(),
            mom_mode: MomMode::default(),
            sector_mode: SectorMode::default(),
            overall: None,
            investor_filter: String::new(),
            selected_investor: None,
            investor_report: None,
            selected_startup: None,
            startup_requested: false,
            status_message: String::new(),
        };
        state.reset_for_dataset();
        state
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.config.display
    }

    /// Swap in a freshly loaded table and drop everything derived from the old one.
    pub fn replace_dataset(&mut self, dataset: Dataset, metadata: DatasetMetadata) {
        self.dataset = dataset;
        self.metadata = metadata;
        self.reset_for_dataset();
    }

    fn reset_for_dataset(&mut self) {
        self.startups = self.dataset.startups();
        self.investors = self.dataset.investors();
        self.overall = None;
        self.investor_filter.clear();
        self.selected_investor = self.investors.first().cloned();
        self.investor_report = None;
        self.selected_startup = self.startups.first().cloned();
        self.startup_requested = false;
        self.status_message = format!(
            "Loaded {} funding rows from {}",
            self.dataset.len(),
            self.dataset.source().display()
        );
        log::info!("{}", self.status_message);
    }

    pub fn select_view(&mut self, view: View) {
        if self.view != view {
            log::debug!("Switching to {}", view.label());
            self.view = view;
            // Views only show what their own trigger produced.
            self.overall = None;
            self.investor_report = None;
            self.startup_requested = false;
        }
    }

    pub fn set_mom_mode(&mut self, mode: MomMode) {
        if self.mom_mode != mode {
            self.mom_mode = mode;
            self.overall = None;
        }
    }

    pub fn set_sector_mode(&mut self, mode: SectorMode) {
        if self.sector_mode != mode {
            self.sector_mode = mode;
            self.overall = None;
        }
    }

    /// The overall report for the current selectors, computed on demand.
    pub fn overall_report(&mut self) -> &OverallReport {
        let (dataset, display) = (&self.dataset, &self.config.display);
        let (mom_mode, sector_mode) = (self.mom_mode, self.sector_mode);
        self.overall
            .get_or_insert_with(|| OverallAnalysis::compute(dataset, mom_mode, sector_mode, display))
    }

    /// Changing the picked investor clears the old report without
    /// computing a new one.
    pub fn select_investor(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.selected_investor.as_deref() != Some(name.as_str()) {
            self.investor_report = None;
        }
        self.selected_investor = Some(name);
    }

    /// Investors whose name contains the filter text, case-insensitively.
    pub fn filtered_investors(&self) -> Vec<&str> {
        let needle = self.investor_filter.trim().to_lowercase();
        self.investors
            .iter()
            .map(String::as_str)
            .filter(|name| needle.is_empty() || name.to_lowercase().contains(&needle))
            .collect()
    }

    /// The "Find Investor Details" trigger.
    pub fn request_investor_details(&mut self) {
        match &self.selected_investor {
            Some(name) => {
                let report = InvestorReport::compute(&self.dataset, name, &self.config.display);
                self.status_message = format!("{}: {} matching rows", name, report.matched_rows);
                self.investor_report = Some(report);
            }
            None => {
                self.status_message = "Select an investor first".to_string();
            }
        }
    }

    pub fn select_startup(&mut self, name: impl Into<String>) {
        self.selected_startup = Some(name.into());
        self.startup_requested = false;
    }

    /// The "Find Startup Details" trigger. Startup analytics are not
    /// implemented, so this only flags that the notice should be shown.
    pub fn request_startup_details(&mut self) {
        self.startup_requested = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FundingRecord;

    fn state() -> AppState {
        let rows = vec![
            FundingRecord {
                date: None,
                startup: Some("Ola".to_string()),
                vertical: None,
                city: None,
                investor: Some("Sequoia, Accel".to_string()),
                round: None,
                amount: Some(10.0),
            },
            FundingRecord {
                date: None,
                startup: Some("Byju".to_string()),
                vertical: None,
                city: None,
                investor: Some("Tiger Global".to_string()),
                round: None,
                amount: Some(5.0),
            },
        ];
        let dataset = Dataset::new(rows, "test.csv");
        let metadata = DatasetMetadata {
            file_path: "test.csv".to_string(),
            num_rows: 2,
            num_columns: 7,
            columns: Vec::new(),
            date_range: None,
            unparsed_dates: 0,
            unparsed_amounts: 0,
            null_counts: Vec::new(),
        };
        AppState::new(AppConfig::default(), dataset, metadata)
    }

    #[test]
    fn test_initial_selection() {
        let s = state();
        assert_eq!(s.view, View::Overall);
        assert_eq!(s.investors, vec!["Accel", "Sequoia", "Tiger Global"]);
        assert_eq!(s.selected_investor.as_deref(), Some("Accel"));
        assert_eq!(s.selected_startup.as_deref(), Some("Byju"));
    }

    #[test]
    fn test_investor_view_is_lazy() {
        let mut s = state();
        s.select_view(View::Investor);
        s.select_investor("Tiger Global");
        assert!(s.investor_report.is_none());

        s.request_investor_details();
        let report = s.investor_report.as_ref().unwrap();
        assert_eq!(report.investor, "Tiger Global");
        assert_eq!(report.matched_rows, 1);

        // Re-picking the same name keeps the report; a new pick clears it
        // and waits for the trigger.
        s.select_investor("Tiger Global");
        assert!(s.investor_report.is_some());
        s.select_investor("Sequoia");
        assert!(s.investor_report.is_none());
    }

    #[test]
    fn test_leaving_investor_view_clears_report() {
        let mut s = state();
        s.select_view(View::Investor);
        s.request_investor_details();
        assert!(s.investor_report.is_some());

        s.select_view(View::Overall);
        s.select_view(View::Investor);
        assert!(s.investor_report.is_none());
    }

    #[test]
    fn test_mode_change_recomputes_overall() {
        let mut s = state();
        assert_eq!(s.overall_report().mom.title, "MoM Investment (Total)");
        s.set_mom_mode(MomMode::Count);
        assert!(s.overall.is_none());
        assert_eq!(s.overall_report().mom.title, "MoM Investment (Count)");
    }

    #[test]
    fn test_startup_trigger_computes_nothing() {
        let mut s = state();
        s.select_view(View::Startup);
        s.request_startup_details();
        assert!(s.startup_requested);
        assert!(s.investor_report.is_none());
        s.select_startup("Ola");
        assert!(!s.startup_requested);
    }

    #[test]
    fn test_filtered_investors() {
        let mut s = state();
        s.investor_filter = "glo".to_string();
        assert_eq!(s.filtered_investors(), vec!["Tiger Global"]);
    }
}
