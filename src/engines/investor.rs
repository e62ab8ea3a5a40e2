// src/engines/investor.rs
use crate::config::DisplayConfig;
use crate::data::Dataset;
use crate::engines::aggregate::{category, sum_by, top_n, total_amount};
use crate::engines::figures::{BarChart, LineChart, PieChart};
use crate::types::FundingRecord;

/// One investor's portfolio, drawn from every row whose investor field
/// contains the name.
#[derive(Debug, Clone, PartialEq)]
pub struct InvestorReport {
    pub investor: String,
    pub matched_rows: usize,
    pub total_invested: f64,
    /// First rows of the subset in table order.
    pub recent: Vec<FundingRecord>,
    pub biggest: BarChart,
    pub verticals: PieChart,
    pub stages: PieChart,
    pub cities: PieChart,
    pub yoy: LineChart,
}

impl InvestorReport {
    pub fn compute(dataset: &Dataset, investor: &str, display: &DisplayConfig) -> Self {
        let subset = if investor.trim().is_empty() {
            Vec::new()
        } else {
            dataset.investor_subset(investor)
        };

        if subset.is_empty() {
            log::warn!("No funding rows mention investor '{}'", investor);
        } else {
            log::info!("Investor '{}' matched {} rows", investor, subset.len());
        }

        Self::from_subset(investor, &subset, display)
    }

    fn from_subset(investor: &str, subset: &[&FundingRecord], display: &DisplayConfig) -> Self {
        let rows = || subset.iter().copied();

        let biggest = top_n(sum_by(rows(), |r| r.startup.clone()), display.biggest_investments);
        let yoy = sum_by(rows(), |r| r.year())
            .into_iter()
            .map(|(year, total)| (year as f64, total));

        Self {
            investor: investor.to_string(),
            matched_rows: subset.len(),
            total_invested: total_amount(rows()),
            recent: rows().take(display.recent_investments).cloned().collect(),
            biggest: BarChart::new("Biggest Investments", biggest),
            verticals: PieChart::new("Investment Verticals", sum_by(rows(), |r| category(&r.vertical))),
            stages: PieChart::new("Investment Stage", sum_by(rows(), |r| category(&r.round))),
            cities: PieChart::new("Investment City", sum_by(rows(), |r| category(&r.city))),
            yoy: LineChart::numeric("YoY Investment", yoy),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matched_rows == 0
    }
}
