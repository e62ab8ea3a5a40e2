// src/engines/overall.rs
use crate::config::DisplayConfig;
use crate::data::Dataset;
use crate::engines::aggregate::{category, count_by, distinct, round_amount, sum_by, top_n, total_amount};
use crate::engines::figures::{LineChart, PieChart, Ranking};
use crate::types::{FundingRecord, MomMode, SectorMode};

/// Headline numbers across the whole table.
#[derive(Debug, Clone, PartialEq)]
pub struct OverallMetrics {
    /// Sum of every amount, rounded.
    pub total_investment: f64,
    /// Startup with the largest summed amount.
    pub max_investment: Option<(String, f64)>,
    /// Mean of per-startup totals, rounded.
    pub average_funding: Option<f64>,
    pub funded_startups: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverallReport {
    pub metrics: OverallMetrics,
    pub mom: LineChart,
    pub sectors: PieChart,
    pub rounds: PieChart,
    pub cities: PieChart,
    pub top_startups: Ranking,
    pub top_investors: Ranking,
}

pub struct OverallAnalysis;

impl OverallAnalysis {
    pub fn compute(
        dataset: &Dataset,
        mom_mode: MomMode,
        sector_mode: SectorMode,
        display: &DisplayConfig,
    ) -> OverallReport {
        log::debug!(
            "Computing overall analysis over {} rows (MoM: {}, sector: {})",
            dataset.len(),
            mom_mode.label(),
            sector_mode.label()
        );
        let records = dataset.records();

        OverallReport {
            metrics: Self::metrics(records),
            mom: Self::month_over_month(records, mom_mode),
            sectors: Self::sectors(records, sector_mode),
            rounds: Self::rounds(records),
            cities: Self::cities(records),
            top_startups: Self::top_startups(records, display.top_startups),
            top_investors: Self::top_investors(records, display.top_investors),
        }
    }

    pub fn metrics(records: &[FundingRecord]) -> OverallMetrics {
        let per_startup = sum_by(records, |r| r.startup.clone());

        let max_investment = top_n(per_startup.clone(), 1).into_iter().next();
        let average_funding = if per_startup.is_empty() {
            None
        } else {
            let mean = per_startup.values().sum::<f64>() / per_startup.len() as f64;
            Some(round_amount(mean))
        };

        OverallMetrics {
            total_investment: round_amount(total_amount(records)),
            max_investment,
            average_funding,
            funded_startups: distinct(records, |r| r.startup.as_deref()),
        }
    }

    /// Chronologically ordered (year, month) series labelled `YYYY-M`.
    /// Rows without a parsed date are left out.
    pub fn month_over_month(records: &[FundingRecord], mode: MomMode) -> LineChart {
        let key = |r: &FundingRecord| r.year().zip(r.month());
        let points: Vec<((i32, u32), f64)> = match mode {
            MomMode::Total => sum_by(records, key).into_iter().collect(),
            MomMode::Count => count_by(records, key, |r| r.amount.is_some())
                .into_iter()
                .map(|(k, n)| (k, n as f64))
                .collect(),
        };

        LineChart::categorical(
            format!("MoM Investment ({})", mode.label()),
            points
                .into_iter()
                .map(|((year, month), y)| (format!("{}-{}", year, month), y)),
        )
    }

    pub fn sectors(records: &[FundingRecord], mode: SectorMode) -> PieChart {
        let groups: Vec<(String, f64)> = match mode {
            SectorMode::Count => count_by(records, |r| category(&r.vertical), |r| r.investor.is_some())
                .into_iter()
                .map(|(k, n)| (k, n as f64))
                .collect(),
            SectorMode::Total => sum_by(records, |r| category(&r.vertical)).into_iter().collect(),
        };
        PieChart::new("Top Sector / Investment Vertical", groups)
    }

    pub fn rounds(records: &[FundingRecord]) -> PieChart {
        let groups = count_by(records, |r| category(&r.round), |r| r.investor.is_some())
            .into_iter()
            .map(|(k, n)| (k, n as f64));
        PieChart::new("Round of Funding", groups)
    }

    pub fn cities(records: &[FundingRecord]) -> PieChart {
        let groups = sum_by(records, |r| category(&r.city))
            .into_iter()
            .map(|(k, v)| (k, round_amount(v)));
        PieChart::new("City of Funding", groups)
    }

    pub fn top_startups(records: &[FundingRecord], n: usize) -> Ranking {
        let rows = top_n(sum_by(records, |r| r.startup.clone()), n);
        Ranking::new("Top Startups", "Startup", rows)
    }

    /// Ranked by the raw investor field, so co-investing syndicates are
    /// their own entries.
    pub fn top_investors(records: &[FundingRecord], n: usize) -> Ranking {
        let rows = top_n(sum_by(records, |r| category(&r.investor)), n)
            .into_iter()
            .map(|(k, v)| (k, round_amount(v)))
            .collect();
        Ranking::new("Top Investors", "Investor", rows)
    }
}
