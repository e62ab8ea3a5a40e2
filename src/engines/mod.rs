pub mod aggregate;
pub mod figures;
pub mod investor;
pub mod overall;

pub use figures::{BarChart, LineChart, PieChart, PieSlice, Ranking};
pub use investor::InvestorReport;
pub use overall::{OverallAnalysis, OverallMetrics, OverallReport};
