// src/engines/figures.rs
//! Chart and table values handed to the UI. Each one knows when it has
//! nothing to show so widgets can render a placeholder instead.

use serde::{Deserialize, Serialize};

/// Amount formatting shared by metric cards and tables.
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Share of the pie total, in percent.
    pub share: f64,
}

impl PieSlice {
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.share)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn new<I>(title: impl Into<String>, groups: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let groups: Vec<(String, f64)> = groups.into_iter().collect();
        let total: f64 = groups.iter().map(|(_, v)| v).sum();
        let slices = groups
            .into_iter()
            .map(|(label, value)| PieSlice {
                label,
                value,
                share: if total > 0.0 { value / total * 100.0 } else { 0.0 },
            })
            .collect();

        Self {
            title: title.into(),
            slices,
        }
    }

    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// Not drawable: no positive total to divide up, or a negative wedge.
    pub fn is_empty(&self) -> bool {
        // NaN totals count as empty too
        self.total().partial_cmp(&0.0) != Some(std::cmp::Ordering::Greater)
            || self.slices.iter().any(|s| s.value < 0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub title: String,
    pub points: Vec<LinePoint>,
}

impl LineChart {
    /// Points placed at 0, 1, 2, … and labelled with their category.
    pub fn categorical<I>(title: impl Into<String>, points: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let points = points
            .into_iter()
            .enumerate()
            .map(|(i, (label, y))| LinePoint {
                label,
                x: i as f64,
                y,
            })
            .collect();
        Self {
            title: title.into(),
            points,
        }
    }

    /// Points placed at their numeric key (e.g. a year).
    pub fn numeric<I>(title: impl Into<String>, points: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let points = points
            .into_iter()
            .map(|(x, y)| LinePoint {
                label: format!("{}", x),
                x,
                y,
            })
            .collect();
        Self {
            title: title.into(),
            points,
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub bars: Vec<(String, f64)>,
}

impl BarChart {
    pub fn new(title: impl Into<String>, bars: Vec<(String, f64)>) -> Self {
        Self {
            title: title.into(),
            bars,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// A two-column "name / amount" table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub title: String,
    pub key_header: String,
    pub rows: Vec<(String, f64)>,
}

impl Ranking {
    pub fn new(title: impl Into<String>, key_header: impl Into<String>, rows: Vec<(String, f64)>) -> Self {
        Self {
            title: title.into(),
            key_header: key_header.into(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pie_shares() {
        let pie = PieChart::new(
            "Rounds",
            vec![("Seed".to_string(), 1.0), ("Series A".to_string(), 2.0)],
        );
        assert_eq!(pie.slices[0].percent_label(), "33.3%");
        assert_eq!(pie.slices[1].percent_label(), "66.7%");
        assert!(!pie.is_empty());
    }

    #[test]
    fn test_pie_without_positive_total_is_empty() {
        assert!(PieChart::new("Empty", Vec::new()).is_empty());
        let zeros = PieChart::new("Zero", vec![("Pune".to_string(), 0.0)]);
        assert!(zeros.is_empty());
        assert_eq!(zeros.slices[0].share, 0.0);
    }

    #[test]
    fn test_pie_with_negative_slice_is_empty() {
        let pie = PieChart::new(
            "Cities",
            vec![("A".to_string(), 10.0), ("B".to_string(), -5.0)],
        );
        assert!(pie.total() > 0.0);
        assert!(pie.is_empty());
    }

    #[test]
    fn test_categorical_line_positions() {
        let line = LineChart::categorical(
            "MoM",
            vec![("2019-1".to_string(), 3.0), ("2019-2".to_string(), 4.0)],
        );
        assert_eq!(line.points[1].x, 1.0);
        assert_eq!(line.labels(), vec!["2019-1", "2019-2"]);
    }

    #[test]
    fn test_numeric_line_labels() {
        let line = LineChart::numeric("YoY", vec![(2018.0, 1.0), (2020.0, 2.5)]);
        assert_eq!(line.labels(), vec!["2018", "2020"]);
        assert_eq!(line.values(), vec![1.0, 2.5]);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(35.0), "35");
        assert_eq!(format_amount(12.346), "12.35");
    }
}
