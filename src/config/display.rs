use super::traits::ConfigSection;
use crate::error::DashboardError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency_suffix: String,
    pub top_startups: usize,
    pub top_investors: usize,
    pub biggest_investments: usize,
    pub recent_investments: usize,
    pub width: f32,
    pub height: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_suffix: "Cr".to_string(),
            top_startups: 5,
            top_investors: 5,
            biggest_investments: 3,
            recent_investments: 5,
            width: 1400.0,
            height: 900.0,
        }
    }
}

impl DisplayConfig {
    /// Format a monetary value with the configured suffix.
    pub fn money(&self, value: impl std::fmt::Display) -> String {
        format!("{} {}", value, self.currency_suffix)
    }
}

impl ConfigSection for DisplayConfig {
    fn section_name() -> &'static str {
        "display"
    }

    fn validate(&self) -> Result<(), DashboardError> {
        let counts = [
            ("top_startups", self.top_startups),
            ("top_investors", self.top_investors),
            ("biggest_investments", self.biggest_investments),
            ("recent_investments", self.recent_investments),
        ];
        for (name, value) in counts {
            if value == 0 {
                return Err(DashboardError::Configuration(format!(
                    "display.{} must be at least 1",
                    name
                )));
            }
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(DashboardError::Configuration(
                "Window width and height must be positive".to_string()
            ));
        }
        Ok(())
    }
}
