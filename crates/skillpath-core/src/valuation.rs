//! Salary estimation from aggregate market demand.

use serde::{Deserialize, Serialize};

use skillpath_types::skill::Skill;

/// Output format for salary range strings.
///
/// Defaults to the source market's rupee-and-Lakh spelling ("₹9L - ₹22L").
/// Hosts targeting another locale swap the symbol and unit instead of
/// reformatting downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SalaryFormat {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Range used when there are no skills to estimate from, and for
    /// generic catalog listings.
    #[serde(default = "default_fallback")]
    pub fallback: (u32, u32),
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_unit() -> String {
    "L".to_string()
}

fn default_fallback() -> (u32, u32) {
    (6, 18)
}

impl Default for SalaryFormat {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            unit: default_unit(),
            fallback: default_fallback(),
        }
    }
}

impl SalaryFormat {
    fn range(&self, low: u32, high: u32) -> String {
        format!(
            "{cur}{low}{unit} - {cur}{high}{unit}",
            cur = self.currency,
            unit = self.unit
        )
    }

    /// The generic range reported when no estimate is possible.
    pub fn fallback_range(&self) -> String {
        let (low, high) = self.fallback;
        self.range(low, high)
    }
}

/// Estimate a salary range from the mean market demand of `skills`.
///
/// Base figure = floor(mean / 10), upper figure = floor(base * 2.5). An
/// empty skill list yields the configured fallback range rather than a
/// division by zero.
pub fn estimate_salary(skills: &[Skill], format: &SalaryFormat) -> String {
    if skills.is_empty() {
        return format.fallback_range();
    }

    let total: u32 = skills.iter().map(|s| u32::from(s.market_demand)).sum();
    // floor(mean / 10) == total / (len * 10) in integer arithmetic.
    let base = total / (skills.len() as u32 * 10);
    let upper = base * 5 / 2;

    format.range(base, upper)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
