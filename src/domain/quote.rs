//! Quote calculation.
//! Pure pricing rules for a project brief: base price by project type,
//! complexity premium by description length, flat rush fee, then rounding
//! to the nearest 500.
//!
//! All arithmetic is done in hundredths of a currency unit so that tier
//! boundaries never depend on floating point representation.

use serde::Serialize;
use utoipa::ToSchema;

/// Rounding granularity of a final quote.
pub const QUOTE_STEP: i64 = 500;
/// Flat surcharge for timelines mentioning "urgent".
pub const RUSH_FEE: i64 = 1500;
/// Base price for unknown or empty project types.
pub const FALLBACK_BASE_PRICE: i64 = 7500;

const RUSH_KEYWORD: &str = "urgent";
const HUNDREDTHS: i64 = 100;

/// Project categories with a dedicated price list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Website,
    Software,
    ItSolution,
    Consultation,
}

impl ProjectType {
    /// Exact, case-sensitive lookup of a raw form value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "website" => Some(Self::Website),
            "software" => Some(Self::Software),
            "it_solution" => Some(Self::ItSolution),
            "consultation" => Some(Self::Consultation),
            _ => None,
        }
    }

    pub fn base_price(self) -> i64 {
        match self {
            Self::Website => 8000,
            Self::Software => 15000,
            Self::ItSolution => 5000,
            Self::Consultation => 2000,
        }
    }
}

/// Complexity premium derived from the description length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityTier {
    /// 250 characters or fewer.
    Standard,
    /// More than 250, at most 500 characters: +10%.
    Medium,
    /// More than 500 characters: +25%.
    Complex,
}

impl ComplexityTier {
    pub fn for_description(description: &str) -> Self {
        let len = description.chars().count();
        if len > 500 {
            Self::Complex
        } else if len > 250 {
            Self::Medium
        } else {
            Self::Standard
        }
    }

    /// Multiplier expressed in percent.
    pub fn percent(self) -> i64 {
        match self {
            Self::Standard => 100,
            Self::Medium => 110,
            Self::Complex => 125,
        }
    }
}

/// Every intermediate value that went into a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct QuoteBreakdown {
    pub base_price: i64,
    pub complexity: ComplexityTier,
    pub rush_fee: i64,
    pub total: i64,
}

impl QuoteBreakdown {
    pub fn calculate(project_type: &str, description: &str, timeline: Option<&str>) -> Self {
        let base_price = ProjectType::from_key(project_type)
            .map(ProjectType::base_price)
            .unwrap_or(FALLBACK_BASE_PRICE);

        let complexity = ComplexityTier::for_description(description);

        let rush_fee = if is_rush(timeline) { RUSH_FEE } else { 0 };

        // multiplier, then surcharge, then rounding
        let raw_hundredths = base_price * complexity.percent() + rush_fee * HUNDREDTHS;
        let total = round_to_step(raw_hundredths, QUOTE_STEP * HUNDREDTHS) * QUOTE_STEP;

        Self {
            base_price,
            complexity,
            rush_fee,
            total,
        }
    }
}

/// Computes the final quote for a brief. Never fails: unknown project types
/// fall back to [`FALLBACK_BASE_PRICE`].
pub fn compute_quote(project_type: &str, description: &str, timeline: Option<&str>) -> i64 {
    QuoteBreakdown::calculate(project_type, description, timeline).total
}

fn is_rush(timeline: Option<&str>) -> bool {
    timeline
        .map(|t| t.to_lowercase().contains(RUSH_KEYWORD))
        .unwrap_or(false)
}

/// Number of `step`s nearest to `value`, ties to even. Both arguments are
/// non-negative.
fn round_to_step(value: i64, step: i64) -> i64 {
    let quotient = value / step;
    let remainder = value % step;
    match (remainder * 2).cmp(&step) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal if quotient % 2 == 0 => quotient,
        std::cmp::Ordering::Equal => quotient + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_price_without_modifiers() {
        assert_eq!(compute_quote("website", &"x".repeat(10), None), 8000);
    }

    #[test]
    fn complex_software_with_rush_fee() {
        // 15000 * 1.25 + 1500 = 20250, a tie that resolves to the even step
        assert_eq!(
            compute_quote("software", &"x".repeat(600), Some("urgent delivery")),
            20000
        );
    }

    #[test]
    fn medium_it_solution() {
        assert_eq!(compute_quote("it_solution", &"x".repeat(300), None), 5500);
    }

    #[test]
    fn unknown_type_uses_fallback() {
        assert_eq!(compute_quote("unknown_type", "", None), 7500);
        assert_eq!(compute_quote("", "", None), 7500);
    }

    #[test]
    fn project_type_lookup_is_case_sensitive() {
        assert_eq!(ProjectType::from_key("Website"), None);
        assert_eq!(compute_quote("Website", "short", None), 7500);
    }

    #[test]
    fn tie_at_8250_rounds_down_to_8000() {
        // fallback 7500 * 1.10 = 8250
        let breakdown = QuoteBreakdown::calculate("other", &"x".repeat(251), None);
        assert_eq!(breakdown.complexity, ComplexityTier::Medium);
        assert_eq!(breakdown.total, 8000);
    }

    #[test]
    fn tie_rounds_to_even_step() {
        assert_eq!(round_to_step(8250, 500), 16);
        assert_eq!(round_to_step(8750, 500), 18);
        assert_eq!(round_to_step(8251, 500), 17);
        assert_eq!(round_to_step(8249, 500), 16);
    }

    #[test]
    fn complexity_tier_boundaries() {
        assert_eq!(ComplexityTier::for_description(&"x".repeat(250)), ComplexityTier::Standard);
        assert_eq!(ComplexityTier::for_description(&"x".repeat(251)), ComplexityTier::Medium);
        assert_eq!(ComplexityTier::for_description(&"x".repeat(500)), ComplexityTier::Medium);
        assert_eq!(ComplexityTier::for_description(&"x".repeat(501)), ComplexityTier::Complex);
    }

    #[test]
    fn description_length_counts_characters_not_bytes() {
        // 251 bytes but only 126 characters
        let description = format!("{}x", "é".repeat(125));
        assert_eq!(ComplexityTier::for_description(&description), ComplexityTier::Standard);
    }

    #[test]
    fn rush_keyword_is_case_insensitive() {
        assert_eq!(compute_quote("consultation", "call", Some("URGENT please")), 3500);
        assert_eq!(compute_quote("consultation", "call", Some("Semi-Urgent")), 3500);
        assert_eq!(compute_quote("consultation", "call", Some("next quarter")), 2000);
        assert_eq!(compute_quote("consultation", "call", None), 2000);
    }

    #[test]
    fn surcharge_applies_after_multiplier() {
        // (2000 * 1.25) + 1500 = 4000; applying the fee first would give 4375 -> 4500
        assert_eq!(compute_quote("consultation", &"x".repeat(501), Some("urgent")), 4000);
    }

    #[test]
    fn medium_website_rounds_to_nearest_step() {
        // 8000 * 1.10 = 8800 -> 9000
        assert_eq!(compute_quote("website", &"x".repeat(300), None), 9000);
    }

    #[test]
    fn breakdown_reports_components() {
        let breakdown = QuoteBreakdown::calculate("software", &"x".repeat(600), Some("Urgent"));
        assert_eq!(breakdown.base_price, 15000);
        assert_eq!(breakdown.complexity, ComplexityTier::Complex);
        assert_eq!(breakdown.rush_fee, RUSH_FEE);
        assert_eq!(breakdown.total, 20000);
    }

    #[test]
    fn deterministic_for_same_inputs() {
        let description = "a".repeat(420);
        let first = compute_quote("website", &description, Some("urgent"));
        for _ in 0..10 {
            assert_eq!(compute_quote("website", &description, Some("urgent")), first);
        }
    }
}
