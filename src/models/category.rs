//! Expense categories and the rubric threshold table
//!
//! Every category carries three percentage-of-income breakpoints that
//! separate the grade bands. The set of categories is fixed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fixed spending category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Rent,
    Food,
    Transportation,
    Utilities,
    Education,
    Health,
    Entertainment,
    Shopping,
    Savings,
    Other,
}

/// Percentage-of-income breakpoints for one category
///
/// For every category except Savings, a higher percentage is worse:
/// at or below `excellent` grades A, at or below `good` grades B, at or
/// below `warning` grades C, above `warning` grades D. Savings carries
/// inverted threshold values (higher saving is better) - see
/// `services::rubric` for how that plays out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryThresholds {
    pub excellent: f64,
    pub good: f64,
    pub warning: f64,
}

impl ExpenseCategory {
    /// All categories, in declaration order
    ///
    /// This order is also the order category recommendations are emitted in.
    pub fn all() -> &'static [Self] {
        &[
            Self::Rent,
            Self::Food,
            Self::Transportation,
            Self::Utilities,
            Self::Education,
            Self::Health,
            Self::Entertainment,
            Self::Shopping,
            Self::Savings,
            Self::Other,
        ]
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rent => "Rent",
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Utilities => "Utilities",
            Self::Education => "Education",
            Self::Health => "Health",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Savings => "Savings",
            Self::Other => "Other",
        }
    }

    /// Rubric thresholds for this category, as percent of income
    ///
    /// Total over the category set: every variant has an entry, no errors.
    /// Savings values are intentionally inverted (20 is the excellent band
    /// because saving more is better).
    pub const fn thresholds(&self) -> CategoryThresholds {
        match self {
            Self::Rent => CategoryThresholds { excellent: 30.0, good: 35.0, warning: 40.0 },
            Self::Food => CategoryThresholds { excellent: 15.0, good: 20.0, warning: 25.0 },
            Self::Transportation => CategoryThresholds { excellent: 8.0, good: 12.0, warning: 15.0 },
            Self::Utilities => CategoryThresholds { excellent: 6.0, good: 9.0, warning: 12.0 },
            Self::Education => CategoryThresholds { excellent: 10.0, good: 15.0, warning: 20.0 },
            Self::Health => CategoryThresholds { excellent: 5.0, good: 8.0, warning: 12.0 },
            Self::Entertainment => CategoryThresholds { excellent: 5.0, good: 8.0, warning: 10.0 },
            Self::Shopping => CategoryThresholds { excellent: 5.0, good: 8.0, warning: 10.0 },
            Self::Savings => CategoryThresholds { excellent: 20.0, good: 15.0, warning: 10.0 },
            Self::Other => CategoryThresholds { excellent: 3.0, good: 5.0, warning: 8.0 },
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error for parsing an unknown category name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for ExpenseCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rent" | "housing" => Ok(Self::Rent),
            "food" | "groceries" => Ok(Self::Food),
            "transportation" | "transport" | "transit" => Ok(Self::Transportation),
            "utilities" => Ok(Self::Utilities),
            "education" => Ok(Self::Education),
            "health" => Ok(Self::Health),
            "entertainment" => Ok(Self::Entertainment),
            "shopping" => Ok(Self::Shopping),
            "savings" => Ok(Self::Savings),
            "other" => Ok(Self::Other),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_categories_have_thresholds() {
        // Lookup is total: ordering within each entry holds for every
        // category except Savings, where the values are inverted.
        for cat in ExpenseCategory::all() {
            let t = cat.thresholds();
            if *cat == ExpenseCategory::Savings {
                assert!(t.excellent > t.good && t.good > t.warning);
            } else {
                assert!(t.excellent < t.good && t.good < t.warning);
            }
        }
    }

    #[test]
    fn test_threshold_values() {
        let rent = ExpenseCategory::Rent.thresholds();
        assert_eq!((rent.excellent, rent.good, rent.warning), (30.0, 35.0, 40.0));

        let savings = ExpenseCategory::Savings.thresholds();
        assert_eq!(
            (savings.excellent, savings.good, savings.warning),
            (20.0, 15.0, 10.0)
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("rent".parse::<ExpenseCategory>().unwrap(), ExpenseCategory::Rent);
        assert_eq!("FOOD".parse::<ExpenseCategory>().unwrap(), ExpenseCategory::Food);
        assert_eq!(
            "transit".parse::<ExpenseCategory>().unwrap(),
            ExpenseCategory::Transportation
        );
        assert!("tuition fees".parse::<ExpenseCategory>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ExpenseCategory::Transportation.to_string(), "Transportation");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&ExpenseCategory::Savings).unwrap();
        assert_eq!(json, "\"savings\"");
        let cat: ExpenseCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(cat, ExpenseCategory::Savings);
    }

    #[test]
    fn test_all_order_is_declaration_order() {
        let all = ExpenseCategory::all();
        assert_eq!(all.len(), 10);
        assert_eq!(all[0], ExpenseCategory::Rent);
        assert_eq!(all[9], ExpenseCategory::Other);
    }
}
