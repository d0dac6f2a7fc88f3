//! This file defines the `Category` type, the closed set of labels a
//! transaction can be filed under.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// The category of a transaction, e.g. groceries are `Food` and a salary
/// payment is `Income`.
///
/// The set is fixed: free-form categories are not accepted. Categories are
/// serialized in lowercase, matching how they appear in the CSV table and in
/// API requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Groceries and eating out.
    Food,
    /// Public transport, fuel, vehicle costs.
    Transport,
    /// Movies, games, events.
    Entertainment,
    /// Rent, utilities, subscriptions.
    Bills,
    /// General purchases.
    Shopping,
    /// Medical costs, insurance, fitness.
    Health,
    /// Tuition, courses, books.
    Education,
    /// Money coming in rather than going out.
    Income,
    /// Anything that does not fit the other categories.
    Other,
}

impl Category {
    /// Every member of the category set, in its canonical order.
    pub const ALL: [Category; 9] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Bills,
        Category::Shopping,
        Category::Health,
        Category::Education,
        Category::Income,
        Category::Other,
    ];

    /// The lowercase name of the category as stored in the CSV table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Entertainment => "entertainment",
            Category::Bills => "bills",
            Category::Shopping => "shopping",
            Category::Health => "health",
            Category::Education => "education",
            Category::Income => "income",
            Category::Other => "other",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Parse a category from its lowercase name.
    ///
    /// Matching is case-sensitive: `"Food"` is rejected.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == text)
            .ok_or(Error::InvalidCategory)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
