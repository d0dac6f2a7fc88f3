//! Monthly aggregation of transactions: per-month income and expense totals
//! broken down by category.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{
    Error,
    models::{Category, Transaction, TransactionType, parse_iso_date},
};

/// English month names, in calendar order, used as the keys of the summary
/// output.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The income and expense totals of one month, broken down by category.
///
/// Amounts are summed in f64 and rounded to 2 decimal places afterwards.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct MonthSummary {
    /// Summed income per category.
    pub income_by_category: BTreeMap<Category, f64>,
    /// Summed expenses per category.
    pub expenses_by_category: BTreeMap<Category, f64>,
}

/// The month summaries of one year, ordered January through December.
///
/// Serializes as a JSON object keyed by month name. A plain map would lose
/// the calendar ordering, so serialization is written out by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummaries(Vec<(&'static str, MonthSummary)>);

impl MonthlySummaries {
    /// The summaries as (month name, summary) pairs in calendar order.
    pub fn months(&self) -> &[(&'static str, MonthSummary)] {
        &self.0
    }
}

impl Serialize for MonthlySummaries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;

        for (month_name, summary) in &self.0 {
            map.serialize_entry(month_name, summary)?;
        }

        map.end()
    }
}

/// Group the given year's transactions by calendar month and total their
/// amounts per category, income and expenses separately.
///
/// When `include_empty` is false only months with at least one transaction in
/// `year` appear in the result; when true all twelve months appear, with
/// empty breakdowns where no data exists. Either way the result is ordered
/// January through December regardless of insertion order.
///
/// # Errors
/// Returns [`Error::Storage`] if a stored transaction's date no longer parses
/// as ISO-8601; the backing table is at fault, not the request.
pub fn monthly_summary(
    transactions: &[Transaction],
    year: i32,
    include_empty: bool,
) -> Result<MonthlySummaries, Error> {
    let mut months: [Option<MonthSummary>; 12] = Default::default();

    if include_empty {
        months = months.map(|_| Some(MonthSummary::default()));
    }

    for transaction in transactions {
        let date = parse_iso_date(&transaction.date).ok_or_else(|| {
            Error::Storage(format!(
                "stored transaction {} has unparseable date \"{}\"",
                transaction.id, transaction.date
            ))
        })?;

        if date.year() != year {
            continue;
        }

        let summary =
            months[date.month() as usize - 1].get_or_insert_with(MonthSummary::default);

        let breakdown = match transaction.transaction_type {
            TransactionType::Income => &mut summary.income_by_category,
            TransactionType::Expense => &mut summary.expenses_by_category,
        };

        *breakdown.entry(transaction.category).or_insert(0.0) += transaction.amount;
    }

    let summaries = months
        .into_iter()
        .zip(MONTH_NAMES)
        .filter_map(|(summary, month_name)| summary.map(|summary| (month_name, summary)))
        .map(|(month_name, mut summary)| {
            for total in summary.income_by_category.values_mut() {
                *total = round_to_cents(*total);
            }
            for total in summary.expenses_by_category.values_mut() {
                *total = round_to_cents(*total);
            }
            (month_name, summary)
        })
        .collect();

    Ok(MonthlySummaries(summaries))
}

fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod monthly_summary_tests {
    use crate::{
        Error,
        models::{Category, Transaction, TransactionType},
        stores::TransactionQuery,
        summary::monthly_summary,
    };

    fn transaction(
        id: u64,
        amount: f64,
        category: Category,
        date: &str,
        transaction_type: TransactionType,
    ) -> Transaction {
        Transaction {
            id,
            amount,
            description: format!("transaction {id}"),
            category,
            date: date.to_string(),
            transaction_type,
        }
    }

    fn march_2024_transactions() -> Vec<Transaction> {
        vec![
            transaction(1, 50.0, Category::Food, "2024-03-01", TransactionType::Expense),
            transaction(2, 2000.0, Category::Income, "2024-03-05", TransactionType::Income),
        ]
    }

    #[test]
    fn sums_income_and_expenses_by_category() {
        let summaries =
            monthly_summary(&march_2024_transactions(), 2024, false).expect("should summarize");

        let months = summaries.months();
        assert_eq!(months.len(), 1);

        let (month_name, march) = &months[0];
        assert_eq!(*month_name, "March");
        assert_eq!(march.income_by_category.get(&Category::Income), Some(&2000.0));
        assert_eq!(march.expenses_by_category.get(&Category::Food), Some(&50.0));
    }

    #[test]
    fn skips_transactions_from_other_years() {
        let mut transactions = march_2024_transactions();
        transactions.push(transaction(
            3,
            99.0,
            Category::Bills,
            "2023-03-15",
            TransactionType::Expense,
        ));

        let summaries = monthly_summary(&transactions, 2024, false).expect("should summarize");

        let (_, march) = &summaries.months()[0];
        assert_eq!(march.expenses_by_category.get(&Category::Bills), None);
    }

    #[test]
    fn include_empty_emits_all_twelve_months() {
        let summaries =
            monthly_summary(&march_2024_transactions(), 2024, true).expect("should summarize");

        let months = summaries.months();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0].0, "January");
        assert_eq!(months[11].0, "December");
        assert!(months[0].1.income_by_category.is_empty());
        assert!(!months[2].1.expenses_by_category.is_empty());
    }

    #[test]
    fn months_are_ordered_january_to_december() {
        // Insertion order is December first.
        let transactions = vec![
            transaction(1, 5.0, Category::Food, "2024-12-25", TransactionType::Expense),
            transaction(2, 7.0, Category::Food, "2024-01-02", TransactionType::Expense),
        ];

        let summaries = monthly_summary(&transactions, 2024, false).expect("should summarize");

        let month_names: Vec<&str> = summaries
            .months()
            .iter()
            .map(|(month_name, _)| *month_name)
            .collect();
        assert_eq!(month_names, vec!["January", "December"]);
    }

    #[test]
    fn serializes_as_object_in_calendar_order() {
        let summaries =
            monthly_summary(&march_2024_transactions(), 2024, true).expect("should summarize");

        let json = serde_json::to_string(&summaries).expect("should serialize");

        let january = json.find("\"January\"").expect("January missing");
        let march = json.find("\"March\"").expect("March missing");
        let december = json.find("\"December\"").expect("December missing");
        assert!(january < march && march < december);
        assert!(json.contains("\"income_by_category\":{\"income\":2000.0}"));
    }

    #[test]
    fn totals_are_rounded_to_two_decimals() {
        // 0.1 + 0.1 + 0.1 accumulates to 0.30000000000000004 in f64.
        let transactions = vec![
            transaction(1, 0.1, Category::Food, "2024-03-01", TransactionType::Expense),
            transaction(2, 0.1, Category::Food, "2024-03-02", TransactionType::Expense),
            transaction(3, 0.1, Category::Food, "2024-03-03", TransactionType::Expense),
        ];

        let summaries = monthly_summary(&transactions, 2024, false).expect("should summarize");

        let (_, march) = &summaries.months()[0];
        assert_eq!(march.expenses_by_category.get(&Category::Food), Some(&0.3));
    }

    #[test]
    fn totals_match_filtered_list_sums() {
        let transactions = vec![
            transaction(1, 12.5, Category::Food, "2024-03-01", TransactionType::Expense),
            transaction(2, 7.25, Category::Food, "2024-03-14", TransactionType::Expense),
            transaction(3, 9.99, Category::Bills, "2024-03-20", TransactionType::Expense),
            transaction(4, 3.0, Category::Food, "2024-04-02", TransactionType::Expense),
        ];

        let summaries = monthly_summary(&transactions, 2024, false).expect("should summarize");
        let (_, march) = &summaries.months()[0];

        let query = TransactionQuery {
            start_date: Some("2024-03-01".to_string()),
            end_date: Some("2024-03-31".to_string()),
            category: Some("food".to_string()),
            transaction_type: Some("expense".to_string()),
        };
        let filtered_sum: f64 = transactions
            .iter()
            .filter(|candidate| query.matches(candidate))
            .map(|candidate| candidate.amount)
            .sum();

        assert_eq!(
            march.expenses_by_category.get(&Category::Food),
            Some(&((filtered_sum * 100.0).round() / 100.0))
        );
    }

    #[test]
    fn empty_input_yields_empty_summaries() {
        let summaries = monthly_summary(&[], 2024, false).expect("should summarize");

        assert!(summaries.months().is_empty());
    }

    #[test]
    fn unparseable_stored_date_is_a_storage_error() {
        let mut transactions = march_2024_transactions();
        transactions[0].date = "garbage".to_string();

        let result = monthly_summary(&transactions, 2024, false);

        assert!(matches!(result, Err(Error::Storage(_))));
    }
}
