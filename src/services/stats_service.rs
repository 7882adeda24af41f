use std::collections::BTreeMap;

use bigdecimal::BigDecimal;
use chrono::{Datelike, NaiveDate};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::models::{Category, CategoryStat, Expense, ExpenseStats, MonthlyStat, TotalStats};

/// The monthly trend keeps the most recent year-month buckets only.
pub const MONTHLY_TREND_MONTHS: usize = 12;

/// Aggregate one user's expenses over an optional inclusive date range.
///
/// Pure read: fetches the matching rows and reduces them in memory. Any
/// store failure propagates unchanged; an empty selection is a valid result
/// with zero totals, never an error.
pub async fn get_stats(
    pool: &PgPool,
    user_id: Uuid,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<ExpenseStats, AppError> {
    validate_date_range(start_date, end_date)?;

    let expenses = db::expense_queries::fetch_for_user(pool, user_id, start_date, end_date).await?;

    Ok(aggregate(&expenses))
}

pub fn validate_date_range(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<(), AppError> {
    if let (Some(start), Some(end)) = (start_date, end_date) {
        if start > end {
            return Err(AppError::Validation(format!(
                "start_date {} is after end_date {}",
                start, end
            )));
        }
    }
    Ok(())
}

struct Accumulator {
    total: BigDecimal,
    count: i64,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            total: BigDecimal::from(0),
            count: 0,
        }
    }

    fn add(&mut self, amount: &BigDecimal) {
        self.total += amount.clone();
        self.count += 1;
    }
}

/// Single-pass group/reduce over an already-filtered selection.
pub fn aggregate(expenses: &[Expense]) -> ExpenseStats {
    let mut by_category: BTreeMap<Category, Accumulator> = BTreeMap::new();
    let mut by_month: BTreeMap<(i32, u32), Accumulator> = BTreeMap::new();

    for expense in expenses {
        by_category
            .entry(expense.category)
            .or_insert_with(Accumulator::new)
            .add(&expense.amount);
        by_month
            .entry((expense.date.year(), expense.date.month()))
            .or_insert_with(Accumulator::new)
            .add(&expense.amount);
    }

    let mut category_stats: Vec<CategoryStat> = by_category
        .into_iter()
        .map(|(category, acc)| CategoryStat {
            category,
            average: mean(&acc.total, acc.count),
            total: acc.total,
            count: acc.count,
        })
        .collect();
    // Stable sort: equal totals keep the category enum order from the map.
    category_stats.sort_by(|a, b| b.total.cmp(&a.total));

    let monthly_stats: Vec<MonthlyStat> = by_month
        .into_iter()
        .rev()
        .take(MONTHLY_TREND_MONTHS)
        .map(|((year, month), acc)| MonthlyStat {
            year,
            month,
            total: acc.total,
            count: acc.count,
        })
        .collect();

    ExpenseStats {
        category_stats,
        monthly_stats,
        total_stats: grand_total(expenses),
    }
}

/// Sum, count and mean across the whole selection, independent of any
/// grouping. Zero-valued for an empty selection.
pub fn grand_total(expenses: &[Expense]) -> TotalStats {
    let mut acc = Accumulator::new();
    for expense in expenses {
        acc.add(&expense.amount);
    }

    TotalStats {
        average_amount: mean(&acc.total, acc.count),
        total_amount: acc.total,
        total_count: acc.count,
    }
}

fn mean(total: &BigDecimal, count: i64) -> BigDecimal {
    if count > 0 {
        total.clone() / BigDecimal::from(count)
    } else {
        BigDecimal::from(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn expense(category: Category, amount: &str, date: &str) -> Expense {
        Expense {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            amount: BigDecimal::from_str(amount).unwrap(),
            category,
            description: "test expense".to_string(),
            date: NaiveDate::from_str(date).unwrap(),
            tags: vec![],
            created_at: chrono::Utc::now(),
        }
    }

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_empty_selection_yields_zero_totals() {
        let stats = aggregate(&[]);
        assert!(stats.category_stats.is_empty());
        assert!(stats.monthly_stats.is_empty());
        assert_eq!(stats.total_stats.total_amount, dec("0"));
        assert_eq!(stats.total_stats.total_count, 0);
        assert_eq!(stats.total_stats.average_amount, dec("0"));
    }

    #[test]
    fn test_worked_example() {
        let expenses = vec![
            expense(Category::Food, "10", "2024-01-05"),
            expense(Category::Food, "20", "2024-01-10"),
            expense(Category::Bills, "50", "2024-02-01"),
        ];
        let stats = aggregate(&expenses);

        assert_eq!(stats.category_stats.len(), 2);
        assert_eq!(stats.category_stats[0].category, Category::Bills);
        assert_eq!(stats.category_stats[0].total, dec("50"));
        assert_eq!(stats.category_stats[0].count, 1);
        assert_eq!(stats.category_stats[0].average, dec("50"));
        assert_eq!(stats.category_stats[1].category, Category::Food);
        assert_eq!(stats.category_stats[1].total, dec("30"));
        assert_eq!(stats.category_stats[1].count, 2);
        assert_eq!(stats.category_stats[1].average, dec("15"));

        assert_eq!(stats.monthly_stats.len(), 2);
        assert_eq!(
            (stats.monthly_stats[0].year, stats.monthly_stats[0].month),
            (2024, 2)
        );
        assert_eq!(stats.monthly_stats[0].total, dec("50"));
        assert_eq!(stats.monthly_stats[0].count, 1);
        assert_eq!(
            (stats.monthly_stats[1].year, stats.monthly_stats[1].month),
            (2024, 1)
        );
        assert_eq!(stats.monthly_stats[1].total, dec("30"));
        assert_eq!(stats.monthly_stats[1].count, 2);

        assert_eq!(stats.total_stats.total_amount, dec("80"));
        assert_eq!(stats.total_stats.total_count, 3);
        // 80 / 3 is a repeating decimal; pin it between two bounds instead
        // of asserting a particular scale.
        assert!(stats.total_stats.average_amount > dec("26.66"));
        assert!(stats.total_stats.average_amount < dec("26.67"));
    }

    #[test]
    fn test_category_totals_reconcile_with_grand_total() {
        let expenses = vec![
            expense(Category::Food, "12.34", "2024-03-01"),
            expense(Category::Travel, "99.99", "2024-03-15"),
            expense(Category::Food, "0.01", "2024-04-02"),
            expense(Category::Healthcare, "250", "2024-05-20"),
        ];
        let stats = aggregate(&expenses);

        let category_sum: BigDecimal = stats
            .category_stats
            .iter()
            .fold(dec("0"), |acc, s| acc + s.total.clone());
        let category_count: i64 = stats.category_stats.iter().map(|s| s.count).sum();

        assert_eq!(category_sum, stats.total_stats.total_amount);
        assert_eq!(category_count, stats.total_stats.total_count);
    }

    #[test]
    fn test_category_breakdown_sorted_by_total_descending() {
        let expenses = vec![
            expense(Category::Food, "5", "2024-01-01"),
            expense(Category::Shopping, "300", "2024-01-02"),
            expense(Category::Bills, "40", "2024-01-03"),
            expense(Category::Food, "10", "2024-01-04"),
        ];
        let stats = aggregate(&expenses);

        for pair in stats.category_stats.windows(2) {
            assert!(pair[0].total >= pair[1].total);
        }
    }

    #[test]
    fn test_equal_totals_break_ties_by_category_order() {
        // Food is declared before Bills, so on equal totals Food comes first.
        let expenses = vec![
            expense(Category::Bills, "25", "2024-01-01"),
            expense(Category::Food, "25", "2024-01-02"),
        ];
        let stats = aggregate(&expenses);

        assert_eq!(stats.category_stats[0].category, Category::Food);
        assert_eq!(stats.category_stats[1].category, Category::Bills);
    }

    #[test]
    fn test_monthly_trend_capped_at_twelve_buckets() {
        let mut expenses = Vec::new();
        for month in 1..=12 {
            expenses.push(expense(
                Category::Other,
                "10",
                &format!("2024-{:02}-15", month),
            ));
        }
        expenses.push(expense(Category::Other, "10", "2025-01-15"));
        expenses.push(expense(Category::Other, "10", "2025-02-15"));
        let stats = aggregate(&expenses);

        assert_eq!(stats.monthly_stats.len(), MONTHLY_TREND_MONTHS);
        // Most recent bucket first, oldest two dropped.
        assert_eq!(
            (stats.monthly_stats[0].year, stats.monthly_stats[0].month),
            (2025, 2)
        );
        assert_eq!(
            (stats.monthly_stats[11].year, stats.monthly_stats[11].month),
            (2024, 3)
        );
    }

    #[test]
    fn test_monthly_trend_sorted_year_then_month_descending() {
        let expenses = vec![
            expense(Category::Other, "1", "2023-12-01"),
            expense(Category::Other, "1", "2024-01-01"),
            expense(Category::Other, "1", "2023-02-01"),
            expense(Category::Other, "1", "2024-06-01"),
        ];
        let stats = aggregate(&expenses);

        for pair in stats.monthly_stats.windows(2) {
            assert!((pair[0].year, pair[0].month) > (pair[1].year, pair[1].month));
        }
    }

    #[test]
    fn test_amount_precision_preserved() {
        let expenses = vec![
            expense(Category::Food, "0.10", "2024-01-01"),
            expense(Category::Food, "0.20", "2024-01-02"),
        ];
        let stats = aggregate(&expenses);

        // Decimal arithmetic: no float drift on 0.1 + 0.2.
        assert_eq!(stats.total_stats.total_amount, dec("0.30"));
        assert_eq!(stats.total_stats.average_amount, dec("0.15"));
    }

    #[test]
    fn test_validate_date_range_rejects_inverted_bounds() {
        let start = NaiveDate::from_str("2024-06-01").unwrap();
        let end = NaiveDate::from_str("2024-01-01").unwrap();

        assert!(validate_date_range(Some(start), Some(end)).is_err());
        assert!(validate_date_range(Some(end), Some(start)).is_ok());
        assert!(validate_date_range(Some(start), None).is_ok());
        assert!(validate_date_range(None, Some(end)).is_ok());
        assert!(validate_date_range(None, None).is_ok());
        // A single-day range is valid: both bounds are inclusive.
        assert!(validate_date_range(Some(start), Some(start)).is_ok());
    }
}
