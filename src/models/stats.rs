use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::models::Category;

/// Per-category slice of the aggregation: sum, count and mean of the
/// matching amounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStat {
    pub category: Category,
    pub total: BigDecimal,
    pub count: i64,
    pub average: BigDecimal,
}

/// One calendar year-month bucket of the trailing trend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyStat {
    pub year: i32,
    pub month: u32,
    pub total: BigDecimal,
    pub count: i64,
}

/// Grand total across every matching record. Always present; all-zero when
/// nothing matched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalStats {
    pub total_amount: BigDecimal,
    pub total_count: i64,
    pub average_amount: BigDecimal,
}

impl TotalStats {
    pub fn zero() -> Self {
        Self {
            total_amount: BigDecimal::from(0),
            total_count: 0,
            average_amount: BigDecimal::from(0),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseStats {
    pub category_stats: Vec<CategoryStat>,
    pub monthly_stats: Vec<MonthlyStat>,
    pub total_stats: TotalStats,
}
