pub mod budget_queries;
pub mod expense_queries;
