mod auth;
mod budget;
mod budget_form;
mod budgets;

pub use auth::{LoginPage, RegisterPage};
pub use budget::BudgetPage;
pub use budget_form::{CreateBudgetPage, EditBudgetPage};
pub use budgets::BudgetsPage;
