pub mod loan;
pub mod plan;
pub mod pricing;
pub mod renovation;
pub mod units;

pub use loan::{
    loan_capacity, monthly_payment_from_total_loan, validate_rate_and_term, SolveDirection,
    MAX_LOAN_TERM_YEARS,
};
pub use plan::{calculate, CalculationInput, CalculationResult};
pub use pricing::solve_purchase_price;
pub use renovation::{full_renovation_cost, renovation_cost_with_tax, RenovationMode};
pub use units::{normalize_amount, Normalized, UnitPolicy};
