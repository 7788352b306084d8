use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::RenoPlanError;
use crate::time_value::{
    annuity_payment, monthly_rate, pv_annuity, pv_bonuses, term_months, BONUS_INTERVAL_MONTHS,
};
use crate::types::{Money, Percent};
use crate::RenoPlanResult;

// ---------------------------------------------------------------------------
// Solve direction
// ---------------------------------------------------------------------------

/// Which repayment-side quantity drives the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "direction", rename_all = "snake_case")]
pub enum SolveDirection {
    /// Affordable monthly payment known; solve for the loan it supports
    FromMonthlyPayment { monthly: Money },
    /// Target loan known; solve for the monthly payment it requires
    FromTotalLoan { total_loan: Money },
}

impl SolveDirection {
    /// Pick the direction from normalised inputs. A positive total loan with
    /// no positive monthly payment runs loan -> payment; everything else runs
    /// payment -> loan with the monthly amount (zero if absent).
    pub fn select(monthly: Money, total_loan: Money) -> Self {
        if total_loan > Decimal::ZERO && monthly <= Decimal::ZERO {
            SolveDirection::FromTotalLoan { total_loan }
        } else {
            SolveDirection::FromMonthlyPayment { monthly }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SolveDirection::FromMonthlyPayment { .. } => "from_monthly_payment",
            SolveDirection::FromTotalLoan { .. } => "from_total_loan",
        }
    }
}

/// Monthly payment and total loan after solving in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub monthly_payment: Money,
    pub total_loan: Money,
    /// Present value of the bonus schedule at the loan rate
    pub bonus_present_value: Money,
}

// ---------------------------------------------------------------------------
// Solvers
// ---------------------------------------------------------------------------

/// Longest loan term accepted, in years.
pub const MAX_LOAN_TERM_YEARS: u32 = 50;

/// Reject a negative rate or a term outside `1..=MAX_LOAN_TERM_YEARS`.
///
/// The solvers walk the schedule month by month, so the term bound also caps
/// their running time.
pub fn validate_rate_and_term(rate_percent: Percent, years: u32) -> RenoPlanResult<()> {
    if rate_percent < Decimal::ZERO {
        return Err(RenoPlanError::invalid_input(
            "interest_rate_percent",
            "Interest rate cannot be negative",
        ));
    }
    if years == 0 || years > MAX_LOAN_TERM_YEARS {
        return Err(RenoPlanError::invalid_input(
            "loan_term_years",
            format!("Loan term must be between 1 and {MAX_LOAN_TERM_YEARS} years"),
        ));
    }
    Ok(())
}

/// Maximum loan supported by a monthly payment plus twice-yearly bonus
/// payments: `PV_annuity(monthly) + PV_bonuses(bonus)`.
pub fn loan_capacity(
    monthly: Money,
    bonus: Money,
    rate_percent: Percent,
    years: u32,
) -> RenoPlanResult<Money> {
    let n = term_months(years);
    let i = monthly_rate(rate_percent);
    let annuity = pv_annuity(monthly, i, n)?;
    let bonuses = pv_bonuses(bonus, i, n, BONUS_INTERVAL_MONTHS)?;
    annuity
        .checked_add(bonuses)
        .ok_or_else(|| RenoPlanError::overflow("loan capacity"))
}

/// Monthly payment that, together with the bonus schedule, repays
/// `total_loan`.
///
/// The bonus present value is netted off first and the remainder is clamped
/// at zero, so a bonus schedule worth more than the loan yields a zero
/// monthly payment.
pub fn monthly_payment_from_total_loan(
    total_loan: Money,
    bonus: Money,
    rate_percent: Percent,
    years: u32,
) -> RenoPlanResult<Money> {
    let n = term_months(years);
    if n == 0 {
        return Ok(Decimal::ZERO);
    }
    let i = monthly_rate(rate_percent);
    let pv_bonus = pv_bonuses(bonus, i, n, BONUS_INTERVAL_MONTHS)?;
    let pv_for_monthly = total_loan
        .checked_sub(pv_bonus)
        .ok_or_else(|| RenoPlanError::overflow("loan net of bonuses"))?
        .max(Decimal::ZERO);
    annuity_payment(pv_for_monthly, i, n)
}

/// Run the solve selected by `direction`.
pub fn solve_loan(
    direction: SolveDirection,
    bonus: Money,
    rate_percent: Percent,
    years: u32,
) -> RenoPlanResult<LoanTerms> {
    let bonus_present_value = pv_bonuses(
        bonus,
        monthly_rate(rate_percent),
        term_months(years),
        BONUS_INTERVAL_MONTHS,
    )?;
    let terms = match direction {
        SolveDirection::FromMonthlyPayment { monthly } => LoanTerms {
            monthly_payment: monthly,
            total_loan: loan_capacity(monthly, bonus, rate_percent, years)?,
            bonus_present_value,
        },
        SolveDirection::FromTotalLoan { total_loan } => LoanTerms {
            monthly_payment: monthly_payment_from_total_loan(
                total_loan,
                bonus,
                rate_percent,
                years,
            )?,
            total_loan,
            bonus_present_value,
        },
    };
    Ok(terms)
}
