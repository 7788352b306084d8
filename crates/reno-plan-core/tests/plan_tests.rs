use pretty_assertions::assert_eq;
use reno_plan_core::purchase_plan::{
    calculate, loan_capacity, monthly_payment_from_total_loan, CalculationInput, RenovationMode,
};
use reno_plan_core::{PlanConfig, RenoPlanError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn form_input() -> CalculationInput {
    CalculationInput {
        self_funds: dec!(300),
        monthly_payment: Some(dec!(10)),
        total_loan_input: None,
        interest_rate_percent: dec!(0.8),
        required_area: 60,
        loan_term_years: 35,
        renovation_mode: RenovationMode::Full,
        renovation_cost_manual: None,
        bonus_payment: dec!(10),
        memo: String::new(),
    }
}

// ===========================================================================
// Payment -> loan
// ===========================================================================

#[test]
fn test_plan_from_monthly_payment() {
    let input = form_input();
    let out = calculate(&input, &PlanConfig::default()).unwrap();
    let r = &out.result;

    assert_eq!(r.renovation_cost, dec!(1070.0));
    assert_eq!(r.renovation_cost_with_tax, dec!(1177.0));

    let capacity = loan_capacity(dec!(10), dec!(10), dec!(0.8), 35).unwrap();
    assert_eq!(r.total_loan, capacity.round_dp(1));

    // disposable = 300 + capacity - 1177; price = disposable / 1.08
    let disposable = dec!(300) + capacity - dec!(1177);
    let price = disposable / dec!(1.08);
    assert_eq!(r.purchasable_price, price.round_dp(1));
    assert_eq!(r.fee, (price * dec!(0.08)).round_dp(1));
    assert!(out.warnings.is_empty());
}

#[test]
fn test_price_plus_fee_matches_disposable() {
    let out = calculate(&form_input(), &PlanConfig::default()).unwrap();
    let r = &out.result;
    // Each figure is rounded independently, so allow one rounding step each
    assert!((r.purchasable_price + r.fee - r.disposable_funds).abs() <= dec!(0.1));
}

#[test]
fn test_custom_fee_and_tax_rates() {
    let config = PlanConfig::default()
        .with_fee_rate(dec!(0.05))
        .with_tax_rate(Decimal::ZERO);
    let out = calculate(&form_input(), &config).unwrap();
    assert_eq!(out.result.renovation_cost_with_tax, dec!(1070));
    let default_out = calculate(&form_input(), &PlanConfig::default()).unwrap();
    assert!(out.result.purchasable_price > default_out.result.purchasable_price);
}

// ===========================================================================
// Loan -> payment
// ===========================================================================

#[test]
fn test_plan_from_total_loan_round_trips() {
    let mut input = form_input();
    input.monthly_payment = Some(Decimal::ZERO);
    input.total_loan_input = Some(dec!(2000));
    input.bonus_payment = Decimal::ZERO;
    input.interest_rate_percent = dec!(1);
    input.loan_term_years = 30;

    let out = calculate(&input, &PlanConfig::default()).unwrap();
    let r = &out.result;
    assert_eq!(r.solve_direction, "from_total_loan");
    assert_eq!(r.total_loan, dec!(2000));
    // 2000 * i / (1 - (1+i)^-360), i = 1%/12 ~ 6.43
    assert_eq!(r.monthly_payment_out, dec!(6.43));

    let monthly = monthly_payment_from_total_loan(dec!(2000), Decimal::ZERO, dec!(1), 30).unwrap();
    let back = loan_capacity(monthly, Decimal::ZERO, dec!(1), 30).unwrap();
    assert!((back - dec!(2000)).abs() < dec!(0.0001), "got {back}");
}

#[test]
fn test_absent_monthly_counts_as_zero() {
    let mut input = form_input();
    input.monthly_payment = None;
    input.total_loan_input = Some(dec!(3000));
    let out = calculate(&input, &PlanConfig::default()).unwrap();
    assert_eq!(out.result.solve_direction, "from_total_loan");
    assert!(out.result.monthly_payment_out > Decimal::ZERO);
}

#[test]
fn test_monthly_takes_priority_over_loan() {
    let mut input = form_input();
    input.total_loan_input = Some(dec!(9999));
    let out = calculate(&input, &PlanConfig::default()).unwrap();
    assert_eq!(out.result.solve_direction, "from_monthly_payment");
    assert_eq!(out.result.monthly_payment_out, dec!(10));
    assert!(out.result.total_loan < dec!(9999));
}

// ===========================================================================
// Unit correction
// ===========================================================================

#[test]
fn test_oversized_self_funds_corrected() {
    let mut input = form_input();
    input.self_funds = dec!(5_000_000);
    let corrected = calculate(&input, &PlanConfig::default()).unwrap();

    let mut reference = form_input();
    reference.self_funds = dec!(500);
    let expected = calculate(&reference, &PlanConfig::default()).unwrap();

    assert_eq!(corrected.warnings.len(), 1);
    assert!(corrected.warnings[0].contains("Self funds"));
    assert_eq!(corrected.result.disposable_funds, expected.result.disposable_funds);
    assert_eq!(corrected.result.purchasable_price, expected.result.purchasable_price);
    assert_eq!(corrected.result.fee, expected.result.fee);
}

#[test]
fn test_total_loan_in_yen_corrected() {
    let mut input = form_input();
    input.monthly_payment = None;
    input.total_loan_input = Some(dec!(30_000_000));
    let out = calculate(&input, &PlanConfig::default()).unwrap();
    assert_eq!(out.result.total_loan, dec!(3000));
    assert_eq!(out.warnings.len(), 1);
    assert!(out.warnings[0].starts_with("Total loan"));
}

// ===========================================================================
// Validation and serde
// ===========================================================================

#[test]
fn test_manual_without_cost_is_error() {
    let mut input = form_input();
    input.renovation_mode = RenovationMode::Manual;
    let err = calculate(&input, &PlanConfig::default()).unwrap_err();
    assert!(matches!(err, RenoPlanError::InvalidInput { .. }));
    assert!(err.to_string().contains("renovation_cost_manual"));
}

#[test]
fn test_input_from_form_json() {
    let json = r#"{
        "self_funds": 300,
        "monthly_payment": 10,
        "interest_rate_percent": 0.8,
        "required_area": 60,
        "loan_term_years": 35,
        "renovation_mode": "full",
        "bonus_payment": 10,
        "memo": "first viewing"
    }"#;
    let input: CalculationInput = serde_json::from_str(json).unwrap();
    assert_eq!(input.total_loan_input, None);
    let out = calculate(&input, &PlanConfig::default()).unwrap();
    assert_eq!(out.result.renovation_cost_with_tax, dec!(1177));
    assert_eq!(out.result.memo, "first viewing");

    let value = serde_json::to_value(&out).unwrap();
    assert_eq!(value["result"]["solve_direction"], "from_monthly_payment");
    assert_eq!(value["assumptions"]["config"]["unit_policy"]["enabled"], true);
    assert!(value["warnings"].as_array().unwrap().is_empty());
}
