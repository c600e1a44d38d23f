use tracing::debug;

use super::allocation::{allocate, blended_returns, normalize_allocation, risk_profile};
use super::error::{PlannerError, Result, ensure_finite, require_range, require_years};
use super::insights::generate_insights;
use super::types::{
    ComparisonResult, GrowthInputs, GrowthProjection, PortfolioMetrics, PortfolioReport,
    PortfolioRequest, ProjectionPoint, ReturnAssumption, ScenarioResult, ScenarioSet, SipResult,
    Strategy, StrategyOutcome, round_to_cents,
};

pub const MIN_ANNUAL_RETURN: f64 = -0.5;
pub const MAX_ANNUAL_RETURN: f64 = 1.0;
pub const MAX_HORIZON_YEARS: u32 = 50;
pub const MAX_PROJECTION_YEARS: u32 = 100;

pub const EMERGENCY_FUND_MONTHS: f64 = 6.0;
pub const INVESTABLE_SHARE_OF_SAVINGS: f64 = 0.5;

const MONTHS_PER_YEAR: u32 = 12;

// Contribution lands first, then the whole balance grows for the month.
struct RawProjection {
    final_value: f64,
    points: Vec<ProjectionPoint>,
}

fn accumulate(
    initial_amount: f64,
    monthly_contribution: f64,
    annual_rate: f64,
    months: u32,
    interval: u32,
) -> RawProjection {
    let growth = 1.0 + annual_rate / MONTHS_PER_YEAR as f64;
    let mut points = Vec::with_capacity((months / interval) as usize + 1);
    let mut balance = initial_amount;
    points.push(report_point(0, balance));

    for month in 1..=months {
        balance = (balance + monthly_contribution) * growth;
        if month % interval == 0 {
            points.push(report_point(month, balance));
        }
    }

    RawProjection {
        final_value: balance,
        points,
    }
}

fn report_point(month: u32, balance: f64) -> ProjectionPoint {
    ProjectionPoint {
        month,
        year: month as f64 / MONTHS_PER_YEAR as f64,
        value: round_to_cents(balance),
    }
}

fn cents(what: &str, value: f64) -> Result<f64> {
    ensure_finite(what, round_to_cents(value))
}

fn check_points(points: &[ProjectionPoint]) -> Result<()> {
    for point in points {
        ensure_finite("projection point", point.value)?;
    }
    Ok(())
}

fn validate_rate(field: &str, annual_rate: f64) -> Result<f64> {
    require_range(field, annual_rate, MIN_ANNUAL_RETURN, MAX_ANNUAL_RETURN)
}

fn validate_interval(interval: u32) -> Result<u32> {
    if interval == 0 || MONTHS_PER_YEAR % interval != 0 {
        return Err(PlannerError::invalid(
            "reporting_interval_months",
            "must be one of 1, 2, 3, 4, 6 or 12",
        ));
    }
    Ok(interval)
}

fn validate_non_negative(field: &str, value: f64) -> Result<f64> {
    require_range(field, value, 0.0, f64::MAX)
}

pub fn project_growth(inputs: &GrowthInputs) -> Result<GrowthProjection> {
    let initial = validate_non_negative("initial_amount", inputs.initial_amount)?;
    let contribution = validate_non_negative("monthly_contribution", inputs.monthly_contribution)?;
    let rate = validate_rate("annual_rate", inputs.annual_rate)?;
    let years = require_years("horizon_years", inputs.horizon_years, 1, MAX_PROJECTION_YEARS)?;
    let interval = validate_interval(inputs.reporting_interval_months)?;

    let months = years * MONTHS_PER_YEAR;
    let raw = accumulate(initial, contribution, rate, months, interval);
    check_points(&raw.points)?;

    Ok(GrowthProjection {
        final_value: cents("final value", raw.final_value)?,
        total_invested: cents("total invested", initial + contribution * months as f64)?,
        points: raw.points,
    })
}

fn scenario(
    initial_amount: f64,
    monthly_contribution: f64,
    annual_rate: f64,
    months: u32,
    interval: u32,
) -> Result<ScenarioResult> {
    let raw = accumulate(
        initial_amount,
        monthly_contribution,
        annual_rate,
        months,
        interval,
    );
    check_points(&raw.points)?;
    let total_invested = initial_amount + monthly_contribution * months as f64;
    Ok(ScenarioResult {
        annual_return: annual_rate,
        final_value: cents("scenario final value", raw.final_value)?,
        total_invested: cents("scenario total invested", total_invested)?,
        gain: cents("scenario gain", raw.final_value - total_invested)?,
        projections: raw.points,
    })
}

pub fn run_scenarios(
    initial_amount: f64,
    monthly_contribution: f64,
    horizon_years: u32,
    returns: ReturnAssumption,
    reporting_interval_months: u32,
) -> Result<ScenarioSet> {
    let initial = validate_non_negative("initial_investment", initial_amount)?;
    let contribution = validate_non_negative("monthly_contribution", monthly_contribution)?;
    let years = require_years("horizon_years", horizon_years, 1, MAX_PROJECTION_YEARS)?;
    let interval = validate_interval(reporting_interval_months)?;
    validate_rate("returns.worst", returns.worst)?;
    validate_rate("returns.expected", returns.expected)?;
    validate_rate("returns.best", returns.best)?;
    if returns.worst > returns.expected || returns.expected > returns.best {
        return Err(PlannerError::invalid(
            "returns",
            "must satisfy worst <= expected <= best",
        ));
    }

    let months = years * MONTHS_PER_YEAR;
    Ok(ScenarioSet {
        worst: scenario(initial, contribution, returns.worst, months, interval)?,
        expected: scenario(initial, contribution, returns.expected, months, interval)?,
        best: scenario(initial, contribution, returns.best, months, interval)?,
    })
}

// No range checks: the comparison feeds per-month amounts below the SIP minimum.
fn sip_growth(monthly_amount: f64, annual_rate: f64, years: u32) -> Result<(SipResult, f64)> {
    let months = years * MONTHS_PER_YEAR;
    let raw = accumulate(0.0, monthly_amount, annual_rate, months, 1);
    let final_value = ensure_finite("SIP final value", raw.final_value)?;
    check_points(&raw.points)?;
    let total_invested = monthly_amount * months as f64;
    let gain = final_value - total_invested;
    let gain_percentage = if total_invested > 0.0 {
        gain / total_invested * 100.0
    } else {
        0.0
    };

    let result = SipResult {
        monthly_amount,
        months,
        total_invested: round_to_cents(total_invested),
        final_value: cents("SIP final value", final_value)?,
        gain: round_to_cents(gain),
        gain_percentage: round_to_cents(gain_percentage),
        monthly_series: raw.points,
    };
    Ok((result, final_value))
}

pub fn calculate_sip(monthly_amount: f64, annual_return: f64, years: u32) -> Result<SipResult> {
    let monthly_amount = require_range("monthly_sip", monthly_amount, 100.0, 10_000_000.0)?;
    let annual_return = validate_rate("annual_return", annual_return)?;
    let years = require_years("years", years, 1, MAX_HORIZON_YEARS)?;
    debug!(monthly_amount, annual_return, years, "calculating SIP");

    let (result, _) = sip_growth(monthly_amount, annual_return, years)?;
    Ok(result)
}

pub fn classify_advantage(advantage: f64) -> Strategy {
    let cents = round_to_cents(advantage);
    if cents > 0.0 {
        Strategy::Sip
    } else if cents < 0.0 {
        Strategy::LumpSum
    } else {
        Strategy::Equal
    }
}

pub fn calculate_comparison(amount: f64, annual_return: f64, years: u32) -> Result<ComparisonResult> {
    let amount = require_range("amount", amount, 1_000.0, 100_000_000.0)?;
    let annual_return = validate_rate("annual_return", annual_return)?;
    let years = require_years("years", years, 1, MAX_HORIZON_YEARS)?;
    debug!(amount, annual_return, years, "comparing lump sum with SIP");

    let months = years * MONTHS_PER_YEAR;
    let lump = accumulate(amount, 0.0, annual_return, months, MONTHS_PER_YEAR);
    let lump_final = ensure_finite("lump sum final value", lump.final_value)?;
    let (_, sip_final) = sip_growth(amount / months as f64, annual_return, years)?;

    let advantage = round_to_cents(sip_final - lump_final);
    Ok(ComparisonResult {
        lump_sum: StrategyOutcome {
            invested: round_to_cents(amount),
            final_value: round_to_cents(lump_final),
            gain: round_to_cents(lump_final - amount),
        },
        sip: StrategyOutcome {
            invested: round_to_cents(amount),
            final_value: round_to_cents(sip_final),
            gain: round_to_cents(sip_final - amount),
        },
        advantage,
        better_strategy: classify_advantage(advantage),
    })
}

pub fn portfolio_metrics(
    monthly_income: f64,
    monthly_expenses: f64,
    initial_investment: f64,
) -> PortfolioMetrics {
    let monthly_savings = (monthly_income - monthly_expenses).max(0.0);
    let annual_savings = monthly_savings * 12.0;
    let savings_rate = if monthly_income > 0.0 {
        monthly_savings / monthly_income * 100.0
    } else {
        0.0
    };
    let emergency_coverage_months = if monthly_expenses > 0.0 {
        Some(round_to_cents(initial_investment / monthly_expenses))
    } else {
        None
    };

    PortfolioMetrics {
        monthly_savings: round_to_cents(monthly_savings),
        annual_savings: round_to_cents(annual_savings),
        emergency_fund: round_to_cents((monthly_expenses * EMERGENCY_FUND_MONTHS).max(0.0)),
        total_investable: round_to_cents(annual_savings * INVESTABLE_SHARE_OF_SAVINGS),
        savings_rate: round_to_cents(savings_rate),
        emergency_coverage_months,
    }
}

fn validate_portfolio_request(request: &PortfolioRequest) -> Result<()> {
    let income = require_range("income", request.monthly_income, 1_000.0, 50_000_000.0)?;
    let expenses = require_range("expenses", request.monthly_expenses, 0.0, 50_000_000.0)?;
    require_range(
        "initial_investment",
        request.initial_investment,
        0.0,
        100_000_000.0,
    )?;
    require_range(
        "monthly_contribution",
        request.monthly_contribution,
        0.0,
        1_000_000.0,
    )?;
    require_years(
        "investment_horizon",
        request.horizon_years,
        1,
        MAX_HORIZON_YEARS,
    )?;
    if income <= expenses {
        return Err(PlannerError::invalid(
            "expenses",
            "income must be greater than expenses",
        ));
    }
    Ok(())
}

pub fn calculate_portfolio(request: &PortfolioRequest) -> Result<PortfolioReport> {
    validate_portfolio_request(request)?;
    debug!(
        risk_score = request.risk_score,
        horizon_years = request.horizon_years,
        custom_allocation = request.custom_allocation.is_some(),
        "calculating portfolio"
    );

    let profile = risk_profile(request.risk_score)?;
    let portfolio = match request.custom_allocation {
        Some(custom) => normalize_allocation(custom)?,
        None => allocate(request.risk_score)?,
    };
    let returns = blended_returns(&portfolio);
    let scenarios = run_scenarios(
        request.initial_investment,
        request.monthly_contribution,
        request.horizon_years,
        returns,
        1,
    )?;
    let metrics = portfolio_metrics(
        request.monthly_income,
        request.monthly_expenses,
        request.initial_investment,
    );
    let insights = generate_insights(&metrics, &scenarios);

    Ok(PortfolioReport {
        profile,
        metrics,
        portfolio,
        returns,
        scenarios,
        insights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{CustomAllocation, RiskLabel};
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    fn assert_approx_tol(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}, tolerance {tol}"
        );
    }

    fn sample_request() -> PortfolioRequest {
        PortfolioRequest {
            monthly_income: 50_000.0,
            monthly_expenses: 30_000.0,
            initial_investment: 100_000.0,
            monthly_contribution: 5_000.0,
            horizon_years: 10,
            risk_score: 10,
            custom_allocation: None,
        }
    }

    fn growth(initial: f64, contribution: f64, rate: f64, years: u32) -> GrowthInputs {
        GrowthInputs {
            initial_amount: initial,
            monthly_contribution: contribution,
            annual_rate: rate,
            horizon_years: years,
            reporting_interval_months: 1,
        }
    }

    #[test]
    fn sip_reference_example_matches_closed_form() {
        let result = calculate_sip(5_000.0, 0.12, 10).expect("valid SIP");
        assert_eq!(result.total_invested, 600_000.0);
        assert_eq!(result.months, 120);

        let r: f64 = 0.01;
        let closed_form = 5_000.0 * ((1.0 + r).powi(120) - 1.0) / r * (1.0 + r);
        assert_approx_tol(result.final_value, closed_form, 0.01);
        assert_approx_tol(result.final_value, 1_161_695.0, 1.0);
        assert_approx_tol(result.gain, result.final_value - 600_000.0, 0.011);
    }

    #[test]
    fn sip_series_starts_at_zero_and_has_one_point_per_month() {
        let result = calculate_sip(1_000.0, 0.08, 3).expect("valid SIP");
        assert_eq!(result.monthly_series.len(), 3 * 12 + 1);
        assert_eq!(result.monthly_series[0].value, 0.0);
        assert_eq!(result.monthly_series[0].month, 0);
        let first = result.monthly_series[1].value;
        assert_approx_tol(first, 1_000.0 * (1.0 + 0.08 / 12.0), 0.005);
        assert_eq!(
            result.monthly_series.last().map(|p| p.value),
            Some(result.final_value)
        );
    }

    #[test]
    fn sip_with_zero_rate_returns_exactly_what_was_invested() {
        let result = calculate_sip(2_500.0, 0.0, 7).expect("valid SIP");
        assert_eq!(result.final_value, result.total_invested);
        assert_eq!(result.gain, 0.0);
        assert_eq!(result.gain_percentage, 0.0);
    }

    #[test]
    fn sip_rejects_out_of_range_inputs() {
        assert_eq!(
            calculate_sip(50.0, 0.1, 10).expect_err("too small").field(),
            Some("monthly_sip")
        );
        assert_eq!(
            calculate_sip(5_000.0, 1.5, 10).expect_err("rate").field(),
            Some("annual_return")
        );
        assert_eq!(
            calculate_sip(5_000.0, 0.1, 0).expect_err("years").field(),
            Some("years")
        );
    }

    #[test]
    fn projector_without_contributions_is_pure_compounding() {
        let projection = project_growth(&growth(100_000.0, 0.0, 0.09, 15)).expect("valid");
        let expected = 100_000.0 * (1.0 + 0.09 / 12.0_f64).powi(180);
        assert_approx_tol(projection.final_value, expected, 0.01);
        assert_eq!(projection.total_invested, 100_000.0);
    }

    #[test]
    fn projector_reports_yearly_points_when_asked() {
        let mut inputs = growth(10_000.0, 500.0, 0.07, 5);
        inputs.reporting_interval_months = 12;
        let projection = project_growth(&inputs).expect("valid");
        let months: Vec<u32> = projection.points.iter().map(|p| p.month).collect();
        assert_eq!(months, vec![0, 12, 24, 36, 48, 60]);
        assert_eq!(projection.points[0].value, 10_000.0);
        assert_eq!(projection.points[5].year, 5.0);
    }

    #[test]
    fn projector_accepts_negative_rates_and_rejects_bad_intervals() {
        let projection = project_growth(&growth(10_000.0, 0.0, -0.1, 2)).expect("negative rate");
        assert!(projection.final_value < 10_000.0);

        let mut inputs = growth(10_000.0, 0.0, 0.05, 2);
        inputs.reporting_interval_months = 5;
        let err = project_growth(&inputs).expect_err("5 does not divide 12");
        assert_eq!(err.field(), Some("reporting_interval_months"));
    }

    #[test]
    fn projector_rejects_negative_amounts() {
        let err = project_growth(&growth(-1.0, 0.0, 0.05, 2)).expect_err("negative");
        assert_eq!(err.field(), Some("initial_amount"));
        let err = project_growth(&growth(0.0, -5.0, 0.05, 2)).expect_err("negative");
        assert_eq!(err.field(), Some("monthly_contribution"));
    }

    #[test]
    fn projector_overflow_is_a_computation_error() {
        let mut inputs = growth(1e307, 0.0, 0.0, 1);
        inputs.reporting_interval_months = 12;
        let err = project_growth(&inputs).expect_err("overflows at cents");
        assert_eq!(err.kind(), "ComputationError");

        let err = project_growth(&growth(0.0, 1e306, 0.0, 1)).expect_err("overflows");
        assert_eq!(err.kind(), "ComputationError");
    }

    #[test]
    fn comparison_at_zero_rate_is_a_draw() {
        let result = calculate_comparison(100_000.0, 0.0, 10).expect("valid");
        assert_eq!(result.lump_sum.final_value, 100_000.0);
        assert_eq!(result.sip.final_value, 100_000.0);
        assert_eq!(result.advantage, 0.0);
        assert_eq!(result.better_strategy, Strategy::Equal);
    }

    #[test]
    fn comparison_favours_lump_sum_when_returns_are_positive() {
        let result = calculate_comparison(100_000.0, 0.10, 10).expect("valid");
        assert!(result.lump_sum.final_value > result.sip.final_value);
        assert!(result.advantage < 0.0);
        assert_eq!(result.better_strategy, Strategy::LumpSum);
        assert_eq!(result.lump_sum.invested, 100_000.0);
        assert_eq!(result.sip.invested, 100_000.0);
    }

    #[test]
    fn comparison_favours_sip_when_returns_are_negative() {
        let result = calculate_comparison(100_000.0, -0.2, 5).expect("valid");
        assert!(result.advantage > 0.0);
        assert_eq!(result.better_strategy, Strategy::Sip);
    }

    #[test]
    fn advantage_classification_ignores_sub_cent_noise() {
        assert_eq!(classify_advantage(0.004), Strategy::Equal);
        assert_eq!(classify_advantage(-0.004), Strategy::Equal);
        assert_eq!(classify_advantage(0.01), Strategy::Sip);
        assert_eq!(classify_advantage(-12.5), Strategy::LumpSum);
    }

    #[test]
    fn scenario_gain_subtracts_everything_contributed() {
        let returns = ReturnAssumption {
            worst: 0.04,
            expected: 0.08,
            best: 0.12,
        };
        let set = run_scenarios(50_000.0, 2_000.0, 10, returns, 12).expect("valid");
        for scenario in [&set.worst, &set.expected, &set.best] {
            assert_eq!(scenario.total_invested, 50_000.0 + 2_000.0 * 120.0);
            assert_approx_tol(
                scenario.gain,
                scenario.final_value - scenario.total_invested,
                0.011,
            );
            assert_eq!(scenario.projections.len(), 11);
        }
    }

    #[test]
    fn scenarios_reject_unordered_returns() {
        let returns = ReturnAssumption {
            worst: 0.09,
            expected: 0.08,
            best: 0.12,
        };
        let err = run_scenarios(1_000.0, 0.0, 5, returns, 1).expect_err("unordered");
        assert_eq!(err.field(), Some("returns"));
    }

    #[test]
    fn scenario_overflow_is_a_computation_error() {
        let returns = ReturnAssumption {
            worst: 0.0,
            expected: 0.0,
            best: 0.0,
        };
        let err = run_scenarios(1e307, 0.0, 1, returns, 12).expect_err("overflows");
        assert!(matches!(err, PlannerError::Computation(_)));
    }

    #[test]
    fn metrics_follow_household_budget() {
        let metrics = portfolio_metrics(50_000.0, 30_000.0, 90_000.0);
        assert_eq!(metrics.monthly_savings, 20_000.0);
        assert_eq!(metrics.annual_savings, 240_000.0);
        assert_eq!(metrics.emergency_fund, 180_000.0);
        assert_eq!(metrics.total_investable, 120_000.0);
        assert_eq!(metrics.savings_rate, 40.0);
        assert_eq!(metrics.emergency_coverage_months, Some(3.0));

        let metrics = portfolio_metrics(10_000.0, 0.0, 5_000.0);
        assert_eq!(metrics.emergency_coverage_months, None);
        assert_eq!(metrics.emergency_fund, 0.0);
    }

    #[test]
    fn portfolio_report_carries_profile_allocation_and_ordered_scenarios() {
        let report = calculate_portfolio(&sample_request()).expect("valid request");
        assert_eq!(report.profile.label, RiskLabel::Balanced);
        assert_eq!(report.portfolio.total(), 100);
        assert_eq!(report.portfolio.equity, 50);
        assert!(report.scenarios.worst.final_value <= report.scenarios.expected.final_value);
        assert!(report.scenarios.expected.final_value <= report.scenarios.best.final_value);
        assert_eq!(report.scenarios.expected.projections.len(), 121);
        assert!(!report.insights.is_empty());
    }

    #[test]
    fn portfolio_prefers_custom_allocation() {
        let mut request = sample_request();
        request.custom_allocation = Some(CustomAllocation {
            equity: 100.0,
            debt: 0.0,
            gold: 0.0,
            cash: 0.0,
        });
        let report = calculate_portfolio(&request).expect("valid request");
        assert_eq!(report.portfolio.equity, 100);
        assert_approx_tol(report.returns.expected, 0.10, 1e-12);
        assert_eq!(report.profile.label, RiskLabel::Balanced);
    }

    #[test]
    fn portfolio_rejects_expenses_at_or_above_income() {
        let mut request = sample_request();
        request.monthly_expenses = request.monthly_income;
        let err = calculate_portfolio(&request).expect_err("no surplus");
        assert_eq!(err.field(), Some("expenses"));
    }

    #[test]
    fn portfolio_rejects_out_of_range_fields() {
        let mut request = sample_request();
        request.risk_score = -1;
        assert_eq!(
            calculate_portfolio(&request).expect_err("score").field(),
            Some("risk_score")
        );

        let mut request = sample_request();
        request.horizon_years = 0;
        assert_eq!(
            calculate_portfolio(&request).expect_err("horizon").field(),
            Some("investment_horizon")
        );

        let mut request = sample_request();
        request.initial_investment = -10.0;
        assert_eq!(
            calculate_portfolio(&request).expect_err("initial").field(),
            Some("initial_investment")
        );
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let a = calculate_portfolio(&sample_request()).expect("valid");
        let b = calculate_portfolio(&sample_request()).expect("valid");
        assert_eq!(a, b);

        let a = calculate_comparison(250_000.0, 0.11, 17).expect("valid");
        let b = calculate_comparison(250_000.0, 0.11, 17).expect("valid");
        assert_eq!(a.advantage.to_bits(), b.advantage.to_bits());
        assert_eq!(a.sip.final_value.to_bits(), b.sip.final_value.to_bits());
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_scenarios_are_ordered_for_ordered_rates(
            initial in 0u32..5_000_000,
            contribution in 0u32..200_000,
            years in 1u32..=50,
            worst_bp in -5_000i32..10_000,
            spread_a_bp in 0i32..2_000,
            spread_b_bp in 0i32..2_000
        ) {
            let worst = worst_bp as f64 / 10_000.0;
            let expected = (worst + spread_a_bp as f64 / 10_000.0).min(MAX_ANNUAL_RETURN);
            let best = (expected + spread_b_bp as f64 / 10_000.0).min(MAX_ANNUAL_RETURN);
            let returns = ReturnAssumption { worst, expected, best };

            let set = run_scenarios(initial as f64, contribution as f64, years, returns, 12)
                .expect("valid scenario inputs");
            prop_assert!(set.worst.final_value <= set.expected.final_value);
            prop_assert!(set.expected.final_value <= set.best.final_value);
        }

        #[test]
        fn prop_sip_total_invested_is_independent_of_rate(
            monthly_cents in 10_000u64..100_000_000,
            rate_bp in -5_000i32..=10_000,
            years in 1u32..=50
        ) {
            let monthly = monthly_cents as f64 / 100.0;
            let result = calculate_sip(monthly, rate_bp as f64 / 10_000.0, years)
                .expect("valid SIP");
            prop_assert_eq!(result.total_invested, round_to_cents(monthly * (years * 12) as f64));
            prop_assert_eq!(result.monthly_series.len() as u32, years * 12 + 1);
        }

        #[test]
        fn prop_sip_zero_rate_has_no_compounding(
            monthly in 100u32..1_000_000,
            years in 1u32..=50
        ) {
            let result = calculate_sip(monthly as f64, 0.0, years).expect("valid SIP");
            prop_assert_eq!(result.final_value, result.total_invested);
        }

        #[test]
        fn prop_comparison_zero_rate_returns_the_amount(
            amount in 1_000u32..100_000_000,
            years in 1u32..=50
        ) {
            let result = calculate_comparison(amount as f64, 0.0, years).expect("valid");
            prop_assert_eq!(result.lump_sum.final_value, amount as f64);
            prop_assert_eq!(result.sip.final_value, amount as f64);
            prop_assert_eq!(result.advantage, 0.0);
        }

        #[test]
        fn prop_allocation_scores_produce_ordered_portfolio_scenarios(
            score in 0i64..=20,
            years in 1u32..=30
        ) {
            let mut request = sample_request();
            request.risk_score = score;
            request.horizon_years = years;
            let report = calculate_portfolio(&request).expect("valid request");
            prop_assert_eq!(report.portfolio.total(), 100);
            prop_assert!(report.scenarios.worst.final_value <= report.scenarios.expected.final_value);
            prop_assert!(report.scenarios.expected.final_value <= report.scenarios.best.final_value);
        }
    }
}
