use serde::Serialize;
use tracing::debug;

use super::engine::{MAX_ANNUAL_RETURN, MAX_HORIZON_YEARS, MIN_ANNUAL_RETURN, project_growth};
use super::error::{PlannerError, Result, ensure_finite, require_range, require_years};
use super::types::{GrowthInputs, ProjectionPoint, round_to_cents};

pub const LIFE_EXPECTANCY: u32 = 85;
pub const HEALTH_AND_EDUCATION_CESS: f64 = 0.03;
const MAX_LOAN_RATE_PERCENT: f64 = 50.0;

#[derive(Debug, Clone, Copy)]
pub struct RetirementInputs {
    pub current_age: u32,
    pub retirement_age: u32,
    pub current_savings: f64,
    pub monthly_savings: f64,
    pub annual_return: f64,
    pub annual_inflation: f64,
    pub monthly_expenses: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementPlan {
    pub years_to_retirement: u32,
    pub years_in_retirement: u32,
    pub monthly_needed: f64,
    pub corpus_needed: f64,
    pub corpus_projected: f64,
    pub shortfall: f64,
    pub sufficient: bool,
    pub projections: Vec<ProjectionPoint>,
}

pub fn calculate_retirement(inputs: &RetirementInputs) -> Result<RetirementPlan> {
    if inputs.retirement_age <= inputs.current_age {
        return Err(PlannerError::invalid(
            "retirement_age",
            "must be greater than current_age",
        ));
    }
    if inputs.retirement_age >= LIFE_EXPECTANCY {
        return Err(PlannerError::invalid(
            "retirement_age",
            format!("must be < {LIFE_EXPECTANCY}"),
        ));
    }
    let savings = require_range("current_savings", inputs.current_savings, 0.0, 1e10)?;
    let monthly = require_range("monthly_savings", inputs.monthly_savings, 0.0, 1e8)?;
    let rate = require_range(
        "annual_return",
        inputs.annual_return,
        MIN_ANNUAL_RETURN,
        MAX_ANNUAL_RETURN,
    )?;
    let inflation = require_range("annual_inflation", inputs.annual_inflation, 0.0, 0.5)?;
    let expenses = require_range("monthly_expenses", inputs.monthly_expenses, 0.0, 1e8)?;
    debug!(
        current_age = inputs.current_age,
        retirement_age = inputs.retirement_age,
        "calculating retirement corpus"
    );

    let years_to_retirement = inputs.retirement_age - inputs.current_age;
    let years_in_retirement = LIFE_EXPECTANCY - inputs.retirement_age;

    let monthly_needed = expenses * (1.0 + inflation).powi(years_to_retirement as i32);
    let corpus_needed = monthly_needed * 12.0 * years_in_retirement as f64;
    ensure_finite("retirement corpus needed", corpus_needed)?;

    let growth = project_growth(&GrowthInputs {
        initial_amount: savings,
        monthly_contribution: monthly,
        annual_rate: rate,
        horizon_years: years_to_retirement,
        reporting_interval_months: 12,
    })?;
    let corpus_projected = growth.final_value;
    let corpus_needed = round_to_cents(corpus_needed);

    Ok(RetirementPlan {
        years_to_retirement,
        years_in_retirement,
        monthly_needed: round_to_cents(monthly_needed),
        corpus_needed,
        corpus_projected,
        shortfall: round_to_cents((corpus_needed - corpus_projected).max(0.0)),
        sufficient: corpus_projected >= corpus_needed,
        projections: growth.points,
    })
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxRegime {
    Old,
    New,
}

// (slab upper bound, marginal rate)
const OLD_REGIME_SLABS: [(f64, f64); 4] = [
    (250_000.0, 0.0),
    (500_000.0, 0.05),
    (1_000_000.0, 0.20),
    (f64::INFINITY, 0.30),
];

const NEW_REGIME_SLABS: [(f64, f64); 5] = [
    (300_000.0, 0.0),
    (600_000.0, 0.05),
    (900_000.0, 0.10),
    (1_200_000.0, 0.15),
    (f64::INFINITY, 0.20),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxResult {
    pub regime: TaxRegime,
    pub tax: f64,
    pub cess: f64,
    pub total_tax: f64,
    pub after_tax_income: f64,
    pub effective_rate: f64,
}

fn slab_tax(income: f64, slabs: &[(f64, f64)]) -> f64 {
    let mut tax = 0.0;
    let mut lower = 0.0;
    for &(upper, rate) in slabs {
        if income <= lower {
            break;
        }
        tax += (income.min(upper) - lower) * rate;
        lower = upper;
    }
    tax
}

pub fn calculate_income_tax(annual_income: f64, regime: TaxRegime) -> Result<TaxResult> {
    let income = require_range("income", annual_income, 0.0, 1e11)?;
    let tax = match regime {
        TaxRegime::Old => slab_tax(income, &OLD_REGIME_SLABS),
        TaxRegime::New => slab_tax(income, &NEW_REGIME_SLABS),
    };
    let cess = if tax > 0.0 {
        tax * HEALTH_AND_EDUCATION_CESS
    } else {
        0.0
    };
    let total_tax = tax + cess;

    Ok(TaxResult {
        regime,
        tax: round_to_cents(tax),
        cess: round_to_cents(cess),
        total_tax: round_to_cents(total_tax),
        after_tax_income: round_to_cents(income - total_tax),
        effective_rate: if income > 0.0 {
            round_to_cents(total_tax / income * 100.0)
        } else {
            0.0
        },
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationRow {
    pub month: u32,
    pub emi: f64,
    pub principal: f64,
    pub interest: f64,
    pub remaining: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanSchedule {
    pub emi: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub amortization: Vec<AmortizationRow>,
}

/// `annual_rate_percent` is a percentage, e.g. 9.5 for 9.5%.
pub fn calculate_loan_emi(principal: f64, annual_rate_percent: f64, years: u32) -> Result<LoanSchedule> {
    let principal = require_range("principal", principal, 0.0, 1e10)?;
    if principal == 0.0 {
        return Err(PlannerError::invalid("principal", "must be > 0"));
    }
    let rate_percent = require_range(
        "annual_rate",
        annual_rate_percent,
        0.0,
        MAX_LOAN_RATE_PERCENT,
    )?;
    let years = require_years("years", years, 1, MAX_HORIZON_YEARS)?;

    let months = years * 12;
    let monthly_rate = rate_percent / 12.0 / 100.0;
    let emi = if monthly_rate == 0.0 {
        principal / months as f64
    } else {
        let factor = (1.0 + monthly_rate).powi(months as i32);
        principal * monthly_rate * factor / (factor - 1.0)
    };
    let emi = ensure_finite("EMI", emi)?;

    let mut remaining = principal;
    let mut amortization = Vec::with_capacity(months as usize);
    for month in 1..=months {
        let interest = remaining * monthly_rate;
        let principal_paid = emi - interest;
        remaining -= principal_paid;
        amortization.push(AmortizationRow {
            month,
            emi: round_to_cents(emi),
            principal: round_to_cents(principal_paid),
            interest: round_to_cents(interest),
            remaining: round_to_cents(remaining.max(0.0)),
        });
    }

    let total_payment = emi * months as f64;
    Ok(LoanSchedule {
        emi: round_to_cents(emi),
        total_payment: round_to_cents(total_payment),
        total_interest: round_to_cents(total_payment - principal),
        amortization,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LumpSumResult {
    pub total_invested: f64,
    pub final_value: f64,
    pub gain: f64,
    pub gain_percentage: f64,
}

pub fn calculate_lump_sum(amount: f64, annual_return: f64, years: u32) -> Result<LumpSumResult> {
    let amount = require_range("amount", amount, 0.0, 1e8)?;
    if amount == 0.0 {
        return Err(PlannerError::invalid("amount", "must be > 0"));
    }
    let growth = project_growth(&GrowthInputs {
        initial_amount: amount,
        monthly_contribution: 0.0,
        annual_rate: annual_return,
        horizon_years: years,
        reporting_interval_months: 12,
    })
    .map_err(|err| match err {
        PlannerError::InvalidInput { field, message } if field == "annual_rate" => {
            PlannerError::invalid("annual_return", message)
        }
        PlannerError::InvalidInput { field, message } if field == "horizon_years" => {
            PlannerError::invalid("years", message)
        }
        other => other,
    })?;

    let gain = growth.final_value - amount;
    Ok(LumpSumResult {
        total_invested: round_to_cents(amount),
        final_value: growth.final_value,
        gain: round_to_cents(gain),
        gain_percentage: round_to_cents(gain / amount * 100.0),
    })
}
