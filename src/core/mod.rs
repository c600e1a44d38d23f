mod allocation;
mod engine;
mod error;
mod insights;
mod planner;
mod slot;
mod types;

pub use allocation::{
    MAX_RISK_SCORE, MIN_RISK_SCORE, allocate, blended_returns, classify_risk,
    normalize_allocation, return_assumption, risk_profile,
};
pub use engine::{
    calculate_comparison, calculate_portfolio, calculate_sip, classify_advantage,
    portfolio_metrics, project_growth, run_scenarios,
};
pub use error::{PlannerError, Result};
pub use insights::generate_insights;
pub use planner::{
    AmortizationRow, LoanSchedule, LumpSumResult, RetirementInputs, RetirementPlan, TaxRegime,
    TaxResult, calculate_income_tax, calculate_lump_sum, calculate_loan_emi,
    calculate_retirement,
};
pub use slot::ActiveResult;
pub use types::{
    AssetAllocation, AssetClass, ComparisonResult, CustomAllocation, GrowthInputs,
    GrowthProjection, Insight, InsightKind, PortfolioMetrics, PortfolioReport, PortfolioRequest,
    ProjectionPoint, ReturnAssumption, RiskLabel, RiskProfile, ScenarioResult, ScenarioSet,
    SipResult, Strategy, StrategyOutcome, round_to_cents,
};
