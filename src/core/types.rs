use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum RiskLabel {
    Conservative,
    Balanced,
    Aggressive,
    MaximumGrowth,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfile {
    pub score: u32,
    pub label: RiskLabel,
    pub title: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum AssetClass {
    Equity,
    Debt,
    Gold,
    Cash,
}

impl AssetClass {
    pub const ALL: [AssetClass; 4] = [
        AssetClass::Equity,
        AssetClass::Debt,
        AssetClass::Gold,
        AssetClass::Cash,
    ];
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssetAllocation {
    pub equity: u32,
    pub debt: u32,
    pub gold: u32,
    pub cash: u32,
}

impl AssetAllocation {
    pub fn weight(&self, class: AssetClass) -> u32 {
        match class {
            AssetClass::Equity => self.equity,
            AssetClass::Debt => self.debt,
            AssetClass::Gold => self.gold,
            AssetClass::Cash => self.cash,
        }
    }

    pub fn total(&self) -> u32 {
        self.equity + self.debt + self.gold + self.cash
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ReturnAssumption {
    pub worst: f64,
    pub expected: f64,
    pub best: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub month: u32,
    pub year: f64,
    pub value: f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GrowthInputs {
    pub initial_amount: f64,
    pub monthly_contribution: f64,
    pub annual_rate: f64,
    pub horizon_years: u32,
    pub reporting_interval_months: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthProjection {
    pub final_value: f64,
    pub total_invested: f64,
    pub points: Vec<ProjectionPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub annual_return: f64,
    pub final_value: f64,
    pub total_invested: f64,
    pub gain: f64,
    pub projections: Vec<ProjectionPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSet {
    pub worst: ScenarioResult,
    pub expected: ScenarioResult,
    pub best: ScenarioResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SipResult {
    pub monthly_amount: f64,
    pub months: u32,
    pub total_invested: f64,
    pub final_value: f64,
    pub gain: f64,
    pub gain_percentage: f64,
    pub monthly_series: Vec<ProjectionPoint>,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct StrategyOutcome {
    pub invested: f64,
    #[serde(rename = "final")]
    pub final_value: f64,
    pub gain: f64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Strategy {
    #[serde(rename = "SIP")]
    Sip,
    #[serde(rename = "Lump Sum")]
    LumpSum,
    Equal,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub lump_sum: StrategyOutcome,
    pub sip: StrategyOutcome,
    pub advantage: f64,
    pub better_strategy: Strategy,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetrics {
    pub monthly_savings: f64,
    pub annual_savings: f64,
    pub emergency_fund: f64,
    pub total_investable: f64,
    pub savings_rate: f64,
    pub emergency_coverage_months: Option<f64>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Positive,
    Warning,
    Info,
    Projection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub icon: &'static str,
    pub title: &'static str,
    pub message: String,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CustomAllocation {
    pub equity: f64,
    pub debt: f64,
    pub gold: f64,
    pub cash: f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PortfolioRequest {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub initial_investment: f64,
    pub monthly_contribution: f64,
    pub horizon_years: u32,
    pub risk_score: i64,
    pub custom_allocation: Option<CustomAllocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioReport {
    pub profile: RiskProfile,
    pub metrics: PortfolioMetrics,
    pub portfolio: AssetAllocation,
    pub returns: ReturnAssumption,
    pub scenarios: ScenarioSet,
    pub insights: Vec<Insight>,
}

pub fn round_to_cents(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}
