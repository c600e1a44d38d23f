use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;

use crate::core::{CustomAllocation, PortfolioRequest, RetirementInputs, TaxRegime};

#[derive(Parser, Debug)]
#[command(
    name = "portfolio-planner",
    about = "Risk-profiled portfolio planner with SIP, lump-sum and retirement calculators"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        #[arg(long, help = "Port to listen on; overrides PLANNER_LISTEN_ADDR")]
        port: Option<u16>,
    },
    /// Allocation, scenario projections and insights for a household
    Portfolio(PortfolioArgs),
    /// Recurring monthly investment growth
    Sip(SipArgs),
    /// Lump sum versus an equivalent SIP over the same horizon
    Compare(CompareArgs),
    /// One-off fund investment grown over the horizon
    LumpSum(CompareArgs),
    /// Retirement corpus needed versus projected
    Retirement(RetirementArgs),
    /// Indian income tax under the old or new regime
    Tax(TaxArgs),
    /// Loan EMI with amortization schedule
    Emi(EmiArgs),
}

#[derive(Args, Debug, Clone)]
pub struct PortfolioArgs {
    #[arg(long, default_value_t = 50_000.0, help = "Monthly income")]
    pub income: f64,
    #[arg(long, default_value_t = 30_000.0, help = "Monthly expenses")]
    pub expenses: f64,
    #[arg(long, default_value_t = 100_000.0)]
    pub initial_investment: f64,
    #[arg(long, default_value_t = 5_000.0)]
    pub monthly_contribution: f64,
    #[arg(long, default_value_t = 10, help = "Investment horizon in years")]
    pub investment_horizon: u32,
    #[arg(
        long,
        default_value_t = 10,
        allow_negative_numbers = true,
        help = "Risk questionnaire score, 0 to 20"
    )]
    pub risk_score: i64,
    #[arg(
        long,
        num_args = 4,
        value_names = ["EQUITY", "DEBT", "GOLD", "CASH"],
        help = "Custom allocation percentages overriding the risk profile"
    )]
    pub custom_allocation: Option<Vec<f64>>,
}

impl Default for PortfolioArgs {
    fn default() -> Self {
        Self {
            income: 50_000.0,
            expenses: 30_000.0,
            initial_investment: 100_000.0,
            monthly_contribution: 5_000.0,
            investment_horizon: 10,
            risk_score: 10,
            custom_allocation: None,
        }
    }
}

impl PortfolioArgs {
    pub fn into_request(self) -> Result<PortfolioRequest, String> {
        let custom_allocation = match self.custom_allocation.as_deref() {
            None => None,
            Some([equity, debt, gold, cash]) => Some(CustomAllocation {
                equity: *equity,
                debt: *debt,
                gold: *gold,
                cash: *cash,
            }),
            Some(_) => {
                return Err(
                    "--custom-allocation expects four values: equity debt gold cash".to_string(),
                );
            }
        };
        Ok(PortfolioRequest {
            monthly_income: self.income,
            monthly_expenses: self.expenses,
            initial_investment: self.initial_investment,
            monthly_contribution: self.monthly_contribution,
            horizon_years: self.investment_horizon,
            risk_score: self.risk_score,
            custom_allocation,
        })
    }
}

#[derive(Args, Debug, Clone, Copy)]
pub struct SipArgs {
    #[arg(long, default_value_t = 5_000.0)]
    pub monthly_sip: f64,
    #[arg(
        long,
        default_value_t = 0.10,
        allow_negative_numbers = true,
        help = "Annual return as a fraction, e.g. 0.12"
    )]
    pub annual_return: f64,
    #[arg(long, default_value_t = 10)]
    pub years: u32,
}

impl Default for SipArgs {
    fn default() -> Self {
        Self {
            monthly_sip: 5_000.0,
            annual_return: 0.10,
            years: 10,
        }
    }
}

#[derive(Args, Debug, Clone, Copy)]
pub struct CompareArgs {
    #[arg(long, default_value_t = 100_000.0)]
    pub amount: f64,
    #[arg(
        long,
        default_value_t = 0.10,
        allow_negative_numbers = true,
        help = "Annual return as a fraction, e.g. 0.12"
    )]
    pub annual_return: f64,
    #[arg(long, default_value_t = 10)]
    pub years: u32,
}

impl Default for CompareArgs {
    fn default() -> Self {
        Self {
            amount: 100_000.0,
            annual_return: 0.10,
            years: 10,
        }
    }
}

#[derive(Args, Debug, Clone, Copy)]
pub struct RetirementArgs {
    #[arg(long, default_value_t = 30)]
    pub current_age: u32,
    #[arg(long, default_value_t = 60)]
    pub retirement_age: u32,
    #[arg(long, default_value_t = 500_000.0)]
    pub current_savings: f64,
    #[arg(long, default_value_t = 20_000.0)]
    pub monthly_savings: f64,
    #[arg(long, default_value_t = 0.10, allow_negative_numbers = true)]
    pub annual_return: f64,
    #[arg(long, default_value_t = 0.06)]
    pub annual_inflation: f64,
    #[arg(long, default_value_t = 40_000.0, help = "Monthly expenses in today's money")]
    pub monthly_expenses: f64,
}

impl Default for RetirementArgs {
    fn default() -> Self {
        Self {
            current_age: 30,
            retirement_age: 60,
            current_savings: 500_000.0,
            monthly_savings: 20_000.0,
            annual_return: 0.10,
            annual_inflation: 0.06,
            monthly_expenses: 40_000.0,
        }
    }
}

impl From<RetirementArgs> for RetirementInputs {
    fn from(args: RetirementArgs) -> Self {
        RetirementInputs {
            current_age: args.current_age,
            retirement_age: args.retirement_age,
            current_savings: args.current_savings,
            monthly_savings: args.monthly_savings,
            annual_return: args.annual_return,
            annual_inflation: args.annual_inflation,
            monthly_expenses: args.monthly_expenses,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CliTaxRegime {
    Old,
    New,
}

impl From<CliTaxRegime> for TaxRegime {
    fn from(value: CliTaxRegime) -> Self {
        match value {
            CliTaxRegime::Old => TaxRegime::Old,
            CliTaxRegime::New => TaxRegime::New,
        }
    }
}

#[derive(Args, Debug, Clone, Copy)]
pub struct TaxArgs {
    #[arg(long, default_value_t = 1_200_000.0, help = "Annual taxable income")]
    pub income: f64,
    #[arg(long, value_enum, default_value_t = CliTaxRegime::New)]
    pub regime: CliTaxRegime,
}

impl Default for TaxArgs {
    fn default() -> Self {
        Self {
            income: 1_200_000.0,
            regime: CliTaxRegime::New,
        }
    }
}

#[derive(Args, Debug, Clone, Copy)]
pub struct EmiArgs {
    #[arg(long, default_value_t = 1_000_000.0)]
    pub principal: f64,
    #[arg(long, default_value_t = 9.0, help = "Annual interest rate in percent, e.g. 9.5")]
    pub annual_rate: f64,
    #[arg(long, default_value_t = 20)]
    pub years: u32,
}

impl Default for EmiArgs {
    fn default() -> Self {
        Self {
            principal: 1_000_000.0,
            annual_rate: 9.0,
            years: 20,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AllocationPayload {
    #[serde(alias = "Equity")]
    pub equity: Option<f64>,
    #[serde(alias = "Debt")]
    pub debt: Option<f64>,
    #[serde(alias = "Gold")]
    pub gold: Option<f64>,
    #[serde(alias = "Cash")]
    pub cash: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioPayload {
    pub income: Option<f64>,
    pub expenses: Option<f64>,
    #[serde(alias = "initial_investment")]
    pub initial_investment: Option<f64>,
    #[serde(alias = "monthly_contribution")]
    pub monthly_contribution: Option<f64>,
    #[serde(alias = "investment_horizon", alias = "horizonYears")]
    pub investment_horizon: Option<u32>,
    #[serde(alias = "risk_score")]
    pub risk_score: Option<i64>,
    #[serde(alias = "custom_allocation")]
    pub custom_allocation: Option<AllocationPayload>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SipPayload {
    #[serde(alias = "monthly_sip")]
    pub monthly_sip: Option<f64>,
    #[serde(alias = "annual_return")]
    pub annual_return: Option<f64>,
    pub years: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComparePayload {
    pub amount: Option<f64>,
    #[serde(alias = "annual_return")]
    pub annual_return: Option<f64>,
    pub years: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RetirementPayload {
    #[serde(alias = "current_age")]
    pub current_age: Option<u32>,
    #[serde(alias = "retirement_age")]
    pub retirement_age: Option<u32>,
    #[serde(alias = "current_savings")]
    pub current_savings: Option<f64>,
    #[serde(alias = "monthly_savings")]
    pub monthly_savings: Option<f64>,
    #[serde(alias = "annual_return")]
    pub annual_return: Option<f64>,
    #[serde(alias = "annual_inflation")]
    pub annual_inflation: Option<f64>,
    #[serde(alias = "monthly_expenses")]
    pub monthly_expenses: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaxPayload {
    pub income: Option<f64>,
    pub regime: Option<CliTaxRegime>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmiPayload {
    pub principal: Option<f64>,
    #[serde(alias = "annual_rate")]
    pub annual_rate: Option<f64>,
    pub years: Option<u32>,
}

pub fn portfolio_args_from_payload(payload: PortfolioPayload) -> PortfolioArgs {
    let mut args = PortfolioArgs::default();
    if let Some(v) = payload.income {
        args.income = v;
    }
    if let Some(v) = payload.expenses {
        args.expenses = v;
    }
    if let Some(v) = payload.initial_investment {
        args.initial_investment = v;
    }
    if let Some(v) = payload.monthly_contribution {
        args.monthly_contribution = v;
    }
    if let Some(v) = payload.investment_horizon {
        args.investment_horizon = v;
    }
    if let Some(v) = payload.risk_score {
        args.risk_score = v;
    }
    if let Some(alloc) = payload.custom_allocation {
        args.custom_allocation = Some(vec![
            alloc.equity.unwrap_or(0.0),
            alloc.debt.unwrap_or(0.0),
            alloc.gold.unwrap_or(0.0),
            alloc.cash.unwrap_or(0.0),
        ]);
    }
    args
}

pub fn sip_args_from_payload(payload: SipPayload) -> SipArgs {
    let mut args = SipArgs::default();
    if let Some(v) = payload.monthly_sip {
        args.monthly_sip = v;
    }
    if let Some(v) = payload.annual_return {
        args.annual_return = v;
    }
    if let Some(v) = payload.years {
        args.years = v;
    }
    args
}

pub fn compare_args_from_payload(payload: ComparePayload) -> CompareArgs {
    let mut args = CompareArgs::default();
    if let Some(v) = payload.amount {
        args.amount = v;
    }
    if let Some(v) = payload.annual_return {
        args.annual_return = v;
    }
    if let Some(v) = payload.years {
        args.years = v;
    }
    args
}

pub fn retirement_args_from_payload(payload: RetirementPayload) -> RetirementArgs {
    let mut args = RetirementArgs::default();
    if let Some(v) = payload.current_age {
        args.current_age = v;
    }
    if let Some(v) = payload.retirement_age {
        args.retirement_age = v;
    }
    if let Some(v) = payload.current_savings {
        args.current_savings = v;
    }
    if let Some(v) = payload.monthly_savings {
        args.monthly_savings = v;
    }
    if let Some(v) = payload.annual_return {
        args.annual_return = v;
    }
    if let Some(v) = payload.annual_inflation {
        args.annual_inflation = v;
    }
    if let Some(v) = payload.monthly_expenses {
        args.monthly_expenses = v;
    }
    args
}

pub fn tax_args_from_payload(payload: TaxPayload) -> TaxArgs {
    let mut args = TaxArgs::default();
    if let Some(v) = payload.income {
        args.income = v;
    }
    if let Some(v) = payload.regime {
        args.regime = v;
    }
    args
}

pub fn emi_args_from_payload(payload: EmiPayload) -> EmiArgs {
    let mut args = EmiArgs::default();
    if let Some(v) = payload.principal {
        args.principal = v;
    }
    if let Some(v) = payload.annual_rate {
        args.annual_rate = v;
    }
    if let Some(v) = payload.years {
        args.years = v;
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portfolio_payload_accepts_snake_and_camel_keys() {
        let payload: PortfolioPayload = serde_json::from_str(
            r#"{"income": 80000, "monthly_contribution": 7000, "riskScore": 17,
                "investment_horizon": 20,
                "custom_allocation": {"Equity": 60, "Debt": 30, "Gold": 10}}"#,
        )
        .expect("valid json");
        let args = portfolio_args_from_payload(payload);
        assert_eq!(args.income, 80_000.0);
        assert_eq!(args.expenses, 30_000.0);
        assert_eq!(args.monthly_contribution, 7_000.0);
        assert_eq!(args.investment_horizon, 20);
        assert_eq!(args.risk_score, 17);

        let request = args.into_request().expect("four weights");
        let custom = request.custom_allocation.expect("custom allocation");
        assert_eq!(custom.equity, 60.0);
        assert_eq!(custom.cash, 0.0);
    }

    #[test]
    fn empty_payloads_fall_back_to_defaults() {
        let sip = sip_args_from_payload(SipPayload::default());
        assert_eq!(sip.monthly_sip, 5_000.0);
        assert_eq!(sip.years, 10);

        let compare = compare_args_from_payload(ComparePayload::default());
        assert_eq!(compare.amount, 100_000.0);

        let tax = tax_args_from_payload(
            serde_json::from_str(r#"{"regime": "old"}"#).expect("valid json"),
        );
        assert_eq!(tax.regime, CliTaxRegime::Old);
        assert_eq!(tax.income, 1_200_000.0);
    }

    #[test]
    fn cli_custom_allocation_needs_four_weights() {
        let mut args = PortfolioArgs::default();
        args.custom_allocation = Some(vec![50.0, 50.0]);
        let err = args.into_request().expect_err("two weights");
        assert!(err.contains("--custom-allocation"));
    }

    #[test]
    fn cli_parses_subcommands() {
        let cli = Cli::try_parse_from([
            "portfolio-planner",
            "sip",
            "--monthly-sip",
            "2500",
            "--annual-return",
            "0.08",
            "--years",
            "15",
        ])
        .expect("valid args");
        match cli.command {
            Command::Sip(args) => {
                assert_eq!(args.monthly_sip, 2_500.0);
                assert_eq!(args.annual_return, 0.08);
                assert_eq!(args.years, 15);
            }
            other => panic!("unexpected command {other:?}"),
        }

        let cli = Cli::try_parse_from([
            "portfolio-planner",
            "portfolio",
            "--custom-allocation",
            "40",
            "30",
            "20",
            "10",
        ])
        .expect("valid args");
        match cli.command {
            Command::Portfolio(args) => {
                assert_eq!(args.custom_allocation, Some(vec![40.0, 30.0, 20.0, 10.0]));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
