use clap::Parser;
use serde::Serialize;

use planner::api::{Cli, Command, run_http_server};
use planner::config::Config;
use planner::core::{
    PlannerError, RetirementInputs, calculate_comparison, calculate_income_tax,
    calculate_loan_emi, calculate_lump_sum, calculate_portfolio, calculate_retirement,
    calculate_sip,
};
use planner::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;
    init_tracing(config.log_format);

    let outcome = match cli.command {
        Command::Serve { port } => {
            let config = match port {
                Some(port) => config.with_port(port),
                None => config,
            };
            run_http_server(&config).await?;
            return Ok(());
        }
        Command::Portfolio(args) => match args.into_request() {
            Ok(request) => print_json(calculate_portfolio(&request)),
            Err(msg) => Err(msg),
        },
        Command::Sip(args) => print_json(calculate_sip(
            args.monthly_sip,
            args.annual_return,
            args.years,
        )),
        Command::Compare(args) => print_json(calculate_comparison(
            args.amount,
            args.annual_return,
            args.years,
        )),
        Command::LumpSum(args) => print_json(calculate_lump_sum(
            args.amount,
            args.annual_return,
            args.years,
        )),
        Command::Retirement(args) => {
            let inputs = RetirementInputs::from(args);
            print_json(calculate_retirement(&inputs))
        }
        Command::Tax(args) => print_json(calculate_income_tax(args.income, args.regime.into())),
        Command::Emi(args) => print_json(calculate_loan_emi(
            args.principal,
            args.annual_rate,
            args.years,
        )),
    };

    if let Err(msg) = outcome {
        eprintln!("Error: {msg}");
        std::process::exit(1);
    }
    Ok(())
}

fn print_json<T: Serialize>(result: Result<T, PlannerError>) -> Result<(), String> {
    let value = result.map_err(|e| e.to_string())?;
    let rendered = serde_json::to_string_pretty(&value).map_err(|e| e.to_string())?;
    println!("{rendered}");
    Ok(())
}
