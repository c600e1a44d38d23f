mod decode;
mod error;
mod payload;

use axum::{
    Router,
    extract::{Json, RawQuery, rejection::JsonRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::core::{
    RetirementInputs, calculate_comparison, calculate_income_tax, calculate_loan_emi,
    calculate_lump_sum, calculate_portfolio, calculate_retirement, calculate_sip,
};

pub use error::{ApiError, ApiResult};
pub use payload::{
    Cli, CliTaxRegime, Command, CompareArgs, EmiArgs, PortfolioArgs, RetirementArgs, SipArgs,
    TaxArgs,
};
use decode::{from_json, from_query};
use payload::{
    ComparePayload, EmiPayload, PortfolioPayload, RetirementPayload, SipPayload, TaxPayload,
    compare_args_from_payload, emi_args_from_payload, portfolio_args_from_payload,
    retirement_args_from_payload, sip_args_from_payload, tax_args_from_payload,
};

#[derive(Debug, Serialize)]
struct Success<T> {
    success: bool,
    #[serde(flatten)]
    body: T,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

pub fn app_router() -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/calculate",
            get(portfolio_get_handler).post(portfolio_post_handler),
        )
        .route(
            "/api/sip-calculator",
            get(sip_get_handler).post(sip_post_handler),
        )
        .route(
            "/api/comparison",
            get(comparison_get_handler).post(comparison_post_handler),
        )
        .route("/api/lump-sum", post(lump_sum_handler))
        .route("/api/retirement", post(retirement_handler))
        .route("/api/tax", post(tax_handler))
        .route("/api/loan-emi", post(emi_handler))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
}

pub async fn run_http_server(config: &Config) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!("Portfolio planner API listening on http://{}", config.listen_addr);
    axum::serve(listener, app_router()).await
}

async fn health_handler() -> Response {
    json_response(HealthResponse { status: "healthy" })
}

async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}

async fn portfolio_get_handler(RawQuery(query): RawQuery) -> ApiResult<Response> {
    portfolio_handler_impl(from_query(query)?)
}

async fn portfolio_post_handler(
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Response> {
    portfolio_handler_impl(from_json(payload)?)
}

fn portfolio_handler_impl(payload: PortfolioPayload) -> ApiResult<Response> {
    let request = portfolio_args_from_payload(payload)
        .into_request()
        .map_err(ApiError::BadRequest)?;
    let report = calculate_portfolio(&request)?;
    Ok(json_response(report))
}

async fn sip_get_handler(RawQuery(query): RawQuery) -> ApiResult<Response> {
    sip_handler_impl(from_query(query)?)
}

async fn sip_post_handler(payload: Result<Json<Value>, JsonRejection>) -> ApiResult<Response> {
    sip_handler_impl(from_json(payload)?)
}

fn sip_handler_impl(payload: SipPayload) -> ApiResult<Response> {
    let args = sip_args_from_payload(payload);
    let result = calculate_sip(args.monthly_sip, args.annual_return, args.years)?;
    Ok(json_response(result))
}

async fn comparison_get_handler(RawQuery(query): RawQuery) -> ApiResult<Response> {
    comparison_handler_impl(from_query(query)?)
}

async fn comparison_post_handler(
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Response> {
    comparison_handler_impl(from_json(payload)?)
}

fn comparison_handler_impl(payload: ComparePayload) -> ApiResult<Response> {
    let args = compare_args_from_payload(payload);
    let result = calculate_comparison(args.amount, args.annual_return, args.years)?;
    Ok(json_response(result))
}

async fn lump_sum_handler(payload: Result<Json<Value>, JsonRejection>) -> ApiResult<Response> {
    let args = compare_args_from_payload(from_json::<ComparePayload>(payload)?);
    let result = calculate_lump_sum(args.amount, args.annual_return, args.years)?;
    Ok(json_response(result))
}

async fn retirement_handler(payload: Result<Json<Value>, JsonRejection>) -> ApiResult<Response> {
    let payload = from_json::<RetirementPayload>(payload)?;
    let inputs: RetirementInputs = retirement_args_from_payload(payload).into();
    let plan = calculate_retirement(&inputs)?;
    Ok(json_response(plan))
}

async fn tax_handler(payload: Result<Json<Value>, JsonRejection>) -> ApiResult<Response> {
    let args = tax_args_from_payload(from_json::<TaxPayload>(payload)?);
    let result = calculate_income_tax(args.income, args.regime.into())?;
    Ok(json_response(result))
}

async fn emi_handler(payload: Result<Json<Value>, JsonRejection>) -> ApiResult<Response> {
    let args = emi_args_from_payload(from_json::<EmiPayload>(payload)?);
    let schedule = calculate_loan_emi(args.principal, args.annual_rate, args.years)?;
    Ok(json_response(schedule))
}

fn json_response<T: Serialize>(body: T) -> Response {
    let mut response = (
        StatusCode::OK,
        Json(Success {
            success: true,
            body,
        }),
    )
        .into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}
