use super::types::{Insight, InsightKind, PortfolioMetrics, ScenarioSet};

pub const LOW_SAVINGS_RATE_PERCENT: f64 = 20.0;
pub const EMERGENCY_COVERAGE_TARGET_MONTHS: f64 = 6.0;
pub const WIDE_SPREAD_RATIO: f64 = 0.5;

struct RuleInput<'a> {
    metrics: &'a PortfolioMetrics,
    scenarios: &'a ScenarioSet,
}

type Rule = fn(&RuleInput<'_>) -> Option<Insight>;

const RULES: [Rule; 7] = [
    savings,
    low_savings_rate,
    emergency_fund_target,
    emergency_fund_gap,
    expected_growth,
    best_case,
    wide_outcome_range,
];

fn insight(kind: InsightKind, icon: &'static str, title: &'static str, message: String) -> Insight {
    Insight {
        kind,
        icon,
        title,
        message,
    }
}

fn savings(m: &RuleInput<'_>) -> Option<Insight> {
    if m.metrics.monthly_savings > 0.0 {
        Some(insight(
            InsightKind::Positive,
            "💰",
            "Good Savings Rate",
            format!("{:.0} saved per month", m.metrics.monthly_savings),
        ))
    } else {
        Some(insight(
            InsightKind::Warning,
            "⚠️",
            "No Savings",
            "Income equals or is less than expenses".to_string(),
        ))
    }
}

fn low_savings_rate(m: &RuleInput<'_>) -> Option<Insight> {
    let rate = m.metrics.savings_rate;
    (rate > 0.0 && rate < LOW_SAVINGS_RATE_PERCENT).then(|| {
        insight(
            InsightKind::Warning,
            "📉",
            "Low Savings Rate",
            format!("Saving {rate:.1}% of income, aim for at least {LOW_SAVINGS_RATE_PERCENT:.0}%"),
        )
    })
}

fn emergency_fund_target(m: &RuleInput<'_>) -> Option<Insight> {
    (m.metrics.emergency_fund > 0.0).then(|| {
        insight(
            InsightKind::Info,
            "🛡️",
            "Emergency Fund Target",
            format!("{:.0} for 6 months", m.metrics.emergency_fund),
        )
    })
}

fn emergency_fund_gap(m: &RuleInput<'_>) -> Option<Insight> {
    let months = m.metrics.emergency_coverage_months?;
    (months < EMERGENCY_COVERAGE_TARGET_MONTHS).then(|| {
        insight(
            InsightKind::Warning,
            "🧯",
            "Emergency Fund Gap",
            format!("Current savings cover {months:.1} of {EMERGENCY_COVERAGE_TARGET_MONTHS:.0} months"),
        )
    })
}

fn expected_growth(m: &RuleInput<'_>) -> Option<Insight> {
    let gain = m.scenarios.expected.gain;
    (gain > 0.0).then(|| {
        insight(
            InsightKind::Projection,
            "📈",
            "Expected Wealth Growth",
            format!("{gain:.0} gain in expected scenario"),
        )
    })
}

fn best_case(m: &RuleInput<'_>) -> Option<Insight> {
    Some(insight(
        InsightKind::Info,
        "🚀",
        "Best Case Scenario",
        format!("{:.0} potential gain", m.scenarios.best.gain),
    ))
}

fn wide_outcome_range(m: &RuleInput<'_>) -> Option<Insight> {
    let expected = m.scenarios.expected.final_value;
    if expected <= 0.0 {
        return None;
    }
    let spread = m.scenarios.best.final_value - m.scenarios.worst.final_value;
    let ratio = spread / expected;
    (ratio > WIDE_SPREAD_RATIO).then(|| {
        insight(
            InsightKind::Warning,
            "🎢",
            "Wide Outcome Range",
            format!(
                "Best and worst cases differ by {:.0}% of the expected value",
                ratio * 100.0
            ),
        )
    })
}

pub fn generate_insights(metrics: &PortfolioMetrics, scenarios: &ScenarioSet) -> Vec<Insight> {
    let input = RuleInput { metrics, scenarios };
    RULES.iter().filter_map(|rule| rule(&input)).collect()
}
