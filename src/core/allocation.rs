use super::error::{PlannerError, Result, require_finite};
use super::types::{
    AssetAllocation, AssetClass, CustomAllocation, ReturnAssumption, RiskLabel, RiskProfile,
};

pub const MIN_RISK_SCORE: i64 = 0;
pub const MAX_RISK_SCORE: i64 = 20;

const CUSTOM_TOTAL_TOLERANCE: f64 = 0.5;

#[derive(Copy, Clone, Debug)]
struct AssetReturns {
    worst: f64,
    expected: f64,
    best: f64,
}

fn asset_returns(class: AssetClass) -> AssetReturns {
    match class {
        AssetClass::Equity => AssetReturns {
            worst: 0.04,
            expected: 0.10,
            best: 0.16,
        },
        AssetClass::Debt => AssetReturns {
            worst: 0.05,
            expected: 0.07,
            best: 0.08,
        },
        AssetClass::Gold => AssetReturns {
            worst: 0.03,
            expected: 0.06,
            best: 0.09,
        },
        AssetClass::Cash => AssetReturns {
            worst: 0.02,
            expected: 0.03,
            best: 0.04,
        },
    }
}

fn validate_score(score: i64) -> Result<u32> {
    if score < MIN_RISK_SCORE {
        return Err(PlannerError::invalid(
            "risk_score",
            format!("must be >= {MIN_RISK_SCORE}"),
        ));
    }
    if score > MAX_RISK_SCORE {
        return Err(PlannerError::invalid(
            "risk_score",
            format!("must be <= {MAX_RISK_SCORE}"),
        ));
    }
    Ok(score as u32)
}

pub fn classify_risk(score: u32) -> RiskLabel {
    match score {
        0..=8 => RiskLabel::Conservative,
        9..=14 => RiskLabel::Balanced,
        15..=18 => RiskLabel::Aggressive,
        _ => RiskLabel::MaximumGrowth,
    }
}

pub fn risk_profile(score: i64) -> Result<RiskProfile> {
    let score = validate_score(score)?;
    let label = classify_risk(score);
    let (title, emoji, color) = match label {
        RiskLabel::Conservative => ("Capital Protector", "🛡️", "#10B981"),
        RiskLabel::Balanced => ("Growth Seeker", "⚖️", "#F59E0B"),
        RiskLabel::Aggressive => ("Growth Investor", "📈", "#EF4444"),
        RiskLabel::MaximumGrowth => ("Wealth Builder", "🚀", "#8B5CF6"),
    };
    Ok(RiskProfile {
        score,
        label,
        title,
        emoji,
        color,
    })
}

pub fn allocation_for_label(label: RiskLabel) -> AssetAllocation {
    let (equity, debt, gold, cash) = match label {
        RiskLabel::Conservative => (25, 55, 12, 8),
        RiskLabel::Balanced => (50, 30, 12, 8),
        RiskLabel::Aggressive => (70, 15, 10, 5),
        RiskLabel::MaximumGrowth => (85, 8, 5, 2),
    };
    AssetAllocation {
        equity,
        debt,
        gold,
        cash,
    }
}

pub fn allocate(score: i64) -> Result<AssetAllocation> {
    let score = validate_score(score)?;
    Ok(allocation_for_label(classify_risk(score)))
}

// Remainder lands on the largest class; first one wins a tie.
pub fn normalize_allocation(custom: CustomAllocation) -> Result<AssetAllocation> {
    let raw = [
        ("custom_allocation.Equity", custom.equity),
        ("custom_allocation.Debt", custom.debt),
        ("custom_allocation.Gold", custom.gold),
        ("custom_allocation.Cash", custom.cash),
    ];

    let mut weights = [0.0; 4];
    for (slot, (field, value)) in weights.iter_mut().zip(raw) {
        let value = require_finite(field, value)?;
        if value < 0.0 {
            return Err(PlannerError::invalid(field, "must be >= 0"));
        }
        *slot = value;
    }

    let total: f64 = weights.iter().sum();
    if (total - 100.0).abs() > CUSTOM_TOTAL_TOLERANCE {
        return Err(PlannerError::invalid(
            "custom_allocation",
            format!("weights must sum to 100, got {total}"),
        ));
    }

    let mut rounded = weights.map(|w| (w * 100.0 / total).round() as i64);
    let remainder = 100 - rounded.iter().sum::<i64>();
    let largest = weights
        .iter()
        .enumerate()
        .fold(0, |best, (idx, w)| if *w > weights[best] { idx } else { best });
    rounded[largest] += remainder;

    Ok(AssetAllocation {
        equity: rounded[0].max(0) as u32,
        debt: rounded[1].max(0) as u32,
        gold: rounded[2].max(0) as u32,
        cash: rounded[3].max(0) as u32,
    })
}

pub fn blended_returns(allocation: &AssetAllocation) -> ReturnAssumption {
    let mut mix = ReturnAssumption {
        worst: 0.0,
        expected: 0.0,
        best: 0.0,
    };
    for class in AssetClass::ALL {
        let share = allocation.weight(class) as f64 / 100.0;
        let returns = asset_returns(class);
        mix.worst += share * returns.worst;
        mix.expected += share * returns.expected;
        mix.best += share * returns.best;
    }
    mix
}

pub fn return_assumption(score: i64) -> Result<ReturnAssumption> {
    let allocation = allocate(score)?;
    Ok(blended_returns(&allocation))
}
