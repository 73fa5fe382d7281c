use contracts::dashboards::d400_balanced_scorecard::{DeltaValue, Reference};
use contracts::shared::indicators::{ComparisonMode, Polarity};
use contracts::shared::period::Period;

use super::reference::resolve_reference;
use crate::shared::data::{KpiSeries, ScorecardSnapshot};
use crate::shared::error::ScorecardResult;

/// Percentage change of `actual` against `reference`, normalized by polarity:
/// positive always means improvement.
///
/// `None` for a missing or zero reference.
pub fn percent_delta(actual: f64, reference: Option<f64>, polarity: Polarity) -> Option<f64> {
    let reference = reference?;
    if reference == 0.0 {
        return None;
    }
    let raw = (actual - reference) / reference * 100.0;
    Some(match polarity {
        Polarity::HigherIsBetter => raw,
        Polarity::LowerIsBetter => -raw,
    })
}

/// Delta of `series` at `period` under `mode`.
///
/// Budget mode compares with the budget recorded for `period` itself; offset
/// modes compare with the actual recorded for the resolved period.
pub fn delta_for(
    snapshot: &ScorecardSnapshot,
    series: &KpiSeries,
    period: Period,
    mode: ComparisonMode,
) -> ScorecardResult<Option<DeltaValue>> {
    let current = snapshot.record(series, period)?;
    let polarity = series.definition().polarity;

    let Some(reference) = resolve_reference(snapshot.history(), period, mode) else {
        return Ok(None);
    };
    let reference_value = match reference {
        Reference::Budget => current.budget,
        Reference::Period(previous) => snapshot.record(series, previous)?.actual,
    };

    Ok(percent_delta(current.actual, Some(reference_value), polarity)
        .map(|percent| DeltaValue { percent, reference }))
}
