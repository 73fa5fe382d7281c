use contracts::dashboards::d400_balanced_scorecard::PerspectiveSummary;
use contracts::shared::indicators::{HealthState, PerspectiveId};
use contracts::shared::period::Period;

use super::classifier::classify_record;
use crate::shared::data::ScorecardSnapshot;
use crate::shared::error::{ScorecardError, ScorecardResult};

/// Minimum share of healthy KPIs (percent) for a `Good` band.
pub const GOOD_BAND_MIN: u32 = 70;
/// Minimum share of healthy KPIs (percent) for a `Warn` band.
pub const WARN_BAND_MIN: u32 = 40;

pub fn band_for_ratio(ratio_percent: u32) -> HealthState {
    if ratio_percent >= GOOD_BAND_MIN {
        HealthState::Good
    } else if ratio_percent >= WARN_BAND_MIN {
        HealthState::Warn
    } else {
        HealthState::Bad
    }
}

/// Summarize a set of KPI states. `None` for an empty set.
pub fn summarize(states: impl IntoIterator<Item = HealthState>) -> Option<PerspectiveSummary> {
    let (healthy_count, total) = states
        .into_iter()
        .fold((0usize, 0usize), |(healthy, total), state| {
            (healthy + usize::from(state == HealthState::Good), total + 1)
        });
    if total == 0 {
        return None;
    }
    let ratio_percent = (healthy_count as f64 / total as f64 * 100.0).round() as u32;
    Some(PerspectiveSummary {
        healthy_count,
        total,
        ratio_percent,
        band: band_for_ratio(ratio_percent),
    })
}

/// Health of one perspective in `period`, each KPI classified with the
/// thresholds recorded for that period.
pub fn aggregate(
    snapshot: &ScorecardSnapshot,
    perspective: PerspectiveId,
    period: Period,
) -> ScorecardResult<PerspectiveSummary> {
    let data = snapshot.perspective(perspective)?;
    let states = data
        .kpis()
        .iter()
        .map(|series| {
            snapshot
                .record(series, period)
                .map(|record| classify_record(record, series.definition().polarity))
        })
        .collect::<ScorecardResult<Vec<_>>>()?;

    let summary = summarize(states).ok_or(ScorecardError::EmptyPerspective(perspective))?;
    tracing::debug!(
        "{} @ {}: {}/{} healthy ({}%, {})",
        perspective.code(),
        period,
        summary.healthy_count,
        summary.total,
        summary.ratio_percent,
        summary.band.as_str()
    );
    Ok(summary)
}
