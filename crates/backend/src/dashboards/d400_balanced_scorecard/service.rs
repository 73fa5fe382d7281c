use contracts::dashboards::d400_balanced_scorecard::{
    KpiCard, KpiDetailRequest, KpiDetailResponse, PerspectiveBlock, ScorecardRequest,
    ScorecardResponse, SegmentRow, SeriesPoint,
};
use contracts::shared::indicators::ComparisonMode;
use contracts::shared::period::Period;

use crate::shared::data::{KpiSeries, ScorecardSnapshot};
use crate::shared::error::{ScorecardError, ScorecardResult};
use crate::shared::indicators::classifier::{classify, classify_record};
use crate::shared::indicators::{aggregate, delta_for, derive_chain};

/// Number of actuals shown in a card sparkline
const TREND_LEN: usize = 12;

/// Get the balanced scorecard for a period and comparison mode
pub fn get_scorecard(
    snapshot: &ScorecardSnapshot,
    request: &ScorecardRequest,
) -> ScorecardResult<ScorecardResponse> {
    let period = selected_period(snapshot, request.period)?;
    let comparison = request.comparison;
    let filter = request
        .name_filter
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_lowercase);

    tracing::info!(
        "scorecard {} vs {}{}",
        period,
        comparison.as_str(),
        filter
            .as_deref()
            .map(|f| format!(", filter '{}'", f))
            .unwrap_or_default()
    );

    let mut perspectives = Vec::with_capacity(snapshot.perspectives().len());
    for data in snapshot.perspectives() {
        // Summary always covers every KPI; the filter narrows the cards only
        let summary = aggregate(snapshot, data.id(), period)?;

        let kpis = data
            .kpis()
            .iter()
            .filter(|series| matches_filter(&series.definition().name, filter.as_deref()))
            .map(|series| build_card(snapshot, series, period, comparison))
            .collect::<ScorecardResult<Vec<_>>>()?;

        perspectives.push(PerspectiveBlock {
            id: data.id(),
            label: data.id().label().to_string(),
            summary,
            kpis,
        });
    }

    let causal_chain = derive_chain(snapshot, period)?;

    Ok(ScorecardResponse {
        period,
        comparison,
        perspectives,
        causal_chain,
    })
}

/// Get drill-down data for a single KPI
pub fn get_kpi_detail(
    snapshot: &ScorecardSnapshot,
    request: &KpiDetailRequest,
) -> ScorecardResult<KpiDetailResponse> {
    let period = selected_period(snapshot, request.period)?;
    let (perspective, series) = snapshot.find_kpi(&request.kpi)?;
    let definition = series.definition();
    let record = *snapshot.record(series, period)?;

    let series_points = snapshot
        .history()
        .iter()
        .zip(series.records())
        .map(|(period, record)| SeriesPoint {
            period: *period,
            actual: record.actual,
        })
        .collect();

    // Segments are judged against the parent's policy for the selected period
    let segments = series
        .segments()
        .iter()
        .map(|segment| SegmentRow {
            segment: segment.segment.clone(),
            actual: segment.actual,
            target: record.target,
            unit: segment.effective_unit(definition),
            state: classify(
                segment.actual,
                record.target,
                record.warning,
                segment.effective_polarity(definition),
            ),
        })
        .collect();

    Ok(KpiDetailResponse {
        perspective,
        definition: definition.clone(),
        period,
        record,
        state: classify_record(&record, definition.polarity),
        series: series_points,
        segments,
    })
}

/// Requested period, or the latest selectable one
fn selected_period(snapshot: &ScorecardSnapshot, requested: Option<Period>) -> ScorecardResult<Period> {
    match requested {
        Some(period) if snapshot.is_visible(period) => Ok(period),
        Some(period) => Err(ScorecardError::PeriodNotSelectable(period)),
        None => Ok(snapshot.latest_visible()),
    }
}

/// `filter` is expected lowercased and trimmed
fn matches_filter(name: &str, filter: Option<&str>) -> bool {
    match filter {
        Some(f) => name.to_lowercase().contains(f),
        None => true,
    }
}

fn build_card(
    snapshot: &ScorecardSnapshot,
    series: &KpiSeries,
    period: Period,
    comparison: ComparisonMode,
) -> ScorecardResult<KpiCard> {
    let definition = series.definition();
    let record = snapshot.record(series, period)?;

    Ok(KpiCard {
        id: definition.id.clone(),
        name: definition.name.clone(),
        unit: definition.unit,
        polarity: definition.polarity,
        state: classify_record(record, definition.polarity),
        actual: record.actual,
        target: record.target,
        warning: record.warning,
        budget: record.budget,
        delta: delta_for(snapshot, series, period, comparison)?,
        trend: snapshot.trailing_actuals(series, period, TREND_LEN)?,
    })
}
