use contracts::shared::indicators::{
    HistoricalRecord, KpiDefinition, KpiId, PerspectiveId, SegmentBreakdown,
};
use contracts::shared::period::Period;
use std::collections::{HashMap, HashSet};

use crate::shared::error::{ScorecardError, ScorecardResult};

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// History of one KPI, aligned index-for-index with the snapshot history.
#[derive(Debug, Clone)]
pub struct KpiSeries {
    definition: KpiDefinition,
    records: Vec<HistoricalRecord>,
    segments: Vec<SegmentBreakdown>,
}

impl KpiSeries {
    pub fn definition(&self) -> &KpiDefinition {
        &self.definition
    }

    pub fn id(&self) -> &KpiId {
        &self.definition.id
    }

    pub fn records(&self) -> &[HistoricalRecord] {
        &self.records
    }

    pub fn segments(&self) -> &[SegmentBreakdown] {
        &self.segments
    }
}

/// Ordered KPIs of one perspective.
#[derive(Debug, Clone)]
pub struct PerspectiveData {
    id: PerspectiveId,
    kpis: Vec<KpiSeries>,
}

impl PerspectiveData {
    pub fn id(&self) -> PerspectiveId {
        self.id
    }

    pub fn kpis(&self) -> &[KpiSeries] {
        &self.kpis
    }
}

/// Immutable, fully materialized scorecard data.
///
/// Built only through [`SnapshotBuilder`], so every KPI has a record for every
/// period of a contiguous history.
#[derive(Debug, Clone)]
pub struct ScorecardSnapshot {
    history: Vec<Period>,
    visible: Vec<Period>,
    perspectives: Vec<PerspectiveData>,
}

impl ScorecardSnapshot {
    pub fn history(&self) -> &[Period] {
        &self.history
    }

    /// Periods the user may select. Older history only feeds look-back comparisons.
    pub fn visible(&self) -> &[Period] {
        &self.visible
    }

    pub fn is_visible(&self, period: Period) -> bool {
        self.visible.binary_search(&period).is_ok()
    }

    pub fn latest_visible(&self) -> Period {
        // Non-empty by construction
        self.visible[self.visible.len() - 1]
    }

    pub fn index_of(&self, period: Period) -> Option<usize> {
        self.history.binary_search(&period).ok()
    }

    /// Perspectives in canonical order.
    pub fn perspectives(&self) -> &[PerspectiveData] {
        &self.perspectives
    }

    pub fn perspective(&self, id: PerspectiveId) -> ScorecardResult<&PerspectiveData> {
        self.perspectives
            .iter()
            .find(|p| p.id == id)
            .ok_or(ScorecardError::MissingPerspective(id))
    }

    pub fn find_kpi(&self, id: &KpiId) -> ScorecardResult<(PerspectiveId, &KpiSeries)> {
        self.perspectives
            .iter()
            .find_map(|p| p.kpis.iter().find(|k| k.id() == id).map(|k| (p.id, k)))
            .ok_or_else(|| ScorecardError::UnknownKpi(id.clone()))
    }

    /// Record of `series` in force for `period`.
    pub fn record<'a>(
        &self,
        series: &'a KpiSeries,
        period: Period,
    ) -> ScorecardResult<&'a HistoricalRecord> {
        let idx = self
            .index_of(period)
            .ok_or(ScorecardError::UnknownPeriod(period))?;
        series
            .records
            .get(idx)
            .ok_or_else(|| ScorecardError::MissingRecord {
                kpi: series.id().clone(),
                period,
            })
    }

    /// Up to `len` actuals ending at `period` (inclusive), oldest first.
    pub fn trailing_actuals(
        &self,
        series: &KpiSeries,
        period: Period,
        len: usize,
    ) -> ScorecardResult<Vec<f64>> {
        let idx = self
            .index_of(period)
            .ok_or(ScorecardError::UnknownPeriod(period))?;
        let start = (idx + 1).saturating_sub(len);
        let window = series
            .records
            .get(start..=idx)
            .ok_or_else(|| ScorecardError::MissingRecord {
                kpi: series.id().clone(),
                period,
            })?;
        Ok(window.iter().map(|r| r.actual).collect())
    }
}

// ---------------------------------------------------------------------------
// Builder (data source boundary)
// ---------------------------------------------------------------------------

struct PendingKpi {
    perspective: PerspectiveId,
    definition: KpiDefinition,
    records: Vec<(Period, HistoricalRecord)>,
    segments: Vec<SegmentBreakdown>,
}

/// Collects data-source output and rejects anything that violates the
/// snapshot invariants.
pub struct SnapshotBuilder {
    history: Vec<Period>,
    visible: Option<Vec<Period>>,
    kpis: Vec<PendingKpi>,
}

impl SnapshotBuilder {
    pub fn new(history: Vec<Period>) -> Self {
        Self {
            history,
            visible: None,
            kpis: Vec::new(),
        }
    }

    /// Selectable window. Defaults to the whole history.
    pub fn visible(mut self, visible: Vec<Period>) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn kpi(
        mut self,
        perspective: PerspectiveId,
        definition: KpiDefinition,
        records: impl IntoIterator<Item = (Period, HistoricalRecord)>,
        segments: Vec<SegmentBreakdown>,
    ) -> Self {
        self.kpis.push(PendingKpi {
            perspective,
            definition,
            records: records.into_iter().collect(),
            segments,
        });
        self
    }

    pub fn build(self) -> ScorecardResult<ScorecardSnapshot> {
        let history = self.history;
        let Some(first) = history.first().copied() else {
            return Err(ScorecardError::EmptyHistory);
        };
        for pair in history.windows(2) {
            if pair[1] != pair[0].offset(1) {
                return Err(ScorecardError::NonContiguousHistory {
                    previous: pair[0],
                    next: pair[1],
                });
            }
        }

        let mut visible = self.visible.unwrap_or_else(|| history.clone());
        visible.sort();
        visible.dedup();
        if visible.is_empty() {
            return Err(ScorecardError::EmptyVisibleWindow);
        }
        if let Some(outside) = visible.iter().find(|p| history.binary_search(p).is_err()) {
            return Err(ScorecardError::VisibleOutsideHistory(*outside));
        }

        let mut seen: HashSet<KpiId> = HashSet::new();
        let mut grouped: HashMap<PerspectiveId, Vec<KpiSeries>> = HashMap::new();

        for pending in self.kpis {
            let kpi = pending.definition.id.clone();
            if !seen.insert(kpi.clone()) {
                return Err(ScorecardError::DuplicateKpi(kpi));
            }

            let mut slots: Vec<Option<HistoricalRecord>> = vec![None; history.len()];
            for (period, record) in pending.records {
                // History is contiguous, so the slot is the month distance
                let offset = Period::months_between(first, period);
                let slot = usize::try_from(offset)
                    .ok()
                    .and_then(|idx| slots.get_mut(idx))
                    .ok_or(ScorecardError::UnknownPeriod(period))?;
                if slot.is_some() {
                    return Err(ScorecardError::DuplicateRecord {
                        kpi: kpi.clone(),
                        period,
                    });
                }
                if !record.is_finite() {
                    return Err(ScorecardError::NonFiniteValue {
                        kpi: kpi.clone(),
                        period,
                    });
                }
                *slot = Some(record);
            }

            let records = slots
                .into_iter()
                .zip(history.iter())
                .map(|(slot, period)| {
                    slot.ok_or_else(|| ScorecardError::MissingRecord {
                        kpi: kpi.clone(),
                        period: *period,
                    })
                })
                .collect::<ScorecardResult<Vec<_>>>()?;

            if let Some(segment) = pending.segments.iter().find(|s| !s.actual.is_finite()) {
                return Err(ScorecardError::NonFiniteSegment {
                    kpi: kpi.clone(),
                    segment: segment.segment.clone(),
                });
            }

            grouped
                .entry(pending.perspective)
                .or_default()
                .push(KpiSeries {
                    definition: pending.definition,
                    records,
                    segments: pending.segments,
                });
        }

        let mut perspectives = Vec::with_capacity(PerspectiveId::ALL.len());
        for id in PerspectiveId::ALL {
            let kpis = grouped
                .remove(&id)
                .ok_or(ScorecardError::MissingPerspective(id))?;
            if kpis.is_empty() {
                return Err(ScorecardError::EmptyPerspective(id));
            }
            perspectives.push(PerspectiveData { id, kpis });
        }

        tracing::debug!(
            "snapshot built: {} periods ({} visible), {} KPIs",
            history.len(),
            visible.len(),
            seen.len()
        );

        Ok(ScorecardSnapshot {
            history,
            visible,
            perspectives,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support::{definition, period, record, sample_builder, sample_history};
    use contracts::shared::indicators::Polarity;

    #[test]
    fn test_sample_snapshot_builds() {
        let snapshot = sample_builder().build().unwrap();
        assert_eq!(snapshot.history().len(), 24);
        assert_eq!(snapshot.visible().len(), 12);
        assert_eq!(snapshot.latest_visible(), period("2025-12"));
        assert!(snapshot.is_visible(period("2025-01")));
        assert!(!snapshot.is_visible(period("2024-12")));
        let ids: Vec<PerspectiveId> = snapshot.perspectives().iter().map(|p| p.id()).collect();
        assert_eq!(ids, PerspectiveId::ALL.to_vec());
    }

    #[test]
    fn test_record_lookup_reads_period_thresholds() {
        let snapshot = sample_builder().build().unwrap();
        let (perspective, series) = snapshot.find_kpi(&KpiId::new("margin")).unwrap();
        assert_eq!(perspective, PerspectiveId::Financial);
        let rec = snapshot.record(series, period("2025-06")).unwrap();
        assert_eq!(rec.actual, 23.0);
        assert_eq!(rec.target, 24.0);
        assert_eq!(
            snapshot.record(series, period("2023-01")),
            Err(ScorecardError::UnknownPeriod(period("2023-01")))
        );
    }

    #[test]
    fn test_trailing_actuals_window() {
        let snapshot = sample_builder().build().unwrap();
        let (_, series) = snapshot.find_kpi(&KpiId::new("margin")).unwrap();
        let trend = snapshot.trailing_actuals(series, period("2024-03"), 12).unwrap();
        assert_eq!(trend.len(), 3);
        // 2024-07 ..= 2025-06; the 20.0 of 2024-06 falls just outside
        let trend = snapshot.trailing_actuals(series, period("2025-06"), 12).unwrap();
        assert_eq!(
            trend,
            vec![22.5, 22.5, 22.5, 22.5, 22.5, 23.5, 22.5, 22.5, 25.0, 22.5, 22.0, 23.0]
        );
    }

    #[test]
    fn test_trailing_actuals_of_foreign_series() {
        let snapshot = sample_builder().build().unwrap();
        // Series built against a shorter history than this snapshot's
        let short = KpiSeries {
            definition: definition("stale", Polarity::HigherIsBetter),
            records: vec![record(1.0, 2.0, 1.5, 2.0); 3],
            segments: vec![],
        };
        assert_eq!(
            snapshot.trailing_actuals(&short, period("2025-06"), 12),
            Err(ScorecardError::MissingRecord {
                kpi: KpiId::new("stale"),
                period: period("2025-06"),
            })
        );
    }

    #[test]
    fn test_gap_is_rejected() {
        let history = sample_history();
        let records: Vec<_> = history
            .iter()
            .skip(1)
            .map(|p| (*p, record(10.0, 12.0, 9.0, 11.0)))
            .collect();
        let err = sample_builder()
            .kpi(
                PerspectiveId::Customer,
                definition("gappy", Polarity::HigherIsBetter),
                records,
                vec![],
            )
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ScorecardError::MissingRecord {
                kpi: KpiId::new("gappy"),
                period: period("2024-01"),
            }
        );
    }

    #[test]
    fn test_non_finite_is_rejected() {
        let records: Vec<_> = sample_history()
            .iter()
            .map(|p| (*p, record(f64::NAN, 12.0, 9.0, 11.0)))
            .collect();
        let err = sample_builder()
            .kpi(
                PerspectiveId::Process,
                definition("nan", Polarity::HigherIsBetter),
                records,
                vec![],
            )
            .build()
            .unwrap_err();
        assert!(matches!(err, ScorecardError::NonFiniteValue { .. }));
    }

    #[test]
    fn test_record_outside_history_is_rejected() {
        let mut records: Vec<_> = sample_history()
            .iter()
            .map(|p| (*p, record(10.0, 12.0, 9.0, 11.0)))
            .collect();
        records.push((period("2026-01"), record(10.0, 12.0, 9.0, 11.0)));
        let err = sample_builder()
            .kpi(
                PerspectiveId::Process,
                definition("late", Polarity::HigherIsBetter),
                records,
                vec![],
            )
            .build()
            .unwrap_err();
        assert_eq!(err, ScorecardError::UnknownPeriod(period("2026-01")));
    }

    #[test]
    fn test_duplicate_kpi_is_rejected() {
        let records: Vec<_> = sample_history()
            .iter()
            .map(|p| (*p, record(10.0, 12.0, 9.0, 11.0)))
            .collect();
        let err = sample_builder()
            .kpi(
                PerspectiveId::Customer,
                definition("margin", Polarity::HigherIsBetter),
                records,
                vec![],
            )
            .build()
            .unwrap_err();
        assert_eq!(err, ScorecardError::DuplicateKpi(KpiId::new("margin")));
    }

    #[test]
    fn test_history_shape_is_validated() {
        assert_eq!(
            SnapshotBuilder::new(vec![]).build().unwrap_err(),
            ScorecardError::EmptyHistory
        );
        let err = SnapshotBuilder::new(vec![period("2025-01"), period("2025-03")])
            .build()
            .unwrap_err();
        assert!(matches!(err, ScorecardError::NonContiguousHistory { .. }));
        let err = SnapshotBuilder::new(vec![period("2025-01")])
            .visible(vec![period("2025-02")])
            .build()
            .unwrap_err();
        assert_eq!(err, ScorecardError::VisibleOutsideHistory(period("2025-02")));
    }

    #[test]
    fn test_missing_perspective_is_rejected() {
        let history = vec![period("2025-01")];
        let err = SnapshotBuilder::new(history.clone())
            .kpi(
                PerspectiveId::Learning,
                definition("training", Polarity::HigherIsBetter),
                history.iter().map(|p| (*p, record(1.0, 1.0, 1.0, 1.0))),
                vec![],
            )
            .build()
            .unwrap_err();
        assert_eq!(err, ScorecardError::MissingPerspective(PerspectiveId::Process));
    }
}
