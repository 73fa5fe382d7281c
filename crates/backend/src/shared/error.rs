use contracts::shared::indicators::{KpiId, PerspectiveId};
use contracts::shared::period::Period;
use thiserror::Error;

/// Errors of the scorecard engine and of the data source boundary
#[derive(Debug, Error, PartialEq)]
pub enum ScorecardError {
    #[error("History is empty")]
    EmptyHistory,

    #[error("History is not contiguous between {previous} and {next}")]
    NonContiguousHistory { previous: Period, next: Period },

    #[error("No selectable periods")]
    EmptyVisibleWindow,

    #[error("Visible period {0} is outside of history")]
    VisibleOutsideHistory(Period),

    #[error("Period {0} is not selectable")]
    PeriodNotSelectable(Period),

    #[error("Period {0} is not in history")]
    UnknownPeriod(Period),

    #[error("Unknown KPI: {0}")]
    UnknownKpi(KpiId),

    #[error("Duplicate KPI: {0}")]
    DuplicateKpi(KpiId),

    #[error("Perspective {0:?} has no KPIs")]
    EmptyPerspective(PerspectiveId),

    #[error("Perspective {0:?} is missing")]
    MissingPerspective(PerspectiveId),

    #[error("KPI {kpi} has more than one record for {period}")]
    DuplicateRecord { kpi: KpiId, period: Period },

    #[error("KPI {kpi} has no record for {period}")]
    MissingRecord { kpi: KpiId, period: Period },

    #[error("KPI {kpi} has a non-finite value for {period}")]
    NonFiniteValue { kpi: KpiId, period: Period },

    #[error("Segment '{segment}' of KPI {kpi} has a non-finite value")]
    NonFiniteSegment { kpi: KpiId, segment: String },
}

pub type ScorecardResult<T> = Result<T, ScorecardError>;
