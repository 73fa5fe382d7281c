use crate::shared::indicators::{
    ComparisonMode, HealthState, HistoricalRecord, KpiDefinition, KpiId, PerspectiveId,
    Polarity, UnitKind,
};
use crate::shared::period::Period;
use serde::{Deserialize, Serialize};

/// Request for the balanced scorecard dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScorecardRequest {
    /// Selected period; `None` means the latest selectable one
    #[serde(default)]
    pub period: Option<Period>,
    #[serde(default)]
    pub comparison: ComparisonMode,
    /// Case-insensitive substring applied to KPI names (cards only)
    #[serde(default)]
    pub name_filter: Option<String>,
}

/// Response for the balanced scorecard dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorecardResponse {
    pub period: Period,
    pub comparison: ComparisonMode,
    /// Perspectives in canonical order
    pub perspectives: Vec<PerspectiveBlock>,
    /// Learning → Process → Customer → Financial
    pub causal_chain: Vec<CausalNode>,
}

/// Summary tile plus KPI cards of one perspective
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerspectiveBlock {
    pub id: PerspectiveId,
    pub label: String,
    pub summary: PerspectiveSummary,
    pub kpis: Vec<KpiCard>,
}

/// Share of healthy KPIs in a perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerspectiveSummary {
    pub healthy_count: usize,
    pub total: usize,
    /// Rounded to an integer in `0..=100`
    pub ratio_percent: u32,
    pub band: HealthState,
}

/// What a delta is computed against: another period's actual, or the
/// current period's own budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "period", rename_all = "snake_case")]
pub enum Reference {
    Period(Period),
    Budget,
}

/// Polarity-normalized change: positive always means improvement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeltaValue {
    pub percent: f64,
    pub reference: Reference,
}

/// Single KPI card. Values are raw numbers; formatting is up to the consumer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiCard {
    pub id: KpiId,
    pub name: String,
    pub unit: UnitKind,
    pub polarity: Polarity,
    pub state: HealthState,
    pub actual: f64,
    pub target: f64,
    pub warning: f64,
    pub budget: f64,
    /// `None` when no comparison is available (never rendered as 0%)
    pub delta: Option<DeltaValue>,
    /// Up to twelve actuals ending at the selected period, oldest first
    pub trend: Vec<f64>,
}

/// Node of the cause-and-effect map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CausalNode {
    pub perspective: PerspectiveId,
    pub band: HealthState,
    /// Outgoing edge; coloured by this node's band
    pub edge_to: Option<PerspectiveId>,
}

/// Request for the KPI drill-down view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiDetailRequest {
    pub kpi: KpiId,
    #[serde(default)]
    pub period: Option<Period>,
}

/// One point of the full KPI history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub period: Period,
    pub actual: f64,
}

/// Segment row of the drill-down table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentRow {
    pub segment: String,
    pub actual: f64,
    pub target: f64,
    pub unit: UnitKind,
    pub state: HealthState,
}

/// Response for the KPI drill-down view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiDetailResponse {
    pub perspective: PerspectiveId,
    pub definition: KpiDefinition,
    pub period: Period,
    /// Record in force for `period`; its target/warning are the reference lines
    pub record: HistoricalRecord,
    pub state: HealthState,
    pub series: Vec<SeriesPoint>,
    pub segments: Vec<SegmentRow>,
}
