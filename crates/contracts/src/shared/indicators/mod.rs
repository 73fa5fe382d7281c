use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Indicator identity & display metadata
// ---------------------------------------------------------------------------

/// Unique KPI identifier, used as key in the snapshot and API requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct KpiId(pub String);

impl KpiId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KpiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Direction of improvement. Fixed for the lifetime of a KPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    HigherIsBetter,
    LowerIsBetter,
}

/// Closed set of measurement units known to the scorecard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    /// `%`
    Percent,
    /// Millions of US dollars.
    MillionsUsd,
    /// Turnover multiple, `x`.
    Ratio,
    /// Per ten thousand, `‱`.
    PerTenThousand,
    /// Score points (NPS).
    Points,
    Hours,
    Minutes,
    /// Occurrences per month.
    PerMonth,
    KwhPerTonne,
    KgPerTonne,
}

impl UnitKind {
    /// Unit chip shown next to a KPI name.
    pub fn symbol(&self) -> &'static str {
        match self {
            UnitKind::Percent => "%",
            UnitKind::MillionsUsd => "MM USD",
            UnitKind::Ratio => "x",
            UnitKind::PerTenThousand => "‱",
            UnitKind::Points => "pts",
            UnitKind::Hours => "h",
            UnitKind::Minutes => "min",
            UnitKind::PerMonth => "/month",
            UnitKind::KwhPerTonne => "kWh/t",
            UnitKind::KgPerTonne => "kg/t",
        }
    }
}

/// Health of a single KPI, and the band of an aggregated perspective.
///
/// Ordered by severity: `Bad < Warn < Good`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthState {
    Bad,
    Warn,
    Good,
}

impl HealthState {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthState::Good => "good",
            HealthState::Warn => "warn",
            HealthState::Bad => "bad",
        }
    }
}

// ---------------------------------------------------------------------------
// Perspectives
// ---------------------------------------------------------------------------

/// The five balanced-scorecard perspectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerspectiveId {
    Learning,
    Process,
    Customer,
    Financial,
    Sustainability,
}

impl PerspectiveId {
    /// Canonical order.
    pub const ALL: [PerspectiveId; 5] = [
        PerspectiveId::Learning,
        PerspectiveId::Process,
        PerspectiveId::Customer,
        PerspectiveId::Financial,
        PerspectiveId::Sustainability,
    ];

    /// Cause-and-effect chain. Sustainability stays outside of it.
    pub const CAUSAL_CHAIN: [PerspectiveId; 4] = [
        PerspectiveId::Learning,
        PerspectiveId::Process,
        PerspectiveId::Customer,
        PerspectiveId::Financial,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PerspectiveId::Learning => "learning",
            PerspectiveId::Process => "process",
            PerspectiveId::Customer => "customer",
            PerspectiveId::Financial => "financial",
            PerspectiveId::Sustainability => "sustainability",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PerspectiveId::Learning => "Learning & Growth",
            PerspectiveId::Process => "Internal Processes",
            PerspectiveId::Customer => "Customer",
            PerspectiveId::Financial => "Financial",
            PerspectiveId::Sustainability => "Sustainability",
        }
    }
}

// ---------------------------------------------------------------------------
// Definitions & records
// ---------------------------------------------------------------------------

/// Static identity of a KPI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiDefinition {
    pub id: KpiId,
    pub name: String,
    pub unit: UnitKind,
    pub polarity: Polarity,
}

/// Values recorded for one KPI in one period.
///
/// Thresholds live on the record because policy may change between periods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub actual: f64,
    pub target: f64,
    pub warning: f64,
    pub budget: f64,
}

impl HistoricalRecord {
    pub fn is_finite(&self) -> bool {
        self.actual.is_finite()
            && self.target.is_finite()
            && self.warning.is_finite()
            && self.budget.is_finite()
    }
}

/// Sub-entity (e.g. production line) contributing to a KPI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentBreakdown {
    pub segment: String,
    pub actual: f64,
    /// Falls back to the parent KPI polarity when `None`.
    #[serde(default)]
    pub polarity: Option<Polarity>,
    /// Falls back to the parent KPI unit when `None`.
    #[serde(default)]
    pub unit: Option<UnitKind>,
}

impl SegmentBreakdown {
    pub fn effective_polarity(&self, parent: &KpiDefinition) -> Polarity {
        self.polarity.unwrap_or(parent.polarity)
    }

    pub fn effective_unit(&self, parent: &KpiDefinition) -> UnitKind {
        self.unit.unwrap_or(parent.unit)
    }
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

/// What the current value is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMode {
    /// Previous month.
    #[default]
    Month,
    /// Same month one quarter back.
    Quarter,
    /// Same month one year back.
    Year,
    /// Budget of the current period.
    Budget,
}

impl ComparisonMode {
    /// Look-back distance; `None` for budget comparison.
    pub fn offset_months(&self) -> Option<i64> {
        match self {
            ComparisonMode::Month => Some(1),
            ComparisonMode::Quarter => Some(3),
            ComparisonMode::Year => Some(12),
            ComparisonMode::Budget => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonMode::Month => "month",
            ComparisonMode::Quarter => "quarter",
            ComparisonMode::Year => "year",
            ComparisonMode::Budget => "budget",
        }
    }
}

impl FromStr for ComparisonMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "month" => Ok(ComparisonMode::Month),
            "quarter" => Ok(ComparisonMode::Quarter),
            "year" => Ok(ComparisonMode::Year),
            "budget" => Ok(ComparisonMode::Budget),
            _ => Err(format!("Unknown comparison mode: {}", s)),
        }
    }
}
