use contracts::shared::indicators::*;

/// Well-known KPI IDs (constants to avoid typos).
pub mod ids {
    pub const GROSS_MARGIN: &str = "gross_margin";
    pub const EBITDA_MARGIN: &str = "ebitda_margin";
    pub const OPERATING_CASH_FLOW: &str = "operating_cash_flow";
    pub const INVENTORY_TURNOVER: &str = "inventory_turnover";

    pub const OTIF: &str = "otif";
    pub const RENEGOTIATION_RATE: &str = "renegotiation_rate";
    pub const COMPLAINTS: &str = "complaints_per_10k";
    pub const NPS: &str = "nps";

    pub const OEE: &str = "oee";
    pub const SCRAP: &str = "scrap";
    pub const MTTR: &str = "mttr";
    pub const MTBF: &str = "mtbf";

    pub const TRAINING_HOURS: &str = "training_hours";
    pub const IMPROVEMENT_IDEAS: &str = "improvement_ideas";
    pub const FIVE_S: &str = "five_s_compliance";
    pub const CRITICAL_ROLES: &str = "critical_role_coverage";

    pub const ENERGY: &str = "energy_per_tonne";
    pub const CO2: &str = "co2_per_tonne";
    pub const RECYCLED_WASTE: &str = "recycled_waste";
}

/// Catalog entry: KPI identity plus the seed value and policy the data
/// source starts from.
#[derive(Debug, Clone)]
pub struct KpiTemplate {
    pub definition: KpiDefinition,
    /// Starting level of the generated series
    pub base: f64,
    pub target: f64,
    pub warning: f64,
    pub budget: f64,
}

#[derive(Debug, Clone)]
pub struct PerspectiveTemplate {
    pub id: PerspectiveId,
    pub kpis: Vec<KpiTemplate>,
}

#[allow(clippy::too_many_arguments)]
fn kpi(
    id: &str,
    name: &str,
    unit: UnitKind,
    polarity: Polarity,
    base: f64,
    target: f64,
    warning: f64,
    budget: f64,
) -> KpiTemplate {
    KpiTemplate {
        definition: KpiDefinition {
            id: KpiId::new(id),
            name: name.into(),
            unit,
            polarity,
        },
        base,
        target,
        warning,
        budget,
    }
}

/// Build the full catalogue, perspectives in canonical order.
pub fn build_catalog() -> Vec<PerspectiveTemplate> {
    use Polarity::{HigherIsBetter as Up, LowerIsBetter as Down};

    let mut catalog = vec![
        PerspectiveTemplate {
            id: PerspectiveId::Financial,
            kpis: vec![
                kpi(ids::GROSS_MARGIN, "Gross Margin", UnitKind::Percent, Up, 22.0, 24.0, 21.5, 24.0),
                kpi(ids::EBITDA_MARGIN, "EBITDA / Sales", UnitKind::Percent, Up, 10.5, 12.0, 9.5, 12.0),
                kpi(ids::OPERATING_CASH_FLOW, "Operating Cash Flow", UnitKind::MillionsUsd, Up, 1.5, 2.0, 1.2, 2.0),
                kpi(ids::INVENTORY_TURNOVER, "Inventory Turnover", UnitKind::Ratio, Up, 6.8, 7.2, 6.3, 7.0),
            ],
        },
        PerspectiveTemplate {
            id: PerspectiveId::Customer,
            kpis: vec![
                kpi(ids::OTIF, "OTIF", UnitKind::Percent, Up, 90.0, 95.0, 88.0, 94.0),
                kpi(ids::RENEGOTIATION_RATE, "Renegotiation Rate", UnitKind::Percent, Down, 8.5, 5.0, 7.5, 6.0),
                kpi(ids::COMPLAINTS, "Complaints per 10k Orders", UnitKind::PerTenThousand, Down, 4.2, 2.5, 3.8, 2.8),
                kpi(ids::NPS, "NPS", UnitKind::Points, Up, 52.0, 60.0, 48.0, 58.0),
            ],
        },
        PerspectiveTemplate {
            id: PerspectiveId::Process,
            kpis: vec![
                kpi(ids::OEE, "OEE", UnitKind::Percent, Up, 58.0, 68.0, 60.0, 65.0),
                kpi(ids::SCRAP, "Scrap", UnitKind::Percent, Down, 3.2, 2.0, 3.0, 2.4),
                kpi(ids::MTTR, "MTTR", UnitKind::Minutes, Down, 42.0, 32.0, 40.0, 36.0),
                kpi(ids::MTBF, "MTBF", UnitKind::Hours, Up, 38.0, 48.0, 38.0, 44.0),
            ],
        },
        PerspectiveTemplate {
            id: PerspectiveId::Learning,
            kpis: vec![
                kpi(ids::TRAINING_HOURS, "Training Hours per Person", UnitKind::Hours, Up, 14.0, 24.0, 16.0, 20.0),
                kpi(ids::IMPROVEMENT_IDEAS, "Improvement Ideas Implemented", UnitKind::PerMonth, Up, 14.0, 25.0, 12.0, 20.0),
                kpi(ids::FIVE_S, "5S Compliance", UnitKind::Percent, Up, 70.0, 85.0, 72.0, 80.0),
                kpi(ids::CRITICAL_ROLES, "Critical Role Coverage", UnitKind::Percent, Up, 64.0, 80.0, 68.0, 75.0),
            ],
        },
        PerspectiveTemplate {
            id: PerspectiveId::Sustainability,
            kpis: vec![
                kpi(ids::ENERGY, "Energy per Tonne", UnitKind::KwhPerTonne, Down, 440.0, 390.0, 430.0, 400.0),
                kpi(ids::CO2, "CO₂ Emissions per Tonne", UnitKind::KgPerTonne, Down, 205.0, 170.0, 200.0, 180.0),
                kpi(ids::RECYCLED_WASTE, "Recycled Waste", UnitKind::Percent, Up, 58.0, 75.0, 60.0, 70.0),
            ],
        },
    ];

    catalog.sort_by_key(|p| PerspectiveId::ALL.iter().position(|id| *id == p.id));
    catalog
}
