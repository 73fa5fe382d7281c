use chrono::{DateTime, Local};
use contracts::dashboards::d400_balanced_scorecard::{
    DeltaValue, KpiDetailResponse, Reference, ScorecardResponse,
};
use contracts::shared::indicators::HealthState;
use std::fmt;

use crate::shared::format::{format_delta, format_value};

fn badge(state: HealthState) -> String {
    format!("[{}]", state.as_str())
}

fn delta_text(delta: Option<DeltaValue>) -> String {
    match delta {
        Some(d) => {
            let against = match d.reference {
                Reference::Period(p) => p.to_string(),
                Reference::Budget => "budget".to_string(),
            };
            format!("{} vs {}", format_delta(Some(d.percent)), against)
        }
        None => String::new(),
    }
}

/// Plain-text rendering of a scorecard response
pub struct ScorecardReport<'a> {
    pub response: &'a ScorecardResponse,
    pub generated_at: DateTime<Local>,
}

impl fmt::Display for ScorecardReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.response;
        writeln!(
            f,
            "Balanced scorecard {} | comparison: {} | generated {}",
            r.period,
            r.comparison.as_str(),
            self.generated_at.format("%Y-%m-%d %H:%M")
        )?;

        writeln!(f)?;
        writeln!(f, "== Summary ==")?;
        for block in &r.perspectives {
            let s = &block.summary;
            writeln!(
                f,
                "{:<20} {:>2}/{:<2} favourable {:>3}% {}",
                block.label,
                s.healthy_count,
                s.total,
                s.ratio_percent,
                badge(s.band)
            )?;
        }

        for block in r.perspectives.iter().filter(|b| !b.kpis.is_empty()) {
            writeln!(f)?;
            writeln!(f, "== {} ==", block.label)?;
            for card in &block.kpis {
                writeln!(
                    f,
                    "  {:<7} {:<32} {:>12}  budget {:>12}  target {:>12}  {}",
                    badge(card.state),
                    card.name,
                    format_value(card.actual, card.unit),
                    format_value(card.budget, card.unit),
                    format_value(card.target, card.unit),
                    delta_text(card.delta)
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "== Cause and effect ==")?;
        let chain: Vec<String> = r
            .causal_chain
            .iter()
            .map(|node| format!("{} {}", node.perspective.label(), badge(node.band)))
            .collect();
        writeln!(f, "{}", chain.join(" -> "))
    }
}

/// Plain-text rendering of a KPI drill-down
pub struct KpiDetailReport<'a> {
    pub detail: &'a KpiDetailResponse,
}

impl fmt::Display for KpiDetailReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.detail;
        let unit = d.definition.unit;
        writeln!(
            f,
            "{} | {} ({}) | {} {}",
            d.perspective.label(),
            d.definition.name,
            unit.symbol(),
            d.period,
            badge(d.state)
        )?;
        writeln!(
            f,
            "target {}  warning {}  budget {}",
            format_value(d.record.target, unit),
            format_value(d.record.warning, unit),
            format_value(d.record.budget, unit)
        )?;

        writeln!(f)?;
        for point in &d.series {
            writeln!(f, "  {}  {:>12}", point.period, format_value(point.actual, unit))?;
        }

        if !d.segments.is_empty() {
            writeln!(f)?;
            for row in &d.segments {
                writeln!(
                    f,
                    "  {:<10} {:>12}  target {:>12}  {}",
                    row.segment,
                    format_value(row.actual, row.unit),
                    format_value(row.target, row.unit),
                    row.state.as_str().to_uppercase()
                )?;
            }
        }
        Ok(())
    }
}
