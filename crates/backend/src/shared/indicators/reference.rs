use contracts::dashboards::d400_balanced_scorecard::Reference;
use contracts::shared::indicators::ComparisonMode;
use contracts::shared::period::Period;

/// Resolve what `period` is compared against under `mode`.
///
/// Offset modes walk back through `history`; `None` when the look-back falls
/// before the first recorded period or `period` itself is not in history.
/// Budget mode always resolves.
pub fn resolve_reference(
    history: &[Period],
    period: Period,
    mode: ComparisonMode,
) -> Option<Reference> {
    let Some(offset) = mode.offset_months() else {
        return Some(Reference::Budget);
    };
    let idx = history.iter().position(|p| *p == period)?;
    let back = idx.checked_sub(usize::try_from(offset).ok()?)?;
    history.get(back).copied().map(Reference::Period)
}
