use contracts::shared::indicators::{HealthState, HistoricalRecord, Polarity};

/// Classify a value against its target and warning threshold.
///
/// Boundaries are inclusive: hitting the target exactly is `Good`, hitting the
/// warning threshold exactly is `Warn`.
pub fn classify(actual: f64, target: f64, warning: f64, polarity: Polarity) -> HealthState {
    let meets = |threshold: f64| match polarity {
        Polarity::HigherIsBetter => actual >= threshold,
        Polarity::LowerIsBetter => actual <= threshold,
    };

    if meets(target) {
        HealthState::Good
    } else if meets(warning) {
        HealthState::Warn
    } else {
        HealthState::Bad
    }
}

/// Classify a record using the thresholds stored on that same record.
pub fn classify_record(record: &HistoricalRecord, polarity: Polarity) -> HealthState {
    classify(record.actual, record.target, record.warning, polarity)
}
