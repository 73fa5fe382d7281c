use contracts::dashboards::d400_balanced_scorecard::CausalNode;
use contracts::shared::indicators::PerspectiveId;
use contracts::shared::period::Period;

use super::aggregate::aggregate;
use crate::shared::data::ScorecardSnapshot;
use crate::shared::error::ScorecardResult;

/// Cause-and-effect map for `period`: Learning → Process → Customer → Financial.
///
/// Every node carries its own aggregate band; nothing propagates along the
/// edges. An edge takes the band of its source node.
pub fn derive_chain(snapshot: &ScorecardSnapshot, period: Period) -> ScorecardResult<Vec<CausalNode>> {
    let chain = PerspectiveId::CAUSAL_CHAIN;
    chain
        .iter()
        .enumerate()
        .map(|(i, perspective)| {
            let summary = aggregate(snapshot, *perspective, period)?;
            Ok(CausalNode {
                perspective: *perspective,
                band: summary.band,
                edge_to: chain.get(i + 1).copied(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support::{period, sample_builder};
    use contracts::shared::indicators::HealthState;

    #[test]
    fn test_chain_order_and_bands() {
        let snapshot = sample_builder().build().unwrap();
        let chain = derive_chain(&snapshot, period("2025-06")).unwrap();

        let order: Vec<PerspectiveId> = chain.iter().map(|n| n.perspective).collect();
        assert_eq!(order, PerspectiveId::CAUSAL_CHAIN.to_vec());

        let bands: Vec<HealthState> = chain.iter().map(|n| n.band).collect();
        assert_eq!(
            bands,
            vec![HealthState::Warn, HealthState::Bad, HealthState::Good, HealthState::Bad]
        );
    }

    #[test]
    fn test_edges_link_consecutive_nodes() {
        let snapshot = sample_builder().build().unwrap();
        let chain = derive_chain(&snapshot, period("2025-06")).unwrap();
        assert_eq!(chain[0].edge_to, Some(PerspectiveId::Process));
        assert_eq!(chain[1].edge_to, Some(PerspectiveId::Customer));
        assert_eq!(chain[2].edge_to, Some(PerspectiveId::Financial));
        assert_eq!(chain[3].edge_to, None);
    }

    #[test]
    fn test_bands_are_independent_of_neighbours() {
        let snapshot = sample_builder().build().unwrap();
        let june = period("2025-06");
        let chain = derive_chain(&snapshot, june).unwrap();
        for node in &chain {
            let own = aggregate(&snapshot, node.perspective, june).unwrap();
            assert_eq!(node.band, own.band);
        }
        assert_eq!(chain, derive_chain(&snapshot, june).unwrap());
    }
}
