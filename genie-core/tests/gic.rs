//! End-to-end scenarios for the information-criterion schedule.

use std::cell::Cell;

use genie_core::{ClusterDispersion, GicBuilder, InformationCriterion, Mst};

/// Prefers merging the pair with the smallest combined population.
struct SmallestPairFirst;

impl InformationCriterion for SmallestPairFirst {
    fn merge_cost(
        &self,
        left: ClusterDispersion,
        right: ClusterDispersion,
        _dimensionality: f64,
    ) -> f64 {
        (left.size + right.size) as f64
    }
}

/// Prefers merging the pair with the largest accumulated edge weight.
struct HeaviestPairFirst;

impl InformationCriterion for HeaviestPairFirst {
    fn merge_cost(
        &self,
        left: ClusterDispersion,
        right: ClusterDispersion,
        _dimensionality: f64,
    ) -> f64 {
        -(left.weight_sum + right.weight_sum)
    }
}

/// Records the dimensionality it was handed, scoring like
/// [`SmallestPairFirst`].
struct RecordingScore {
    seen: Cell<Option<f64>>,
}

impl InformationCriterion for RecordingScore {
    fn merge_cost(
        &self,
        left: ClusterDispersion,
        right: ClusterDispersion,
        dimensionality: f64,
    ) -> f64 {
        self.seen.set(Some(dimensionality));
        (left.size + right.size) as f64
    }
}

fn ascending_path() -> ([f64; 5], [(usize, usize); 5]) {
    (
        [1.0, 2.0, 3.0, 4.0, 5.0],
        [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)],
    )
}

#[test]
fn the_collapse_can_overrule_the_single_linkage_split() {
    let (weights, endpoints) = ascending_path();
    let mst = Mst::new(6, &weights, &endpoints).expect("tree is well formed");

    // Over-merge to three clusters under a pure single-linkage phase, then
    // collapse the two lightest survivors.
    let clustering = GicBuilder::new()
        .with_cluster_count(2)
        .with_add_clusters(1)
        .with_thresholds(vec![1.0])
        .build()
        .expect("parameters are valid")
        .run(&mst, &SmallestPairFirst)
        .expect("run succeeds");

    assert_eq!(clustering.labels(), &[0, 0, 0, 0, 1, 1]);
}

#[test]
fn the_collapse_follows_the_replayed_dispersion_weights() {
    let (weights, endpoints) = ascending_path();
    let mst = Mst::new(6, &weights, &endpoints).expect("tree is well formed");

    // Same over-merged state as above, but the criterion now chases the
    // component that accumulated the most edge weight.
    let clustering = GicBuilder::new()
        .with_cluster_count(2)
        .with_add_clusters(1)
        .with_thresholds(vec![1.0])
        .build()
        .expect("parameters are valid")
        .run(&mst, &HeaviestPairFirst)
        .expect("run succeeds");

    assert_eq!(clustering.labels(), &[0, 0, 0, 0, 0, 1]);
}

#[test]
fn empty_thresholds_collapse_from_singletons() {
    let (weights, endpoints) = ascending_path();
    let mst = Mst::new(6, &weights, &endpoints).expect("tree is well formed");

    let clustering = GicBuilder::new()
        .with_cluster_count(3)
        .with_thresholds(Vec::new())
        .build()
        .expect("parameters are valid")
        .run(&mst, &SmallestPairFirst)
        .expect("run succeeds");

    // Ties resolve to the earliest live edge, pairing the path up from the
    // left: {0,1}, {2,3}, {4,5}.
    assert_eq!(clustering.labels(), &[0, 0, 1, 1, 2, 2]);
}

#[test]
fn the_criterion_receives_the_configured_dimensionality() {
    let (weights, endpoints) = ascending_path();
    let mst = Mst::new(6, &weights, &endpoints).expect("tree is well formed");
    let criterion = RecordingScore {
        seen: Cell::new(None),
    };

    GicBuilder::new()
        .with_cluster_count(2)
        .with_add_clusters(1)
        .with_dimensionality(7.5)
        .build()
        .expect("parameters are valid")
        .run(&mst, &criterion)
        .expect("run succeeds");

    assert_eq!(criterion.seen.get(), Some(7.5));
}

#[test]
fn oversized_add_clusters_clamp_to_the_point_count() {
    let (weights, endpoints) = ascending_path();
    let mst = Mst::new(6, &weights, &endpoints).expect("tree is well formed");

    let clustering = GicBuilder::new()
        .with_cluster_count(2)
        .with_add_clusters(100)
        .build()
        .expect("parameters are valid")
        .run(&mst, &SmallestPairFirst)
        .expect("run succeeds");

    assert_eq!(clustering.cluster_count(), 2);
    assert_eq!(clustering.labels().len(), 6);
}

#[test]
fn the_default_schedule_matches_genie_when_nothing_is_added() {
    let (weights, endpoints) = ascending_path();
    let mst = Mst::new(6, &weights, &endpoints).expect("tree is well formed");

    // With add_clusters = 0 the collapse phase has nothing to do, so the
    // result is exactly the over-merge phase's partition.
    let clustering = GicBuilder::new()
        .with_cluster_count(2)
        .build()
        .expect("parameters are valid")
        .run(&mst, &SmallestPairFirst)
        .expect("run succeeds");

    assert_eq!(clustering.cluster_count(), 2);
    assert_eq!(clustering.labels().len(), 6);
}
