// Host-side tests for the primary/secondary interleave.

use tunnel_core::{ShapeKind, ShapeSequence};

fn gaps_between_primaries(seq: &ShapeSequence) -> Vec<usize> {
    let pos = seq.primary_positions();
    pos.windows(2).map(|w| w[1] - w[0] - 1).collect()
}

#[test]
fn default_counts_produce_expected_layout() {
    let seq = ShapeSequence::build(15, 202);
    assert_eq!(seq.len(), 217);
    assert_eq!(seq.count(ShapeKind::Primary), 15);
    assert_eq!(seq.count(ShapeKind::Secondary), 202);
    // 202 / 16 = 12.625 per segment; first primary after round(12.625) = 13
    assert_eq!(seq.get(13), Some(ShapeKind::Primary));
    assert_eq!(seq.get(0), Some(ShapeKind::Secondary));
    assert_eq!(seq.get(216), Some(ShapeKind::Secondary));
}

#[test]
fn length_and_primary_count_hold_for_all_small_inputs() {
    for primary in 1..=30 {
        for secondary in 0..=120 {
            let seq = ShapeSequence::build(primary, secondary);
            assert_eq!(seq.len(), primary + secondary, "p={primary} s={secondary}");
            assert_eq!(seq.count(ShapeKind::Primary), primary, "p={primary} s={secondary}");
            assert_eq!(seq.count(ShapeKind::Secondary), secondary, "p={primary} s={secondary}");
        }
    }
}

#[test]
fn primaries_are_evenly_spread() {
    for primary in 2..=25 {
        for secondary in 0..=150 {
            let seq = ShapeSequence::build(primary, secondary);
            let gaps = gaps_between_primaries(&seq);
            let min = gaps.iter().copied().min().unwrap_or(0);
            let max = gaps.iter().copied().max().unwrap_or(0);
            assert!(
                max - min <= 1,
                "uneven gaps for p={primary} s={secondary}: {gaps:?}"
            );
        }
    }
}

#[test]
fn primaries_never_cluster_when_secondaries_outnumber_them() {
    let seq = ShapeSequence::build(10, 40);
    let kinds: Vec<ShapeKind> = seq.iter().collect();
    for w in kinds.windows(2) {
        assert!(
            !(w[0] == ShapeKind::Primary && w[1] == ShapeKind::Primary),
            "adjacent primaries in {kinds:?}"
        );
    }
}

#[test]
fn build_is_deterministic() {
    assert_eq!(ShapeSequence::build(7, 93), ShapeSequence::build(7, 93));
}

#[test]
fn zero_primaries_yields_all_secondaries() {
    let seq = ShapeSequence::build(0, 12);
    assert_eq!(seq.len(), 12);
    assert!(seq.iter().all(|k| k == ShapeKind::Secondary));
    assert!(seq.primary_positions().is_empty());
}

#[test]
fn zero_counts_yield_empty_sequence() {
    let seq = ShapeSequence::build(0, 0);
    assert!(seq.is_empty());
    assert_eq!(seq.get(0), None);
}

#[test]
fn primaries_only_when_no_secondaries() {
    let seq = ShapeSequence::build(4, 0);
    assert_eq!(seq.len(), 4);
    assert!(seq.iter().all(|k| k == ShapeKind::Primary));
}

#[test]
fn single_primary_sits_in_the_middle() {
    let seq = ShapeSequence::build(1, 10);
    assert_eq!(seq.primary_positions(), vec![5]);
}
