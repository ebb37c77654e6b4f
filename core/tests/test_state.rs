//! Tests for state management: seed access, snapshot/restore, forking,
//! reseeding and serde round-trips.

use procgen_rng_core::{Algorithm, FixedEntropy, NoEntropy, Rng, RngError, Seed};

#[test]
fn test_get_seed_is_stable_across_draws() {
    let mut rng = Rng::from_seed(Seed::Int(77), Algorithm::Xoshiro128StarStar);
    let seed = rng.get_seed();
    for _ in 0..100 {
        rng.uint32();
    }
    assert_eq!(rng.get_seed(), seed, "drawing must not change the seed");
}

#[test]
fn test_snapshot_round_trip_replays_draws() {
    let mut rng = Rng::from_seed(Seed::from("snapshot"), Algorithm::Xoshiro128StarStar);
    for _ in 0..25 {
        rng.uint32();
    }

    let snapshot = rng.get_state().unwrap();
    let first: Vec<u32> = (0..50).map(|_| rng.uint32()).collect();

    rng.set_state(&snapshot).unwrap();
    let second: Vec<u32> = (0..50).map(|_| rng.uint32()).collect();

    assert_eq!(first, second, "restored state must replay the sequence");
}

#[test]
fn test_snapshot_transfers_between_instances() {
    let mut source = Rng::from_seed(Seed::Int(5), Algorithm::Xoshiro128StarStar);
    source.uint32();
    let snapshot = source.get_state().unwrap();

    // A differently seeded generator adopts the snapshot wholesale.
    let mut target = Rng::from_seed(Seed::Int(999), Algorithm::Xoshiro128StarStar);
    target.set_state(&snapshot).unwrap();

    for _ in 0..50 {
        assert_eq!(source.uint32(), target.uint32());
    }
}

#[test]
fn test_mulberry_get_state_unsupported() {
    let rng = Rng::from_seed(Seed::Int(1), Algorithm::Mulberry32);
    assert_eq!(
        rng.get_state(),
        Err(RngError::UnsupportedForAlgorithm {
            algorithm: Algorithm::Mulberry32
        })
    );
}

#[test]
fn test_mulberry_set_state_unsupported() {
    let mut xoshiro = Rng::from_seed(Seed::Int(1), Algorithm::Xoshiro128StarStar);
    let snapshot = xoshiro.get_state().unwrap();

    let mut mulberry = Rng::from_seed(Seed::Int(1), Algorithm::Mulberry32);
    let mut witness = mulberry.clone();
    assert_eq!(
        mulberry.set_state(&snapshot),
        Err(RngError::UnsupportedForAlgorithm {
            algorithm: Algorithm::Mulberry32
        })
    );
    assert_eq!(
        mulberry.uint32(),
        witness.uint32(),
        "rejected set_state must not disturb the generator"
    );
}

#[test]
fn test_fork_is_deterministic() {
    let mut a = Rng::from_seed(Seed::from("fork"), Algorithm::Xoshiro128StarStar);
    let mut b = Rng::from_seed(Seed::from("fork"), Algorithm::Xoshiro128StarStar);

    let mut fork_a = a.fork();
    let mut fork_b = b.fork();

    for _ in 0..100 {
        assert_eq!(
            fork_a.uint32(),
            fork_b.uint32(),
            "identical parents must produce identical forks"
        );
    }
}

#[test]
fn test_fork_consumes_exactly_one_draw() {
    let mut forked = Rng::from_seed(Seed::Int(3), Algorithm::Xoshiro128StarStar);
    let mut witness = forked.clone();

    forked.fork();
    witness.uint32();

    for _ in 0..50 {
        assert_eq!(forked.uint32(), witness.uint32());
    }
}

#[test]
fn test_fork_diverges_from_parent() {
    let mut parent = Rng::from_seed(Seed::from("diverge"), Algorithm::Xoshiro128StarStar);
    let mut child = parent.fork();

    let parent_draws: Vec<u32> = (0..16).map(|_| parent.uint32()).collect();
    let child_draws: Vec<u32> = (0..16).map(|_| child.uint32()).collect();
    assert_ne!(
        parent_draws, child_draws,
        "child must not mirror the parent's continued sequence"
    );
}

#[test]
fn test_fork_keeps_algorithm() {
    for algorithm in [Algorithm::Mulberry32, Algorithm::Xoshiro128StarStar] {
        let mut parent = Rng::from_seed(Seed::Int(8), algorithm);
        assert_eq!(parent.fork().algorithm(), algorithm);
    }
}

#[test]
fn test_set_seed_resets_to_fresh_sequence() {
    let mut reseeded = Rng::from_seed(Seed::Int(100), Algorithm::Xoshiro128StarStar);
    for _ in 0..37 {
        reseeded.uint32();
    }
    reseeded.set_seed(&Seed::Int(200), None);

    let mut fresh = Rng::from_seed(Seed::Int(200), Algorithm::Xoshiro128StarStar);
    for _ in 0..100 {
        assert_eq!(
            reseeded.uint32(),
            fresh.uint32(),
            "reseed must fully discard prior state"
        );
    }
}

#[test]
fn test_set_seed_can_switch_algorithm() {
    let mut rng = Rng::from_seed(Seed::Int(1), Algorithm::Xoshiro128StarStar);
    rng.set_seed(&Seed::Int(1), Some(Algorithm::Mulberry32));
    assert_eq!(rng.algorithm(), Algorithm::Mulberry32);
    assert!(rng.get_state().is_err(), "switched algorithm has no snapshot");
}

#[test]
fn test_reseed_from_entropy_applies_words() {
    let mut rng = Rng::from_seed(Seed::Int(1), Algorithm::Xoshiro128StarStar);
    rng.reseed_from_entropy(&FixedEntropy::new([4, 3, 2, 1]), None)
        .unwrap();
    assert_eq!(rng.get_seed().words(), [4, 3, 2, 1]);
}

#[test]
fn test_failed_entropy_reseed_leaves_generator_untouched() {
    let mut rng = Rng::from_seed(Seed::Int(1), Algorithm::Xoshiro128StarStar);
    let mut witness = rng.clone();

    assert_eq!(
        rng.reseed_from_entropy(&NoEntropy, Some(Algorithm::Mulberry32)),
        Err(RngError::EntropyUnavailable)
    );
    assert_eq!(rng.algorithm(), Algorithm::Xoshiro128StarStar);
    for _ in 0..20 {
        assert_eq!(rng.uint32(), witness.uint32());
    }
}

#[test]
fn test_serde_round_trip_resumes_sequence() {
    let mut rng = Rng::from_seed(Seed::from("serde"), Algorithm::Xoshiro128StarStar);
    for _ in 0..13 {
        rng.uint32();
    }

    let json = serde_json::to_string(&rng).unwrap();
    let mut restored: Rng = serde_json::from_str(&json).unwrap();

    for _ in 0..100 {
        assert_eq!(
            rng.uint32(),
            restored.uint32(),
            "deserialized generator must continue the sequence"
        );
    }
}

#[test]
fn test_serde_round_trip_mulberry() {
    let mut rng = Rng::from_seed(Seed::Int(12), Algorithm::Mulberry32);
    rng.uint32();

    let json = serde_json::to_string(&rng).unwrap();
    let mut restored: Rng = serde_json::from_str(&json).unwrap();

    for _ in 0..50 {
        assert_eq!(rng.uint32(), restored.uint32());
    }
}

#[test]
fn test_snapshot_serde_round_trip() {
    let mut rng = Rng::from_seed(Seed::Int(66), Algorithm::Xoshiro128StarStar);
    rng.uint32();
    let snapshot = rng.get_state().unwrap();

    let json = serde_json::to_string(&snapshot).unwrap();
    let restored = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot, restored);
}
