use cubefield_common::Cell;
use cubefield_kernel::{ClusterGrower, GrowConfig, validate_sequence};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

fn grow_seeded(target: usize, seed: u64) -> Vec<Cell> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    ClusterGrower::new(GrowConfig::unbounded())
        .grow(target, &mut rng)
        .expect("growth in open 3D space never stalls for good")
        .to_vec()
}

proptest! {
    #[test]
    fn grows_exactly_target_distinct_cells(target in 1usize..300, seed in any::<u64>()) {
        let cells = grow_seeded(target, seed);
        prop_assert_eq!(cells.len(), target);
        let unique: HashSet<Cell> = cells.iter().copied().collect();
        prop_assert_eq!(unique.len(), target);
    }

    #[test]
    fn first_cell_is_origin(target in 1usize..100, seed in any::<u64>()) {
        let cells = grow_seeded(target, seed);
        prop_assert_eq!(cells[0], Cell::ORIGIN);
    }

    #[test]
    fn each_cell_touches_an_earlier_one(target in 2usize..200, seed in any::<u64>()) {
        let cells = grow_seeded(target, seed);
        for i in 1..cells.len() {
            prop_assert!(
                cells[..i].iter().any(|p| p.is_face_adjacent(cells[i])),
                "cell {} at index {} has no earlier face neighbour",
                cells[i],
                i,
            );
        }
    }

    #[test]
    fn grown_sequences_pass_validation(target in 1usize..200, seed in any::<u64>()) {
        let cells = grow_seeded(target, seed);
        prop_assert_eq!(validate_sequence(&cells), Ok(()));
    }

    #[test]
    fn cluster_stays_within_reach_of_origin(target in 1usize..150, seed in any::<u64>()) {
        let cells = grow_seeded(target, seed);
        for c in &cells {
            prop_assert!((c.manhattan_distance(Cell::ORIGIN) as usize) < target);
        }
    }
}

#[test]
fn runs_are_replaced_not_accumulated() {
    let grower = ClusterGrower::default();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let first = grower.grow(50, &mut rng).unwrap();
    let second = grower.grow(5, &mut rng).unwrap();
    assert_eq!(first.len(), 50);
    assert_eq!(second.len(), 5);
    assert_eq!(second.seed(), Some(Cell::ORIGIN));
}

#[test]
fn default_bound_never_trips_in_open_space() {
    let grower = ClusterGrower::default();
    for seed in 0..20 {
        let cluster = grower
            .grow(1000, &mut ChaCha8Rng::seed_from_u64(seed))
            .unwrap();
        assert_eq!(cluster.len(), 1000);
    }
}
