use eco_core::{FieldConfig, SimulationConfig};
use eco_world::Simulator;
use proptest::prelude::*;
use std::collections::HashSet;

fn dense_config(seed: u64, depth: i32, width: i32) -> SimulationConfig {
    SimulationConfig {
        seed,
        field: FieldConfig { depth, width },
        fox_creation_probability: 0.1,
        deer_creation_probability: 0.6,
        ..Default::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_field_matches_roster_every_tick(
        seed in any::<u64>(),
        depth in 1i32..=12,
        width in 1i32..=12,
        ticks in 1usize..=25,
    ) {
        let mut sim = Simulator::new(dense_config(seed, depth, width)).unwrap();
        prop_assert!(sim.ecosystem().is_consistent());

        for _ in 0..ticks {
            sim.simulate_one_step().unwrap();

            let eco = sim.ecosystem();
            prop_assert!(eco.is_consistent());

            let roster: HashSet<_> = sim.roster().iter().copied().collect();
            prop_assert_eq!(roster.len(), sim.roster().len());
            prop_assert_eq!(eco.field().occupied_count(), roster.len());
            prop_assert_eq!(eco.population().len(), roster.len());

            for (loc, cell) in eco.field().iter() {
                if let Some(id) = cell {
                    prop_assert!(roster.contains(&id));
                    prop_assert_eq!(eco.animal(id).unwrap().location(), Some(loc));
                }
            }
            prop_assert_eq!(sim.census().total() as usize, roster.len());
        }
    }

    #[test]
    fn prop_same_seed_same_run(seed in any::<u64>()) {
        let mut a = Simulator::new(dense_config(seed, 8, 8)).unwrap();
        let mut b = Simulator::new(dense_config(seed, 8, 8)).unwrap();
        for _ in 0..15 {
            a.simulate_one_step().unwrap();
            b.simulate_one_step().unwrap();
            prop_assert_eq!(a.census(), b.census());
            prop_assert_eq!(a.roster(), b.roster());
        }
    }
}
