use proptest::prelude::*;
use rafflepool::{PoolError, RafflePool};
use rand::SeedableRng;
use rand_pcg::Pcg32;

proptest! {
    #[test]
    fn prop_tickets_conserved_across_adds_and_removes(
        weights in prop::collection::vec(1u64..100, 1..30),
        remove_mask in prop::collection::vec(any::<bool>(), 30)
    ) {
        let mut pool = RafflePool::new(32);
        for (i, &w) in weights.iter().enumerate() {
            pool.add(w, i).unwrap();
        }

        let mut expected: u64 = weights.iter().sum();
        prop_assert_eq!(pool.num_tickets(), expected);

        for (i, &w) in weights.iter().enumerate() {
            if remove_mask[i] {
                prop_assert!(pool.remove(&i));
                expected -= w;
                prop_assert_eq!(pool.num_tickets(), expected);
            }
        }
    }

    #[test]
    fn prop_tickets_conserved_across_draws(
        weights in prop::collection::vec(1u64..100, 1..30),
        seed in any::<u64>()
    ) {
        let mut pool = RafflePool::new(32);
        for (i, &w) in weights.iter().enumerate() {
            pool.add(w, i).unwrap();
        }
        let mut rng = Pcg32::seed_from_u64(seed);

        let mut expected: u64 = weights.iter().sum();
        while let Some(i) = pool.draw(&mut rng) {
            expected -= weights[i];
            prop_assert_eq!(pool.num_tickets(), expected);
        }
        prop_assert_eq!(pool.num_tickets(), 0);
        prop_assert!(pool.is_empty());
    }

    #[test]
    fn prop_consuming_draws_never_repeat(
        weights in prop::collection::vec(1u64..50, 1..30),
        seed in any::<u64>()
    ) {
        let mut pool = RafflePool::new(30);
        for (i, &w) in weights.iter().enumerate() {
            pool.add(w, i).unwrap();
        }
        let mut rng = Pcg32::seed_from_u64(seed);

        let mut seen = std::collections::HashSet::new();
        while let Some(i) = pool.draw(&mut rng) {
            prop_assert!(seen.insert(i), "value {} drawn twice", i);
        }

        // Every entrant came out exactly once, then emptiness is sticky.
        prop_assert_eq!(seen.len(), weights.len());
        prop_assert_eq!(pool.draw(&mut rng), None);
        prop_assert_eq!(pool.draw(&mut rng), None);
    }

    #[test]
    fn prop_clear_matches_fresh_pool(
        weights in prop::collection::vec(1u64..100, 1..16),
        seed in any::<u64>()
    ) {
        let mut pool = RafflePool::new(16);
        for (i, &w) in weights.iter().enumerate() {
            pool.add(w, i).unwrap();
        }
        let mut rng = Pcg32::seed_from_u64(seed);
        let _ = pool.draw(&mut rng);
        pool.clear();

        prop_assert_eq!(pool.num_tickets(), 0);
        prop_assert_eq!(pool.len(), 0);
        prop_assert_eq!(pool.draw(&mut rng), None);

        // A cleared pool accepts a full complement again, like a fresh one.
        for i in 0..16usize {
            pool.add(1, i).unwrap();
        }
        prop_assert_eq!(
            pool.add(1, 16),
            Err(PoolError::CapacityExceeded { capacity: 16 })
        );
    }

    #[test]
    fn prop_capacity_is_a_hard_bound(
        capacity in 1usize..20,
        extra in 1usize..5
    ) {
        let mut pool = RafflePool::new(capacity);
        for i in 0..capacity {
            pool.add(1, i).unwrap();
        }
        let tickets = pool.num_tickets();

        for i in 0..extra {
            prop_assert_eq!(
                pool.add(1, capacity + i),
                Err(PoolError::CapacityExceeded { capacity })
            );
        }
        prop_assert_eq!(pool.num_tickets(), tickets);
        prop_assert_eq!(pool.len(), capacity);
    }

    #[test]
    fn prop_remove_then_add_reuses_a_slot(
        weights in prop::collection::vec(1u64..100, 2..12),
        seed in any::<u64>()
    ) {
        let capacity = weights.len();
        let mut pool = RafflePool::new(capacity);
        for (i, &w) in weights.iter().enumerate() {
            pool.add(w, i).unwrap();
        }

        let victim = (seed as usize) % capacity;
        prop_assert!(pool.remove(&victim));
        pool.add(weights[victim], victim).unwrap();

        let total: u64 = weights.iter().sum();
        prop_assert_eq!(pool.num_tickets(), total);
        prop_assert_eq!(pool.len(), capacity);
    }
}
