use cityrank::domain::{RawCityFact, SortKey};
use cityrank::infrastructure::{BASELINE_ADJUSTMENT, LIVE_ADJUSTMENT};
use cityrank::services::ranking::rank_cities;
use cityrank::services::scoring::{live_rent, rent_score, round1, MAX_RENT, MIN_RENT};
use cityrank::services::view::{filter_and_sort, filter_cities, sort_cities};
use proptest::prelude::*;

fn adjustment() -> impl Strategy<Value = f64> {
    prop_oneof![Just(BASELINE_ADJUSTMENT), Just(LIVE_ADJUSTMENT)]
}

fn fact() -> impl Strategy<Value = RawCityFact> {
    (
        "[A-Za-z ,]{1,12}",
        "[A-Za-z]{1,10}",
        100u32..6000,
        0u32..=100,
        0u32..=100,
    )
        .prop_map(|(name, country, rent, safety, expat)| RawCityFact {
            name,
            country,
            base_rent: f64::from(rent),
            safety_index: f64::from(safety),
            expat_index: f64::from(expat),
            description: String::new(),
        })
}

proptest! {
    #[test]
    fn rent_score_is_bounded_and_non_increasing(
        adj in adjustment(),
        a in MIN_RENT as u32..=MAX_RENT as u32,
        b in MIN_RENT as u32..=MAX_RENT as u32,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_score = rent_score(live_rent(f64::from(low), adj));
        let high_score = rent_score(live_rent(f64::from(high), adj));

        prop_assert!((0.0..=100.0).contains(&low_score));
        prop_assert!((0.0..=100.0).contains(&high_score));
        prop_assert!(high_score <= low_score);
    }

    #[test]
    fn ranking_is_a_sorted_permutation(
        facts in prop::collection::vec(fact(), 0..30),
        adj in adjustment(),
    ) {
        let ranked = rank_cities(&facts, adj);
        prop_assert_eq!(ranked.len(), facts.len());

        let mut ids: Vec<usize> = ranked.iter().map(|c| c.id.parse().unwrap()).collect();
        ids.sort_unstable();
        prop_assert_eq!(ids, (1..=facts.len()).collect::<Vec<_>>());

        prop_assert!(ranked.windows(2).all(|w| w[0].total_score >= w[1].total_score));

        for city in &ranked {
            let expected = round1((city.rent_score + city.safety_index + city.expat_index) / 3.0);
            prop_assert_eq!(city.total_score, expected);
        }
    }

    #[test]
    fn filter_is_idempotent_and_sort_is_memoryless(
        facts in prop::collection::vec(fact(), 0..30),
        query in "[a-z]{0,2}",
    ) {
        let ranked = rank_cities(&facts, BASELINE_ADJUSTMENT);

        let once: Vec<_> = filter_cities(&ranked, &query).into_iter().cloned().collect();
        let twice: Vec<_> = filter_cities(&once, &query).into_iter().cloned().collect();
        prop_assert_eq!(&twice, &once);

        let mut resorted = filter_cities(&ranked, &query);
        sort_cities(&mut resorted, SortKey::Rent);
        sort_cities(&mut resorted, SortKey::Total);
        sort_cities(&mut resorted, SortKey::Rent);
        let direct = filter_and_sort(&ranked, &query, SortKey::Rent);
        let resorted_ids: Vec<&str> = resorted.iter().map(|c| c.id.as_str()).collect();
        let direct_ids: Vec<&str> = direct.iter().map(|c| c.id.as_str()).collect();
        prop_assert_eq!(resorted_ids, direct_ids);
    }
}
