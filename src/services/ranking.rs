use crate::domain::{slugify, PublishedCity, RawCityFact};
use crate::services::scoring::{live_rent, rent_score, total_score};

/// Scores every fact and orders the result by total score, best first.
///
/// Ids are the 1-based input positions. The sort is stable, so cities with
/// equal totals keep their input order.
pub fn rank_cities(facts: &[RawCityFact], adjustment: f64) -> Vec<PublishedCity> {
    let mut cities: Vec<PublishedCity> = facts
        .iter()
        .enumerate()
        .map(|(index, fact)| score_city(index + 1, fact, adjustment))
        .collect();

    cities.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
    cities
}

fn score_city(position: usize, fact: &RawCityFact, adjustment: f64) -> PublishedCity {
    let rent = live_rent(fact.base_rent, adjustment);
    let rent_score = rent_score(rent);

    PublishedCity {
        id: position.to_string(),
        name: fact.name.clone(),
        slug: slugify(&fact.name),
        country: fact.country.clone(),
        rent_price_1br: rent,
        rent_score,
        safety_index: fact.safety_index,
        expat_index: fact.expat_index,
        total_score: total_score(rent_score, fact.safety_index, fact.expat_index),
        description: fact.description.clone(),
    }
}
