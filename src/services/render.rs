use crate::domain::{PublishedCity, SortKey};
use crate::services::view::CityListing;
use std::fmt::Write;

/// Plain-text rendering of a listing for the terminal.
pub fn render_listing(listing: &CityListing<'_>) -> String {
    let mut out = String::new();

    let mut badges = vec![listing.count_label(), listing.sort_label()];
    badges.extend(listing.search_label());
    let _ = writeln!(out, "[{}]", badges.join("] ["));
    out.push('\n');

    if listing.is_empty() {
        out.push_str("No cities found.\n");
        out.push_str("Clear search: run again without --query\n");
        return out;
    }

    for (index, city) in listing.cities().iter().enumerate() {
        render_city(&mut out, index + 1, city, listing.sort());
    }

    out
}

fn render_city(out: &mut String, rank: usize, city: &PublishedCity, sort: SortKey) {
    // The active sort column is starred.
    let mark = |key: SortKey| if key == sort { "*" } else { "" };

    let _ = writeln!(out, "{rank:>3}. {} ({})", city.name, city.country);
    if !city.description.is_empty() {
        let _ = writeln!(out, "     {}", city.description);
    }
    let _ = writeln!(
        out,
        "     Rent{} ${}  Safety{} {}  Expat{} {}  Total{} {}",
        mark(SortKey::Rent),
        city.rent_price_1br,
        mark(SortKey::Safety),
        city.safety_index,
        mark(SortKey::Expat),
        city.expat_index,
        mark(SortKey::Total),
        city.total_score,
    );
    let _ = writeln!(
        out,
        "     rent score {:.1} | safety score {} | expat score {}",
        city.rent_score, city.safety_index, city.expat_index,
    );
}
