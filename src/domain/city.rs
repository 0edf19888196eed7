use serde::{Deserialize, Serialize, Serializer};

/// One unscored entry of the master source list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCityFact {
    pub name: String,
    pub country: String,
    pub base_rent: f64,
    pub safety_index: f64,
    pub expat_index: f64,
    pub description: String,
}

/// A scored city as shipped in the published dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedCity {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub country: String,
    #[serde(rename = "rentPrice1BR")]
    pub rent_price_1br: u32,
    #[serde(serialize_with = "whole_as_integer")]
    pub rent_score: f64,
    #[serde(serialize_with = "whole_as_integer")]
    pub safety_index: f64,
    #[serde(serialize_with = "whole_as_integer")]
    pub expat_index: f64,
    #[serde(serialize_with = "whole_as_integer")]
    pub total_score: f64,
    pub description: String,
}

/// Scores are written the way the source list writes them: `80`, not `80.0`.
fn whole_as_integer<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    // Below 2^53 every whole double converts to i64 without loss.
    if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

impl PublishedCity {
    /// Case-insensitive substring match over name and country.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.country.to_lowercase().contains(needle)
    }
}

/// Derives the URL slug for a city name: lowercase, spaces become hyphens,
/// commas are dropped.
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-").replace(',', "")
}
