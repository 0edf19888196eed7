mod city;
mod metadata;
mod sort;
pub(crate) mod storage;

pub use city::{slugify, PublishedCity, RawCityFact};
pub use metadata::RefreshMetadata;
pub use sort::SortKey;
pub use storage::Storage;
