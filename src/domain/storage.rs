use super::{PublishedCity, RawCityFact, RefreshMetadata};
use crate::error::Result;

pub trait Storage: Send + Sync {
    /// Reads the master list. A missing file is an error, not an empty list.
    fn load_source_facts(&self) -> Result<Vec<RawCityFact>>;
    fn load_published(&self) -> Result<Option<Vec<PublishedCity>>>;
    /// Replaces the published dataset wholesale.
    fn save_published(&self, cities: &[PublishedCity]) -> Result<()>;
    fn save_metadata(&self, metadata: &RefreshMetadata) -> Result<()>;
}
