use crate::domain::storage::Storage;
use crate::domain::RefreshMetadata;
use crate::error::Result;
use crate::infrastructure::{LiveSignal, SignalClient};
use crate::services::ranking::rank_cities;
use crate::services::validation::validate_facts;
use std::sync::Arc;
use tracing::{info, warn};

/// Where the rent adjustment comes from for a run.
pub enum SignalSource {
    Probe { client: SignalClient, url: String },
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefreshSummary {
    pub cities_written: usize,
    pub signal: LiveSignal,
}

pub struct RefreshService {
    store: Arc<dyn Storage>,
    signal: SignalSource,
}

impl RefreshService {
    pub fn new(store: Arc<dyn Storage + 'static>, signal: SignalSource) -> Self {
        Self { store, signal }
    }

    /// Recomputes the published dataset from the source list.
    ///
    /// Everything is computed before the dataset is touched, so a failure at
    /// any step leaves the previous dataset in place.
    pub async fn refresh(&self) -> Result<RefreshSummary> {
        info!("Starting city ranking refresh");

        let signal = self.live_signal().await;

        let facts = self.store.load_source_facts()?;
        info!("Loaded {} source cities", facts.len());

        validate_facts(&facts)?;

        let cities = rank_cities(&facts, signal.adjustment);
        self.store.save_published(&cities)?;

        let metadata = RefreshMetadata::new(cities.len(), signal.adjustment, signal.reachable);
        if let Err(e) = self.store.save_metadata(&metadata) {
            warn!("Failed to write refresh metadata: {e}");
        }

        info!("Success: {} cities updated in published dataset", cities.len());

        Ok(RefreshSummary {
            cities_written: cities.len(),
            signal,
        })
    }

    async fn live_signal(&self) -> LiveSignal {
        match &self.signal {
            SignalSource::Probe { client, url } => client.probe(url).await,
            SignalSource::Offline => {
                info!("Offline mode, skipping live signal");
                LiveSignal::offline()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PublishedCity, RawCityFact};
    use crate::error::CityError;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStore {
        facts: Option<Vec<RawCityFact>>,
        published: Mutex<Option<Vec<PublishedCity>>>,
        metadata: Mutex<Option<RefreshMetadata>>,
        fail_metadata: bool,
    }

    impl Storage for MemoryStore {
        fn load_source_facts(&self) -> Result<Vec<RawCityFact>> {
            self.facts
                .clone()
                .ok_or_else(|| CityError::SourceNotFound(PathBuf::from("source.json")))
        }

        fn load_published(&self) -> Result<Option<Vec<PublishedCity>>> {
            Ok(self.published.lock().unwrap().clone())
        }

        fn save_published(&self, cities: &[PublishedCity]) -> Result<()> {
            *self.published.lock().unwrap() = Some(cities.to_vec());
            Ok(())
        }

        fn save_metadata(&self, metadata: &RefreshMetadata) -> Result<()> {
            if self.fail_metadata {
                return Err(CityError::Io(std::io::Error::other("disk full")));
            }
            *self.metadata.lock().unwrap() = Some(metadata.clone());
            Ok(())
        }
    }

    fn fact(name: &str, base_rent: f64, safety: f64) -> RawCityFact {
        RawCityFact {
            name: name.to_string(),
            country: "Testland".to_string(),
            base_rent,
            safety_index: safety,
            expat_index: 70.0,
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn offline_refresh_publishes_ranked_dataset() {
        let store = Arc::new(MemoryStore {
            facts: Some(vec![fact("Dear", 3000.0, 60.0), fact("Cheap", 600.0, 80.0)]),
            ..Default::default()
        });
        let service = RefreshService::new(store.clone(), SignalSource::Offline);

        let summary = service.refresh().await.unwrap();
        assert_eq!(summary.cities_written, 2);
        assert_eq!(summary.signal, LiveSignal::offline());

        let published = store.load_published().unwrap().unwrap();
        assert_eq!(published[0].name, "Cheap");
        assert_eq!(published[0].id, "2");

        let metadata = store.metadata.lock().unwrap().clone().unwrap();
        assert_eq!(metadata.total_cities, 2);
        assert_eq!(metadata.live_adjustment, 1.0);
        assert!(!metadata.signal_reachable);
    }

    #[tokio::test]
    async fn missing_source_writes_nothing() {
        let store = Arc::new(MemoryStore::default());
        let service = RefreshService::new(store.clone(), SignalSource::Offline);

        let err = service.refresh().await.unwrap_err();
        assert!(matches!(err, CityError::SourceNotFound(_)));
        assert!(store.load_published().unwrap().is_none());
        assert!(store.metadata.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn invalid_fact_writes_nothing() {
        let store = Arc::new(MemoryStore {
            facts: Some(vec![fact("Fine", 1000.0, 80.0), fact("Broken", -5.0, 80.0)]),
            ..Default::default()
        });
        let service = RefreshService::new(store.clone(), SignalSource::Offline);

        let err = service.refresh().await.unwrap_err();
        assert!(matches!(err, CityError::InvalidFact { position: 2, .. }));
        assert!(store.load_published().unwrap().is_none());
    }

    #[tokio::test]
    async fn metadata_failure_keeps_published_dataset() {
        let store = Arc::new(MemoryStore {
            facts: Some(vec![fact("Only", 1000.0, 80.0)]),
            fail_metadata: true,
            ..Default::default()
        });
        let service = RefreshService::new(store.clone(), SignalSource::Offline);

        assert_eq!(service.refresh().await.unwrap().cities_written, 1);
        assert_eq!(store.load_published().unwrap().unwrap().len(), 1);
    }
}
