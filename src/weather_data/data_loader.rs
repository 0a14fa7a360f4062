use crate::types::observation::ObservationRecord;
use crate::weather_data::error::WeatherDataError;
use crate::weather_data::fetcher::ObservationFetcher;
use crate::weather_data::parser::parse_payload;
use crate::weather_data::store::ObservationStore;
use log::{info, warn};
use std::path::Path;

/// Produces the in-memory observation table at startup.
///
/// With a fetcher, the payload is downloaded, parsed and written to the cache
/// file on every run. A failed download is not fatal: the previous cache file
/// is used instead, and without one the table is simply empty. The same
/// fallback applies when the body has data lines but none of them is a
/// complete observation, so an error body never replaces a good cache. A
/// payload with no data lines at all is fatal.
pub struct ObservationLoader {
    store: ObservationStore,
    fetcher: Option<ObservationFetcher>,
}

impl ObservationLoader {
    pub fn new(data_file: &Path, fetcher: Option<ObservationFetcher>) -> Self {
        Self {
            store: ObservationStore::new(data_file),
            fetcher,
        }
    }

    pub fn store(&self) -> &ObservationStore {
        &self.store
    }

    pub fn load(&self) -> Result<Vec<ObservationRecord>, WeatherDataError> {
        if let Some(fetcher) = &self.fetcher {
            match fetcher.fetch() {
                Ok(body) => match self.refresh_cache(&body) {
                    Err(WeatherDataError::NoRecords) => warn!(
                        "Download for station {} had no complete observation lines; keeping {}",
                        fetcher.station(),
                        self.store.path().display()
                    ),
                    result => return result,
                },
                Err(e) => warn!(
                    "Could not download observations for station {}: {}. Falling back to {}",
                    fetcher.station(),
                    e,
                    self.store.path().display()
                ),
            }
        }

        match self.store.load() {
            Ok(records) => {
                info!(
                    "Loaded {} cached observations from {}",
                    records.len(),
                    self.store.path().display()
                );
                Ok(records)
            }
            Err(WeatherDataError::CacheMissing(path)) => {
                warn!(
                    "No cached observations at {}; every lookup will come back empty",
                    path.display()
                );
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    fn refresh_cache(&self, body: &str) -> Result<Vec<ObservationRecord>, WeatherDataError> {
        let records = parse_payload(body)?;
        if records.is_empty() {
            return Err(WeatherDataError::NoRecords);
        }
        // Keep the freshly parsed table even if it cannot be persisted.
        if let Err(e) = self.store.save(&records) {
            warn!("Failed to write observation cache: {}", e);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::observation::tests::record;
    use crate::weather_data::fetcher::tests::serve_once;
    use chrono::NaiveDate;
    use std::time::Duration;
    use tempfile::tempdir;

    fn fetcher(base_url: String) -> ObservationFetcher {
        ObservationFetcher::builder()
            .station("47169")
            .start(NaiveDate::from_ymd_opt(2023, 3, 1).unwrap())
            .end(NaiveDate::from_ymd_opt(2023, 5, 31).unwrap())
            .auth_key("key")
            .base_url(base_url)
            .timeout(Duration::from_secs(5))
            .system_proxy(false)
            .build()
            .expect("client builds")
    }

    #[test]
    fn successful_fetch_refreshes_cache() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let data_file = dir.path().join("cache/weather_data.json");
        let base = serve_once(
            "200 OK",
            "#START7777\n202303010000,47169,15,60,270,3,200,900,800,700\n#7777END\n",
        );

        let loader = ObservationLoader::new(&data_file, Some(fetcher(base)));
        let records = loader.load()?;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].timestamp, "202303010000");
        assert_eq!(loader.store().load()?, records);
        Ok(())
    }

    #[test]
    fn failed_fetch_falls_back_to_cache() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let data_file = dir.path().join("weather_data.json");
        let cached = vec![record("202303010600", ["1", "2", "3", "4"], ["5", "6", "7"])];
        ObservationStore::new(&data_file).save(&cached)?;

        let base = serve_once("503 Service Unavailable", "");
        let records = ObservationLoader::new(&data_file, Some(fetcher(base))).load()?;
        assert_eq!(records, cached);
        Ok(())
    }

    #[test]
    fn error_body_keeps_existing_cache() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let data_file = dir.path().join("weather_data.json");
        let cached = vec![record("202303010600", ["1", "2", "3", "4"], ["5", "6", "7"])];
        let store = ObservationStore::new(&data_file);
        store.save(&cached)?;

        let base = serve_once(
            "200 OK",
            r#"{"result":{"status":401,"message":"invalid authKey"}}"#,
        );
        let records = ObservationLoader::new(&data_file, Some(fetcher(base))).load()?;

        assert_eq!(records, cached);
        assert_eq!(store.load()?, cached);
        Ok(())
    }

    #[test]
    fn error_body_without_cache_yields_empty_table() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let data_file = dir.path().join("weather_data.json");
        let base = serve_once("200 OK", "a,b\nc,d\n");
        let loader = ObservationLoader::new(&data_file, Some(fetcher(base)));

        assert!(loader.load()?.is_empty());
        assert!(!loader.store().exists());
        Ok(())
    }

    #[test]
    fn failed_fetch_without_cache_yields_empty_table() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let base = serve_once("500 Internal Server Error", "");
        let loader = ObservationLoader::new(&dir.path().join("none.json"), Some(fetcher(base)));
        assert!(loader.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn empty_payload_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let base = serve_once("200 OK", "#START7777\n#7777END\n");
        let loader = ObservationLoader::new(&dir.path().join("w.json"), Some(fetcher(base)));
        assert!(matches!(loader.load(), Err(WeatherDataError::EmptyPayload)));
        Ok(())
    }

    #[test]
    fn offline_reads_cache_only() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let data_file = dir.path().join("weather_data.json");
        let cached = vec![record("202303011200", ["1", "2", "3", "4"], ["5", "6", "7"])];
        ObservationStore::new(&data_file).save(&cached)?;

        assert_eq!(ObservationLoader::new(&data_file, None).load()?, cached);
        Ok(())
    }
}
