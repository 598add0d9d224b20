//! End-to-end pipeline tests: resolve at startup, mutate the cart,
//! replace the catalog from an upload.

use async_trait::async_trait;
use framekit_catalog::prelude::*;
use framekit_ingest::{
    load_upload, resolve, CatalogSource, FetchError, IngestError, ResolvedFrom, SourceFetcher,
    UploadSource,
};
use std::collections::HashMap;

struct MapFetcher {
    payloads: HashMap<String, String>,
}

impl MapFetcher {
    fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            payloads: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

#[async_trait]
impl SourceFetcher for MapFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        self.payloads
            .get(path)
            .cloned()
            .ok_or_else(|| FetchError::Connection(format!("unreachable: {path}")))
    }
}

struct TextUpload {
    name: &'static str,
    body: &'static str,
}

#[async_trait]
impl UploadSource for TextUpload {
    fn file_name(&self) -> &str {
        self.name
    }

    async fn read_text(&self) -> Result<String, std::io::Error> {
        Ok(self.body.to_string())
    }
}

#[tokio::test]
async fn startup_resolution_replaces_defaults() {
    let fetcher = MapFetcher::new(&[(
        "/kits.json",
        r#"[
            {"id":"rk-100","name":"Remote Kit","tagline":"from json","price":"$45,000",
             "leadTimeWeeks":"4","roofOptions":"Gable","bestSeller":"y"}
        ]"#,
    )]);

    let mut store = CatalogStore::new();
    let resolution = resolve(&fetcher, &CatalogSource::standard()).await;
    assert_eq!(
        resolution.origin,
        ResolvedFrom::Source("/kits.json".to_string())
    );
    // CSV candidate was never consulted: the first source won.
    assert!(resolution.failures.is_empty());

    assert!(store.apply_resolution(resolution.kits));
    assert_eq!(store.kits().len(), 1);
    let kit = &store.kits()[0];
    assert_eq!(kit.price, 45000.0);
    assert_eq!(kit.lead_time_weeks, Some(4.0));
    assert!(kit.best_seller);
    assert_eq!(kit.price_label(), "$45,000");
}

#[tokio::test]
async fn offline_startup_keeps_defaults_and_cart_works() {
    let fetcher = MapFetcher::new(&[]);
    let mut store = CatalogStore::new();

    let resolution = resolve(&fetcher, &CatalogSource::standard()).await;
    assert_eq!(resolution.origin, ResolvedFrom::Defaults);
    assert_eq!(resolution.failures.len(), 2);
    for failure in &resolution.failures {
        assert!(matches!(failure.reason, IngestError::SourceUnavailable(_)));
    }
    store.apply_resolution(resolution.kits);

    let id = store.kits()[1].id.clone();
    store.add_line(&id).unwrap();
    store.add_line(&id).unwrap();
    assert_eq!(store.cart().len(), 1);
    assert_eq!(store.item_count(), 2);
    assert_eq!(format_usd(store.subtotal()), "$258,000");
}

#[tokio::test]
async fn late_resolution_is_dropped_after_shutdown() {
    let fetcher = MapFetcher::new(&[("/kits.json", r#"[{"id":"late","price":1}]"#)]);
    let mut store = CatalogStore::new();

    let resolution = resolve(&fetcher, &CatalogSource::standard()).await;
    store.shutdown();
    assert!(!store.apply_resolution(resolution.kits));
    assert_eq!(store.kits().len(), 3);
}

#[tokio::test]
async fn upload_replaces_catalog_wholesale() {
    let mut store = CatalogStore::new();
    assert_eq!(store.kits().len(), 3);

    let upload = TextUpload {
        name: "kits.json",
        body: r#"[
            {"id":"up-1","name":"Uploaded One","price":10000,"cladding":"EIFS;Stucco"},
            {"id":"up-2","name":"Uploaded Two","price":"$20,000"}
        ]"#,
    };
    let kits = load_upload(&upload).await.unwrap();
    store.replace_catalog(kits);

    assert_eq!(store.kits().len(), 2);
    assert_eq!(store.kits()[0].cladding, vec!["EIFS", "Stucco"]);
    assert_eq!(store.kits()[1].price, 20000.0);
    assert!(catalog_diagnostics(store.kits()).iter().all(|d| d.pass));
}

#[tokio::test]
async fn failed_upload_leaves_state_unchanged() {
    let mut store = CatalogStore::new();
    let before = store.kits().to_vec();

    let upload = TextUpload {
        name: "kits.json",
        body: "not json at all",
    };
    let err = load_upload(&upload).await.unwrap_err();
    assert!(err.to_string().starts_with("Failed to load data:"));

    // Nothing was returned, so nothing was swapped.
    assert_eq!(store.kits(), before.as_slice());
}

#[tokio::test]
async fn csv_upload_round_trips_through_same_pipeline() {
    let mut store = CatalogStore::new();
    let upload = TextUpload {
        name: "kits.csv",
        body: "id,name,price,roofOptions,premium\n\
               up-csv,\"CSV, Kit\",\"$75,000\",\"Gable;Sawtooth\",yes\n",
    };
    store.replace_catalog(load_upload(&upload).await.unwrap());

    let kit = &store.kits()[0];
    assert_eq!(kit.name, "CSV, Kit");
    assert_eq!(kit.price, 75000.0);
    assert_eq!(kit.roof_summary(), "Gable, Sawtooth");
    assert!(kit.premium);
}
