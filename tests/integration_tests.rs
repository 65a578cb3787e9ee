use hn_scraper::{CliConfig, Item, LocalStorage, ThreadScraper};
use httpmock::prelude::*;
use tempfile::TempDir;

fn test_config(server: &MockServer, output_dir: &TempDir) -> CliConfig {
    CliConfig {
        url_or_id: "99".to_string(),
        output: output_dir
            .path()
            .join("jobs.json")
            .to_str()
            .unwrap()
            .to_string(),
        limit: None,
        max_concurrent: 5,
        delay: 0.0,
        api_base: server.base_url(),
        log_file: None,
        verbose: false,
    }
}

#[tokio::test]
async fn test_end_to_end_scrape_with_real_http() {
    let temp_dir = TempDir::new().unwrap();

    let server = MockServer::start();
    let thread_mock = server.mock(|when, then| {
        when.method(GET).path("/item/99.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"id": 99, "type": "story", "kids": [1, 2, 3]}));
    });
    for id in [1u64, 2, 3] {
        server.mock(move |when, then| {
            when.method(GET).path(format!("/item/{}.json", id));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "id": id,
                    "type": "comment",
                    "by": "poster",
                    "text": format!("Job posting {}", id),
                }));
        });
    }

    let config = test_config(&server, &temp_dir);
    let output_path = config.output.clone();
    let storage = LocalStorage::new(String::new());
    let scraper = ThreadScraper::new(storage, config);

    let result = scraper.run(99).await;

    assert!(result.is_ok());
    thread_mock.assert();

    let written = std::fs::read_to_string(&output_path).unwrap();
    let items: Vec<Item> = serde_json::from_str(&written).unwrap();

    let mut ids: Vec<u64> = items.iter().filter_map(Item::id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3]);

    // Human-readable indentation, not a single-line dump.
    assert!(written.starts_with("[\n"));
}

#[tokio::test]
async fn test_end_to_end_partial_success_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/item/99.json");
        then.status(200)
            .json_body(serde_json::json!({"id": 99, "kids": [1, 2]}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/item/1.json");
        then.status(200).json_body(serde_json::json!({"id": 1}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/item/2.json");
        then.status(503);
    });

    let config = test_config(&server, &temp_dir);
    let output_path = config.output.clone();
    let scraper = ThreadScraper::new(LocalStorage::new(String::new()), config);

    let result = scraper.run(99).await;

    assert!(result.is_ok());

    let written = std::fs::read_to_string(&output_path).unwrap();
    let items: Vec<Item> = serde_json::from_str(&written).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id(), Some(1));
}

#[tokio::test]
async fn test_end_to_end_root_failure_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();

    let server = MockServer::start();
    let thread_mock = server.mock(|when, then| {
        when.method(GET).path("/item/99.json");
        then.status(404);
    });

    let config = test_config(&server, &temp_dir);
    let output_path = config.output.clone();
    let scraper = ThreadScraper::new(LocalStorage::new(String::new()), config);

    let result = scraper.run(99).await;

    assert!(result.is_err());
    thread_mock.assert();
    assert!(!std::path::Path::new(&output_path).exists());
}
