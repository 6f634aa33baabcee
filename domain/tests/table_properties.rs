use std::cell::RefCell;
use std::time::Duration;

use admin_domain::table::{source_fn, FetchOutcome, FetchTicket, RecordSource, StaticSource};
use admin_domain::{FetchError, TableConfig, TableController};
use serde_json::{json, Value};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// 7 Active and 5 Inactive records
fn twelve_records() -> Vec<Value> {
    (1..=12)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("Record {i}"),
                "status": if i <= 7 { "Active" } else { "Inactive" },
                "customer": {"name": if i == 3 { "john smith" } else { "jane doe" }},
            })
        })
        .collect()
}

fn config() -> TableConfig {
    TableConfig::new()
        .with_page_size(10)
        .searchable(["name", "customer.name"])
        .with_status_field("status")
}

#[test]
fn pagination_covers_filtered_set() {
    init_tracing();
    for size in [0usize, 1, 10, 12, 31] {
        let records: Vec<Value> = (0..size).map(|i| json!({"name": format!("r{i}")})).collect();
        let mut controller = TableController::with_records(config(), records);

        let pages = controller.total_pages();
        let mut seen = 0;
        for page in 1..=pages {
            controller.set_current_page(page);
            let len = controller.paginated_data().len();
            if page < pages {
                assert_eq!(len, 10);
            } else {
                assert_eq!(len, controller.filtered_len() - (pages - 1) * 10);
            }
            seen += len;
        }
        assert_eq!(seen, controller.filtered_len());
    }
}

#[test]
fn applying_same_query_twice_is_idempotent() {
    let mut controller = TableController::with_records(config(), twelve_records());

    controller.set_search_query("record 1");
    let once: Vec<Value> = controller.paginated_data().into_iter().cloned().collect();
    controller.set_search_query("record 1");
    let twice: Vec<Value> = controller.paginated_data().into_iter().cloned().collect();

    assert_eq!(once, twice);
}

#[test]
fn empty_query_restores_full_set() {
    let mut controller = TableController::with_records(config(), twelve_records());
    controller.set_search_query("jane");
    assert_eq!(controller.filtered_len(), 11);

    controller.set_search_query("");
    let all: Vec<&Value> = controller.records().iter().collect();
    assert_eq!(controller.filtered_data(), all);
}

#[test]
fn search_ignores_case_and_follows_nested_paths() {
    let mut controller = TableController::with_records(config(), twelve_records());

    controller.set_search_query("SMITH");
    let hits = controller.paginated_data();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["id"], 3);
}

#[test]
fn filter_change_pulls_page_back_into_range() {
    let records: Vec<Value> = (0..50).map(|i| json!({"name": format!("item {i}")})).collect();
    let mut controller = TableController::with_records(config(), records);
    controller.set_current_page(5);
    assert_eq!(controller.current_page(), 5);

    // "item 1" and "item 10".."item 19" → 11 rows, 2 pages
    controller.set_search_query("item 1");
    assert_eq!(controller.total_pages(), 2);
    assert!(controller.current_page() <= 2);
    assert_eq!(controller.current_page(), 1);
}

#[test]
fn status_then_search_scenario() {
    let mut controller = TableController::with_records(config(), twelve_records());

    controller.set_status_filter("Active");
    assert_eq!(controller.filtered_len(), 7);
    assert_eq!(controller.total_pages(), 1);
    assert_eq!(controller.paginated_data().len(), 7);

    controller.set_search_query("zzz-no-match");
    assert_eq!(controller.filtered_len(), 0);
    assert_eq!(controller.total_pages(), 1);
    assert_eq!(controller.current_page(), 1);
    assert!(controller.paginated_data().is_empty());
}

#[tokio::test]
async fn failed_reload_keeps_stale_records() {
    init_tracing();
    let records = vec![json!({"name": "a"}), json!({"name": "b"}), json!({"name": "c"})];
    let mut controller = TableController::new(config());

    let outcome = controller.load(&StaticSource::new(records.clone())).await;
    assert_eq!(outcome, FetchOutcome::Loaded { records: 3 });

    let failing = source_fn(|| async { Err::<Vec<Value>, _>(anyhow::anyhow!("backend unavailable")) });
    let outcome = controller.reload(&failing).await;

    assert_eq!(outcome, FetchOutcome::Failed);
    assert_eq!(controller.paginated_data(), records.iter().collect::<Vec<_>>());
    assert_eq!(controller.error(), Some(&FetchError::Other("backend unavailable".to_string())));
    assert!(!controller.is_loading());
}

#[tokio::test]
async fn successful_reload_clears_error() {
    let mut controller = TableController::new(config());

    let failing = source_fn(|| async { Err::<Vec<Value>, _>(FetchError::Network("offline".to_string())) });
    controller.load(&failing).await;
    assert!(controller.error().is_some());

    controller.reload(&StaticSource::new(twelve_records())).await;
    assert!(controller.error().is_none());
    assert_eq!(controller.records().len(), 12);
}

async fn finish_fetch(
    controller: &RefCell<TableController<Value>>,
    ticket: FetchTicket,
    source: &dyn RecordSource<Value>,
) -> FetchOutcome {
    let result = source.fetch().await;
    controller.borrow_mut().complete_fetch(ticket, result)
}

#[tokio::test]
async fn slow_superseded_fetch_does_not_win() {
    init_tracing();
    let controller = RefCell::new(TableController::new(config()));

    let slow = source_fn(|| async {
        tokio::time::sleep(Duration::from_millis(60)).await;
        Ok::<_, FetchError>(twelve_records())
    });
    let fast = source_fn(|| async {
        tokio::time::sleep(Duration::from_millis(5)).await;
        Ok::<_, FetchError>(vec![json!({"name": "fresh"})])
    });

    let slow_ticket = controller.borrow_mut().begin_fetch();
    let fast_ticket = controller.borrow_mut().begin_fetch();
    let (first, second) = tokio::join!(
        finish_fetch(&controller, slow_ticket, &slow),
        finish_fetch(&controller, fast_ticket, &fast),
    );

    assert_eq!(second, FetchOutcome::Loaded { records: 1 });
    assert_eq!(first, FetchOutcome::Stale);

    let controller = controller.into_inner();
    assert_eq!(controller.records().len(), 1);
    assert!(!controller.is_loading());
}
