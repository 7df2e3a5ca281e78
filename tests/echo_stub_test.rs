use async_trait::async_trait;
use dcp_inventory::{
    Batch, Endpoint, HttpMethod, HttpRequest, HttpResponse, InventoryApi, InventoryError, Result,
    Transport,
};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

const BASE: &str = "http://stub.local/api";

/// 模擬後端：create 時配發 batchId 並原樣回傳，delete 會移除紀錄
#[derive(Default)]
struct EchoBatchBackend {
    records: Mutex<BTreeMap<i64, Value>>,
    next_id: Mutex<i64>,
}

#[async_trait]
impl Transport for EchoBatchBackend {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let path = request
            .url
            .strip_prefix(BASE)
            .unwrap_or(request.url.as_str())
            .to_string();
        let mut records = self.records.lock().await;

        let response = match (request.method, path.as_str()) {
            (HttpMethod::Post, "/batch/create") => {
                let mut record: Value = serde_json::from_str(request.body.as_deref().unwrap_or("{}"))?;
                let mut next_id = self.next_id.lock().await;
                *next_id += 1;
                record["batchId"] = json!(*next_id);
                records.insert(*next_id, record.clone());
                HttpResponse::new(201, json!({ "data": record }).to_string())
            }
            (HttpMethod::Get, "/batch/getAll") => {
                let all: Vec<&Value> = records.values().collect();
                HttpResponse::new(200, json!({ "data": all }).to_string())
            }
            (HttpMethod::Get, p) if p.starts_with("/batch/get/") => {
                let id: i64 = p.trim_start_matches("/batch/get/").parse().unwrap_or(-1);
                match records.get(&id) {
                    Some(record) => HttpResponse::new(200, json!({ "data": record }).to_string()),
                    None => HttpResponse::new(404, r#"{"message":"Batch not found"}"#),
                }
            }
            (HttpMethod::Delete, p) if p.starts_with("/batch/delete/") => {
                let id: i64 = p.trim_start_matches("/batch/delete/").parse().unwrap_or(-1);
                match records.remove(&id) {
                    Some(_) => HttpResponse::new(200, ""),
                    None => HttpResponse::new(404, r#"{"message":"Batch not found"}"#),
                }
            }
            _ => HttpResponse::new(405, "Method Not Allowed"),
        };

        Ok(response)
    }
}

fn api() -> InventoryApi {
    InventoryApi::new(
        Endpoint::new(BASE).unwrap(),
        Arc::new(EchoBatchBackend::default()),
    )
}

fn batch(name: &str, supplier: &str) -> Batch {
    Batch {
        batch_name: name.to_string(),
        budget_year: "2024".to_string(),
        delivery_year: "2025".to_string(),
        price: "1500000".to_string(),
        supplier: supplier.to_string(),
        number_of_package: "12".to_string(),
        remarks: "for SY 2025-2026".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_get_after_create_returns_equal_record() {
    let batches = api().batches();

    for (name, supplier) in [("Batch 1", "Acme"), ("Batch 2", "Globex"), ("Batch 3", "")] {
        let input = batch(name, supplier);
        let created = batches.create(&input).await.unwrap();
        let id = created.batch_id.expect("server assigns an id");

        let fetched = batches.get_by_id(&id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(
            fetched,
            Batch {
                batch_id: Some(id),
                ..input
            }
        );
    }

    assert_eq!(batches.get_all().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_get_after_delete_is_not_found() {
    let batches = api().batches();
    let created = batches.create(&batch("Batch 1", "Acme")).await.unwrap();
    let id = created.batch_id.unwrap();

    batches.delete(&id).await.unwrap();

    match batches.get_by_id(&id).await.unwrap_err() {
        InventoryError::RequestFailed { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Batch not found");
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }

    // 再刪一次：標準版本失敗，布林版本回傳 false
    assert!(batches.delete(&id).await.unwrap_err().is_request_failed());
    assert!(!batches.delete_or_false(&id).await.unwrap());
}

#[tokio::test]
async fn test_concurrent_get_all_calls_are_independent() {
    let api = api();
    let batches = api.batches();
    let other = api.batches();
    batches.create(&batch("Batch 1", "Acme")).await.unwrap();

    let (first, second, third) = tokio::join!(
        batches.get_all(),
        other.get_all(),
        batches.get_by_id(&1)
    );

    assert_eq!(first.unwrap().len(), 1);
    assert_eq!(second.unwrap().len(), 1);
    assert_eq!(third.unwrap().batch_name, "Batch 1");
}
