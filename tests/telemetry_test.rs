use serde_json::json;

use rookery::adapters::control::HttpControlClient;
use rookery::services::TelemetrySender;
use rookery::{CollectorConfig, ControlChannel, DomainError, DomainResult, TelemCategory, Telemetry};

fn client(server: &mockito::ServerGuard) -> HttpControlClient {
    HttpControlClient::new(&CollectorConfig {
        base_url: server.url(),
        timeout_secs: 5,
    })
    .expect("failed to build client")
}

struct InventoryTelem;

impl Telemetry for InventoryTelem {
    fn telem_category(&self) -> TelemCategory {
        TelemCategory::Inventory
    }

    fn get_data(&self) -> DomainResult<serde_json::Value> {
        Ok(json!({"hardware_id": 5, "interfaces": ["10.10.10.99/32"]}))
    }
}

#[tokio::test]
async fn posts_category_and_data_to_the_collector() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/telemetry")
        .match_header("content-type", "application/json")
        .match_body(mockito::Matcher::Json(json!({
            "telem_category": "inventory",
            "data": {"hardware_id": 5, "interfaces": ["10.10.10.99/32"]}
        })))
        .with_status(200)
        .create_async()
        .await;

    let client = client(&server);
    client
        .send_telemetry(TelemCategory::Inventory, &InventoryTelem.get_data().unwrap())
        .await
        .expect("send failed");

    mock.assert_async().await;
}

#[tokio::test]
async fn sender_drives_the_http_channel() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/telemetry")
        .with_status(200)
        .create_async()
        .await;

    let sender = TelemetrySender::new(client(&server));
    sender.send(&InventoryTelem, false).await.expect("send failed");

    mock.assert_async().await;
}

#[tokio::test]
async fn collector_error_surfaces_as_delivery_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/telemetry")
        .with_status(500)
        .create_async()
        .await;

    let client = client(&server);
    let result = client
        .send_telemetry(TelemCategory::Event, &json!({"name": "probe"}))
        .await;

    assert!(matches!(result, Err(DomainError::TelemetryDelivery(_))));
}
