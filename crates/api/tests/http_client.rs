//! Wire-format tests for `ApiClient`
//!
//! Spins up a throwaway axum server that mimics the dashboard endpoint and
//! records every write body it receives.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tuning_api::{ApiClient, ClientError, DashboardData, fetch_all};
use tuning_model::{Client, EntityRecord, Order, OrderStatus, Service};

#[derive(Clone, Default)]
struct Recorded {
    posts: Arc<Mutex<Vec<Value>>>,
    puts: Arc<Mutex<Vec<Value>>>,
}

async fn list(Query(params): Query<HashMap<String, String>>) -> Response {
    match params.get("entity").map(String::as_str) {
        Some("clients") => Json(json!([
            {"id": 1, "name": "Петров Алексей", "phone": "+7 (999) 123-45-67",
             "email": "petrov@mail.ru", "orders": 3, "total": 485000}
        ]))
        .into_response(),
        Some("cars") => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "relation \"cars\" does not exist"})),
        )
            .into_response(),
        Some("services") => Json(json!([
            {"id": 2, "name": "Чип-тюнинг Stage 1", "description": null,
             "price": "35000.00", "duration": "1 день", "popular": true}
        ]))
        .into_response(),
        Some("orders") => Json(json!([
            {"id": "007", "client": "Петров Алексей", "car": "BMW M5",
             "status": "В работе", "total": 125000, "date": "15.01.2024", "notes": ""}
        ]))
        .into_response(),
        _ => (StatusCode::BAD_REQUEST, "not json").into_response(),
    }
}

async fn create(State(recorded): State<Recorded>, Json(body): Json<Value>) -> Response {
    recorded.posts.lock().unwrap().push(body);
    (
        StatusCode::CREATED,
        Json(json!({"id": 12, "message": "Created successfully"})),
    )
        .into_response()
}

async fn update(State(recorded): State<Recorded>, Json(body): Json<Value>) -> Response {
    recorded.puts.lock().unwrap().push(body);
    Json(json!({"message": "Updated successfully"})).into_response()
}

async fn start_server() -> (SocketAddr, Recorded) {
    let recorded = Recorded::default();
    let app = Router::new()
        .route("/api", get(list).post(create).put(update))
        .with_state(recorded.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Small delay to let the server start
    tokio::time::sleep(Duration::from_millis(50)).await;

    (addr, recorded)
}

fn client_for(addr: SocketAddr) -> ApiClient {
    ApiClient::new(format!("http://{addr}/api"), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_list_reads_backend_shapes() {
    let (addr, _) = start_server().await;
    let api = client_for(addr);

    let clients: Vec<Client> = api.list().await.unwrap();
    assert_eq!(clients[0].order_count, 3);
    assert_eq!(clients[0].total_spent, 485000.0);

    let services: Vec<Service> = api.list().await.unwrap();
    assert_eq!(services[0].price, 35000.0);
    assert!(services[0].popular);

    let orders: Vec<Order> = api.list().await.unwrap();
    assert_eq!(orders[0].id, Some(7));
    assert_eq!(orders[0].status, OrderStatus::InProgress);
    assert_eq!(orders[0].total_amount, 125000.0);
}

#[tokio::test]
async fn test_error_body_becomes_api_error() {
    let (addr, _) = start_server().await;
    let api = client_for(addr);

    let err = api.list::<tuning_model::Car>().await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "relation \"cars\" does not exist");
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_posts_without_id() {
    let (addr, recorded) = start_server().await;
    let api = client_for(addr);

    let service = Service {
        name: "Выхлопная система".into(),
        price: 80000.0,
        popular: true,
        ..Service::default()
    };
    let id = api.create(&EntityRecord::from(service)).await.unwrap();
    assert_eq!(id, 12);

    let posts = recorded.posts.lock().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["entity"], "services");
    assert_eq!(posts[0]["is_popular"], true);
    assert!(posts[0].get("id").is_none());
}

#[tokio::test]
async fn test_update_puts_with_id() {
    let (addr, recorded) = start_server().await;
    let api = client_for(addr);

    let client = Client {
        phone: "+7 (999) 000-00-00".into(),
        ..Client::named(1, "Петров Алексей")
    };
    api.update(&EntityRecord::from(client)).await.unwrap();

    let puts = recorded.puts.lock().unwrap();
    assert_eq!(puts[0]["entity"], "clients");
    assert_eq!(puts[0]["id"], 1);
    assert!(puts[0].get("orders").is_none());
}

#[tokio::test]
async fn test_fetch_all_isolates_failures() {
    let (addr, _) = start_server().await;
    let api = client_for(addr);

    let mut data = DashboardData::new();
    let ticket = data.begin_load();
    let fetched = fetch_all(&api).await;
    let report = data.apply_load(ticket, fetched);

    assert_eq!(report.failures.len(), 1);
    assert!(data.cars.is_empty());
    assert_eq!(data.clients.len(), 1);
    assert_eq!(data.services.len(), 1);
    assert_eq!(data.orders.len(), 1);
    // no car list, so only the client reference can be backfilled
    assert_eq!((data.orders[0].client_id, data.orders[0].car_id), (1, 0));
}
