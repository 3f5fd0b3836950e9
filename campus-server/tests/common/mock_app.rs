use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use campus_server::app::create_app;
use campus_server::configs::{Alerts, Logger, Server, Settings};
use serde_json::{Value, json};
use tower::ServiceExt;

pub struct MockApp {
    pub router: Router,
}

impl MockApp {
    pub fn new() -> Self {
        Self::with_alerts(Alerts::default())
    }

    pub fn with_alerts(alerts: Alerts) -> Self {
        let settings = Arc::new(Settings {
            server: Server {
                host: String::from("127.0.0.1"),
                port: 0,
            },
            logger: Logger {
                level: String::from("debug"),
            },
            alerts,
        });

        Self {
            router: create_app(&settings),
        }
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .method(Method::POST)
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap();

        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .method(Method::GET)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&body).unwrap_or(Value::Null);

        (status, value)
    }
}

/// Rooms in both backend shapes, as the dashboard receives them.
pub fn sample_rooms() -> Value {
    json!([
        {
            "_id": "r-101",
            "name": "Salle 1.1",
            "floor": 1,
            "occupied": false,
            "lastMeasurement": { "temperature": 22.0, "humidity": 45, "co2": 650, "noise": 35 },
            "moduleId": "m-1"
        },
        {
            "_id": "r-102",
            "name": "Salle 1.2",
            "floor": 1,
            "occupied": true,
            "lastMeasurement": { "temperature": 21.5, "humidity": 50, "co2": 890, "noise": 42 }
        },
        {
            "id": "r-201",
            "name": "Amphi B",
            "status": "occupied",
            "needsAiring": true,
            "temperature": 23.0,
            "humidity": 48,
            "co2": 720,
            "brightness": 350,
            "noise": 58
        }
    ])
}

pub fn sample_modules() -> Value {
    json!([
        {
            "_id": "m-1",
            "hardwareId": "AA:BB:CC:01",
            "name": "IoT-1.1-01",
            "room": { "_id": "r-101" },
            "enabled": true,
            "batteryPercent": 85
        },
        {
            "id": "m-2",
            "name": "IoT-1.2-01",
            "roomId": "r-102",
            "status": "offline",
            "batteryLevel": 15,
            "lastSync": "2025-12-10T08:00:00"
        }
    ])
}
