//! In-process TrailService used by the command tests.

use std::net::SocketAddr;
use std::sync::mpsc;

use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

use super::demo::{ADA, CADOVER};

fn cadover_points() -> Value {
    json!([
        {"latitude": 50.4655, "longitude": -4.0582, "elevation": 152.0, "commentId": "NC", "trailName": CADOVER},
        {"latitude": 50.4672, "longitude": -4.0611, "elevation": 148.5, "commentId": "C17", "trailName": CADOVER},
        {"latitude": 50.4701, "longitude": -4.0634, "commentId": "NC", "trailName": CADOVER}
    ])
}

async fn user_by_name(Path(username): Path<String>) -> (StatusCode, Json<Value>) {
    if username == ADA {
        (StatusCode::OK, Json(json!({"userId": 1, "username": ADA})))
    } else {
        (StatusCode::NOT_FOUND, Json(json!({"status": 404})))
    }
}

async fn trail_points(Path(trail_name): Path<String>) -> (StatusCode, Json<Value>) {
    if trail_name == CADOVER {
        (StatusCode::OK, Json(cadover_points()))
    } else {
        (StatusCode::NOT_FOUND, Json(json!([])))
    }
}

/// Start the service on an ephemeral port and return its API base URL.
pub fn spawn_trail_service() -> String {
    let app = Router::new()
        .route(
            "/api/users",
            get(|| async { Json(json!([{"userId": 1, "username": ADA}])) }),
        )
        .route("/api/users/:username", get(user_by_name))
        .route(
            "/api/trails",
            get(|| async { Json(json!([{"trailId": 1, "trailName": CADOVER}])) }),
        )
        .route("/api/locationpoints", get(|| async { Json(cadover_points()) }))
        .route("/api/Locationpoints/:trail_name", get(trail_points));

    let (tx, rx) = mpsc::channel::<SocketAddr>();
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });
    format!("http://{}/api", rx.recv().unwrap())
}
