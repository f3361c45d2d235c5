use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

pub const BLOCK_HASH: &str = "4ea1ba291e8eef538635a53e59fddba7810d1679631cc3aed7c8e6c4091a516a";
pub const SUBMITTED_TX_ID: &str =
    "6e5f825c82c1c6d6b77f2a14092f3b78c8f1b66db6f4cf8caec1555b6f967b3b";

/// What the mock saw of a single request.
#[derive(Debug, Clone, Default)]
pub struct Recorded {
    pub path: String,
    pub project_id: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

#[derive(Clone, Default)]
struct MockState {
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockState {
    fn record(&self, path: impl Into<String>, headers: &HeaderMap, body: &[u8]) {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };

        self.requests.lock().unwrap().push(Recorded {
            path: path.into(),
            project_id: header("project_id"),
            content_type: header("content-type"),
            body: body.to_vec(),
        });
    }
}

pub struct MockBlockfrost {
    pub url: String,
    state: MockState,
}

pub fn block_json(hash: &str) -> Value {
    json!({
        "time": 1641338934,
        "height": 15243593,
        "hash": hash,
        "slot": 412162133,
        "epoch": 425,
        "epoch_slot": 12,
        "slot_leader": "pool1pu5jlj4q9w9jlxeu370a3c9myx47md5j5m2str0naunn2qnikdy",
        "size": 3,
        "tx_count": 1,
        "output": "128314491794",
        "fees": "592661",
        "block_vrf": "vrf_vk1wf2k6lhujezqcfe00l6zetxpnmh9n6mwhpmhm0dvfh3fxgmdnrfqkms8ty",
        "op_cert": "da905277534faf75dae41732650568af545134ee08a3c0392dbefc8096ae177c",
        "op_cert_counter": "18",
        "previous_block": "43ebccb3ac72c7cebd0d9b755a4b08412c9f5dcb81b8a0ad1e3c197d29d47b05",
        "next_block": "8367f026cf4b03e116ff8ee5daf149b55ba5a6ec6dec04803b8dc317721d15fa",
        "confirmations": 4698
    })
}

fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "status_code": 404,
            "error": "Not Found",
            "message": "The requested component has not been found."
        })),
    )
}

impl MockBlockfrost {
    pub async fn start() -> Self {
        let state = MockState::default();

        let mock_app = Router::new()
            .route(
                "/",
                get(|State(state): State<MockState>, headers: HeaderMap| async move {
                    state.record("/", &headers, &[]);
                    Json(json!({ "url": "https://blockfrost.io/", "version": "0.1.0" }))
                }),
            )
            .route(
                "/health",
                get(|State(state): State<MockState>, headers: HeaderMap| async move {
                    state.record("/health", &headers, &[]);
                    Json(json!({ "is_healthy": true }))
                }),
            )
            .route(
                "/blocks/latest",
                get(|State(state): State<MockState>, headers: HeaderMap| async move {
                    state.record("/blocks/latest", &headers, &[]);
                    Json(block_json(BLOCK_HASH))
                }),
            )
            .route(
                "/blocks/{hash_or_number}",
                get(
                    |State(state): State<MockState>,
                     Path(hash_or_number): Path<String>,
                     headers: HeaderMap| async move {
                        state.record(format!("/blocks/{hash_or_number}"), &headers, &[]);
                        if hash_or_number == BLOCK_HASH {
                            Ok(Json(block_json(&hash_or_number)))
                        } else {
                            Err(not_found())
                        }
                    },
                ),
            )
            .route(
                "/blocks/{hash_or_number}/txs",
                get(|State(state): State<MockState>, headers: HeaderMap| async move {
                    state.record("/blocks/txs", &headers, &[]);
                    Json(json!([SUBMITTED_TX_ID]))
                }),
            )
            .route(
                "/txs/{hash}",
                get(|State(state): State<MockState>, headers: HeaderMap| async move {
                    state.record("/txs", &headers, &[]);
                    (
                        StatusCode::BAD_GATEWAY,
                        "<html><body>upstream unavailable</body></html>",
                    )
                }),
            )
            .route(
                "/tx/submit",
                post(
                    |State(state): State<MockState>, headers: HeaderMap, body: Bytes| async move {
                        state.record("/tx/submit", &headers, &body);
                        Json(json!(SUBMITTED_TX_ID))
                    },
                ),
            )
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let url = format!("http://{addr}");

        tokio::spawn(async move {
            axum::serve(listener, mock_app).await.unwrap();
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        Self { url, state }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().unwrap()
    }

    pub fn unreachable() -> String {
        "http://127.0.0.1:1".to_string()
    }
}
