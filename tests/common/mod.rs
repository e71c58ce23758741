//! In-process mock of the formbuilder backend for integration tests.
//!
//! Serves the same CRUD surface and JSON envelopes as the real backend over
//! a loopback listener, backed by an in-memory map. Per-method request
//! counters let tests assert which calls were (or were not) issued.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value as JsonValue};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// A form held by the mock backend.
#[derive(Debug, Clone)]
pub struct StoredForm {
    pub name: String,
    /// `None` renders a record without a `schema` key.
    pub schema: Option<JsonValue>,
}

#[derive(Default)]
struct BackendState {
    forms: Mutex<BTreeMap<u64, StoredForm>>,
    next_id: AtomicU64,
    list_count: AtomicUsize,
    get_count: AtomicUsize,
    create_count: AtomicUsize,
    update_count: AtomicUsize,
    delete_count: AtomicUsize,
    last_create_body: Mutex<Option<JsonValue>>,
}

/// Handle to a running mock backend.
#[derive(Clone)]
pub struct MockBackend {
    pub base_url: String,
    state: Arc<BackendState>,
}

impl MockBackend {
    /// Bind a loopback listener and serve the mock API on it.
    pub async fn spawn() -> Self {
        let state = Arc::new(BackendState {
            next_id: AtomicU64::new(1),
            ..BackendState::default()
        });

        let router = Router::new()
            .route(
                "/formbuilder/api/forms/",
                get(list_forms).post(create_form),
            )
            .route(
                "/formbuilder/api/forms/{id}/",
                get(get_form).put(update_form).delete(delete_form),
            )
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve mock backend");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// Seed a form under an explicit ID.
    pub fn insert_form(&self, id: u64, name: &str, schema: Option<JsonValue>) {
        self.state.next_id.fetch_max(id + 1, Ordering::SeqCst);
        self.state.forms.lock().unwrap().insert(
            id,
            StoredForm {
                name: name.to_string(),
                schema,
            },
        );
    }

    pub fn form(&self, id: u64) -> Option<StoredForm> {
        self.state.forms.lock().unwrap().get(&id).cloned()
    }

    pub fn form_count(&self) -> usize {
        self.state.forms.lock().unwrap().len()
    }

    /// Body of the most recent create request, verbatim.
    pub fn last_create_body(&self) -> Option<JsonValue> {
        self.state.last_create_body.lock().unwrap().clone()
    }

    pub fn delete_count(&self) -> usize {
        self.state.delete_count.load(Ordering::SeqCst)
    }

    pub fn update_count(&self) -> usize {
        self.state.update_count.load(Ordering::SeqCst)
    }

    pub fn create_count(&self) -> usize {
        self.state.create_count.load(Ordering::SeqCst)
    }

    pub fn total_requests(&self) -> usize {
        self.state.list_count.load(Ordering::SeqCst)
            + self.state.get_count.load(Ordering::SeqCst)
            + self.state.create_count.load(Ordering::SeqCst)
            + self.state.update_count.load(Ordering::SeqCst)
            + self.state.delete_count.load(Ordering::SeqCst)
    }
}

fn record_json(id: u64, form: &StoredForm) -> JsonValue {
    let mut record = json!({
        "id": id,
        "name": form.name,
        "created_at": "2024-01-01T00:00:00",
        "updated_at": "2024-01-01T00:00:00",
        "is_active": true
    });
    if let Some(schema) = &form.schema {
        record["schema"] = schema.clone();
    }
    record
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": "Form not found"})),
    )
        .into_response()
}

async fn list_forms(State(state): State<Arc<BackendState>>) -> Json<JsonValue> {
    state.list_count.fetch_add(1, Ordering::SeqCst);
    let forms = state.forms.lock().unwrap();
    let records: Vec<JsonValue> = forms
        .iter()
        .map(|(id, form)| record_json(*id, form))
        .collect();
    Json(json!({"forms": records}))
}

async fn get_form(State(state): State<Arc<BackendState>>, Path(id): Path<u64>) -> Response {
    state.get_count.fetch_add(1, Ordering::SeqCst);
    match state.forms.lock().unwrap().get(&id) {
        Some(form) => Json(record_json(id, form)).into_response(),
        None => not_found(),
    }
}

async fn create_form(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<JsonValue>,
) -> Response {
    state.create_count.fetch_add(1, Ordering::SeqCst);
    *state.last_create_body.lock().unwrap() = Some(body.clone());

    let Some(name) = body.get("name").and_then(JsonValue::as_str) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Name is required"})),
        )
            .into_response();
    };
    let Some(schema) = body.get("schema").cloned() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Schema is required"})),
        )
            .into_response();
    };

    let id = state.next_id.fetch_add(1, Ordering::SeqCst);
    let form = StoredForm {
        name: name.to_string(),
        schema: Some(schema),
    };
    state.forms.lock().unwrap().insert(id, form.clone());
    (StatusCode::CREATED, Json(record_json(id, &form))).into_response()
}

async fn update_form(
    State(state): State<Arc<BackendState>>,
    Path(id): Path<u64>,
    Json(body): Json<JsonValue>,
) -> Response {
    state.update_count.fetch_add(1, Ordering::SeqCst);
    let mut forms = state.forms.lock().unwrap();
    let Some(form) = forms.get_mut(&id) else {
        return not_found();
    };
    if let Some(name) = body.get("name").and_then(JsonValue::as_str) {
        form.name = name.to_string();
    }
    if let Some(schema) = body.get("schema") {
        form.schema = Some(schema.clone());
    }
    Json(record_json(id, form)).into_response()
}

async fn delete_form(State(state): State<Arc<BackendState>>, Path(id): Path<u64>) -> Response {
    state.delete_count.fetch_add(1, Ordering::SeqCst);
    match state.forms.lock().unwrap().remove(&id) {
        Some(_) => Json(json!({"message": "Form deleted successfully"})).into_response(),
        None => not_found(),
    }
}
