//! # In-memory REST collaborator
//!
//! [`MockServer`] implements [`Transport`] by serving the same endpoints as the
//! real service from memory: `GET/POST /<resource>/`, `GET/PUT/DELETE
//! /<resource>/{id}` and `POST /user/login`. Responses use the service's
//! `{statusCode, message, data}` envelope.
//!
//! Ids are assigned by the server: strings for geographic resources, integers
//! for `user`. Every request is recorded, and the next request can be made to
//! fail with [`MockServer::fail_next`] or [`MockServer::fail_transport_next`].

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::{json, Map, Value};

use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

const MOCK_TIMESTAMP: &str = "2024-01-01T00:00:00.000Z";

#[derive(Debug, Default)]
struct MockState {
    collections: BTreeMap<String, Vec<Value>>,
    next_id: u64,
    requests: Vec<ApiRequest>,
    fail_next: Option<Failure>,
}

#[derive(Debug)]
enum Failure {
    Status(u16, String),
    Transport,
}

#[derive(Clone, Debug, Default)]
pub struct MockServer {
    state: Arc<Mutex<MockState>>,
}

impl MockServer {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Insert a record directly, assigning an id. Returns the stored record.
    pub fn seed(&self, resource: &str, record: Value) -> Value {
        let mut state = self.lock();
        state.insert(resource, record)
    }

    /// Current contents of a resource.
    pub fn records(&self, resource: &str) -> Vec<Value> {
        self.lock()
            .collections
            .get(resource)
            .cloned()
            .unwrap_or_default()
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.lock().requests.clone()
    }

    /// Answer the next request with `status` and `message`.
    pub fn fail_next(&self, status: u16, message: &str) {
        self.lock().fail_next = Some(Failure::Status(status, message.to_string()));
    }

    /// Drop the next request as if the network were down.
    pub fn fail_transport_next(&self) {
        self.lock().fail_next = Some(Failure::Transport);
    }
}

impl MockState {
    fn insert(&mut self, resource: &str, record: Value) -> Value {
        self.next_id += 1;
        let id = if resource == "user" {
            json!(self.next_id)
        } else {
            json!(self.next_id.to_string())
        };

        let mut object = match record {
            Value::Object(object) => object,
            _ => Map::new(),
        };
        object.insert("id".to_string(), id);
        if resource == "user" {
            object
                .entry("createdAt")
                .or_insert_with(|| json!(MOCK_TIMESTAMP));
            object
                .entry("updatedAt")
                .or_insert_with(|| json!(MOCK_TIMESTAMP));
        }
        let stored = Value::Object(object);
        self.collections
            .entry(resource.to_string())
            .or_default()
            .push(stored.clone());
        stored
    }

    fn position(&self, resource: &str, id: &str) -> Option<usize> {
        self.collections
            .get(resource)?
            .iter()
            .position(|record| id_matches(record, id))
    }

    fn handle(&mut self, request: &ApiRequest) -> ApiResponse {
        let segments: Vec<&str> = request
            .path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match (request.method, segments.as_slice()) {
            (Method::Post, ["user", "login"]) => self.login(request.body.as_ref()),
            (Method::Get, [resource]) => {
                let records = self.collections.get(*resource).cloned().unwrap_or_default();
                respond(200, "OK", Value::Array(records))
            }
            (Method::Post, [resource]) => match request.body {
                Some(Value::Object(ref body)) => {
                    let mut body = body.clone();
                    body.remove("id");
                    let stored = self.insert(resource, Value::Object(body));
                    respond(201, "Created", stored)
                }
                _ => respond(400, "Body must be an object", Value::Null),
            },
            (Method::Get, [resource, id]) => match self.position(resource, id) {
                Some(index) => respond(200, "OK", self.collections[*resource][index].clone()),
                None => not_found(),
            },
            (Method::Put, [resource, id]) => {
                let Some(index) = self.position(resource, id) else {
                    return not_found();
                };
                let Some(Value::Object(ref patch)) = request.body else {
                    return respond(400, "Body must be an object", Value::Null);
                };
                let is_user = *resource == "user";
                let Some(collection) = self.collections.get_mut(*resource) else {
                    return not_found();
                };
                let record = &mut collection[index];
                if let Value::Object(object) = record {
                    for (key, value) in patch {
                        if key != "id" {
                            object.insert(key.clone(), value.clone());
                        }
                    }
                    if is_user {
                        object.insert("updatedAt".to_string(), json!(MOCK_TIMESTAMP));
                    }
                }
                respond(200, "Updated", record.clone())
            }
            (Method::Delete, [resource, id]) => match self.position(resource, id) {
                Some(index) => {
                    if let Some(collection) = self.collections.get_mut(*resource) {
                        collection.remove(index);
                    }
                    respond(200, "Deleted", Value::Null)
                }
                None => not_found(),
            },
            _ => respond(404, "No such route", Value::Null),
        }
    }

    fn login(&self, body: Option<&Value>) -> ApiResponse {
        let email = body.and_then(|b| b.get("email")).and_then(Value::as_str);
        let password = body.and_then(|b| b.get("password")).and_then(Value::as_str);
        let user = self.collections.get("user").and_then(|users| {
            users.iter().find(|user| {
                email.is_some()
                    && user.get("email").and_then(Value::as_str) == email
                    && user.get("password").and_then(Value::as_str) == password
            })
        });
        match user {
            Some(user) => respond(200, "Login successful", user.clone()),
            None => respond(200, "Invalid credentials", Value::Null),
        }
    }
}

fn id_matches(record: &Value, id: &str) -> bool {
    match record.get("id") {
        Some(Value::String(s)) => s == id,
        Some(Value::Number(n)) => n.to_string() == id,
        _ => false,
    }
}

fn respond(status: u16, message: &str, data: Value) -> ApiResponse {
    ApiResponse {
        status,
        body: json!({ "statusCode": status, "message": message, "data": data }).to_string(),
    }
}

fn not_found() -> ApiResponse {
    respond(404, "Not found", Value::Null)
}

impl Transport for MockServer {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut state = self.lock();
        state.requests.push(request.clone());
        match state.fail_next.take() {
            Some(Failure::Transport) => Err(ApiError::Transport("connection refused".into())),
            Some(Failure::Status(status, message)) => Ok(respond(status, &message, Value::Null)),
            None => Ok(state.handle(&request)),
        }
    }
}
