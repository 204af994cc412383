//! In-memory backend for tests

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use tuning_core::{EntityKind, RecordId};
use tuning_model::{EntityRecord, Record};

use crate::backend::Backend;
use crate::error::{ClientError, ClientResult};
use crate::payload;

/// A request the fake received
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Request {
    List(EntityKind),
    Create(Value),
    Update(Value),
}

#[derive(Default)]
struct Inner {
    tables: HashMap<EntityKind, Vec<Value>>,
    requests: Vec<Request>,
    failing_lists: HashSet<EntityKind>,
    fail_writes: bool,
    commit_then_fail: bool,
}

/// Stores records as JSON rows, records every request, fails on demand
#[derive(Default)]
pub(crate) struct FakeBackend {
    inner: Mutex<Inner>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed<R: Record>(&self, records: Vec<R>) {
        let rows = records
            .iter()
            .map(|r| serde_json::to_value(r).unwrap())
            .collect();
        self.inner.lock().unwrap().tables.insert(R::KIND, rows);
    }

    pub fn fail_list(&self, kind: EntityKind) {
        self.inner.lock().unwrap().failing_lists.insert(kind);
    }

    pub fn fail_writes(&self) {
        self.inner.lock().unwrap().fail_writes = true;
    }

    /// Creates store the row but answer as if the reply was lost
    pub fn commit_then_fail(&self) {
        self.inner.lock().unwrap().commit_then_fail = true;
    }

    pub fn requests(&self) -> Vec<Request> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn stored<R: Record>(&self) -> Vec<R> {
        let inner = self.inner.lock().unwrap();
        inner
            .tables
            .get(&R::KIND)
            .map(|rows| {
                rows.iter()
                    .map(|row| serde_json::from_value(row.clone()).unwrap())
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn row_id(row: &Value) -> Option<RecordId> {
    row.get("id").and_then(Value::as_i64)
}

fn into_row(mut body: Value) -> Value {
    if let Some(map) = body.as_object_mut() {
        map.remove("entity");
    }
    body
}

#[async_trait]
impl Backend for FakeBackend {
    async fn list<R: Record>(&self) -> ClientResult<Vec<R>> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(Request::List(R::KIND));
        if inner.failing_lists.contains(&R::KIND) {
            return Err(ClientError::api(500, Some(format!("{} unavailable", R::KIND))));
        }
        inner
            .tables
            .get(&R::KIND)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .map(|row| serde_json::from_value(row).map_err(|e| ClientError::Parse(e.to_string())))
            .collect()
    }

    async fn create(&self, record: &EntityRecord) -> ClientResult<RecordId> {
        let body = payload::create_body(record)?;
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(Request::Create(body.clone()));
        if inner.fail_writes {
            return Err(ClientError::api(500, Some("write rejected".into())));
        }

        let table = inner.tables.entry(record.kind()).or_default();
        let id = table.iter().filter_map(row_id).max().unwrap_or(0) + 1;
        let mut row = into_row(body);
        row["id"] = Value::from(id);
        table.push(row);
        if inner.commit_then_fail {
            return Err(ClientError::UnexpectedResponse("create reply carried no id".into()));
        }
        Ok(id)
    }

    async fn update(&self, record: &EntityRecord) -> ClientResult<()> {
        let body = payload::update_body(record)?;
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(Request::Update(body.clone()));
        if inner.fail_writes {
            return Err(ClientError::api(500, Some("write rejected".into())));
        }

        let id = row_id(&body);
        let table = inner.tables.entry(record.kind()).or_default();
        match table.iter_mut().find(|row| row_id(row) == id) {
            Some(row) => *row = into_row(body),
            None => return Err(ClientError::api(404, Some("not found".into()))),
        }
        Ok(())
    }
}
