//! In-memory `SqlExecutor` mocks

use std::sync::Mutex;

use async_trait::async_trait;
use dashlens_core::{SqlExecutor, SqlRow};
use dashlens_domain::{DashLensError, Result as DomainResult};
use serde_json::{Map, Value};

/// Returns canned rows and remembers every query it was asked to run.
#[derive(Default)]
pub struct MockSqlExecutor {
    rows: Vec<SqlRow>,
    calls: Mutex<Vec<(String, Map<String, Value>)>>,
}

impl MockSqlExecutor {
    pub fn with_rows(rows: Vec<Value>) -> Self {
        let rows = rows
            .into_iter()
            .filter_map(|row| match row {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect();
        Self { rows, calls: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<(String, Map<String, Value>)> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl SqlExecutor for MockSqlExecutor {
    async fn execute_sql(&self, query: &str, params: &Map<String, Value>) -> DomainResult<Vec<SqlRow>> {
        self.calls.lock().expect("calls lock").push((query.to_string(), params.clone()));
        Ok(self.rows.clone())
    }
}

/// Always fails the way an unreachable backend does.
pub struct UnreachableExecutor;

#[async_trait]
impl SqlExecutor for UnreachableExecutor {
    async fn execute_sql(&self, _query: &str, _params: &Map<String, Value>) -> DomainResult<Vec<SqlRow>> {
        Err(DashLensError::Network("connection refused".into()))
    }
}
