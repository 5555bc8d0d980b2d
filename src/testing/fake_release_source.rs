use std::sync::Mutex;

use crate::domain::AppError;
use crate::domain::catalog::Release;
use crate::ports::ReleaseSource;

/// Release source returning a canned payload, or failing like an unreachable host.
pub struct FakeReleaseSource {
    payload: Option<serde_json::Value>,
    calls: Mutex<usize>,
}

impl FakeReleaseSource {
    pub fn with(releases: Vec<Release>) -> Self {
        Self::from_json(serde_json::to_value(releases).unwrap())
    }

    pub fn from_json(payload: serde_json::Value) -> Self {
        Self { payload: Some(payload), calls: Mutex::new(0) }
    }

    pub fn failing() -> Self {
        Self { payload: None, calls: Mutex::new(0) }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl ReleaseSource for FakeReleaseSource {
    fn fetch_catalog(&self) -> Result<serde_json::Value, AppError> {
        *self.calls.lock().unwrap() += 1;
        self.payload
            .clone()
            .ok_or_else(|| AppError::Network("connection refused".to_string()))
    }

    fn describe(&self) -> String {
        "fake catalog".to_string()
    }
}
