//! Recording engine view for tests

use parking_lot::Mutex;
use std::sync::Arc;

use crate::engine::EngineView;
use crate::error::TabError;
use crate::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Load(String),
    Back,
    Forward,
    Reload,
    SetZoom(f64),
    Close,
}

#[derive(Clone, Default)]
pub struct RecordingEngine {
    calls: Arc<Mutex<Vec<EngineCall>>>,
    failing: bool,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine whose every call fails after being recorded
    pub fn failing() -> Self {
        Self {
            calls: Arc::default(),
            failing: true,
        }
    }

    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().clone()
    }

    pub fn loads(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                EngineCall::Load(url) => Some(url),
                _ => None,
            })
            .collect()
    }

    pub fn last_load(&self) -> Option<String> {
        self.loads().pop()
    }

    fn record(&self, call: EngineCall) -> Result<()> {
        self.calls.lock().push(call);
        if self.failing {
            return Err(TabError::Engine("engine unavailable".to_string()));
        }
        Ok(())
    }
}

impl EngineView for RecordingEngine {
    fn load(&self, url: &str) -> Result<()> {
        self.record(EngineCall::Load(url.to_string()))
    }

    fn back(&self) -> Result<()> {
        self.record(EngineCall::Back)
    }

    fn forward(&self) -> Result<()> {
        self.record(EngineCall::Forward)
    }

    fn reload(&self) -> Result<()> {
        self.record(EngineCall::Reload)
    }

    fn set_zoom(&self, factor: f64) -> Result<()> {
        self.record(EngineCall::SetZoom(factor))
    }

    fn close(&self) -> Result<()> {
        self.record(EngineCall::Close)
    }
}
