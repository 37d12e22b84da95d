//! Engine view seam
//!
//! The web engine renders, runs scripts and talks to the network on its own.
//! A tab only issues requests through this trait and learns about progress
//! from the "URL changed" / "load finished" notifications routed back to it.

use std::sync::Arc;

use crate::Result;

pub trait EngineView: Send + Sync {
    /// Start loading an address. Progress comes back as tab notifications,
    /// possibly before this returns.
    fn load(&self, url: &str) -> Result<()>;

    fn back(&self) -> Result<()>;

    fn forward(&self) -> Result<()>;

    fn reload(&self) -> Result<()>;

    /// Apply a zoom factor (1.0 = 100%)
    fn set_zoom(&self, factor: f64) -> Result<()>;

    /// Tear down the view. Called once when its tab is closed.
    fn close(&self) -> Result<()>;
}

/// A single request for an engine view
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommand {
    Load(String),
    Back,
    Forward,
    Reload,
    SetZoom(f64),
}

impl EngineCommand {
    pub fn name(&self) -> &'static str {
        match self {
            EngineCommand::Load(_) => "load",
            EngineCommand::Back => "back",
            EngineCommand::Forward => "forward",
            EngineCommand::Reload => "reload",
            EngineCommand::SetZoom(_) => "set_zoom",
        }
    }

    pub fn apply(&self, engine: &dyn EngineView) -> Result<()> {
        match self {
            EngineCommand::Load(url) => engine.load(url),
            EngineCommand::Back => engine.back(),
            EngineCommand::Forward => engine.forward(),
            EngineCommand::Reload => engine.reload(),
            EngineCommand::SetZoom(factor) => engine.set_zoom(*factor),
        }
    }
}

/// Engine commands taken out of a tab.
///
/// Run only once no browser lock is held: engines may report page loads
/// synchronously, and those notifications take the same lock.
#[must_use = "queued engine commands do nothing until run"]
pub struct EngineBatch {
    tab_id: String,
    engine: Arc<dyn EngineView>,
    commands: Vec<EngineCommand>,
}

impl EngineBatch {
    pub(crate) fn new(
        tab_id: String,
        engine: Arc<dyn EngineView>,
        commands: Vec<EngineCommand>,
    ) -> Self {
        Self {
            tab_id,
            engine,
            commands,
        }
    }

    pub fn commands(&self) -> &[EngineCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Apply every command in order. Failures are logged and skipped.
    pub fn run(self) {
        for command in &self.commands {
            if let Err(e) = command.apply(self.engine.as_ref()) {
                tracing::warn!(
                    tab_id = %self.tab_id,
                    operation = command.name(),
                    error = %e,
                    "Engine view call failed"
                );
            }
        }
    }
}
