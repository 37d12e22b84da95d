//! Tab
//!
//! One engine view and the chrome around it. Tab operations only queue
//! engine commands; the owner takes them with `take_pending` and runs them
//! outside its locks. Engine failures are logged and swallowed; the engine
//! shows its own error pages.

use std::sync::Arc;
use uuid::Uuid;
use zypox_navigation::{is_web_address, History, InputResolver, SearchEngine};

use crate::bridge::BridgeCall;
use crate::dialog::{HistoryDialog, Notice};
use crate::engine::{EngineBatch, EngineCommand, EngineView};
use crate::homepage::HomepageResource;
use crate::menu::{MenuAction, MenuOutcome, TabRequest};
use crate::profile::Profile;

pub const DEFAULT_HOMEPAGE_BASE: &str = "zypox://localhost/home/";
pub const DEFAULT_ZOOM_STEP: f64 = 0.1;
pub const DEFAULT_MIN_ZOOM: f64 = 0.1;

/// Allocate an id for a tab about to be opened
pub fn new_tab_id() -> String {
    Uuid::new_v4().to_string()
}

/// Per-window settings every tab is built with
#[derive(Debug, Clone)]
pub struct TabSettings {
    pub resolver: InputResolver,
    /// Location prefix for generated homepages
    pub homepage_base: String,
    /// Zoom change per step. Factors are kept at this step's precision.
    pub zoom_step: f64,
    /// Zoom-out floor. There is no upper bound.
    pub min_zoom: f64,
}

impl Default for TabSettings {
    fn default() -> Self {
        Self {
            resolver: InputResolver::new(),
            homepage_base: DEFAULT_HOMEPAGE_BASE.to_string(),
            zoom_step: DEFAULT_ZOOM_STEP,
            min_zoom: DEFAULT_MIN_ZOOM,
        }
    }
}

pub struct Tab {
    id: String,
    profile: Profile,
    engine: Arc<dyn EngineView>,
    /// Engine commands not yet taken by the owner
    pending: Vec<EngineCommand>,
    /// Shared visit list. Never present for incognito tabs.
    history: Option<History>,
    settings: TabSettings,
    /// Text shown in the address bar
    address_bar: String,
    /// Last address reported by the engine
    current_url: String,
    zoom: f64,
    homepage: Option<HomepageResource>,
    homepage_generation: u64,
}

impl Tab {
    /// Build a tab around `engine` and queue its homepage load.
    pub fn open(
        id: String,
        profile: Profile,
        history: &History,
        engine: Box<dyn EngineView>,
        settings: TabSettings,
    ) -> Self {
        let history = match profile {
            Profile::Normal => Some(history.clone()),
            Profile::Incognito => None,
        };

        let mut tab = Self {
            id,
            profile,
            engine: Arc::from(engine),
            pending: Vec::new(),
            history,
            settings,
            address_bar: String::new(),
            current_url: String::new(),
            zoom: 1.0,
            homepage: None,
            homepage_generation: 0,
        };

        tracing::info!(tab_id = %tab.id, profile = %tab.profile, "Opened tab");
        tab.set_homepage();
        tab
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn is_incognito(&self) -> bool {
        self.profile.is_incognito()
    }

    pub fn label(&self) -> &'static str {
        self.profile.tab_label()
    }

    pub fn address_bar(&self) -> &str {
        &self.address_bar
    }

    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn homepage(&self) -> Option<&HomepageResource> {
        self.homepage.as_ref()
    }

    fn search_engine(&self) -> &SearchEngine {
        self.settings.resolver.search_engine()
    }

    /// Address bar submission
    pub fn navigate_to_input(&mut self, text: &str) {
        let Some(resolution) = self.settings.resolver.resolve(text) else {
            return;
        };

        tracing::debug!(tab_id = %self.id, resolution = ?resolution, "Resolved address bar input");
        self.load(resolution.target());
    }

    /// Engine notification: the displayed address changed
    pub fn on_url_changed(&mut self, url: &str) {
        self.current_url = url.to_string();

        if self.is_homepage(url) {
            self.address_bar.clear();
        } else {
            self.address_bar = url.to_string();
        }
    }

    /// Engine notification: a load completed
    pub fn on_load_finished(&mut self, url: &str) {
        self.current_url = url.to_string();

        if !is_web_address(url) || self.is_homepage(url) {
            return;
        }

        if let Some(history) = &self.history {
            history.record_visit(url);
        }
    }

    /// Replace the generated homepage with a fresh one and show it
    pub fn set_homepage(&mut self) {
        self.homepage_generation += 1;
        let page = HomepageResource::generate(
            &self.settings.homepage_base,
            &self.id,
            self.homepage_generation,
        );

        if let Some(previous) = self.homepage.replace(page) {
            tracing::debug!(
                tab_id = %self.id,
                location = %previous.location(),
                "Released previous homepage"
            );
        }

        let location = self
            .homepage
            .as_ref()
            .map(|page| page.location().to_string())
            .unwrap_or_default();
        self.load(&location);
        self.address_bar.clear();
    }

    fn is_homepage(&self, url: &str) -> bool {
        self.homepage.as_ref().is_some_and(|page| page.matches(url))
    }

    /// Document for a homepage location, if it is this tab's current one
    pub fn homepage_document(&self, location: &str) -> Option<&str> {
        self.homepage
            .as_ref()
            .filter(|page| page.matches(location))
            .map(|page| page.document())
    }

    pub fn back(&mut self) {
        self.pending.push(EngineCommand::Back);
    }

    pub fn forward(&mut self) {
        self.pending.push(EngineCommand::Forward);
    }

    pub fn reload(&mut self) {
        self.pending.push(EngineCommand::Reload);
    }

    pub fn zoom_in(&mut self) {
        self.apply_zoom(self.zoom + self.settings.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.apply_zoom((self.zoom - self.settings.zoom_step).max(self.settings.min_zoom));
    }

    fn apply_zoom(&mut self, factor: f64) {
        let places = decimal_places(self.settings.zoom_step)
            .max(decimal_places(self.settings.min_zoom));
        let scale = 10f64.powi(places);
        self.zoom = (factor * scale).round() / scale;
        self.pending.push(EngineCommand::SetZoom(self.zoom));
    }

    pub fn show_history(&self) -> MenuOutcome {
        match &self.history {
            Some(history) => MenuOutcome::History(HistoryDialog::new(history.entries())),
            None => MenuOutcome::Notice(Notice::history_unavailable()),
        }
    }

    pub fn show_help(&self) -> MenuOutcome {
        MenuOutcome::Notice(Notice::help())
    }

    pub fn handle_menu(&mut self, action: MenuAction) -> MenuOutcome {
        match action {
            MenuAction::NewTab => MenuOutcome::Request(TabRequest::NewTab { incognito: false }),
            MenuAction::NewIncognitoTab => {
                MenuOutcome::Request(TabRequest::NewTab { incognito: true })
            }
            MenuAction::ZoomIn => {
                self.zoom_in();
                MenuOutcome::Done
            }
            MenuAction::ZoomOut => {
                self.zoom_out();
                MenuOutcome::Done
            }
            MenuAction::History => self.show_history(),
            MenuAction::Help => self.show_help(),
        }
    }

    /// Call coming from script inside the homepage
    pub fn handle_bridge_call(&mut self, call: &BridgeCall) {
        tracing::debug!(tab_id = %self.id, function = call.name(), "Bridge call");
        if let Some(url) = call.target(self.search_engine()) {
            self.load(&url);
        }
    }

    /// Take the engine commands queued since the last call
    pub fn take_pending(&mut self) -> EngineBatch {
        EngineBatch::new(
            self.id.clone(),
            Arc::clone(&self.engine),
            std::mem::take(&mut self.pending),
        )
    }

    /// Release the engine view. The tab is gone afterwards; commands still
    /// queued are dropped.
    pub fn close(self) {
        if let Err(e) = self.engine.close() {
            tracing::warn!(tab_id = %self.id, error = %e, "Engine view close failed");
        }
        tracing::info!(tab_id = %self.id, "Closed tab");
    }

    fn load(&mut self, url: &str) {
        tracing::debug!(tab_id = %self.id, url = %url, "Loading");
        self.pending.push(EngineCommand::Load(url.to_string()));
    }
}

/// Decimal places `value` needs, at least two and at most six
fn decimal_places(value: f64) -> i32 {
    (2..=6)
        .find(|&places| {
            let scaled = value * 10f64.powi(places);
            (scaled - scaled.round()).abs() < 1e-6
        })
        .unwrap_or(6)
}

impl std::fmt::Debug for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tab")
            .field("id", &self.id)
            .field("profile", &self.profile)
            .field("address_bar", &self.address_bar)
            .field("current_url", &self.current_url)
            .field("zoom", &self.zoom)
            .finish_non_exhaustive()
    }
}
