//! Tauri IPC Commands
//!
//! These commands bridge the chrome UI and the homepage script to the
//! Rust core. Rust owns all state; webviews only render.

pub mod bridge;
pub mod diagnostics;
pub mod menu;
pub mod navigation;
pub mod tabs;
pub mod webview;

pub const MAIN_WINDOW: &str = "main";

pub fn ui_webview_label(window_label: &str) -> String {
    format!("ui-{window_label}")
}
