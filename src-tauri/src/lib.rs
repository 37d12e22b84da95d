//! Zypox Browser - Tauri Application
//!
//! - Native window with a chrome webview (tabs, address bar, menus)
//! - One child webview per tab for page content
//! - Rust owns all state

mod commands;
mod homepage;
mod state;

use commands::webview::WebviewManager;
use commands::MAIN_WINDOW;
use state::AppState;
use tauri::webview::WebviewBuilder;
use tauri::window::WindowBuilder;
use tauri::{LogicalPosition, LogicalSize, Manager, WebviewUrl};
use zypox_core::Config;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging
    zypox_core::init_logging();

    tauri::Builder::default()
        .register_uri_scheme_protocol(Config::HOMEPAGE_SCHEME, |ctx, request| {
            homepage::serve(ctx.app_handle(), &request)
        })
        .setup(|app| {
            let state = AppState::new();
            let window_config = state.with_browser(|browser| Ok(browser.config().window.clone()))?;

            // Store state in Tauri
            app.manage(state);

            // Initialize webview manager
            app.manage(WebviewManager::new());

            let window = WindowBuilder::new(app, MAIN_WINDOW)
                .title(&window_config.title)
                .inner_size(window_config.width, window_config.height)
                .min_inner_size(window_config.min_width, window_config.min_height)
                .position(window_config.x, window_config.y)
                .build()?;

            let ui_webview = WebviewBuilder::new(
                commands::ui_webview_label(MAIN_WINDOW),
                WebviewUrl::App("index.html".into()),
            )
            .auto_resize();

            let ui_webview = window.add_child(
                ui_webview,
                LogicalPosition::new(0.0, 0.0),
                LogicalSize::new(window_config.width, window_config.height),
            )?;
            let _ = ui_webview.show();

            // First tab
            commands::tabs::open_tab(app.handle(), &window, false)?;

            tracing::info!("Zypox Browser started");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Diagnostics
            commands::diagnostics::frontend_ready,
            // Tab commands
            commands::tabs::new_tab,
            commands::tabs::tab_bar_double_clicked,
            commands::tabs::close_tab,
            commands::tabs::activate_tab,
            commands::tabs::get_tabs,
            commands::tabs::get_active_tab,
            // Navigation commands
            commands::navigation::navigate_input,
            commands::navigation::go_back,
            commands::navigation::go_forward,
            commands::navigation::reload,
            commands::navigation::go_home,
            // Settings menu
            commands::menu::get_settings_menu,
            commands::menu::menu_action,
            // Homepage bridge
            commands::bridge::bridge_call,
            // Content webviews
            commands::webview::set_content_bounds,
            commands::webview::hide_content,
            commands::webview::show_content,
        ])
        .run(tauri::generate_context!())
        .expect("error while running Zypox browser");
}
