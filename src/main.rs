#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod presentation;

#[cfg(test)]
mod app_theme_tests;

fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_TITLE);

    iced::application(
        app::PiiMaskApp::build,
        app::PiiMaskApp::handle_update,
        app::PiiMaskApp::render_view,
    )
    .title(global_constants::APPLICATION_TITLE)
    .subscription(app::PiiMaskApp::handle_subscription)
    .run()
}
