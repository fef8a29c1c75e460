pub mod app_theme;
pub mod extraction_view;
