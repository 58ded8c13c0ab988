pub mod app;
pub mod edit;
pub mod handlers;
pub mod state;
pub mod ui;
pub mod view;
