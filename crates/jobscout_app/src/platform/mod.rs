mod app;
mod effects;
pub(crate) mod logging;
mod ui;

pub use app::run_app;
