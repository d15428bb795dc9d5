pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::DashboardClient;
pub use app::dashboard::{Dashboard, UiAction};
pub use config::PanelConfig;
pub use crate::core::{container_details::parse, presenter::present};
pub use domain::model::{ArrivalRow, ModalViewModel, ShipmentEntry};
pub use utils::error::{PanelError, Result};
