pub mod container_details;
pub mod inventory;
pub mod modal;
pub mod presenter;

pub use crate::domain::model::{ArrivalRow, ModalViewModel, ShipmentEntry};
pub use crate::domain::ports::{Clipboard, FileApi, NotificationSink, SessionApi};
pub use crate::utils::error::Result;
