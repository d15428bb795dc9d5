pub mod actions;
pub mod dashboard;
pub mod debounce;
pub mod pagination;
pub mod session;
pub mod toast;
pub mod tooltip;
pub mod upload;
