use crate::core::presenter;
use crate::domain::model::ModalViewModel;

/// Events the container modal reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEvent {
    Open {
        sku: String,
        details: String,
        total_qty: String,
    },
    CloseButton,
    ClickOutside,
    Key(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ModalViewModel),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    pub fn view(&self) -> Option<&ModalViewModel> {
        match self {
            ModalState::Open(view) => Some(view),
            ModalState::Closed => None,
        }
    }
}

/// Owns the modal's visibility. The view model is built before the modal
/// becomes visible.
#[derive(Debug, Default)]
pub struct ModalShell {
    state: ModalState,
}

impl ModalShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    /// Apply one event. Returns `true` when visibility or content changed.
    pub fn handle(&mut self, event: ModalEvent) -> bool {
        match event {
            ModalEvent::Open {
                sku,
                details,
                total_qty,
            } => {
                let view = presenter::present(&sku, &details, &total_qty);
                tracing::debug!(sku = %view.sku_label, rows = view.entries.len(), "Opening container modal");
                self.state = ModalState::Open(view);
                true
            }
            ModalEvent::CloseButton | ModalEvent::ClickOutside => self.close(),
            ModalEvent::Key(key) if key == "Escape" => self.close(),
            ModalEvent::Key(_) => false,
        }
    }

    fn close(&mut self) -> bool {
        if !self.state.is_open() {
            return false;
        }
        tracing::debug!("Closing container modal");
        self.state = ModalState::Closed;
        true
    }
}
