//! The dashboard's entry points, as an explicit enumerated interface.
//!
//! Markup-driven triggers map onto [`UiAction`] and are dispatched through an
//! injected [`Dashboard`], which owns the modal, search debouncer, toasts and
//! tooltips. There is no ambient registry.

use crate::app::actions;
use crate::app::debounce::Debouncer;
use crate::app::toast::ToastQueue;
use crate::app::tooltip::TooltipRegistry;
use crate::core::modal::{ModalEvent, ModalShell, ModalState};
use crate::domain::ports::Clipboard;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    ShowContainerDetails {
        sku: String,
        container_details: String,
        container_qty: String,
    },
    CloseModal,
    ClickOutside,
    KeyPressed(String),
    CopyText(String),
    SearchInput(String),
    ShowTooltip { element_id: String, text: String },
    HideTooltip { element_id: String },
}

pub struct Dashboard<C: Clipboard> {
    modal: ModalShell,
    search: Debouncer,
    toasts: ToastQueue,
    tooltips: TooltipRegistry,
    clipboard: C,
}

impl<C: Clipboard> Dashboard<C> {
    pub fn new(clipboard: C, debounce: Duration, toast_ms: u64) -> Self {
        Self {
            modal: ModalShell::new(),
            search: Debouncer::new(debounce),
            toasts: ToastQueue::new(toast_ms),
            tooltips: TooltipRegistry::new(),
            clipboard,
        }
    }

    pub fn dispatch(&mut self, action: UiAction, now: Instant) {
        tracing::trace!(?action, "dispatch");
        match action {
            UiAction::ShowContainerDetails {
                sku,
                container_details,
                container_qty,
            } => {
                self.modal.handle(ModalEvent::Open {
                    sku,
                    details: container_details,
                    total_qty: container_qty,
                });
            }
            UiAction::CloseModal => {
                self.modal.handle(ModalEvent::CloseButton);
            }
            UiAction::ClickOutside => {
                self.modal.handle(ModalEvent::ClickOutside);
            }
            UiAction::KeyPressed(key) => {
                self.modal.handle(ModalEvent::Key(key));
            }
            UiAction::CopyText(text) => {
                let toast_ms = self.toasts.default_duration_ms();
                actions::copy_text(&mut self.clipboard, &mut self.toasts, &text, toast_ms);
            }
            UiAction::SearchInput(query) => self.search.input(&query, now),
            UiAction::ShowTooltip { element_id, text } => {
                self.tooltips.show(&element_id, &text, now)
            }
            UiAction::HideTooltip { element_id } => {
                self.tooltips.hide(&element_id);
            }
        }
    }

    /// Advance timers: expire toasts and release a settled search query.
    pub fn tick(&mut self, now: Instant) -> Option<String> {
        self.toasts.expire(now);
        let query = self.search.poll(now);
        if let Some(q) = &query {
            tracing::debug!("Search settled on '{}'", q);
        }
        query
    }

    pub fn modal(&self) -> &ModalState {
        self.modal.state()
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastQueue {
        &mut self.toasts
    }

    pub fn tooltips(&self) -> &TooltipRegistry {
        &self.tooltips
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }
}
