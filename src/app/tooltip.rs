use std::collections::HashMap;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipState {
    pub text: String,
    pub shown_at: Instant,
}

/// Transient tooltip state keyed by element id. At most one entry per element.
#[derive(Debug, Default)]
pub struct TooltipRegistry {
    active: HashMap<String, TooltipState>,
}

impl TooltipRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, element_id: &str, text: &str, now: Instant) {
        self.active.insert(
            element_id.to_string(),
            TooltipState {
                text: text.to_string(),
                shown_at: now,
            },
        );
    }

    pub fn hide(&mut self, element_id: &str) -> Option<TooltipState> {
        self.active.remove(element_id)
    }

    pub fn get(&self, element_id: &str) -> Option<&TooltipState> {
        self.active.get(element_id)
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
