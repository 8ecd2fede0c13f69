//! Simple event bus for decoupled communication between background
//! tasks (query exchanges, persistence loads) and the UI frame loop.
//!
//! The bus is single-threaded (WASM constraint) and uses interior
//! mutability via RefCell. Events are buffered and drained by the UI
//! on each frame.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use vidqa_types::event::ChatEvent;

/// Shared event bus — clone-cheap via Rc.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<VecDeque<ChatEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Publish an event. Called from spawned tasks on settlement.
    pub fn emit(&self, event: ChatEvent) {
        self.inner.borrow_mut().push_back(event);
    }

    /// Drain all pending events. Called by the UI layer each frame.
    pub fn drain(&self) -> Vec<ChatEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }

    /// Check for pending events (useful for egui repaint triggers).
    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
