//! Window focus notifications as an explicit observer interface.
//!
//! Handlers are invoked synchronously, in registration order, on the caller's
//! thread; there is no queue and no concurrency. A [`Subscription`] is the
//! cancellation token: dropping it (or calling `cancel`) detaches the
//! handler.

use std::cell::RefCell;
use std::rc::Rc;

type Handler = Box<dyn FnMut(bool)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
    // Ids detached while their handler was temporarily out of the registry
    // (cancellation during an emit)
    cancelled: Vec<u64>,
}

/// Single-threaded focus-change event source
#[derive(Clone, Default)]
pub struct FocusEvents {
    registry: Rc<RefCell<Registry>>,
}

impl FocusEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler; it stays live until the returned token is
    /// cancelled or dropped
    pub fn subscribe(&self, handler: impl FnMut(bool) + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.handlers.push((id, Box::new(handler)));

        Subscription { id, registry: Rc::clone(&self.registry) }
    }

    /// Deliver a focus-change event (`true` = gained focus) to every live
    /// handler, in registration order
    pub fn emit(&self, focused: bool) {
        // Take handlers out so a handler may subscribe or cancel without a
        // re-entrant borrow
        let mut handlers = std::mem::take(&mut self.registry.borrow_mut().handlers);
        for (_, handler) in handlers.iter_mut() {
            handler(focused);
        }

        let mut registry = self.registry.borrow_mut();
        let added_during_emit = std::mem::take(&mut registry.handlers);
        let cancelled = std::mem::take(&mut registry.cancelled);
        handlers.retain(|(id, _)| !cancelled.contains(id));
        registry.handlers = handlers;
        registry.handlers.extend(added_during_emit);
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().handlers.len()
    }
}

/// Cancellation token for a focus subscription
pub struct Subscription {
    id: u64,
    registry: Rc<RefCell<Registry>>,
}

impl Subscription {
    /// Detach the handler now instead of at drop
    pub fn cancel(self) {
        // Drop does the work
    }

    fn detach(&self) {
        if let Ok(mut registry) = self.registry.try_borrow_mut() {
            let before = registry.handlers.len();
            registry.handlers.retain(|(id, _)| *id != self.id);
            if registry.handlers.len() == before {
                // Not in the registry right now; an in-flight emit holds it
                // and must not put it back
                registry.cancelled.push(self.id);
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}
