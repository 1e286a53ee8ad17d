//! Event bus
//!
//! Routes events from the view to the listeners that drive the game.
//! Publishing is synchronous and runs every listener in registration order
//! on the calling thread.

use crate::models::Event;
use crate::Result;
use tracing::trace;

/// Something that reacts to published events
pub trait Listener {
    fn on_event(&mut self, event: &Event) -> Result<()>;
}

impl<F> Listener for F
where
    F: FnMut(&Event) -> Result<()>,
{
    fn on_event(&mut self, event: &Event) -> Result<()> {
        self(event)
    }
}

/// Ordered list of subscribers
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<Box<dyn Listener>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listener. The same listener may be registered twice and will
    /// then be called twice.
    pub fn register<L>(&mut self, listener: L)
    where
        L: Listener + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Deliver `event` to every listener in registration order.
    ///
    /// The first listener error aborts the publish; listeners after it are
    /// not called.
    pub fn publish(&mut self, event: &Event) -> Result<()> {
        trace!(kind = %event.kind(), listeners = self.listeners.len(), "publishing event");
        for listener in self.listeners.iter_mut() {
            listener.on_event(event)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
