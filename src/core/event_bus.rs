//! Typed event bus with a deferred queue.
//!
//! Widgets never touch application state directly. They emit events
//! (`NextSlideEvent`, `OpenFormEvent`, ...) which the app drains once per
//! frame with [`EventBus::poll`] and matches with [`downcast_event`].
//!
//! Events come out in emit order.

use log::warn;
use std::any::Any;
use std::sync::{Arc, Mutex};

/// Queue length at which the oldest half is dropped
const MAX_QUEUE_SIZE: usize = 1000;

/// Anything `Send + Sync + 'static` can travel on the bus.
pub trait Event: Any + Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + Send + Sync + 'static> Event for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Queued, type-erased event
pub type BoxedEvent = Box<dyn Event>;

/// Shared state behind the bus and all of its emitter handles
#[derive(Default)]
struct Channels {
    queue: Mutex<Vec<BoxedEvent>>,
}

impl Channels {
    fn enqueue(&self, event: BoxedEvent) {
        let mut queue = self.queue.lock().unwrap_or_else(|e| e.into_inner());
        if queue.len() >= MAX_QUEUE_SIZE {
            let evict = queue.len() / 2;
            warn!("Event queue full ({} events), dropping oldest {}", queue.len(), evict);
            queue.drain(0..evict);
        }
        queue.push(event);
    }

    fn emit<E: Event>(&self, event: E) {
        self.enqueue(Box::new(event));
    }
}

/// Application-wide event bus. Cloning shares the same channels.
#[derive(Clone, Default)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("queue_len", &self.queue_len())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue for the next [`poll`](Self::poll).
    pub fn emit<E: Event>(&self, event: E) {
        self.channels.emit(event);
    }

    /// Emit an already boxed event (widget action queues)
    pub fn emit_boxed(&self, event: BoxedEvent) {
        self.channels.enqueue(event);
    }

    /// Take every event queued since the previous poll.
    pub fn poll(&self) -> Vec<BoxedEvent> {
        std::mem::take(&mut *self.channels.queue.lock().unwrap_or_else(|e| e.into_inner()))
    }

    /// Cheap handle for components that only emit
    pub fn emitter(&self) -> EventEmitter {
        EventEmitter {
            channels: Arc::clone(&self.channels),
        }
    }

    pub fn queue_len(&self) -> usize {
        self.channels.queue.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

/// Emit-only handle to an [`EventBus`].
#[derive(Clone)]
pub struct EventEmitter {
    channels: Arc<Channels>,
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field(
                "queue_len",
                &self.channels.queue.lock().map(|q| q.len()).unwrap_or(0),
            )
            .finish()
    }
}

impl EventEmitter {
    pub fn emit<E: Event>(&self, event: E) {
        self.channels.emit(event);
    }
}

/// Optional emitter owned by a slideshow. `detached()` drops everything,
/// which keeps slideshows usable in tests and before the bus exists.
#[derive(Clone, Default, Debug)]
pub struct SlideshowEmitter {
    inner: Option<EventEmitter>,
}

impl SlideshowEmitter {
    pub fn detached() -> Self {
        Self { inner: None }
    }

    pub fn attached(emitter: EventEmitter) -> Self {
        Self { inner: Some(emitter) }
    }

    pub fn emit<E: Event>(&self, event: E) {
        if let Some(emitter) = &self.inner {
            emitter.emit(event);
        }
    }
}

/// Downcast a queued event to its concrete type.
///
/// Must deref to `dyn Event` before `as_any()`: the blanket impl also covers
/// `Box<dyn Event>` itself, which would make every downcast fail.
#[inline]
pub fn downcast_event<E: Event>(event: &BoxedEvent) -> Option<&E> {
    (**event).as_any().downcast_ref::<E>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Ping(i32);

    #[derive(Clone, Debug)]
    struct Pong;

    #[test]
    fn test_poll_drains_queue() {
        let bus = EventBus::new();
        bus.emit(Ping(1));
        bus.emit(Pong);
        assert_eq!(bus.queue_len(), 2);

        let events = bus.poll();
        assert_eq!(events.len(), 2);
        assert!(downcast_event::<Ping>(&events[0]).is_some());
        assert!(downcast_event::<Pong>(&events[1]).is_some());
        assert!(downcast_event::<Ping>(&events[1]).is_none());
        assert!(bus.poll().is_empty());
    }

    #[test]
    fn test_boxed_and_typed_emit_share_queue() {
        let bus = EventBus::new();
        let boxed: BoxedEvent = Box::new(Ping(9));
        bus.emit_boxed(boxed);
        bus.emitter().emit(Ping(10));

        let events = bus.poll();
        let values: Vec<i32> = events.iter().filter_map(|e| downcast_event::<Ping>(e)).map(|p| p.0).collect();
        assert_eq!(values, vec![9, 10]);
    }

    #[test]
    fn test_queue_eviction() {
        let bus = EventBus::new();
        for i in 0..MAX_QUEUE_SIZE as i32 {
            bus.emit(Ping(i));
        }
        bus.emit(Ping(-1));
        let events = bus.poll();
        assert_eq!(events.len(), MAX_QUEUE_SIZE / 2 + 1);
        assert_eq!(downcast_event::<Ping>(events.last().unwrap()).map(|p| p.0), Some(-1));
    }

    #[test]
    fn test_detached_slideshow_emitter_is_silent() {
        SlideshowEmitter::detached().emit(Ping(1));

        let bus = EventBus::new();
        SlideshowEmitter::attached(bus.emitter()).emit(Pong);
        assert_eq!(bus.poll().len(), 1);
    }
}
