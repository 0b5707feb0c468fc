//! Events collected while a widget renders.
//!
//! Widgets never touch app state; they push events here and the app
//! dispatches them after the frame's UI pass.

use crate::core::event_bus::{BoxedEvent, Event};

#[derive(Default)]
pub struct ActionQueue {
    /// Pointer was over the widget this frame
    pub hovered: bool,
    pub events: Vec<BoxedEvent>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn send<E: Event>(&mut self, event: E) {
        self.events.push(Box::new(event));
    }

    /// Take events from a nested widget; hover is OR-ed.
    pub fn merge(&mut self, other: ActionQueue) {
        self.hovered |= other.hovered;
        self.events.extend(other.events);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::carousel_events::{CarouselId, NextSlideEvent};
    use crate::core::event_bus::downcast_event;

    #[test]
    fn test_merge() {
        let mut outer = ActionQueue::new();
        let mut inner = ActionQueue::new();
        inner.hovered = true;
        inner.send(NextSlideEvent(CarouselId::Projects));

        outer.merge(inner);
        assert!(outer.hovered);
        assert_eq!(outer.events.len(), 1);
        assert!(downcast_event::<NextSlideEvent>(&outer.events[0]).is_some());
    }
}
