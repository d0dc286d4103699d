//! Ordered handler registry

use super::Event;
use crate::context::CombatContext;

/// A subscriber that reacts to some events by mutating the world or
/// scheduling follow-ups
pub trait EventHandler {
    /// Name used in logs
    fn name(&self) -> &'static str;

    /// Capability filter
    fn accepts(&self, event: &Event) -> bool;

    fn handle(&mut self, event: &Event, ctx: &mut CombatContext);
}

#[derive(Default)]
pub struct EventBus {
    handlers: Vec<Box<dyn EventHandler>>,
}

impl EventBus {
    pub fn new() -> Self {
        EventBus::default()
    }

    pub fn register(&mut self, handler: Box<dyn EventHandler>) {
        self.handlers.push(handler);
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Run every accepting handler in registration order
    pub fn dispatch(&mut self, event: &Event, ctx: &mut CombatContext) {
        for handler in self.handlers.iter_mut() {
            if handler.accepts(event) {
                handler.handle(event, ctx);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::SimulationConfig;
    use crate::types::Entity;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    struct Recorder {
        label: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl EventHandler for Recorder {
        fn name(&self) -> &'static str {
            self.label
        }

        fn accepts(&self, event: &Event) -> bool {
            matches!(event, Event::ChampionAction { .. })
        }

        fn handle(&mut self, _event: &Event, _ctx: &mut CombatContext) {
            self.log.borrow_mut().push(self.label);
        }
    }

    #[test]
    fn test_dispatch_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        for label in ["first", "second", "third"] {
            bus.register(Box::new(Recorder {
                label,
                log: Rc::clone(&log),
            }));
        }
        let mut ctx = CombatContext::new(
            Arc::new(Catalog::new()),
            SimulationConfig::default().with_seed(1),
        );

        bus.dispatch(&Event::ChampionAction { entity: Entity(0) }, &mut ctx);
        bus.dispatch(&Event::Death { target: Entity(0) }, &mut ctx);

        assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
        assert_eq!(bus.handler_names(), vec!["first", "second", "third"]);
    }
}
