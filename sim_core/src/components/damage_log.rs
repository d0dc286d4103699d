use crate::types::Entity;
use std::collections::BTreeMap;

/// Window in which a damage contributor earns an assist
pub const ASSIST_WINDOW: f64 = 3.0;

/// Last time each source damaged this unit
#[derive(Debug, Clone, Default)]
pub struct DamageLog {
    pub last_hit: BTreeMap<Entity, f64>,
}

impl DamageLog {
    pub fn new() -> Self {
        DamageLog::default()
    }

    pub fn record(&mut self, source: Entity, at: f64) {
        self.last_hit.insert(source, at);
    }

    /// Contributors other than `killer` who hit within the assist window
    pub fn assistors(&self, killer: Entity, now: f64) -> Vec<Entity> {
        self.last_hit
            .iter()
            .filter(|(source, at)| **source != killer && now - **at <= ASSIST_WINDOW)
            .map(|(source, _)| *source)
            .collect()
    }
}
