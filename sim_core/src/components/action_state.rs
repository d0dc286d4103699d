use crate::types::ActionPhase;
use serde::{Deserialize, Serialize};

/// Per-unit state read by the action decision step
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionState {
    pub phase: ActionPhase,
    pub previous_phase: ActionPhase,
    pub action_start: f64,
    pub action_duration: f64,
    pub previous_action_duration: f64,
    /// Remaining cooldown handed to the next `AttackCooldownStart`
    pub cooldown_remaining: f64,
    pub is_stunned: bool,
}

impl ActionState {
    pub fn new() -> Self {
        ActionState::default()
    }

    pub fn begin(&mut self, phase: ActionPhase, now: f64, duration: f64) {
        self.phase = phase;
        self.action_start = now;
        self.action_duration = duration;
    }
}
