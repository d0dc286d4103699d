use serde::{Deserialize, Serialize};

pub const MAX_ITEM_SLOTS: usize = 3;

/// Items held by a champion, by api name, in equip order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub items: Vec<String>,
    pub max_slots: usize,
}

impl Default for Equipment {
    fn default() -> Self {
        Equipment::new()
    }
}

impl Equipment {
    pub fn new() -> Self {
        Equipment {
            items: Vec::with_capacity(MAX_ITEM_SLOTS),
            max_slots: MAX_ITEM_SLOTS,
        }
    }

    pub fn has_free_slot(&self) -> bool {
        self.items.len() < self.max_slots
    }

    pub fn has_item(&self, api_name: &str) -> bool {
        self.items.iter().any(|i| i == api_name)
    }

    pub fn item_count(&self, api_name: &str) -> usize {
        self.items.iter().filter(|i| *i == api_name).count()
    }

    /// Equipped api names without repeats, in first-equip order
    pub fn distinct_items(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::with_capacity(self.items.len());
        for item in &self.items {
            if !seen.contains(item) {
                seen.push(item.clone());
            }
        }
        seen
    }

    /// Remove one copy. Returns false if the item was not equipped.
    pub fn remove_one(&mut self, api_name: &str) -> bool {
        match self.items.iter().position(|i| i == api_name) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }
}
