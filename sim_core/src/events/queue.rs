//! Min-heap of pending events keyed by logical time, then jitter

use super::Event;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Half-width of the tie-breaking perturbation
pub const JITTER: f64 = 1e-5;

#[derive(Debug, Clone, Serialize)]
pub struct EventItem {
    pub event: Event,
    /// Logical time the event fires at
    pub timestamp: f64,
    /// `timestamp` plus jitter, breaks ties between equal timestamps
    pub enqueue_timestamp: f64,
    #[serde(skip)]
    insertion: u64,
}

struct Pending(EventItem);

impl Pending {
    fn key(&self) -> (f64, f64, u64) {
        (self.0.timestamp, self.0.enqueue_timestamp, self.0.insertion)
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    // Reversed so the BinaryHeap pops the earliest item
    fn cmp(&self, other: &Self) -> Ordering {
        let (a_time, a_jitter, a_ins) = self.key();
        let (b_time, b_jitter, b_ins) = other.key();
        b_time
            .total_cmp(&a_time)
            .then_with(|| b_jitter.total_cmp(&a_jitter))
            .then_with(|| b_ins.cmp(&a_ins))
    }
}

pub struct EventQueue {
    heap: BinaryHeap<Pending>,
    rng: StdRng,
    inserted: u64,
}

impl EventQueue {
    /// Queue with jitter drawn from `seed`, or from entropy when `None`
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        EventQueue {
            heap: BinaryHeap::new(),
            rng,
            inserted: 0,
        }
    }

    pub fn enqueue(&mut self, event: Event, timestamp: f64) {
        let jitter = self.rng.gen_range(-JITTER..=JITTER);
        self.inserted += 1;
        self.heap.push(Pending(EventItem {
            event,
            timestamp,
            enqueue_timestamp: timestamp + jitter,
            insertion: self.inserted,
        }));
    }

    pub fn dequeue(&mut self) -> Option<EventItem> {
        self.heap.pop().map(|pending| pending.0)
    }

    pub fn peek_time(&self) -> Option<f64> {
        self.heap.peek().map(|pending| pending.0.timestamp)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
