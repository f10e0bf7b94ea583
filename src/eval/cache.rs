use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

// Marks a written slot so an all-zero slot never validates.
const VALID: u64 = 1 << 32;

#[derive(Default)]
struct Slot {
    /// key ^ data
    check: AtomicU64,
    data: AtomicU64,
}

/// Fixed-size, lock-free cache of white-relative scores keyed by position hash.
///
/// Readers and writers may race. A torn slot fails the key check and reads as
/// a miss, so no locking is needed.
pub struct EvalCache {
    slots: Box<[Slot]>,
}

impl EvalCache {
    pub fn new(entries: usize) -> Self {
        let slots: Vec<Slot> = (0..entries).map(|_| Slot::default()).collect();
        debug!(entries, "evaluation cache allocated");
        EvalCache { slots: slots.into_boxed_slice() }
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline(always)]
    fn slot(&self, key: u64) -> Option<&Slot> {
        if self.slots.is_empty() {
            return None;
        }
        self.slots.get((key % self.slots.len() as u64) as usize)
    }

    pub fn probe(&self, key: u64) -> Option<i32> {
        let slot = self.slot(key)?;
        let data = slot.data.load(Ordering::Relaxed);
        let check = slot.check.load(Ordering::Relaxed);
        if data & VALID != 0 && check ^ data == key {
            Some(data as u32 as i32)
        } else {
            None
        }
    }

    pub fn store(&self, key: u64, score: i32) {
        if let Some(slot) = self.slot(key) {
            let data = VALID | score as u32 as u64;
            slot.check.store(key ^ data, Ordering::Relaxed);
            slot.data.store(data, Ordering::Relaxed);
        }
    }

    pub fn clear(&self) {
        for slot in self.slots.iter() {
            slot.check.store(0, Ordering::Relaxed);
            slot.data.store(0, Ordering::Relaxed);
        }
        debug!(entries = self.slots.len(), "evaluation cache cleared");
    }
}
