use super::style::{Color, ColorPair};
use rustc_hash::FxHashMap;

/// Lazily assigns backend pair slots to `(fg, bg)` combinations.
///
/// Slots start at 1 (slot 0 is the terminal default) and are never reused for
/// a different combination. New allocations are queued until the App forwards
/// them to the backend with [`ColorCache::drain_pending`].
#[derive(Debug)]
pub struct ColorCache {
    slots: FxHashMap<(Color, Color), ColorPair>,
    next: u8,
    pending: Vec<(ColorPair, Color, Color)>,
}

impl Default for ColorCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorCache {
    pub fn new() -> Self {
        Self {
            slots: FxHashMap::default(),
            next: 1,
            pending: Vec::new(),
        }
    }

    pub fn get(&mut self, fg: Color, bg: Color) -> ColorPair {
        if let Some(pair) = self.slots.get(&(fg, bg)) {
            return *pair;
        }

        // 8x8 palette combinations always fit in a u8 slot range.
        let pair = ColorPair(self.next);
        self.next = self.next.saturating_add(1);
        self.slots.insert((fg, bg), pair);
        self.pending.push((pair, fg, bg));
        tracing::trace!(slot = pair.0, ?fg, ?bg, "color pair allocated");
        pair
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn drain_pending(&mut self) -> Vec<(ColorPair, Color, Color)> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/color.rs"]
mod tests;
