//! Binary indexed tree over ticket counts, for O(log n) weighted lookups.

/// Cumulative ticket bookkeeping over slots `1..=capacity`.
///
/// Storage is the classic Fenwick layout: a flat `Vec<u64>` of length
/// `capacity + 1` with index 0 unused. `accum[i]` covers a range of slots
/// determined by `lowbit(i)`, so a point update or a prefix query touches
/// O(log capacity) entries and nothing reallocates after construction.
#[derive(Debug, Clone)]
pub struct TicketTree {
    /// 1-indexed accumulators; `accum[0]` is unused.
    accum: Vec<u64>,
    capacity: usize,
}

impl TicketTree {
    /// A zeroed tree over `capacity` slots. O(capacity).
    pub fn new(capacity: usize) -> Self {
        Self {
            accum: vec![0u64; capacity + 1],
            capacity,
        }
    }

    /// Number of slots the tree covers.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Add `delta` tickets to `slot` (1-based). O(log capacity).
    ///
    /// Negative deltas ride on two's complement: `delta as u64` plus
    /// `wrapping_add` subtracts correctly as long as the caller never takes
    /// a slot's ticket count below zero.
    ///
    /// # Panics
    /// Panics if `slot` is 0 or greater than the capacity.
    pub fn update(&mut self, slot: usize, delta: i64) {
        assert!(
            slot >= 1 && slot <= self.capacity,
            "slot {slot} out of range 1..={}",
            self.capacity
        );
        let mut i = slot;
        while i <= self.capacity {
            self.accum[i] = self.accum[i].wrapping_add(delta as u64);
            i += lowbit(i);
        }
    }

    /// Total tickets held by slots `1..=slot`. O(log capacity).
    ///
    /// `prefix(0)` is 0.
    ///
    /// # Panics
    /// Panics if `slot` is greater than the capacity.
    pub fn prefix(&self, slot: usize) -> u64 {
        assert!(
            slot <= self.capacity,
            "slot {slot} out of range 0..={}",
            self.capacity
        );
        let mut sum = 0u64;
        let mut i = slot;
        while i > 0 {
            sum = sum.wrapping_add(self.accum[i]);
            i -= lowbit(i);
        }
        sum
    }

    /// Total tickets across every slot. O(log capacity).
    pub fn total(&self) -> u64 {
        self.prefix(self.capacity)
    }

    /// The slot owning ticket number `ticket` (1-based): the smallest slot
    /// `i` with `prefix(i) >= ticket`. O(log capacity).
    ///
    /// Slot `i` owns tickets `prefix(i-1)+1 ..= prefix(i)`, so slots holding
    /// zero tickets own nothing and are never returned. The descent walks
    /// the implicit tree top-down from the highest power of two, which
    /// avoids a second pass of prefix queries.
    ///
    /// # Panics
    /// Panics if `ticket` is 0 or exceeds `total()`.
    pub fn find_ticket(&self, ticket: u64) -> usize {
        assert!(
            ticket >= 1 && ticket <= self.total(),
            "ticket {ticket} out of range 1..={}",
            self.total()
        );
        let mut pos = 0usize;
        let mut remaining = ticket;
        let mut mask = most_significant_bit(self.capacity);
        while mask > 0 {
            let next = pos + mask;
            if next <= self.capacity && self.accum[next] < remaining {
                remaining -= self.accum[next];
                pos = next;
            }
            mask >>= 1;
        }
        pos + 1
    }

    /// Zero every accumulator, keeping the allocation. O(capacity).
    pub fn reset(&mut self) {
        self.accum.fill(0);
    }
}

/// Lowest set bit of `i`. E.g., `lowbit(6) = 2`, `lowbit(4) = 4`.
#[inline]
fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

/// Largest power of two that is `<= n` (0 for n = 0).
#[inline]
fn most_significant_bit(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    1 << (usize::BITS - 1 - n.leading_zeros())
}
