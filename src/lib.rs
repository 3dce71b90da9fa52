//! # rafflepool
//!
//! A fixed-capacity raffle: weighted random draws that can *consume* what
//! they pick.
//!
//! A [`RafflePool`] holds up to `capacity` entrants, each owning some number
//! of integer "tickets". Drawing picks an entrant with probability
//! proportional to its tickets. Unlike an alias table, the pool is mutable:
//! entrants come and go between draws, and a consuming draw removes the
//! winner so it cannot be drawn again. Internally a binary indexed tree
//! keeps every mutation and every draw at O(log capacity) — no linear scan
//! on the hot path, which matters when a UI shuffles the pool thousands of
//! times.
//!
//! There are two primary ways to use it:
//!
//! 1. **Runtime entries** with [`RafflePool::new`] + [`RafflePool::add`]
//! 2. **Compile-time enums** with the [`TicketedEnum`] derive macro (from the
//!    companion `rafflepool_macros` crate), which pre-fills a pool from an
//!    annotated enum.
//!
//! ## Quick start (runtime entries)
//!
//! ```rust,ignore
//! use rafflepool::RafflePool;
//!
//! # fn main() -> Result<(), rafflepool::PoolError> {
//! let mut pool = RafflePool::new(8);
//! pool.add(60, "common")?;
//! pool.add(30, "uncommon")?;
//! pool.add(9, "rare")?;
//! pool.add(1, "legendary")?;
//!
//! let mut rng = rand::rng();
//! while let Some(tier) = pool.draw(&mut rng) {
//!     println!("drawn (and gone): {tier}");
//! }
//! # Ok(()) }
//! ```
//!
//! ## Quick start (enum + macro)
//!
//! ```rust,ignore
//! use rafflepool::TicketedEnum;
//! use rafflepool_macros::TicketedEnum;
//!
//! #[derive(Copy, Clone, Debug, TicketedEnum)]
//! enum Loot {
//!     #[tickets(60)] Common,
//!     #[tickets(30)] Uncommon,
//!     #[tickets(9)]  Rare,
//!     #[tickets(1)]  Legendary,
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pool = Loot::raffle()?;
//! let mut rng = rand::rng();
//! let item = pool.draw(&mut rng);            // Option<Loot>, consumed
//! let peek = pool.sample(&mut rng);          // Option<&Loot>, pool untouched
//! # Ok(()) }
//! ```
//!
//! ## Performance
//! * **Construct**: O(capacity), one allocation per backing array.
//! * **add / remove / draw**: O(log capacity), zero allocation.
//! * **num_tickets**: O(1) (kept as a running counter).
//!
//! ## Gotchas
//! * Capacity is fixed at construction; [`RafflePool::new`] panics on zero.
//! * Ticket counts are positive integers; `add(0, ..)` is rejected.
//! * Adding the same value twice makes two independent entrants; `remove`
//!   takes out exactly the first match.
//! * Not thread-safe — wrap it in a lock yourself if you must share it.
//!
//! ---
//!
//! `rand` integration uses the modern `Rng::random_range()` API; every
//! drawing method takes `&mut impl Rng`, so tests can pass a seeded
//! generator.

mod error;
mod fenwick;

pub use error::PoolError;
pub use fenwick::TicketTree;

/// Derive macro imported from `rafflepool_macros`.
/// See the crate-level example for usage.
pub use rafflepool_macros::TicketedEnum;

use rand::Rng;

/// A raffle pool: up to `capacity` weighted entrants, drawn at random with
/// probability proportional to their tickets.
///
/// Slots are identified positionally and never move; removing one entrant
/// does not disturb the others, and its slot is recycled by a later
/// [`add`](Self::add).
#[derive(Debug, Clone)]
pub struct RafflePool<T> {
    tree: TicketTree,
    /// Payloads, parallel to tree slots 1..=capacity. `None` ⇔ slot free.
    slots: Vec<Option<T>>,
    /// Per-slot ticket counts. 0 ⇔ slot free.
    tickets: Vec<u64>,
    /// Slots freed by `remove`/`draw`, reused LIFO before fresh ones.
    recycled: Vec<usize>,
    /// Highest slot ever handed out (1-based); slots past it are untouched.
    high: usize,
    live: usize,
    num_tickets: u64,
}

/// Trait implemented by the `TicketedEnum` derive macro.
///
/// Each variant and its ticket count is exposed via
/// [`TicketedEnum::ENTRIES`], which enables building a pre-filled
/// [`RafflePool`].
pub trait TicketedEnum: Sized + 'static {
    /// All `(tickets, variant)` pairs for the enum.
    const ENTRIES: &'static [(u64, Self)];

    /// Convenience constructor: a pool of capacity `ENTRIES.len()` holding
    /// every variant.
    ///
    /// # Errors
    /// [`PoolError::ZeroTickets`] if any variant is annotated with zero
    /// tickets (the derive accepts any const expression, so this is checked
    /// at runtime).
    fn raffle() -> Result<RafflePool<Self>, PoolError>
    where
        Self: Copy,
    {
        let mut pool = RafflePool::new(Self::ENTRIES.len());
        for &(tickets, value) in Self::ENTRIES {
            pool.add(tickets, value)?;
        }
        Ok(pool)
    }
}

impl<T> RafflePool<T> {
    /// An empty pool with room for `capacity` entrants.
    ///
    /// # Panics
    /// Panics if `capacity` is 0 — a zero-capacity raffle is a construction
    /// bug, not a recoverable condition.
    ///
    /// # Complexity
    /// O(capacity) time / O(capacity) space; no further allocation happens
    /// in `add`/`remove`/`draw`.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be at least 1");
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            tree: TicketTree::new(capacity),
            slots,
            tickets: vec![0u64; capacity],
            recycled: Vec::new(),
            high: 0,
            live: 0,
            num_tickets: 0,
        }
    }

    /// Enter `value` into the raffle holding `tickets` tickets.
    ///
    /// Calling this twice with the same value creates two independent
    /// entrants; each can be drawn (or removed) separately.
    ///
    /// # Errors
    /// * [`PoolError::ZeroTickets`] if `tickets` is 0.
    /// * [`PoolError::CapacityExceeded`] if the pool already holds
    ///   `capacity` live entrants.
    ///
    /// The pool is unchanged on either error.
    pub fn add(&mut self, tickets: u64, value: T) -> Result<(), PoolError> {
        if tickets == 0 {
            return Err(PoolError::ZeroTickets);
        }
        let slot = match self.recycled.pop() {
            Some(slot) => slot,
            None if self.high < self.capacity() => {
                self.high += 1;
                self.high
            }
            None => {
                return Err(PoolError::CapacityExceeded {
                    capacity: self.capacity(),
                });
            }
        };
        self.slots[slot - 1] = Some(value);
        self.tickets[slot - 1] = tickets;
        self.tree.update(slot, tickets as i64);
        self.num_tickets += tickets;
        self.live += 1;
        Ok(())
    }

    /// Draw an entrant at random, then remove it from the pool.
    ///
    /// Each live entrant wins with probability `tickets / num_tickets()`.
    /// Returns `None` once the pool is exhausted — the normal end of a
    /// draw-without-replacement session, and calling again keeps returning
    /// `None`.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<T> {
        if self.num_tickets == 0 {
            return None;
        }
        let ticket = rng.random_range(1..=self.num_tickets);
        let slot = self.tree.find_ticket(ticket);
        self.release(slot)
    }

    /// Draw an entrant at random **without** removing it.
    ///
    /// Repeated calls sample with replacement: the same entrant may win
    /// again, at unchanged odds. Returns `None` on an empty pool.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        if self.num_tickets == 0 {
            return None;
        }
        let ticket = rng.random_range(1..=self.num_tickets);
        self.slots[self.tree.find_ticket(ticket) - 1].as_ref()
    }

    /// Like [`sample`](Self::sample), but clones the winner.
    ///
    /// Prefer [`sample`](Self::sample) if you don’t need ownership.
    pub fn sample_owned<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<T>
    where
        T: Clone,
    {
        self.sample(rng).cloned()
    }

    /// Remove the first entrant equal to `value`, in slot order.
    ///
    /// Returns `false` when no live entrant matches — a normal negative
    /// result, not an error. With duplicate values present, exactly one
    /// occurrence is removed. The equality scan is O(capacity), unlike the
    /// log-time draw path, so avoid it in tight loops.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let found = (1..=self.high).find(|&slot| self.slots[slot - 1].as_ref() == Some(value));
        match found {
            Some(slot) => {
                self.release(slot);
                true
            }
            None => false,
        }
    }

    /// Total tickets currently in the pool. O(1).
    #[inline]
    pub fn num_tickets(&self) -> u64 {
        self.num_tickets
    }

    /// Number of live entrants.
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether the pool holds no entrants.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Maximum number of simultaneous entrants, fixed at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Empty the pool, dropping every payload, so it can be refilled.
    ///
    /// Afterwards the pool is indistinguishable from a freshly constructed
    /// one of the same capacity. Keeps all allocations.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.tickets.fill(0);
        self.tree.reset();
        self.recycled.clear();
        self.high = 0;
        self.live = 0;
        self.num_tickets = 0;
    }

    /// Free `slot` and hand back its payload.
    fn release(&mut self, slot: usize) -> Option<T> {
        let tickets = self.tickets[slot - 1];
        self.tree.update(slot, (tickets as i64).wrapping_neg());
        self.num_tickets -= tickets;
        self.tickets[slot - 1] = 0;
        self.recycled.push(slot);
        self.live -= 1;
        self.slots[slot - 1].take()
    }
}
