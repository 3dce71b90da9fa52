#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    CapacityExceeded { capacity: usize },
    ZeroTickets,
}

impl std::fmt::Display for PoolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoolError::CapacityExceeded { capacity } => {
                write!(f, "pool already holds {capacity} entrants (its capacity)")
            }
            PoolError::ZeroTickets => write!(f, "an entrant needs at least one ticket"),
        }
    }
}

impl std::error::Error for PoolError {}
