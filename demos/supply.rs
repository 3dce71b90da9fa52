use rafflepool::RafflePool;

/// A kingdom-card shuffle: every candidate card enters the raffle with a
/// popularity weight, then ten distinct cards are drawn without replacement
/// to form the supply. A re-run reuses the same pool via `clear()`.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let candidates: &[(u64, &str)] = &[
        (5, "Village"),
        (5, "Smithy"),
        (4, "Market"),
        (4, "Laboratory"),
        (3, "Chapel"),
        (3, "Witch"),
        (3, "Militia"),
        (2, "Throne Room"),
        (2, "Moneylender"),
        (2, "Gardens"),
        (2, "Cellar"),
        (1, "Moat"),
        (1, "Workshop"),
        (1, "Feast"),
        (1, "Adventurer"),
    ];

    let mut pool = RafflePool::new(candidates.len());
    let mut rng = rand::rng();

    for round in 1..=3 {
        pool.clear();
        for &(tickets, card) in candidates {
            pool.add(tickets, card)?;
        }

        let mut supply = Vec::with_capacity(10);
        for _ in 0..10 {
            match pool.draw(&mut rng) {
                Some(card) => supply.push(card),
                None => break,
            }
        }

        println!("shuffle #{round}: {}", supply.join(", "));
    }

    Ok(())
}
