use rafflepool::TicketedEnum;
use std::collections::HashMap;

#[derive(Copy, Eq, PartialEq, Clone, Debug, Hash, TicketedEnum)]
enum Prize {
    #[tickets(1)]
    Jackpot,
    #[tickets(10)]
    Holiday,
    #[tickets(200)]
    GiftCard,
    #[tickets(500)]
    Sticker,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build straight from the enum:
    let pool = Prize::raffle()?; // uses the macro-provided ENTRIES
    let mut hist: HashMap<Prize, u64> = HashMap::default();

    // Sample with replacement: the pool stays full, so the histogram
    // approaches tickets / num_tickets.
    let mut rng = rand::rng();
    for _ in 0..2_000_000 {
        hist.entry(*pool.sample(&mut rng).expect("pool is non-empty"))
            .and_modify(|acc| {
                *acc += 1;
            })
            .or_insert(1);
    }

    let mut values: Vec<(Prize, u64)> = hist.into_iter().collect();
    values.sort_by(|(_, ca), (_, cb)| cb.cmp(ca));

    println!("{} tickets in the drum", pool.num_tickets());
    for (prize, count) in values {
        println!("{count: >7} {prize:?}");
    }

    Ok(())
}
