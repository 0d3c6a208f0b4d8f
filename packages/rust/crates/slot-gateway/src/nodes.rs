use std::collections::HashMap;

use slot_gateway::{
    DEFAULT_BIND, GatewayState, SlotSettings, build_registry, random_source, run_http,
};

pub(crate) async fn run_serve_mode(
    bind: Option<String>,
    seed: Option<u64>,
    settings: &SlotSettings,
) -> anyhow::Result<()> {
    let registry = build_registry(settings)?;
    let rng = random_source(seed.or(settings.draw.seed));
    let bind_addr = bind
        .or_else(|| settings.gateway.bind.clone())
        .unwrap_or_else(|| DEFAULT_BIND.to_string());
    run_http(GatewayState::new(registry, rng), &bind_addr).await
}

pub(crate) fn run_draw_mode(
    count: u32,
    seed: Option<u64>,
    settings: &SlotSettings,
) -> anyhow::Result<()> {
    let registry = build_registry(settings)?;
    let rng = random_source(seed.or(settings.draw.seed));

    let mut tally: HashMap<i64, u32> = HashMap::new();
    for round in 1..=count {
        let prize = registry.draw(rng.as_ref())?;
        println!("#{round}: {} {} (id {})", prize.symbol, prize.name, prize.id);
        *tally.entry(prize.id).or_default() += 1;
    }

    if count > 1 {
        println!();
        println!("tally over {count} draws:");
        for entry in registry.odds() {
            let hits = tally.get(&entry.id).copied().unwrap_or_default();
            println!(
                "  {:<20} {:>6} hits  {:>6.2}% observed  {:>6.2}% expected",
                entry.name,
                hits,
                f64::from(hits) * 100.0 / f64::from(count),
                entry.percent
            );
        }
    }
    Ok(())
}

pub(crate) fn run_odds_mode(settings: &SlotSettings) -> anyhow::Result<()> {
    let registry = build_registry(settings)?;
    let snapshot = registry.snapshot();
    for (prize, entry) in snapshot.iter().zip(registry.odds()) {
        println!(
            "{:>3}  {} {:<20} weight {:>8.2}  {:>6.2}%",
            prize.id, prize.symbol, prize.name, prize.weight, entry.percent
        );
    }
    Ok(())
}
