use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use volley::{init_logging, Battle, Scenario, DEFAULT_LIMITS};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    let emit = args.iter().skip(1).any(|a| a == "--emit");
    let seeds: Vec<&String> = args.iter().skip(1).filter(|a| *a != "--emit").collect();
    if seeds.len() > 1 {
        eprintln!("Usage: {} [seed] [--emit]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = match seeds.first() {
        Some(s) => s.parse()?,
        None => rand::random(),
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let scenario = Scenario::random(&mut rng, &DEFAULT_LIMITS);
    scenario
        .validate()
        .map_err(|e| anyhow::anyhow!("generated scenario is invalid: {}", e))?;
    if emit {
        print!("{}", scenario);
    }

    let mut battle = Battle::from_scenario(&scenario);
    battle.run();

    let result = json!({
        "seed": seed,
        "summary": battle.summary(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
