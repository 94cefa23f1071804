use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use volley::{init_logging, input, ui, Battle, Scenario};

#[derive(Parser)]
#[command(author, version, about = "Replay a two-player salvo battleship scenario.", long_about = None)]
struct Cli {
    /// Scenario file. Omit it, or pass `stdin`, to read standard input until an `EOD` line.
    input: Option<PathBuf>,
    /// Print a JSON summary instead of the battle transcript.
    #[arg(long)]
    json: bool,
}

fn fail(message: &str) -> ! {
    println!("{}", message);
    println!("{}", input::USAGE);
    std::process::exit(1);
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let source = input::Source::from_arg(cli.input);
    let lines = match source.read_lines() {
        Ok(lines) => lines,
        Err(e) => fail(&e.to_string()),
    };
    let scenario = match Scenario::from_lines(&lines) {
        Ok(scenario) => scenario,
        Err(e) => fail(&e.to_string()),
    };
    log::debug!(
        "{}x{} battle area with {} ship(s) per player",
        scenario.width,
        scenario.height,
        scenario.ships.len()
    );

    let mut battle = Battle::from_scenario(&scenario);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.json {
        battle.run();
        serde_json::to_writer(&mut out, &battle.summary())?;
        writeln!(out)?;
        return Ok(());
    }

    ui::write_arenas(&mut out, &battle)?;
    battle.run();
    ui::write_transcript(&mut out, &battle)?;
    out.flush()?;
    Ok(())
}
