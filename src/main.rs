use pokemon_battle_sim::{run, CliOptions};
use std::env;
use std::path::PathBuf;

fn usage() -> ! {
    eprintln!(
        "Usage: cargo run --release -- [--first NAME] [--second NAME] [--roster roster.json] \
[--seed SEED] [--sims N] [--json battle.json]"
    );
    std::process::exit(1);
}

fn parse_args() -> anyhow::Result<CliOptions> {
    let mut roster_path = None;
    let mut first = "Pikachu".to_string();
    let mut second = "Squirtle".to_string();
    let mut seed = 0u64;
    let mut sims = 1usize;
    let mut json_path = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--first" => {
                first = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--first requires a name"))?;
            }
            "--second" => {
                second = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--second requires a name"))?;
            }
            "--roster" => {
                roster_path = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--roster requires a path (e.g. --roster roster.json)")
                })?);
            }
            "--seed" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--seed requires a number"))?;
                seed = val.parse()?;
            }
            "--sims" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--sims requires a number"))?;
                sims = val.parse()?;
            }
            "--json" => {
                json_path = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--json requires a path (e.g. --json battle.json)")
                })?);
            }
            "--help" | "-h" => usage(),
            other => return Err(anyhow::anyhow!("Unknown argument {other}")),
        }
    }

    Ok(CliOptions {
        roster_path,
        first,
        second,
        seed,
        sims,
        json_path,
    })
}

fn main() -> anyhow::Result<()> {
    let opts = parse_args()?;
    run(opts)
}
