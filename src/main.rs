// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use chow_line::config::{build_menagerie, load_roster};
use chow_line::Feeder;
use std::env;

const DEFAULT_ROSTER: &str = "configs/default-roster.yaml";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: {} [roster.yaml]", args[0]);
        eprintln!("Example: {} configs/default-roster.yaml", args[0]);
        std::process::exit(1);
    }

    let roster_path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_ROSTER);

    println!("🍽️  Chow Line");
    println!("═════════════");
    println!("Roster: {}", roster_path);
    println!();

    let roster = load_roster(roster_path)
        .with_context(|| format!("loading roster '{}'", roster_path))?;
    let menagerie = build_menagerie(&roster)
        .with_context(|| format!("resolving roster '{}'", roster_path))?;

    let feeder = Feeder::from_boxed(&menagerie);
    feeder.feed_all_stdout();

    println!();
    println!("🎉 Everyone is fed!");
    Ok(())
}
