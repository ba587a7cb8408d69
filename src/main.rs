// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Champion Randomizer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Champion Randomizer CLI entrypoint.
//!
//! Runs the interactive TUI by default. `roll`, `list` and `reset` work headless against the
//! same persisted state.

use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;

use champion_randomizer::assets::DirAssetResolver;
use champion_randomizer::catalog;
use champion_randomizer::config::{AppConfig, Cli, Command, StorageMode};
use champion_randomizer::logging::{self, LogTarget};
use champion_randomizer::model::{Champion, ChampionClass, ChampionId};
use champion_randomizer::randomizer::Randomizer;
use champion_randomizer::store::{ChampionStore, FileKvStore, MemoryKvStore, Persistence};
use champion_randomizer::tui;
use clap::Parser;

fn main() -> ExitCode {
    // Usage errors exit with status 2 from inside clap.
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "exiting with error");
            eprintln!("champion-randomizer: {err}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_cli(cli)?;
    logging::init(&log_target(&config))?;
    tracing::info!(
        data_dir = %config.data_dir.display(),
        storage = ?config.storage,
        command = ?config.command,
        "configuration resolved"
    );

    let mut store = open_store(&config)?;
    match config.command {
        Command::Tui => {
            let assets = DirAssetResolver::new(config.assets_dir.clone());
            tracing::info!(root = %assets.root().display(), "resolving champion images");
            tui::run(store, Box::new(assets))?;
        }
        Command::Roll => {
            let Some(picked) = store.randomize()? else {
                return Err("nothing to roll: every champion is out or disabled".into());
            };
            if let Some(champion) = store.champion(&picked) {
                writeln!(io::stdout().lock(), "{} ({})", champion.name(), champion.class())?;
            }
        }
        Command::List { pool, out } => {
            let champions = if pool {
                store.included_champions()
            } else if out {
                store.excluded_champions()
            } else {
                store.champions().iter().collect()
            };
            let mut stdout = io::stdout().lock();
            write_roster(&mut stdout, &champions, store.randomized_champion_id())?;
        }
        Command::Reset => {
            store.reset()?;
            writeln!(io::stdout().lock(), "reset {} champions", store.champions().len())?;
        }
    }
    Ok(())
}

fn log_target(config: &AppConfig) -> LogTarget {
    match (config.is_interactive(), config.storage) {
        (false, _) => LogTarget::Stderr,
        (true, StorageMode::Memory) => LogTarget::Off,
        (true, StorageMode::File(_)) => LogTarget::File(config.log_file()),
    }
}

fn open_store(config: &AppConfig) -> Result<ChampionStore, Box<dyn Error>> {
    let rows = match &config.catalog {
        Some(path) => catalog::load_rows(path)?,
        None => catalog::bundled_rows()?,
    };
    let persistence = match config.storage {
        StorageMode::Memory => Persistence::new(MemoryKvStore::new()),
        StorageMode::File(durability) => {
            let kv = FileKvStore::new(config.data_dir.clone()).with_durability(durability);
            tracing::info!(
                root = %kv.root().display(),
                durability = ?kv.durability(),
                "using file store"
            );
            Persistence::new(kv)
        }
    };
    let randomizer = config.seed.map_or_else(Randomizer::new, Randomizer::with_seed);
    Ok(ChampionStore::open(rows, persistence).with_randomizer(randomizer))
}

/// One header line per class, then one line per champion with its flags.
fn write_roster(
    out: &mut impl Write,
    champions: &[&Champion],
    pick: Option<&ChampionId>,
) -> io::Result<()> {
    let mut current: Option<ChampionClass> = None;
    for champion in champions {
        if current != Some(champion.class()) {
            current = Some(champion.class());
            writeln!(out, "{}", champion.class())?;
        }
        let mut flags = Vec::new();
        if champion.removed() {
            flags.push("out");
        }
        if champion.disabled() {
            flags.push("disabled");
        }
        if pick == Some(champion.id()) {
            flags.push("picked");
        }
        if flags.is_empty() {
            writeln!(out, "  {}", champion.name())?;
        } else {
            writeln!(out, "  {} [{}]", champion.name(), flags.join(", "))?;
        }
    }
    Ok(())
}
