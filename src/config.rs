// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Champion Randomizer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Command-line and environment configuration.

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::store::WriteDurability;

pub const APP_DIR_NAME: &str = "champion-randomizer";
pub const LOG_FILE_NAME: &str = "champion-randomizer.log";
const ASSETS_DIR_NAME: &str = "images";

#[derive(Debug, Clone, Parser)]
#[command(
    name = "champion-randomizer",
    version,
    about = "Include, exclude and disable champions, then roll a random pick."
)]
pub struct Cli {
    /// Directory holding the persisted state and the log file.
    #[arg(long, value_name = "DIR", env = "CHAMPION_RANDOMIZER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Load the champion catalog from this JSON file instead of the bundled one.
    #[arg(long, value_name = "FILE", env = "CHAMPION_RANDOMIZER_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Directory champion image paths are resolved against [default: <DATA_DIR>/images].
    #[arg(long, value_name = "DIR", env = "CHAMPION_RANDOMIZER_ASSETS")]
    pub assets: Option<PathBuf>,

    /// Keep state in memory only; nothing is read from or written to disk.
    #[arg(long)]
    pub ephemeral: bool,

    /// Flush every write to stable storage (slower).
    #[arg(long, conflicts_with = "ephemeral")]
    pub durable_writes: bool,

    /// Seed the randomizer for reproducible rolls.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Interactive terminal UI (default).
    Tui,
    /// Roll once from the eligible pool and print the pick.
    Roll,
    /// Print the roster grouped by class.
    List {
        /// Only champions in the pool.
        #[arg(long, conflicts_with = "out")]
        pool: bool,
        /// Only champions taken out of the pool.
        #[arg(long)]
        out: bool,
    },
    /// Clear every flag and the last pick.
    Reset,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no data directory available; pass --data-dir")]
    NoDataDir,
    #[error("cannot resolve relative path {path:?}: {source}")]
    CurrentDir { path: PathBuf, source: io::Error },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    File(WriteDurability),
    Memory,
}

/// Fully resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub catalog: Option<PathBuf>,
    pub assets_dir: PathBuf,
    pub storage: StorageMode,
    pub seed: Option<u64>,
    pub command: Command,
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let default_data_dir = dirs::data_dir().map(|dir| dir.join(APP_DIR_NAME));
        let cwd = std::env::current_dir();
        Self::resolve(cli, default_data_dir, cwd)
    }

    fn resolve(
        cli: Cli,
        default_data_dir: Option<PathBuf>,
        cwd: io::Result<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let data_dir = cli.data_dir.or(default_data_dir).ok_or(ConfigError::NoDataDir)?;
        let data_dir = absolutize(data_dir, &cwd)?;
        let assets_dir = match cli.assets {
            Some(dir) => absolutize(dir, &cwd)?,
            None => data_dir.join(ASSETS_DIR_NAME),
        };

        let storage = if cli.ephemeral {
            StorageMode::Memory
        } else if cli.durable_writes {
            StorageMode::File(WriteDurability::Durable)
        } else {
            StorageMode::File(WriteDurability::BestEffort)
        };

        Ok(Self {
            data_dir,
            catalog: cli.catalog,
            assets_dir,
            storage,
            seed: cli.seed,
            command: cli.command.unwrap_or(Command::Tui),
        })
    }

    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }

    pub fn is_interactive(&self) -> bool {
        self.command == Command::Tui
    }
}

fn absolutize(path: PathBuf, cwd: &io::Result<PathBuf>) -> Result<PathBuf, ConfigError> {
    if path.is_absolute() {
        return Ok(path);
    }
    match cwd {
        Ok(cwd) => Ok(cwd.join(path)),
        Err(err) => Err(ConfigError::CurrentDir {
            path,
            source: io::Error::new(err.kind(), err.to_string()),
        }),
    }
}
