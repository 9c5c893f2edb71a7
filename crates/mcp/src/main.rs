#![forbid(unsafe_code)]

mod entry;
mod handlers;
mod seed;
mod server;
mod support;
mod tools;

pub(crate) use server::McpServer;
pub(crate) use support::*;

use pl_storage::SqliteStore;
use std::path::PathBuf;

// Widely deployed protocol baseline; behavior stays forward-compatible.
const MCP_VERSION: &str = "2024-11-05";
const SERVER_NAME: &str = "pairlab-mcp";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_STORAGE_DIR: &str = ".pairlab";

fn main() {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let mut storage_dir = PathBuf::from(DEFAULT_STORAGE_DIR);
    let mut seed_demo = false;

    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "--storage-dir" => {
                index += 1;
                let Some(value) = args.get(index) else {
                    eprintln!("--storage-dir requires a path");
                    std::process::exit(2);
                };
                storage_dir = PathBuf::from(value);
            }
            "--seed-demo" => {
                seed_demo = true;
            }
            other => {
                eprintln!("unknown argument: {other}");
                std::process::exit(2);
            }
        }
        index += 1;
    }

    let mut store = match SqliteStore::open(&storage_dir) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("failed to open storage at {}: {err}", storage_dir.display());
            std::process::exit(1);
        }
    };

    if seed_demo
        && let Err(err) = seed::seed_demo(&mut store)
    {
        eprintln!("failed to seed demo data: {err}");
        std::process::exit(1);
    }

    let mut server = McpServer::new(store);
    if let Err(err) = entry::run_stdio(&mut server) {
        eprintln!("transport error: {err}");
        std::process::exit(1);
    }
}
