#![forbid(unsafe_code)]
//! Print the parameters of the selected Bittropolis network

use bittropolis::config::{load_config, DEFAULT_CONFIG_FILE};
use bittropolis::crypto::hash_to_hex;
use bittropolis::params::{init_all, Base58Type};
use bittropolis::registry;
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Use the test network
    #[arg(long)]
    testnet: bool,
    /// Use the regression-test network
    #[arg(long)]
    regtest: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    // Verify every network's constants before anything else runs.
    init_all();

    let config = match load_config(&PathBuf::from(DEFAULT_CONFIG_FILE)) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load {}: {}", DEFAULT_CONFIG_FILE, e);
            return ExitCode::FAILURE;
        }
    };

    let (testnet, regtest) = config.network_flags(cli.testnet, cli.regtest);
    if let Err(e) = registry::select_params_from_flags(testnet, regtest) {
        eprintln!("{} {}", "error:".bright_red().bold(), e);
        return ExitCode::from(2);
    }

    let params = registry::params();
    let genesis = params.genesis_block();

    println!(
        "{}",
        format!("Bittropolis {} network", params.network_id())
            .bright_cyan()
            .bold()
    );
    println!("{}", "----------------------------".bright_cyan());
    println!("  {:<22} {}", "Magic:", hex::encode(params.message_start()));
    println!("  {:<22} {}", "P2P port:", params.default_port());
    println!("  {:<22} {}", "RPC port:", params.rpc_port());
    println!("  {:<22} {:#x}", "PoW limit:", params.pow_limit());
    println!("  {:<22} {}", "Last PoW block:", params.last_pow_block());
    println!(
        "  {:<22} {}",
        "RPC password:",
        if params.require_rpc_password() { "required" } else { "optional" }
    );
    println!(
        "  {:<22} {}",
        "Data directory:",
        params.data_dir_path(&config.storage.data_root).display()
    );
    println!();
    println!("{}", "Genesis".bright_green().underline());
    println!("  {:<22} {}", "Hash:", hash_to_hex(&params.genesis_hash()).bright_white());
    println!("  {:<22} {}", "Merkle root:", hash_to_hex(&genesis.header.merkle_root));
    println!("  {:<22} {}", "Time:", genesis.header.time);
    println!("  {:<22} {:#010x}", "Bits:", genesis.header.bits);
    println!("  {:<22} {}", "Nonce:", genesis.header.nonce);
    println!();
    println!("{}", "Address prefixes".bright_green().underline());
    for (label, kind) in [
        ("Pubkey address:", Base58Type::PubkeyAddress),
        ("Script address:", Base58Type::ScriptAddress),
        ("Secret key:", Base58Type::SecretKey),
        ("Ext public key:", Base58Type::ExtPublicKey),
        ("Ext secret key:", Base58Type::ExtSecretKey),
    ] {
        println!("  {:<22} {}", label, hex::encode(params.base58_prefix(kind)));
    }
    println!();
    println!("{}", "Seeds".bright_green().underline());
    if params.dns_seeds().is_empty() && params.fixed_seeds().is_empty() {
        println!("  {}", "none".italic());
    }
    for seed in params.dns_seeds() {
        println!("  dns   {}", seed.host);
    }
    for addr in params.fixed_seeds() {
        println!("  fixed {}", addr.socket_addr());
    }

    ExitCode::SUCCESS
}
