// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Tangle CLI
//!
//! Entry point for the `tangle` binary. Parses CLI arguments, initializes
//! logging, and runs one of:
//!
//! - `keygen`  - generate a sender keypair
//! - `encode`  - print a transaction's canonical bytes as hex
//! - `sign`    - sign and hash an unsigned transaction
//! - `verify`  - check signatures and hashes, exiting non-zero on rejection
//! - `version` - print build version information
//!
//! This binary plays the key-management collaborator: unlike the library,
//! it refuses to sign with a key that does not own the `from` address.

mod cli;
mod logging;

use anyhow::{bail, ensure, Context, Result};
use clap::Parser;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

use tangle_protocol::crypto::TangleKeypair;
use tangle_protocol::transaction::{
    sign_transaction, verify_batch, Address, HashedTransaction, SignedTransaction,
    UnsignedTransaction,
};

use cli::{Commands, EncodeLayer, KeySource, TangleCli};

fn main() -> Result<()> {
    let cli = TangleCli::parse();
    logging::init_logging(&cli.log_level, cli.log_format);

    match cli.command {
        Commands::Keygen(args) => keygen(args),
        Commands::Encode(args) => encode(args),
        Commands::Sign(args) => sign(args),
        Commands::Verify(args) => verify(args),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Generates a keypair, printing the address and either printing or
/// writing the secret key.
fn keygen(args: cli::KeygenArgs) -> Result<()> {
    let keypair = TangleKeypair::generate();
    let address = Address::from(&keypair);

    match args.out {
        Some(path) => {
            std::fs::write(&path, keypair.secret_key_hex())
                .with_context(|| format!("failed to write secret key to {}", path.display()))?;

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600))?;
            }

            tracing::info!(address = %address, key_path = %path.display(), "keypair generated");
            println!("address: {}", address);
        }
        None => {
            println!("address: {}", address);
            println!("secret:  {}", keypair.secret_key_hex());
        }
    }

    Ok(())
}

/// Prints the requested layer's canonical encoding as hex.
fn encode(args: cli::EncodeArgs) -> Result<()> {
    let text = read_input(&args.input)?;
    println!("{}", encode_hex(&text, args.layer)?);
    Ok(())
}

/// Signs and hashes an unsigned transaction, printing the hashed JSON.
fn sign(args: cli::SignArgs) -> Result<()> {
    let keypair = load_keypair(&args.key)?;
    let unsigned: UnsignedTransaction = read_json(&args.input)?;

    let hashed = sign_checked(unsigned, &keypair)?;
    tracing::info!(hash = %hashed.hash(), "transaction signed and hashed");

    println!("{}", serde_json::to_string_pretty(&hashed)?);
    Ok(())
}

/// Verifies every transaction in the input and fails if any is rejected.
fn verify(args: cli::VerifyArgs) -> Result<()> {
    let text = read_input(&args.input)?;
    let txs = parse_transactions(&text)?;

    let results = verify_batch(&txs);
    let mut rejected = 0usize;
    for (tx, result) in txs.iter().zip(&results) {
        match result {
            Ok(()) => println!("ok      {}", tx.hash()),
            Err(e) => {
                rejected += 1;
                tracing::warn!(hash = %tx.hash(), error = %e, "transaction rejected");
                println!("REJECT  {}  {}", tx.hash(), e);
            }
        }
    }

    if rejected > 0 {
        bail!("{} of {} transactions rejected", rejected, txs.len());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = read_input(path)?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse transaction JSON in {}", path.display()))
}

/// Resolves the sender keypair from `--secret-key` or `--key-file`.
fn load_keypair(source: &KeySource) -> Result<TangleKeypair> {
    let hex_key = match (&source.secret_key, &source.key_file) {
        (Some(key), _) => key.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read key file {}", path.display()))?,
        (None, None) => bail!("no secret key given; pass --secret-key or --key-file"),
    };
    TangleKeypair::from_hex(&hex_key).context("failed to load secret key")
}

/// Signs and hashes, refusing keys that do not own the sender address.
fn sign_checked(
    unsigned: UnsignedTransaction,
    keypair: &TangleKeypair,
) -> Result<HashedTransaction> {
    let signer = Address::from(keypair);
    ensure!(
        signer == unsigned.from,
        "secret key belongs to {}, but the transaction is from {}",
        signer,
        unsigned.from
    );
    Ok(sign_transaction(unsigned, keypair).into_hashed())
}

/// Hex of the requested layer's encoding. Extra JSON fields (a signature
/// or hash on a richer record) are ignored by the unsigned layer.
fn encode_hex(text: &str, layer: EncodeLayer) -> Result<String> {
    let bytes = match layer {
        EncodeLayer::Unsigned => {
            let tx: UnsignedTransaction =
                serde_json::from_str(text).context("failed to parse unsigned transaction")?;
            tx.encode()
        }
        EncodeLayer::Signed => {
            let tx: SignedTransaction =
                serde_json::from_str(text).context("failed to parse signed transaction")?;
            tx.encode()
        }
    };
    Ok(hex::encode(bytes))
}

/// Accepts either one hashed transaction or a JSON array of them.
fn parse_transactions(text: &str) -> Result<Vec<HashedTransaction>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Input {
        Many(Vec<HashedTransaction>),
        One(HashedTransaction),
    }

    let input: Input =
        serde_json::from_str(text).context("failed to parse hashed transaction JSON")?;
    Ok(match input {
        Input::Many(txs) => txs,
        Input::One(tx) => vec![tx],
    })
}

/// Prints version information to stdout.
fn print_version() {
    println!("tangle    {}", env!("CARGO_PKG_VERSION"));
    println!("format    {}", tangle_protocol::config::PROTOCOL_VERSION);
    println!(
        "crypto    {} / {}",
        tangle_protocol::config::SIGNING_ALGORITHM,
        tangle_protocol::config::HASH_FUNCTION
    );
}
