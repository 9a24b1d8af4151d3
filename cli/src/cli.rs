//! # CLI Interface
//!
//! Defines the command-line argument structure for `tangle` using `clap`
//! derive.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::logging::LogFormat;

/// Encode, sign and verify tangle transactions.
///
/// Transactions are read and written as JSON with hex-encoded addresses,
/// digests and signatures.
#[derive(Parser, Debug)]
#[command(
    name = "tangle",
    about = "Encode, sign and verify tangle transactions",
    version,
    propagate_version = true
)]
pub struct TangleCli {
    /// Log output format. Logs go to stderr.
    #[arg(
        long,
        global = true,
        env = "TANGLE_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Pretty
    )]
    pub log_format: LogFormat,

    /// Default log filter, overridden by `RUST_LOG` when set.
    #[arg(long, global = true, default_value = "tangle_cli=info,tangle_protocol=info")]
    pub log_level: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a fresh keypair and print its address.
    Keygen(KeygenArgs),
    /// Print the canonical byte encoding of a transaction as hex.
    Encode(EncodeArgs),
    /// Sign and hash an unsigned transaction, printing the result as JSON.
    Sign(SignArgs),
    /// Verify the signature and hash of one or more hashed transactions.
    Verify(VerifyArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for the `keygen` subcommand.
#[derive(Args, Debug)]
pub struct KeygenArgs {
    /// Write the hex secret key to this file instead of printing it.
    ///
    /// On Unix the file is created with mode 0600.
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,
}

/// Arguments for the `encode` subcommand.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Path to a JSON transaction (unsigned, signed or hashed).
    pub input: PathBuf,

    /// Which layer's encoding to print.
    #[arg(long, value_enum, default_value_t = EncodeLayer::Unsigned)]
    pub layer: EncodeLayer,
}

/// Which encoding `encode` prints.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeLayer {
    /// `from || to || amount || nonce || parents`, the signed message.
    Unsigned,
    /// The unsigned encoding followed by the signature, the hashed message.
    Signed,
}

/// Sender key source shared by commands that sign.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct KeySource {
    /// Hex-encoded Ed25519 secret key.
    ///
    /// **Never pass this flag on a shared machine.** Prefer `--key-file`.
    #[arg(long, env = "TANGLE_SECRET_KEY", hide_env_values = true)]
    pub secret_key: Option<String>,

    /// File containing the hex-encoded secret key, as written by `keygen --out`.
    #[arg(long)]
    pub key_file: Option<PathBuf>,
}

/// Arguments for the `sign` subcommand.
#[derive(Args, Debug)]
pub struct SignArgs {
    /// Path to an unsigned transaction JSON file.
    pub input: PathBuf,

    #[command(flatten)]
    pub key: KeySource,
}

/// Arguments for the `verify` subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Path to a hashed transaction JSON file, or a JSON array of them.
    pub input: PathBuf,
}
