//! Command-line interface for `rijndael-core`.

#![forbid(unsafe_code)]

mod prompt;

use std::io;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rijndael_core::{
    expand_key, Aes128Key, Engine, EngineConfig, KeyProvider, PaddingScheme, ROUND_KEYS,
};

use crate::prompt::{prompt_line, PromptKeyProvider};

/// AES-128 encryption CLI.
#[derive(Parser)]
#[command(name = "rijndael", version, author, about = "From-scratch AES-128 encryption")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a message and print the ciphertext as hex.
    Enc {
        /// Message to encrypt; prompted for when omitted.
        #[arg(short, long, value_name = "TEXT")]
        msg: Option<String>,
        #[command(flatten)]
        key: KeyArgs,
        /// Padding applied before splitting into blocks.
        #[arg(long, value_enum, default_value_t = PaddingArg::Pkcs7)]
        padding: PaddingArg,
        /// Encrypt blocks on the current thread only.
        #[arg(long, default_value_t = false)]
        sequential: bool,
    },
    /// Print the expanded key schedule, one round key per line.
    Schedule {
        #[command(flatten)]
        key: KeyArgs,
    },
}

#[derive(Args)]
struct KeyArgs {
    /// Key as 16 characters; prompted for when no key is given.
    #[arg(long, value_name = "TEXT", conflicts_with = "key_hex")]
    key: Option<String>,
    /// Key as 32 hex characters.
    #[arg(long, value_name = "HEX")]
    key_hex: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaddingArg {
    /// PKCS#7 (always pads).
    Pkcs7,
    /// ANSI X.923 (aligned input is not padded).
    AnsiX923,
}

impl From<PaddingArg> for PaddingScheme {
    fn from(value: PaddingArg) -> Self {
        match value {
            PaddingArg::Pkcs7 => PaddingScheme::Pkcs7,
            PaddingArg::AnsiX923 => PaddingScheme::AnsiX923,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Enc {
            msg,
            key,
            padding,
            sequential,
        } => cmd_enc(msg, &key, padding, sequential),
        Commands::Schedule { key } => cmd_schedule(&key),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn cmd_enc(
    msg: Option<String>,
    key_args: &KeyArgs,
    padding: PaddingArg,
    sequential: bool,
) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let msg = match msg {
        Some(msg) => msg,
        None => prompt_line(&mut stdin.lock(), &mut stdout, "Message to encrypt: ")
            .context("read message")?,
    };
    let key = key_bytes(key_args)?;

    let engine = Engine::with_config(EngineConfig {
        padding: padding.into(),
        parallel: !sequential,
    })
    .with_observer(|key: &Aes128Key| println!("Key:         {}", key.to_hex()));

    let mut provider = PromptKeyProvider::new(stdin.lock(), io::stdout());
    let cipher = engine
        .encrypt_with(&msg, key.as_deref(), &mut provider)
        .context("encrypt message")?;
    println!("Cipher text: {cipher}");
    Ok(())
}

fn cmd_schedule(key_args: &KeyArgs) -> Result<()> {
    let key = match key_bytes(key_args)? {
        Some(bytes) => Aes128Key::try_from(bytes.as_slice())?,
        None => PromptKeyProvider::new(io::stdin().lock(), io::stdout()).provide_key()?,
    };
    let schedule = expand_key(&key);
    for round in 0..ROUND_KEYS {
        let words = schedule.round_key(round);
        println!(
            "round {round:>2}: {:08x} {:08x} {:08x} {:08x}",
            words[0], words[1], words[2], words[3]
        );
    }
    Ok(())
}

fn key_bytes(args: &KeyArgs) -> Result<Option<Vec<u8>>> {
    match (&args.key, &args.key_hex) {
        (Some(text), _) => Ok(Some(text.as_bytes().to_vec())),
        (None, Some(hex_str)) => {
            let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
            if bytes.len() != 16 {
                bail!("AES-128 key must be 16 bytes (32 hex characters)");
            }
            Ok(Some(bytes))
        }
        (None, None) => Ok(None),
    }
}
