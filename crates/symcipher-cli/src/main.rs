//! Command-line interface for `symcipher`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use aes_core::{decrypt_block, encrypt_block, expand_key, Aes128Key};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{debug, info, LevelFilter};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use symcipher::{build_cipher, Cipher, CipherKind, KeyGenerator, SuiteConfig};

/// Textbook AES and comparison ciphers.
#[derive(Parser)]
#[command(
    name = "symcipher",
    version,
    author,
    about = "Textbook AES-128 alongside library AES-CTR and a Caesar toy"
)]
struct Cli {
    /// Enable debug logging.
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CipherArg {
    TextbookAes,
    AesCtr,
    Caesar,
}

impl From<CipherArg> for CipherKind {
    fn from(arg: CipherArg) -> Self {
        match arg {
            CipherArg::TextbookAes => CipherKind::TextbookAes,
            CipherArg::AesCtr => CipherKind::AesCtr,
            CipherArg::Caesar => CipherKind::Caesar,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a key for a cipher and print it as hex.
    Keygen {
        /// Cipher the key is for.
        #[arg(long, value_enum, default_value = "textbook-aes")]
        cipher: CipherArg,
        /// Optional RNG seed for reproducible keys.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encrypt a file.
    Enc {
        /// Cipher to use.
        #[arg(long, value_enum, default_value = "textbook-aes")]
        cipher: CipherArg,
        /// Key as hex (32 characters for the AES ciphers, 2 for Caesar).
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext input path.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Ciphertext output path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Decrypt a file.
    Dec {
        /// Cipher to use.
        #[arg(long, value_enum, default_value = "textbook-aes")]
        cipher: CipherArg,
        /// Key as hex (32 characters for the AES ciphers, 2 for Caesar).
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext input path.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Plaintext output path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Check the textbook block cipher against the FIPS-197 known-answer vector.
    Kat,
    /// Round-trip a payload through every cipher with fresh keys.
    Demo {
        /// Message to encrypt.
        #[arg(long, default_value = "journey before destination")]
        payload: String,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

const KAT_KEY: &str = "000102030405060708090a0b0c0d0e0f";
const KAT_PLAIN: &str = "00112233445566778899aabbccddeeff";
const KAT_CIPHER: &str = "69c4e0d86a7b0430d8cdb78070b4c55a";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    match cli.command {
        Commands::Keygen { cipher, seed } => cmd_keygen(cipher.into(), seed),
        Commands::Enc {
            cipher,
            key_hex,
            input,
            output,
        } => cmd_enc(cipher.into(), &key_hex, &input, &output),
        Commands::Dec {
            cipher,
            key_hex,
            input,
            output,
        } => cmd_dec(cipher.into(), &key_hex, &input, &output),
        Commands::Kat => cmd_kat(),
        Commands::Demo { payload, seed } => cmd_demo(&payload, seed),
    }
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default));
    builder.format_timestamp(None);
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn cmd_keygen(kind: CipherKind, seed: Option<u64>) -> Result<()> {
    let mut gen = KeyGenerator::with_config(seeded_rng(seed), SuiteConfig::new(kind));
    let key = gen.generate_key();
    debug!("generated {}-byte key for {kind}", key.len());
    println!("{}", hex::encode(key));
    Ok(())
}

fn cmd_enc(kind: CipherKind, key_hex: &str, input_path: &Path, output_path: &Path) -> Result<()> {
    let cipher = load_cipher(kind, key_hex)?;
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let ciphertext = cipher.encrypt(&data).context("encrypt")?;
    fs::write(output_path, &ciphertext)
        .with_context(|| format!("write {}", output_path.display()))?;
    info!(
        "{kind}: encrypted {} bytes into {} bytes",
        data.len(),
        ciphertext.len()
    );
    Ok(())
}

fn cmd_dec(kind: CipherKind, key_hex: &str, input_path: &Path, output_path: &Path) -> Result<()> {
    let cipher = load_cipher(kind, key_hex)?;
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let plaintext = cipher.decrypt(&data).context("decrypt")?;
    fs::write(output_path, &plaintext)
        .with_context(|| format!("write {}", output_path.display()))?;
    info!(
        "{kind}: decrypted {} bytes into {} bytes",
        data.len(),
        plaintext.len()
    );
    Ok(())
}

fn cmd_kat() -> Result<()> {
    let key = parse_aes_key(KAT_KEY)?;
    let plain = parse_block(KAT_PLAIN)?;
    let expected = parse_block(KAT_CIPHER)?;
    let round_keys = expand_key(&key);

    let actual = encrypt_block(&plain, &round_keys);
    println!("ciphertext: {}", hex::encode(actual));
    if actual != expected {
        bail!("encryption mismatch: expected {KAT_CIPHER}");
    }
    if decrypt_block(&actual, &round_keys) != plain {
        bail!("decryption did not restore the plaintext");
    }
    println!("known-answer test passed");
    Ok(())
}

fn cmd_demo(payload: &str, seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    println!("Original: {payload}");
    for kind in CipherKind::ALL {
        let mut gen = KeyGenerator::with_config(
            ChaCha20Rng::from_seed(derive_seed(&mut rng)),
            SuiteConfig::new(kind),
        );
        let generated = gen.generate_cipher()?;
        let cipher = generated.cipher;

        let ciphertext = cipher.encrypt(payload.as_bytes())?;
        println!("[{kind}] Encrypted: {}", hex::encode(&ciphertext));
        let decrypted = cipher.decrypt(&ciphertext)?;
        let decrypted =
            String::from_utf8(decrypted).with_context(|| format!("{kind} output is not UTF-8"))?;
        println!("[{kind}] Decrypted: {decrypted}");
        if decrypted != payload {
            bail!("{kind} failed round-trip");
        }
        println!("[{kind}] Round-trip OK");
        println!();
    }
    Ok(())
}

fn load_cipher(kind: CipherKind, key_hex: &str) -> Result<Box<dyn Cipher>> {
    let key = hex::decode(key_hex.trim()).context("decode key hex")?;
    build_cipher(kind, &key).with_context(|| format!("build {kind} cipher"))
}

fn parse_aes_key(hex_str: &str) -> Result<Aes128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    Aes128Key::try_from(bytes.as_slice()).context("AES-128 key must be 16 bytes")
}

fn parse_block(hex_str: &str) -> Result<[u8; 16]> {
    let bytes = hex::decode(hex_str).context("decode block hex")?;
    let Ok(block) = <[u8; 16]>::try_from(bytes.as_slice()) else {
        bail!("block must be 16 bytes (32 hex characters)");
    };
    Ok(block)
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}

fn derive_seed(rng: &mut impl RngCore) -> [u8; 32] {
    let mut seed_bytes = [0u8; 32];
    rng.fill_bytes(&mut seed_bytes);
    seed_bytes
}
