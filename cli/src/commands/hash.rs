//! Hash command: file hashing with automatic parallelization via Rayon.

use anyhow::{Context, Result};
use blake3::Hasher;
use clap::Args;
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::Mutex;

/// Keying options shared between the default hash command and `check`.
#[derive(Args, Clone, Default)]
pub struct KeyArgs {
    /// 64 hex-character (32-byte) key for keyed hashing (MAC mode)
    #[arg(long, value_name = "HEX", conflicts_with = "context")]
    key: Option<String>,

    /// Context string for key derivation mode
    #[arg(long, value_name = "STRING", conflicts_with = "key")]
    context: Option<String>,
}

impl KeyArgs {
    /// Build a `Hasher` in the mode these arguments select: keyed, derive-key, or plain.
    pub fn build_hasher(&self) -> Result<Hasher> {
        if let Some(hex_key) = &self.key {
            let bytes = hex::decode(hex_key).context("--key must be valid hex")?;
            Hasher::new_keyed(&bytes).map_err(|e| anyhow::anyhow!("{e}"))
        } else if let Some(context) = &self.context {
            Ok(Hasher::new_derive_key(context))
        } else {
            Ok(Hasher::new())
        }
    }
}

/// Hash files (Rayon parallelizes across files automatically).
pub fn hash_files(files: &[PathBuf], key_args: &KeyArgs, length: usize) -> Result<()> {
    let results = Mutex::new(Vec::with_capacity(files.len()));
    let errors = Mutex::new(Vec::new());

    files.par_iter().for_each(|file_path| {
        let result = (|| -> Result<String> {
            let mut file = std::fs::File::open(file_path)
                .with_context(|| format!("Failed to open: {}", file_path.display()))?;

            let mut hasher = key_args.build_hasher()?;
            let mut buffer = [0u8; 128 * 1024];

            loop {
                let n = std::io::Read::read(&mut file, &mut buffer)?;
                if n == 0 {
                    break;
                }
                hasher.update(&buffer[..n]);
            }

            let mut output = vec![0u8; length];
            hasher.finalize().fill(&mut output);
            Ok(hex::encode(output))
        })();

        match result {
            Ok(hex_hash) => {
                results.lock().unwrap().push((file_path.clone(), hex_hash));
            }
            Err(e) => {
                errors.lock().unwrap().push((file_path.clone(), e));
            }
        }
    });

    let mut results = results.into_inner().unwrap();
    results.sort_by_key(|(path, _)| files.iter().position(|p| p == path).unwrap_or(usize::MAX));

    for (file_path, hex_hash) in results {
        println!("{}  {}", hex_hash, file_path.display());
    }

    let errors = errors.into_inner().unwrap();
    for (file_path, error) in &errors {
        tracing::error!(file = %file_path.display(), %error, "failed to hash file");
    }

    if !errors.is_empty() {
        anyhow::bail!("Failed to hash {} file(s)", errors.len());
    }

    Ok(())
}
