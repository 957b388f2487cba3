//! Check command: verify checksums from a file (like sha256sum -c).

use super::hash::KeyArgs;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

/// Verify checksums from a checksum file.
pub fn check_mode(checksum_file: &PathBuf, key_args: &KeyArgs) -> Result<()> {
    let file = File::open(checksum_file)
        .with_context(|| format!("Failed to open: {}", checksum_file.display()))?;

    let reader = BufReader::new(file);
    let mut total = 0;
    let mut failed = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Format: "hash  filename" (two spaces)
        let parts: Vec<&str> = line.splitn(2, "  ").collect();
        if parts.len() != 2 {
            tracing::warn!(%line, "invalid checksum line format");
            continue;
        }

        let expected_hash = parts[0].trim();
        let file_path = parts[1].trim();
        total += 1;

        match std::fs::File::open(file_path) {
            Ok(mut file) => {
                let mut hasher = key_args.build_hasher()?;
                let mut buffer = [0u8; 128 * 1024];
                let mut error = None;

                loop {
                    match std::io::Read::read(&mut file, &mut buffer) {
                        Ok(0) => break,
                        Ok(n) => hasher.update(&buffer[..n]),
                        Err(e) => {
                            error = Some(e);
                            break;
                        }
                    }
                }

                if let Some(e) = error {
                    println!("{file_path}: FAILED (Read Error: {e})");
                    failed += 1;
                    continue;
                }

                let actual_hash = hex::encode(hasher.finalize().read32());

                if actual_hash == expected_hash {
                    println!("{file_path}: OK");
                } else {
                    println!("{file_path}: FAILED");
                    failed += 1;
                }
            }
            Err(e) => {
                println!("{file_path}: FAILED ({e})");
                failed += 1;
            }
        }
    }

    println!();
    if failed == 0 {
        println!("All {total} checksums verified");
    } else {
        eprintln!("WARNING: {failed} of {total} checksums did NOT match");
        std::process::exit(1);
    }

    Ok(())
}
