// src/bin/ingest_batch.rs
//! Batch ingest — sweep *.txt batch files and register every card

use anyhow::{Context, Result};
use card_vault::aliases::VaultPassphrase;
use card_vault::consts::{FAST_KDF_ITERATIONS, PAN_KDF_ITERATIONS};
use card_vault::{open_card_db, CancelFlag, CardCodec};
use rpassword::read_password;
use serde_json::json;
use std::io::Write;
use std::path::PathBuf;
use tracing::{error, info};
use walkdir::WalkDir;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    info!("Card Vault — Batch Ingest");

    let mut json_report: Option<PathBuf> = None;
    let mut roots: Vec<PathBuf> = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--json" {
            let path = args.next().context("--json needs a file path")?;
            json_report = Some(PathBuf::from(path));
        } else {
            roots.push(PathBuf::from(arg));
        }
    }
    if roots.is_empty() {
        roots.push(PathBuf::from("."));
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for root in &roots {
        if root.is_file() {
            files.push(root.clone());
            continue;
        }
        for entry in WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.path()
                    .extension()
                    .and_then(|s| s.to_str())
                    .map(|ext| ext.eq_ignore_ascii_case("txt"))
                    .unwrap_or(false)
            })
        {
            files.push(entry.path().to_owned());
        }
    }

    info!("Found {} batch file(s)", files.len());

    let codec = resolve_codec()?;
    let conn = open_card_db().context("Failed to open card store — is CARD_VAULT_DB_KEY set?")?;

    let mut registered = 0;
    let mut duplicates = 0;
    let mut skipped = 0;
    let mut failed_files = 0;
    let mut file_reports = Vec::new();

    for file in &files {
        match card_vault::process_file(&conn, &codec, file, &CancelFlag::new()) {
            Ok(report) => {
                registered += report.registered;
                duplicates += report.duplicates;
                skipped += report.skipped;
                println!(
                    "{} → {} registered, {} duplicate(s), {} skipped line(s)",
                    file.display(),
                    report.registered,
                    report.duplicates,
                    report.skipped
                );
                file_reports.push(json!({
                    "file": file.display().to_string(),
                    "report": report,
                }));
            }
            Err(err) => {
                failed_files += 1;
                error!("FAILED {} — {err}", file.display());
            }
        }
    }

    println!("\n=== BATCH COMPLETE ===");
    println!("Registered: {registered}");
    println!("Duplicates: {duplicates}");
    println!("Skipped lines: {skipped}");
    println!("Failed files: {failed_files}");

    if let Some(path) = json_report {
        let export = json!({
            "report_format": "card-vault-ingest-v1",
            "generated_at": chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            "tool_version": env!("CARGO_PKG_VERSION"),
            "total_files": files.len(),
            "files": file_reports,
        });
        std::fs::write(&path, serde_json::to_string_pretty(&export)?)?;
        println!("Report written → {}", path.display());
    }

    Ok(())
}

/// Dev mode takes the configured passphrase; production wants
/// CARD_VAULT_PASSPHRASE and falls back to an interactive prompt.
fn resolve_codec() -> Result<CardCodec> {
    let config = card_vault::load_config();

    if config.features.use_dev_keys {
        return Ok(CardCodec::from_config());
    }

    let passphrase = match std::env::var("CARD_VAULT_PASSPHRASE") {
        Ok(value) => value,
        Err(_) => {
            print!("Vault passphrase: ");
            std::io::stdout().flush()?;
            read_password()?
        }
    };

    let iterations = if config.features.skip_kdf_slowdown {
        FAST_KDF_ITERATIONS
    } else {
        PAN_KDF_ITERATIONS
    };

    Ok(CardCodec::with_kdf_iterations(
        VaultPassphrase::new(passphrase),
        iterations,
    ))
}
