use anyhow::{Context, Result};
use mifospay_core::CoreConfig;

fn main() -> Result<()> {
    mifospay_core::init_logging();
    let config = CoreConfig::load().context("Failed to load configuration")?;
    let redacted = config.redacted();

    println!("Mifos Pay Wallet Core Configuration:\n");
    println!("  Base URL: {}", redacted.base_url);
    println!("  Tenant: {}", redacted.tenant);
    println!("  Request timeout: {}s", redacted.request_timeout_secs);
    match redacted.refresh_interval() {
        Some(period) => println!("  Refresh interval: {}s", period.as_secs()),
        None => println!("  Refresh interval: (single fetch)"),
    }
    println!("  Storage dir: {}", redacted.resolved_storage_dir().display());
    println!(
        "  Session storage: {}",
        if redacted.storage_passphrase.is_some() { "encrypted file" } else { "memory only" }
    );
    Ok(())
}
