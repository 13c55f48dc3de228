//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `lifemanager_core` wiring end to end: open storage, restore or
//!   create the development session, print the morning briefing.
//!
//! Usage: `lifemanager_cli [config.json]`. Without a config the store is
//! in-memory.

use lifemanager_core::{CoreConfig, LifeManager, DEV_LOGIN_EMAIL};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => CoreConfig::load(path)?,
        None => CoreConfig::default(),
    };

    println!("lifemanager_core ping={}", lifemanager_core::ping());
    println!("lifemanager_core version={}", lifemanager_core::core_version());

    let manager = LifeManager::open(&config)?;
    let identity = manager.ensure_signed_in(DEV_LOGIN_EMAIL).await?;
    let briefing = manager.morning_briefing().await?;

    println!("signed_in={} uid={}", identity.display_name, identity.uid);
    println!(
        "active_tasks={} spent_today={:.2}",
        briefing.active_tasks, briefing.spent_today
    );
    Ok(())
}
