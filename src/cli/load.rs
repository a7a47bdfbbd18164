//! Load command: enumerate stickers and print the page data.

use std::time::Instant;

use anyhow::{Context, Result};

use crate::cli::LoadArgs;
use crate::config::StickerConfig;
use crate::logger::emit;
use crate::page::{PageData, StickerLoader};
use crate::{debug, log};

/// Execute load command
pub async fn run_load(args: &LoadArgs, config: &StickerConfig) -> Result<()> {
    if !config.config_path.as_os_str().is_empty() {
        debug!("load"; "config {}", config.config_path.display());
    }
    log!(
        "load";
        "scanning {} for `{}`",
        config.assets.static_dir.display(),
        config.assets.pattern
    );

    let rounds = load_rounds(config, args.repeat).await?;
    let Some(data) = rounds.last() else {
        return Ok(());
    };

    if data.is_empty() {
        log!("load"; "no stickers matched `{}`", config.assets.pattern);
    } else {
        let count = data.len();
        log!("load"; "found {} sticker{}", count, if count == 1 { "" } else { "s" });
        for image in data.images() {
            debug!("load"; "{}", image);
        }
    }

    emit(&render(data, args.pretty)?);
    Ok(())
}

/// Call the loader `repeat` times, returning every round's page data.
async fn load_rounds(config: &StickerConfig, repeat: u32) -> Result<Vec<PageData>> {
    let loader = StickerLoader::from_config(&config.assets)?;
    let mut rounds: Vec<PageData> = Vec::with_capacity(repeat as usize);

    for round in 1..=repeat {
        let cached = loader.is_populated();
        let start = Instant::now();
        let page = loader
            .load()
            .await
            .with_context(|| format!("failed to load stickers (round {round})"))?;
        debug!(
            "load";
            "round {} took {:?} ({})",
            round,
            start.elapsed(),
            if cached { "cached" } else { "enumerated" }
        );
        if let Some(first) = rounds.first()
            && !page.shares_list_with(first)
        {
            debug!("load"; "round {} returned a fresh list", round);
        }
        rounds.push(page);
    }

    Ok(rounds)
}

/// Render page data as JSON.
fn render(data: &PageData, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(data)?
    } else {
        serde_json::to_string(data)?
    };
    Ok(json)
}
