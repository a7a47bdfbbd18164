//! Wait command: exercise the delay primitive.

use std::time::Instant;

use anyhow::Result;

use crate::delay::wait_ms;
use crate::log;

/// Execute wait command
pub async fn run_wait(ms: u64) -> Result<()> {
    let start = Instant::now();
    wait_ms(ms).await;
    log!("wait"; "waited {}ms (elapsed {:?})", ms, start.elapsed());
    Ok(())
}
