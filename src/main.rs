/*
 * Responsibility
 * - tokio runtime startup
 * - calls app::run() (no logic here)
 */
use anyhow::Result;

use event_booking::app;

#[tokio::main]
async fn main() -> Result<()> {
    app::run().await
}
