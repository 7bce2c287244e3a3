use pulse_feed::frontend::start_all;
use pulse_feed::logging;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init()?;

    info!("Pulsefeed is starting...");
    start_all().await?;

    Ok(())
}
