use std::time::Duration;

use chrono::Utc;
use tokio::time::{interval, Instant, MissedTickBehavior};

use mount_control::{Config, Mount, TracingSink};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt::init();

    let config: Config = confy::load_path("config.toml")?;
    let mut mount = Mount::new(&config, TracingSink)?;

    if let Some(target) = config.mount.target {
        mount.goto(target)?;
    }

    let mut ticker = interval(Duration::from_millis(config.polling.interval_millis));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // Integrate over measured elapsed time rather than assuming the poll
    // period was hit exactly.
    let mut last_poll = Instant::now();
    loop {
        ticker.tick().await;
        let now = Instant::now();
        mount.poll(now - last_poll, Utc::now());
        last_poll = now;
    }
}
