use healthcheck::health_check::{check, TARGET_URL};
use healthcheck::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("healthcheck".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    check(TARGET_URL).await?;
    tracing::info!("{} responded with 200 OK", TARGET_URL);

    Ok(())
}
