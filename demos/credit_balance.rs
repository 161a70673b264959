use tracing_subscriber::EnvFilter;
use wire2air::{AccountProfile, Wire2AirClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = Wire2AirClient::new(AccountProfile::from_env()?);
    let credits = client.credit_balance().await?;
    println!("credits available: {credits}");

    Ok(())
}
