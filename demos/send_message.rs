use std::io;

use tracing_subscriber::EnvFilter;
use wire2air::{
    AccountProfile, MessageText, MobileNumber, SendMessage, SendOptions, SendTarget,
    Wire2AirClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let number = std::env::var("WIRE2AIR_TEST_NUMBER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "WIRE2AIR_TEST_NUMBER environment variable is required",
        )
    })?;
    let message = std::env::var("WIRE2AIR_MESSAGE")
        .unwrap_or_else(|_| "Hello from the wire2air demo.".to_owned());

    let client = Wire2AirClient::new(AccountProfile::from_env()?);
    let target = SendTarget::single(MobileNumber::new(number)?);
    let request = SendMessage::new(target, MessageText::new(message)?, SendOptions::default());

    let result = client.send_message(request).await?;
    println!("sent: {result:?}");

    Ok(())
}
