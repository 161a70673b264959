use std::io;

use tracing_subscriber::EnvFilter;
use wire2air::{
    AccountProfile, DeleteService, HelpMessage, Keyword, KeywordRegistration, ProcessorUrl,
    ServiceName, StopMessage, Wire2AirClient,
};

/// Checks, registers and then deletes a keyword on the profile's short code.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let keyword = std::env::var("WIRE2AIR_KEYWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "WIRE2AIR_KEYWORD environment variable is required",
        )
    })?;
    let processor_url = std::env::var("WIRE2AIR_PROCESSOR_URL")
        .unwrap_or_else(|_| "http://example.com/processor".to_owned());

    let client = Wire2AirClient::new(AccountProfile::from_env()?);
    let keyword = Keyword::new(keyword)?;

    if !client.is_keyword_available(&keyword).await? {
        println!("keyword {:?} is not available", keyword.as_str());
        return Ok(());
    }

    let registration = KeywordRegistration {
        service_name: ServiceName::new("Demo service")?,
        keyword: keyword.clone(),
        processor_url: ProcessorUrl::new(processor_url)?,
        help_message: HelpMessage::new("Reply STOP to opt out.")?,
        stop_message: StopMessage::new("You have been unsubscribed.")?,
        short_code: None,
    };
    let service_id = client.register_keyword(&registration).await?;
    println!("registered service {service_id}");

    let request = DeleteService::new(client.profile().short_code().clone(), service_id, keyword);
    client.delete_service(&request).await?;
    println!("deleted service {service_id}");

    Ok(())
}
