use ocean_wind::{NwsClient, WindMap, WindMapError};
use std::env;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), WindMapError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // The NWS wants a contact address in the user agent.
    let client = NwsClient::builder()
        .maybe_user_agent(env::var("NWS_USER_AGENT").ok())
        .request_timeout(Duration::from_secs(10))
        .build()?;
    let wind_map = WindMap::with_provider(client);

    let collection = wind_map
        .ocean_wind()
        .concurrency(4)
        .deadline(Duration::from_secs(60))
        .call()
        .await?;

    println!("{}", collection.to_json()?);
    Ok(())
}
