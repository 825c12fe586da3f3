use std::io;

use daisysms::{ApiKey, DaisySmsClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("DAISYSMS_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "DAISYSMS_API_KEY environment variable is required",
        )
    })?;

    let client = DaisySmsClient::new(ApiKey::new(api_key)?);
    let balance = client.balance().await?;
    println!("balance: {balance}");

    Ok(())
}
