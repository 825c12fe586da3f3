use std::io;
use std::time::Duration;

use daisysms::{ApiKey, DaisySmsClient, DaisySmsError, MaxPrice, RequestContext, Service};
use tracing_subscriber::EnvFilter;

async fn rent_and_wait(
    ctx: &RequestContext,
    service: Service,
    max_price: Option<MaxPrice>,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = ctx.client().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "no DaisySMS client attached")
    })?;

    let rental = client.acquire_number(&service, max_price).await?;
    println!("rented {} (id {})", rental.phone_number, rental.id);

    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            eprintln!("cannot listen for Ctrl-C, waiting without it: {err}");
            std::future::pending::<()>().await;
        }
    };
    match client.wait_for_code(&rental.id, ctrl_c).await {
        Ok(code) => {
            println!("code: {code}");
            client.mark_done(&rental.id).await?;
        }
        Err(DaisySmsError::Aborted) => {
            println!("aborted, cancelling rental");
            client.cancel_rental(&rental.id).await?;
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("DAISYSMS_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "DAISYSMS_API_KEY environment variable is required",
        )
    })?;
    let service = std::env::var("DAISYSMS_SERVICE").unwrap_or_else(|_| "ds".to_owned());
    let max_price = std::env::var("DAISYSMS_MAX_PRICE")
        .ok()
        .map(|raw| raw.parse::<f64>())
        .transpose()?
        .map(MaxPrice::new)
        .transpose()?;

    let client = DaisySmsClient::builder(ApiKey::new(api_key)?)
        .poll_interval(Duration::from_secs(3))
        .timeout(Duration::from_secs(15))
        .build()?;
    let ctx = RequestContext::new().with_client(client);

    rent_and_wait(&ctx, Service::new(service)?, max_price).await?;
    Ok(())
}
