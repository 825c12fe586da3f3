//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{
    ApiKey, Balance, MaxPrice, Rental, RentalId, RentalStatus, Service, ServiceError,
    StatusChange, ValidationError,
};

#[cfg(test)]
mod fake;
mod wait;

const DEFAULT_ENDPOINT: &str = "https://daisysms.com/stubs/handler_api.php";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let url = url::Url::parse_with_params(url, &params)?;
            // The query string carries the api key; keep it out of error text.
            let response = self
                .client
                .get(url)
                .timeout(self.timeout)
                .send()
                .await
                .map_err(reqwest::Error::without_url)?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(reqwest::Error::without_url)?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`DaisySmsClient`].
///
/// Network problems, service replies, and caller cancellation are kept apart so
/// callers can react to each differently.
pub enum DaisySmsError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, body read).
    ///
    /// The underlying error (usually [`reqwest::Error`]) is the `source`.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// DaisySMS replied with a failure token or an unusable body.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The caller's cancellation signal fired while waiting for a code.
    #[error("wait for sms code aborted")]
    Aborted,

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl DaisySmsError {
    /// The service error, if this failure came from a DaisySMS reply.
    pub fn service(&self) -> Option<&ServiceError> {
        match self {
            Self::Service(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`DaisySmsClient`].
///
/// Use this when you need to customize the endpoint, timeouts, or user-agent.
pub struct DaisySmsClientBuilder {
    api_key: ApiKey,
    endpoint: String,
    timeout: Duration,
    poll_interval: Duration,
    user_agent: Option<String>,
}

impl DaisySmsClientBuilder {
    /// Create a builder with the default endpoint, a 30 second request timeout and a
    /// 3 second poll interval.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            user_agent: None,
        }
    }

    /// Override the DaisySMS handler URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the timeout applied to each HTTP request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the interval between status polls in [`DaisySmsClient::wait_for_code`].
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`DaisySmsClient`].
    pub fn build(self) -> Result<DaisySmsClient, DaisySmsError> {
        if self.poll_interval.is_zero() {
            return Err(ValidationError::ZeroDuration {
                field: "poll_interval",
            }
            .into());
        }

        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| DaisySmsError::Transport(Box::new(err)))?;

        Ok(DaisySmsClient {
            api_key: self.api_key,
            endpoint: self.endpoint,
            poll_interval: self.poll_interval,
            http: Arc::new(ReqwestTransport {
                client,
                timeout: self.timeout,
            }),
        })
    }
}

#[derive(Clone)]
/// High-level DaisySMS client.
///
/// Holds the API key and a shared HTTP handle; it has no other state, so clones
/// are cheap and calls may run concurrently. Every call asks the service for the
/// current truth about a rental, nothing is cached locally.
pub struct DaisySmsClient {
    api_key: ApiKey,
    endpoint: String,
    poll_interval: Duration,
    http: Arc<dyn HttpTransport>,
}

impl DaisySmsClient {
    /// Create a client using the default settings.
    ///
    /// For more customization, use [`DaisySmsClient::builder`].
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
                timeout: DEFAULT_TIMEOUT,
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> DaisySmsClientBuilder {
        DaisySmsClientBuilder::new(api_key)
    }

    /// The handler URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The interval used by [`DaisySmsClient::wait_for_code`].
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Fetch the account balance (`action=getBalance`).
    pub async fn balance(&self) -> Result<Balance, DaisySmsError> {
        let body = self
            .request(crate::transport::encode_get_balance_query())
            .await?;
        crate::transport::decode_balance_response(&body).map_err(log_service_error)
    }

    /// Rent a number for `service` (`action=getNumber`).
    ///
    /// `max_price` caps what the rental may cost; it is sent with two decimal digits.
    ///
    /// Errors:
    /// - [`ServiceError::NoNumbersAvailable`], [`ServiceError::InsufficientBalance`],
    ///   [`ServiceError::MaxPriceExceeded`], [`ServiceError::TooManyActiveRentals`]
    ///   wrapped in [`DaisySmsError::Service`],
    /// - [`ServiceError::UnknownServiceResponse`] for any other token.
    pub async fn acquire_number(
        &self,
        service: &Service,
        max_price: Option<MaxPrice>,
    ) -> Result<Rental, DaisySmsError> {
        let body = self
            .request(crate::transport::encode_get_number_query(service, max_price))
            .await?;
        let rental = crate::transport::decode_get_number_response(service, &body)
            .map_err(log_service_error)?;
        debug!(rental_id = %rental.id, service = service.as_str(), "number acquired");
        Ok(rental)
    }

    /// Ask once for the rental status (`action=getStatus`).
    ///
    /// Errors with [`ServiceError::InvalidRentalId`] or [`ServiceError::RentalCanceled`]
    /// when the rental is gone.
    pub async fn status(&self, id: &RentalId) -> Result<RentalStatus, DaisySmsError> {
        let body = self
            .request(crate::transport::encode_get_status_query(id))
            .await?;
        crate::transport::decode_get_status_response(&body).map_err(log_service_error)
    }

    /// Mark the rental as finished (`action=setStatus&status=6`).
    pub async fn mark_done(&self, id: &RentalId) -> Result<(), DaisySmsError> {
        self.set_status(id, StatusChange::Done).await
    }

    /// Cancel the rental (`action=setStatus&status=8`).
    pub async fn cancel_rental(&self, id: &RentalId) -> Result<(), DaisySmsError> {
        self.set_status(id, StatusChange::Cancel).await
    }

    async fn set_status(&self, id: &RentalId, change: StatusChange) -> Result<(), DaisySmsError> {
        let body = self
            .request(crate::transport::encode_set_status_query(id, change))
            .await?;
        crate::transport::decode_set_status_response(change, &body).map_err(log_service_error)
    }

    async fn request(&self, query: Vec<(String, String)>) -> Result<String, DaisySmsError> {
        let action = query
            .iter()
            .find(|(key, _)| key == crate::transport::ACTION_FIELD)
            .map(|(_, value)| value.clone())
            .unwrap_or_default();

        let mut params = Vec::with_capacity(query.len() + 1);
        params.push((ApiKey::FIELD.to_owned(), self.api_key.as_str().to_owned()));
        params.extend(query);

        let response = self
            .http
            .get(&self.endpoint, params)
            .await
            .map_err(|err| {
                warn!(%action, error = %err, "daisysms request failed");
                DaisySmsError::Transport(err)
            })?;
        debug!(%action, status = response.status, body = %response.body, "daisysms reply");
        Ok(response.body)
    }
}

fn log_service_error(err: ServiceError) -> DaisySmsError {
    if let Some(body) = err.raw_body() {
        warn!(body, "unexpected daisysms reply");
    }
    err.into()
}
