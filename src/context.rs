//! Request-scoped carrier for a configured client.
//!
//! Code deep in an application can take a [`RequestContext`] instead of threading a
//! [`DaisySmsClient`] through every call. Nothing is stored globally: a context
//! holds whatever was attached to it, and attaching returns a new value.

use crate::client::DaisySmsClient;

#[derive(Clone, Default)]
pub struct RequestContext {
    daisysms: Option<DaisySmsClient>,
}

impl RequestContext {
    /// An empty context with no client attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a context carrying `client`, replacing any previously attached one.
    pub fn with_client(self, client: DaisySmsClient) -> Self {
        Self {
            daisysms: Some(client),
        }
    }

    /// The attached client, or `None` if nothing was attached.
    pub fn client(&self) -> Option<&DaisySmsClient> {
        self.daisysms.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ApiKey;

    #[test]
    fn empty_context_has_no_client() {
        assert!(RequestContext::new().client().is_none());
    }

    #[test]
    fn attached_client_is_retrievable() {
        let client = DaisySmsClient::builder(ApiKey::new("key").unwrap())
            .endpoint("https://example.invalid/a")
            .build()
            .unwrap();
        let base = RequestContext::new();
        let ctx = base.clone().with_client(client);

        assert!(base.client().is_none());
        assert_eq!(
            ctx.client().map(DaisySmsClient::endpoint),
            Some("https://example.invalid/a")
        );
    }

    #[test]
    fn later_attachment_replaces_earlier() {
        let first = DaisySmsClient::builder(ApiKey::new("key").unwrap())
            .endpoint("https://example.invalid/first")
            .build()
            .unwrap();
        let second = DaisySmsClient::builder(ApiKey::new("key").unwrap())
            .endpoint("https://example.invalid/second")
            .build()
            .unwrap();

        let ctx = RequestContext::new().with_client(first).with_client(second);
        assert_eq!(
            ctx.client().map(DaisySmsClient::endpoint),
            Some("https://example.invalid/second")
        );
    }
}
