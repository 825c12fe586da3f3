use std::collections::VecDeque;
use std::error::Error as StdError;
use std::io;
use std::sync::{Arc, Mutex};

use tokio::time::Instant;

use super::{BoxFuture, HttpResponse, HttpTransport};

/// Scripted transport: replays queued bodies, then repeats the last one.
#[derive(Debug, Clone)]
pub(super) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug)]
struct FakeTransportState {
    last_url: Option<String>,
    last_params: Vec<(String, String)>,
    calls: Vec<Instant>,
    replies: VecDeque<String>,
    fallback: Option<String>,
    failure: Option<String>,
    hang: bool,
}

impl FakeTransport {
    pub(super) fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_state(replies.into_iter().map(Into::into).collect(), None, false)
    }

    pub(super) fn failing(message: &str) -> Self {
        Self::with_state(VecDeque::new(), Some(message.to_owned()), false)
    }

    /// Accepts requests but never answers them.
    pub(super) fn hanging() -> Self {
        Self::with_state(VecDeque::new(), None, true)
    }

    fn with_state(replies: VecDeque<String>, failure: Option<String>, hang: bool) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                last_url: None,
                last_params: Vec::new(),
                calls: Vec::new(),
                replies,
                fallback: None,
                failure,
                hang,
            })),
        }
    }

    pub(super) fn last_request(&self) -> (Option<String>, Vec<(String, String)>) {
        let state = self.state.lock().unwrap();
        (state.last_url.clone(), state.last_params.clone())
    }

    /// Instants at which requests were issued.
    pub(super) fn calls(&self) -> Vec<Instant> {
        self.state.lock().unwrap().calls.clone()
    }
}

impl HttpTransport for FakeTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let (reply, hang) = {
                let mut state = self.state.lock().unwrap();
                state.last_url = Some(url.to_owned());
                state.last_params = params;
                state.calls.push(Instant::now());
                let reply = match state.failure.clone() {
                    Some(message) => Err(message),
                    None => {
                        if let Some(next) = state.replies.pop_front() {
                            state.fallback = Some(next);
                        }
                        Ok(state.fallback.clone().unwrap_or_default())
                    }
                };
                (reply, state.hang)
            };
            if hang {
                std::future::pending::<()>().await;
            }
            match reply {
                Ok(body) => Ok(HttpResponse { status: 200, body }),
                Err(message) => Err(io::Error::other(message).into()),
            }
        })
    }
}
