use std::future::Future;
use std::pin::pin;

use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use super::{DaisySmsClient, DaisySmsError};
use crate::domain::{RentalId, RentalStatus, SmsCode};

impl DaisySmsClient {
    /// Poll `getStatus` until the SMS code arrives.
    ///
    /// The first poll happens one [poll interval](DaisySmsClient::poll_interval)
    /// after the call, then once per interval. The loop ends when:
    /// - a code arrives (`Ok`),
    /// - the service reports the rental as canceled or unknown
    ///   ([`ServiceError::RentalCanceled`], [`ServiceError::InvalidRentalId`]),
    /// - the service replies with anything else unexpected, or the request fails,
    /// - `cancel` completes, which yields [`DaisySmsError::Aborted`]. An in-flight
    ///   status request is dropped and no further request is made.
    ///
    /// There is no overall deadline; pass e.g. `tokio::time::sleep(..)` as `cancel`
    /// to bound the wait.
    ///
    /// ```rust,no_run
    /// # async fn run(client: daisysms::DaisySmsClient, id: daisysms::RentalId) {
    /// let (tx, rx) = tokio::sync::oneshot::channel::<()>();
    /// let code = client.wait_for_code(&id, async { let _ = rx.await; }).await;
    /// # drop(tx);
    /// # let _ = code;
    /// # }
    /// ```
    ///
    /// [`ServiceError::RentalCanceled`]: crate::ServiceError::RentalCanceled
    /// [`ServiceError::InvalidRentalId`]: crate::ServiceError::InvalidRentalId
    pub async fn wait_for_code<C>(&self, id: &RentalId, cancel: C) -> Result<SmsCode, DaisySmsError>
    where
        C: Future<Output = ()>,
    {
        let mut cancel = pin!(cancel);
        let mut ticker = time::interval_at(Instant::now() + self.poll_interval, self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut polls: u32 = 0;

        loop {
            // Cancellation wins over a tick that is ready at the same time.
            tokio::select! {
                biased;
                () = &mut cancel => return Err(aborted(id, polls)),
                _ = ticker.tick() => {}
            }

            polls += 1;
            debug!(rental_id = %id, poll = polls, "polling rental status");
            let status = tokio::select! {
                biased;
                () = &mut cancel => return Err(aborted(id, polls)),
                status = self.status(id) => status,
            };

            match status {
                Ok(RentalStatus::WaitingForCode) => continue,
                Ok(RentalStatus::CodeReceived(code)) => {
                    info!(rental_id = %id, polls, "sms code received");
                    return Ok(code);
                }
                Err(err) => {
                    info!(rental_id = %id, polls, error = %err, "stopped waiting for sms code");
                    return Err(err);
                }
            }
        }
    }
}

fn aborted(id: &RentalId, polls: u32) -> DaisySmsError {
    info!(rental_id = %id, polls, "wait for sms code aborted by caller");
    DaisySmsError::Aborted
}
