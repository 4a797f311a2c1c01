use crate::subscription::{SubscriptionId, SubscriptionSource};
use futures::stream::BoxStream;
use futures::StreamExt;
use std::time::{Duration, Instant};

/// A repeating timer that fires at a fixed interval.
///
/// Each tick emits the current [`Instant`]. The `id` field lets multiple
/// `Every` subscriptions coexist with distinct identities — the keycode
/// widget uses one per input field for its focus-retry loop.
///
/// Note that tokio's interval yields its first tick immediately, so the
/// first message arrives as soon as the subscription starts.
///
/// # Example
///
/// ```rust,ignore
/// use std::time::Duration;
/// use keycode_core::subscriptions::Every;
/// use keycode_core::subscription::subscribe;
///
/// let sub = subscribe(Every::new(Duration::from_millis(100), "pin-focus"))
///     .map(|_instant| Msg::FocusTick);
/// ```
pub struct Every {
    /// The interval between ticks.
    pub interval: Duration,
    /// A string identifier used to distinguish this timer from others.
    pub id: &'static str,
}

impl Every {
    /// Create a new repeating timer with the given interval and identifier.
    pub fn new(interval: Duration, id: &'static str) -> Self {
        Self { interval, id }
    }
}

impl SubscriptionSource for Every {
    type Output = Instant;

    fn id(&self) -> SubscriptionId {
        SubscriptionId::with_str::<Self>(self.id)
    }

    fn stream(self) -> BoxStream<'static, Instant> {
        let stream =
            tokio_stream::wrappers::IntervalStream::new(tokio::time::interval(self.interval))
                .map(|tick| tick.into_std());
        Box::pin(stream)
    }
}
