use futures::stream::BoxStream;
use futures::StreamExt;
use std::any::TypeId;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// A long-lived event source managed by the runtime.
///
/// Subscriptions are declared in
/// [`Model::subscriptions`](crate::Model::subscriptions) and started or
/// stopped through diffing: after every update the runtime compares the
/// declared set against the running set, starts what is new, and aborts what
/// is gone.
///
/// This diffing is what makes timer cleanup structural rather than
/// conventional: a widget that declares its retry timer only while it is
/// polling cannot leak that timer — the moment the widget's state leaves the
/// polling phase (or the program shuts down), the next reconcile aborts the
/// task.
pub struct Subscription<Msg: Send + 'static> {
    pub(crate) id: SubscriptionId,
    pub(crate) spawn: Box<dyn FnOnce(mpsc::UnboundedSender<Msg>) -> AbortHandle + Send>,
}

/// Identity for diffing subscriptions between update cycles.
///
/// Composed of a Rust [`TypeId`] and a numeric discriminant, so distinct
/// instances of the same source type (say, two interval timers) can coexist.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId {
    type_id: TypeId,
    discriminant: u64,
}

impl SubscriptionId {
    /// Create an ID from a type and a numeric discriminant.
    pub fn new<T: 'static>(discriminant: u64) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            discriminant,
        }
    }

    /// Create an ID from a type alone (for singletons).
    pub fn of<T: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            discriminant: 0,
        }
    }

    /// Create an ID from a type and a string discriminant.
    pub fn with_str<T: 'static>(s: &str) -> Self {
        let mut hasher = std::hash::DefaultHasher::new();
        s.hash(&mut hasher);
        Self {
            type_id: TypeId::of::<T>(),
            discriminant: hasher.finish(),
        }
    }
}

/// Trait for types that produce a stream of values.
///
/// Implement this to create custom subscription sources. The runtime calls
/// [`stream`](SubscriptionSource::stream) once when the subscription starts
/// and drops the stream when it is removed.
pub trait SubscriptionSource: Send + 'static {
    /// The type of values this source emits.
    type Output: Send + 'static;

    /// Unique ID for this subscription instance.
    fn id(&self) -> SubscriptionId;

    /// Create the stream of values.
    fn stream(self) -> BoxStream<'static, Self::Output>;
}

/// Create a [`Subscription`] from a [`SubscriptionSource`].
///
/// Spawns a tokio task that drives the source's stream and forwards each
/// emitted value to the runtime's message channel.
pub fn subscribe<S>(source: S) -> Subscription<S::Output>
where
    S: SubscriptionSource,
    S::Output: Send + 'static,
{
    let id = source.id();
    Subscription {
        id,
        spawn: Box::new(move |tx| {
            let handle = tokio::spawn(async move {
                let mut stream = source.stream();
                while let Some(msg) = stream.next().await {
                    if tx.send(msg).is_err() {
                        break;
                    }
                }
            });
            handle.abort_handle()
        }),
    }
}

impl<Msg: Send + 'static> Subscription<Msg> {
    /// Create from a raw stream and id.
    pub fn from_stream(id: SubscriptionId, stream: BoxStream<'static, Msg>) -> Self {
        Subscription {
            id,
            spawn: Box::new(move |tx| {
                let handle = tokio::spawn(async move {
                    let mut stream = stream;
                    while let Some(msg) = stream.next().await {
                        if tx.send(msg).is_err() {
                            break;
                        }
                    }
                });
                handle.abort_handle()
            }),
        }
    }

    /// Transform the message type (for component composition).
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl Fn(Msg) -> NewMsg + Send + Sync + 'static,
    ) -> Subscription<NewMsg> {
        let f = std::sync::Arc::new(f);
        Subscription {
            id: self.id,
            spawn: Box::new(move |new_tx: mpsc::UnboundedSender<NewMsg>| {
                let (inner_tx, mut inner_rx) = mpsc::unbounded_channel::<Msg>();
                let abort = (self.spawn)(inner_tx);

                tokio::spawn(async move {
                    while let Some(msg) = inner_rx.recv().await {
                        if new_tx.send(f(msg)).is_err() {
                            break;
                        }
                    }
                });

                // When the source is aborted, inner_tx drops, inner_rx
                // returns None, and the mapper task ends naturally.
                abort
            }),
        }
    }
}

/// Manages active subscriptions, performing diffing between cycles.
pub(crate) struct SubscriptionManager<Msg: Send + 'static> {
    active: HashMap<SubscriptionId, AbortHandle>,
    msg_tx: mpsc::UnboundedSender<Msg>,
}

impl<Msg: Send + 'static> SubscriptionManager<Msg> {
    pub fn new(msg_tx: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            active: HashMap::new(),
            msg_tx,
        }
    }

    /// Diff new subscriptions against active ones.
    /// Start new ones, stop removed ones, keep unchanged ones.
    pub fn reconcile(&mut self, new_subs: Vec<Subscription<Msg>>) {
        let mut new_ids: HashMap<SubscriptionId, Subscription<Msg>> = HashMap::new();
        for sub in new_subs {
            new_ids.insert(sub.id.clone(), sub);
        }

        let to_remove: Vec<SubscriptionId> = self
            .active
            .keys()
            .filter(|id| !new_ids.contains_key(id))
            .cloned()
            .collect();

        for id in to_remove {
            if let Some(handle) = self.active.remove(&id) {
                handle.abort();
            }
        }

        for (id, sub) in new_ids {
            if !self.active.contains_key(&id) {
                let handle = (sub.spawn)(self.msg_tx.clone());
                self.active.insert(id, handle);
            }
        }
    }

    /// Abort all active subscriptions.
    pub fn shutdown(&mut self) {
        for (_, handle) in self.active.drain() {
            handle.abort();
        }
    }

    #[cfg(test)]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_equality_by_type() {
        assert_eq!(SubscriptionId::of::<String>(), SubscriptionId::of::<String>());
        assert_ne!(SubscriptionId::of::<String>(), SubscriptionId::of::<i32>());
    }

    #[test]
    fn id_discriminants_differ() {
        assert_ne!(
            SubscriptionId::new::<String>(1),
            SubscriptionId::new::<String>(2)
        );
    }

    #[test]
    fn id_str_discriminants() {
        let a = SubscriptionId::with_str::<String>("pin");
        let b = SubscriptionId::with_str::<String>("code");
        assert_ne!(a, b);
        assert_eq!(a, SubscriptionId::with_str::<String>("pin"));
    }

    fn pending_sub(id: SubscriptionId) -> Subscription<i32> {
        let stream: BoxStream<'static, i32> = Box::pin(futures::stream::pending());
        Subscription::from_stream(id, stream)
    }

    #[tokio::test]
    async fn reconcile_starts_new() {
        let (tx, _rx) = mpsc::unbounded_channel::<i32>();
        let mut manager = SubscriptionManager::new(tx);

        manager.reconcile(vec![pending_sub(SubscriptionId::of::<String>())]);
        assert_eq!(manager.active_count(), 1);
    }

    #[tokio::test]
    async fn reconcile_stops_removed() {
        let (tx, _rx) = mpsc::unbounded_channel::<i32>();
        let mut manager = SubscriptionManager::new(tx);

        manager.reconcile(vec![pending_sub(SubscriptionId::of::<String>())]);
        assert_eq!(manager.active_count(), 1);

        // Declaring nothing must abort the running task
        manager.reconcile(vec![]);
        assert_eq!(manager.active_count(), 0);
    }

    #[tokio::test]
    async fn reconcile_keeps_unchanged() {
        let (tx, _rx) = mpsc::unbounded_channel::<i32>();
        let mut manager = SubscriptionManager::new(tx);

        let id = SubscriptionId::of::<String>();
        manager.reconcile(vec![pending_sub(id.clone())]);
        manager.reconcile(vec![pending_sub(id)]);
        assert_eq!(manager.active_count(), 1);
    }

    #[tokio::test]
    async fn shutdown_aborts_everything() {
        let (tx, _rx) = mpsc::unbounded_channel::<i32>();
        let mut manager = SubscriptionManager::new(tx);

        manager.reconcile(vec![
            pending_sub(SubscriptionId::new::<String>(1)),
            pending_sub(SubscriptionId::new::<String>(2)),
        ]);
        assert_eq!(manager.active_count(), 2);

        manager.shutdown();
        assert_eq!(manager.active_count(), 0);
    }
}
