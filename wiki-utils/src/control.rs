//! Idle-expiry tracking for interactive controls.

use std::{collections::HashMap, future::Future, sync::Arc, time::Duration};

use tokio::{sync::Mutex, task::JoinHandle};
use twilight_model::id::{Id, marker::MessageMarker};

type ExpiryTaskMap = HashMap<u64, JoinHandle<()>>;

/// Live interactive controls, keyed by the message hosting them.
///
/// Each control owns a timer task. Re-arming restarts the timer; when it runs
/// out the control is untracked and its expiry callback runs.
#[derive(Clone, Default)]
pub struct ControlRegistry {
    tasks: Arc<Mutex<ExpiryTaskMap>>,
}

impl ControlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start or restart the idle timer of the control hosted by `message_id`.
    pub async fn arm<F, Fut>(&self, message_id: Id<MessageMarker>, idle: Duration, on_expiry: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let key = message_id.get();

        let mut tasks = self.tasks.lock().await;
        if let Some(existing_task) = tasks.remove(&key) {
            existing_task.abort();
        }

        let registry = Arc::clone(&self.tasks);
        let expiry_task = tokio::spawn(async move {
            tokio::time::sleep(idle).await;

            registry.lock().await.remove(&key);
            on_expiry().await;
        });

        tasks.insert(key, expiry_task);
    }

    pub async fn is_live(&self, message_id: Id<MessageMarker>) -> bool {
        self.tasks.lock().await.contains_key(&message_id.get())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tokio::sync::oneshot;

    use super::*;

    const IDLE: Duration = Duration::from_secs(180);

    fn counting(counter: &Arc<AtomicUsize>) -> impl FnOnce() -> std::future::Ready<()> + Send + 'static {
        let counter = Arc::clone(counter);
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
            std::future::ready(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_runs_after_idle_period() {
        let registry = ControlRegistry::new();
        let (expired_tx, expired_rx) = oneshot::channel();

        registry
            .arm(Id::new(1), IDLE, move || async move {
                let _ = expired_tx.send(());
            })
            .await;
        assert!(registry.is_live(Id::new(1)).await);

        expired_rx.await.unwrap();
        assert!(!registry.is_live(Id::new(1)).await);
    }

    #[tokio::test(start_paused = true)]
    async fn rearming_restarts_the_idle_timer() {
        let registry = ControlRegistry::new();
        let fired = Arc::new(AtomicUsize::new(0));

        registry.arm(Id::new(7), IDLE, counting(&fired)).await;
        tokio::time::sleep(Duration::from_secs(120)).await;

        registry.arm(Id::new(7), IDLE, counting(&fired)).await;
        tokio::time::sleep(Duration::from_secs(120)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert!(registry.is_live(Id::new(7)).await);

        tokio::time::sleep(Duration::from_secs(61)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!registry.is_live(Id::new(7)).await);
    }

    #[tokio::test(start_paused = true)]
    async fn controls_expire_independently() {
        let registry = ControlRegistry::new();
        let fired = Arc::new(AtomicUsize::new(0));

        registry.arm(Id::new(1), IDLE, counting(&fired)).await;
        tokio::time::sleep(Duration::from_secs(100)).await;
        registry.arm(Id::new(2), IDLE, counting(&fired)).await;

        tokio::time::sleep(Duration::from_secs(81)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!registry.is_live(Id::new(1)).await);
        assert!(registry.is_live(Id::new(2)).await);
    }
}
