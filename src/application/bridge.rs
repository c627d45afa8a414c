//! Bridge controller
//!
//! Owns the clipboard poller's lifecycle, forwards detected changes to the
//! UI `clipboard` port, and persists `updateTags` events.
//!
//! ```text
//! host clipboard -> ClipboardPoller -> BridgeController -> UI "clipboard"
//! UI "updateTags" -> BridgeController -> TagRepository -> KeyValueStore
//! KeyValueStore -> BridgeController -> UI "init" (startup)
//! ```

use std::future::Future;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::domain::channel::{InboundMessage, OutboundMessage};
use crate::domain::tags::{InitFlags, TagSet};

use super::poller::ClipboardPoller;
use super::ports::{ChannelError, ClipboardReader, KeyValueStore, UiSink, UiSource};
use super::tags::{TagPersistError, TagRepository};

/// Errors from the bridge controller
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Clipboard watch is already running")]
    AlreadyRunning,

    #[error("Clipboard watch is not running")]
    NotRunning,

    #[error("Clipboard watch task failed: {0}")]
    WatchTaskFailed(String),

    #[error("UI channel error: {0}")]
    Channel(#[from] ChannelError),

    #[error("Failed to persist tags: {0}")]
    Persist(#[from] TagPersistError),
}

/// Running clipboard watch task.
///
/// The task hands the poller back when it stops, so the controller can
/// start it again later.
struct ClipboardWatch<C: ClipboardReader> {
    stop_tx: watch::Sender<bool>,
    task: JoinHandle<ClipboardPoller<C>>,
}

/// Bridge between the host clipboard, durable storage, and the UI.
pub struct BridgeController<C, S, U>
where
    C: ClipboardReader + 'static,
    S: KeyValueStore,
    U: UiSink + 'static,
{
    poller: Option<ClipboardPoller<C>>,
    watch: Option<ClipboardWatch<C>>,
    tags: TagRepository<S>,
    ui: Arc<U>,
}

impl<C, S, U> BridgeController<C, S, U>
where
    C: ClipboardReader + 'static,
    S: KeyValueStore,
    U: UiSink + 'static,
{
    pub fn new(poller: ClipboardPoller<C>, tags: TagRepository<S>, ui: U) -> Self {
        Self {
            poller: Some(poller),
            watch: None,
            tags,
            ui: Arc::new(ui),
        }
    }

    pub fn is_running(&self) -> bool {
        self.watch.is_some()
    }

    pub fn tags(&self) -> &TagRepository<S> {
        &self.tags
    }

    /// Load stored tags and hand them to the UI as its init payload.
    pub async fn initialize(&self) -> Result<InitFlags, BridgeError> {
        let flags = InitFlags {
            tags: self.tags.load().await,
        };
        info!(count = flags.tags.len(), "sending init payload");
        self.ui
            .send(&OutboundMessage::Init {
                flags: flags.clone(),
            })
            .await?;
        Ok(flags)
    }

    /// Seed the poller and start the recurring clipboard watch.
    pub async fn start(&mut self) -> Result<(), BridgeError> {
        if self.watch.is_some() {
            return Err(BridgeError::AlreadyRunning);
        }
        let mut poller = self
            .poller
            .take()
            .ok_or_else(|| BridgeError::WatchTaskFailed("clipboard poller was lost".to_string()))?;

        if !poller.is_seeded() {
            poller.seed().await;
        }

        let (stop_tx, stop_rx) = watch::channel(false);
        let ui = Arc::clone(&self.ui);
        info!(interval = %poller.config().interval, "starting clipboard watch");
        let task = tokio::spawn(watch_loop(poller, ui, stop_rx));

        self.watch = Some(ClipboardWatch { stop_tx, task });
        Ok(())
    }

    /// Stop the clipboard watch and take the poller back.
    pub async fn stop(&mut self) -> Result<(), BridgeError> {
        let watch = self.watch.take().ok_or(BridgeError::NotRunning)?;
        let _ = watch.stop_tx.send(true);

        let poller = watch
            .task
            .await
            .map_err(|e| BridgeError::WatchTaskFailed(e.to_string()))?;
        self.poller = Some(poller);
        info!("clipboard watch stopped");
        Ok(())
    }

    /// Handle one UI-originated event.
    ///
    /// A failed update is logged and returned; the stored record keeps its
    /// previous value.
    pub async fn handle_event(&self, event: InboundMessage) -> Result<(), BridgeError> {
        match event {
            InboundMessage::UpdateTags { value } => {
                let result = match TagSet::from_payload(value) {
                    Ok(tags) => self.tags.save(&tags).await.map(|()| tags.len()),
                    Err(e) => Err(TagPersistError::from(e)),
                };
                match result {
                    Ok(count) => {
                        debug!(count, key = %self.tags.key(), "tags persisted");
                        Ok(())
                    }
                    Err(e) => {
                        error!(error = %e, key = %self.tags.key(), "tag update rejected, previous tags kept");
                        Err(e.into())
                    }
                }
            }
        }
    }

    /// Run the bridge until the UI closes its channel or `shutdown` resolves.
    pub async fn run<Src, F>(&mut self, source: &mut Src, shutdown: F) -> Result<(), BridgeError>
    where
        Src: UiSource,
        F: Future<Output = ()>,
    {
        self.initialize().await?;
        self.start().await?;

        tokio::pin!(shutdown);
        let outcome = loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    info!("shutdown requested");
                    break Ok(());
                }
                event = source.recv() => match event {
                    Ok(Some(event)) => {
                        // Failures are already logged; the bridge keeps running.
                        let _ = self.handle_event(event).await;
                    }
                    Ok(None) => {
                        info!("UI channel closed");
                        break Ok(());
                    }
                    Err(e) => break Err(BridgeError::from(e)),
                },
            }
        };

        self.stop().await?;
        outcome
    }
}

async fn watch_loop<C, U>(
    mut poller: ClipboardPoller<C>,
    ui: Arc<U>,
    mut stop_rx: watch::Receiver<bool>,
) -> ClipboardPoller<C>
where
    C: ClipboardReader,
    U: UiSink,
{
    let mut ticker = interval(poller.config().interval.as_std());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; the seed already covers it.
    ticker.tick().await;

    loop {
        tokio::select! {
            changed = stop_rx.changed() => {
                if changed.is_err() || *stop_rx.borrow() {
                    break;
                }
            }
            _ = ticker.tick() => {
                if let Some(value) = poller.poll().await {
                    debug!(len = value.len(), "clipboard changed");
                    let message = OutboundMessage::Clipboard { value };
                    if let Err(e) = ui.send(&message).await {
                        warn!(error = %e, "failed to deliver clipboard change");
                    }
                }
            }
        }
    }

    poller
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::poller::tests::ScriptedReader;
    use crate::application::poller::PollerConfig;
    use crate::application::ports::ClipboardError;
    use crate::domain::timing::Duration;
    use crate::infrastructure::storage::MemoryStore;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration as StdDuration;

    #[derive(Default)]
    struct RecordingSink {
        sent: Mutex<Vec<OutboundMessage>>,
    }

    #[async_trait]
    impl UiSink for Arc<RecordingSink> {
        async fn send(&self, message: &OutboundMessage) -> Result<(), ChannelError> {
            self.sent.lock().unwrap().push(message.clone());
            Ok(())
        }
    }

    impl RecordingSink {
        fn clipboard_values(&self) -> Vec<String> {
            self.sent
                .lock()
                .unwrap()
                .iter()
                .filter_map(|m| match m {
                    OutboundMessage::Clipboard { value } => Some(value.clone()),
                    _ => None,
                })
                .collect()
        }
    }

    struct QueuedSource(VecDeque<InboundMessage>);

    #[async_trait]
    impl UiSource for QueuedSource {
        async fn recv(&mut self) -> Result<Option<InboundMessage>, ChannelError> {
            Ok(self.0.pop_front())
        }
    }

    fn bridge(
        reader: ScriptedReader,
        store: MemoryStore,
    ) -> (
        BridgeController<ScriptedReader, MemoryStore, Arc<RecordingSink>>,
        Arc<RecordingSink>,
    ) {
        let sink = Arc::new(RecordingSink::default());
        let controller = BridgeController::new(
            ClipboardPoller::new(reader, PollerConfig::default()),
            TagRepository::new(store, "tags"),
            Arc::clone(&sink),
        );
        (controller, sink)
    }

    fn update(value: serde_json::Value) -> InboundMessage {
        InboundMessage::UpdateTags { value }
    }

    #[tokio::test]
    async fn initialize_sends_empty_tags_when_never_written() {
        let (controller, sink) = bridge(ScriptedReader::texts(&[]), MemoryStore::new());
        let flags = controller.initialize().await.unwrap();
        assert!(flags.tags.is_empty());
        assert_eq!(
            sink.sent.lock().unwrap().as_slice(),
            &[OutboundMessage::Init {
                flags: InitFlags::default()
            }]
        );
    }

    #[tokio::test]
    async fn initialize_sends_stored_tags() {
        let store = MemoryStore::new();
        store.set("tags", r#"[{"name":"work"}]"#).await.unwrap();
        let (controller, _sink) = bridge(ScriptedReader::texts(&[]), store);
        let flags = controller.initialize().await.unwrap();
        assert_eq!(flags.tags, TagSet::new(vec![json!({"name": "work"})]));
    }

    #[tokio::test]
    async fn update_tags_fully_replaces_record() {
        let (controller, _sink) = bridge(ScriptedReader::texts(&[]), MemoryStore::new());
        controller.handle_event(update(json!(["a", "b"]))).await.unwrap();
        controller.handle_event(update(json!(["c"]))).await.unwrap();
        assert_eq!(controller.tags().load().await, TagSet::new(vec![json!("c")]));
    }

    #[tokio::test]
    async fn rejected_update_keeps_previous_tags() {
        let (controller, _sink) = bridge(ScriptedReader::texts(&[]), MemoryStore::new());
        controller.handle_event(update(json!(["keep"]))).await.unwrap();

        let result = controller.handle_event(update(json!({"not": "a list"}))).await;

        assert!(matches!(
            result,
            Err(BridgeError::Persist(TagPersistError::Serialization(_)))
        ));
        assert_eq!(controller.tags().load().await, TagSet::new(vec![json!("keep")]));
    }

    #[tokio::test(start_paused = true)]
    async fn watch_forwards_each_change_once_in_order() {
        let (mut controller, sink) = bridge(
            ScriptedReader::texts(&["A", "A", "B", "B", "C"]),
            MemoryStore::new(),
        );

        controller.start().await.unwrap();
        tokio::time::sleep(StdDuration::from_secs(1)).await;
        controller.stop().await.unwrap();

        assert_eq!(sink.clipboard_values(), vec!["B", "C"]);
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_does_not_report_launch_content() {
        let (mut controller, sink) = bridge(ScriptedReader::texts(&["launch"]), MemoryStore::new());

        controller.start().await.unwrap();
        tokio::time::sleep(StdDuration::from_millis(350)).await;
        controller.stop().await.unwrap();

        assert!(sink.clipboard_values().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn start_and_stop_guard_lifecycle() {
        let (mut controller, _sink) = bridge(ScriptedReader::texts(&["A"]), MemoryStore::new());

        assert!(matches!(controller.stop().await, Err(BridgeError::NotRunning)));
        controller.start().await.unwrap();
        assert!(controller.is_running());
        assert!(matches!(controller.start().await, Err(BridgeError::AlreadyRunning)));
        controller.stop().await.unwrap();
        assert!(!controller.is_running());

        // The poller comes back and can be restarted without reseeding.
        controller.start().await.unwrap();
        controller.stop().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn run_initializes_then_persists_until_channel_closes() {
        let (mut controller, sink) = bridge(ScriptedReader::texts(&["A"]), MemoryStore::new());
        let mut source = QueuedSource(VecDeque::from(vec![
            update(json!(["one"])),
            update(json!("bad")),
            update(json!(["two", {"x": 1}])),
        ]));

        controller
            .run(&mut source, std::future::pending())
            .await
            .unwrap();

        assert!(!controller.is_running());
        assert!(matches!(
            sink.sent.lock().unwrap().first(),
            Some(OutboundMessage::Init { .. })
        ));
        assert_eq!(
            controller.tags().load().await,
            TagSet::new(vec![json!("two"), json!({"x": 1})])
        );
    }

    #[tokio::test(start_paused = true)]
    async fn run_stops_on_shutdown() {
        let (mut controller, _sink) = bridge(ScriptedReader::texts(&["A"]), MemoryStore::new());

        struct Silent;

        #[async_trait]
        impl UiSource for Silent {
            async fn recv(&mut self) -> Result<Option<InboundMessage>, ChannelError> {
                std::future::pending().await
            }
        }

        controller
            .run(&mut Silent, tokio::time::sleep(StdDuration::from_millis(500)))
            .await
            .unwrap();
        assert!(!controller.is_running());
    }

    /// Answers the seed read at once, then takes five seconds per read.
    struct SlowReader {
        calls: AtomicUsize,
        finished: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ClipboardReader for SlowReader {
        async fn read_text(&self) -> Result<Option<String>, ClipboardError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                self.finished.fetch_add(1, Ordering::SeqCst);
                return Ok(Some("seed".into()));
            }
            tokio::time::sleep(StdDuration::from_secs(5)).await;
            self.finished.fetch_add(1, Ordering::SeqCst);
            Ok(Some("copied".into()))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn tag_update_lands_while_clipboard_read_is_suspended() {
        let finished = Arc::new(AtomicUsize::new(0));
        let reader = SlowReader {
            calls: AtomicUsize::new(0),
            finished: Arc::clone(&finished),
        };
        let config = PollerConfig {
            read_timeout: Duration::from_secs(10),
            ..Default::default()
        };
        let sink = Arc::new(RecordingSink::default());
        let mut controller = BridgeController::new(
            ClipboardPoller::new(reader, config),
            TagRepository::new(MemoryStore::new(), "tags"),
            Arc::clone(&sink),
        );

        controller.start().await.unwrap();
        // First tick at 100ms starts a read that is still pending at 150ms
        tokio::time::sleep(StdDuration::from_millis(150)).await;
        assert_eq!(finished.load(Ordering::SeqCst), 1);

        controller.handle_event(update(json!(["during read"]))).await.unwrap();

        assert_eq!(
            controller.tags().load().await,
            TagSet::new(vec![json!("during read")])
        );
        assert_eq!(finished.load(Ordering::SeqCst), 1);
        assert!(sink.clipboard_values().is_empty());

        controller.stop().await.unwrap();
        assert_eq!(sink.clipboard_values(), vec!["copied"]);
    }
}
