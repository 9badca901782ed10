use deck_common::Outline;
use deck_core::error::GenerateError;
use tokio::sync::mpsc::UnboundedSender;

#[derive(Debug)]
pub enum AppEvent {
    /// A background generation finished, successfully or not.
    OutlineReady(Result<Outline, GenerateError>),
}

#[derive(Clone, Default)]
pub struct AppEventSender(Option<UnboundedSender<AppEvent>>);

impl AppEventSender {
    pub fn new(tx: UnboundedSender<AppEvent>) -> Self {
        Self(Some(tx))
    }
    pub fn noop() -> Self {
        Self(None)
    }
    pub fn send(&self, event: AppEvent) {
        if let Some(tx) = &self.0 {
            if tx.send(event).is_err() {
                tracing::debug!("app event dropped: receiver closed");
            }
        }
    }
}
