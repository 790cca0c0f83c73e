//! Background message dispatch use case

use crate::application::ports::{MessageSource, NotificationError, NotificationSink};
use crate::domain::message::MessagePayload;
use crate::domain::notification::NotificationRequest;

/// What one handler invocation did with its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A notification was shown
    Shown,
    /// Data-only payload; nothing to render, completed as a no-op
    NoDisplay,
}

/// Callbacks for observability.
///
/// These are diagnostic only: they run around the sink call and never
/// block or alter notification rendering.
#[derive(Default)]
pub struct DispatchCallbacks {
    /// Called with every received payload
    pub on_message: Option<Box<dyn Fn(&MessagePayload) + Send + Sync>>,
    /// Called after a notification was shown
    pub on_shown: Option<Box<dyn Fn(&NotificationRequest) + Send + Sync>>,
    /// Called when the platform refused to show a notification
    pub on_show_failed: Option<Box<dyn Fn(&NotificationError) + Send + Sync>>,
}

/// Counters for one subscription run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub received: u64,
    pub shown: u64,
    pub no_display: u64,
    pub failed: u64,
}

/// Maps inbound background messages to OS-level notifications.
///
/// Stateless across invocations: each message gets an independent
/// handler call, and the only side effect is the sink call. Repeated
/// delivery of an identical payload produces repeated notifications;
/// nothing is deduplicated here.
pub struct BackgroundDispatcher<N: NotificationSink> {
    sink: N,
}

impl<N: NotificationSink> BackgroundDispatcher<N> {
    /// Create a dispatcher bound to a notification sink
    pub fn new(sink: N) -> Self {
        Self { sink }
    }

    /// Handle one background message.
    ///
    /// If the payload has a renderable display sub-record, exactly one
    /// show call is made and its pending result becomes the outcome of
    /// this invocation. A data-only payload completes as a no-op
    /// success; that branch belongs to the foreground app.
    pub async fn handle_message(
        &self,
        payload: &MessagePayload,
    ) -> Result<DispatchOutcome, NotificationError> {
        match NotificationRequest::from_payload(payload) {
            Some(request) => {
                self.sink.show(&request).await?;
                Ok(DispatchOutcome::Shown)
            }
            None => Ok(DispatchOutcome::NoDisplay),
        }
    }

    /// Pull messages from a source until the transport closes.
    ///
    /// Each message is handled independently; a refused show call is
    /// counted and reported through the callbacks, then the loop keeps
    /// delivering. Per-event failure accounting belongs to the host,
    /// not to this loop.
    pub async fn run<S: MessageSource>(
        &self,
        source: &mut S,
        callbacks: DispatchCallbacks,
    ) -> RunSummary {
        let mut summary = RunSummary::default();

        while let Some(payload) = source.recv().await {
            summary.received += 1;

            if let Some(on_message) = &callbacks.on_message {
                on_message(&payload);
            }

            match NotificationRequest::from_payload(&payload) {
                Some(request) => match self.sink.show(&request).await {
                    Ok(()) => {
                        summary.shown += 1;
                        if let Some(on_shown) = &callbacks.on_shown {
                            on_shown(&request);
                        }
                    }
                    Err(e) => {
                        summary.failed += 1;
                        if let Some(on_show_failed) = &callbacks.on_show_failed {
                            on_show_failed(&e);
                        }
                    }
                },
                None => summary.no_display += 1,
            }
        }

        summary
    }
}
