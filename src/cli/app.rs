//! Main worker runner

use std::process::ExitCode;

use crate::application::ports::{ConfigStore, NotificationError, NotificationSink};
use crate::application::{DispatchCallbacks, MessagingClient};
use crate::domain::message::MessagePayload;
use crate::domain::notification::NotificationRequest;
use crate::infrastructure::notification::create_sink;
use crate::infrastructure::{DesktopNotificationSink, FileConfigStore, JsonLineSource};

use super::args::WorkerOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Build the config store, honoring an explicit path
pub fn config_store(path: Option<std::path::PathBuf>) -> FileConfigStore {
    match path {
        Some(path) => FileConfigStore::with_path(path),
        None => FileConfigStore::new(),
    }
}

/// Run the worker: initialize messaging, then deliver notifications for
/// payloads read as JSON lines from stdin until EOF or Ctrl-C.
pub async fn run_worker(options: WorkerOptions) -> ExitCode {
    let presenter = Presenter::new();

    // Load the messaging constants
    let store = config_store(options.config_path);
    let config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // One-time initialization; on failure no listener is registered and
    // the worker stays inert for messaging.
    let client = match MessagingClient::initialize(config) {
        Ok(client) => client,
        Err(e) => {
            presenter.error(&format!("Messaging initialization failed: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Create adapters
    let sink: Box<dyn NotificationSink> = match options.app_name {
        Some(name) => Box::new(DesktopNotificationSink::with_app_name(name)),
        None => create_sink(),
    };
    let dispatcher = client.dispatcher(sink);
    let mut source = JsonLineSource::new(tokio::io::stdin());

    if options.verbose {
        presenter.info(&format!(
            "Listening for background messages (project '{}')",
            client.config().project_id
        ));
    }

    let callbacks = build_callbacks(presenter, options.verbose);

    let summary = tokio::select! {
        summary = dispatcher.run(&mut source, callbacks) => summary,
        _ = tokio::signal::ctrl_c() => {
            presenter.info("Shutting down");
            return ExitCode::from(EXIT_SUCCESS);
        }
    };

    presenter.info(&format!(
        "Processed {} messages ({} shown, {} data-only, {} failed)",
        summary.received, summary.shown, summary.no_display, summary.failed
    ));

    if summary.failed > 0 {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}

/// Wire presenter diagnostics into the dispatch loop.
///
/// Failed shows are always reported; per-payload chatter only in
/// verbose mode.
fn build_callbacks(presenter: Presenter, verbose: bool) -> DispatchCallbacks {
    let mut callbacks = DispatchCallbacks {
        on_show_failed: Some(Box::new(move |e: &NotificationError| {
            presenter.warn(&format!("Notification rejected: {}", e));
        })),
        ..DispatchCallbacks::default()
    };

    if verbose {
        callbacks.on_message = Some(Box::new(move |payload: &MessagePayload| {
            let rendered = serde_json::to_string(payload)
                .unwrap_or_else(|_| "<unprintable payload>".to_string());
            presenter.info(&format!("Received background message: {}", rendered));
        }));
        callbacks.on_shown = Some(Box::new(move |request: &NotificationRequest| {
            presenter.success(&format!("Notification shown: {}", request.title));
        }));
    }

    callbacks
}
