//! Config subcommand handling

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;

use super::args::ConfigAction;
use super::presenter::Presenter;

/// Handle a `config` subcommand
pub async fn handle_config_command(
    action: ConfigAction,
    store: &dyn ConfigStore,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Path => {
            presenter.output(&store.path().display().to_string());
            Ok(())
        }
        ConfigAction::Check => {
            let config = store.load().await?;
            config.validate()?;
            presenter.success(&format!(
                "Config OK: project '{}', sender id '{}'",
                config.project_id, config.messaging_sender_id
            ));
            Ok(())
        }
    }
}
