use std::sync::Arc;

use crate::client::SensorClient;
use crate::config::Config;
use crate::panel::Panel;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: Arc<SensorClient>,
    pub panel: Arc<Panel>,
}

impl AppState {
    pub fn new(config: Config, client: SensorClient, panel: Panel) -> Self {
        let panel = panel.with_stale_guard(config.discard_stale_responses);

        Self {
            config: Arc::new(config),
            client: Arc::new(client),
            panel: Arc::new(panel),
        }
    }
}
