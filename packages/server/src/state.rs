use std::sync::Arc;

use crate::config::AppConfig;
use crate::session::SessionStore;
use crate::store::Storage;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Storage>,
    pub sessions: Arc<SessionStore>,
    pub config: Arc<AppConfig>,
}
