//! Server state and configuration.

use std::path::PathBuf;
use tokio::sync::RwLock;

use crate::clinic::ClinicProfile;
use crate::config::StateCache;
use crate::session::Session;
use crate::transport::PrintTarget;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// Where the session is cached between restarts (None: not cached)
    pub state_path: Option<PathBuf>,
    /// Where print jobs go
    pub print_target: PrintTarget,
    /// Footer printed on every sheet
    pub clinic: ClinicProfile,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            state_path: None,
            print_target: PrintTarget::default(),
            clinic: ClinicProfile::default(),
        }
    }
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    /// The one label being edited.
    pub session: RwLock<Session>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let session = match &config.state_path {
            Some(path) => Session::restore(StateCache::new(path.clone())),
            None => Session::default(),
        }
        .with_clinic(config.clinic.clone());

        Self {
            config,
            session: RwLock::new(session),
        }
    }
}
