pub mod chat_handlers;
pub mod metrics_handlers;
pub mod preset_handlers;
pub mod sales_handlers;
pub mod scenario_handlers;

pub use chat_handlers::*;
pub use metrics_handlers::*;
pub use preset_handlers::*;
pub use sales_handlers::*;
pub use scenario_handlers::*;

use std::sync::{Arc, Mutex};

use crate::chat::ChatClient;

pub type DbConn = Arc<Mutex<rusqlite::Connection>>;

/// Shared application state: the database handle and the chat relay client
#[derive(Clone)]
pub struct AppState {
    pub db: DbConn,
    pub chat: Arc<ChatClient>,
}
