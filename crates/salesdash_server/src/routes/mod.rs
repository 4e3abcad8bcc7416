pub mod chat;
pub mod metrics;
pub mod presets;
pub mod sales;
pub mod scenarios;

pub use chat::chat_routes;
pub use metrics::metrics_routes;
pub use presets::preset_routes;
pub use sales::sales_routes;
pub use scenarios::scenario_routes;
