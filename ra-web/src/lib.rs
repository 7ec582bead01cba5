//! # ra-web: HTTP front end for RedditAnalytic
//!
//! Thin axum layer over [`ra_logic`]: resolves a logic component by entity
//! name through the [`LogicFactory`](ra_logic::LogicFactory), renders HTML
//! tables, and turns url-encoded form posts into entities.
//!
//! ```ignore
//! let pool = ra_data_sqlx::connect("sqlite::memory:", 1).await?;
//! ra_logic::migrate(&pool).await?;
//! let app = ra_web::router(AppState::new(LogicFactory::with_defaults(pool)));
//! ```

pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use config::{AppConfig, ConfigError, Settings};
pub use error::WebError;
pub use routes::router;
pub use state::AppState;
pub use telemetry::{init_tracing, shutdown_signal};
