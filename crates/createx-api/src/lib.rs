//! # createx-api
//!
//! HTTP content API for the CreateX Facilitator Guide.
//!
//! - Read endpoints over the module catalog (modules, sections, tracks,
//!   search, navigation, stats, translations)
//! - Simulated generation, translation, and validation endpoints backed by
//!   swappable providers
//! - Structured JSON errors with HTTP status semantics
//!
//! ```rust,ignore
//! let manager = Arc::new(ContentManager::from_config(&config));
//! let app = createx_api::router(AppState::new(manager));
//! createx_api::serve(app, "127.0.0.1:3000".parse()?).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod providers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, Result};
pub use providers::{GenerationProvider, SimulatedGenerator, SimulatedTranslator, TranslationProvider};
pub use routes::router;
pub use server::{serve, site_router, API_PREFIX};
pub use state::AppState;
