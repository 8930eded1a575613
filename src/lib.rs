#![doc(test(attr(deny(warnings))))]

//! TabTre Core offers the treasury simulation, forecasting, and filtering
//! primitives that power the TabTre dashboard views.

pub mod analytics;
pub mod domain;
pub mod errors;
pub mod filters;
pub mod simulation;
pub mod storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("tabtre_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("TabTre Core tracing initialized.");
    });
}
