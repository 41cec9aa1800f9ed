//! Shared test fixtures for the Baremetrics SDK integration tests.
//!
//! Provides sample product documents built with `serde_json::json!` and a
//! tracing layer that counts error-level events.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::{json, Value};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

pub const PRODUCT_PATH: &str = "/baremetrics.json";

/// A full document: two editions, three features, screenshots, and one
/// feature-edition reference to an edition that does not exist.
pub fn sample_product() -> Value {
    json!({
        "id": "prod-001",
        "name": "Baremetrics",
        "active": true,
        "tagline": "Metrics, dashboards and forecasting for SaaS",
        "description": "Subscription analytics for Stripe, Braintree and more.",
        "URL": "https://baremetrics.com",
        "modeDesktopLight": true,
        "modeDesktopDark": false,
        "modeLaptopLight": true,
        "modeLaptopDark": null,
        "modeMobileLight": false,
        "editions": {
            "items": [
                { "id": "ed-starter", "name": "Starter", "description": "For new businesses" },
                { "id": "ed-pro", "name": "Pro", "description": "For growing teams" }
            ]
        },
        "features": {
            "items": [
                {
                    "id": "feat-dashboard",
                    "name": "Dashboard",
                    "active": true,
                    "description": "MRR, churn and LTV at a glance.",
                    "URL": "https://app.baremetrics.com/dashboard",
                    "selector": "#dashboard",
                    "takeScreenshot": true,
                    "filename": "dashboard.png",
                    "screenshots": {
                        "items": [
                            {
                                "status": "done",
                                "mode": "desktopLight",
                                "timeOfCapture": "2022-05-01T12:00:00Z",
                                "filekeyRaw": "raw/dashboard.png",
                                "filekeyStyled": "styled/dashboard.png",
                                "filesize": 48213
                            },
                            {
                                "status": "pending",
                                "mode": "mobileDark",
                                "timeOfCapture": null,
                                "filekeyRaw": null,
                                "filekeyStyled": null,
                                "filesize": null
                            }
                        ]
                    },
                    "FeatureEditions": {
                        "items": [
                            { "edition": { "id": "ed-starter", "name": "Starter" } },
                            { "edition": { "id": "ed-pro", "name": "Pro" } }
                        ]
                    }
                },
                {
                    "id": "feat-forecast",
                    "name": "Forecast",
                    "active": true,
                    "description": "Revenue projections.",
                    "URL": null,
                    "selector": null,
                    "takeScreenshot": "false",
                    "filename": null,
                    "screenshots": { "items": [] },
                    "FeatureEditions": {
                        "items": [
                            { "edition": { "id": "ed-pro", "name": "Pro" } },
                            { "edition": { "id": "ed-enterprise", "name": "Enterprise" } }
                        ]
                    }
                },
                {
                    "id": "feat-legacy",
                    "name": "Legacy Reports",
                    "active": false,
                    "description": "Retired CSV exports.",
                    "screenshots": { "items": [] },
                    "FeatureEditions": { "items": [] }
                }
            ]
        }
    })
}

/// The smallest document the model accepts: required fields only.
pub fn minimal_product() -> Value {
    json!({
        "id": "1",
        "name": "Acme",
        "active": true,
        "tagline": "",
        "description": "",
        "URL": "https://acme.example.test",
        "editions": { "items": [] },
        "features": { "items": [] }
    })
}

// ---------------------------------------------------------------------------
// Error event capture
// ---------------------------------------------------------------------------

/// Counts ERROR-level tracing events seen on the current thread.
#[derive(Clone, Default)]
pub struct ErrorCounter {
    hits: Arc<AtomicUsize>,
}

impl ErrorCounter {
    pub fn count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl<S: tracing::Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == tracing::Level::ERROR {
            self.hits.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Install an [`ErrorCounter`] as the thread-local subscriber.
///
/// Keep the returned guard alive for as long as events should be counted.
/// Async tests using this must run on a current-thread runtime.
pub fn capture_errors() -> (tracing::subscriber::DefaultGuard, ErrorCounter) {
    let counter = ErrorCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let guard = tracing::subscriber::set_default(subscriber);
    (guard, counter)
}
