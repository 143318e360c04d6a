//! Per-client rate limiting for form submissions.
//!
//! Validation is cheap, but submissions are the only endpoints a script
//! would hammer, so they sit behind a token bucket keyed by client IP.

use axum::Router;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::state::AppState;

/// Sustained submissions per second per client.
const PER_SECOND: u64 = 2;
/// Submissions allowed in a burst before throttling starts.
const BURST_SIZE: u32 = 30;

/// Rate limiter keyed by the socket peer address.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(PER_SECOND)
            .burst_size(BURST_SIZE)
            .finish()
            .expect("rate limit constants are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Rate limiter keyed by `X-Forwarded-For` / `X-Real-IP` / `Forwarded`,
/// falling back to the peer address.
///
/// Use only behind a trusted reverse proxy: clients can forge these headers.
pub fn proxied_layer()
-> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_second(PER_SECOND)
            .burst_size(BURST_SIZE)
            .finish()
            .expect("rate limit constants are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Applies the limiter matching the deployment to `router`.
///
/// # Example
///
/// ```rust,ignore
/// let submit = rate_limit::apply(Router::new().route("/", post(submit_form_handler)), false);
/// ```
pub fn apply(router: Router<AppState>, behind_proxy: bool) -> Router<AppState> {
    if behind_proxy {
        router.layer(proxied_layer())
    } else {
        router.layer(layer())
    }
}
