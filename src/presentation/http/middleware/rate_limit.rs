// src/presentation/http/middleware/rate_limit.rs
use crate::config::RateLimitConfig;
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type RateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client-IP limiter replenishing `per_second` requests each second up to
/// `burst`. `None` when the builder refuses a zero limit.
pub fn rate_limit_layer(limits: RateLimitConfig) -> Option<RateLimitLayer> {
    if limits.per_second == 0 {
        return None;
    }
    let mut builder = GovernorConfigBuilder::default();
    builder.per_millisecond((1000 / limits.per_second).max(1));
    builder.burst_size(limits.burst);
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;

    Some(GovernorLayer::new(config))
}
