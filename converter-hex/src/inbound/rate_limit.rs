//! Rate limiting middleware using Governor.
//!
//! Implements per-client rate limiting with a token bucket algorithm, so a
//! single caller cannot burn through the upstream provider's request quota.

use axum::{
    Json,
    body::Body,
    extract::{ConnectInfo, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use dashmap::DashMap;
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use serde_json::json;
use std::{
    net::SocketAddr,
    num::NonZeroU32,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::{Duration, Instant},
};

/// Requests per minute allowed for each client when nothing is configured.
pub const DEFAULT_REQUESTS_PER_MINUTE: u32 = 100;

/// Idle clients are swept once every this many checks.
const SWEEP_EVERY: u64 = 1024;

struct ClientLimiter {
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    /// Milliseconds since `RateLimiterState::started`
    last_seen_ms: AtomicU64,
}

/// Rate limiter state shared across requests.
pub struct RateLimiterState {
    /// Per-client rate limiters
    limiters: DashMap<String, ClientLimiter>,
    /// Quota for new clients
    quota: Quota,
    requests_per_minute: u32,
    /// Key on `X-Forwarded-For` instead of the peer address
    trust_forwarded_for: bool,
    started: Instant,
    checks: AtomicU64,
}

impl Default for RateLimiterState {
    fn default() -> Self {
        Self::new(DEFAULT_REQUESTS_PER_MINUTE)
    }
}

impl RateLimiterState {
    /// Creates a new rate limiter state allowing `requests_per_minute`
    /// (at least one) per client.
    pub fn new(requests_per_minute: u32) -> Self {
        let burst = NonZeroU32::new(requests_per_minute).unwrap_or(NonZeroU32::MIN);

        Self {
            limiters: DashMap::new(),
            quota: Quota::per_minute(burst),
            requests_per_minute: burst.get(),
            trust_forwarded_for: false,
            started: Instant::now(),
            checks: AtomicU64::new(0),
        }
    }

    /// Keys clients by the first `X-Forwarded-For` hop. Only enable this
    /// behind a reverse proxy that overwrites the header.
    pub fn trust_forwarded_for(mut self, trust: bool) -> Self {
        self.trust_forwarded_for = trust;
        self
    }

    pub fn requests_per_minute(&self) -> u32 {
        self.requests_per_minute
    }

    /// Number of clients currently holding a limiter.
    pub fn tracked_clients(&self) -> usize {
        self.limiters.len()
    }

    /// Checks if a request should be rate limited.
    /// Returns true if the request is allowed, false if rate limited.
    pub fn check(&self, key: &str) -> bool {
        let now = self.millis_at(Instant::now());
        let allowed = {
            let client = self
                .limiters
                .entry(key.to_string())
                .or_insert_with(|| ClientLimiter {
                    limiter: RateLimiter::direct(self.quota),
                    last_seen_ms: AtomicU64::new(now),
                });
            client.last_seen_ms.store(now, Ordering::Relaxed);
            client.limiter.check().is_ok()
        };

        // The entry guard must be released before sweeping
        if self.checks.fetch_add(1, Ordering::Relaxed) % SWEEP_EVERY == SWEEP_EVERY - 1 {
            self.evict_idle(Instant::now());
        }

        allowed
    }

    /// Drops every client idle for a full refill period. Its bucket is full
    /// again, so a fresh limiter admits exactly the same requests.
    pub fn evict_idle(&self, now: Instant) {
        let refill_ms = self.refill_period().as_millis() as u64;
        let now = self.millis_at(now);
        self.limiters.retain(|_, client| {
            now.saturating_sub(client.last_seen_ms.load(Ordering::Relaxed)) < refill_ms
        });
    }

    fn refill_period(&self) -> Duration {
        self.quota.replenish_interval() * self.quota.burst_size().get()
    }

    fn millis_at(&self, at: Instant) -> u64 {
        at.saturating_duration_since(self.started).as_millis() as u64
    }

    fn client_key(&self, request: &Request<Body>) -> String {
        self.trust_forwarded_for
            .then(|| forwarded_for(request))
            .flatten()
            .or_else(|| peer_ip(request))
            .unwrap_or_else(|| "anonymous".to_string())
    }
}

/// First `X-Forwarded-For` hop.
fn forwarded_for(request: &Request<Body>) -> Option<String> {
    request
        .headers()
        .get("X-Forwarded-For")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Address of the TCP peer, without the port.
fn peer_ip(request: &Request<Body>) -> Option<String> {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
}

/// Rate limiting middleware.
pub async fn rate_limit_middleware(
    State(limiter): State<Arc<RateLimiterState>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    // Skip rate limiting for health endpoint
    if request.uri().path() == "/health" {
        return next.run(request).await;
    }

    let key = limiter.client_key(&request);
    if !limiter.check(&key) {
        tracing::warn!(client = %key, "Rate limit exceeded");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({
                "error": "Rate limit exceeded. Please try again later.",
                "code": StatusCode::TOO_MANY_REQUESTS.as_u16(),
                "retry_after_seconds": 60
            })),
        )
            .into_response();
    }

    next.run(request).await
}
