use dashmap::DashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::time::{Duration, Instant};

/// Token bucket for one client
#[derive(Debug, Clone)]
pub struct RateLimiter {
    tokens: u32,
    max_tokens: u32,
    refill_rate: Duration,
    last_refill: Instant,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::new_with_limits(30, Duration::from_secs(2)) // Refill 1 token every 2 seconds
    }

    pub fn new_with_limits(max_tokens: u32, refill_rate: Duration) -> Self {
        Self {
            tokens: max_tokens,
            max_tokens,
            refill_rate,
            last_refill: Instant::now(),
        }
    }

    pub fn try_acquire(&mut self) -> bool {
        self.refill_tokens();

        if self.tokens > 0 {
            self.tokens -= 1;
            true
        } else {
            false
        }
    }

    fn refill_tokens(&mut self) {
        let time_passed = self.last_refill.elapsed();
        let refill_millis = self.refill_rate.as_millis().max(1);
        let tokens_to_add = (time_passed.as_millis() / refill_millis) as u32;

        if tokens_to_add > 0 {
            self.tokens = self.tokens.saturating_add(tokens_to_add).min(self.max_tokens);
            self.last_refill += self.refill_rate * tokens_to_add;
        }
    }

    pub fn get_remaining_tokens(&mut self) -> u32 {
        self.refill_tokens();
        self.tokens
    }

    /// Time since the bucket last refilled or was created
    pub fn idle_for(&self) -> Duration {
        self.last_refill.elapsed()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

/// One bucket per client address
#[derive(Debug)]
pub struct ClientRateLimiter {
    buckets: DashMap<IpAddr, RateLimiter>,
    max_tokens: u32,
    refill_rate: Duration,
}

impl ClientRateLimiter {
    pub fn new(max_tokens: u32, refill_rate: Duration) -> Self {
        Self {
            buckets: DashMap::new(),
            max_tokens,
            refill_rate,
        }
    }

    /// Take a token for `client`. Requests without a known address share one bucket.
    pub fn check(&self, client: Option<IpAddr>) -> bool {
        let ip = client.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        self.buckets
            .entry(ip)
            .or_insert_with(|| RateLimiter::new_with_limits(self.max_tokens, self.refill_rate))
            .try_acquire()
    }

    /// Drop buckets that have been idle longer than `idle`
    pub fn prune_idle(&self, idle: Duration) -> usize {
        let before = self.buckets.len();
        self.buckets.retain(|_, bucket| bucket.idle_for() < idle);
        before - self.buckets.len()
    }

    pub fn tracked_clients(&self) -> usize {
        self.buckets.len()
    }
}
