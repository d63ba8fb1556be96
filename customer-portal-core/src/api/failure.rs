//! Failure injection policies

use std::collections::HashMap;
use std::fmt;

use rand::Rng;

use super::Endpoint;

/// Decides whether a mock call fails
pub trait FailurePolicy: Send + Sync {
    fn should_fail(&self, endpoint: Endpoint) -> bool;
}

/// Never fails
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverFail;

impl FailurePolicy for NeverFail {
    fn should_fail(&self, _endpoint: Endpoint) -> bool {
        false
    }
}

/// Always fails
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysFail;

impl FailurePolicy for AlwaysFail {
    fn should_fail(&self, _endpoint: Endpoint) -> bool {
        true
    }
}

/// Closure based policy for deterministic tests
pub struct FnFailure<F>(pub F);

impl<F> FailurePolicy for FnFailure<F>
where
    F: Fn(Endpoint) -> bool + Send + Sync,
{
    fn should_fail(&self, endpoint: Endpoint) -> bool {
        (self.0)(endpoint)
    }
}

impl<F> fmt::Debug for FnFailure<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnFailure(..)")
    }
}

/// Random failures with a per-endpoint probability
#[derive(Debug, Clone)]
pub struct RandomFailure {
    default_rate: f64,
    overrides: HashMap<Endpoint, f64>,
}

impl RandomFailure {
    /// Default probability applied to every endpoint without an override
    pub const DEFAULT_RATE: f64 = 0.1;

    pub fn new(default_rate: f64) -> Self {
        Self {
            default_rate: default_rate.clamp(0.0, 1.0),
            overrides: HashMap::new(),
        }
    }

    /// Per-endpoint tuning: session endpoints never fail randomly and
    /// mutations fail less often than reads.
    pub fn tuned(default_rate: f64) -> Self {
        let rate = default_rate.clamp(0.0, 1.0);
        Self::new(rate)
            .with_rate(Endpoint::Login, 0.0)
            .with_rate(Endpoint::Logout, 0.0)
            .with_rate(Endpoint::MarkNotificationRead, rate / 2.0)
            .with_rate(Endpoint::ToggleAutoRenew, rate / 2.0)
            .with_rate(Endpoint::UpdateProfile, rate / 2.0)
            .with_rate(Endpoint::CreateSupportTicket, rate / 2.0)
    }

    #[must_use]
    pub fn with_rate(mut self, endpoint: Endpoint, rate: f64) -> Self {
        self.overrides.insert(endpoint, rate.clamp(0.0, 1.0));
        self
    }

    pub fn rate(&self, endpoint: Endpoint) -> f64 {
        self.overrides
            .get(&endpoint)
            .copied()
            .unwrap_or(self.default_rate)
    }
}

impl Default for RandomFailure {
    fn default() -> Self {
        Self::tuned(Self::DEFAULT_RATE)
    }
}

impl FailurePolicy for RandomFailure {
    fn should_fail(&self, endpoint: Endpoint) -> bool {
        let rate = self.rate(endpoint);
        if rate <= 0.0 {
            return false;
        }
        if rate >= 1.0 {
            return true;
        }
        rand::rng().random_bool(rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certain_rates_are_deterministic() {
        let always = RandomFailure::new(1.0);
        let never = RandomFailure::new(0.0);
        for endpoint in Endpoint::all() {
            assert!(always.should_fail(*endpoint));
            assert!(!never.should_fail(*endpoint));
        }
    }

    #[test]
    fn tuned_rates() {
        let policy = RandomFailure::tuned(0.2);
        assert!((policy.rate(Endpoint::Login) - 0.0).abs() < f64::EPSILON);
        assert!((policy.rate(Endpoint::GetServices) - 0.2).abs() < f64::EPSILON);
        assert!((policy.rate(Endpoint::ToggleAutoRenew) - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn rates_are_clamped() {
        let policy = RandomFailure::new(3.0).with_rate(Endpoint::GetInvoices, -1.0);
        assert!((policy.rate(Endpoint::GetServices) - 1.0).abs() < f64::EPSILON);
        assert!(!policy.should_fail(Endpoint::GetInvoices));
    }

    #[test]
    fn fn_failure_uses_predicate() {
        let policy = FnFailure(|e: Endpoint| e == Endpoint::GetDnsRecords);
        assert!(policy.should_fail(Endpoint::GetDnsRecords));
        assert!(!policy.should_fail(Endpoint::GetServices));
    }
}
