use std::thread;
use std::time::Duration;

use thiserror::Error;

use crate::config::ServicesConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("plan service timed out after {0}ms")]
    Timeout(u64),

    #[error("network error: {0}")]
    Network(String),

    #[error("plan service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("invalid response from plan service: {0}")]
    InvalidResponse(String),
}

impl ServiceError {
    /// Short suggestion shown under the error in the CLI and wizard.
    pub fn hint(&self) -> &'static str {
        match self {
            ServiceError::Timeout(_) => {
                "The request took too long. Try again, or raise services.timeout_ms in config.toml."
            }
            ServiceError::Network(_) => "Check your connection and try again.",
            ServiceError::Api { status, .. } if *status == 429 => {
                "Too many requests. Wait a moment before generating another plan."
            }
            ServiceError::Api { .. } => "The plan service is having trouble. Try again later.",
            ServiceError::InvalidResponse(_) => {
                "The plan could not be read. Try a different goal or try again."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    pub fn from_config(services: &ServicesConfig) -> Self {
        Self {
            max_retries: services.max_retries,
            initial_delay: Duration::from_millis(services.retry_delay_ms),
        }
    }

    /// Delay before retry number `attempt` (1-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.initial_delay
            .saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1)))
    }
}

/// Runs `op` until it succeeds or `policy.max_retries` retries are spent,
/// doubling the pause after each failure. Returns the last error.
pub fn retry_with_backoff<T, F>(policy: &RetryPolicy, mut op: F) -> Result<T, ServiceError>
where
    F: FnMut() -> Result<T, ServiceError>,
{
    let mut attempt = 0;
    loop {
        match op() {
            Ok(value) => return Ok(value),
            Err(err) if attempt < policy.max_retries => {
                attempt += 1;
                let delay = policy.delay_for(attempt);
                log::warn!(
                    "{} - retry {}/{} after {}ms",
                    err,
                    attempt,
                    policy.max_retries,
                    delay.as_millis()
                );
                thread::sleep(delay);
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(max_retries: u32) -> RetryPolicy {
        RetryPolicy {
            max_retries,
            initial_delay: Duration::ZERO,
        }
    }

    #[test]
    fn succeeds_after_transient_failures() {
        let mut calls = 0;
        let result = retry_with_backoff(&instant(3), || {
            calls += 1;
            if calls < 3 {
                Err(ServiceError::Network("connection reset".into()))
            } else {
                Ok(calls)
            }
        });
        assert_eq!(result, Ok(3));
        assert_eq!(calls, 3);
    }

    #[test]
    fn gives_up_with_last_error() {
        let mut calls = 0;
        let result: Result<(), _> = retry_with_backoff(&instant(2), || {
            calls += 1;
            Err(ServiceError::Api {
                status: 503,
                message: format!("attempt {}", calls),
            })
        });
        assert_eq!(calls, 3);
        assert_eq!(
            result,
            Err(ServiceError::Api {
                status: 503,
                message: "attempt 3".into()
            })
        );
    }

    #[test]
    fn zero_retries_runs_once() {
        let mut calls = 0;
        let result: Result<(), _> = retry_with_backoff(&instant(0), || {
            calls += 1;
            Err(ServiceError::Timeout(10))
        });
        assert_eq!(calls, 1);
        assert!(result.is_err());
    }

    #[test]
    fn delay_doubles() {
        let policy = RetryPolicy {
            max_retries: 3,
            initial_delay: Duration::from_millis(1000),
        };
        assert_eq!(policy.delay_for(1), Duration::from_millis(1000));
        assert_eq!(policy.delay_for(2), Duration::from_millis(2000));
        assert_eq!(policy.delay_for(3), Duration::from_millis(4000));
    }

    #[test]
    fn rate_limit_has_its_own_hint() {
        let limited = ServiceError::Api {
            status: 429,
            message: "slow down".into(),
        };
        let broken = ServiceError::Api {
            status: 500,
            message: "oops".into(),
        };
        assert_ne!(limited.hint(), broken.hint());
        assert!(ServiceError::Timeout(5).to_string().contains("5ms"));
    }
}
