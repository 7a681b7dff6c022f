use serde::{Deserialize, Serialize};
use std::time::Duration;
use anyhow::Result;

pub const DEFAULT_TIMEOUT_SEC: f64 = 1.0;

/// Validated, immutable parameters for one probe run.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ProbeConfig {
    pub host: String,
    pub port: u16,
    pub count: u32,
    pub timeout_sec: f64,
}

impl ProbeConfig {
    pub fn new(host: String, port: u16, count: u32, timeout_sec: f64) -> Result<Self> {
        if host.is_empty() {
            return Err(anyhow::anyhow!("host must not be empty"));
        }
        if count < 1 {
            return Err(anyhow::anyhow!("-x must be >= 1"));
        }
        if !(timeout_sec > 0.0) || Duration::try_from_secs_f64(timeout_sec).is_err() {
            return Err(anyhow::anyhow!("-w must be > 0"));
        }
        Ok(Self { host, port, count, timeout_sec })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs_f64(self.timeout_sec)
    }
}

/// Default per-attempt timeout in seconds, resolved from the environment.
/// `TCPPING_TIMEOUT` is consulted first, then `TCPPING_TIMEOUT_SEC` overrides
/// it when set and valid. Invalid or non-positive values fall through to the
/// previous candidate. Takes the lookup as a closure so tests never touch the
/// process environment.
pub fn default_timeout_sec<F>(lookup: F) -> f64
where
    F: Fn(&str) -> Option<String>,
{
    let mut timeout = env_float(&lookup, "TCPPING_TIMEOUT", DEFAULT_TIMEOUT_SEC);
    timeout = env_float(&lookup, "TCPPING_TIMEOUT_SEC", timeout);
    timeout
}

fn env_float<F>(lookup: &F, name: &str, fallback: f64) -> f64
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(v) => {
            let v = v.trim();
            if v.is_empty() {
                return fallback;
            }
            match v.parse::<f64>() {
                Ok(f) if f > 0.0 && Duration::try_from_secs_f64(f).is_ok() => f,
                _ => fallback,
            }
        }
        None => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn default_timeout_falls_back_to_builtin() {
        assert_eq!(default_timeout_sec(env_of(&[])), 1.0);
    }

    #[test]
    fn timeout_env_var_is_honored() {
        let env = env_of(&[("TCPPING_TIMEOUT", "2.5")]);
        assert_eq!(default_timeout_sec(env), 2.5);
    }

    #[test]
    fn sec_variant_overrides_plain_variant() {
        let env = env_of(&[("TCPPING_TIMEOUT", "2.5"), ("TCPPING_TIMEOUT_SEC", "0.25")]);
        assert_eq!(default_timeout_sec(env), 0.25);
    }

    #[test]
    fn invalid_override_keeps_earlier_candidate() {
        let env = env_of(&[("TCPPING_TIMEOUT", "2.5"), ("TCPPING_TIMEOUT_SEC", "nope")]);
        assert_eq!(default_timeout_sec(env), 2.5);
    }

    #[test]
    fn non_positive_and_blank_values_are_rejected() {
        assert_eq!(default_timeout_sec(env_of(&[("TCPPING_TIMEOUT", "0")])), 1.0);
        assert_eq!(default_timeout_sec(env_of(&[("TCPPING_TIMEOUT", "-3")])), 1.0);
        assert_eq!(default_timeout_sec(env_of(&[("TCPPING_TIMEOUT", "  ")])), 1.0);
    }

    #[test]
    fn non_finite_and_overflowing_timeouts_are_rejected() {
        // Values Duration::from_secs_f64 would panic on must fail validation
        // instead, so the process exits 2 rather than aborting.
        assert!(ProbeConfig::new("example.com".into(), 80, 1, f64::INFINITY).is_err());
        assert!(ProbeConfig::new("example.com".into(), 80, 1, f64::NAN).is_err());
        assert!(ProbeConfig::new("example.com".into(), 80, 1, 1e30).is_err());

        let cfg = ProbeConfig::new("example.com".into(), 80, 1, 1e9).unwrap();
        assert_eq!(cfg.timeout(), Duration::from_secs(1_000_000_000));
    }

    #[test]
    fn non_finite_env_values_fall_back() {
        assert_eq!(default_timeout_sec(env_of(&[("TCPPING_TIMEOUT", "inf")])), 1.0);
        assert_eq!(default_timeout_sec(env_of(&[("TCPPING_TIMEOUT", "1e400")])), 1.0);
        let env = env_of(&[("TCPPING_TIMEOUT", "2.5"), ("TCPPING_TIMEOUT_SEC", "1e30")]);
        assert_eq!(default_timeout_sec(env), 2.5);
    }

    #[test]
    fn config_validates_count_and_timeout() {
        assert!(ProbeConfig::new("example.com".into(), 80, 0, 1.0).is_err());
        assert!(ProbeConfig::new("example.com".into(), 80, 1, 0.0).is_err());
        assert!(ProbeConfig::new("example.com".into(), 80, 1, -1.0).is_err());
        assert!(ProbeConfig::new("".into(), 80, 1, 1.0).is_err());

        let cfg = ProbeConfig::new("example.com".into(), 443, 3, 0.5).unwrap();
        assert_eq!(cfg.timeout(), Duration::from_millis(500));
    }
}
