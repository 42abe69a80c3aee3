//! Runtime settings for the RBAC console
//!
//! Settings come from CLI flags and environment variables at startup; there
//! is no settings file because nothing persists across sessions.

/// Runtime settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Actor name written into audit entries
    pub actor: String,

    /// Event-loop tick rate in milliseconds (drives toast expiry)
    pub tick_rate_ms: u64,

    /// Start with the stock sample users and roles
    pub seed_sample_data: bool,
}

impl Settings {
    /// Default actor name used when no real authentication exists
    pub const DEFAULT_ACTOR: &'static str = "Admin";
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            actor: Self::DEFAULT_ACTOR.to_string(),
            tick_rate_ms: 250,
            seed_sample_data: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.actor, "Admin");
        assert_eq!(settings.tick_rate_ms, 250);
        assert!(settings.seed_sample_data);
    }
}
