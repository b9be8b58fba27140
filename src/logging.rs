//! Diagnostic output on stderr, kept off stdout so the countdown stays clean

use tracing::metadata::Level;
use tracing_subscriber::{filter::Directive, EnvFilter};

/// Environment variable holding the tracing filter, in `EnvFilter` syntax
pub const LOG_ENV: &str = "HARVEST_LOG";

pub struct LogSpec {
    level: Level,
    directives: Vec<Directive>,
}

impl Default for LogSpec {
    fn default() -> Self {
        Self::new(vec![])
    }
}

impl LogSpec {
    pub fn new(directives: Vec<Directive>) -> Self {
        Self {
            level: Level::WARN,
            directives,
        }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;

        self
    }

    fn filter(self) -> EnvFilter {
        // A malformed HARVEST_LOG must not prevent the countdown from running
        let mut filter = EnvFilter::builder()
            .with_default_directive(self.level.into())
            .with_env_var(LOG_ENV)
            .from_env_lossy();
        for d in self.directives {
            filter = filter.add_directive(d);
        }
        filter
    }
}

/// Install a global subscriber for `spec`, does nothing if one is already set
pub fn enable_logs_for(spec: LogSpec) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(spec.filter())
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warn_by_default() {
        assert_eq!(LogSpec::default().level, Level::WARN);
    }

    #[test]
    fn directives_refine_the_level() {
        let spec = LogSpec::new(vec!["harvest_counter::counter=trace".parse().unwrap()])
            .with_level(Level::INFO);
        assert_eq!(spec.level, Level::INFO);
        assert!(spec.filter().to_string().contains("harvest_counter::counter=trace"));
    }

    #[test]
    fn enabling_twice_is_harmless() {
        enable_logs_for(LogSpec::default());
        enable_logs_for(LogSpec::default().with_level(Level::TRACE));
        tracing::warn!("still alive");
    }
}
