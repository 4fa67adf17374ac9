//! Buffer hand-off configuration.

use serde::Deserialize;

/// How parsed lines move from the reader into the drain loop.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Milliseconds between drains of the shared buffer (default: 100).
    #[serde(default = "default_drain_interval_ms")]
    pub drain_interval_ms: u64,
    /// Maximum messages handed to the renderer per drain (default: 64).
    /// Anything beyond waits for the next tick.
    #[serde(default = "default_max_batch")]
    pub max_batch: usize,
    /// Commands offered to the buffer (default: `["PRIVMSG"]`).
    /// An empty list lets every line through to the normalizer.
    #[serde(default = "default_commands")]
    pub commands: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            drain_interval_ms: default_drain_interval_ms(),
            max_batch: default_max_batch(),
            commands: default_commands(),
        }
    }
}

impl PipelineConfig {
    /// Whether lines with `command` should be buffered.
    pub fn accepts(&self, command: &str) -> bool {
        self.commands.is_empty()
            || self
                .commands
                .iter()
                .any(|c| c.eq_ignore_ascii_case(command))
    }
}

fn default_drain_interval_ms() -> u64 {
    100
}

fn default_max_batch() -> usize {
    64
}

fn default_commands() -> Vec<String> {
    vec!["PRIVMSG".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_correct() {
        let config = PipelineConfig::default();
        assert_eq!(config.drain_interval_ms, 100);
        assert_eq!(config.max_batch, 64);
        assert_eq!(config.commands, vec!["PRIVMSG".to_string()]);
    }

    #[test]
    fn accepts_configured_commands_only() {
        let config = PipelineConfig::default();
        assert!(config.accepts("PRIVMSG"));
        assert!(config.accepts("privmsg"));
        assert!(!config.accepts("PING"));
        assert!(!config.accepts(""));
    }

    #[test]
    fn empty_command_list_accepts_all() {
        let config = PipelineConfig {
            commands: vec![],
            ..PipelineConfig::default()
        };
        assert!(config.accepts("NOTICE"));
        assert!(config.accepts(""));
    }
}
