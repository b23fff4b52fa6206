/// Runtime settings for the user system.
///
/// None of these change how the store behaves. `RUST_LOG`, when set,
/// takes precedence over `log_filter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    /// Capacity of the actor's request channel.
    pub buffer_size: usize,
    /// Default tracing filter directive.
    pub log_filter: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            log_filter: "info".to_string(),
        }
    }
}
