use std::time::Duration;

/// Settings that shape the generated schema and request handling.
#[derive(Debug, Clone)]
pub struct Config {
    /// Which collections to expose; `*` matches any run of characters.
    pub index_include_pattern: String,

    /// Fields whose name starts with this prefix are left out of every
    /// generated type.
    pub field_ignore_prefix: Option<String>,

    /// Generate `<collection>_aggregations` root fields.
    pub enable_aggregations: bool,

    /// Log every operation sent to the store.
    pub enable_query_logging: bool,

    /// Log every raw response received from the store.
    pub enable_result_logging: bool,

    /// Deadline applied to store calls when the request carries none.
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            index_include_pattern: "*".to_string(),
            field_ignore_prefix: None,
            enable_aggregations: true,
            enable_query_logging: false,
            enable_result_logging: false,
            request_timeout: None,
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index_include_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.index_include_pattern = pattern.into();
        self
    }

    pub fn field_ignore_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.field_ignore_prefix = if prefix.is_empty() { None } else { Some(prefix) };
        self
    }

    pub fn enable_aggregations(mut self, enable: bool) -> Self {
        self.enable_aggregations = enable;
        self
    }

    pub fn enable_query_logging(mut self, enable: bool) -> Self {
        self.enable_query_logging = enable;
        self
    }

    pub fn enable_result_logging(mut self, enable: bool) -> Self {
        self.enable_result_logging = enable;
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Returns `true` if `field` should be left out of generated types.
    pub fn is_ignored(&self, field: &str) -> bool {
        self.field_ignore_prefix
            .as_deref()
            .is_some_and(|prefix| field.starts_with(prefix))
    }
}
