//! Configuration shared by the emitters.

pub const DEFAULT_TABLE_NAME: &str = "Reason";

/// Configuration for table emission.
#[derive(Clone, Debug)]
pub struct EmitConfig {
    /// Infix for the emitted symbols, e.g. `kOpenSSL{name}Values`
    pub(crate) name: String,
    /// Whether to emit the license comment and generated-file notice
    pub(crate) preamble: bool,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_TABLE_NAME.to_string(),
            preamble: true,
        }
    }
}

impl EmitConfig {
    /// Create a new EmitConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the symbol infix.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set whether to emit the preamble comments.
    pub fn preamble(mut self, value: bool) -> Self {
        self.preamble = value;
        self
    }

    pub fn table_name(&self) -> &str {
        &self.name
    }

    pub(crate) fn values_symbol(&self) -> String {
        format!("kOpenSSL{}Values", self.name)
    }

    pub(crate) fn string_data_symbol(&self) -> String {
        format!("kOpenSSL{}StringData", self.name)
    }
}
