//! Environment port for looking up configuration variables.

/// Reads named configuration variables.
///
/// Keeping variable lookup behind a trait lets configuration resolution be
/// exercised against an in-memory map instead of the process environment.
pub trait Environment: Send + Sync {
    /// Returns the value of `name`, or `None` when it is unset.
    fn var(&self, name: &str) -> Option<String>;
}

#[cfg(test)]
pub(crate) mod fake {
    use std::collections::HashMap;

    use super::Environment;

    /// In-memory environment for tests.
    #[derive(Debug, Default, Clone)]
    pub struct MapEnvironment(HashMap<String, String>);

    impl MapEnvironment {
        pub fn with(mut self, name: &str, value: &str) -> Self {
            self.0.insert(name.to_string(), value.to_string());
            self
        }

        pub fn without(mut self, name: &str) -> Self {
            self.0.remove(name);
            self
        }
    }

    impl Environment for MapEnvironment {
        fn var(&self, name: &str) -> Option<String> {
            self.0.get(name).cloned()
        }
    }
}
