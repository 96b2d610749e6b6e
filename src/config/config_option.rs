use crate::types::err::ConfigError;

/// A configurable value, together with the (inclusive) bounds on the value.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: Clone + PartialOrd + std::fmt::Display> ConfigOption<T> {
    /// Sets the value of the option, if the value is within bounds.
    ///
    /// ```rust
    /// # use tfl_entail::config::Config;
    /// let mut config = Config::default();
    /// assert!(config.max_depth.set(3).is_ok());
    /// assert!(config.max_depth.set(1024).is_err());
    /// assert_eq!(config.max_depth.value, 3);
    /// ```
    pub fn set(&mut self, value: T) -> Result<(), ConfigError> {
        if self.min <= value && value <= self.max {
            self.value = value;
            Ok(())
        } else {
            Err(ConfigError::OutOfBounds {
                name: self.name,
                min: self.min.to_string(),
                max: self.max.to_string(),
                value: value.to_string(),
            })
        }
    }
}
