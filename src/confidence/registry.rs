//! Estimator registry and factory
//!
//! Maps short method names to constructors. A registry is an ordinary value
//! filled during application start-up and passed to whatever builds
//! estimators, so independent registries never see each other's entries.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use ndarray::Array2;

use super::estimator::ConfidenceEstimator;
use super::function::{IndicatorComputation, IndicatorFn};
use crate::config::{ConfidenceConfig, ConfigError};
use crate::core::{CostVolume, DisparityMap, StereoImage};
use crate::error::Result;

/// Builds an estimator from its configuration bundle
pub type EstimatorFactory =
    Arc<dyn Fn(&ConfidenceConfig) -> Result<Box<dyn ConfidenceEstimator>> + Send + Sync>;

/// Name to constructor mapping for confidence methods
#[derive(Clone, Default)]
pub struct EstimatorRegistry {
    factories: HashMap<String, EstimatorFactory>,
}

impl EstimatorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor under `method`
    ///
    /// An existing entry with the same name is replaced. Returns `true` when
    /// that happened.
    pub fn register<F>(&mut self, method: impl Into<String>, factory: F) -> bool
    where
        F: Fn(&ConfidenceConfig) -> Result<Box<dyn ConfidenceEstimator>> + Send + Sync + 'static,
    {
        let method = method.into();
        let replaced = self.factories.insert(method.clone(), Arc::new(factory)).is_some();
        if replaced {
            log::warn!("Confidence method '{}' re-registered, previous constructor replaced", method);
        } else {
            log::debug!("Registered confidence method '{}'", method);
        }
        replaced
    }

    /// Register a single-indicator computation as an [`IndicatorFn`]
    pub fn register_fn<F>(
        &mut self,
        method: impl Into<String>,
        indicator: impl Into<String>,
        description: impl Into<String>,
        compute: F,
    ) -> bool
    where
        F: Fn(Option<&DisparityMap>, &StereoImage, &StereoImage, &CostVolume) -> Result<Array2<f32>>
            + Send
            + Sync
            + 'static,
    {
        let method = method.into();
        let indicator = indicator.into();
        let description = description.into();
        let compute: Arc<IndicatorComputation> = Arc::new(compute);

        let name = method.clone();
        self.register(name, move |_config: &ConfidenceConfig| {
            Ok(Box::new(IndicatorFn::from_shared(
                method.clone(),
                indicator.clone(),
                description.clone(),
                Arc::clone(&compute),
            )) as Box<dyn ConfidenceEstimator>)
        })
    }

    pub fn contains(&self, method: &str) -> bool {
        self.factories.contains_key(method)
    }

    /// Registered method names, sorted
    pub fn methods(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Build the estimator named by `config`'s `confidence_method`
    ///
    /// # Errors
    /// `ConfidenceError::Configuration` when the key is missing, is not a
    /// string, or names a method that was never registered.
    pub fn create(&self, config: &ConfidenceConfig) -> Result<Box<dyn ConfidenceEstimator>> {
        let method = config.method()?;
        let factory = self.factories.get(method).ok_or_else(|| ConfigError::UnsupportedMethod {
            method: method.to_string(),
            available: self.methods(),
        })?;
        factory(config)
    }
}

impl fmt::Debug for EstimatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EstimatorRegistry")
            .field("methods", &self.methods())
            .finish()
    }
}

/// Build the estimator selected by `config` from `registry`
pub fn create_estimator(
    registry: &EstimatorRegistry,
    config: &ConfidenceConfig,
) -> Result<Box<dyn ConfidenceEstimator>> {
    registry.create(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfidenceError;
    use serde_json::json;

    struct Named(&'static str);

    impl ConfidenceEstimator for Named {
        fn method(&self) -> &str {
            "named"
        }

        fn description(&self) -> String {
            self.0.to_string()
        }

        fn predict(
            &self,
            _disparity: Option<&mut DisparityMap>,
            _left: &StereoImage,
            _right: &StereoImage,
            _cost_volume: &mut CostVolume,
        ) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_registry_empty() {
        let registry = EstimatorRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.methods().is_empty());
    }

    #[test]
    fn test_register_and_create() {
        let mut registry = EstimatorRegistry::new();
        assert!(!registry.register("named", |_| Ok(Box::new(Named("first")) as Box<dyn ConfidenceEstimator>)));

        let estimator = registry.create(&ConfidenceConfig::new("named")).unwrap();
        assert_eq!(estimator.description(), "first");
        assert!(registry.contains("named"));
    }

    #[test]
    fn test_reregistration_overwrites() {
        let mut registry = EstimatorRegistry::new();
        registry.register("named", |_| Ok(Box::new(Named("first")) as Box<dyn ConfidenceEstimator>));
        let replaced = registry.register("named", |_| Ok(Box::new(Named("second")) as Box<dyn ConfidenceEstimator>));

        assert!(replaced);
        assert_eq!(registry.len(), 1);
        let estimator = create_estimator(&registry, &ConfidenceConfig::new("named")).unwrap();
        assert_eq!(estimator.description(), "second");
    }

    #[test]
    fn test_unknown_method() {
        let mut registry = EstimatorRegistry::new();
        registry.register("named", |_| Ok(Box::new(Named("first")) as Box<dyn ConfidenceEstimator>));

        let err = registry.create(&ConfidenceConfig::new("nonexistent")).err().unwrap();

        assert!(err.is_configuration());
        match err {
            ConfidenceError::Configuration(ConfigError::UnsupportedMethod { method, available }) => {
                assert_eq!(method, "nonexistent");
                assert_eq!(available, vec!["named".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(registry.methods(), vec!["named".to_string()]);
    }

    #[test]
    fn test_missing_and_non_string_method() {
        let registry = EstimatorRegistry::new();

        let missing = registry.create(&ConfidenceConfig::default()).err().unwrap();
        assert!(matches!(missing, ConfidenceError::Configuration(ConfigError::MissingMethod)));

        let config = ConfidenceConfig::from_value(json!({ "confidence_method": ["a", "b"] })).unwrap();
        let non_string = registry.create(&config).err().unwrap();
        assert!(matches!(
            non_string,
            ConfidenceError::Configuration(ConfigError::MethodNotString { found: "array" })
        ));
    }

    #[test]
    fn test_factory_reads_options() {
        let mut registry = EstimatorRegistry::new();
        registry.register("tunable", |config| {
            let label = config.option::<String>("label")?.unwrap_or_else(|| "default".to_string());
            Ok(Box::new(IndicatorFn::new("tunable", label, "", |_, left, _, _| Ok(left.data.clone())))
                as Box<dyn ConfidenceEstimator>)
        });

        let config = ConfidenceConfig::new("tunable").with_option("label", "custom");
        let estimator = registry.create(&config).unwrap();
        assert_eq!(estimator.method(), "tunable");

        let bad = ConfidenceConfig::new("tunable").with_option("label", 4);
        assert!(registry.create(&bad).err().unwrap().is_configuration());
    }

    #[test]
    fn test_registries_are_isolated() {
        let mut a = EstimatorRegistry::new();
        let b = EstimatorRegistry::new();
        a.register_fn("ambiguity", "ambiguity", "", |_, left, _, _| Ok(left.data.clone()));

        assert!(a.contains("ambiguity"));
        assert!(!b.contains("ambiguity"));
    }
}
