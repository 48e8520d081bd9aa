//! Turning a parsed [`Config`] into a sealed [`InterceptorChain`].

use tracing::{debug, info};

use interpose_plugin::{InterceptorChain, InterceptorChainBuilder};

use crate::error::{ConfigError, ConfigResult};
use crate::registry::InterceptorRegistry;
use crate::types::Config;

/// Instantiate, configure and register every enabled declaration in file
/// order, then seal the chain.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownInterceptor`] for an unregistered alias, or
/// [`ConfigError::Plugin`] when an interceptor rejects its properties or
/// declares a signature that does not exist.
pub fn build_chain(config: &Config, registry: &InterceptorRegistry) -> ConfigResult<InterceptorChain> {
    let mut builder = InterceptorChainBuilder::new();

    for plugin in config.enabled_plugins() {
        debug!(alias = %plugin.interceptor, "instantiating plugin");
        let interceptor = registry.create(&plugin.interceptor)?;
        builder
            .register(interceptor, &plugin.properties)
            .map_err(|source| ConfigError::Plugin {
                alias: plugin.interceptor.clone(),
                source,
            })?;
    }

    info!(
        declared = config.plugins.len(),
        registered = builder.len(),
        "chain assembled from config"
    );
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use interpose_core::{InterposeError, InterposeResult, Value};
    use interpose_plugin::{Interceptor, Invocation, Properties, Signature};

    use super::*;
    use crate::types::PluginSection;

    #[derive(Default)]
    struct Named {
        label: String,
    }

    impl Interceptor for Named {
        fn signatures(&self) -> &[Signature] {
            &[]
        }

        fn intercept(&self, invocation: &mut Invocation<'_>) -> InterposeResult<Value> {
            invocation.proceed()
        }

        fn configure(&mut self, options: &Properties) -> InterposeResult<()> {
            let label = options
                .require("label")
                .map_err(|e| InterposeError::configuration("named", e.to_string()))?;
            self.label = label.to_owned();
            Ok(())
        }

        fn name(&self) -> &str {
            &self.label
        }
    }

    fn registry() -> InterceptorRegistry {
        InterceptorRegistry::new()
            .with("named", || Box::new(Named::default()))
            .unwrap()
    }

    fn declared(label: &str) -> PluginSection {
        PluginSection::new("Named").with_property("label", label)
    }

    #[test]
    fn test_file_order_and_disabled_skipped() {
        let mut off = declared("off");
        off.enabled = false;
        let config = Config {
            plugins: vec![declared("first"), off, declared("second")],
            ..Config::default()
        };

        let chain = build_chain(&config, &registry()).unwrap();
        assert_eq!(chain.names(), vec!["first", "second"]);
    }

    #[test]
    fn test_unknown_alias_fails() {
        let config = Config {
            plugins: vec![PluginSection::new("missing")],
            ..Config::default()
        };
        assert!(matches!(
            build_chain(&config, &registry()),
            Err(ConfigError::UnknownInterceptor { .. })
        ));
    }

    #[test]
    fn test_configure_failure_names_alias() {
        let config = Config {
            plugins: vec![PluginSection::new("named")],
            ..Config::default()
        };
        match build_chain(&config, &registry()) {
            Err(ConfigError::Plugin { alias, source }) => {
                assert_eq!(alias, "named");
                assert!(source.is_configuration());
            },
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_no_plugins_gives_empty_chain() {
        let chain = build_chain(&Config::default(), &registry()).unwrap();
        assert!(chain.is_empty());
    }
}
