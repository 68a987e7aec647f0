//! Registry of named architecture providers.
//!
//! Providers declare themselves with [`register_architecture_provider!`],
//! which submits a [`ProviderRegistration`] through `inventory`. The global
//! registry collects every submission the first time it is accessed and is
//! read-only afterwards.
//!
//! [`register_architecture_provider!`]: crate::register_architecture_provider

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use crate::error::{RegistryError, Result, SourceError};
use crate::provider::ArchitectureProvider;

/// Constructs a provider instance.
pub type ProviderFactory = fn() -> Box<dyn ArchitectureProvider>;

/// A provider declared for the global registry.
pub struct ProviderRegistration {
    /// Name the provider is resolved under (`registered:<name>`).
    pub name: &'static str,
    /// Builds the provider.
    pub factory: ProviderFactory,
}

impl ProviderRegistration {
    pub const fn new(name: &'static str, factory: ProviderFactory) -> Self {
        Self { name, factory }
    }
}

inventory::collect!(ProviderRegistration);

/// Registers a provider type under a name in the global registry.
///
/// The type must implement [`ArchitectureProvider`] and [`Default`]. Names may
/// contain `:`.
///
/// ```ignore
/// #[derive(Default)]
/// struct Mine;
/// impl ArchitectureProvider for Mine { /* ... */ }
/// register_architecture_provider!("vendor:mine", Mine);
/// ```
#[macro_export]
macro_rules! register_architecture_provider {
    ($name:expr, $provider:ty) => {
        $crate::inventory::submit! {
            $crate::registry::ProviderRegistration::new($name, || {
                ::std::boxed::Box::new(<$provider as ::std::default::Default>::default())
            })
        }
    };
}

/// How to treat a second provider registered under an existing name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Fail the build of the registry.
    #[default]
    Reject,
    /// Keep the first provider registered.
    FirstWins,
    /// Replace with the last provider registered.
    LastWins,
}

/// Accumulates providers before freezing them into a [`ProviderRegistry`].
pub struct RegistryBuilder {
    policy: DuplicatePolicy,
    providers: BTreeMap<String, Arc<dyn ArchitectureProvider>>,
    duplicate: Option<String>,
}

impl RegistryBuilder {
    /// Add a provider under `name`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        provider: impl ArchitectureProvider + 'static,
    ) -> &mut Self {
        self.insert(name.into(), Arc::new(provider))
    }

    fn insert(&mut self, name: String, provider: Arc<dyn ArchitectureProvider>) -> &mut Self {
        if !self.providers.contains_key(&name) {
            self.providers.insert(name, provider);
            return self;
        }
        match self.policy {
            DuplicatePolicy::Reject => {
                if self.duplicate.is_none() {
                    self.duplicate = Some(name);
                }
            }
            DuplicatePolicy::FirstWins => {
                tracing::warn!(%name, "duplicate architecture provider ignored");
            }
            DuplicatePolicy::LastWins => {
                tracing::warn!(%name, "duplicate architecture provider replaces earlier one");
                self.providers.insert(name, provider);
            }
        }
        self
    }

    /// Add every provider submitted with [`register_architecture_provider!`].
    ///
    /// [`register_architecture_provider!`]: crate::register_architecture_provider
    pub fn register_static(&mut self) -> &mut Self {
        for registration in inventory::iter::<ProviderRegistration> {
            let provider: Arc<dyn ArchitectureProvider> = Arc::from((registration.factory)());
            self.insert(registration.name.to_string(), provider);
        }
        self
    }

    /// Freeze the registry.
    pub fn build(self) -> std::result::Result<ProviderRegistry, RegistryError> {
        if let Some(name) = self.duplicate {
            return Err(RegistryError::DuplicateProvider { name });
        }
        tracing::debug!(count = self.providers.len(), "architecture provider registry built");
        Ok(ProviderRegistry {
            providers: self.providers,
        })
    }
}

/// Read-only mapping from provider name to provider.
pub struct ProviderRegistry {
    providers: BTreeMap<String, Arc<dyn ArchitectureProvider>>,
}

static GLOBAL: LazyLock<std::result::Result<ProviderRegistry, RegistryError>> =
    LazyLock::new(|| {
        let mut builder = ProviderRegistry::builder(DuplicatePolicy::Reject);
        builder.register_static();
        builder.build()
    });

impl ProviderRegistry {
    /// Start an empty registry with the given duplicate policy.
    pub fn builder(policy: DuplicatePolicy) -> RegistryBuilder {
        RegistryBuilder {
            policy,
            providers: BTreeMap::new(),
            duplicate: None,
        }
    }

    /// The registry of statically registered providers, built on first access.
    pub fn global() -> Result<&'static ProviderRegistry> {
        (*GLOBAL).as_ref().map_err(|e| SourceError::Registry(e.clone()))
    }

    /// Look up a provider by name.
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn ArchitectureProvider>> {
        self.providers.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.providers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arch_model::ArchitectureDescription;

    struct Fixed(&'static str);

    impl ArchitectureProvider for Fixed {
        fn produce(&self) -> Result<Arc<ArchitectureDescription>> {
            Ok(Arc::new(ArchitectureDescription::named(self.0)))
        }
    }

    #[derive(Default)]
    struct RegistryTestProvider;

    impl ArchitectureProvider for RegistryTestProvider {
        fn produce(&self) -> Result<Arc<ArchitectureDescription>> {
            Ok(Arc::new(ArchitectureDescription::named("from_registry_test")))
        }
    }

    crate::register_architecture_provider!("registry:test", RegistryTestProvider);

    fn produced_name(registry: &ProviderRegistry, name: &str) -> String {
        registry.lookup(name).unwrap().produce().unwrap().name.clone()
    }

    #[test]
    fn lookup_registered() {
        let mut builder = ProviderRegistry::builder(DuplicatePolicy::Reject);
        builder.register("a", Fixed("arch_a")).register("b:c", Fixed("arch_bc"));
        let registry = builder.build().unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("b:c"));
        assert_eq!(produced_name(&registry, "a"), "arch_a");
        assert_eq!(produced_name(&registry, "b:c"), "arch_bc");
        assert!(registry.lookup("missing").is_none());
    }

    #[test]
    fn names_are_sorted() {
        let mut builder = ProviderRegistry::builder(DuplicatePolicy::Reject);
        builder.register("zeta", Fixed("z")).register("alpha", Fixed("a"));
        let registry = builder.build().unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn duplicate_rejected() {
        let mut builder = ProviderRegistry::builder(DuplicatePolicy::Reject);
        builder.register("dup", Fixed("one")).register("dup", Fixed("two"));
        let err = builder.build().unwrap_err();
        assert_eq!(err, RegistryError::DuplicateProvider { name: "dup".into() });
        assert!(err.to_string().contains("'dup'"));
    }

    #[test]
    fn duplicate_first_wins() {
        let mut builder = ProviderRegistry::builder(DuplicatePolicy::FirstWins);
        builder.register("dup", Fixed("one")).register("dup", Fixed("two"));
        let registry = builder.build().unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(produced_name(&registry, "dup"), "one");
    }

    #[test]
    fn duplicate_last_wins() {
        let mut builder = ProviderRegistry::builder(DuplicatePolicy::LastWins);
        builder.register("dup", Fixed("one")).register("dup", Fixed("two"));
        let registry = builder.build().unwrap();
        assert_eq!(produced_name(&registry, "dup"), "two");
    }

    #[test]
    fn empty_registry() {
        let registry = ProviderRegistry::builder(DuplicatePolicy::default())
            .build()
            .unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.names().count(), 0);
    }

    #[test]
    fn global_collects_static_registrations() {
        let registry = ProviderRegistry::global().unwrap();
        assert!(registry.contains("registry:test"));
        assert!(registry.contains("builtin:x86_64"));
        assert_eq!(produced_name(registry, "registry:test"), "from_registry_test");
    }

    #[test]
    fn register_static_into_explicit_builder() {
        let mut builder = ProviderRegistry::builder(DuplicatePolicy::Reject);
        builder.register("local", Fixed("local"));
        builder.register_static();
        let registry = builder.build().unwrap();
        assert!(registry.contains("local"));
        assert!(registry.contains("registry:test"));
    }
}
