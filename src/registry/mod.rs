//! Method registry — the single source of truth for documented API methods.
//!
//! The registry is loaded from `method-registry.json` which is embedded at
//! compile time via `include_str!`. It holds one [`ServiceDescriptor`] per
//! documented gRPC service, each carrying its methods in declaration order.
//! Downstream renderers rely on that order for deterministic grouping without
//! re-sorting.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static EMBEDDED: Lazy<MethodRegistry> = Lazy::new(|| {
    let json = include_str!("../../method-registry.json");
    serde_json::from_str(json).expect("method-registry.json is invalid — this is a build-time bug")
});

/// A single documented API method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    pub category: String,
    pub description: String,
}

/// A logical grouping of methods belonging to one gRPC service.
///
/// The method count is always derived from `methods.len()` rather than stored
/// as a separate literal, so the rendered numbers cannot drift from the actual
/// method list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub name: String,
    pub description: String,
    /// Category labels in presentation order, used for the service header.
    pub categories: Vec<String>,
    pub methods: Vec<MethodDescriptor>,
}

impl ServiceDescriptor {
    /// Number of methods this service documents.
    pub fn method_count(&self) -> usize {
        self.methods.len()
    }

    /// Group methods by category, preserving first-seen category order and
    /// declaration order within each category.
    pub fn methods_by_category(&self) -> Vec<(&str, Vec<&MethodDescriptor>)> {
        let mut groups: Vec<(&str, Vec<&MethodDescriptor>)> = Vec::new();
        for method in &self.methods {
            match groups.iter_mut().find(|(cat, _)| *cat == method.category) {
                Some((_, methods)) => methods.push(method),
                None => groups.push((method.category.as_str(), vec![method])),
            }
        }
        groups
    }
}

/// The method registry containing all documented services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodRegistry {
    pub version: String,
    pub services: Vec<ServiceDescriptor>,
}

impl MethodRegistry {
    /// The registry parsed from the compile-time embedded JSON.
    pub fn embedded() -> &'static MethodRegistry {
        &EMBEDDED
    }

    /// Look up a service descriptor by name.
    pub fn get_service(&self, name: &str) -> Option<&ServiceDescriptor> {
        self.services.iter().find(|s| s.name == name)
    }

    /// Total number of methods across all services.
    pub fn total_method_count(&self) -> usize {
        self.services.iter().map(|s| s.method_count()).sum()
    }

    /// Check the registry for internal inconsistencies.
    ///
    /// Returns a list of warnings (never blocks generation): duplicate method
    /// names within a service, declared categories with no methods, and
    /// method categories missing from the service's declared category list.
    pub fn validate(&self) -> Vec<RegistryWarning> {
        let mut warnings = Vec::new();

        for service in &self.services {
            for (i, method) in service.methods.iter().enumerate() {
                if service.methods[..i].iter().any(|m| m.name == method.name) {
                    warnings.push(RegistryWarning {
                        service: service.name.clone(),
                        detail: format!("duplicate method name '{}'", method.name),
                    });
                }
                if !service.categories.contains(&method.category) {
                    warnings.push(RegistryWarning {
                        service: service.name.clone(),
                        detail: format!(
                            "method '{}' uses category '{}' not declared by the service",
                            method.name, method.category
                        ),
                    });
                }
            }

            for category in &service.categories {
                if !service.methods.iter().any(|m| &m.category == category) {
                    warnings.push(RegistryWarning {
                        service: service.name.clone(),
                        detail: format!("declared category '{}' has no methods", category),
                    });
                }
            }
        }

        warnings
    }
}

/// A warning produced when validating the registry's internal consistency.
#[derive(Debug, Clone)]
pub struct RegistryWarning {
    pub service: String,
    pub detail: String,
}

impl std::fmt::Display for RegistryWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Service '{}': {}", self.service, self.detail)
    }
}
