//! Registration types for inventory-based component discovery.
//!
//! Hosts look components up by their static name (the custom tag they are
//! mounted under). Each widget module submits its own registration.

/// Trait for anything registrable as a component.
pub trait Component: Send + Sync {
    /// Static component name used for registry lookups and diagnostics.
    fn component_name(&self) -> &'static str;
}

/// Component registration entry for inventory.
pub struct ComponentRegistration {
    /// Component name.
    pub name: &'static str,
    /// Factory function to create a default-configured instance.
    pub factory: fn() -> Box<dyn Component>,
}

impl ComponentRegistration {
    /// Create a new component registration.
    pub const fn new(name: &'static str, factory: fn() -> Box<dyn Component>) -> Self {
        Self { name, factory }
    }
}

inventory::collect!(ComponentRegistration);

/// Get all registered components.
pub fn registered_components() -> impl Iterator<Item = &'static ComponentRegistration> {
    inventory::iter::<ComponentRegistration>()
}

/// Look up a registration by component name.
pub fn find_component(name: &str) -> Option<&'static ComponentRegistration> {
    registered_components().find(|registration| registration.name == name)
}
