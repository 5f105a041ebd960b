//! Component Registry module.
//!
//! Thread-safe in-memory storage of the deployed components the command
//! center tracks. Entries keep insertion order and are never removed; the
//! only mutation after seeding is [`Registry::update_health`].

mod component;
mod error;

pub use component::*;
pub use error::*;

use chrono::{DateTime, Utc};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// The Component Registry stores all known components.
///
/// A single `RwLock` guards the whole list: reads clone a snapshot under the
/// shared lock, health updates overwrite one entry under the exclusive lock.
///
/// # Examples
///
/// ```
/// use command_center::registry::{Component, Registry};
/// use chrono::Utc;
///
/// let registry = Registry::new();
/// registry
///     .add_component(Component::new("portal", "Research Portal", "research", Utc::now()))
///     .unwrap();
/// assert_eq!(registry.component_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    components: RwLock<Vec<Component>>,
}

impl Registry {
    /// Create a new empty Registry.
    pub fn new() -> Self {
        Self {
            components: RwLock::new(Vec::new()),
        }
    }

    /// Build a registry from seed components, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateComponent` on the first repeated id.
    pub fn from_components(components: Vec<Component>) -> Result<Self, RegistryError> {
        let registry = Self::new();
        for component in components {
            registry.add_component(component)?;
        }
        Ok(registry)
    }

    /// Append a component to the registry.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateComponent` if a component with the same ID already exists.
    pub fn add_component(&self, component: Component) -> Result<(), RegistryError> {
        let mut components = self.write();
        if components.iter().any(|c| c.id == component.id) {
            return Err(RegistryError::DuplicateComponent(component.id));
        }
        components.push(component);
        Ok(())
    }

    /// Get a component by exact ID.
    pub fn get_component(&self, id: &str) -> Option<Component> {
        self.read().iter().find(|c| c.id == id).cloned()
    }

    /// Snapshot of all components in insertion order.
    pub fn get_all_components(&self) -> Vec<Component> {
        self.read().clone()
    }

    /// Number of registered components.
    pub fn component_count(&self) -> usize {
        self.read().len()
    }

    /// Number of components currently in `status`.
    pub fn count_by_status(&self, status: ComponentStatus) -> usize {
        self.read().iter().filter(|c| c.status == status).count()
    }

    /// Sum of `requests_per_hour` across all components.
    pub fn total_requests_per_hour(&self) -> u64 {
        self.read().iter().map(|c| c.requests_per_hour).sum()
    }

    /// Apply a partial health update and stamp `last_seen` with `now`.
    ///
    /// `last_seen` is written even when the update carries no fields.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::ComponentNotFound` if no component has the given ID.
    pub fn update_health(
        &self,
        id: &str,
        update: HealthUpdate,
        now: DateTime<Utc>,
    ) -> Result<Component, RegistryError> {
        let mut components = self.write();
        let component = components
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| RegistryError::ComponentNotFound(id.to_string()))?;

        if let Some(status) = update.status {
            component.status = status;
        }
        if let Some(health) = update.health {
            component.health = health;
        }
        component.last_seen = now;

        tracing::debug!(
            component_id = %id,
            status = %component.status,
            health = component.health,
            "Component health updated"
        );

        Ok(component.clone())
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Component>> {
        match self.components.read() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("Registry lock poisoned on read, recovering");
                poisoned.into_inner()
            }
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Component>> {
        match self.components.write() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("Registry lock poisoned on write, recovering");
                poisoned.into_inner()
            }
        }
    }
}
