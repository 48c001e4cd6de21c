//! Endpoint module registry

use crate::domain::status::StatusCode;
use tracing::debug;

/// Priority of the transport layer; lower values see messages first
pub const PRIORITY_TRANSPORT_LAYER: u32 = 8;
/// Priority of application modules
pub const PRIORITY_APPLICATION: u32 = 64;

/// A module attached to the endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub name: String,
    pub priority: u32,
}

impl Module {
    pub fn new(name: impl Into<String>, priority: u32) -> Self {
        Self {
            name: name.into(),
            priority,
        }
    }
}

/// Modules every endpoint registers on create
pub fn builtin_modules() -> Vec<Module> {
    vec![
        Module::new("mod-pjsua-log", PRIORITY_TRANSPORT_LAYER - 1),
        Module::new("mod-pjsua", PRIORITY_APPLICATION),
        Module::new("mod-pjsua-im", PRIORITY_APPLICATION),
        Module::new("mod-pjsua-pres", PRIORITY_APPLICATION - 1),
    ]
}

/// Registered modules, kept ordered by priority
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    modules: Vec<Module>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module; names are unique within the endpoint
    pub fn register(&mut self, module: Module) -> Result<(), StatusCode> {
        if self.modules.iter().any(|m| m.name == module.name) {
            return Err(StatusCode::PJ_EEXISTS);
        }

        debug!(module = %module.name, priority = module.priority, "Registered module");
        // Equal priorities keep registration order
        let index = self
            .modules
            .partition_point(|m| m.priority <= module.priority);
        self.modules.insert(index, module);
        Ok(())
    }

    /// Unregister everything, highest priority value first; returns the names in removal order
    pub fn unregister_all(&mut self) -> Vec<String> {
        let mut removed = Vec::with_capacity(self.modules.len());
        while let Some(module) = self.modules.pop() {
            debug!(module = %module.name, "Unregistered module");
            removed.push(module.name);
        }
        removed
    }

    pub fn names(&self) -> Vec<&str> {
        self.modules.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_orders_by_priority() {
        let mut registry = ModuleRegistry::new();
        for module in builtin_modules() {
            registry.register(module).unwrap();
        }

        assert_eq!(
            registry.names(),
            vec!["mod-pjsua-log", "mod-pjsua-pres", "mod-pjsua", "mod-pjsua-im"]
        );
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = ModuleRegistry::new();
        registry.register(Module::new("mod-pjsua", 64)).unwrap();
        assert_eq!(
            registry.register(Module::new("mod-pjsua", 32)),
            Err(StatusCode::PJ_EEXISTS)
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregister_all_reverse_order() {
        let mut registry = ModuleRegistry::new();
        for module in builtin_modules() {
            registry.register(module).unwrap();
        }

        let removed = registry.unregister_all();
        assert_eq!(
            removed,
            vec!["mod-pjsua-im", "mod-pjsua", "mod-pjsua-pres", "mod-pjsua-log"]
        );
        assert!(registry.is_empty());
    }
}
