//! Prototype: a registry of pre-configured instances that hands out deep
//! copies instead of constructing from scratch.

use std::collections::HashMap;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PrototypeKind {
    First,
    Second,
}

/// Object-safe cloning plus the sample operation. The registry only ever
/// sees this interface, so concrete fields stay invisible to it; `clone_box`
/// still copies all of them.
pub trait Prototype {
    fn clone_box(&self) -> Box<dyn Prototype>;

    /// Stores the value and narrates the call.
    fn call_with(&mut self, value: f32) -> String;

    fn field(&self) -> f32;
}

#[derive(Clone)]
pub struct FirstPrototype {
    name: String,
    field: f32,
    // Not reachable through the trait at all; cloning must carry it anyway.
    calibration: f32,
}

impl FirstPrototype {
    pub fn new(name: impl Into<String>, field: f32) -> Self {
        Self {
            name: name.into(),
            field,
            calibration: field / 2.0,
        }
    }
}

impl Prototype for FirstPrototype {
    fn clone_box(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn call_with(&mut self, value: f32) -> String {
        self.field = value;
        format!("Call method from {} with field: {}", self.name, self.field)
    }

    fn field(&self) -> f32 {
        self.field
    }
}

#[derive(Clone)]
pub struct SecondPrototype {
    name: String,
    field: f32,
    calibration: f32,
}

impl SecondPrototype {
    pub fn new(name: impl Into<String>, field: f32) -> Self {
        Self {
            name: name.into(),
            field,
            calibration: field * 2.0,
        }
    }
}

impl Prototype for SecondPrototype {
    fn clone_box(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn call_with(&mut self, value: f32) -> String {
        self.field = value;
        format!("Call method from {} with field: {}", self.name, self.field)
    }

    fn field(&self) -> f32 {
        self.field
    }
}

/// Maps each kind to one pre-configured prototype and clones on demand.
pub struct PrototypeRegistry {
    prototypes: HashMap<PrototypeKind, Box<dyn Prototype>>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        let mut prototypes: HashMap<PrototypeKind, Box<dyn Prototype>> = HashMap::new();
        prototypes.insert(
            PrototypeKind::First,
            Box::new(FirstPrototype::new("PROTOTYPE_1", 50.0)),
        );
        prototypes.insert(
            PrototypeKind::Second,
            Box::new(SecondPrototype::new("PROTOTYPE_2", 70.0)),
        );
        Self { prototypes }
    }

    pub fn create(&self, kind: PrototypeKind) -> Option<Box<dyn Prototype>> {
        self.prototypes.get(&kind).map(|p| p.clone_box())
    }
}

impl Default for PrototypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_clones_its_stored_prototypes() {
        let registry = PrototypeRegistry::new();
        let mut clone = registry.create(PrototypeKind::First).unwrap();
        assert_eq!(clone.field(), 50.0);
        assert_eq!(
            clone.call_with(90.0),
            "Call method from PROTOTYPE_1 with field: 90"
        );
    }

    #[test]
    fn mutating_a_clone_leaves_the_registry_untouched() {
        let registry = PrototypeRegistry::new();
        let mut clone = registry.create(PrototypeKind::Second).unwrap();
        clone.call_with(10.0);
        assert_eq!(clone.field(), 10.0);

        let fresh = registry.create(PrototypeKind::Second).unwrap();
        assert_eq!(fresh.field(), 70.0);
    }

    #[test]
    fn cloning_preserves_fields_the_registry_cannot_see() {
        let original = FirstPrototype::new("PROTOTYPE_1", 50.0);
        // Same module, so the private field is checkable here.
        let clone = original.clone();
        assert_eq!(clone.calibration, original.calibration);
        assert_eq!(SecondPrototype::new("PROTOTYPE_2", 70.0).calibration, 140.0);
    }

    #[test]
    fn unknown_kind_yields_nothing() {
        let registry = PrototypeRegistry {
            prototypes: HashMap::new(),
        };
        assert!(registry.create(PrototypeKind::First).is_none());
    }
}
