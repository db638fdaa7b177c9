//! Host object registry.
//!
//! Objects registered with [`Lifetime::Persistent`] survive
//! [`ObjectRegistry::unload_unused`] and a reload of the scripting layer, so
//! state parked here can be recovered instead of rebuilt from scratch.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifetime {
    /// Dropped by the next `unload_unused`
    Transient,
    /// Kept until explicitly removed
    Persistent,
}

struct Entry {
    lifetime: Lifetime,
    value: Box<dyn Any>,
}

thread_local! {
    static OBJECTS: RefCell<HashMap<TypeId, Entry>> = RefCell::new(HashMap::new());
}

/// One object per type, owned by the host thread.
pub struct ObjectRegistry;

impl ObjectRegistry {
    /// Register `value`, replacing any object of the same type.
    pub fn register<T: Any>(value: T, lifetime: Lifetime) {
        OBJECTS.with(|objects| {
            objects.borrow_mut().insert(
                TypeId::of::<T>(),
                Entry {
                    lifetime,
                    value: Box::new(value),
                },
            );
        });
    }

    /// Clone of the registered object of type `T`.
    pub fn find<T: Any + Clone>() -> Option<T> {
        OBJECTS.with(|objects| {
            objects
                .borrow()
                .get(&TypeId::of::<T>())
                .and_then(|entry| entry.value.downcast_ref::<T>())
                .cloned()
        })
    }

    pub fn remove<T: Any>() -> Option<T> {
        OBJECTS.with(|objects| {
            objects
                .borrow_mut()
                .remove(&TypeId::of::<T>())
                .and_then(|entry| entry.value.downcast::<T>().ok())
                .map(|value| *value)
        })
    }

    pub fn lifetime_of<T: Any>() -> Option<Lifetime> {
        OBJECTS.with(|objects| {
            objects
                .borrow()
                .get(&TypeId::of::<T>())
                .map(|entry| entry.lifetime)
        })
    }

    /// Drop every transient object. Returns how many were dropped.
    pub fn unload_unused() -> usize {
        OBJECTS.with(|objects| {
            let mut objects = objects.borrow_mut();
            let before = objects.len();
            objects.retain(|_, entry| entry.lifetime == Lifetime::Persistent);
            before - objects.len()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Marker(u32);

    #[derive(Debug, Clone, PartialEq)]
    struct Scratch;

    #[test]
    fn unload_keeps_persistent_objects() {
        ObjectRegistry::register(Marker(7), Lifetime::Persistent);
        ObjectRegistry::register(Scratch, Lifetime::Transient);

        assert_eq!(ObjectRegistry::unload_unused(), 1);
        assert_eq!(ObjectRegistry::find::<Marker>(), Some(Marker(7)));
        assert_eq!(ObjectRegistry::find::<Scratch>(), None);
    }

    #[test]
    fn register_replaces_same_type() {
        ObjectRegistry::register(Marker(1), Lifetime::Transient);
        ObjectRegistry::register(Marker(2), Lifetime::Persistent);

        assert_eq!(
            ObjectRegistry::lifetime_of::<Marker>(),
            Some(Lifetime::Persistent)
        );
        assert_eq!(ObjectRegistry::remove::<Marker>(), Some(Marker(2)));
        assert_eq!(ObjectRegistry::find::<Marker>(), None);
    }
}
