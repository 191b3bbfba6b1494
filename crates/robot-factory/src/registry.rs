//! # Prototype Registry
//!
//! This module defines the `RobotRegistry`, the factory that owns one
//! prototype robot per key and produces independent copies on demand.
//!
//! # Architecture Note
//! The registry is the "Prototype" pattern with a string-keyed lookup: instead
//! of constructing robots from parameters, callers register a fully built
//! template once and the factory stamps out value copies of it. Keys are
//! normalized so qualified type paths (`model::Scout`) stay valid flat map
//! keys and valid fragments of a dispatched method name (`createmodel_Scout`).

use crate::entity::Robot;
use crate::error::FactoryError;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Replaces Rust's `::` path separator with `_`.
///
/// Applied to every key on registration and lookup, so `model::Scout` and
/// `model_Scout` name the same prototype.
pub fn normalize_key(raw: &str) -> String {
    raw.replace("::", "_")
}

/// Keyed collection of robot prototypes supporting bulk creation.
///
/// Built incrementally by the caller and kept for the duration of the
/// program; there is no deletion operation. Single-threaded by design: plain
/// `&mut self` mutation, no interior mutability.
#[derive(Debug, Default)]
pub struct RobotRegistry {
    prototypes: HashMap<String, Box<dyn Robot>>,
}

impl RobotRegistry {
    pub fn new() -> Self {
        Self {
            prototypes: HashMap::new(),
        }
    }

    /// Stores `prototype` under the normalized `key`.
    ///
    /// Fails with [`FactoryError::DuplicateKey`] if the key is already taken;
    /// the previously stored prototype is left untouched in that case.
    pub fn register(&mut self, key: &str, prototype: Box<dyn Robot>) -> Result<(), FactoryError> {
        let key = normalize_key(key);
        if self.prototypes.contains_key(&key) {
            warn!(%key, "Prototype already registered");
            return Err(FactoryError::DuplicateKey(key));
        }
        debug!(%key, ?prototype, "Registering prototype");
        self.prototypes.insert(key.clone(), prototype);
        info!(%key, size = self.prototypes.len(), "Prototype registered");
        Ok(())
    }

    /// Returns exactly `count` independent copies of the prototype stored
    /// under `key`.
    ///
    /// Copies are value-independent: mutating one never affects another or
    /// the stored prototype. Fails with [`FactoryError::InvalidCount`] when
    /// `count` is zero and [`FactoryError::UnknownKey`] when no prototype was
    /// registered under the normalized key.
    pub fn create(&self, key: &str, count: usize) -> Result<Vec<Box<dyn Robot>>, FactoryError> {
        if count == 0 {
            warn!(key, "Creation requested with zero count");
            return Err(FactoryError::InvalidCount(0));
        }
        let key = normalize_key(key);
        let prototype = self
            .prototypes
            .get(&key)
            .ok_or_else(|| FactoryError::UnknownKey(key.clone()))?;
        let robots: Vec<Box<dyn Robot>> = (0..count).map(|_| prototype.clone_robot()).collect();
        info!(%key, count, "Created robots");
        Ok(robots)
    }

    /// Creation through a runtime-provided method name, the way the original
    /// program exposed it.
    ///
    /// Accepts exactly the shape `create<Key>` with one positive integer
    /// argument and forwards to [`RobotRegistry::create`]; any other call
    /// shape fails with [`FactoryError::InvalidMethod`]. An unknown key still
    /// surfaces as [`FactoryError::UnknownKey`].
    pub fn dispatch(&self, method: &str, args: &[i64]) -> Result<Vec<Box<dyn Robot>>, FactoryError> {
        let key = match method.strip_prefix("create") {
            Some(rest) if !rest.is_empty() => rest,
            _ => return Err(FactoryError::InvalidMethod(method.to_string())),
        };
        match args {
            [count] if *count > 0 => {
                debug!(method, count = *count, "Dispatching creation call");
                self.create(key, *count as usize)
            }
            _ => Err(FactoryError::InvalidMethod(method.to_string())),
        }
    }

    /// Number of registered prototypes.
    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }
}
