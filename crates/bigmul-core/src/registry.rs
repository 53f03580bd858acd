//! Algorithm factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::algorithm::{Algorithm, CodecError};
use crate::karatsuba::Karatsuba;
use crate::schonhage::SchonhageStrassen;
use crate::toom_cook::ToomCook3;

/// Factory trait for looking up algorithms by name.
pub trait AlgorithmFactory: Send + Sync {
    /// Get or create an algorithm by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Algorithm>, CodecError>;

    /// List the canonical algorithm names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn Algorithm>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Map an accepted alias to its canonical name.
    fn canonical(name: &str) -> Option<&'static str> {
        match name.to_ascii_lowercase().as_str() {
            "karatsuba" => Some("karatsuba"),
            "toom" | "toom3" | "toom-cook" => Some("toom"),
            "ssa" | "schonhage" | "schonhage-strassen" => Some("ssa"),
            _ => None,
        }
    }

    fn create_algorithm(canonical: &str) -> Arc<dyn Algorithm> {
        match canonical {
            "karatsuba" => Arc::new(Karatsuba::new()),
            "toom" => Arc::new(ToomCook3::new()),
            _ => Arc::new(SchonhageStrassen::new()),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl AlgorithmFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Algorithm>, CodecError> {
        let canonical = Self::canonical(name)
            .ok_or_else(|| CodecError::Config(format!("unknown algorithm: {name}")))?;

        if let Some(algorithm) = self.cache.read().get(canonical) {
            return Ok(Arc::clone(algorithm));
        }

        let algorithm = Self::create_algorithm(canonical);
        self.cache
            .write()
            .insert(canonical.to_string(), Arc::clone(&algorithm));
        Ok(algorithm)
    }

    fn available(&self) -> Vec<&str> {
        vec!["karatsuba", "toom", "ssa"]
    }
}
