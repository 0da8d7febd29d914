// ============================================================================
// STORAGE - Backends de almacenamiento clave/valor
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::{window, Storage};

/// Storage clave/valor de strings. Cada llamada es una sola operación sobre
/// el almacén subyacente.
pub trait StorageBackend {
    fn get_raw(&self, key: &str) -> Option<String>;
    fn set_raw(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// `localStorage` del navegador.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalStorageBackend;

impl StorageBackend for LocalStorageBackend {
    fn get_raw(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = get_local_storage().ok_or("localStorage is not available")?;
        storage
            .set_item(key, value)
            .map_err(|_| "Error writing to localStorage".to_string())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        let storage = get_local_storage().ok_or("localStorage is not available")?;
        storage
            .remove_item(key)
            .map_err(|_| "Error removing from localStorage".to_string())
    }
}

/// Storage en memoria compartido entre clones. Para tests y cuando el
/// navegador niega `localStorage` (modo privado, iframes con sandbox).
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), String> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Backend elegido al arrancar.
#[derive(Clone, Debug)]
pub enum BrowserStorage {
    Local(LocalStorageBackend),
    Memory(MemoryStorage),
}

impl BrowserStorage {
    pub fn detect() -> Self {
        if get_local_storage().is_some() {
            BrowserStorage::Local(LocalStorageBackend)
        } else {
            log::warn!("⚠️ localStorage no disponible, la sesión solo vivirá en memoria");
            BrowserStorage::Memory(MemoryStorage::new())
        }
    }
}

impl StorageBackend for BrowserStorage {
    fn get_raw(&self, key: &str) -> Option<String> {
        match self {
            BrowserStorage::Local(s) => s.get_raw(key),
            BrowserStorage::Memory(s) => s.get_raw(key),
        }
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), String> {
        match self {
            BrowserStorage::Local(s) => s.set_raw(key, value),
            BrowserStorage::Memory(s) => s.set_raw(key, value),
        }
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        match self {
            BrowserStorage::Local(s) => s.remove(key),
            BrowserStorage::Memory(s) => s.remove(key),
        }
    }
}
