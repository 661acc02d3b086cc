use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use warehouse_core::DomainResult;

use crate::category::Category;
use crate::item::{Item, NewItem};
use crate::register::ItemRegister;

/// Cloneable, thread-safe handle to a single [`ItemRegister`].
///
/// Every mutation (including sorts) runs under the write lock, so scans never
/// interleave with structural changes. Reads take the read lock and return
/// copies, like the register itself.
#[derive(Debug, Clone, Default)]
pub struct SharedRegister {
    inner: Arc<RwLock<ItemRegister>>,
}

impl SharedRegister {
    pub fn new(register: ItemRegister) -> Self {
        Self {
            inner: Arc::new(RwLock::new(register)),
        }
    }

    // A panic mid-operation cannot leave the register half-updated: every
    // operation validates before it writes. Poisoning is therefore ignored.
    fn read(&self) -> RwLockReadGuard<'_, ItemRegister> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ItemRegister> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run a read-only closure against the register.
    pub fn read_with<T>(&self, f: impl FnOnce(&ItemRegister) -> T) -> T {
        f(&self.read())
    }

    /// Run a closure with exclusive access to the register.
    pub fn write_with<T>(&self, f: impl FnOnce(&mut ItemRegister) -> T) -> T {
        f(&mut self.write())
    }

    pub fn exists(&self, item_number: &str) -> bool {
        self.read().exists(item_number)
    }

    pub fn add(&self, fields: NewItem) -> DomainResult<Item> {
        self.write().add(fields)
    }

    pub fn get_by_item_number(&self, item_number: &str) -> DomainResult<Item> {
        self.read().get_by_item_number(item_number)
    }

    pub fn get_by_description(&self, text: &str) -> Vec<Item> {
        self.read().get_by_description(text)
    }

    pub fn get_by_item_number_and_description(
        &self,
        item_number: &str,
        text: &str,
    ) -> DomainResult<Item> {
        self.read().get_by_item_number_and_description(item_number, text)
    }

    pub fn get_by_category(&self, category: Category) -> Vec<Item> {
        self.read().get_by_category(category)
    }

    pub fn get_by_price_range(&self, low: f64, high: f64) -> Vec<Item> {
        self.read().get_by_price_range(low, high)
    }

    pub fn list(&self) -> Vec<Item> {
        self.read().list()
    }

    pub fn increase_stock(&self, item_number: &str, amount: i64) -> DomainResult<i64> {
        self.write().increase_stock(item_number, amount)
    }

    pub fn decrease_stock(&self, item_number: &str, amount: i64) -> DomainResult<i64> {
        self.write().decrease_stock(item_number, amount)
    }

    pub fn set_price(&self, item_number: &str, price: f64) -> DomainResult<()> {
        self.write().set_price(item_number, price)
    }

    pub fn apply_discount(&self, item_number: &str, percent: f64) -> DomainResult<f64> {
        self.write().apply_discount(item_number, percent)
    }

    pub fn set_description(
        &self,
        item_number: &str,
        description: impl Into<String>,
    ) -> DomainResult<()> {
        self.write().set_description(item_number, description)
    }

    // The guard is released on return, so sorts hand back a copy of the
    // reordered sequence rather than a live view.

    pub fn sort_by_price(&self) -> Vec<Item> {
        self.write().sort_by_price().to_vec()
    }

    pub fn sort_by_color(&self) -> Vec<Item> {
        self.write().sort_by_color().to_vec()
    }

    pub fn sort_by_brand_name(&self) -> Vec<Item> {
        self.write().sort_by_brand_name().to_vec()
    }

    pub fn count(&self) -> usize {
        self.read().count()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn total_units(&self) -> i64 {
        self.read().total_units()
    }

    pub fn delete(&self, item_number: &str) -> DomainResult<Item> {
        self.write().delete(item_number)
    }

    pub fn seed_defaults(&self) -> DomainResult<usize> {
        self.write().seed_defaults()
    }
}
