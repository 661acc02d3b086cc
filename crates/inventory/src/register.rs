use warehouse_core::{DomainError, DomainResult, Entity};

use crate::category::Category;
use crate::item::{Item, NewItem};
use crate::seed;

/// In-memory register of every stocked item.
///
/// The register is the only owner of its items. Reads hand out clones, so a
/// caller can never reach stored state through a returned value. Items keep
/// insertion order until one of the `sort_by_*` operations reorders the
/// sequence in place.
///
/// Item numbers are unique, compared case-insensitively.
///
/// Mutators (`set_price`, `apply_discount`, `set_description`) trust the
/// caller: they overwrite without re-validating. Stock changes are the
/// exception and never let the count go below zero.
#[derive(Debug, Clone, Default)]
pub struct ItemRegister {
    items: Vec<Item>,
}

impl ItemRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if any stored item has this number (case-insensitive).
    pub fn exists(&self, item_number: &str) -> bool {
        self.position(item_number).is_some()
    }

    /// Validate the fields and append the new item.
    ///
    /// Validation runs first; then a number already in use fails with
    /// `DuplicateIdentifier` and the register is left untouched.
    pub fn add(&mut self, fields: NewItem) -> DomainResult<Item> {
        let item = Item::new(fields)?;
        if self.exists(item.id().as_str()) {
            tracing::warn!(item_number = %item.id(), "rejected duplicate item number");
            return Err(DomainError::duplicate(item.id().as_str()));
        }
        tracing::debug!(
            item_number = %item.id(),
            category = %item.category(),
            stock = item.stock(),
            "item registered"
        );
        self.items.push(item.clone());
        Ok(item)
    }

    pub fn get_by_item_number(&self, item_number: &str) -> DomainResult<Item> {
        self.find(item_number)
            .cloned()
            .ok_or_else(|| DomainError::not_found(item_number))
    }

    /// Every item whose description contains `text`, ignoring case.
    pub fn get_by_description(&self, text: &str) -> Vec<Item> {
        let needle = text.to_lowercase();
        self.collect(|item| description_contains(item, &needle))
    }

    pub fn get_by_item_number_and_description(
        &self,
        item_number: &str,
        text: &str,
    ) -> DomainResult<Item> {
        let needle = text.to_lowercase();
        self.items
            .iter()
            .find(|item| item.id().matches(item_number) && description_contains(item, &needle))
            .cloned()
            .ok_or_else(|| DomainError::not_found(item_number))
    }

    pub fn get_by_category(&self, category: Category) -> Vec<Item> {
        self.collect(|item| item.category() == category)
    }

    /// Items priced within `[low, high]`, inclusive on both ends.
    ///
    /// `low > high` simply matches nothing; rejecting it is the caller's call.
    pub fn get_by_price_range(&self, low: f64, high: f64) -> Vec<Item> {
        self.collect(|item| item.price() >= low && item.price() <= high)
    }

    /// Copies of every item, in store order.
    pub fn list(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Add `amount` to the stock count and return the new count.
    pub fn increase_stock(&mut self, item_number: &str, amount: i64) -> DomainResult<i64> {
        self.change_stock(item_number, amount, |stock| stock.checked_add(amount))
    }

    /// Subtract `amount` from the stock count and return the new count.
    ///
    /// Fails with `InvalidQuantity` if fewer than `amount` are in storage;
    /// the stored count is left as it was.
    pub fn decrease_stock(&mut self, item_number: &str, amount: i64) -> DomainResult<i64> {
        self.change_stock(item_number, amount.saturating_neg(), |stock| {
            stock.checked_sub(amount)
        })
    }

    fn change_stock(
        &mut self,
        item_number: &str,
        delta: i64,
        apply: impl FnOnce(i64) -> Option<i64>,
    ) -> DomainResult<i64> {
        let item = self.find_mut(item_number)?;
        let current = item.stock();
        let Some(updated) = apply(current).filter(|stock| *stock >= 0) else {
            tracing::warn!(item_number = %item.id(), current, delta, "rejected stock change");
            return Err(DomainError::invalid_quantity(item.id().as_str(), current, delta));
        };
        item.set_stock(updated);
        tracing::debug!(item_number = %item.id(), stock = updated, delta, "stock changed");
        Ok(updated)
    }

    /// Overwrite the price. The value is not checked.
    pub fn set_price(&mut self, item_number: &str, price: f64) -> DomainResult<()> {
        let item = self.find_mut(item_number)?;
        item.set_price(price);
        tracing::debug!(item_number = %item.id(), price, "price changed");
        Ok(())
    }

    /// Reduce the price by `percent` and return the new price.
    ///
    /// Any percentage is applied as given; bounds are the caller's concern.
    pub fn apply_discount(&mut self, item_number: &str, percent: f64) -> DomainResult<f64> {
        let item = self.find_mut(item_number)?;
        let price = item.price() * (1.0 - percent / 100.0);
        item.set_price(price);
        tracing::debug!(item_number = %item.id(), percent, price, "discount applied");
        Ok(price)
    }

    pub fn set_description(
        &mut self,
        item_number: &str,
        description: impl Into<String>,
    ) -> DomainResult<()> {
        let item = self.find_mut(item_number)?;
        item.set_description(description);
        tracing::debug!(item_number = %item.id(), "description changed");
        Ok(())
    }

    /// Reorder the register by ascending price and return the live sequence.
    ///
    /// The sort is stable. The returned slice borrows the register, so it
    /// reflects stored state and cannot outlive the next mutation.
    pub fn sort_by_price(&mut self) -> &[Item] {
        self.items.sort_by(|a, b| a.price().total_cmp(&b.price()));
        tracing::debug!(items = self.items.len(), "sorted by price");
        &self.items
    }

    pub fn sort_by_color(&mut self) -> &[Item] {
        self.items.sort_by(|a, b| a.color().cmp(b.color()));
        tracing::debug!(items = self.items.len(), "sorted by color");
        &self.items
    }

    pub fn sort_by_brand_name(&mut self) -> &[Item] {
        self.items.sort_by(|a, b| a.brand_name().cmp(b.brand_name()));
        tracing::debug!(items = self.items.len(), "sorted by brand name");
        &self.items
    }

    /// Number of distinct item records.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of stock counts across every record.
    pub fn total_units(&self) -> i64 {
        self.items.iter().map(Item::stock).sum()
    }

    /// Remove the item and hand it back.
    pub fn delete(&mut self, item_number: &str) -> DomainResult<Item> {
        let index = self
            .position(item_number)
            .ok_or_else(|| DomainError::not_found(item_number))?;
        let removed = self.items.remove(index);
        tracing::debug!(item_number = %removed.id(), "item deleted");
        Ok(removed)
    }

    /// Insert the sample stock from [`seed::default_items`].
    ///
    /// All-or-nothing: if any sample is invalid or its number is already
    /// taken, nothing is inserted. Returns the number of items added.
    pub fn seed_defaults(&mut self) -> DomainResult<usize> {
        let mut batch: Vec<Item> = Vec::new();
        for fields in seed::default_items() {
            let item = Item::new(fields)?;
            let number = item.id().as_str();
            if self.exists(number) || batch.iter().any(|staged| staged.same_identity(&item)) {
                return Err(DomainError::duplicate(number));
            }
            batch.push(item);
        }
        let added = batch.len();
        self.items.extend(batch);
        tracing::debug!(added, "default items seeded");
        Ok(added)
    }

    fn position(&self, item_number: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id().matches(item_number))
    }

    fn find(&self, item_number: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id().matches(item_number))
    }

    fn find_mut(&mut self, item_number: &str) -> DomainResult<&mut Item> {
        self.items
            .iter_mut()
            .find(|item| item.id().matches(item_number))
            .ok_or_else(|| DomainError::not_found(item_number))
    }

    fn collect(&self, predicate: impl Fn(&Item) -> bool) -> Vec<Item> {
        self.items.iter().filter(|item| predicate(item)).cloned().collect()
    }
}

fn description_contains(item: &Item, lowercase_needle: &str) -> bool {
    item.description().to_lowercase().contains(lowercase_needle)
}
