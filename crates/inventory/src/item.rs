use serde::{Deserialize, Serialize};

use warehouse_core::{DomainError, DomainResult, Entity, ItemNumber};

use crate::category::Category;

/// Raw field values for a new item, as collected from the caller.
///
/// Nothing here is validated yet; `Item::new` does that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub item_number: String,
    pub brand_name: String,
    /// Menu code, 1-4.
    pub category: i32,
    pub price: f64,
    pub description: String,
    pub color: String,
    pub weight: f64,
    pub length: f64,
    pub height: f64,
    pub stock: i64,
}

/// One stocked product line.
///
/// Identity (item number, brand, category, color, dimensions) is fixed at
/// construction. Price, stock and description can be overwritten through the
/// setters, which do not re-validate. Only `Item::new` builds one, so there
/// is no `Deserialize`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    item_number: ItemNumber,
    brand_name: String,
    category: Category,
    price: f64,
    description: String,
    color: String,
    weight: f64,
    length: f64,
    height: f64,
    stock: i64,
}

impl Item {
    /// Validate every field and build the item.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// item number, brand name, price, weight, length, height, stock, category.
    pub fn new(fields: NewItem) -> DomainResult<Self> {
        let item_number = ItemNumber::new(fields.item_number)?;
        if fields.brand_name.trim().is_empty() {
            return Err(DomainError::validation("brand name", "can't be left blank"));
        }
        if fields.price.is_nan() || fields.price < 0.0 {
            return Err(DomainError::validation("price", "can't be a negative number"));
        }
        ensure_positive("weight", fields.weight)?;
        ensure_positive("length", fields.length)?;
        ensure_positive("height", fields.height)?;
        if fields.stock < 0 {
            return Err(DomainError::validation(
                "number of items",
                "can't be a negative number",
            ));
        }
        let category = Category::from_code(fields.category)?;

        Ok(Self {
            item_number,
            brand_name: fields.brand_name,
            category,
            price: fields.price,
            description: fields.description,
            color: fields.color,
            weight: fields.weight,
            length: fields.length,
            height: fields.height,
            stock: fields.stock,
        })
    }

    pub fn item_number(&self) -> &ItemNumber {
        &self.item_number
    }

    pub fn brand_name(&self) -> &str {
        &self.brand_name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    /// Overwrites the price. No validation: the caller decides what is acceptable.
    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    /// Overwrites the stock count. No validation.
    pub fn set_stock(&mut self, stock: i64) {
        self.stock = stock;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Condensed one-line rendering used for listings.
    pub fn summary(&self) -> Summary<'_> {
        Summary(self)
    }
}

fn ensure_positive(field: &'static str, value: f64) -> DomainResult<()> {
    // NaN fails this comparison as well.
    if value > 0.0 {
        Ok(())
    } else {
        Err(DomainError::validation(field, "can't be 0 or a negative number"))
    }
}

impl Entity for Item {
    type Id = ItemNumber;

    fn id(&self) -> &Self::Id {
        &self.item_number
    }
}

/// Full two-line rendering listing every field.
impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Item number: {}, Brand name: {}, Category: {}, Price: {} kr, \
             Description: {}, Color: {},\n\
             Weight: {} kg, Length: {} m, Height: {} m, Number of items: {}",
            self.item_number,
            self.brand_name,
            self.category,
            self.price,
            self.description,
            self.color,
            self.weight,
            self.length,
            self.height,
            self.stock,
        )
    }
}

/// Single-line view of an item: number, brand, category, price, color, stock.
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a>(&'a Item);

impl core::fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let item = self.0;
        write!(
            f,
            "Item number: {}, Brand name: {}, Category: {} ({} kr), Color: {}, Number of items: {}",
            item.item_number,
            item.brand_name,
            item.category,
            item.price,
            item.color,
            item.stock,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flooring() -> NewItem {
        NewItem {
            item_number: "477B".to_string(),
            brand_name: "Andersen's Laminate Flooring".to_string(),
            category: 1,
            price: 1000.0,
            description: "Big and heavy".to_string(),
            color: "white".to_string(),
            weight: 1.2,
            length: 1.4,
            height: 1.2,
            stock: 102,
        }
    }

    fn rejected_field(fields: NewItem) -> &'static str {
        Item::new(fields)
            .unwrap_err()
            .field()
            .expect("expected a validation error")
    }

    #[test]
    fn valid_fields_build_an_item() {
        let item = Item::new(flooring()).unwrap();
        assert_eq!(item.item_number().as_str(), "477B");
        assert_eq!(item.category(), Category::LaminateFlooring);
        assert_eq!(item.price(), 1000.0);
        assert_eq!(item.stock(), 102);
    }

    #[test]
    fn zero_price_and_zero_stock_are_allowed() {
        let item = Item::new(NewItem {
            price: 0.0,
            stock: 0,
            ..flooring()
        })
        .unwrap();
        assert_eq!(item.price(), 0.0);
        assert_eq!(item.stock(), 0);
    }

    #[test]
    fn each_invalid_field_is_reported() {
        assert_eq!(
            rejected_field(NewItem { item_number: " ".into(), ..flooring() }),
            "item number"
        );
        assert_eq!(
            rejected_field(NewItem { brand_name: "".into(), ..flooring() }),
            "brand name"
        );
        assert_eq!(rejected_field(NewItem { price: -0.01, ..flooring() }), "price");
        assert_eq!(rejected_field(NewItem { price: f64::NAN, ..flooring() }), "price");
        assert_eq!(rejected_field(NewItem { weight: 0.0, ..flooring() }), "weight");
        assert_eq!(rejected_field(NewItem { length: -1.0, ..flooring() }), "length");
        assert_eq!(rejected_field(NewItem { height: 0.0, ..flooring() }), "height");
        assert_eq!(rejected_field(NewItem { stock: -1, ..flooring() }), "number of items");
        assert_eq!(rejected_field(NewItem { category: 5, ..flooring() }), "category");
    }

    #[test]
    fn first_failing_check_wins() {
        let everything_wrong = NewItem {
            item_number: "".into(),
            brand_name: "".into(),
            category: 0,
            price: -1.0,
            weight: 0.0,
            length: 0.0,
            height: 0.0,
            stock: -1,
            ..flooring()
        };
        assert_eq!(rejected_field(everything_wrong.clone()), "item number");

        let from_price = NewItem {
            item_number: "X1".into(),
            brand_name: "Brand".into(),
            ..everything_wrong.clone()
        };
        assert_eq!(rejected_field(from_price), "price");

        let only_stock_and_category = NewItem {
            stock: -1,
            category: 9,
            ..flooring()
        };
        assert_eq!(rejected_field(only_stock_and_category), "number of items");
    }

    #[test]
    fn clone_is_independent_of_original() {
        let original = Item::new(flooring()).unwrap();
        let mut copy = original.clone();
        copy.set_price(1.0);
        copy.set_stock(0);
        copy.set_description("changed");
        assert_eq!(original.price(), 1000.0);
        assert_eq!(original.stock(), 102);
        assert_eq!(original.description(), "Big and heavy");
    }

    #[test]
    fn setters_do_not_validate() {
        let mut item = Item::new(flooring()).unwrap();
        item.set_price(-5.0);
        item.set_stock(-3);
        assert_eq!(item.price(), -5.0);
        assert_eq!(item.stock(), -3);
    }

    #[test]
    fn full_rendering_lists_every_field() {
        let item = Item::new(flooring()).unwrap();
        assert_eq!(
            item.to_string(),
            "Item number: 477B, Brand name: Andersen's Laminate Flooring, \
             Category: Laminate flooring, \
             Price: 1000 kr, Description: Big and heavy, Color: white,\n\
             Weight: 1.2 kg, Length: 1.4 m, Height: 1.2 m, Number of items: 102"
        );
    }

    #[test]
    fn fields_arrive_as_json_and_item_serializes_back() {
        let fields: NewItem = serde_json::from_str(
            r#"{"item_number":"5A7B","brand_name":"Ina Window-shop","category":2,"price":1300.0,
                "description":"Big and tall","color":"black","weight":1.5,"length":3.45,
                "height":1.05,"stock":10}"#,
        )
        .unwrap();
        let item = Item::new(fields).unwrap();
        assert_eq!(item.category(), Category::Windows);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["item_number"], "5A7B");
        assert_eq!(json["category"], "windows");
        assert_eq!(json["stock"], 10);
    }

    #[test]
    fn items_with_the_same_number_share_identity() {
        let a = Item::new(flooring()).unwrap();
        let b = Item::new(NewItem {
            item_number: "477b".into(),
            price: 1.0,
            ..flooring()
        })
        .unwrap();
        assert!(a.same_identity(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn summary_is_a_single_line() {
        let item = Item::new(flooring()).unwrap();
        let line = item.summary().to_string();
        assert_eq!(
            line,
            "Item number: 477B, Brand name: Andersen's Laminate Flooring, \
             Category: Laminate flooring (1000 kr), Color: white, Number of items: 102"
        );
        assert!(!line.contains('\n'));
    }
}
