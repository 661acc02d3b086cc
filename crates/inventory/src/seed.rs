//! Sample stock for manual testing.

use crate::item::NewItem;

#[allow(clippy::too_many_arguments)]
fn sample(
    item_number: &str,
    description: &str,
    price: f64,
    brand_name: &str,
    weight: f64,
    length: f64,
    height: f64,
    color: &str,
    stock: i64,
    category: i32,
) -> NewItem {
    NewItem {
        item_number: item_number.to_string(),
        brand_name: brand_name.to_string(),
        category,
        price,
        description: description.to_string(),
        color: color.to_string(),
        weight,
        length,
        height,
        stock,
    }
}

/// The fixed sample set inserted by `ItemRegister::seed_defaults`.
pub fn default_items() -> Vec<NewItem> {
    vec![
        sample(
            "477B",
            "Big and heavy",
            1000.0,
            "Andersen's Laminate Flooring",
            1.2,
            1.4,
            12.0,
            "white",
            102,
            1,
        ),
        sample(
            "5A7B",
            "Big and tall",
            1300.0,
            "Ina Window-shop",
            1.5,
            3.45,
            1.05,
            "black",
            10,
            2,
        ),
        sample(
            "8B00",
            "New and small",
            500.0,
            "Andersen AS",
            0.2,
            0.4,
            10.0,
            "green",
            2,
            3,
        ),
        sample(
            "AA11",
            "Tall and heavy",
            2000.0,
            "Petersen Lumber",
            3.2,
            1.0,
            11.0,
            "white",
            1022,
            4,
        ),
        sample(
            "2",
            "Tall, big and heavy",
            99.0,
            "Lumber AS",
            1.3,
            0.9,
            10.0,
            "black",
            10,
            4,
        ),
    ]
}
