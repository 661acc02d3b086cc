//! Black-box session: drive the menu through its public API only.

use std::io::Cursor;

use warehouse_cli::Menu;
use warehouse_inventory::{Category, ItemRegister};

fn run(register: &mut ItemRegister, lines: &[&str]) -> String {
    let mut script = lines.join("\n");
    script.push('\n');
    let mut menu = Menu::new(Cursor::new(script.into_bytes()), Vec::new());
    menu.run(register).expect("session should not fail");
    String::from_utf8(menu.into_output()).expect("menu output is utf-8")
}

#[test]
fn warehouse_day_from_empty_register() {
    let mut register = ItemRegister::new();
    let out = run(
        &mut register,
        &[
            // register one flooring line
            "1", "477B", "Andersen's Laminate Flooring", "1", "1000", "Big and heavy", "white",
            "1.2", "1.4", "1.2", "102",
            // the same number again, different casing
            "1", "477b", "Copycat", "2", "10", "copy", "black", "1", "1", "1", "1",
            // overdraw, then a valid sale
            "5", "477B", "2", "200",
            "5", "477B", "2", "2",
            // half price
            "6", "477B", "2", "50", "4",
            // nothing in this band
            "8", "2000", "3000",
            "9",
            "12",
        ],
    );

    assert!(out.contains("Your item was successfully added:"));
    assert!(out.contains("item number '477b' is already in use"));
    assert!(out.contains("cannot change stock of '477B' by -200: only 102 in storage"));
    assert!(out.contains("Couldn't find any items."));
    assert!(out.contains("There are 100 individual items in storage, divided by 1 items."));
    assert!(out.ends_with("Thank you for using the items app!\n"));

    let item = register.get_by_item_number("477b").unwrap();
    assert_eq!(item.price(), 500.0);
    assert_eq!(item.stock(), 100);
    assert_eq!(item.category(), Category::LaminateFlooring);
}

#[test]
fn seeded_register_sorted_then_trimmed() {
    let mut register = ItemRegister::new();
    let out = run(
        &mut register,
        &["11", "7", "3", "10", "8b00", "1", "4", "3", "12"],
    );

    assert!(out.contains("Items sorted by brand name:"));
    let andersen = out.find("Brand name: Andersen AS").unwrap();
    let petersen = out.find("Brand name: Petersen Lumber").unwrap();
    assert!(andersen < petersen);
    assert!(out.contains("All items in the category Doors:\nCouldn't find any items."));

    let brands: Vec<String> = register
        .list()
        .iter()
        .map(|item| item.brand_name().to_string())
        .collect();
    assert_eq!(
        brands,
        vec![
            "Andersen's Laminate Flooring",
            "Ina Window-shop",
            "Lumber AS",
            "Petersen Lumber",
        ]
    );
}
