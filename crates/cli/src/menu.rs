use std::io::{BufRead, Write};

use warehouse_inventory::{Category, Item, ItemRegister, NewItem};

use crate::error::CliError;
use crate::input::Prompter;

const MAIN_MENU: &str = "\
Choose:
1. Register a new item
2. Print all items
3. Find an item
4. Find all items in a category
5. Edit number of items
6. Make changes to an item
7. Sort items
8. Find all items in a price-range
9. Find number of items in storage
10. Delete an item
11. Add default test data
12. Exit";

const CATEGORY_MENU: &str = "\
Choose category:
1. Laminate flooring
2. Windows
3. Doors
4. Lumber";

const CHANGE_MENU: &str = "\
Choose:
1. Change price
2. Add a discount
3. Change an item-description
4. Print changes and exit";

const SORT_MENU: &str = "\
Type:
1. Sort items by price
2. Sort items by color
3. Sort items by brand name";

const NO_ITEMS: &str = "Couldn't find any items.";
const UNKNOWN_ITEM: &str = "This item number doesn't exist.";

/// Main menu entries, numbered as shown to the user.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    AddItem,
    PrintAll,
    FindItem,
    FindCategory,
    EditStock,
    ChangeItem,
    SortItems,
    PriceRange,
    Totals,
    DeleteItem,
    SeedDefaults,
    Exit,
}

impl TryFrom<u32> for MenuChoice {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => MenuChoice::AddItem,
            2 => MenuChoice::PrintAll,
            3 => MenuChoice::FindItem,
            4 => MenuChoice::FindCategory,
            5 => MenuChoice::EditStock,
            6 => MenuChoice::ChangeItem,
            7 => MenuChoice::SortItems,
            8 => MenuChoice::PriceRange,
            9 => MenuChoice::Totals,
            10 => MenuChoice::DeleteItem,
            11 => MenuChoice::SeedDefaults,
            12 => MenuChoice::Exit,
            other => return Err(other),
        })
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Command-dispatch loop over an explicit input source and output sink.
pub struct Menu<R, W> {
    io: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            io: Prompter::new(input, output),
        }
    }

    pub fn into_output(self) -> W {
        self.io.into_output()
    }

    /// Run until the user exits or the input ends.
    ///
    /// Bad input and domain failures are reported and the loop carries on;
    /// only I/O failures end it with an error.
    pub fn run(&mut self, register: &mut ItemRegister) -> Result<(), CliError> {
        loop {
            self.io.say("")?;
            let answer = match self.io.ask(MAIN_MENU) {
                Ok(answer) => answer,
                Err(CliError::EndOfInput) => return Ok(()),
                Err(err) => return Err(err),
            };
            let Some(choice) = answer
                .trim()
                .parse::<u32>()
                .ok()
                .and_then(|n| MenuChoice::try_from(n).ok())
            else {
                self.io.say("Please choose a number between 1 and 12")?;
                continue;
            };

            tracing::debug!(?choice, "menu choice");
            match self.dispatch(choice, register) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    self.io.say("Thank you for using the items app!")?;
                    return Ok(());
                }
                Err(CliError::EndOfInput) => return Ok(()),
                Err(err @ CliError::Io(_)) => return Err(err),
                Err(err) => self.io.say(err)?,
            }
        }
    }

    fn dispatch(
        &mut self,
        choice: MenuChoice,
        register: &mut ItemRegister,
    ) -> Result<Flow, CliError> {
        match choice {
            MenuChoice::AddItem => self.add_item(register)?,
            MenuChoice::PrintAll => self.print_all(register)?,
            MenuChoice::FindItem => self.find_item(register)?,
            MenuChoice::FindCategory => self.find_category(register)?,
            MenuChoice::EditStock => self.edit_stock(register)?,
            MenuChoice::ChangeItem => self.change_item(register)?,
            MenuChoice::SortItems => self.sort_items(register)?,
            MenuChoice::PriceRange => self.price_range(register)?,
            MenuChoice::Totals => self.totals(register)?,
            MenuChoice::DeleteItem => self.delete_item(register)?,
            MenuChoice::SeedDefaults => {
                register.seed_defaults()?;
                self.io.say("Default test data successfully added.")?;
            }
            MenuChoice::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn add_item(&mut self, register: &mut ItemRegister) -> Result<(), CliError> {
        self.io.say("Register a new item:")?;
        let item_number = self.io.ask_item_number("Item number:")?;
        let brand_name = self.io.ask("Brand name:")?;
        let category = self.io.ask_parsed(CATEGORY_MENU, "category number")?;
        let price = self.io.ask_parsed("Price (kr):", "price")?;
        let description = self.io.ask("Description:")?;
        let color = self.io.ask("Color:")?;
        let weight = self.io.ask_parsed("Weight (kg):", "weight")?;
        let length = self.io.ask_parsed("Length (m):", "length")?;
        let height = self.io.ask_parsed("Height (m):", "height")?;
        let stock = self.io.ask_parsed("Number of items:", "whole number")?;

        let item = register.add(NewItem {
            item_number,
            brand_name,
            category,
            price,
            description,
            color,
            weight,
            length,
            height,
            stock,
        })?;
        self.io.say("Your item was successfully added:")?;
        self.io.say(&item)
    }

    fn print_all(&mut self, register: &ItemRegister) -> Result<(), CliError> {
        self.io.say("All items:")?;
        self.print_summaries(&register.list())
    }

    fn find_item(&mut self, register: &ItemRegister) -> Result<(), CliError> {
        self.io.say(
            "Type in item number and/or description to find an item, press enter to leave one blank.",
        )?;
        let item_number = self.io.ask_item_number("Item number:")?;
        let description = self.io.ask("Description:")?.trim().to_string();

        match (item_number.is_empty(), description.is_empty()) {
            (true, true) => self.io.say("You can't leave both blank."),
            (false, true) => {
                let item = register.get_by_item_number(&item_number)?;
                self.io.say(format!("Item with item number: {item_number}"))?;
                self.io.say(&item)
            }
            (true, false) => {
                self.io
                    .say(format!("Items with '{description}' in the description:"))?;
                self.print_summaries(&register.get_by_description(&description))
            }
            (false, false) => {
                let item =
                    register.get_by_item_number_and_description(&item_number, &description)?;
                self.io.say(format!(
                    "Item with item number: {item_number}, and '{description}' in the description:"
                ))?;
                self.io.say(&item)
            }
        }
    }

    fn find_category(&mut self, register: &ItemRegister) -> Result<(), CliError> {
        let code: i32 = self.io.ask_parsed(CATEGORY_MENU, "category number")?;
        let category = Category::from_code(code)?;
        self.io.say(format!("All items in the category {category}:"))?;
        self.print_summaries(&register.get_by_category(category))
    }

    fn edit_stock(&mut self, register: &mut ItemRegister) -> Result<(), CliError> {
        let item_number = self
            .io
            .ask_item_number("Choose an item number, to edit number of items:")?;
        if !register.exists(&item_number) {
            return self.io.say(UNKNOWN_ITEM);
        }
        let direction: u32 = self.io.ask_parsed(
            "Type 1 to increase number of items or type 2 to decrease number of items:",
            "choice",
        )?;
        let increase = match direction {
            1 => true,
            2 => false,
            _ => return self.io.say("Please type 1 or 2."),
        };
        let question = if increase {
            "Choose a number of items to increase by:"
        } else {
            "Choose a number of items to decrease by:"
        };
        let amount: i64 = self.io.ask_parsed(question, "whole number")?;
        if amount <= 0 {
            return self.io.say("The number of items must be a positive number.");
        }

        if increase {
            register.increase_stock(&item_number, amount)?;
        } else {
            register.decrease_stock(&item_number, amount)?;
        }
        let item = register.get_by_item_number(&item_number)?;
        self.io.say(&item)
    }

    fn change_item(&mut self, register: &mut ItemRegister) -> Result<(), CliError> {
        let item_number = self
            .io
            .ask_item_number("Type an item number to make changes:")?;
        let item = match register.get_by_item_number(&item_number) {
            Ok(item) => item,
            Err(_) => return self.io.say(UNKNOWN_ITEM),
        };
        self.io.say("You are making changes to:")?;
        self.io.say(&item)?;

        loop {
            self.io.say("")?;
            match self.change_step(register, &item_number) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(err @ CliError::Parse { .. }) => self.io.say(err)?,
                Err(err) => return Err(err),
            }
        }
    }

    fn change_step(
        &mut self,
        register: &mut ItemRegister,
        item_number: &str,
    ) -> Result<Flow, CliError> {
        let choice: u32 = self.io.ask_parsed(CHANGE_MENU, "choice")?;
        match choice {
            1 => {
                let price: f64 = self.io.ask_parsed("Type in the new price:", "price")?;
                if price > 0.0 {
                    register.set_price(item_number, price)?;
                } else {
                    self.io.say("The new price must be a positive number.")?;
                }
            }
            2 => {
                let percent: f64 = self
                    .io
                    .ask_parsed("Type in a discount between 0% and 100%:", "percentage")?;
                if (0.0..=100.0).contains(&percent) {
                    register.apply_discount(item_number, percent)?;
                } else {
                    self.io.say("The discount must be between 0% and 100%.")?;
                }
            }
            3 => {
                let description = self.io.ask("Type in the new description:")?;
                register.set_description(item_number, description)?;
            }
            4 => {
                let item = register.get_by_item_number(item_number)?;
                self.io.say("Your edited item:")?;
                self.io.say(&item)?;
                return Ok(Flow::Exit);
            }
            _ => self
                .io
                .say("You have to choose a number between 1 and 4. Please try again.")?,
        }
        Ok(Flow::Continue)
    }

    fn sort_items(&mut self, register: &mut ItemRegister) -> Result<(), CliError> {
        let choice: u32 = self.io.ask_parsed(SORT_MENU, "choice")?;
        self.io.say("")?;
        let (heading, sorted) = match choice {
            1 => ("Items sorted by price:", register.sort_by_price()),
            2 => ("Items sorted by color:", register.sort_by_color()),
            3 => ("Items sorted by brand name:", register.sort_by_brand_name()),
            _ => return self.io.say("You have to type a number between 1 and 3."),
        };
        self.io.say(heading)?;
        self.print_summaries(sorted)
    }

    fn price_range(&mut self, register: &ItemRegister) -> Result<(), CliError> {
        self.io
            .say("Choose a price-range to find all items within that range:")?;
        let start: f64 = self.io.ask_parsed("Start price:", "price")?;
        let end: f64 = self.io.ask_parsed("End price:", "price")?;
        if start > end {
            return self
                .io
                .say("The start price can't be bigger than the end price.");
        }
        self.io.say(format!("Items between {start} kr and {end} kr:"))?;
        self.print_summaries(&register.get_by_price_range(start, end))
    }

    fn totals(&mut self, register: &ItemRegister) -> Result<(), CliError> {
        self.io.say(format!(
            "There are {} individual items in storage, divided by {} items.",
            register.total_units(),
            register.count()
        ))
    }

    fn delete_item(&mut self, register: &mut ItemRegister) -> Result<(), CliError> {
        let item_number = self
            .io
            .ask_item_number("Type in the item number of the item you want to delete:")?;
        let item = match register.get_by_item_number(&item_number) {
            Ok(item) => item,
            Err(_) => return self.io.say(UNKNOWN_ITEM),
        };
        self.io.say("Are you sure you want to delete:")?;
        self.io.say(&item)?;
        self.io.say("")?;
        let confirm = self.io.ask("Type 1 to delete, or press enter to cancel:")?;
        if confirm.trim() == "1" {
            register.delete(&item_number)?;
            self.io.say("The item is deleted.")
        } else {
            self.io.say("Nothing was deleted.")
        }
    }

    fn print_summaries(&mut self, items: &[Item]) -> Result<(), CliError> {
        if items.is_empty() {
            return self.io.say(NO_ITEMS);
        }
        for item in items {
            self.io.say(item.summary())?;
        }
        Ok(())
    }
}
