//! # Order Desk Console
//!
//! Interactive front end over [`OrderSystem`]. This binary only validates and parses
//! what the user types; every state change goes through the library.
//!
//! 1.  The menu file is loaded by [`OrderSystem::start`].
//! 2.  Each numbered choice maps to one `OrderSystem` call.
//! 3.  Choosing Exit (or closing stdin) saves the menu via [`OrderSystem::shutdown`].

use order_desk::lifecycle::{setup_tracing, OrderSystem, SystemConfig};
use order_desk::model::{ItemId, OrderId};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::{info, warn};

const MAIN_MENU: &str = "\
--- Restaurant Order Management System ---
1. Display Menu
2. Add Menu Item
3. Delete Menu Item
4. Reset Menu
5. Add New Order
6. Process Next Order
7. Display Orders
8. Delete Order
9. Calculate Total Amount of Sold Orders
10. Save Completed Orders to File
11. Exit
";

const EXIT_CHOICE: u8 = 11;

fn main() -> Result<(), String> {
    setup_tracing();

    let config = SystemConfig::from_env();
    info!(?config, "Starting order desk");
    let mut system = OrderSystem::start(config);

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock());

    loop {
        print!("{MAIN_MENU}");
        let Some(choice) = prompt.parsed::<u8>(
            "Enter your choice (1-11): ",
            "Invalid input. Please enter a number between 1 and 11.\nEnter your choice (1-11): ",
            |c| (1..=EXIT_CHOICE).contains(c),
        ) else {
            break;
        };
        println!();

        if choice == EXIT_CHOICE || dispatch(choice, &mut system, &mut prompt).is_none() {
            break;
        }
        println!();
    }

    println!("Exiting the program... Goodbye!");
    system.shutdown().map_err(|e| e.to_string())
}

/// Runs one menu action. `None` means input ended mid-action.
fn dispatch<R: BufRead>(choice: u8, system: &mut OrderSystem, prompt: &mut Prompt<R>) -> Option<()> {
    match choice {
        1 => print!("{}", system.catalog()),
        2 => add_menu_item(system, prompt)?,
        3 => delete_menu_item(system, prompt)?,
        4 => {
            system.reset_menu();
            println!("Menu successfully reset.");
        }
        5 => add_new_order(system, prompt)?,
        6 => process_next_order(system),
        7 => {
            print!("{}", system.pending());
            print!("{}", system.completed());
        }
        8 => delete_order(system, prompt)?,
        9 => print!("{}", system.revenue_report()),
        10 => save_completed_orders(system),
        _ => warn!(choice, "Unhandled menu choice"),
    }
    Some(())
}

fn add_menu_item<R: BufRead>(system: &mut OrderSystem, prompt: &mut Prompt<R>) -> Option<()> {
    let name = prompt.non_empty(
        "Enter item name: ",
        "Item name cannot be empty. Please enter a valid name: ",
    )?;
    let description = prompt.non_empty(
        "Enter description: ",
        "Item description cannot be empty. Please enter a valid description: ",
    )?;
    let price = prompt.parsed::<f64>(
        "Enter item price: ",
        "Please enter a valid price greater than 0: ",
        |p| *p > 0.0 && p.is_finite(),
    )?;

    match system.add_menu_item(name, description, price) {
        Ok(_) => println!("Item added successfully to the menu."),
        Err(e) => println!("Item not added: {e}"),
    }
    Some(())
}

fn delete_menu_item<R: BufRead>(system: &mut OrderSystem, prompt: &mut Prompt<R>) -> Option<()> {
    let id = prompt.parsed::<i32>(
        "Enter item ID to delete: ",
        "Please enter a positive integer for the item ID: ",
        |id| *id > 0,
    )?;

    match system.delete_menu_item(ItemId(id)) {
        Ok(_) => println!("Item Deleted Successfully."),
        Err(_) => println!("Item not found."),
    }
    Some(())
}

fn add_new_order<R: BufRead>(system: &mut OrderSystem, prompt: &mut Prompt<R>) -> Option<()> {
    let customer = prompt.non_empty(
        "Enter customer name: ",
        "Customer name cannot be empty. Please enter a valid name: ",
    )?;

    let mut item_ids = Vec::new();
    let mut line_prompt = "Enter item IDs (0 to finish): ";
    'entry: loop {
        let line = prompt.line(line_prompt)?;
        line_prompt = "";
        for token in line.split_whitespace() {
            let Ok(id) = token.parse::<i32>() else {
                print!("Invalid input. Please enter a valid item ID: ");
                continue 'entry;
            };
            if id == 0 {
                break 'entry;
            }
            let id = ItemId(id);
            if system.catalog().get_item_by_id(id).is_some() {
                item_ids.push(id);
            } else {
                println!("Item with ID {id} not found.");
            }
        }
    }

    match system.place_order(customer, &item_ids) {
        Ok(_) => println!("Order added successfully!"),
        Err(_) => println!("No valid items were added. Order not created."),
    }
    Some(())
}

fn process_next_order(system: &mut OrderSystem) {
    if system.pending().is_empty() {
        println!("No orders to process!");
        return;
    }
    match system.process_next_order() {
        Ok(order) => {
            println!("Processing order for {}...", order.customer_name());
            println!("Order processed successfully!");
        }
        Err(e) => println!("Order not processed: {e}"),
    }
}

fn delete_order<R: BufRead>(system: &mut OrderSystem, prompt: &mut Prompt<R>) -> Option<()> {
    let id = prompt.parsed::<u32>(
        "Enter order id to delete: ",
        "Please enter a positive integer for the order ID: ",
        |id| *id > 0,
    )?;

    match system.cancel_order(OrderId(id)) {
        Ok(_) => println!("Order deleted successfully."),
        Err(_) => println!("Order not found."),
    }
    Some(())
}

fn save_completed_orders(system: &OrderSystem) {
    println!("Saving completed orders to file...");
    let today = chrono::Local::now().date_naive();
    match system.save_completed_orders(today) {
        Ok(path) => println!("Orders saved successfully to {}!", path.display()),
        Err(e) => println!("{e}"),
    }
}

/// Line-oriented reader for the console. Every method returns `None` once input ends.
struct Prompt<R> {
    reader: R,
}

impl<R: BufRead> Prompt<R> {
    fn new(reader: R) -> Self {
        Self { reader }
    }

    fn line(&mut self, text: &str) -> Option<String> {
        print!("{text}");
        if let Err(e) = io::stdout().flush() {
            warn!(error = %e, "Failed to flush prompt");
        }

        let mut buf = String::new();
        match self.reader.read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                warn!(error = %e, "Failed to read input");
                None
            }
        }
    }

    fn non_empty(&mut self, text: &str, retry: &str) -> Option<String> {
        let mut value = self.line(text)?;
        while value.trim().is_empty() {
            value = self.line(retry)?;
        }
        Some(value)
    }

    fn parsed<T: FromStr>(&mut self, text: &str, retry: &str, accept: impl Fn(&T) -> bool) -> Option<T> {
        let mut raw = self.line(text)?;
        loop {
            match raw.trim().parse::<T>() {
                Ok(value) if accept(&value) => return Some(value),
                _ => raw = self.line(retry)?,
            }
        }
    }
}
