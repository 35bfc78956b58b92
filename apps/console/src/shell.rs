//! # Console Shell
//!
//! The interactive menu loop: catalog browsing, order entry, and the three
//! queue reports. Everything here is display and input plumbing; the actual
//! work happens through kiosk-core's public operations, and data flows one
//! way (shell → core call → result back to the shell for display).
//!
//! ## Menu Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  1 List all products            ──► Catalog::products           │
//! │  2 Find product by id           ──► Catalog::find_by_id         │
//! │  3 Find product by description  ──► Catalog::find_by_description│
//! │  4 Start a new order            ──► Order::new / add_product    │
//! │  5 Finalize current order       ──► Queue::enqueue              │
//! │  6 Average of first N orders    ──► Queue::average_of           │
//! │  7 First N orders above $X      ──► Queue::filter_prefix        │
//! │  8 First N orders with product  ──► Queue::filter_prefix        │
//! │  0 Quit                                                         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The shell is generic over its input/output streams, so the whole loop
//! runs against in-memory buffers in tests.

use std::io::{BufRead, Write};
use std::str::FromStr;

use chrono::Local;
use kiosk_core::{Money, Order, PaymentMethod, Product, Queue};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::AppResult;

const HEADER: &str = "KIOSK - SMALL SHOP ORDER CONSOLE\n================================";

/// The interactive console session.
///
/// Owns the one order queue of the program, the order being assembled (if
/// any), and the sequential order-number counter.
pub struct Shell<R, W> {
    input: R,
    output: W,
    catalog: Catalog,
    orders: Queue<Order>,
    current: Option<Order>,
    next_order_id: u32,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, catalog: Catalog) -> Self {
        Shell {
            input,
            output,
            catalog,
            orders: Queue::new(),
            current: None,
            next_order_id: 1,
        }
    }

    /// Runs the menu loop until the operator quits or input ends.
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            writeln!(self.output, "\n{}", HEADER)?;
            writeln!(self.output, "\nMENU:")?;
            writeln!(self.output, "1 - List all products")?;
            writeln!(self.output, "2 - Find product by id")?;
            writeln!(self.output, "3 - Find product by description")?;
            writeln!(self.output, "4 - Start a new order")?;
            writeln!(self.output, "5 - Finalize current order")?;
            writeln!(self.output, "6 - Average value of the first N orders")?;
            writeln!(self.output, "7 - Filter first N orders above a value")?;
            writeln!(self.output, "8 - Filter first N orders containing a product")?;
            writeln!(self.output, "0 - Quit")?;

            let Some(choice) = self.read_number::<i64>("Enter your choice:")? else {
                break;
            };

            match choice {
                1 => self.list_products()?,
                2 => self.find_product_by_id()?,
                3 => self.find_product_by_description()?,
                4 => self.start_order()?,
                5 => self.finalize_order()?,
                6 => self.report_average()?,
                7 => self.report_above_value()?,
                8 => self.report_containing_product()?,
                0 => {
                    writeln!(self.output, "\nGoodbye!")?;
                    break;
                }
                _ => writeln!(self.output, "\nInvalid option. Please pick one from the menu.")?,
            }

            if choice != 0 {
                self.pause()?;
            }
        }
        Ok(())
    }

    // =========================================================================
    // Catalog Browsing
    // =========================================================================

    fn list_products(&mut self) -> AppResult<()> {
        writeln!(self.output, "\nCATALOG:")?;
        if self.catalog.is_empty() {
            writeln!(self.output, "--> No products loaded.")?;
            return Ok(());
        }
        for product in self.catalog.products() {
            writeln!(
                self.output,
                " {:<5} - {:<40} - {:>9}",
                product.id,
                product.description,
                product.price().to_string()
            )?;
        }
        Ok(())
    }

    fn find_product_by_id(&mut self) -> AppResult<()> {
        let Some(id) = self.read_number::<u32>("Enter the product id:")? else {
            return Ok(());
        };
        match self.catalog.find_by_id(id) {
            Some(product) => {
                let line = describe_product(product);
                writeln!(self.output, "\n{}", line)?;
            }
            None => writeln!(self.output, "\n--> Product not found!")?,
        }
        Ok(())
    }

    fn find_product_by_description(&mut self) -> AppResult<()> {
        let Some(description) = self.read_line("Enter the product description:")? else {
            return Ok(());
        };
        match self.catalog.find_by_description(&description) {
            Some(product) => {
                let line = describe_product(product);
                writeln!(self.output, "\n{}", line)?;
            }
            None => writeln!(self.output, "\n--> Product not found!")?,
        }
        Ok(())
    }

    // =========================================================================
    // Order Entry
    // =========================================================================

    fn start_order(&mut self) -> AppResult<()> {
        if self
            .current
            .as_ref()
            .is_some_and(|order| order.product_count() > 0)
        {
            writeln!(self.output, "\nAn order is already in progress.")?;
            writeln!(self.output, "Finalize it (option 5) before starting a new one.")?;
            return Ok(());
        }

        writeln!(self.output, "\nSTART NEW ORDER")?;
        let payment_method = loop {
            let Some(option) = self.read_number::<u32>("Payment method (1=Cash, 2=Term):")? else {
                return Ok(());
            };
            match option {
                1 => break PaymentMethod::Cash,
                2 => break PaymentMethod::Term,
                _ => writeln!(self.output, "Invalid option. Try again.")?,
            }
        };

        let mut order = Order::new(
            self.next_order_id,
            Local::now().date_naive(),
            payment_method,
        );
        self.next_order_id += 1;
        writeln!(self.output, "\nADDING PRODUCTS TO ORDER {}", order.id)?;
        self.list_products()?;

        loop {
            let Some(description) = self.read_line("Product description to add:")? else {
                break;
            };
            match self.catalog.find_by_description(&description) {
                None => writeln!(self.output, "--> Product not found.")?,
                Some(product) => {
                    let product = product.clone();
                    let description = product.description.clone();
                    match order.add_product(product) {
                        Ok(()) => {
                            writeln!(self.output, "--> '{}' added to the order.", description)?
                        }
                        Err(err) => {
                            writeln!(self.output, "--> {}.", err)?;
                            break;
                        }
                    }
                }
            }

            let Some(again) = self.read_line("Add another product? (y/n):")? else {
                break;
            };
            if !again.eq_ignore_ascii_case("y") {
                break;
            }
        }

        writeln!(
            self.output,
            "\n--> Done adding products to order {}.",
            order.id
        )?;
        debug!(order = order.id, products = order.product_count(), "order drafted");
        self.current = Some(order);
        Ok(())
    }

    fn finalize_order(&mut self) -> AppResult<()> {
        writeln!(self.output, "\nFINALIZE ORDER")?;
        match self.current.take() {
            Some(order) if order.product_count() > 0 => {
                let id = order.id;
                self.orders.enqueue(order);
                info!(order = id, queued = self.orders.len(), "order finalized");
                writeln!(
                    self.output,
                    "--> Order {} finalized and added to the queue.",
                    id
                )?;
            }
            _ => {
                writeln!(self.output, "--> No order in progress to finalize.")?;
                writeln!(self.output, "    Use option 4 to start a new order.")?;
            }
        }
        Ok(())
    }

    // =========================================================================
    // Queue Reports
    // =========================================================================

    fn report_average(&mut self) -> AppResult<()> {
        writeln!(self.output, "\nAVERAGE VALUE OF THE FIRST N ORDERS")?;
        if self.orders.is_empty() {
            writeln!(self.output, "--> The order queue is empty.")?;
            return Ok(());
        }

        let Some(count) = self.read_number::<usize>("How many orders (oldest first)?")? else {
            return Ok(());
        };

        match self
            .orders
            .average_of(|order| Some(order.final_value().cents() as f64), count)
        {
            Ok(mean_cents) => writeln!(
                self.output,
                "--> The average value of the first {} order(s) is: ${:.2}",
                count,
                mean_cents / 100.0
            )?,
            Err(err) => {
                writeln!(self.output, "ERROR: {}", err)?;
                writeln!(
                    self.output,
                    "   (The queue currently holds {} order(s).)",
                    self.orders.len()
                )?;
            }
        }
        Ok(())
    }

    fn report_above_value(&mut self) -> AppResult<()> {
        writeln!(self.output, "\nFILTER ORDERS ABOVE A VALUE")?;
        if self.orders.is_empty() {
            writeln!(self.output, "--> The order queue is empty.")?;
            return Ok(());
        }

        let Some(count) = self.read_number::<usize>("How many orders (oldest first)?")? else {
            return Ok(());
        };
        let Some(minimum) = self.read_number::<Money>("Minimum order value to show:")? else {
            return Ok(());
        };

        let matches = self
            .orders
            .filter_prefix(|order| order.final_value() > minimum, count);

        if matches.is_empty() {
            writeln!(
                self.output,
                "--> None of the first {} order(s) is above {}.",
                count, minimum
            )?;
        } else {
            writeln!(
                self.output,
                "\n--- Orders (of the first {} analyzed) above {} ---",
                count, minimum
            )?;
            self.print_filtered(matches)?;
        }
        Ok(())
    }

    fn report_containing_product(&mut self) -> AppResult<()> {
        writeln!(self.output, "\nFILTER ORDERS CONTAINING A PRODUCT")?;
        if self.orders.is_empty() {
            writeln!(self.output, "--> The order queue is empty.")?;
            return Ok(());
        }

        let Some(count) = self.read_number::<usize>("How many orders (oldest first)?")? else {
            return Ok(());
        };
        let Some(description) = self.read_line("Exact product description to look for:")? else {
            return Ok(());
        };

        let matches = self
            .orders
            .filter_prefix(|order| order.contains_product(&description), count);

        if matches.is_empty() {
            writeln!(
                self.output,
                "--> None of the first {} order(s) contains '{}'.",
                count, description
            )?;
        } else {
            writeln!(
                self.output,
                "\n--- Orders (of the first {} analyzed) containing '{}' ---",
                count, description
            )?;
            self.print_filtered(matches)?;
        }
        Ok(())
    }

    /// Drains a result queue from [`Queue::filter_prefix`], printing each
    /// order ticket in queue order.
    fn print_filtered(&mut self, mut matches: Queue<Order>) -> AppResult<()> {
        let mut position = 1;
        while !matches.is_empty() {
            let order = matches.dequeue()?;
            writeln!(self.output, "\n--- MATCH {} (order {}) ---", position, order.id)?;
            let ticket = describe_order(&order);
            writeln!(self.output, "{}", ticket)?;
            writeln!(self.output, "---------------------------------------")?;
            position += 1;
        }
        Ok(())
    }

    // =========================================================================
    // Input Plumbing
    // =========================================================================

    /// Prompts and reads one trimmed line. `Ok(None)` means end of input.
    fn read_line(&mut self, prompt: &str) -> AppResult<Option<String>> {
        write!(self.output, "{} ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompts until the operator enters a parseable value.
    ///
    /// Empty input and unparseable input re-prompt; `Ok(None)` means end of
    /// input.
    fn read_number<T: FromStr>(&mut self, prompt: &str) -> AppResult<Option<T>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            if line.is_empty() {
                writeln!(self.output, "Empty input. Please enter a number.")?;
                continue;
            }
            match line.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Invalid number format. Try again.")?,
            }
        }
    }

    /// "Press enter to continue" between menu actions.
    fn pause(&mut self) -> AppResult<()> {
        writeln!(self.output, "\nPress enter to continue...")?;
        self.output.flush()?;
        let mut sink = String::new();
        self.input.read_line(&mut sink)?;
        Ok(())
    }

    /// Number of orders waiting in the queue. Used by startup logging and
    /// tests.
    pub fn queued_orders(&self) -> usize {
        self.orders.len()
    }
}

// =============================================================================
// Display Formatting
// =============================================================================

/// One-line product details.
fn describe_product(product: &Product) -> String {
    format!(
        "PRODUCT {}: {} - {}",
        product.id,
        product.description,
        product.price()
    )
}

/// Multi-line order ticket.
fn describe_order(order: &Order) -> String {
    let payment = match order.payment_method {
        PaymentMethod::Cash => "cash",
        PaymentMethod::Term => "term",
    };
    let mut ticket = format!(
        "Order {} | placed on {} | payment: {}",
        order.id, order.placed_on, payment
    );
    for product in order.products() {
        ticket.push_str(&format!(
            "\n  {:<40} {:>9}",
            product.description,
            product.price().to_string()
        ));
    }
    ticket.push_str(&format!("\n  TOTAL: {}", order.final_value()));
    ticket
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const CATALOG: &str = "3\n1;Espresso Beans;12.50\n2;Paper Filters;3.07\n3;Ceramic Mug;10.00\n";

    /// Runs the shell over a scripted input, returning everything printed.
    fn run_script(script: &str) -> String {
        let catalog = Catalog::parse(Cursor::new(CATALOG)).unwrap();
        let mut out = Vec::new();
        let mut shell = Shell::new(Cursor::new(script.to_string()), &mut out, catalog);
        shell.run().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_quit_immediately() {
        let out = run_script("0\n");
        assert!(out.contains("MENU:"));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn test_eof_ends_the_loop() {
        let out = run_script("");
        assert!(out.contains("MENU:"));
        assert!(!out.contains("Goodbye!"));
    }

    #[test]
    fn test_list_products() {
        let out = run_script("1\n\n0\n");
        assert!(out.contains("Espresso Beans"));
        assert!(out.contains("$12.50"));
        assert!(out.contains("Ceramic Mug"));
    }

    #[test]
    fn test_find_product_by_id_hit_and_miss() {
        let out = run_script("2\n2\n\n2\n42\n\n0\n");
        assert!(out.contains("PRODUCT 2: Paper Filters - $3.07"));
        assert!(out.contains("--> Product not found!"));
    }

    #[test]
    fn test_find_product_by_description_is_case_insensitive() {
        let out = run_script("3\nceramic mug\n\n0\n");
        assert!(out.contains("PRODUCT 3: Ceramic Mug - $10.00"));
    }

    #[test]
    fn test_invalid_menu_input_reprompts() {
        let out = run_script("banana\n9\n\n0\n");
        assert!(out.contains("Invalid number format. Try again."));
        assert!(out.contains("Invalid option."));
    }

    #[test]
    fn test_order_entry_and_finalize() {
        // Start a term order with two products, then finalize it.
        let script = "4\n2\nEspresso Beans\ny\nCeramic Mug\nn\n\n5\n\n0\n";
        let catalog = Catalog::parse(Cursor::new(CATALOG)).unwrap();
        let mut out = Vec::new();
        let mut shell = Shell::new(Cursor::new(script.to_string()), &mut out, catalog);
        shell.run().unwrap();
        assert_eq!(shell.queued_orders(), 1);
        drop(shell);

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("'Espresso Beans' added to the order."));
        assert!(out.contains("'Ceramic Mug' added to the order."));
        assert!(out.contains("Order 1 finalized and added to the queue."));
    }

    #[test]
    fn test_finalize_without_order_hints() {
        let out = run_script("5\n\n0\n");
        assert!(out.contains("--> No order in progress to finalize."));
    }

    #[test]
    fn test_second_order_refused_while_one_in_progress() {
        let script = "4\n1\nCeramic Mug\nn\n\n4\n\n0\n";
        let out = run_script(script);
        assert!(out.contains("An order is already in progress."));
    }

    #[test]
    fn test_unknown_product_in_order_entry() {
        let script = "4\n1\nGolden Spoon\nn\n\n0\n";
        let out = run_script(script);
        assert!(out.contains("--> Product not found."));
    }

    #[test]
    fn test_reports_on_empty_queue_short_circuit() {
        let out = run_script("6\n\n7\n\n8\n\n0\n");
        assert_eq!(out.matches("--> The order queue is empty.").count(), 3);
    }

    #[test]
    fn test_average_report() {
        // Order 1: cash, Espresso Beans + Paper Filters
        //          ($15.57 - 10% cash discount) → $14.01
        // Order 2: term, Ceramic Mug → $10.00
        // Average over the first 1: $14.01 (the cash discount flows through).
        let script = concat!(
            "4\n1\nEspresso Beans\ny\nPaper Filters\nn\n\n5\n\n",
            "4\n2\nCeramic Mug\nn\n\n5\n\n",
            "6\n1\n\n0\n"
        );
        let out = run_script(script);
        assert!(out.contains("The average value of the first 1 order(s) is: $14.01"));
    }

    #[test]
    fn test_average_report_count_beyond_queue_errors() {
        let script = "4\n2\nCeramic Mug\nn\n\n5\n\n6\n5\n\n0\n";
        let out = run_script(script);
        assert!(out.contains("ERROR: requested 5 elements, container holds 1"));
        assert!(out.contains("(The queue currently holds 1 order(s).)"));
    }

    #[test]
    fn test_filter_above_value_report() {
        // Order 1: term, Paper Filters → $3.07. Order 2: term, Espresso
        // Beans → $12.50. Threshold $5 keeps only order 2.
        let script = concat!(
            "4\n2\nPaper Filters\nn\n\n5\n\n",
            "4\n2\nEspresso Beans\nn\n\n5\n\n",
            "7\n2\n5.00\n\n0\n"
        );
        let out = run_script(script);
        assert!(out.contains("--- MATCH 1 (order 2) ---"));
        assert!(out.contains("TOTAL: $12.50"));
        assert!(!out.contains("order 1)"));
    }

    #[test]
    fn test_filter_containing_product_report() {
        let script = concat!(
            "4\n2\nPaper Filters\nn\n\n5\n\n",
            "4\n2\nCeramic Mug\nn\n\n5\n\n",
            "8\n2\nceramic mug\n\n0\n"
        );
        let out = run_script(script);
        assert!(out.contains("--- MATCH 1 (order 2) ---"));
        assert!(out.contains("Ceramic Mug"));
    }

    #[test]
    fn test_filter_count_clamps_to_queue_length() {
        let script = concat!(
            "4\n2\nEspresso Beans\nn\n\n5\n\n",
            "7\n10\n5.00\n\n0\n"
        );
        let out = run_script(script);
        // Oversized count clamps instead of erroring.
        assert!(out.contains("--- MATCH 1 (order 1) ---"));
        assert!(!out.contains("ERROR"));
    }
}
