//! # Catalog Loader
//!
//! Loads the product catalog from its flat file and answers the shell's
//! lookups (by id, by description).
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  products.txt                                                   │
//! │                                                                 │
//! │  3                          ◄── declared product count          │
//! │  1;Espresso Beans;12.50     ◄── id;description;price            │
//! │  2;Paper Filters;3.07                                           │
//! │  3;Ceramic Mug;9.99                                             │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Malformed lines are logged and skipped rather than aborting the load;
//! a shortfall against the declared count is logged and tolerated. Only a
//! missing file or an unusable header is fatal, since the shell cannot run
//! without a catalog.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use kiosk_core::Product;
use tracing::{info, warn};

use crate::error::{AppError, AppResult};

/// The loaded product catalog.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Loads the catalog from `path`.
    ///
    /// ## Errors
    /// - [`AppError::CatalogIo`] when the file cannot be opened or read
    /// - [`AppError::CatalogHeader`] when the first line is not a count
    pub fn load(path: &Path) -> AppResult<Catalog> {
        let file = File::open(path).map_err(|source| AppError::CatalogIo {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::parse(BufReader::new(file))?;
        info!(
            path = %path.display(),
            products = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parses catalog records from any reader.
    ///
    /// Split out of [`load`](Catalog::load) so tests can drive it with
    /// in-memory buffers.
    pub fn parse<R: BufRead>(reader: R) -> AppResult<Catalog> {
        let mut lines = reader.lines();

        let header = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(AppError::CatalogHeader {
                    header: String::new(),
                })
            }
        };
        let declared: usize =
            header
                .trim()
                .parse()
                .map_err(|_| AppError::CatalogHeader {
                    header: header.trim().to_string(),
                })?;

        let mut products = Vec::with_capacity(declared);
        for line in lines {
            let line = line?;
            if products.len() == declared {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }
            match parse_product_line(&line) {
                Some(product) => products.push(product),
                None => warn!(line = %line.trim(), "skipping malformed catalog line"),
            }
        }

        if products.len() < declared {
            warn!(
                declared,
                loaded = products.len(),
                "catalog declared more products than could be read"
            );
        }

        Ok(Catalog { products })
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products, in file order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks a product up by its catalog id.
    pub fn find_by_id(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Looks a product up by exact description, case-insensitively.
    pub fn find_by_description(&self, description: &str) -> Option<&Product> {
        if description.trim().is_empty() {
            return None;
        }
        self.products
            .iter()
            .find(|p| p.matches_description(description))
    }
}

/// Parses one `id;description;price` record. Returns `None` on any
/// malformed field so the caller can skip-and-log.
fn parse_product_line(line: &str) -> Option<Product> {
    let mut fields = line.trim().splitn(3, ';');

    let id: u32 = fields.next()?.trim().parse().ok()?;
    let description = fields.next()?.trim();
    if description.is_empty() {
        return None;
    }
    let price: kiosk_core::Money = fields.next()?.trim().parse().ok()?;

    Some(Product {
        id,
        description: description.to_string(),
        price_cents: price.cents(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
