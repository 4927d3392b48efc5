use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One exported row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub product_name: String,
    pub price: String,
    pub category: String,
}

/// Where the scraper is within one category's pagination loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub url: String,
    pub category: String,
    /// 0-based page number within the category
    pub page_index: usize,
}

impl PageState {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            category: String::new(),
            page_index: 0,
        }
    }
}

/// Counts recorded for one extracted page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    pub url: String,
    pub category: String,
    pub page_index: usize,
    pub product_count: usize,
    pub price_count: usize,
}

impl PageSummary {
    pub fn is_aligned(&self) -> bool {
        self.product_count == self.price_count
    }
}

/// Accumulated scrape results.
///
/// Product names and categories grow in lockstep. Prices grow on their own,
/// so a page with a different number of price nodes than product nodes
/// shifts every later pairing. Nothing here tries to repair that; use
/// [`Catalog::is_aligned`] and [`Catalog::misaligned_pages`] to detect it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    product_names: Vec<String>,
    categories: Vec<String>,
    prices: Vec<String>,
    pages: Vec<PageSummary>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the texts read from one page
    pub fn record_page(&mut self, state: &PageState, products: Vec<String>, prices: Vec<String>) {
        self.pages.push(PageSummary {
            url: state.url.clone(),
            category: state.category.clone(),
            page_index: state.page_index,
            product_count: products.len(),
            price_count: prices.len(),
        });

        for name in products {
            self.product_names.push(name);
            self.categories.push(state.category.clone());
        }
        self.prices.extend(prices);
    }

    pub fn product_names(&self) -> &[String] {
        &self.product_names
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn prices(&self) -> &[String] {
        &self.prices
    }

    pub fn pages(&self) -> &[PageSummary] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.product_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.product_names.is_empty()
    }

    pub fn is_aligned(&self) -> bool {
        self.product_names.len() == self.prices.len()
    }

    pub fn misaligned_pages(&self) -> Vec<&PageSummary> {
        self.pages.iter().filter(|page| !page.is_aligned()).collect()
    }

    /// Rows paired by position; a missing price becomes an empty string
    pub fn entries(&self) -> Vec<CatalogEntry> {
        self.product_names
            .iter()
            .zip(self.categories.iter())
            .enumerate()
            .map(|(i, (name, category))| CatalogEntry {
                product_name: name.clone(),
                price: self.prices.get(i).cloned().unwrap_or_default(),
                category: category.clone(),
            })
            .collect()
    }

    /// Prices left over once every product name has been paired
    pub fn unmatched_prices(&self) -> &[String] {
        let paired = self.product_names.len().min(self.prices.len());
        &self.prices[paired..]
    }
}

/// Outcome of a complete run
#[derive(Debug, Clone, Default)]
pub struct HarvestReport {
    pub catalog: Catalog,
    /// Targets skipped after an error (only with `continue_on_error`)
    pub failed_targets: Vec<String>,
    pub export_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(category: &str, page_index: usize) -> PageState {
        PageState {
            url: "https://shop.example/snacks/".to_string(),
            category: category.to_string(),
            page_index,
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_entries_pair_by_position() {
        let mut catalog = Catalog::new();
        catalog.record_page(&state("Snacks", 0), strings(&["A", "B"]), strings(&["10", "20"]));

        assert!(catalog.is_aligned());
        assert_eq!(
            catalog.entries(),
            vec![
                CatalogEntry {
                    product_name: "A".to_string(),
                    price: "10".to_string(),
                    category: "Snacks".to_string(),
                },
                CatalogEntry {
                    product_name: "B".to_string(),
                    price: "20".to_string(),
                    category: "Snacks".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_missing_prices_shift_later_pages() {
        let mut catalog = Catalog::new();
        catalog.record_page(&state("Snacks", 0), strings(&["A", "B"]), strings(&["10"]));
        catalog.record_page(&state("Snacks", 1), strings(&["C"]), strings(&["30"]));

        assert_eq!(catalog.product_names().len(), catalog.categories().len());
        assert_eq!(catalog.prices().len(), 2);
        assert!(!catalog.is_aligned());

        let entries = catalog.entries();
        assert_eq!(entries[1].product_name, "B");
        assert_eq!(entries[1].price, "30");
        assert_eq!(entries[2].price, "");

        let misaligned = catalog.misaligned_pages();
        assert_eq!(misaligned.len(), 1);
        assert_eq!(misaligned[0].page_index, 0);
    }

    #[test]
    fn test_surplus_prices_are_kept() {
        let mut catalog = Catalog::new();
        catalog.record_page(&state("Tea", 0), strings(&["A"]), strings(&["1", "2", "3"]));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entries().len(), 1);
        assert_eq!(catalog.unmatched_prices(), &strings(&["2", "3"])[..]);
    }

    #[test]
    fn test_duplicate_names_retained() {
        let mut catalog = Catalog::new();
        catalog.record_page(&state("Tea", 0), strings(&["Milk"]), strings(&["5"]));
        catalog.record_page(&state("Dairy", 0), strings(&["Milk"]), strings(&["5"]));

        assert_eq!(catalog.product_names(), &strings(&["Milk", "Milk"])[..]);
        assert_eq!(catalog.categories(), &strings(&["Tea", "Dairy"])[..]);
    }
}
