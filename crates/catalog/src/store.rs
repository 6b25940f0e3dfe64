//! Process-wide product catalog. Read-mostly; the one mutation path is the
//! admin stock-set, guarded by a RwLock.

use parking_lot::RwLock;
use tracing::info;

use grocer_core::types::{Category, Product};

pub struct CatalogStore {
    categories: RwLock<Vec<Category>>,
}

impl CatalogStore {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories: RwLock::new(categories),
        }
    }

    /// Catalog populated with the full store inventory.
    pub fn seeded() -> Self {
        Self::new(crate::seed::seed_categories())
    }

    /// Category names in insertion order. This order defines the
    /// pagination sequence shown to customers.
    pub fn category_names(&self) -> Vec<String> {
        self.categories
            .read()
            .iter()
            .map(|c| c.name.clone())
            .collect()
    }

    /// Products in a category that are currently purchasable
    /// (stock > 0 and active). Unknown category yields an empty list.
    pub fn available_products(&self, category_name: &str) -> Vec<Product> {
        self.categories
            .read()
            .iter()
            .find(|c| c.name == category_name)
            .map(|c| {
                c.products
                    .iter()
                    .filter(|p| p.is_available())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every product across all categories, catalog order.
    pub fn all_products(&self) -> Vec<Product> {
        self.categories
            .read()
            .iter()
            .flat_map(|c| c.products.iter().cloned())
            .collect()
    }

    /// Set stock for a product by case-insensitive name lookup across all
    /// categories. Reactivates the product when stock goes positive,
    /// deactivates it at zero. Returns the canonical product name, or
    /// `None` when no product matches.
    pub fn set_stock(&self, product_name: &str, new_stock: u32) -> Option<String> {
        let mut categories = self.categories.write();
        for category in categories.iter_mut() {
            for product in category.products.iter_mut() {
                if product.name.eq_ignore_ascii_case(product_name) {
                    product.stock = new_stock;
                    product.active = new_stock > 0;
                    info!(
                        product = %product.name,
                        stock = new_stock,
                        active = product.active,
                        "Stock updated"
                    );
                    return Some(product.name.clone());
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grocer_core::types::Product;

    fn small_catalog() -> CatalogStore {
        let mut drinks = Category::new("Drinks");
        drinks.add_product(Product::new("Coca Cola 2L", 39.99, "Soft drink", 10));
        drinks.add_product(Product::new("Sprite 2 Litres", 37.99, "Soft drink", 0));
        let mut pantry = Category::new("Pantry");
        pantry.add_product(Product::new("Jungle Oats 1kg", 44.99, "Oats", 3));
        CatalogStore::new(vec![drinks, pantry])
    }

    #[test]
    fn test_category_names_keep_insertion_order() {
        let catalog = small_catalog();
        assert_eq!(catalog.category_names(), vec!["Drinks", "Pantry"]);
    }

    #[test]
    fn test_available_filters_out_of_stock() {
        let catalog = small_catalog();
        let drinks = catalog.available_products("Drinks");
        assert_eq!(drinks.len(), 1);
        assert_eq!(drinks[0].name, "Coca Cola 2L");
    }

    #[test]
    fn test_set_stock_is_case_insensitive_and_reactivates() {
        let catalog = small_catalog();
        let name = catalog.set_stock("sprite 2 litres", 5).unwrap();
        assert_eq!(name, "Sprite 2 Litres");
        assert_eq!(catalog.available_products("Drinks").len(), 2);

        catalog.set_stock("Coca Cola 2L", 0).unwrap();
        let drinks = catalog.available_products("Drinks");
        assert_eq!(drinks.len(), 1);
        assert_eq!(drinks[0].name, "Sprite 2 Litres");
    }

    #[test]
    fn test_set_stock_unknown_product() {
        let catalog = small_catalog();
        assert!(catalog.set_stock("Mazoe Orange Crush 2L", 4).is_none());
    }

    #[test]
    fn test_seeded_catalog_has_all_sections() {
        let catalog = CatalogStore::seeded();
        let names = catalog.category_names();
        assert_eq!(
            names,
            vec![
                "Pantry",
                "Beverages",
                "Household",
                "Personal Care",
                "Snacks and Sweets",
                "Fresh Groceries",
                "Stationery",
                "Baby Section",
            ]
        );
        assert!(!catalog.available_products("Pantry").is_empty());
    }
}
