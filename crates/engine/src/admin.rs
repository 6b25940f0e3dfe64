//! Admin side-channel: allow-listed senders can adjust stock without
//! touching their conversation state.

use tracing::info;

use grocer_catalog::CatalogStore;

const USAGE: &str = "Usage: stock <product name> <quantity>";

pub fn is_admin(admin_numbers: &[String], sender: &str) -> bool {
    admin_numbers.iter().any(|n| n == sender)
}

/// Handle a `stock <product name> <quantity>` command. Returns `None` when
/// the text is not an admin command at all, so the caller falls through to
/// the conversation engine.
pub fn try_handle(catalog: &CatalogStore, sender: &str, text: &str) -> Option<String> {
    let mut parts = text.trim().split_whitespace();
    if !parts.next()?.eq_ignore_ascii_case("stock") {
        return None;
    }

    let rest: Vec<&str> = parts.collect();
    if rest.len() < 2 {
        return Some(USAGE.to_string());
    }

    let Ok(quantity) = rest[rest.len() - 1].parse::<u32>() else {
        return Some(USAGE.to_string());
    };
    let product_name = rest[..rest.len() - 1].join(" ");

    match catalog.set_stock(&product_name, quantity) {
        Some(canonical) => {
            info!(admin = sender, product = %canonical, quantity, "Admin stock update");
            Some(format!("Stock for {canonical} set to {quantity}."))
        }
        None => Some(format!("Product '{product_name}' not found.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grocer_core::types::{Category, Product};

    fn catalog() -> CatalogStore {
        let mut drinks = Category::new("Drinks");
        drinks.add_product(Product::new("Coca Cola 2L", 39.99, "Soft drink", 10));
        CatalogStore::new(vec![drinks])
    }

    #[test]
    fn test_non_stock_text_falls_through() {
        let catalog = catalog();
        assert!(try_handle(&catalog, "263775550000", "hi").is_none());
        assert!(try_handle(&catalog, "263775550000", "stocktake now").is_none());
    }

    #[test]
    fn test_stock_update_case_insensitive() {
        let catalog = catalog();
        let reply = try_handle(&catalog, "263775550000", "STOCK coca cola 2l 0").unwrap();
        assert_eq!(reply, "Stock for Coca Cola 2L set to 0.");
        assert!(catalog.available_products("Drinks").is_empty());
    }

    #[test]
    fn test_malformed_command_reports_usage() {
        let catalog = catalog();
        assert_eq!(try_handle(&catalog, "a", "stock").unwrap(), USAGE);
        assert_eq!(try_handle(&catalog, "a", "stock 5").unwrap(), USAGE);
        assert_eq!(
            try_handle(&catalog, "a", "stock Coca Cola 2L many").unwrap(),
            USAGE
        );
    }

    #[test]
    fn test_unknown_product_reported() {
        let catalog = catalog();
        let reply = try_handle(&catalog, "a", "stock Mazoe 5").unwrap();
        assert_eq!(reply, "Product 'Mazoe' not found.");
    }

    #[test]
    fn test_is_admin_exact_match() {
        let admins = vec!["263775550000".to_string()];
        assert!(is_admin(&admins, "263775550000"));
        assert!(!is_admin(&admins, "263775550001"));
    }
}
