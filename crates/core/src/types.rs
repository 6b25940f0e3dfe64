use serde::{Deserialize, Serialize};

/// A catalog entry. Identity within a category is the product name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub description: String,
    #[serde(default)]
    pub stock: u32,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Product {
    pub fn new(name: &str, price: f64, description: &str, stock: u32) -> Self {
        Self {
            name: name.to_string(),
            price,
            description: description.to_string(),
            stock,
            active: stock > 0,
        }
    }

    /// A product is shown to customers only while it has stock and has not
    /// been deactivated.
    pub fn is_available(&self) -> bool {
        self.active && self.stock > 0
    }

    /// The snapshot a cart line keeps. Price is frozen here: later catalog
    /// price changes never reach lines already in a cart.
    pub fn snapshot(&self) -> ProductSnapshot {
        ProductSnapshot {
            name: self.name.clone(),
            price: self.price,
            description: self.description.clone(),
        }
    }
}

/// A named, ordered group of products. The order is fixed at seed time and
/// drives category pagination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub products: Vec<Product>,
}

impl Category {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            products: Vec::new(),
        }
    }

    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }
}

/// Value snapshot of a product as captured into a cart or order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
}

impl ProductSnapshot {
    pub fn new(name: &str, price: f64, description: &str) -> Self {
        Self {
            name: name.to_string(),
            price,
            description: description.to_string(),
        }
    }
}

/// A delivery destination and its flat fee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryArea {
    pub name: String,
    pub fee: f64,
}

impl DeliveryArea {
    pub fn new(name: &str, fee: f64) -> Self {
        Self {
            name: name.to_string(),
            fee,
        }
    }
}
