//! End-to-end conversation scenarios: each turn goes through the session
//! store's serialize/deserialize round trip, exactly as webhook calls do.

use std::sync::Arc;

use grocer_catalog::CatalogStore;
use grocer_core::config::StoreConfig;
use grocer_core::session::Step;
use grocer_core::types::{Category, Product};
use grocer_engine::{ConversationEngine, Turn};
use grocer_session::{MemorySessionStore, SessionStore};

const SENDER: &str = "263771234567";

fn test_catalog() -> Arc<CatalogStore> {
    let mut drinks = Category::new("Drinks");
    drinks.add_product(Product::new("Coca Cola 2L", 39.99, "Soft drink", 10));
    drinks.add_product(Product::new("Sprite 2 Litres", 37.99, "Soft drink", 10));
    drinks.add_product(Product::new("Mazoe Orange Crush 2L", 69.99, "Fruit drink", 10));
    let mut pantry = Category::new("Pantry");
    pantry.add_product(Product::new("Jungle Oats 1kg", 44.99, "Oats", 5));
    Arc::new(CatalogStore::new(vec![drinks, pantry]))
}

fn engine() -> ConversationEngine {
    ConversationEngine::new(test_catalog(), StoreConfig::default())
}

/// One webhook turn: load, step, persist.
async fn turn(engine: &ConversationEngine, store: &MemorySessionStore, text: &str) -> Turn {
    let session = store.load(SENDER).await.unwrap();
    let turn = engine.handle(session, text);
    store.save(SENDER, &turn.session).await.unwrap();
    turn
}

#[tokio::test]
async fn scenario_a_greeting_to_first_category() {
    let engine = engine();
    let store = MemorySessionStore::new();

    let t = turn(&engine, &store, "hi").await;
    assert!(t.replies[0].contains("What's your name?"));

    let t = turn(&engine, &store, "Jane Doe").await;
    assert_eq!(t.session.step, Step::ChooseProduct);
    assert!(t.replies[0].contains("Here are products from Drinks:"));
    assert!(t.replies[0].contains("1. Coca Cola 2L - R39.99"));
}

#[tokio::test]
async fn scenario_b_product_selection_bounds() {
    let engine = engine();
    let store = MemorySessionStore::new();
    turn(&engine, &store, "hi").await;
    turn(&engine, &store, "Jane Doe").await;

    // "Drinks" has 3 products: "2" picks the second one.
    let t = turn(&engine, &store, "2").await;
    assert_eq!(t.session.step, Step::AskQuantity);
    assert!(t.replies[0].contains("You selected Sprite 2 Litres."));

    // Complete the add so we can come back to the same category.
    turn(&engine, &store, "1").await;
    let t = turn(&engine, &store, "4").await;
    assert_eq!(t.session.step, Step::ChooseProduct);

    // "5" is out of range for a 3-product category: re-prompt, same step.
    let t = turn(&engine, &store, "5").await;
    assert_eq!(t.session.step, Step::ChooseProduct);
    assert!(t.replies[0].contains("Invalid product number"));
}

#[tokio::test]
async fn scenario_c_harare_delivery_fee_reaches_total() {
    let engine = engine();
    let store = MemorySessionStore::new();
    turn(&engine, &store, "hi").await;
    turn(&engine, &store, "Jane Doe").await;
    turn(&engine, &store, "1").await;
    turn(&engine, &store, "1").await; // one Coca Cola

    turn(&engine, &store, "view").await;
    let t = turn(&engine, &store, "Harare").await;
    assert_eq!(t.session.step, Step::ChooseDeliveryOrPickup);

    let t = turn(&engine, &store, "delivery").await;
    let session = store.load(SENDER).await.unwrap();
    assert_eq!(t.session.step, Step::GetReceiverName);
    assert!(session
        .cart
        .lines()
        .iter()
        .any(|l| l.product.name == "Delivery to Harare" && l.product.price == 240.0));
    assert!((session.cart.total() - (39.99 + 240.0)).abs() < 1e-9);
}

#[tokio::test]
async fn scenario_d_full_checkout_places_order() {
    let engine = engine();
    let store = MemorySessionStore::new();
    turn(&engine, &store, "hey").await;
    turn(&engine, &store, "Jane Doe").await;
    turn(&engine, &store, "3").await;
    turn(&engine, &store, "2").await; // 2 x Mazoe
    turn(&engine, &store, "1").await; // view cart
    turn(&engine, &store, "Ruwa").await;
    turn(&engine, &store, "yes").await;
    turn(&engine, &store, "Tariro Moyo").await;
    turn(&engine, &store, "12 Acacia Drive, Ruwa").await;
    turn(&engine, &store, "63-123456A70").await;
    turn(&engine, &store, "263719999999").await;
    let t = turn(&engine, &store, "yes").await;
    assert_eq!(t.session.step, Step::AwaitPaymentSelection);

    let t = turn(&engine, &store, "1").await;
    let order = t.order.expect("payment selection finalizes an order");
    assert_eq!(order.order_id.len(), 8);
    assert!((order.total - (69.99 * 2.0 + 300.0)).abs() < 1e-9);
    assert!(t.owner_alert.is_some());

    let persisted = store.load(SENDER).await.unwrap();
    assert!(persisted.cart.is_empty());
    assert_eq!(persisted.step, Step::AskPlaceAnotherOrder);

    // "yes" loops back into browsing with pagination reset.
    let t = turn(&engine, &store, "yes").await;
    assert_eq!(t.session.step, Step::ChooseProduct);
    assert_eq!(t.session.category_index, 0);
}

#[tokio::test]
async fn bad_quantity_is_step_invariant_across_persistence() {
    let engine = engine();
    let store = MemorySessionStore::new();
    turn(&engine, &store, "hi").await;
    turn(&engine, &store, "Jane Doe").await;
    turn(&engine, &store, "1").await;

    let before = store.load(SENDER).await.unwrap();
    let t = turn(&engine, &store, "a dozen").await;
    assert_eq!(t.session.step, Step::AskQuantity);
    let after = store.load(SENDER).await.unwrap();
    assert_eq!(after.cart, before.cart);
    assert_eq!(after.selected_product, before.selected_product);
}
