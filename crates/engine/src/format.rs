//! Outbound message rendering. Amounts are formatted to two decimals here,
//! at the display boundary only; stored prices stay untouched.

use grocer_core::cart::{Cart, CartLine};
use grocer_core::order::Order;
use grocer_core::session::CheckoutData;
use grocer_core::types::{DeliveryArea, Product};

/// "jane  van der merwe" -> "Jane Van Der Merwe".
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Numbered product listing for one category page.
pub fn product_list(products: &[Product], currency: &str) -> String {
    products
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}. {} - {currency}{:.2}", i + 1, p.name, p.price))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_cart(cart: &Cart, currency: &str) -> String {
    render_lines(cart.lines(), currency)
}

pub fn render_lines(lines: &[CartLine], currency: &str) -> String {
    if lines.is_empty() {
        return "Your cart is empty.".to_string();
    }
    let body = lines
        .iter()
        .map(|l| {
            format!(
                "{} x{} = {currency}{:.2}",
                l.product.name,
                l.quantity,
                l.subtotal()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    let total: f64 = lines.iter().map(CartLine::subtotal).sum();
    format!("{body}\n\nTotal: {currency}{total:.2}")
}

pub fn delivery_area_list(areas: &[DeliveryArea], currency: &str) -> String {
    areas
        .iter()
        .map(|a| format!("{} - {currency}{:.2}", a.name, a.fee))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn post_add_menu() -> &'static str {
    "What would you like to do next?\n1. View cart\n2. Clear cart\n3. Remove <item>\n4. Add item"
}

pub fn payment_menu() -> &'static str {
    "Please select a payment method:\n\
     1. EFT\n\
     2. Pay at SHOPRITE/CHECKERS/USAVE/PICK N PAY/GAME/MAKRO/SPAR using Mukuru wicode\n\
     3. World Remit\n\
     4. Western Union\n\
     5. Mukuru Direct Transfer (DETAILS PROVIDED UPON REQUEST)"
}

/// Map a payment menu selection to its instruction text. The EFT option
/// embeds the order id as the bank reference.
pub fn payment_instructions(selection: &str, order_id: &str) -> Option<String> {
    match selection {
        "1" => Some(format!(
            "EFT\nBank: FNB\nName: Zimbogrocer (Pty) Ltd\nAccount: 62847698167\n\
             Branch Code: 250655\nSwift Code: FIRNZAJJ\nReference: {order_id}"
        )),
        "2" => Some(
            "Pay at SHOPRITE/CHECKERS/USAVE/PICK N PAY/GAME/MAKRO/SPAR using Mukuru wicode"
                .to_string(),
        ),
        "3" => Some("World Remit Transfer (details provided upon request)".to_string()),
        "4" => Some("Western Union (details provided upon request)".to_string()),
        "5" => Some("Mukuru Direct Transfer (DETAILS PROVIDED UPON REQUEST)".to_string()),
        _ => None,
    }
}

pub fn confirm_echo(checkout: &CheckoutData) -> String {
    format!(
        "Please confirm the details below:\n\nName: {}\nAddress: {}\nID: {}\nPhone: {}\n\nAre these correct? (yes/no)",
        checkout.receiver_name.as_deref().unwrap_or("N/A"),
        checkout.address.as_deref().unwrap_or("N/A"),
        checkout.receiver_id.as_deref().unwrap_or("N/A"),
        checkout.phone.as_deref().unwrap_or("N/A"),
    )
}

pub fn owner_notification(order: &Order, currency: &str) -> String {
    format!(
        "New Order #{}\nFrom: {} ({})\nReceiver: {}\nID: {}\nAddress: {}\nPhone: {}\nPayment Method: {}\n\nItems:\n{}",
        order.order_id,
        order.payer_name,
        order.payer_phone,
        order.checkout.receiver_name.as_deref().unwrap_or("N/A"),
        order.checkout.receiver_id.as_deref().unwrap_or("N/A"),
        order.checkout.address.as_deref().unwrap_or("N/A"),
        order.checkout.phone.as_deref().unwrap_or("N/A"),
        order.payment_method,
        render_lines(&order.items, currency),
    )
}

pub fn order_confirmation(order: &Order, currency: &str) -> String {
    format!(
        "Order placed! \u{1F6D2}\nOrder ID: {}\n\n{}\n\nReceiver: {}\nID: {}\nAddress: {}\nPhone: {}\n\nPayment Method: {}\n\nWould you like to place another order? (yes/no)",
        order.order_id,
        render_lines(&order.items, currency),
        order.checkout.receiver_name.as_deref().unwrap_or("N/A"),
        order.checkout.receiver_id.as_deref().unwrap_or("N/A"),
        order.checkout.address.as_deref().unwrap_or("N/A"),
        order.checkout.phone.as_deref().unwrap_or("N/A"),
        order.payment_method,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use grocer_core::types::ProductSnapshot;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("jane doe"), "Jane Doe");
        assert_eq!(title_case("  tariro   moyo "), "Tariro Moyo");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_render_cart_empty_and_totals() {
        let mut cart = Cart::new();
        assert_eq!(render_cart(&cart, "R"), "Your cart is empty.");

        cart.add(ProductSnapshot::new("Coca Cola 2L", 39.99, ""), 2);
        let rendered = render_cart(&cart, "R");
        assert!(rendered.contains("Coca Cola 2L x2 = R79.98"));
        assert!(rendered.contains("Total: R79.98"));
    }

    #[test]
    fn test_payment_instructions_mapping() {
        let eft = payment_instructions("1", "AB12CD34").unwrap();
        assert!(eft.contains("Reference: AB12CD34"));
        assert!(payment_instructions("5", "X").is_some());
        assert!(payment_instructions("6", "X").is_none());
        assert!(payment_instructions("eft", "X").is_none());
    }

    #[test]
    fn test_confirm_echo_uses_na_for_missing() {
        let checkout = CheckoutData {
            receiver_name: Some("Tariro Moyo".to_string()),
            ..Default::default()
        };
        let echo = confirm_echo(&checkout);
        assert!(echo.contains("Name: Tariro Moyo"));
        assert!(echo.contains("Address: N/A"));
    }
}
