//! Cart model behind the store and product buttons.

/// Price used by the product modal's add-to-cart button.
pub const MODAL_PRICE: f32 = 3.99;
pub const NOTIFICATION_MS: i32 = 3000;

#[derive(Clone, Debug, PartialEq)]
pub struct CartItem {
    pub name: String,
    pub price: f32,
}

#[derive(Clone, Debug, Default)]
pub struct Cart {
    items: Vec<CartItem>,
    total: f32,
}

impl Cart {
    pub fn add(&mut self, name: impl Into<String>, price: f32) {
        let price = if price.is_finite() { price } else { 0.0 };
        self.items.push(CartItem {
            name: name.into(),
            price,
        });
        self.total += price;
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn total(&self) -> f32 {
        self.total
    }

    #[inline]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }
}

/// Parse a card price such as `"$3.99"`. Unparseable text yields `None`.
pub fn parse_price(text: &str) -> Option<f32> {
    text.trim()
        .trim_start_matches('$')
        .trim_start_matches('₹')
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|p| p.is_finite())
}

pub fn added_message(name: &str) -> String {
    format!("Added {} to cart!", name)
}
