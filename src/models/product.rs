/// A priced line: unit price and how many units were bought.
///
/// Neither field is validated. A negative price or a huge quantity is
/// priced like any other product.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Product {
    pub price: f64,
    pub quantity: u32,
}

impl Product {
    pub fn new(price: f64, quantity: u32) -> Self {
        Self { price, quantity }
    }

    /// Unit price multiplied by quantity, before any discount.
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.quantity, self.price)
    }
}
