use shared_types::CartItem;

/// GST applied to every service.
pub const TAX_RATE: f64 = 0.18;

/// The shopping cart held by the page. Items with quantity 0 are never
/// retained; ids are unique within the cart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new(items: Vec<CartItem>) -> Self {
        let mut cart = Cart { items: Vec::new() };
        for item in items {
            cart.add_item(item);
        }
        cart
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add an item to the cart. If an item with the same id is already
    /// present its quantity is increased instead.
    pub fn add_item(&mut self, item: CartItem) {
        if item.quantity == 0 {
            return;
        }
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity += item.quantity;
        } else {
            self.items.push(item);
        }
    }

    /// Set the quantity of the item with the given id. Negative quantities
    /// clamp to zero, and an item reaching zero is dropped from the cart.
    /// Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        let quantity = quantity.max(0) as u32;

        if quantity == 0 {
            self.remove_item(id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity = quantity;
        }
    }

    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }

    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum()
    }

    pub fn tax(&self) -> f64 {
        self.subtotal() * TAX_RATE
    }

    pub fn total(&self) -> f64 {
        self.subtotal() * (1.0 + TAX_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: f64, quantity: u32) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: format!("Item {id}"),
            price,
            quantity,
            image: None,
            category: None,
        }
    }

    fn seeded() -> Cart {
        Cart::new(vec![
            item("hair-treatment", 2999.0, 1),
            item("facial-package", 1999.0, 1),
        ])
    }

    #[test]
    fn update_quantity_replaces_quantity() {
        let mut cart = seeded();

        cart.update_quantity("hair-treatment", 3);

        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.total_items(), 4);
    }

    #[test]
    fn quantity_zero_drops_the_item() {
        let mut cart = seeded();

        cart.update_quantity("hair-treatment", 0);

        assert_eq!(cart.items().len(), 1);
        assert!(cart.items().iter().all(|i| i.id != "hair-treatment"));
    }

    #[test]
    fn negative_quantity_clamps_to_zero() {
        let mut cart = seeded();

        cart.update_quantity("facial-package", -5);

        assert!(cart.items().iter().all(|i| i.quantity > 0));
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut cart = seeded();
        let before = cart.clone();

        cart.update_quantity("missing", 7);

        assert_eq!(cart, before);
    }

    #[test]
    fn remove_item_is_idempotent() {
        let mut cart = seeded();

        cart.remove_item("facial-package");
        cart.remove_item("facial-package");

        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn add_item_merges_duplicate_ids() {
        let mut cart = seeded();

        cart.add_item(item("hair-treatment", 2999.0, 2));

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn add_item_ignores_zero_quantity() {
        let mut cart = Cart::default();

        cart.add_item(item("hair-treatment", 2999.0, 0));

        assert!(cart.is_empty());
    }

    #[test]
    fn totals_for_seeded_cart() {
        let cart = seeded();

        assert_eq!(cart.total_items(), 2);
        assert!((cart.subtotal() - 4998.0).abs() < 1e-9);
        assert!((cart.tax() - 899.64).abs() < 1e-9);
        assert!((cart.total() - 5897.64).abs() < 1e-9);
    }

    #[test]
    fn totals_track_quantity_changes() {
        let mut cart = seeded();

        cart.update_quantity("facial-package", 2);

        assert_eq!(cart.total_items(), 3);
        assert!((cart.subtotal() - 6997.0).abs() < 1e-9);
        assert!((cart.total() - cart.subtotal() * 1.18).abs() < 1e-9);
    }

    #[test]
    fn empty_cart_totals_are_zero() {
        let cart = Cart::default();

        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.subtotal(), 0.0);
        assert_eq!(cart.total(), 0.0);
    }
}
