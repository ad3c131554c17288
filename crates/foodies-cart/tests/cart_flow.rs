//! End-to-end cart and checkout scenarios against in-memory storage.

use std::cell::{Cell, RefCell};

use foodies_cart::{
    run_checkout, CartStore, CartView, CheckoutOutcome, Dialogs, MemoryStorage, Money,
    EMPTY_CART_NOTICE, ORDER_PLACED_NOTICE,
};

const KEY: &str = "foodies_cart_v1";

/// Dialogs that answer `confirm` with a fixed reply and record everything.
struct ScriptedDialogs {
    reply: bool,
    alerts: RefCell<Vec<String>>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedDialogs {
    fn answering(reply: bool) -> Self {
        Self {
            reply,
            alerts: RefCell::new(Vec::new()),
            prompts: RefCell::new(Vec::new()),
        }
    }
}

impl Dialogs for ScriptedDialogs {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.reply
    }
}

fn burger_and_fries(storage: &MemoryStorage) -> CartStore<&MemoryStorage> {
    let store = CartStore::new(storage, KEY);
    for (name, price) in [("Burger", 120.0), ("Burger", 120.0), ("Fries", 60.0)] {
        store.update(|cart| Ok(cart.add(name, price))).unwrap();
    }
    store
}

#[test]
fn add_twice_then_once() {
    let storage = MemoryStorage::new();
    let store = burger_and_fries(&storage);

    let cart = store.load();
    let lines: Vec<(&str, u32)> = cart.items().iter().map(|i| (i.name.as_str(), i.qty)).collect();
    assert_eq!(lines, vec![("Burger", 2), ("Fries", 1)]);

    let view = CartView::project(&cart, "₱");
    assert_eq!(view.total_text(), "300.00");
    assert_eq!(view.count_text(), "3");
}

#[test]
fn edits_never_drop_below_one() {
    let storage = MemoryStorage::new();
    let store = burger_and_fries(&storage);

    store.update(|cart| cart.decrement(1)).unwrap();
    store.update(|cart| cart.set_quantity_from_input(0, "0")).unwrap();
    assert_eq!(store.load().item_count(), 2);

    store.update(|cart| cart.set_quantity_from_input(0, "-5")).unwrap();
    store.update(|cart| cart.set_quantity_from_input(1, "lots")).unwrap();
    assert!(store.load().items().iter().all(|i| i.qty == 1));
}

#[test]
fn stale_index_leaves_storage_untouched() {
    let storage = MemoryStorage::new();
    let store = burger_and_fries(&storage);
    let before = storage.raw(KEY);

    assert!(store.update(|cart| cart.remove(5)).is_err());
    assert_eq!(storage.raw(KEY), before);
}

#[test]
fn checkout_on_empty_cart_changes_nothing() {
    let storage = MemoryStorage::new().with_entry(KEY, "[]");
    let store = CartStore::new(&storage, KEY);
    let dialogs = ScriptedDialogs::answering(true);
    let placed = Cell::new(false);

    let outcome = run_checkout(&store, &dialogs, "₱", || placed.set(true)).unwrap();

    assert_eq!(outcome, CheckoutOutcome::EmptyCart);
    assert_eq!(storage.raw(KEY).as_deref(), Some("[]"));
    assert!(!placed.get());
    assert!(dialogs.prompts.borrow().is_empty());
    assert_eq!(*dialogs.alerts.borrow(), vec![EMPTY_CART_NOTICE.to_string()]);
}

#[test]
fn confirmed_checkout_clears_cart() {
    let storage = MemoryStorage::new();
    let store = burger_and_fries(&storage);
    let dialogs = ScriptedDialogs::answering(true);
    let count_after = Cell::new(u64::MAX);

    let outcome = run_checkout(&store, &dialogs, "₱", || {
        count_after.set(CartView::project(&store.load(), "₱").count);
    })
    .unwrap();

    assert_eq!(
        outcome,
        CheckoutOutcome::Placed {
            total: Money::new(30000),
            items: 3
        }
    );
    assert!(storage.raw(KEY).is_none());
    assert_eq!(count_after.get(), 0);
    assert!(dialogs.prompts.borrow()[0].contains("Total: ₱300.00"));
    assert_eq!(*dialogs.alerts.borrow(), vec![ORDER_PLACED_NOTICE.to_string()]);
}

#[test]
fn declined_checkout_keeps_cart() {
    let storage = MemoryStorage::new();
    let store = burger_and_fries(&storage);
    let before = storage.raw(KEY);
    let dialogs = ScriptedDialogs::answering(false);

    let outcome = run_checkout(&store, &dialogs, "₱", || panic!("must not run")).unwrap();

    assert_eq!(outcome, CheckoutOutcome::Declined);
    assert_eq!(storage.raw(KEY), before);
    assert_eq!(store.load().item_count(), 3);
    assert!(dialogs.alerts.borrow().is_empty());
}

#[test]
fn malformed_storage_reads_as_empty_and_is_overwritten() {
    let storage = MemoryStorage::new().with_entry(KEY, "not json");
    let store = CartStore::new(&storage, KEY);

    assert!(store.load().is_empty());
    store.update(|cart| Ok(cart.add("Tea", 20.0))).unwrap();
    assert_eq!(store.load().item_count(), 1);
}
