//! Concurrency and thread safety tests for Bodega

use std::sync::Arc;
use std::thread;

use bodega::{Catalog, Inventory, ProductRecord, VisibleStock};

fn shared_inventory() -> Arc<Inventory> {
    let records = (0..200).map(|i| {
        ProductRecord::new(
            format!("{i:05}"),
            format!("Tornillo {}mm acero", i % 20 + 1),
            if i % 2 == 0 { "Fixa" } else { "Acme" },
            "Ferreteria",
            i,
        )
    });
    Arc::new(Inventory::from_catalog(Catalog::from_records(records)).unwrap())
}

#[test]
fn concurrent_need_queries_agree() {
    let inv = shared_inventory();
    let expected = inv.search_by_need("tornillo 15mm", "vendedor");
    assert_eq!(expected.products().len(), 60);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let inv = Arc::clone(&inv);
            thread::spawn(move || inv.search_by_need("tornillo 15mm", "vendedor"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn concurrent_mixed_roles_do_not_interfere() {
    let inv = shared_inventory();

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let inv = Arc::clone(&inv);
            thread::spawn(move || {
                let role = if i % 2 == 0 { "cliente" } else { "vendedor" };
                (role, inv.lookup_by_code("00150", role))
            })
        })
        .collect();

    for handle in handles {
        let (role, outcome) = handle.join().unwrap();
        let stock = outcome.products()[0].stock;
        match role {
            "cliente" => assert_eq!(stock, VisibleStock::Capped(10)),
            _ => assert_eq!(stock, VisibleStock::Exact(150)),
        }
    }
}

#[test]
fn cloned_inventories_share_catalog() {
    let inv = shared_inventory();
    let clone = (*inv).clone();
    assert!(std::ptr::eq(inv.catalog(), clone.catalog()));

    let handle = thread::spawn(move || clone.search_by_brand("fixa", "cliente"));
    let from_thread = handle.join().unwrap();
    assert_eq!(from_thread, inv.search_by_brand("fixa", "cliente"));
    assert_eq!(from_thread.products().len(), 100);
}
