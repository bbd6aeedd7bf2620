use order_desk::catalog::{Catalog, CatalogError, MenuCsv, MenuJsonLines};
use order_desk::model::{ItemId, MenuItem};
use std::fs;

fn tuples(catalog: &Catalog) -> Vec<(i32, String, String, f64)> {
    catalog
        .iter()
        .map(|item| {
            (
                item.id().0,
                item.name().to_string(),
                item.description().to_string(),
                item.price(),
            )
        })
        .collect()
}

/// Capacity 2 catalog: growth on the third insert, lookup, then an order-preserving delete.
#[test]
fn test_catalog_growth_lookup_and_delete() {
    let mut catalog = Catalog::with_capacity(2);
    catalog.add_item(MenuItem::new(1, "Soda", "Cold drink", 1.50)).unwrap();
    catalog.add_item(MenuItem::new(2, "Fries", "Side", 2.00)).unwrap();
    assert_eq!(catalog.capacity(), 2, "No resize while there is room");

    catalog.add_item(MenuItem::new(3, "Burger", "Main", 5.00)).unwrap();
    assert_eq!(catalog.capacity(), 4, "Third insert doubles the capacity");
    assert_eq!(catalog.len(), 3);

    let fries = catalog.get_item_by_id(ItemId(2)).expect("Fries should exist");
    assert_eq!(fries.name(), "Fries");
    assert_eq!(fries.price(), 2.00);

    let removed = catalog.delete_item(ItemId(1)).expect("Soda should be deleted");
    assert_eq!(removed.name(), "Soda");
    assert_eq!(catalog.len(), 2);

    let names: Vec<_> = catalog.iter().map(|i| i.name().to_string()).collect();
    assert_eq!(names, vec!["Fries", "Burger"]);
    assert_eq!(catalog.last_item_id(), Some(ItemId(3)));
}

#[test]
fn test_add_then_delete_restores_count_and_lookup_misses() {
    let mut catalog = Catalog::new();
    catalog.add_item(MenuItem::new(1, "Soda", "Cold drink", 1.5)).unwrap();
    let before = catalog.len();

    let item = MenuItem::new(9, "Pie", "Dessert", 3.25);
    catalog.add_item(item.clone()).unwrap();
    assert_eq!(catalog.get_item_by_id(item.id()), Some(item.clone()));

    catalog.delete_item(item.id()).unwrap();
    assert_eq!(catalog.len(), before);
    assert_eq!(catalog.get_item_by_id(item.id()), None);
}

#[test]
fn test_delete_missing_item_reports_not_found() {
    let mut catalog = Catalog::new();
    catalog.add_item(MenuItem::new(1, "Soda", "Cold drink", 1.5)).unwrap();

    assert_eq!(
        catalog.delete_item(ItemId(42)),
        Err(CatalogError::NotFound(ItemId(42)))
    );
    assert_eq!(catalog.len(), 1);
}

#[test]
fn test_reset_empties_and_restores_capacity() {
    let mut catalog = Catalog::with_capacity(1);
    for id in 1..=5 {
        catalog.add_item(MenuItem::new(id, "Item", "Desc", 1.0)).unwrap();
    }
    assert_eq!(catalog.capacity(), 8);

    catalog.reset();
    assert!(catalog.is_empty());
    assert_eq!(catalog.capacity(), 1);
    assert_eq!(catalog.last_item_id(), None);
}

#[test]
fn test_display_lists_items_or_empty_message() {
    let mut catalog = Catalog::new();
    assert_eq!(catalog.to_string(), "--- Menu Items ---\nNo items on menu.\n");

    catalog.add_item(MenuItem::new(1, "Soda", "Cold drink", 1.5)).unwrap();
    assert_eq!(
        catalog.to_string(),
        "--- Menu Items ---\nID: 1, Name: Soda, Price: $1.5\n"
    );
}

#[test]
fn test_csv_round_trip_reproduces_items() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.txt");

    let mut original = Catalog::with_capacity(2);
    original.add_item(MenuItem::new(1, "Soda", "Cold drink", 1.5)).unwrap();
    original.add_item(MenuItem::new(2, "Fries", "Side", 2.0)).unwrap();
    original.add_item(MenuItem::new(3, "Burger", "Main", 5.0)).unwrap();
    original.add_item(MenuItem::new(4, "Shake", "Vanilla", 3.1)).unwrap();
    original.save_to_file(&path).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "1,Soda,Cold drink,1.5\n2,Fries,Side,2\n3,Burger,Main,5\n4,Shake,Vanilla,3.1\n"
    );

    let mut reloaded = Catalog::with_capacity(2);
    let loaded = reloaded.load_from_file(&path).unwrap();
    assert_eq!(loaded, 4);
    assert_eq!(tuples(&reloaded), tuples(&original));
}

#[test]
fn test_load_appends_after_existing_items() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.txt");
    fs::write(&path, "5,Tea,Hot,1.25\n").unwrap();

    let mut catalog = Catalog::new();
    catalog.add_item(MenuItem::new(1, "Soda", "Cold drink", 1.5)).unwrap();
    catalog.load_from_file(&path).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.last_item_id(), Some(ItemId(5)));
}

#[test]
fn test_load_skips_malformed_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.txt");
    fs::write(
        &path,
        "1,Soda,Cold drink,1.5\n\nnot-a-number,Bad,Row,1\n2,Fries,Side\n3,Burger,Main,5\n",
    )
    .unwrap();

    let mut catalog = Catalog::new();
    let loaded = catalog.load_from_file(&path).unwrap();

    assert_eq!(loaded, 2);
    let ids: Vec<_> = catalog.iter().map(|i| i.id()).collect();
    assert_eq!(ids, vec![ItemId(1), ItemId(3)]);
}

#[test]
fn test_missing_file_is_an_io_error_and_leaves_catalog_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let mut catalog = Catalog::new();
    catalog.add_item(MenuItem::new(1, "Soda", "Cold drink", 1.5)).unwrap();

    let result = catalog.load_from_file(dir.path().join("absent.txt"));
    assert!(matches!(result, Err(CatalogError::Io { .. })));
    assert_eq!(catalog.len(), 1);
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::new();
    let result = catalog.save_to_file(dir.path().join("no/such/dir/menu.txt"));
    assert!(matches!(result, Err(CatalogError::Io { .. })));
}

#[test]
fn test_json_lines_codec_swaps_in_without_container_changes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.jsonl");

    let mut original = Catalog::new();
    original
        .add_item(MenuItem::new(1, "Fish, Chips", "Fried, salted", 8.5))
        .unwrap();
    original.add_item(MenuItem::new(2, "Soda", "Cold drink", 1.5)).unwrap();
    original.save_with(&path, &MenuJsonLines).unwrap();

    let mut reloaded = Catalog::new();
    reloaded.load_with(&path, &MenuJsonLines).unwrap();
    assert_eq!(tuples(&reloaded), tuples(&original));

    // The comma-separated reader splits the embedded commas differently.
    let mut csv = Catalog::new();
    csv.load_with(&path, &MenuCsv).unwrap();
    assert!(csv.is_empty());
}
