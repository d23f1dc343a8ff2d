//! End-to-end inventory scenarios over the file-backed store.

use rigparts_fields::{Category, FieldValue, RawRecord};
use rigparts_inventory::{CategoryManager, FormMode, InventoryError, Session, StaticAuth};
use rigparts_store::FileStore;
use std::time::Duration;
use tempfile::TempDir;

fn setup() -> (TempDir, CategoryManager<FileStore, StaticAuth>) {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path().join("inventory"));
    let auth = StaticAuth::signed_in(Session::new("tester"));
    (temp, CategoryManager::new(store, auth))
}

fn ram_kit(name: &str, price: &str) -> RawRecord {
    RawRecord::new()
        .with("name", name)
        .with("brand", "Corsair")
        .with("price", price)
        .with("capacity", "16GB")
        .with("type", "DDR5")
        .with("speed", "6000MHz")
}

#[tokio::test]
async fn ram_create_edit_scenario() {
    let (_temp, mut manager) = setup();
    manager.select_category(Category::Ram).await.unwrap();

    // Create "Kit A" at price 80.
    manager.begin_create();
    manager.submit(&ram_kit("Kit A", "80")).await.unwrap();

    // A second, newer record lists first.
    tokio::time::sleep(Duration::from_millis(5)).await;
    manager.begin_create();
    manager.submit(&ram_kit("Kit B", "95")).await.unwrap();

    let records = manager.records();
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0].value("name"),
        Some(&FieldValue::Text("Kit B".into()))
    );
    assert_eq!(
        records[1].value("name"),
        Some(&FieldValue::Text("Kit A".into()))
    );

    // Edit Kit A's price from 80 to 75.
    let kit_a = records[1].id.clone();
    manager.begin_edit(&kit_a).unwrap();
    let mut form = manager.form_input().unwrap();
    assert_eq!(form.get("price"), Some("80"));
    form.set("price", "75");
    manager.submit(&form).await.unwrap();

    let records = manager.records();
    assert_eq!(records.len(), 2);
    let kit_a_after = records.iter().find(|r| r.id == kit_a).unwrap();
    assert_eq!(kit_a_after.value("price"), Some(&FieldValue::Float(75.0)));
}

#[tokio::test]
async fn insert_list_update_delete_round_trip() {
    let (_temp, mut manager) = setup();
    manager.select_category(Category::Ram).await.unwrap();

    manager.begin_create();
    manager.submit(&ram_kit("Keeper", "80")).await.unwrap();
    let before = manager.records().len();

    manager.begin_create();
    manager.submit(&ram_kit("Transient", "60")).await.unwrap();
    let transient = manager.records()[0].id.clone();

    manager.begin_edit(&transient).unwrap();
    manager.submit(&ram_kit("Transient", "55")).await.unwrap();

    manager.delete_record(&transient).await.unwrap();
    assert_eq!(manager.records().len(), before);
}

#[tokio::test]
async fn records_survive_a_new_manager_over_the_same_store() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("inventory");
    let auth = || StaticAuth::signed_in(Session::new("tester"));

    let mut first = CategoryManager::new(FileStore::new(&root), auth());
    first.select_category(Category::Ram).await.unwrap();
    first.begin_create();
    first.submit(&ram_kit("Kit A", "80")).await.unwrap();

    let mut second = CategoryManager::new(FileStore::new(&root), auth());
    second.select_category(Category::Ram).await.unwrap();
    assert_eq!(second.records().len(), 1);
    assert_eq!(
        second.records()[0].value("name"),
        Some(&FieldValue::Text("Kit A".into()))
    );
}

#[tokio::test]
async fn validation_error_reaches_caller_before_the_store() {
    let (_temp, mut manager) = setup();
    manager.select_category(Category::Cpus).await.unwrap();

    manager.begin_create();
    let err = manager
        .submit(&RawRecord::new().with("name", "x"))
        .await
        .unwrap_err();
    match err {
        InventoryError::Validation(v) => assert_eq!(v.field(), "socket"),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(manager.mode(), &FormMode::Creating);
    assert!(manager.records().is_empty());
}

#[tokio::test]
async fn sign_out_gates_further_mutations() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path().join("inventory"));
    let auth = StaticAuth::signed_in(Session::new("tester"));
    let mut manager = CategoryManager::new(store, auth);

    manager.select_category(Category::Cases).await.unwrap();
    manager.begin_create();
    let form = RawRecord::new()
        .with("form_factor", "Mid Tower")
        .with("motherboard_support", "ATX, Micro-ATX")
        .with("name", "Meshify")
        .with("brand", "Fractal")
        .with("price", "109.99");
    manager.submit(&form).await.unwrap();

    // Same store, signed-out session.
    let mut signed_out =
        CategoryManager::new(FileStore::new(temp.path().join("inventory")), StaticAuth::signed_out());
    signed_out.select_category(Category::Cases).await.unwrap();
    assert_eq!(signed_out.records().len(), 1);

    let id = signed_out.records()[0].id.clone();
    let err = signed_out.delete_record(&id).await.unwrap_err();
    assert!(matches!(err, InventoryError::SessionExpired));

    // List untouched by the refused delete.
    signed_out.load_category().await.unwrap();
    assert_eq!(signed_out.records().len(), 1);
}
