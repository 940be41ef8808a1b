use super::*;

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Draft {
    name: String,
    count: u32,
}

#[test]
fn memory_storage_set_get_remove() {
    let store = MemoryStorage::new();
    assert_eq!(store.get_item("k"), None);
    store.set_item("k", "v");
    assert_eq!(store.get_item("k").as_deref(), Some("v"));
    store.remove_item("k");
    assert_eq!(store.get_item("k"), None);
}

#[test]
fn memory_storage_clones_share_items() {
    let store = MemoryStorage::new();
    let other = store.clone();
    store.set_item("theme", "light");
    assert_eq!(other.get_item("theme").as_deref(), Some("light"));
}

#[test]
fn json_helpers_store_and_load_values() {
    let store = MemoryStorage::new();
    save_json(&store, "draft", &Draft { name: "a".to_owned(), count: 2 });
    assert_eq!(load_json::<Draft>(&store, "draft"), Some(Draft { name: "a".to_owned(), count: 2 }));
}

#[test]
fn load_json_ignores_malformed_entries() {
    let store = MemoryStorage::new();
    store.set_item("draft", "{not json");
    assert_eq!(load_json::<Draft>(&store, "draft"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_is_inert_off_browser() {
    let store = LocalStorage;
    store.set_item("theme", "light");
    assert_eq!(store.get_item("theme"), None);
    store.remove_item("theme");
}
