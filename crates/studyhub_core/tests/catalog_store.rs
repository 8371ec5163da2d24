use studyhub_core::db::open_db;
use studyhub_core::{
    sample_catalog, Catalog, CatalogPersistence, CatalogStore, KvRepository, MemoryKvRepository,
    Resource, SqliteKvRepository, StoreError, Theme, ThemePersistence, ThemeSession, CATALOG_KEY,
    THEME_KEY,
};

fn counts(catalog: &Catalog) -> Vec<(String, usize)> {
    catalog
        .entries()
        .map(|(subject, resources)| (subject.to_string(), resources.len()))
        .collect()
}

#[test]
fn empty_storage_loads_sample_subjects() {
    let store = CatalogStore::new(MemoryKvRepository::new());
    let catalog = store.load_catalog();

    assert_eq!(
        counts(&catalog),
        vec![
            ("Math".to_string(), 2),
            ("Computer Science".to_string(), 2),
            ("Biology".to_string(), 1),
        ]
    );
}

#[test]
fn save_then_load_preserves_catalog_and_order() {
    let repo = MemoryKvRepository::new();
    let store = CatalogStore::new(repo.clone());

    let mut catalog = Catalog::new();
    catalog.add_resource(
        "Zoology",
        Resource::with_desc("Animal Diversity", "https://animaldiversity.org", "Taxa"),
    );
    catalog.add_resource("Algebra", Resource::new("Paul's Notes", "https://tutorial.math.lamar.edu"));
    catalog.add_resource("Zoology", Resource::new("iNaturalist", "https://www.inaturalist.org"));
    store.save_catalog(&catalog).unwrap();

    let loaded = CatalogStore::new(repo).load_catalog();
    assert_eq!(loaded, catalog);
    assert_eq!(
        loaded.subjects().collect::<Vec<_>>(),
        vec!["Zoology", "Algebra"]
    );
}

#[test]
fn stored_layout_is_subject_to_resource_array_object() {
    let repo = MemoryKvRepository::new();
    let store = CatalogStore::new(repo.clone());
    let mut catalog = Catalog::new();
    catalog.add_resource("Chem", Resource::new("Test Site", "https://example.com"));
    store.save_catalog(&catalog).unwrap();

    let raw = repo.raw(CATALOG_KEY).expect("catalog key should be written");
    let value: serde_json::Value = serde_json::from_str(raw.as_str()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "Chem": [{"name": "Test Site", "url": "https://example.com", "desc": ""}]
        })
    );
}

#[test]
fn corrupt_blob_falls_back_to_sample_data() {
    let repo = MemoryKvRepository::new();
    repo.set(CATALOG_KEY, "{not json").unwrap();
    let store = CatalogStore::new(repo.clone());

    assert_eq!(store.load_catalog(), sample_catalog());
    assert!(matches!(
        store.try_load_catalog(),
        Err(StoreError::Corrupt { key: CATALOG_KEY, .. })
    ));

    repo.set(CATALOG_KEY, "[1, 2, 3]").unwrap();
    assert_eq!(store.load_catalog(), sample_catalog());
}

#[test]
fn unreadable_storage_falls_back_to_sample_data() {
    let repo = MemoryKvRepository::new();
    repo.set_read_failure(true);
    let store = CatalogStore::new(repo);

    assert_eq!(store.load_catalog(), sample_catalog());
}

#[test]
fn rejected_write_is_reported_to_caller() {
    let repo = MemoryKvRepository::new();
    repo.set_reject_writes(true);
    let store = CatalogStore::new(repo.clone());

    let err = store.save_catalog(&sample_catalog()).unwrap_err();
    assert!(matches!(err, StoreError::Repo(_)));
    assert_eq!(repo.raw(CATALOG_KEY), None);
}

#[test]
fn loaded_sample_is_an_independent_copy() {
    let store = CatalogStore::new(MemoryKvRepository::new());
    let mut first = store.load_catalog();
    first.delete_subject("Math");

    let second = store.load_catalog();
    assert!(second.contains_subject("Math"));
}

#[test]
fn sqlite_backed_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("studyhub.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        let store = CatalogStore::new(SqliteKvRepository::new(&conn));
        let mut catalog = store.load_catalog();
        catalog.add_resource("Chem", Resource::new("Test Site", "https://example.com"));
        store.save_catalog(&catalog).unwrap();
        store.save_theme(Theme::Dark).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let store = CatalogStore::new(SqliteKvRepository::new(&conn));
    let catalog = store.load_catalog();
    assert_eq!(catalog.resources("Chem").map(<[Resource]>::len), Some(1));
    assert_eq!(catalog.len_subjects(), 4);
    assert_eq!(store.load_theme().unwrap(), Some(Theme::Dark));
}

#[test]
fn theme_is_stored_as_json_boolean_under_own_key() {
    let repo = MemoryKvRepository::new();
    let store = CatalogStore::new(repo.clone());

    store.save_theme(Theme::Light).unwrap();
    assert_eq!(repo.raw(THEME_KEY).as_deref(), Some("true"));
    store.save_theme(Theme::Dark).unwrap();
    assert_eq!(repo.raw(THEME_KEY).as_deref(), Some("false"));
    assert_eq!(repo.raw(CATALOG_KEY), None);
}

#[test]
fn theme_restore_defaults_to_light_when_missing_or_corrupt() {
    let repo = MemoryKvRepository::new();
    let store = CatalogStore::new(repo.clone());
    assert_eq!(ThemeSession::restore(&store).theme(), Theme::Light);

    repo.set(THEME_KEY, "\"purple\"").unwrap();
    assert_eq!(ThemeSession::restore(&store).theme(), Theme::Light);

    repo.set(THEME_KEY, "false").unwrap();
    assert_eq!(ThemeSession::restore(&store).theme(), Theme::Dark);
}

#[test]
fn theme_toggle_survives_write_failure_in_memory() {
    let repo = MemoryKvRepository::new();
    let store = CatalogStore::new(repo.clone());
    let mut session = ThemeSession::restore(&store);

    repo.set_reject_writes(true);
    assert_eq!(session.toggle(&store), Theme::Dark);
    assert_eq!(session.theme(), Theme::Dark);
    assert_eq!(repo.raw(THEME_KEY), None);

    repo.set_reject_writes(false);
    assert_eq!(session.toggle(&store), Theme::Light);
    assert_eq!(repo.raw(THEME_KEY).as_deref(), Some("true"));
}
