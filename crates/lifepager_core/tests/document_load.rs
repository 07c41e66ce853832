use lifepager_core::{
    load_document, try_load_document, ColorParseError, DirAssetSource, Document, DocumentLoad,
    LoadError, MemoryAssetSource, ThemeColor, DOCUMENT_ASSET,
};

const FULL_DOCUMENT: &str = r##"{
    "title": "Kenji",
    "themeColor": "#FFE0F0",
    "iconUrl": "",
    "birthYear": 1988,
    "unknownField": {"ignored": true},
    "profiles": [{"name": "About", "items": ["Osaka"]}],
    "timelines": [
        {
            "title": "Education",
            "memo": "approximate",
            "startYear": 1994,
            "endYear": 2010,
            "useConvertedYear": true,
            "yearStrict": true,
            "items": [
                {"name": "Elementary", "texts": ["Local school"], "startYear": 1995, "endYear": 2000},
                {"name": "Guitar", "texts": [], "startYear": 2003}
            ]
        }
    ]
}"##;

fn memory_source(json: &str) -> MemoryAssetSource {
    MemoryAssetSource::new().with_asset(DOCUMENT_ASSET, json.as_bytes().to_vec())
}

#[test]
fn full_document_round_trips_schema_fields() {
    let doc = load_document(&memory_source(FULL_DOCUMENT));

    assert_eq!(doc.title, "Kenji");
    assert_eq!(doc.color(), ThemeColor::from_rgb(0xFFE0F0));
    assert_eq!(doc.birth_year, 1988);
    assert_eq!(doc.page_count(), 2);

    let timeline = &doc.timelines[0];
    assert_eq!(timeline.memo, "approximate");
    assert_eq!(timeline.end_year, Some(2010));
    assert!(timeline.use_converted_year);
    assert!(timeline.year_strict);
    assert_eq!(timeline.items[0].texts, vec!["Local school".to_string()]);
    assert_eq!(timeline.items[1].end_year, None);
}

#[test]
fn optional_timeline_fields_take_defaults() {
    let doc = load_document(&memory_source(
        r#"{"timelines":[{"title":"T","startYear":2000,"items":[]}]}"#,
    ));
    let timeline = &doc.timelines[0];
    assert_eq!(timeline.memo, "");
    assert_eq!(timeline.end_year, None);
    assert!(!timeline.use_converted_year);
    assert!(!timeline.year_strict);
}

#[test]
fn malformed_document_falls_back_to_default() {
    let source = memory_source(r#"{"title": "broken", "profiles": 3}"#);
    assert!(matches!(
        try_load_document(&source),
        Err(LoadError::Parse(_))
    ));
    assert_eq!(load_document(&source), Document::default());
}

#[test]
fn invalid_theme_color_keeps_document_and_renders_white() {
    let doc = load_document(&memory_source(r#"{"title":"T","themeColor":"not-a-color"}"#));
    assert_eq!(doc.title, "T");
    assert_eq!(doc.color(), ThemeColor::WHITE);
}

#[test]
fn theme_color_is_parsed_once_at_load() {
    let doc = load_document(&memory_source(r##"{"themeColor":"#80112233"}"##));
    assert_eq!(doc.theme_color.raw(), "#80112233");
    assert!(doc.theme_color.error().is_none());
    assert_eq!(doc.color().argb(), 0x8011_2233);

    let bad = load_document(&memory_source(r#"{"themeColor":"sunset"}"#));
    assert_eq!(
        bad.theme_color.error(),
        Some(&ColorParseError::Unknown("sunset".to_string()))
    );
    assert_eq!(bad.color(), bad.color());
}

#[test]
fn directory_source_loads_profile_asset() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    std::fs::write(dir.path().join(DOCUMENT_ASSET), FULL_DOCUMENT).expect("write asset");

    let doc = load_document(&DirAssetSource::new(dir.path()));
    assert_eq!(doc.title, "Kenji");
}

#[test]
fn directory_source_without_asset_falls_back() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let source = DirAssetSource::new(dir.path());

    assert!(matches!(
        try_load_document(&source),
        Err(LoadError::AssetMissing(_))
    ));
    assert_eq!(load_document(&source), Document::default());
}

#[test]
fn background_load_delivers_once() {
    let mut load = DocumentLoad::spawn(memory_source(FULL_DOCUMENT));
    let doc = loop {
        if let Some(doc) = load.try_take() {
            break doc;
        }
        std::thread::yield_now();
    };
    assert_eq!(doc.title, "Kenji");
    assert!(!load.is_pending());
    assert!(load.try_take().is_none());
}
