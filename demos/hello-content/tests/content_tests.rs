#![allow(non_snake_case)]

//! Behavior of the generated content types, exercised through real generated code.

use coppy_runtime::{
    ContentConfig, ContentFetcher, ContentResult, FetchedContent, RefreshOutcome, Updatable,
    UpdateType,
};
use hello_content::content::{
    CoppyContent, CoppyContentFeatures, CoppyContentHero, CoppyContentHeroCta,
};
use hello_content::{Site, render_home};
use serde_json::{Map, Value, json};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(obj) => obj,
        other => panic!("expected an object, got {other}"),
    }
}

struct StaticFetcher {
    etag: &'static str,
    document: Value,
}

impl ContentFetcher for StaticFetcher {
    fn head_etag(&self) -> ContentResult<Option<String>> {
        Ok(Some(self.etag.to_string()))
    }

    fn fetch(&self) -> ContentResult<FetchedContent> {
        Ok(FetchedContent {
            etag: Some(format!("\"{}\"", self.etag)),
            document: self.document.clone(),
        })
    }
}

// Defaults

#[test]
fn CoppyContent___default___matches_content_json() {
    let content = CoppyContent::default();

    assert_eq!(content.title(), "Hello, coppy");
    assert_eq!(content.subtitle(), "Typed content for Rust apps");
    assert_eq!(content.tags(), ["cms", "codegen"]);
    assert_eq!(content.hero().headline(), "Ship copy without a release");
    assert_eq!(content.hero().cta().url(), "https://coppy.app");
}

#[test]
fn CoppyContent___default___array_elements_keep_optional_fields() {
    let content = CoppyContent::default();
    let features = content.features();

    assert_eq!(features.len(), 2);
    assert_eq!(features[0].description(), Some("Every key becomes an accessor"));
    assert_eq!(features[0].link().map(|l| l.href()), Some("/docs/types"));
    assert_eq!(features[0].badge(), None);
    assert_eq!(features[1].name(), "Live");
    assert_eq!(features[1].badge(), Some("new"));
    assert!(features[1].link().is_none());
}

// update

#[test]
fn CoppyContent___update___absent_keys_keep_values() {
    let mut content = CoppyContent::default();

    content.update(Some(&object(json!({ "title": "New title" }))));

    assert_eq!(content.title(), "New title");
    assert_eq!(content.subtitle(), "Typed content for Rust apps");
    assert_eq!(content.hero().cta().label(), "Get started");
    assert_eq!(content.features().len(), 2);
}

#[test]
fn CoppyContent___update___none___no_change() {
    let mut content = CoppyContent::default();

    content.update(None);

    assert_eq!(content, CoppyContent::default());
}

#[test]
fn CoppyContent___update___nested_object_updates_in_place() {
    let mut content = CoppyContent::default();

    content.update(Some(&object(json!({
        "hero": { "cta": { "label": "Try it" } }
    }))));

    assert_eq!(content.hero().headline(), "Ship copy without a release");
    assert_eq!(content.hero().cta().label(), "Try it");
    assert_eq!(content.hero().cta().url(), "https://coppy.app");
}

#[test]
fn CoppyContent___update___arrays_are_replaced_and_filtered() {
    let mut content = CoppyContent::default();

    content.update(Some(&object(json!({
        "tags": ["one", "", 2, "three"],
        "features": [
            { "name": "Only" },
            { "description": "missing its name" }
        ]
    }))));

    assert_eq!(content.tags(), ["one", "three"]);
    assert_eq!(content.features().len(), 1);
    assert_eq!(content.features()[0].name(), "Only");
}

#[test]
fn CoppyContent___update___wrong_type_keeps_required_value() {
    let mut content = CoppyContent::default();

    content.update(Some(&object(json!({ "title": 42, "hero": "flat" }))));

    assert_eq!(content.title(), "Hello, coppy");
    assert_eq!(content.hero().headline(), "Ship copy without a release");
}

#[test]
fn CoppyContent___apply_document___non_object_is_ignored() {
    let mut content = CoppyContent::default();

    content.apply_document(&json!(null));

    assert_eq!(content, CoppyContent::default());
}

#[test]
fn CoppyContentFeatures___update___optional_fields_reset_when_absent() {
    let mut feature =
        CoppyContentFeatures::create_from(Some(&object(json!({
            "name": "Typed",
            "badge": "beta",
            "link": { "href": "/x" }
        }))))
        .unwrap();

    feature.update(Some(&object(json!({ "name": "Typed" }))));

    assert_eq!(feature.badge(), None);
    assert!(feature.link().is_none());
}

// create_from

#[test]
fn CoppyContentHero___create_from___complete_object() {
    let hero = CoppyContentHero::create_from(Some(&object(json!({
        "headline": "Hi",
        "cta": { "label": "Go", "url": "/go" }
    }))))
    .unwrap();

    assert_eq!(hero.headline(), "Hi");
    assert_eq!(hero.cta().label(), "Go");
}

#[test]
fn CoppyContentHero___create_from___missing_nested_required___none() {
    let hero = CoppyContentHero::create_from(Some(&object(json!({
        "headline": "Hi",
        "cta": { "label": "Go" }
    }))));

    assert!(hero.is_none());
}

#[test]
fn CoppyContentHeroCta___create_from___empty_required_string___none() {
    let cta = CoppyContentHeroCta::create_from(Some(&object(json!({
        "label": "",
        "url": "/go"
    }))));

    assert!(cta.is_none());
}

#[test]
fn CoppyContentHeroCta___create_from___none___none() {
    assert!(CoppyContentHeroCta::create_from(None).is_none());
}

// Serialization

#[test]
fn CoppyContent___serde___round_trips() {
    let mut content = CoppyContent::default();
    content.update(Some(&object(json!({ "subtitle": "Persisted" }))));

    let json = serde_json::to_string(&content).unwrap();
    let restored: CoppyContent = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, content);
}

// Site

#[test]
fn render_home___includes_copy() {
    let page = render_home(&CoppyContent::default());

    assert!(page.starts_with("# Hello, coppy\n"));
    assert!(page.contains("[Get started](https://coppy.app)"));
    assert!(page.contains("- Typed: Every key becomes an accessor -> /docs/types"));
    assert!(page.contains("- Live (new)"));
    assert!(page.contains("tags: cms, codegen"));
}

#[test]
fn Site___foreground_refresh___updates_live_content() {
    let dir = tempfile::tempdir().unwrap();
    let site = Site::open(dir.path(), ContentConfig::new("demo")).unwrap();
    let fetcher = StaticFetcher {
        etag: "v2",
        document: json!({ "title": "Fresh from the CMS" }),
    };

    let outcome = site.refresh(&fetcher).unwrap();

    assert!(matches!(outcome, RefreshOutcome::Applied { .. }));
    assert_eq!(site.content().title(), "Fresh from the CMS");
    assert_eq!(site.content().subtitle(), "Typed content for Rust apps");
    assert_eq!(site.refresh(&fetcher).unwrap(), RefreshOutcome::Unchanged);
}

#[test]
fn Site___background_refresh___applies_on_idle_and_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = ContentConfig::new("demo").with_update_type(UpdateType::Background);
    let site = Site::open(dir.path(), config.clone()).unwrap();
    let fetcher = StaticFetcher {
        etag: "v2",
        document: json!({ "title": "Later" }),
    };

    site.refresh(&fetcher).unwrap();
    assert_eq!(site.content().title(), "Hello, coppy");

    assert!(site.on_idle().unwrap());
    assert_eq!(site.content().title(), "Later");

    let reopened = Site::open(dir.path(), config).unwrap();
    assert_eq!(reopened.content().title(), "Later");
}

#[test]
fn Site___open___invalid_config___fails() {
    let dir = tempfile::tempdir().unwrap();

    assert!(Site::open(dir.path(), ContentConfig::default()).is_err());
}
