#![allow(non_snake_case)]

//! Structural checks on generated modules, made by parsing them with `syn`.

use coppy_codegen::{GenerateOptions, generate_content_module};
use serde_json::{Map, Value, json};

fn document(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(obj) => obj,
        other => panic!("fixture must be an object, got {other}"),
    }
}

fn parse(value: Value) -> syn::File {
    let source = generate_content_module(&document(value), &GenerateOptions::default()).unwrap();
    syn::parse_file(&source).unwrap()
}

fn struct_names(file: &syn::File) -> Vec<String> {
    file.items
        .iter()
        .filter_map(|item| match item {
            syn::Item::Struct(s) => Some(s.ident.to_string()),
            _ => None,
        })
        .collect()
}

fn trait_impls(file: &syn::File) -> Vec<(String, String)> {
    file.items
        .iter()
        .filter_map(|item| match item {
            syn::Item::Impl(imp) => {
                let (_, path, _) = imp.trait_.as_ref()?;
                let trait_name = path.segments.last()?.ident.to_string();
                let syn::Type::Path(self_ty) = imp.self_ty.as_ref() else {
                    return None;
                };
                let type_name = self_ty.path.segments.last()?.ident.to_string();
                Some((trait_name, type_name))
            }
            _ => None,
        })
        .collect()
}

fn inherent_methods(file: &syn::File, type_name: &str) -> Vec<String> {
    file.items
        .iter()
        .filter_map(|item| match item {
            syn::Item::Impl(imp) if imp.trait_.is_none() => Some(imp),
            _ => None,
        })
        .filter(|imp| {
            matches!(imp.self_ty.as_ref(), syn::Type::Path(p)
                if p.path.segments.last().is_some_and(|s| s.ident == type_name))
        })
        .flat_map(|imp| imp.items.iter())
        .filter_map(|item| match item {
            syn::ImplItem::Fn(f) => Some(f.sig.ident.to_string()),
            _ => None,
        })
        .collect()
}

fn showcase() -> Value {
    json!({
        "title": "Welcome",
        "hero": {
            "headline": "Ship copy faster",
            "cta": { "label": "Start", "url": "https://example.com" }
        },
        "features": [
            { "name": "Fast", "link": { "href": "/fast" } },
            { "name": "Typed", "badge": "new" }
        ],
        "tags": ["a", "b"]
    })
}

#[test]
fn generated_module___parses_as_rust_file() {
    let file = parse(showcase());

    assert!(!file.items.is_empty());
}

#[test]
fn generated_module___nested_types_precede_parents() {
    let file = parse(showcase());

    assert_eq!(
        struct_names(&file),
        vec![
            "CoppyContentHeroCta",
            "CoppyContentHero",
            "CoppyContentFeaturesLink",
            "CoppyContentFeatures",
            "CoppyContent",
        ]
    );
}

#[test]
fn generated_module___root_implements_default_and_updatable() {
    let file = parse(showcase());
    let impls = trait_impls(&file);

    assert!(impls.contains(&("Default".to_string(), "CoppyContent".to_string())));
    assert!(impls.contains(&("Updatable".to_string(), "CoppyContent".to_string())));
    assert_eq!(impls.len(), 2);
}

#[test]
fn generated_module___nested_type_has_accessors_update_and_factory() {
    let file = parse(showcase());

    assert_eq!(
        inherent_methods(&file, "CoppyContentHero"),
        vec!["headline", "cta", "update", "create_from"]
    );
}

#[test]
fn generated_module___root_has_accessors_only() {
    let file = parse(showcase());

    assert_eq!(
        inherent_methods(&file, "CoppyContent"),
        vec!["title", "hero", "features", "tags"]
    );
}

#[test]
fn generated_module___keyword_and_reserved_keys___parse() {
    let file = parse(json!({
        "type": "banner",
        "self": "me",
        "update": "soon",
        "2col": "left",
        "": "blank key",
        "call to action": "Go",
    }));

    assert_eq!(
        inherent_methods(&file, "CoppyContent"),
        vec!["r#type", "self_", "update_", "_2col", "field", "call_to_action"]
    );
}

#[test]
fn generated_module___empty_document___parses() {
    let file = parse(json!({}));

    assert_eq!(struct_names(&file), vec!["CoppyContent"]);
}

#[test]
fn generated_module___non_ascii_keys___parse_with_own_names() {
    let file = parse(json!({
        "标题": "x",
        "副标题": "y",
        "标题块": { "a": "b" },
        "Überschrift": "z",
    }));

    assert_eq!(struct_names(&file), vec!["CoppyContent标题块", "CoppyContent"]);
    assert_eq!(
        inherent_methods(&file, "CoppyContent"),
        vec!["标题", "副标题", "标题块", "überschrift"]
    );
}
