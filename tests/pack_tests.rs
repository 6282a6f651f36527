//! Round-trip and accessor tests for the format wrappers.

use packio::{Format, Packed, WithJson, WithToml, WithYaml, pack, pack_default};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
struct Product {
    name: String,
    description: String,
    categories: Vec<String>,
    price: f64,
    features: Vec<String>,
    color: String,
    material: String,
}

fn sample() -> Product {
    Product {
        name: "Microwave Vertex Marble".to_string(),
        description: "Full him bale me within. As far to canoe wad its it.".to_string(),
        categories: vec![
            "musical instruments".to_string(),
            "bicycles and accessories".to_string(),
            "books".to_string(),
        ],
        price: 46.06,
        features: vec!["user-friendly".to_string(), "compact".to_string()],
        color: "navy".to_string(),
        material: "granite".to_string(),
    }
}

fn cases() -> Vec<Product> {
    vec![
        sample(),
        Product {
            name: "Simple Product".to_string(),
            description: "Basic description".to_string(),
            categories: vec![],
            price: 19.99,
            features: vec![],
            color: "red".to_string(),
            material: "plastic".to_string(),
        },
        Product {
            name: "Free Item".to_string(),
            description: "Free product description".to_string(),
            categories: vec!["free".to_string()],
            price: 0.0,
            features: vec!["free".to_string()],
            color: "white".to_string(),
            material: "paper".to_string(),
        },
        Product {
            name: "Product!@#$%^&*()".to_string(),
            description: "Description with šĕęćīàł characters 你好".to_string(),
            categories: vec!["category#1".to_string(), "category@2".to_string()],
            price: 99.99,
            features: vec!["feature!1".to_string(), "feature@2".to_string()],
            color: "blue-green".to_string(),
            material: "mixed/material".to_string(),
        },
        Product {
            name: "Invalid Product".to_string(),
            description: "Product with negative price".to_string(),
            categories: vec!["test".to_string()],
            price: -1.0,
            features: vec!["test".to_string()],
            color: "red".to_string(),
            material: "plastic".to_string(),
        },
    ]
}

fn assert_round_trip(format: Format) {
    for input in cases() {
        let mut wrapper = pack(input.clone(), format);
        let bytes = wrapper.to_vec().unwrap();

        wrapper.set(Product::default());
        wrapper.from_slice(&bytes).unwrap();

        assert_eq!(*wrapper.get(), input, "{format} round trip");
    }
}

#[test]
fn test_json_round_trip() {
    assert_round_trip(Format::Json);
}

#[test]
fn test_yaml_round_trip() {
    assert_round_trip(Format::Yaml);
}

#[test]
fn test_toml_round_trip() {
    assert_round_trip(Format::Toml);
}

#[test]
fn test_extreme_float_round_trip() {
    let input = Product {
        name: "Expensive Product".to_string(),
        price: f64::MAX,
        ..Product::default()
    };

    for format in [Format::Json, Format::Yaml] {
        let mut wrapper = pack(input.clone(), format);
        let bytes = wrapper.to_vec().unwrap();
        wrapper.set(Product::default());
        wrapper.from_slice(&bytes).unwrap();
        assert_eq!(wrapper.get().price, f64::MAX, "{format} float round trip");
    }
}

#[test]
fn test_format_independence() {
    let input = sample();

    for format in [Format::Json, Format::Yaml, Format::Toml] {
        let bytes = pack(input.clone(), format).to_vec().unwrap();
        let mut fresh = pack(Product::default(), format);
        fresh.from_slice(&bytes).unwrap();
        assert_eq!(*fresh.get(), input, "{format} decodes its own bytes");
    }
}

#[test]
fn test_empty_document_decode() {
    let documents: [(Format, &[u8]); 3] = [
        (Format::Json, b"{}"),
        (Format::Yaml, b"{}"),
        (Format::Toml, b""),
    ];

    for (format, document) in documents {
        let mut wrapper = pack(sample(), format);
        wrapper.from_slice(document).unwrap();
        assert_eq!(*wrapper.get(), Product::default(), "{format} empty document");
    }
}

#[test]
fn test_set_get_consistency() {
    let mut wrapper = pack_default(Product::default());
    let input = sample();

    wrapper.set(input.clone());
    assert_eq!(*wrapper.get(), input);
}

#[test]
fn test_get_mut_mutates_in_place() {
    let mut wrapper = pack(sample(), Format::Yaml);

    wrapper.get_mut().price = 12.5;
    wrapper.get_mut().categories.push("clearance".to_string());

    assert_eq!(wrapper.get().price, 12.5);
    assert_eq!(wrapper.get().categories.last().unwrap(), "clearance");
}

#[test]
fn test_get_performs_no_encoding() {
    // A value no codec can encode is still freely readable.
    let wrapper = WithJson::new(f64::NAN);
    assert!(wrapper.get().is_nan());
}

#[test]
fn test_into_inner() {
    let input = sample();
    assert_eq!(WithJson::new(input.clone()).into_inner(), input);
    assert_eq!(WithYaml::new(input.clone()).into_inner(), input);
    assert_eq!(WithToml::new(input.clone()).into_inner(), input);
}

#[test]
fn test_factory_dispatch() {
    assert_eq!(pack(Product::default(), Format::Json).format(), Format::Json);
    assert_eq!(pack(Product::default(), Format::Yaml).format(), Format::Yaml);
    assert_eq!(pack(Product::default(), Format::Toml).format(), Format::Toml);
}

#[test]
fn test_default_format_is_json() {
    assert_eq!(Format::default(), Format::Json);
    assert_eq!(pack_default(Product::default()).format(), Format::Json);
}

#[test]
fn test_format_names() {
    assert_eq!(Format::Json.name(), "json");
    assert_eq!(Format::Yaml.name(), "yaml");
    assert_eq!(Format::Toml.name(), "toml");
    assert_eq!(format!("{}", Format::Yaml), "yaml");
}
