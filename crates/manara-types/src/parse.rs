//! The block parse boundary.
//!
//! All persisted block data enters through [`parse_block`], which is the
//! single place legacy shapes are normalized:
//!
//! - historical records tag blocks with `kind` instead of `type`
//! - tag casing is tolerated on input, canonical kebab-case on output
//! - flattened bilingual legs (`titleAr`/`titleEn`) become `{ar,en}` pairs
//! - unsuffixed millisecond fields (`interval`, `delay`) get their unit
//!   suffix
//!
//! Past this function the crate deals only in the canonical [`Block`]
//! shape; nothing downstream branches on legacy-vs-new.

use serde_json::{Map, Value};

use crate::block::{Block, BlockTag};
use crate::error::SchemaError;

/// Millisecond fields whose historical wire names lack the unit suffix.
const MS_FIELD_ALIASES: &[(&str, &str)] = &[
    ("interval", "intervalMs"),
    ("duration", "durationMs"),
    ("delay", "delayMs"),
    ("stagger", "staggerMs"),
];

/// Normalize historical field shapes anywhere in a raw value.
///
/// Old records store bilingual text as flattened sibling string legs
/// (`titleAr` + `titleEn`) and millisecond fields without the unit suffix.
/// Both shapes are folded into the canonical form, recursively, so nested
/// leaf records (slides, features, element animations) are covered too.
/// Canonical fields already present always win; non-string "legs" are left
/// alone for the typed parse to reject.
pub fn normalize_legacy_fields(value: &Value) -> Value {
    match value {
        Value::Object(obj) => Value::Object(normalize_object(obj)),
        Value::Array(items) => {
            Value::Array(items.iter().map(normalize_legacy_fields).collect())
        }
        other => other.clone(),
    }
}

fn normalize_object(obj: &Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::with_capacity(obj.len());
    for (key, value) in obj {
        out.insert(key.clone(), normalize_legacy_fields(value));
    }

    let bases: Vec<String> = out
        .keys()
        .filter_map(|k| k.strip_suffix("Ar").or_else(|| k.strip_suffix("En")))
        .filter(|base| !base.is_empty())
        .map(str::to_string)
        .collect();
    for base in bases {
        if out.contains_key(&base) {
            continue;
        }
        let ar_key = format!("{base}Ar");
        let en_key = format!("{base}En");
        // A leg must be a string (or absent, defaulting to empty).
        let leg = |key: &str| match out.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            None => Some(String::new()),
            Some(_) => None,
        };
        let (Some(ar), Some(en)) = (leg(&ar_key), leg(&en_key)) else {
            continue;
        };
        out.remove(&ar_key);
        out.remove(&en_key);
        let mut pair = Map::with_capacity(2);
        pair.insert("ar".to_string(), Value::String(ar));
        pair.insert("en".to_string(), Value::String(en));
        out.insert(base, Value::Object(pair));
    }

    for (old, new) in MS_FIELD_ALIASES {
        if out.contains_key(*new) {
            continue;
        }
        if let Some(v @ Value::Number(_)) = out.get(*old).cloned() {
            out.remove(*old);
            out.insert((*new).to_string(), v);
        }
    }

    out
}

/// Parse a raw JSON value into a [`Block`].
///
/// Fails with [`SchemaError::UnknownBlockType`] for an unrecognized tag and
/// [`SchemaError::MalformedPayload`] when the payload does not satisfy the
/// tag's schema. Pure validation/construction; no side effects.
pub fn parse_block(raw: &Value) -> Result<Block, SchemaError> {
    let obj = raw.as_object().ok_or(SchemaError::NotAnObject)?;

    // Legacy records used "kind"; "type" wins when both are present.
    let tag_str = obj
        .get("type")
        .or_else(|| obj.get("kind"))
        .and_then(Value::as_str)
        .ok_or_else(|| SchemaError::UnknownBlockType("<missing>".to_string()))?;

    let tag = BlockTag::from_str(tag_str)
        .ok_or_else(|| SchemaError::UnknownBlockType(tag_str.to_string()))?;

    // Fold historical field shapes, then re-key under canonical "type" so
    // the tagged-enum deserializer sees exactly one discriminator.
    let mut normalized = normalize_object(obj);
    normalized.remove("kind");
    normalized.insert("type".to_string(), Value::String(tag.as_str().to_string()));

    serde_json::from_value(Value::Object(normalized)).map_err(|e| SchemaError::MalformedPayload {
        tag: tag.as_str().to_string(),
        reason: e.to_string(),
    })
}

/// Parse from a JSON string. See [`parse_block`].
pub fn parse_block_str(raw: &str) -> Result<Block, SchemaError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| SchemaError::MalformedPayload {
        tag: "<unparsed>".to_string(),
        reason: e.to_string(),
    })?;
    parse_block(&value)
}

/// Serialize a block to its canonical wire value.
pub fn serialize_block(block: &Block) -> Value {
    // A Block is a closed set of serde-friendly structs; serialization
    // cannot fail.
    serde_json::to_value(block).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{About, ContactSection, Feature, HeroSlider, Stat};
    use crate::icon::Icon;
    use crate::text::BilingualText;
    use serde_json::json;
    use strum::IntoEnumIterator;

    #[test]
    fn test_round_trip_every_variant() {
        for tag in BlockTag::iter() {
            let block = Block::empty(tag);
            let wire = serialize_block(&block);
            let back = parse_block(&wire).unwrap();
            assert_eq!(back, block, "round trip failed for {tag}");
        }
    }

    #[test]
    fn test_round_trip_populated_about() {
        let block = Block::About(About {
            title: BilingualText::new("من نحن", "About us"),
            description: BilingualText::new("وصف", "description"),
            image: "/media/campus.jpg".into(),
            features: vec![Feature {
                title: BilingualText::new("مختبرات", "Labs"),
                description: BilingualText::default(),
                icon: Icon::Microscope,
            }],
            stats: vec![Stat {
                number: "40".into(),
                label: BilingualText::new("معلم", "teachers"),
            }],
        });
        let back = parse_block(&serialize_block(&block)).unwrap();
        assert_eq!(back, block);
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let err = parse_block(&json!({"type": "social-feed"})).unwrap_err();
        assert!(matches!(err, SchemaError::UnknownBlockType(t) if t == "social-feed"));
    }

    #[test]
    fn test_missing_tag_rejected() {
        let err = parse_block(&json!({"slides": []})).unwrap_err();
        assert!(matches!(err, SchemaError::UnknownBlockType(_)));
    }

    #[test]
    fn test_legacy_kind_tag_accepted() {
        let block = parse_block(&json!({"kind": "jobs", "services": []})).unwrap();
        assert_eq!(block.tag(), BlockTag::Jobs);
        // Canonical output carries "type", never "kind".
        let wire = serialize_block(&block);
        assert_eq!(wire["type"], "jobs");
        assert!(wire.get("kind").is_none());
    }

    #[test]
    fn test_type_wins_over_legacy_kind() {
        let block = parse_block(&json!({"type": "jobs", "kind": "about", "services": []})).unwrap();
        assert_eq!(block.tag(), BlockTag::Jobs);
    }

    #[test]
    fn test_non_integer_order_is_malformed() {
        let err = parse_block(&json!({
            "type": "hero-slider",
            "slides": [{"id": "s1", "order": "first"}]
        }))
        .unwrap_err();
        assert!(matches!(err, SchemaError::MalformedPayload { tag, .. } if tag == "hero-slider"));
    }

    #[test]
    fn test_half_bilingual_pair_is_malformed() {
        let err = parse_block(&json!({
            "type": "about",
            "title": {"ar": "عنوان"}
        }))
        .unwrap_err();
        assert!(matches!(err, SchemaError::MalformedPayload { .. }));
    }

    #[test]
    fn test_unknown_icon_is_malformed() {
        let err = parse_block(&json!({
            "type": "feature-card",
            "icon": "SparklyUnicorn"
        }))
        .unwrap_err();
        assert!(matches!(err, SchemaError::MalformedPayload { reason, .. }
            if reason.contains("SparklyUnicorn")));
    }

    #[test]
    fn test_flattened_bilingual_legs_normalized() {
        // The exact wire shape historical records persist: sibling string
        // legs instead of {ar,en} pairs, nested into leaf records too.
        let block = parse_block(&json!({
            "type": "about",
            "titleAr": "من نحن",
            "titleEn": "About us",
            "descriptionAr": "وصف",
            "descriptionEn": "desc",
            "image": "/media/campus.jpg",
            "features": [
                {"titleAr": "مختبرات", "titleEn": "Labs", "icon": "Microscope"}
            ],
            "stats": [
                {"number": "40", "labelAr": "معلم", "labelEn": "teachers"}
            ]
        }))
        .unwrap();
        let Block::About(about) = block else {
            panic!("wrong variant");
        };
        assert_eq!(about.title, BilingualText::new("من نحن", "About us"));
        assert_eq!(about.description.en, "desc");
        assert_eq!(about.features[0].title.en, "Labs");
        assert_eq!(about.stats[0].label.ar, "معلم");
    }

    #[test]
    fn test_missing_leg_defaults_to_empty() {
        let Block::About(about) = parse_block(&json!({
            "type": "about",
            "titleEn": "About us"
        }))
        .unwrap() else {
            panic!("wrong variant");
        };
        assert_eq!(about.title, BilingualText::new("", "About us"));
    }

    #[test]
    fn test_unsuffixed_interval_normalized() {
        let Block::HeroSlider(slider) = parse_block(&json!({
            "type": "hero-slider",
            "interval": 9000,
            "slides": [{"id": "s1", "titleAr": "أهلا", "titleEn": "Welcome"}]
        }))
        .unwrap() else {
            panic!("wrong variant");
        };
        assert_eq!(slider.interval_ms, 9000);
        assert_eq!(slider.slides[0].title.en, "Welcome");
    }

    #[test]
    fn test_canonical_fields_win_over_legacy() {
        let Block::HeroSlider(slider) = parse_block(&json!({
            "type": "hero-slider",
            "interval": 1,
            "intervalMs": 7000
        }))
        .unwrap() else {
            panic!("wrong variant");
        };
        assert_eq!(slider.interval_ms, 7000);
    }

    #[test]
    fn test_working_hours_legs_normalized() {
        let Block::ContactSection(contact) = parse_block(&json!({
            "type": "contact-section",
            "phone": "+966500000000",
            "email": "info@example.edu",
            "workingHoursAr": "٧ ص - ٣ م",
            "workingHoursEn": "7am - 3pm"
        }))
        .unwrap() else {
            panic!("wrong variant");
        };
        assert_eq!(contact.working_hours.en, "7am - 3pm");
    }

    #[test]
    fn test_optional_contact_fields() {
        let block = parse_block(&json!({
            "type": "contact-section",
            "phone": "+966500000000",
            "email": "info@example.edu"
        }))
        .unwrap();
        let Block::ContactSection(ContactSection { phone, phone2, .. }) = block else {
            panic!("wrong variant");
        };
        assert_eq!(phone, "+966500000000");
        assert!(phone2.is_none());
    }
}
