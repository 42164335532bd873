use serde_json::{Map, Value};

/// Older content rows used these names; `(legacy, current)`.
const LEGACY_FIELDS: &[(&str, &str)] = &[
    ("title", "title1"),
    ("description", "paragraph1"),
    ("title_2", "title2"),
    ("description_2", "paragraph2"),
];

/// The hero additionally used `subtitle` as its paragraph.
const HERO_LEGACY_FIELDS: &[(&str, &str)] = &[("subtitle", "paragraph1")];

/// Truthiness as the content editors' tooling sees it: `null`, `false`, `0`
/// and `""` count as absent.
pub fn is_truthy(v: Option<&Value>) -> bool {
    match v {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// Copies each legacy value into its current name when the current name is
/// absent and the legacy value is present. The legacy key is left in place.
pub fn promote_legacy_fields(obj: &mut Map<String, Value>, hero: bool) {
    let hero_fields: &[(&str, &str)] = if hero { HERO_LEGACY_FIELDS } else { &[] };

    for (legacy, current) in LEGACY_FIELDS.iter().chain(hero_fields) {
        if is_truthy(obj.get(*current)) || !is_truthy(obj.get(*legacy)) {
            continue;
        }
        if let Some(value) = obj.get(*legacy).cloned() {
            obj.insert((*current).to_string(), value);
        }
    }
}

/// Section variant: every current text field ends up set, empty when neither
/// name carries a value.
pub fn normalize_section_texts(obj: &mut Map<String, Value>) {
    promote_legacy_fields(obj, false);
    for (_, current) in LEGACY_FIELDS {
        if !is_truthy(obj.get(*current)) {
            obj.insert((*current).to_string(), Value::String(String::new()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("test fixture must be an object"),
        }
    }

    #[test]
    fn promotes_only_when_current_is_absent() {
        let mut row = obj(json!({
            "title": "Legacy title",
            "title1": "Current title",
            "description": "Legacy paragraph",
            "title_2": "",
            "description_2": "Second paragraph"
        }));
        promote_legacy_fields(&mut row, false);

        assert_eq!(row["title1"], "Current title");
        assert_eq!(row["paragraph1"], "Legacy paragraph");
        assert!(row.get("title2").is_none());
        assert_eq!(row["paragraph2"], "Second paragraph");
    }

    #[test]
    fn empty_current_counts_as_absent() {
        let mut row = obj(json!({ "title": "Legacy", "title1": "" }));
        promote_legacy_fields(&mut row, false);
        assert_eq!(row["title1"], "Legacy");

        let mut row = obj(json!({ "title": "Legacy", "title1": null }));
        promote_legacy_fields(&mut row, false);
        assert_eq!(row["title1"], "Legacy");
    }

    #[test]
    fn hero_subtitle_fills_paragraph_after_description() {
        let mut hero = obj(json!({ "subtitle": "From subtitle" }));
        promote_legacy_fields(&mut hero, true);
        assert_eq!(hero["paragraph1"], "From subtitle");

        let mut hero = obj(json!({
            "subtitle": "From subtitle",
            "description": "From description"
        }));
        promote_legacy_fields(&mut hero, true);
        assert_eq!(hero["paragraph1"], "From description");

        let mut section = obj(json!({ "subtitle": "Kicker" }));
        promote_legacy_fields(&mut section, false);
        assert!(section.get("paragraph1").is_none());
    }

    #[test]
    fn sections_always_get_text_fields() {
        let mut section = obj(json!({ "description": "Body" }));
        normalize_section_texts(&mut section);
        assert_eq!(section["title1"], "");
        assert_eq!(section["paragraph1"], "Body");
        assert_eq!(section["title2"], "");
        assert_eq!(section["paragraph2"], "");
    }
}
