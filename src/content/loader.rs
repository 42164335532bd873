use ecomoving_schema::{ContentRow, DynamicSection, ExtraRow, HeroContent, WebContent};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::defaults::default_content;
use super::legacy::{normalize_section_texts, promote_legacy_fields};
use crate::error::SiteError;
use crate::supabase::SupabaseClient;

const HERO_ROW: &str = "hero";
const SECTIONS_ROW: &str = "sections";

/// Reads the content table.
#[derive(Debug, Clone)]
pub struct ContentLoader {
    client: SupabaseClient,
    table: String,
}

impl ContentLoader {
    pub fn new(client: SupabaseClient, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }

    pub async fn fetch_rows(&self) -> Result<Vec<ContentRow>, SiteError> {
        self.client
            .table(&self.table)
            .select("section,content")
            .fetch_lenient()
            .await
    }
}

/// Builds page content from raw rows, starting from the defaults.
pub fn assemble(rows: Vec<ContentRow>) -> WebContent {
    let mut content = default_content();

    for row in rows {
        let name = row.section;
        let mut raw = row.content;

        if let Value::Object(obj) = &mut raw {
            promote_legacy_fields(obj, name == HERO_ROW);
        }

        match name.as_str() {
            HERO_ROW => content.hero = merge_hero(&content.hero, raw),
            SECTIONS_ROW => content.sections = read_sections(raw),
            _ => {
                let key = name.to_lowercase();
                match content.extras.iter_mut().find(|e| e.name == key) {
                    Some(existing) => existing.content = raw,
                    None => content.extras.push(ExtraRow {
                        name: key,
                        content: raw,
                    }),
                }
            }
        }
    }

    sync_galleries(&mut content);
    content
}

/// Row keys override the base hero; anything the row lacks keeps the base value.
fn merge_hero(base: &HeroContent, raw: Value) -> HeroContent {
    let Value::Object(overlay) = raw else {
        warn!("hero row is not an object; keeping the current hero");
        return base.clone();
    };

    let mut merged = match serde_json::to_value(base) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };
    merged.extend(overlay);

    serde_json::from_value(Value::Object(merged)).unwrap_or_else(|err| {
        warn!(error = %err, "hero row has an unreadable shape; keeping the current hero");
        base.clone()
    })
}

/// The `sections` row holds a list, or an object whose values are the sections.
fn read_sections(raw: Value) -> Vec<DynamicSection> {
    let items: Vec<Value> = match raw {
        Value::Array(items) => items,
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            // Index-like keys first, numerically; named keys after.
            entries.sort_by(|(a, _), (b, _)| {
                match (a.parse::<u64>(), b.parse::<u64>()) {
                    (Ok(x), Ok(y)) => x.cmp(&y),
                    (Ok(_), Err(_)) => std::cmp::Ordering::Less,
                    (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
                    (Err(_), Err(_)) => a.cmp(b),
                }
            });
            entries.into_iter().map(|(_, v)| v).collect()
        }
        Value::Null => Vec::new(),
        other => {
            warn!(kind = %value_kind(&other), "sections row is neither a list nor an object");
            Vec::new()
        }
    };

    let total = items.len();
    let sections: Vec<DynamicSection> = items
        .into_iter()
        .filter_map(|item| {
            let Value::Object(mut obj) = item else {
                return None;
            };
            normalize_section_texts(&mut obj);
            serde_json::from_value(Value::Object(obj))
                .map_err(|err| warn!(error = %err, "skipping unreadable section"))
                .ok()
        })
        .collect();

    if sections.len() < total {
        debug!(kept = sections.len(), total, "some section entries were skipped");
    }
    sections
}

/// A section whose title mentions an extra row's name takes that row's gallery.
fn sync_galleries(content: &mut WebContent) {
    if content.sections.is_empty() || content.extras.is_empty() {
        return;
    }

    for section in &mut content.sections {
        let title = section.title1.to_lowercase();
        let found = content
            .extras
            .iter()
            .filter(|e| !e.name.is_empty())
            .find(|e| title.contains(e.name.as_str()));
        if let Some(gallery) = found.and_then(ExtraRow::gallery) {
            section.gallery = gallery;
        }
    }
}

fn value_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
