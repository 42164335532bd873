use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::de::{lax_i64, lax_list, lax_opt_string, lax_string, lax_string_list};

/// One row of the content table: a section name and its free-form payload.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ContentRow {
    #[serde(default, deserialize_with = "lax_string")]
    pub section: String,
    #[serde(default)]
    pub content: Value,
}

/// Homepage hero. Missing fields are filled from the built-in default hero
/// before this type is ever deserialized.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct HeroContent {
    #[serde(default, deserialize_with = "lax_string")]
    pub title1: String,
    #[serde(default, deserialize_with = "lax_string")]
    pub paragraph1: String,
    #[serde(default, deserialize_with = "lax_string")]
    pub cta_text: String,
    #[serde(default, deserialize_with = "lax_string")]
    pub cta_link: String,
    #[serde(default, deserialize_with = "lax_string")]
    pub background_image: String,
    #[serde(default, deserialize_with = "lax_opt_string", skip_serializing_if = "Option::is_none")]
    pub background_image_2: Option<String>,
    #[serde(default, deserialize_with = "lax_opt_string", skip_serializing_if = "Option::is_none")]
    pub background_image_3: Option<String>,
    #[serde(default, deserialize_with = "lax_opt_string", skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(default, deserialize_with = "lax_opt_string", skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(default, deserialize_with = "lax_string_list", skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<String>,
    #[serde(default, deserialize_with = "lax_opt_string", skip_serializing_if = "Option::is_none")]
    pub drive_folder_id: Option<String>,
}

/// Horizontal alignment hint used by section descriptions and block text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    /// Unknown values yield `None` so the view can apply its own default.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            "justify" => Some(Self::Justify),
            _ => None,
        }
    }

    pub fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }
}

/// A positioned cell of a section grid.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LayoutBlock {
    #[serde(default, deserialize_with = "lax_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lax_string")]
    pub label: String,
    /// `image`, `text` or `both`; informational only, rendering looks at the
    /// fields that are actually present.
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lax_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lax_opt_string", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lax_opt_string", skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    #[serde(default, deserialize_with = "lax_opt_string", skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(default, deserialize_with = "lax_opt_string", skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, deserialize_with = "lax_opt_string", skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    /// `"<columns>x<rows>"`, e.g. `"8x3"`.
    #[serde(default, deserialize_with = "lax_string")]
    pub span: String,
    #[serde(default, deserialize_with = "lax_i64")]
    pub col: i64,
    #[serde(default, deserialize_with = "lax_i64")]
    pub row: i64,
    #[serde(default, deserialize_with = "lax_i64")]
    pub z_index: i64,
    #[serde(
        rename = "alt_text",
        default,
        deserialize_with = "lax_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub alt_text: Option<String>,
    #[serde(default, deserialize_with = "lax_opt_string", skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(default, deserialize_with = "lax_opt_string", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, deserialize_with = "lax_opt_string", skip_serializing_if = "Option::is_none")]
    pub shadow: Option<String>,
    #[serde(default, deserialize_with = "lax_opt_string", skip_serializing_if = "Option::is_none")]
    pub blur: Option<String>,
}

pub const DEFAULT_BLOCK_COLUMNS: u32 = 4;
pub const DEFAULT_BLOCK_ROWS: u32 = 2;

impl LayoutBlock {
    /// Grid span as `(columns, rows)`. Each half of `span` falls back on its own
    /// when missing or not a positive number.
    pub fn grid_span(&self) -> (u32, u32) {
        let mut parts = self.span.split('x');
        let columns = parts
            .next()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_BLOCK_COLUMNS);
        let rows = parts
            .next()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_BLOCK_ROWS);
        (columns, rows)
    }

    pub fn text_align(&self) -> Option<TextAlign> {
        self.text_align.as_deref().and_then(TextAlign::parse)
    }
}

/// One ordered homepage section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DynamicSection {
    #[serde(default, deserialize_with = "lax_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lax_i64")]
    pub order: i64,
    #[serde(default, deserialize_with = "lax_opt_string", skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "lax_string")]
    pub title1: String,
    #[serde(default, deserialize_with = "lax_string")]
    pub paragraph1: String,
    #[serde(default, deserialize_with = "lax_opt_string", skip_serializing_if = "Option::is_none")]
    pub title2: Option<String>,
    #[serde(default, deserialize_with = "lax_opt_string", skip_serializing_if = "Option::is_none")]
    pub paragraph2: Option<String>,
    #[serde(default, deserialize_with = "lax_list")]
    pub blocks: Vec<LayoutBlock>,
    #[serde(default, deserialize_with = "lax_string")]
    pub bg_color: String,
    #[serde(default, deserialize_with = "lax_opt_string", skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,
    #[serde(default, deserialize_with = "lax_opt_string", skip_serializing_if = "Option::is_none")]
    pub title_size: Option<String>,
    #[serde(default, deserialize_with = "lax_opt_string", skip_serializing_if = "Option::is_none")]
    pub desc_color: Option<String>,
    #[serde(default, deserialize_with = "lax_opt_string", skip_serializing_if = "Option::is_none")]
    pub desc_size: Option<String>,
    #[serde(default, deserialize_with = "lax_opt_string", skip_serializing_if = "Option::is_none")]
    pub desc_align: Option<String>,
    #[serde(default, deserialize_with = "lax_string_list", skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<String>,
}

impl DynamicSection {
    pub fn desc_align(&self) -> Option<TextAlign> {
        self.desc_align.as_deref().and_then(TextAlign::parse)
    }

    /// Blocks in paint order (ascending `zIndex`, stable for ties).
    pub fn blocks_by_depth(&self) -> Vec<&LayoutBlock> {
        let mut blocks: Vec<&LayoutBlock> = self.blocks.iter().collect();
        blocks.sort_by_key(|b| b.z_index);
        blocks
    }
}

/// A content row that is neither `hero` nor `sections`, kept verbatim.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExtraRow {
    pub name: String,
    pub content: Value,
}

impl ExtraRow {
    pub fn gallery(&self) -> Option<Vec<String>> {
        self.content
            .get("gallery")
            .and_then(crate::de::value_as_string_list)
    }
}

/// Everything the homepage needs, assembled from the content table.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct WebContent {
    pub hero: HeroContent,
    pub sections: Vec<DynamicSection>,
    /// Other rows by lowercase name, in the order the table returned them.
    pub extras: Vec<ExtraRow>,
}

impl WebContent {
    /// Sections in display order (ascending `order`, stable for ties).
    pub fn sorted_sections(&self) -> Vec<&DynamicSection> {
        let mut sections: Vec<&DynamicSection> = self.sections.iter().collect();
        sections.sort_by_key(|s| s.order);
        sections
    }

    pub fn extra(&self, name: &str) -> Option<&ExtraRow> {
        let name = name.to_lowercase();
        self.extras.iter().find(|e| e.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn block_span_falls_back_per_axis() {
        let mut block = LayoutBlock {
            span: "8x3".to_string(),
            ..Default::default()
        };
        assert_eq!(block.grid_span(), (8, 3));

        block.span = "12".to_string();
        assert_eq!(block.grid_span(), (12, DEFAULT_BLOCK_ROWS));

        block.span = "wide".to_string();
        assert_eq!(block.grid_span(), (DEFAULT_BLOCK_COLUMNS, DEFAULT_BLOCK_ROWS));

        block.span = String::new();
        assert_eq!(block.grid_span(), (4, 2));
    }

    #[test]
    fn section_reads_camel_case_styling_and_skips_bad_blocks() {
        let section: DynamicSection = serde_json::from_value(json!({
            "id": 7,
            "order": "2",
            "title1": "Botellas",
            "bgColor": "#101010",
            "descAlign": "CENTER",
            "blocks": [
                { "id": "b1", "span": "6x2", "zIndex": 3, "textContent": "Hola" },
                "not a block",
                { "id": "b2", "zIndex": 1, "image": "a.jpg", "alt_text": "alt" }
            ]
        }))
        .expect("section should deserialize");

        assert_eq!(section.id, "7");
        assert_eq!(section.order, 2);
        assert_eq!(section.bg_color, "#101010");
        assert_eq!(section.desc_align(), Some(TextAlign::Center));
        assert_eq!(section.blocks.len(), 2);

        let ids: Vec<&str> = section
            .blocks_by_depth()
            .into_iter()
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b2", "b1"]);
        assert_eq!(section.blocks[1].alt_text.as_deref(), Some("alt"));
    }

    #[test]
    fn sections_sort_by_order() {
        let content = WebContent {
            sections: vec![
                DynamicSection { id: "b".into(), order: 2, ..Default::default() },
                DynamicSection { id: "a".into(), order: 1, ..Default::default() },
            ],
            ..Default::default()
        };
        let ids: Vec<&str> = content.sorted_sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
