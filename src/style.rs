//! Per-cell visual styles
//!
//! A sparse map from [`CellCoord`] to [`CellStyle`]. Absence of an entry means
//! "inherit defaults". The store is not tied to the table shape: entries for
//! cells that no longer exist are allowed and simply never looked up.
//!
//! Like tables, stores are replaced wholesale on every change, so history
//! snapshots can share them by reference.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::table::{Alignment, CellCoord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextDecoration {
    None,
    Underline,
    LineThrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    None,
    Solid,
    Dashed,
    Dotted,
}

/// Visual attributes of one cell; every field is optional
///
/// Also used as a partial update: only the `Some` fields are applied by
/// [`CellStyle::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CellStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    /// Font size in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<TextDecoration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<VerticalAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_style: Option<BorderStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl CellStyle {
    /// Whether no attribute is set
    pub fn is_empty(&self) -> bool {
        *self == CellStyle::default()
    }

    /// Overlay the set fields of `partial` onto `self`, last write wins
    pub fn merge(&self, partial: &CellStyle) -> CellStyle {
        fn pick<T: Clone>(new: &Option<T>, old: &Option<T>) -> Option<T> {
            new.clone().or_else(|| old.clone())
        }

        CellStyle {
            background_color: pick(&partial.background_color, &self.background_color),
            text_color: pick(&partial.text_color, &self.text_color),
            font_size: pick(&partial.font_size, &self.font_size),
            font_weight: pick(&partial.font_weight, &self.font_weight),
            font_style: pick(&partial.font_style, &self.font_style),
            text_decoration: pick(&partial.text_decoration, &self.text_decoration),
            text_align: pick(&partial.text_align, &self.text_align),
            vertical_align: pick(&partial.vertical_align, &self.vertical_align),
            border_color: pick(&partial.border_color, &self.border_color),
            border_width: pick(&partial.border_width, &self.border_width),
            border_style: pick(&partial.border_style, &self.border_style),
            padding: pick(&partial.padding, &self.padding),
            font_family: pick(&partial.font_family, &self.font_family),
        }
    }

    /// Inline CSS declarations for the set fields, e.g. `color: red; font-weight: bold`
    pub fn to_css(&self) -> String {
        let mut decls: Vec<String> = Vec::new();

        if let Some(c) = &self.background_color {
            decls.push(format!("background-color: {}", c));
        }
        if let Some(c) = &self.text_color {
            decls.push(format!("color: {}", c));
        }
        if let Some(size) = self.font_size {
            decls.push(format!("font-size: {}px", size));
        }
        if let Some(weight) = self.font_weight {
            let value = match weight {
                FontWeight::Normal => "normal",
                FontWeight::Bold => "bold",
            };
            decls.push(format!("font-weight: {}", value));
        }
        if let Some(style) = self.font_style {
            let value = match style {
                FontStyle::Normal => "normal",
                FontStyle::Italic => "italic",
            };
            decls.push(format!("font-style: {}", value));
        }
        if let Some(deco) = self.text_decoration {
            let value = match deco {
                TextDecoration::None => "none",
                TextDecoration::Underline => "underline",
                TextDecoration::LineThrough => "line-through",
            };
            decls.push(format!("text-decoration: {}", value));
        }
        if let Some(align) = self.text_align {
            decls.push(format!("text-align: {}", align.css()));
        }
        if let Some(valign) = self.vertical_align {
            let value = match valign {
                VerticalAlign::Top => "top",
                VerticalAlign::Middle => "middle",
                VerticalAlign::Bottom => "bottom",
            };
            decls.push(format!("vertical-align: {}", value));
        }
        if self.border_color.is_some() || self.border_width.is_some() || self.border_style.is_some()
        {
            let width = self.border_width.unwrap_or(1.0);
            let style = match self.border_style.unwrap_or(BorderStyle::Solid) {
                BorderStyle::None => "none",
                BorderStyle::Solid => "solid",
                BorderStyle::Dashed => "dashed",
                BorderStyle::Dotted => "dotted",
            };
            let color = self.border_color.as_deref().unwrap_or("currentColor");
            decls.push(format!("border: {}px {} {}", width, style, color));
        }
        if let Some(padding) = self.padding {
            decls.push(format!("padding: {}px", padding));
        }
        if let Some(family) = &self.font_family {
            decls.push(format!("font-family: {}", family));
        }

        decls.join("; ")
    }
}

/// Sparse cell → style map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "BTreeMap<String, CellStyle>", try_from = "BTreeMap<String, CellStyle>")]
pub struct StyleStore {
    styles: BTreeMap<CellCoord, CellStyle>,
}

impl StyleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Style of a cell, or the default (empty) record when none is stored
    pub fn get_style(&self, coord: CellCoord) -> CellStyle {
        self.styles.get(&coord).cloned().unwrap_or_default()
    }

    /// Stored record, if any
    pub fn get(&self, coord: CellCoord) -> Option<&CellStyle> {
        self.styles.get(&coord)
    }

    /// New store with `partial` merged onto the cell's record
    pub fn set_style(&self, coord: CellCoord, partial: &CellStyle) -> StyleStore {
        self.set_style_many(std::iter::once(coord), partial)
    }

    /// New store with `partial` merged onto every listed cell
    pub fn set_style_many<I>(&self, coords: I, partial: &CellStyle) -> StyleStore
    where
        I: IntoIterator<Item = CellCoord>,
    {
        let mut styles = self.styles.clone();
        for coord in coords {
            let merged = styles.get(&coord).cloned().unwrap_or_default().merge(partial);
            styles.insert(coord, merged);
        }
        StyleStore { styles }
    }

    /// Empty store
    pub fn clear_all(&self) -> StyleStore {
        StyleStore::default()
    }

    /// New store without entries outside `rows` data rows and `cols` columns
    ///
    /// Header entries survive as long as their column exists.
    pub fn retain_within(&self, rows: usize, cols: usize) -> StyleStore {
        let styles = self
            .styles
            .iter()
            .filter(|(coord, _)| {
                coord.col < cols && (coord.is_header() || coord.data_row().is_some_and(|r| r < rows))
            })
            .map(|(coord, style)| (*coord, style.clone()))
            .collect();
        StyleStore { styles }
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Stored entries in coordinate order (header row first)
    pub fn iter(&self) -> impl Iterator<Item = (&CellCoord, &CellStyle)> {
        self.styles.iter()
    }
}

impl From<StyleStore> for BTreeMap<String, CellStyle> {
    fn from(store: StyleStore) -> Self {
        store
            .styles
            .into_iter()
            .map(|(coord, style)| (coord.key(), style))
            .collect()
    }
}

impl TryFrom<BTreeMap<String, CellStyle>> for StyleStore {
    type Error = String;

    fn try_from(map: BTreeMap<String, CellStyle>) -> Result<Self, Self::Error> {
        let styles = map
            .into_iter()
            .map(|(key, style)| -> Result<(CellCoord, CellStyle), String> {
                Ok((key.parse()?, style))
            })
            .collect::<Result<_, String>>()?;
        Ok(StyleStore { styles })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bold() -> CellStyle {
        CellStyle {
            font_weight: Some(FontWeight::Bold),
            ..Default::default()
        }
    }

    #[test]
    fn test_get_style_defaults_when_absent() {
        let store = StyleStore::new();
        assert!(store.get_style(CellCoord::new(4, 2)).is_empty());
    }

    #[test]
    fn test_set_style_merges_fields() {
        let coord = CellCoord::new(0, 1);
        let store = StyleStore::new().set_style(coord, &bold());
        let store = store.set_style(
            coord,
            &CellStyle {
                text_color: Some("#ff0000".into()),
                ..Default::default()
            },
        );

        let style = store.get_style(coord);
        assert_eq!(style.font_weight, Some(FontWeight::Bold));
        assert_eq!(style.text_color.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_set_style_last_write_wins() {
        let coord = CellCoord::header(0);
        let store = StyleStore::new()
            .set_style(coord, &bold())
            .set_style(
                coord,
                &CellStyle {
                    font_weight: Some(FontWeight::Normal),
                    ..Default::default()
                },
            );
        assert_eq!(store.get_style(coord).font_weight, Some(FontWeight::Normal));
    }

    #[test]
    fn test_set_style_leaves_original_untouched() {
        let original = StyleStore::new();
        let updated = original.set_style(CellCoord::new(0, 0), &bold());
        assert!(original.is_empty());
        assert_eq!(updated.len(), 1);
    }

    #[test]
    fn test_clear_all() {
        let store = StyleStore::new().set_style(CellCoord::new(0, 0), &bold());
        assert!(store.clear_all().is_empty());
    }

    #[test]
    fn test_retain_within() {
        let store = StyleStore::new().set_style_many(
            [
                CellCoord::header(0),
                CellCoord::header(3),
                CellCoord::new(1, 1),
                CellCoord::new(5, 0),
            ],
            &bold(),
        );
        let pruned = store.retain_within(2, 2);

        assert_eq!(pruned.len(), 2);
        assert!(pruned.get(CellCoord::header(0)).is_some());
        assert!(pruned.get(CellCoord::new(1, 1)).is_some());
    }

    #[test]
    fn test_serializes_with_string_keys() {
        let store = StyleStore::new().set_style(CellCoord::header(2), &bold());
        let json = serde_json::to_string(&store).unwrap();
        assert_eq!(json, r#"{"-1-2":{"fontWeight":"bold"}}"#);

        let back: StyleStore = serde_json::from_str(&json).unwrap();
        assert_eq!(back, store);
    }

    #[test]
    fn test_rejects_bad_keys() {
        let result: Result<StyleStore, _> = serde_json::from_str(r#"{"x":{}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_to_css() {
        let style = CellStyle {
            background_color: Some("yellow".into()),
            font_weight: Some(FontWeight::Bold),
            text_decoration: Some(TextDecoration::LineThrough),
            border_width: Some(2.0),
            ..Default::default()
        };
        assert_eq!(
            style.to_css(),
            "background-color: yellow; font-weight: bold; text-decoration: line-through; border: 2px solid currentColor"
        );
    }
}
