use serde::{Deserialize, Serialize};

pub const ADAPTIVE_CARD_SCHEMA: &str = "http://adaptivecards.io/schemas/adaptive-card.json";
pub const ADAPTIVE_CARD_VERSION: &str = "1.5";
pub const ADAPTIVE_CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.adaptive";

/// Outer envelope posted to the incoming-webhook endpoint: one `message`
/// carrying a single Adaptive Card attachment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEnvelope {
    #[serde(rename = "type")]
    pub kind: String,
    pub attachments: Vec<Attachment>,
}

impl CardEnvelope {
    pub fn message(content: AdaptiveCard) -> Self {
        Self {
            kind: "message".to_string(),
            attachments: vec![Attachment {
                content_type: ADAPTIVE_CARD_CONTENT_TYPE.to_string(),
                content_url: None,
                content,
            }],
        }
    }
}

/// Webhook attachment wrapper. `contentUrl` is always serialized, as an
/// explicit `null`, to match the wire schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub content_type: String,
    pub content_url: Option<String>,
    pub content: AdaptiveCard,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptiveCard {
    #[serde(rename = "$schema")]
    pub schema: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
    pub body: Vec<Element>,
    pub actions: Vec<Action>,
}

impl AdaptiveCard {
    pub fn new(body: Vec<Element>, actions: Vec<Action>) -> Self {
        Self {
            schema: ADAPTIVE_CARD_SCHEMA.to_string(),
            kind: "AdaptiveCard".to_string(),
            version: ADAPTIVE_CARD_VERSION.to_string(),
            body,
            actions,
        }
    }
}

/// Closed set of body elements the notifier emits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Element {
    Container(Container),
    TextBlock(TextBlock),
    ColumnSet(ColumnSet),
    Image(Image),
    FactSet(FactSet),
    Table(Table),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bleed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    pub items: Vec<Element>,
}

/// Optional styling fields are omitted from the wire when unset so the
/// payload stays field-for-field identical to what the endpoint expects.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_subtle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_type: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSet {
    pub columns: Vec<Column>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    #[serde(rename = "type")]
    pub kind: String,
    pub width: String,
    pub items: Vec<Element>,
}

impl Column {
    pub fn new(width: impl Into<String>, items: Vec<Element>) -> Self {
        Self {
            kind: "Column".to_string(),
            width: width.into(),
            items,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactSet {
    pub facts: Vec<Fact>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub title: String,
    pub value: String,
}

impl Fact {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub columns: Vec<TableColumn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<String>,
    pub show_grid_lines: bool,
    pub first_row_as_headers: bool,
    pub rows: Vec<TableRow>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    pub width: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    #[serde(rename = "type")]
    pub kind: String,
    pub cells: Vec<TableCell>,
    pub style: String,
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            kind: "TableRow".to_string(),
            cells,
            style: "default".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    #[serde(rename = "type")]
    pub kind: String,
    pub items: Vec<Element>,
}

impl TableCell {
    /// A cell holding one wrapped monospace text block, the shape used by
    /// the variables table.
    pub fn monospace(text: impl Into<String>) -> Self {
        Self {
            kind: "TableCell".to_string(),
            items: vec![Element::TextBlock(TextBlock {
                text: text.into(),
                wrap: Some(true),
                weight: Some("Default".to_string()),
                font_type: Some("Monospace".to_string()),
                ..Default::default()
            })],
        }
    }
}

/// Closed set of card actions; the notifier only ever emits URL buttons.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    #[serde(rename = "Action.OpenUrl")]
    OpenUrl { title: String, url: String },
}

impl Action {
    pub fn open_url(title: impl Into<String>, url: impl Into<String>) -> Self {
        Action::OpenUrl {
            title: title.into(),
            url: url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_serializes_with_null_content_url() {
        let card = CardEnvelope::message(AdaptiveCard::new(Vec::new(), Vec::new()));
        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value["type"], "message");
        assert_eq!(value["attachments"][0]["contentType"], ADAPTIVE_CARD_CONTENT_TYPE);
        assert!(value["attachments"][0]["contentUrl"].is_null());
        assert_eq!(value["attachments"][0]["content"]["$schema"], ADAPTIVE_CARD_SCHEMA);
        assert_eq!(value["attachments"][0]["content"]["version"], ADAPTIVE_CARD_VERSION);
    }

    #[test]
    fn text_block_omits_unset_styling() {
        let block = Element::TextBlock(TextBlock {
            text: "hello".to_string(),
            is_subtle: Some(true),
            ..Default::default()
        });
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(
            value,
            json!({ "type": "TextBlock", "text": "hello", "isSubtle": true })
        );
    }

    #[test]
    fn action_uses_open_url_tag() {
        let action = Action::open_url("View Pipeline", "https://ci.example.com/1");
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "Action.OpenUrl",
                "title": "View Pipeline",
                "url": "https://ci.example.com/1"
            })
        );
    }

    #[test]
    fn table_row_round_trips() {
        let row = TableRow::new(vec![TableCell::monospace("FOO"), TableCell::monospace("1")]);
        let bytes = serde_json::to_vec(&row).unwrap();
        let parsed: TableRow = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed, row);
    }
}
