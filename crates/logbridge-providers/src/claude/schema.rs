use serde::Deserialize;
use serde_json::Value;

/// One line of a Claude Code session log.
///
/// Only the fields the converter reads are modelled; everything else on the
/// record is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEvent {
    #[serde(rename = "type", default)]
    pub kind: EventKind,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    User,
    Assistant,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    /// Raw content; its shape differs between user and assistant records
    #[serde(default)]
    pub content: Value,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
}

/// Typed view over `message.content`
#[derive(Debug, Clone, PartialEq)]
pub enum MessageContent<'a> {
    /// Plain string content (a missing or null content reads as "")
    Text(&'a str),
    /// Array of content blocks
    Items(Vec<ContentItem>),
    /// Any other JSON shape
    Other(&'a Value),
}

impl Message {
    pub fn content(&self) -> MessageContent<'_> {
        match &self.content {
            Value::Null => MessageContent::Text(""),
            Value::String(text) => MessageContent::Text(text),
            Value::Array(items) => {
                MessageContent::Items(items.iter().map(ContentItem::from_value).collect())
            }
            other => MessageContent::Other(other),
        }
    }
}

/// One block inside an array-shaped `message.content`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    Text {
        #[serde(default)]
        text: Option<String>,
    },
    Thinking {
        #[serde(default)]
        thinking: String,
    },
    ToolUse {
        #[serde(default)]
        name: String,
        #[serde(default = "empty_object")]
        input: Value,
    },
    ToolResult {
        #[serde(default)]
        content: Option<Value>,
    },
    /// Any block with an unknown tag or unexpected field types.
    /// Keeps a top-level `text` string if the block had one.
    #[serde(skip_deserializing)]
    Unrecognized { text: Option<String> },
}

fn empty_object() -> Value {
    Value::Object(Default::default())
}

impl ContentItem {
    /// Classify a raw block; never fails
    pub fn from_value(value: &Value) -> Self {
        ContentItem::deserialize(value).unwrap_or_else(|_| ContentItem::Unrecognized {
            text: value
                .get("text")
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }
}
