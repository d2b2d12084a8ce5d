use logbridge_types::{
    ApiRequest, Content, DEFAULT_MODEL_LABEL, Interaction, Part, REQUEST_EVENT_NAME,
    ResponseChunk, prompt_id,
};
use serde_json::Value;

use super::schema::{ContentItem, EventKind, LogEvent, Message, MessageContent};

const TOOL_RESULT_MARKER: &str = "[Tool Result]";

/// Settings applied to every reconstructed interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Model label written on request and response
    pub model: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL_LABEL.to_string(),
        }
    }
}

/// Fold a session's event stream into request/response interactions.
///
/// A user turn is emitted only once at least one response fragment follows
/// it. A turn without fragments is dropped, whether another user event
/// supersedes it or the stream ends. Output order follows the triggering
/// user events.
pub fn reconstruct_interactions<I>(
    session_id: &str,
    events: I,
    options: &ConvertOptions,
) -> Vec<Interaction>
where
    I: IntoIterator<Item = LogEvent>,
{
    let mut state = FoldState::default();
    let mut interactions: Vec<Interaction> = events
        .into_iter()
        .filter_map(|event| state.step(session_id, event, options))
        .collect();

    interactions.extend(state.finish());
    interactions
}

#[derive(Debug, Default)]
struct FoldState {
    pending_request: Option<ApiRequest>,
    pending_fragments: Vec<ResponseChunk>,
    prompt_counter: usize,
}

impl FoldState {
    fn step(
        &mut self,
        session_id: &str,
        event: LogEvent,
        options: &ConvertOptions,
    ) -> Option<Interaction> {
        let message = event.message?;

        match event.kind {
            EventKind::User => {
                let emitted = self.take_interaction();
                self.pending_request = Some(ApiRequest {
                    session_id: session_id.to_string(),
                    event_name: REQUEST_EVENT_NAME.to_string(),
                    timestamp: event.timestamp.unwrap_or_default(),
                    model: options.model.clone(),
                    prompt_id: prompt_id(session_id, self.prompt_counter),
                    request_text: vec![Content::user(user_parts(&message))],
                    input_tokens: 0,
                    output_tokens: 0,
                });
                self.pending_fragments.clear();
                emitted
            }
            EventKind::Assistant => {
                self.pending_fragments.extend(response_fragments(&message));

                // Usage is cumulative per message, so the latest value wins
                if let Some(usage) = message.usage
                    && let Some(request) = self.pending_request.as_mut()
                {
                    request.input_tokens = usage.input_tokens;
                    request.output_tokens = usage.output_tokens;
                }
                None
            }
            EventKind::Other => None,
        }
    }

    fn finish(mut self) -> Option<Interaction> {
        self.take_interaction()
    }

    /// Emit the pending turn if it has a response, otherwise drop it
    fn take_interaction(&mut self) -> Option<Interaction> {
        let request = self.pending_request.take()?;
        if self.pending_fragments.is_empty() {
            return None;
        }

        let fragments = std::mem::take(&mut self.pending_fragments);
        self.prompt_counter += 1;
        Some(Interaction::finalize(request, fragments))
    }
}

fn user_parts(message: &Message) -> Vec<Part> {
    match message.content() {
        MessageContent::Text(text) => vec![Part::text(text)],
        MessageContent::Items(items) => {
            let parts: Vec<Part> = items
                .into_iter()
                .filter_map(|item| match item {
                    ContentItem::ToolResult { content } => Some(Part::text(format!(
                        "{} {}",
                        TOOL_RESULT_MARKER,
                        render_tool_result(content.as_ref())
                    ))),
                    ContentItem::Text { text: Some(text) }
                    | ContentItem::Unrecognized { text: Some(text) } => Some(Part::text(text)),
                    _ => None,
                })
                .collect();

            if parts.is_empty() {
                vec![Part::text(stringify(&message.content))]
            } else {
                parts
            }
        }
        MessageContent::Other(value) => vec![Part::text(stringify(value))],
    }
}

fn response_fragments(message: &Message) -> Vec<ResponseChunk> {
    let MessageContent::Items(items) = message.content() else {
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| match item {
            ContentItem::Thinking { thinking } => Some(Part::thought(thinking)),
            ContentItem::Text { text } => Some(Part::text(text.unwrap_or_default())),
            ContentItem::ToolUse { name, input } => Some(Part::function_call(name, input)),
            ContentItem::ToolResult { .. } | ContentItem::Unrecognized { .. } => None,
        })
        .map(ResponseChunk::from_part)
        .collect()
}

/// Tool result content is either a string, a list of text blocks, or
/// something else entirely
fn render_tool_result(content: Option<&Value>) -> String {
    match content {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(blocks)) => {
            let texts: Option<Vec<&str>> = blocks
                .iter()
                .map(|b| b.get("text").and_then(Value::as_str))
                .collect();
            match texts {
                Some(texts) if !texts.is_empty() => texts.join("\n"),
                _ => stringify(&Value::Array(blocks.clone())),
            }
        }
        Some(other) => stringify(other),
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
