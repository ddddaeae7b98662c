use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ExitError;

/// Top-level day-summary document.
///
/// Produced upstream by the summarizing agent; this crate only reads it.
/// Scalar fields are required (a missing one is a schema error naming the
/// field); list sections default to empty so partial days still render.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub date_long: String,
    pub date_display: String,
    /// May embed literal markup such as `<br>`; copied into the page as-is.
    pub headline: String,
    pub subtitle: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub timeline: Vec<TimelineItem>,
    #[serde(default)]
    pub workspaces: Vec<Workspace>,
    #[serde(default)]
    pub agents: Vec<AgentUsage>,
    pub hero_number: String,
    pub hero_label: String,
}

/// One activity on the day's timeline.
///
/// `time`/`time_end` are wall-clock "H:MM" offsets from the start of the
/// day. The evening block may run past 24:00 (next-day early morning), so
/// hours are not bounded at 23.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    pub time: String,
    /// Absent means a point event (rendered with a 15-minute synthetic width).
    #[serde(default)]
    pub time_end: Option<String>,
    /// Lane label; falls back to the first 15 characters of `title`.
    #[serde(default)]
    pub short_name: Option<String>,
    pub title: String,
    pub description: String,
    pub color: ColorKey,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub messages: Option<u32>,
    #[serde(default)]
    pub is_commit: bool,
    #[serde(default)]
    pub is_meeting: bool,
}

impl TimelineItem {
    /// Lane label: explicit short name, or a clipped title.
    pub fn lane_label(&self) -> String {
        self.short_name
            .clone()
            .unwrap_or_else(|| self.title.chars().take(15).collect())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub text: String,
    pub color: ColorKey,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    pub value: String,
    #[serde(default)]
    pub unit: String,
    pub label: String,
    #[serde(default)]
    pub is_highlight: bool,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub name: String,
    pub count: i64,
    pub percent: f64,
    pub color: ColorKey,
    pub color_dim: ColorKey,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AgentUsage {
    pub icon: String,
    pub name: String,
    pub count: String,
    pub label: String,
}

/// Symbolic color category carried by the data file.
///
/// Keys map to CSS custom properties of the page template. Unknown keys are
/// kept verbatim and resolve through the generic `var(--{key})` pattern
/// instead of erroring, so templates can grow palettes without a crate
/// release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColorKey {
    Accent,
    AccentDim,
    Warm,
    WarmDim,
    Success,
    Danger,
    Blue,
    Cyan,
    Gold,
    GoldDim,
    Meeting,
    TextMuted,
    Other(String),
}

impl From<String> for ColorKey {
    fn from(key: String) -> Self {
        match key.as_str() {
            "accent" => ColorKey::Accent,
            "accent-dim" => ColorKey::AccentDim,
            "warm" => ColorKey::Warm,
            "warm-dim" => ColorKey::WarmDim,
            "success" => ColorKey::Success,
            "danger" => ColorKey::Danger,
            "blue" => ColorKey::Blue,
            "cyan" => ColorKey::Cyan,
            "gold" => ColorKey::Gold,
            "gold-dim" => ColorKey::GoldDim,
            "meeting" => ColorKey::Meeting,
            "text-muted" => ColorKey::TextMuted,
            _ => ColorKey::Other(key),
        }
    }
}

impl From<ColorKey> for String {
    fn from(key: ColorKey) -> Self {
        key.as_key().to_string()
    }
}

impl ColorKey {
    /// The raw symbolic key as it appears in the data file.
    pub fn as_key(&self) -> &str {
        match self {
            ColorKey::Accent => "accent",
            ColorKey::AccentDim => "accent-dim",
            ColorKey::Warm => "warm",
            ColorKey::WarmDim => "warm-dim",
            ColorKey::Success => "success",
            ColorKey::Danger => "danger",
            ColorKey::Blue => "blue",
            ColorKey::Cyan => "cyan",
            ColorKey::Gold => "gold",
            ColorKey::GoldDim => "gold-dim",
            ColorKey::Meeting => "meeting",
            ColorKey::TextMuted => "text-muted",
            ColorKey::Other(key) => key,
        }
    }

    /// Fill color: the template's custom property for this key.
    pub fn fill(&self) -> String {
        format!("var(--{})", self.as_key())
    }

    /// Border color for tag pills. Dim companions where the palette has
    /// them, translucent literals for the flat colors, neutral otherwise.
    pub fn border(&self) -> String {
        match self {
            ColorKey::Accent => "var(--accent-dim)".to_string(),
            ColorKey::Warm => "var(--warm-dim)".to_string(),
            ColorKey::Gold => "var(--gold-dim)".to_string(),
            ColorKey::Success => "rgba(94,194,149,0.3)".to_string(),
            ColorKey::Danger => "rgba(224,84,105,0.3)".to_string(),
            ColorKey::Blue => "rgba(91,155,232,0.3)".to_string(),
            ColorKey::Cyan => "rgba(92,206,196,0.3)".to_string(),
            _ => "var(--border)".to_string(),
        }
    }
}

impl schemars::JsonSchema for ColorKey {
    fn schema_name() -> String {
        "ColorKey".to_string()
    }

    fn json_schema(generator: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        String::json_schema(generator)
    }
}

/// Load and deserialize a day-summary data file.
pub fn load_summary(path: &Path) -> Result<DaySummary, ExitError> {
    let raw = std::fs::read_to_string(path).map_err(|e| ExitError::missing_file(path, e))?;
    serde_json::from_str(&raw).map_err(|e| ExitError::Schema {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json() -> serde_json::Value {
        serde_json::json!({
            "dateLong": "Monday, February 9, 2026",
            "dateDisplay": "Feb 9, 2026",
            "headline": "One Commit,<br><em>Infinite Review</em>",
            "subtitle": "One-sentence summary",
            "heroNumber": "1",
            "heroLabel": "Commit."
        })
    }

    #[test]
    fn absent_lists_default_to_empty() {
        let day: DaySummary = serde_json::from_value(minimal_json()).unwrap();
        assert!(day.stats.is_empty());
        assert!(day.timeline.is_empty());
        assert!(day.workspaces.is_empty());
        assert!(day.agents.is_empty());
    }

    #[test]
    fn missing_required_scalar_is_an_error() {
        let mut value = minimal_json();
        value.as_object_mut().unwrap().remove("headline");
        let err = serde_json::from_value::<DaySummary>(value).unwrap_err();
        assert!(err.to_string().contains("headline"));
    }

    #[test]
    fn timeline_item_optionals_default() {
        let item: TimelineItem = serde_json::from_value(serde_json::json!({
            "time": "14:00",
            "title": "Standup prep and backlog grooming",
            "description": "Quick pass over the board",
            "color": "meeting"
        }))
        .unwrap();
        assert!(item.time_end.is_none());
        assert!(item.tags.is_empty());
        assert!(!item.is_commit);
        assert_eq!(item.lane_label(), "Standup prep an");
    }

    #[test]
    fn known_color_keys_parse_to_variants() {
        assert_eq!(ColorKey::from("warm".to_string()), ColorKey::Warm);
        assert_eq!(ColorKey::from("text-muted".to_string()), ColorKey::TextMuted);
        assert_eq!(ColorKey::Warm.fill(), "var(--warm)");
        assert_eq!(ColorKey::Warm.border(), "var(--warm-dim)");
    }

    #[test]
    fn unknown_color_key_falls_back_to_generic_lookup() {
        let key = ColorKey::from("lavender".to_string());
        assert_eq!(key, ColorKey::Other("lavender".to_string()));
        assert_eq!(key.fill(), "var(--lavender)");
        assert_eq!(key.border(), "var(--border)");
    }

    #[test]
    fn meeting_resolves_through_the_generic_pattern() {
        assert_eq!(ColorKey::Meeting.fill(), "var(--meeting)");
        assert_eq!(ColorKey::Meeting.border(), "var(--border)");
    }
}
