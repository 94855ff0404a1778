pub mod draft;
pub mod query;
pub mod render;
pub mod suite;

use serde::{
  Deserialize,
  Serialize
};

/// One task row as the backend hands
/// it out. Fields are opaque display
/// text; nothing here is validated
/// beyond defaulting missing keys to
/// empty strings.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct TaskDto {
  #[serde(default)]
  pub id:          String,
  #[serde(default)]
  pub title:       String,
  #[serde(default)]
  pub status:      String,
  #[serde(default)]
  pub due_date:    String,
  #[serde(default)]
  pub priority:    String,
  /// Comma-separated; split only for
  /// display.
  #[serde(default)]
  pub tags:        String,
  #[serde(default)]
  pub next_action: String,
  #[serde(default)]
  pub notes:       String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  Default,
)]
pub struct TasksPage {
  #[serde(default)]
  pub items: Vec<TaskDto>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  Default,
)]
pub struct TagsPage {
  #[serde(default)]
  pub items: Vec<String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct TaskCreate {
  pub title:       String,
  pub tags:        String,
  pub status:      String,
  pub due_date:    String,
  pub priority:    String,
  pub next_action: String,
  pub notes:       String
}

/// Full editable field set, sent as a
/// partial update keyed by the task
/// id.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct TaskPatch {
  pub status:      String,
  pub due_date:    String,
  pub tags:        String,
  pub next_action: String,
  pub notes:       String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct EmailDraftArgs {
  pub to:      String,
  pub subject: String,
  pub body:    String,
  pub commit:  bool,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub approve: Option<String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct EventDraftArgs {
  pub title:         String,
  pub start:         String,
  pub end:           String,
  pub timezone:      String,
  pub description:   String,
  pub location:      String,
  /// Comma-separated emails.
  pub attendees:     String,
  pub calendar_name: String,
  pub commit:        bool,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub approve: Option<String>
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct WritebackArgs {
  pub approve: String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  Default,
)]
pub struct WritebackResult {
  pub stdout: Option<String>,
  pub error:  Option<String>
}

/// Sprint / backlog note documents.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  Default,
)]
pub struct NotesDoc {
  #[serde(default)]
  pub content:    String,
  /// Epoch seconds.
  pub updated_at: Option<i64>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  Default,
)]
pub struct OpsSnapshot {
  #[serde(default)]
  pub dms:            u64,
  #[serde(default)]
  pub replies:        u64,
  #[serde(default)]
  pub errors:         u64,
  #[serde(default)]
  pub mentions:       u64,
  #[serde(default)]
  pub runtime_errors: u64,
  #[serde(default)]
  pub log_path:       String,
  #[serde(default)]
  pub last_event:     String
}

/// Usage counters; every field is
/// optional and absent ones render as
/// "n/a".
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  Default,
)]
pub struct MetricsSnapshot {
  pub error: Option<String>,
  pub codex_prompt_tokens_24h:
    Option<u64>,
  pub codex_output_tokens_24h:
    Option<u64>,
  pub codex_prompt_tokens_1h:
    Option<u64>,
  pub codex_output_tokens_1h:
    Option<u64>,
  pub anthropic_prompt_tokens_24h:
    Option<u64>,
  pub anthropic_output_tokens_24h:
    Option<u64>,
  pub anthropic_prompt_tokens_1h:
    Option<u64>,
  pub anthropic_output_tokens_1h:
    Option<u64>,
  pub openclaw_calls_24h: Option<u64>,
  pub slack_replies_1h:   Option<u64>,
  pub supervisor_backlog_summary:
    Option<String>,
  pub gcp_cost_24h_usd:   Option<f64>,
  pub gcp_cost_status:
    Option<String>,
  pub vm_load_1m:         Option<f64>,
  pub vm_mem_free_gb:     Option<f64>,
  pub vm_disk_free_gb:    Option<f64>,
  pub updated_at:         Option<String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct AppCardDto {
  #[serde(default)]
  pub name:        String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub status:      String,
  #[serde(default)]
  pub primary_url: String,
  #[serde(default)]
  pub patch_url:   String,
  #[serde(default)]
  pub repo:        String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  Default,
)]
pub struct AppsPage {
  #[serde(default)]
  pub items: Vec<AppCardDto>
}
