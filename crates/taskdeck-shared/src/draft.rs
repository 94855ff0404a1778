//! Draft prefill derivation and the
//! approval gate for commit-style
//! requests.
//!
//! The gate is a UX nudge, not a
//! security boundary; the backend
//! re-checks approval on every
//! commit.

use chrono::NaiveDate;

use crate::{
  EmailDraftArgs,
  EventDraftArgs,
  TaskDto
};

pub const APPROVAL_TOKEN: &str =
  "APPROVE";
pub const DEFAULT_TIMEZONE: &str =
  "America/Denver";
pub const DEFAULT_CALENDAR: &str =
  "Drafts";

/// Commit requests may only go out
/// when the typed value, after a
/// whitespace trim, is exactly the
/// approval token. Case matters.
pub fn approval_ok(
  input: &str
) -> bool {
  input.trim() == APPROVAL_TOKEN
}

/// Body text derived from the task:
/// title, next action, notes and a
/// due line, non-empty parts only,
/// joined with blank lines.
pub fn draft_body(
  task: &TaskDto
) -> String {
  let due_line = if task
    .due_date
    .is_empty()
  {
    String::new()
  } else {
    format!("Due: {}", task.due_date)
  };

  [
    task.title.as_str(),
    task.next_action.as_str(),
    task.notes.as_str(),
    due_line.as_str()
  ]
  .iter()
  .filter(|part| !part.is_empty())
  .copied()
  .collect::<Vec<_>>()
  .join("\n\n")
}

pub fn email_subject(
  task: &TaskDto
) -> String {
  if task.title.is_empty() {
    "Follow-up".to_string()
  } else {
    format!(
      "Follow-up: {}",
      task.title
    )
  }
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct EventSlot {
  pub start: String,
  pub end:   String
}

/// Default 30-minute slot at 09:00 on
/// the task's due date. Anything that
/// does not parse as `YYYY-MM-DD`
/// yields empty start/end fields.
pub fn event_slot(
  due_date: &str
) -> EventSlot {
  match NaiveDate::parse_from_str(
    due_date, "%Y-%m-%d"
  ) {
    | Ok(date) => EventSlot {
      start: format!(
        "{}T09:00",
        date.format("%Y-%m-%d")
      ),
      end:   format!(
        "{}T09:30",
        date.format("%Y-%m-%d")
      )
    },
    | Err(_) => EventSlot::default()
  }
}

/// Prefill for the email tab.
pub fn email_prefill(
  task: &TaskDto
) -> EmailDraftArgs {
  EmailDraftArgs {
    to:      String::new(),
    subject: email_subject(task),
    body:    draft_body(task),
    commit:  false,
    approve: None
  }
}

/// Prefill for the event tab.
pub fn event_prefill(
  task: &TaskDto
) -> EventDraftArgs {
  let slot = event_slot(&task.due_date);

  EventDraftArgs {
    title:         task.title.clone(),
    start:         slot.start,
    end:           slot.end,
    timezone:      DEFAULT_TIMEZONE
      .to_string(),
    description:   draft_body(task),
    location:      String::new(),
    attendees:     String::new(),
    calendar_name: DEFAULT_CALENDAR
      .to_string(),
    commit:        false,
    approve:       None
  }
}

#[cfg(test)]
mod tests {
  use super::{
    EventSlot,
    approval_ok,
    draft_body,
    email_prefill,
    event_prefill,
    event_slot
  };
  use crate::TaskDto;

  #[test]
  fn gate_requires_exact_token() {
    assert!(approval_ok("APPROVE"));
    assert!(approval_ok(
      "  APPROVE  "
    ));

    assert!(!approval_ok("approve"));
    assert!(!approval_ok("APPROVED"));
    assert!(!approval_ok(""));
    assert!(!approval_ok("   "));
  }

  #[test]
  fn body_joins_non_empty_parts() {
    let task = TaskDto {
      title: "Renew lease".to_string(),
      next_action: "Email landlord"
        .to_string(),
      due_date: "2024-05-01"
        .to_string(),
      ..TaskDto::default()
    };

    assert_eq!(
      draft_body(&task),
      "Renew lease\n\nEmail \
       landlord\n\nDue: 2024-05-01"
    );
  }

  #[test]
  fn body_of_empty_task_is_empty() {
    assert_eq!(
      draft_body(&TaskDto::default()),
      ""
    );
  }

  #[test]
  fn slot_lands_at_nine_on_due_date()
  {
    assert_eq!(
      event_slot("2024-05-01"),
      EventSlot {
        start: "2024-05-01T09:00"
          .to_string(),
        end:   "2024-05-01T09:30"
          .to_string()
      }
    );
  }

  #[test]
  fn bad_due_date_leaves_slot_empty()
  {
    assert_eq!(
      event_slot("soon"),
      EventSlot::default()
    );
    assert_eq!(
      event_slot(""),
      EventSlot::default()
    );
  }

  #[test]
  fn prefills_start_uncommitted() {
    let task = TaskDto {
      title: "Renew lease".to_string(),
      due_date: "2024-05-01"
        .to_string(),
      ..TaskDto::default()
    };

    let email = email_prefill(&task);
    assert!(!email.commit);
    assert!(email.approve.is_none());
    assert_eq!(
      email.subject,
      "Follow-up: Renew lease"
    );

    let event = event_prefill(&task);
    assert!(!event.commit);
    assert_eq!(
      event.start,
      "2024-05-01T09:00"
    );
    assert_eq!(
      event.end,
      "2024-05-01T09:30"
    );
    assert_eq!(
      event.timezone,
      "America/Denver"
    );
  }
}
