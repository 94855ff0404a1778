//! Pure card-rendering decisions:
//! pill classes, tag splitting, the
//! detail line, and the open/done
//! tallies shown above the card
//! list.

use crate::TaskDto;

pub const UNTITLED: &str = "(untitled)";

pub const STATUS_CHOICES: [&str; 3] = [
  "Not Started",
  "In-Progress",
  "Completed"
];

/// CSS class for the status pill.
/// Unmapped statuses get the neutral
/// pill.
pub fn pill_class(
  status: &str
) -> &'static str {
  match status {
    | "Completed" => "pill green",
    | "Not Started" => "pill red",
    | "In-Progress" => "pill yellow",
    | _ => "pill"
  }
}

pub fn card_title(
  task: &TaskDto
) -> &str {
  if task.title.is_empty() {
    UNTITLED
  } else {
    &task.title
  }
}

/// Comma-separated tag text split
/// into trimmed, non-empty pill
/// labels.
pub fn split_tags(
  tags: &str
) -> Vec<String> {
  tags
    .split(',')
    .map(str::trim)
    .filter(|tag| !tag.is_empty())
    .map(str::to_string)
    .collect()
}

/// The card detail line prefers the
/// next action over free-form notes.
pub fn detail_line(
  task: &TaskDto
) -> &str {
  if task.next_action.is_empty() {
    &task.notes
  } else {
    &task.next_action
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub struct TaskTally {
  pub total: usize,
  pub open:  usize,
  pub done:  usize
}

/// Single pass partitioning on
/// `status == "Completed"`.
pub fn tally(
  items: &[TaskDto]
) -> TaskTally {
  let mut counts = TaskTally {
    total: items.len(),
    ..TaskTally::default()
  };

  for item in items {
    if item.status == "Completed" {
      counts.done += 1;
    } else {
      counts.open += 1;
    }
  }

  counts
}

#[cfg(test)]
mod tests {
  use super::{
    UNTITLED,
    card_title,
    detail_line,
    pill_class,
    split_tags,
    tally
  };
  use crate::TaskDto;

  fn task_with_status(
    status: &str
  ) -> TaskDto {
    TaskDto {
      status: status.to_string(),
      ..TaskDto::default()
    }
  }

  #[test]
  fn pill_class_mapping() {
    assert_eq!(
      pill_class("Completed"),
      "pill green"
    );
    assert_eq!(
      pill_class("Not Started"),
      "pill red"
    );
    assert_eq!(
      pill_class("In-Progress"),
      "pill yellow"
    );
    assert_eq!(
      pill_class("Blocked"),
      "pill"
    );
    assert_eq!(pill_class(""), "pill");
  }

  #[test]
  fn tags_are_trimmed_and_non_empty()
  {
    assert_eq!(
      split_tags("a, b ,c"),
      vec!["a", "b", "c"]
    );
    assert_eq!(
      split_tags("a,,  ,b"),
      vec!["a", "b"]
    );
    assert!(split_tags("").is_empty());
  }

  #[test]
  fn tally_partitions_on_completed() {
    let items = vec![
      task_with_status("Completed"),
      task_with_status("Not Started"),
      task_with_status("In-Progress"),
      task_with_status("Completed"),
      task_with_status("anything"),
    ];

    let counts = tally(&items);
    assert_eq!(counts.total, 5);
    assert_eq!(counts.done, 2);
    assert_eq!(counts.open, 3);
    assert_eq!(
      counts.open + counts.done,
      items.len()
    );
  }

  #[test]
  fn empty_list_tallies_to_zero() {
    let counts = tally(&[]);
    assert_eq!(counts.total, 0);
    assert_eq!(counts.open, 0);
    assert_eq!(counts.done, 0);
  }

  #[test]
  fn untitled_placeholder() {
    let task = TaskDto::default();
    assert_eq!(
      card_title(&task),
      UNTITLED
    );

    let task = TaskDto {
      title: "Ship it".to_string(),
      ..TaskDto::default()
    };
    assert_eq!(
      card_title(&task),
      "Ship it"
    );
  }

  #[test]
  fn detail_prefers_next_action() {
    let task = TaskDto {
      next_action: "call vendor"
        .to_string(),
      notes: "long notes".to_string(),
      ..TaskDto::default()
    };
    assert_eq!(
      detail_line(&task),
      "call vendor"
    );

    let task = TaskDto {
      notes: "only notes".to_string(),
      ..TaskDto::default()
    };
    assert_eq!(
      detail_line(&task),
      "only notes"
    );
  }
}
