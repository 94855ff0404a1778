//! Filter query construction for the
//! task list endpoint. The backend
//! applies all filtering; the client
//! only decides which parameters to
//! send.

pub const DEFAULT_LIMIT: &str = "200";

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct TaskQuery {
  pub q:      String,
  pub tag:    String,
  pub status: String,
  pub limit:  String
}

impl TaskQuery {
  /// Ordered query pairs. Blank
  /// filters are omitted entirely;
  /// the limit is always present and
  /// falls back to
  /// [`DEFAULT_LIMIT`].
  pub fn pairs(
    &self
  ) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();

    let q = self.q.trim();
    if !q.is_empty() {
      pairs.push(("q", q.to_string()));
    }

    let tag = self.tag.trim();
    if !tag.is_empty() {
      pairs
        .push(("tag", tag.to_string()));
    }

    if !self.status.is_empty() {
      pairs.push((
        "status",
        self.status.clone()
      ));
    }

    let limit = if self.limit.is_empty()
    {
      DEFAULT_LIMIT.to_string()
    } else {
      self.limit.clone()
    };
    pairs.push(("limit", limit));

    pairs
  }
}

#[cfg(test)]
mod tests {
  use super::{
    DEFAULT_LIMIT,
    TaskQuery
  };

  #[test]
  fn blank_filters_are_omitted() {
    let query = TaskQuery::default();
    let pairs = query.pairs();

    assert_eq!(
      pairs,
      vec![(
        "limit",
        DEFAULT_LIMIT.to_string()
      )]
    );
  }

  #[test]
  fn populated_filters_keep_order() {
    let query = TaskQuery {
      q:      "  invoice ".to_string(),
      tag:    "payroll".to_string(),
      status: "In-Progress"
        .to_string(),
      limit:  "25".to_string()
    };

    assert_eq!(
      query.pairs(),
      vec![
        (
          "q",
          "invoice".to_string()
        ),
        (
          "tag",
          "payroll".to_string()
        ),
        (
          "status",
          "In-Progress".to_string()
        ),
        (
          "limit",
          "25".to_string()
        ),
      ]
    );
  }

  #[test]
  fn whitespace_only_search_is_blank()
  {
    let query = TaskQuery {
      q: "   ".to_string(),
      ..TaskQuery::default()
    };

    let pairs = query.pairs();
    assert!(
      pairs
        .iter()
        .all(|(key, _)| *key != "q")
    );
  }

  #[test]
  fn explicit_limit_is_kept() {
    let query = TaskQuery {
      limit: "500".to_string(),
      ..TaskQuery::default()
    };

    assert_eq!(
      query.pairs(),
      vec![(
        "limit",
        "500".to_string()
      )]
    );
  }
}
