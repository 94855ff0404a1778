//! Display derivation for the suite
//! status page: note timestamps,
//! token totals, VM snippets and the
//! cost line.

use chrono::{
  DateTime,
  Local
};

use crate::MetricsSnapshot;

pub const NOT_AVAILABLE: &str = "n/a";

/// Epoch seconds rendered as a local
/// time string; missing or
/// non-positive stamps read as
/// "unknown".
pub fn fmt_epoch(
  ts: Option<i64>
) -> String {
  let Some(ts) = ts.filter(|ts| *ts > 0)
  else {
    return "unknown".to_string();
  };

  match DateTime::from_timestamp(ts, 0)
  {
    | Some(utc) => utc
      .with_timezone(&Local)
      .format("%Y-%m-%d %H:%M:%S")
      .to_string(),
    | None => "unknown".to_string()
  }
}

/// Prompt + output token sums per
/// provider and window; absent
/// counters contribute zero.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub struct TokenTotals {
  pub codex_24h:     u64,
  pub codex_1h:      u64,
  pub anthropic_24h: u64,
  pub anthropic_1h:  u64
}

pub fn token_totals(
  metrics: &MetricsSnapshot
) -> TokenTotals {
  let sum = |a: Option<u64>,
             b: Option<u64>| {
    a.unwrap_or(0) + b.unwrap_or(0)
  };

  TokenTotals {
    codex_24h:     sum(
      metrics.codex_prompt_tokens_24h,
      metrics.codex_output_tokens_24h
    ),
    codex_1h:      sum(
      metrics.codex_prompt_tokens_1h,
      metrics.codex_output_tokens_1h
    ),
    anthropic_24h: sum(
      metrics
        .anthropic_prompt_tokens_24h,
      metrics
        .anthropic_output_tokens_24h
    ),
    anthropic_1h:  sum(
      metrics
        .anthropic_prompt_tokens_1h,
      metrics
        .anthropic_output_tokens_1h
    )
  }
}

/// VM resource snippets joined with
/// " | "; zero readings are treated
/// as absent, and no readings at all
/// collapse to "n/a".
pub fn vm_summary(
  metrics: &MetricsSnapshot
) -> String {
  let reading =
    |label: &str, value: Option<f64>| {
      value
        .filter(|v| *v != 0.0)
        .map(|v| {
          format!("{label}={v}")
        })
    };

  let parts: Vec<String> = [
    reading(
      "load",
      metrics.vm_load_1m
    ),
    reading(
      "mem_free_gb",
      metrics.vm_mem_free_gb
    ),
    reading(
      "disk_free_gb",
      metrics.vm_disk_free_gb
    )
  ]
  .into_iter()
  .flatten()
  .collect();

  if parts.is_empty() {
    NOT_AVAILABLE.to_string()
  } else {
    parts.join(" | ")
  }
}

/// Cost line: a currency figure when
/// the number is present, otherwise
/// the collector's status string,
/// otherwise "n/a".
pub fn cost_display(
  metrics: &MetricsSnapshot
) -> String {
  if let Some(cost) =
    metrics.gcp_cost_24h_usd
  {
    return format!("${cost}");
  }

  metrics
    .gcp_cost_status
    .clone()
    .unwrap_or_else(|| {
      NOT_AVAILABLE.to_string()
    })
}

#[cfg(test)]
mod tests {
  use super::{
    cost_display,
    fmt_epoch,
    token_totals,
    vm_summary
  };
  use crate::MetricsSnapshot;

  #[test]
  fn missing_stamp_reads_unknown() {
    assert_eq!(
      fmt_epoch(None),
      "unknown"
    );
    assert_eq!(
      fmt_epoch(Some(0)),
      "unknown"
    );
  }

  #[test]
  fn stamp_formats_as_datetime() {
    let formatted =
      fmt_epoch(Some(1_714_550_400));
    assert_eq!(formatted.len(), 19);
    assert!(formatted.contains(':'));
  }

  #[test]
  fn totals_sum_prompt_and_output() {
    let metrics = MetricsSnapshot {
      codex_prompt_tokens_24h: Some(
        100
      ),
      codex_output_tokens_24h: Some(
        40
      ),
      anthropic_prompt_tokens_1h:
        Some(7),
      ..MetricsSnapshot::default()
    };

    let totals =
      token_totals(&metrics);
    assert_eq!(totals.codex_24h, 140);
    assert_eq!(totals.codex_1h, 0);
    assert_eq!(
      totals.anthropic_1h,
      7
    );
    assert_eq!(
      totals.anthropic_24h,
      0
    );
  }

  #[test]
  fn vm_parts_join_with_separator() {
    let metrics = MetricsSnapshot {
      vm_load_1m: Some(1.25),
      vm_disk_free_gb: Some(42.5),
      ..MetricsSnapshot::default()
    };

    assert_eq!(
      vm_summary(&metrics),
      "load=1.25 | disk_free_gb=42.5"
    );
  }

  #[test]
  fn empty_vm_readings_are_na() {
    let metrics =
      MetricsSnapshot::default();
    assert_eq!(
      vm_summary(&metrics),
      "n/a"
    );

    let metrics = MetricsSnapshot {
      vm_load_1m: Some(0.0),
      ..MetricsSnapshot::default()
    };
    assert_eq!(
      vm_summary(&metrics),
      "n/a"
    );
  }

  #[test]
  fn cost_prefers_figure_over_status()
  {
    let metrics = MetricsSnapshot {
      gcp_cost_24h_usd: Some(3.75),
      gcp_cost_status: Some(
        "pending".to_string()
      ),
      ..MetricsSnapshot::default()
    };
    assert_eq!(
      cost_display(&metrics),
      "$3.75"
    );

    let metrics = MetricsSnapshot {
      gcp_cost_status: Some(
        "billing export disabled"
          .to_string()
      ),
      ..MetricsSnapshot::default()
    };
    assert_eq!(
      cost_display(&metrics),
      "billing export disabled"
    );

    assert_eq!(
      cost_display(
        &MetricsSnapshot::default()
      ),
      "n/a"
    );
  }
}
