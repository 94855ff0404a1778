use taskdeck_shared::suite::{
  NOT_AVAILABLE,
  cost_display,
  fmt_epoch,
  token_totals,
  vm_summary
};
use taskdeck_shared::{
  AppCardDto,
  AppsPage,
  MetricsSnapshot,
  NotesDoc,
  OpsSnapshot
};
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_effect_with,
  use_state
};
use yew_router::prelude::Link;

use crate::api;
use crate::app::Route;
use crate::components::AppCard;

/// Read-only status page. One manual
/// refresh control re-runs all five
/// fetches concurrently; a failed
/// fetch leaves its panel on the
/// prior render.
#[function_component(Suite)]
pub fn suite() -> Html {
  let sprint =
    use_state(|| None::<NotesDoc>);
  let backlog =
    use_state(|| None::<NotesDoc>);
  let ops =
    use_state(|| None::<OpsSnapshot>);
  let metrics = use_state(|| {
    None::<MetricsSnapshot>
  });
  let apps = use_state(|| {
    None::<Vec<AppCardDto>>
  });
  let refresh_tick =
    use_state(|| 0_u64);

  {
    let sprint = sprint.clone();
    let backlog = backlog.clone();
    let ops = ops.clone();
    let metrics = metrics.clone();
    let apps = apps.clone();

    use_effect_with(
      *refresh_tick,
      move |tick| {
        let tick = *tick;

        wasm_bindgen_futures::spawn_local(async move {
          tracing::info!(tick, "refreshing suite panels");

          let (
            sprint_result,
            backlog_result,
            ops_result,
            metrics_result,
            apps_result,
          ) = futures::join!(
            api::get_json::<NotesDoc>("/api/sprint"),
            api::get_json::<NotesDoc>("/api/backlog"),
            api::get_json::<OpsSnapshot>("/api/ops"),
            api::get_json::<MetricsSnapshot>("/api/metrics"),
            api::get_json::<AppsPage>("/api/apps"),
          );

          match sprint_result {
            Ok(doc) => sprint.set(Some(doc)),
            Err(err) => tracing::error!(error = %err, "sprint fetch failed"),
          }
          match backlog_result {
            Ok(doc) => backlog.set(Some(doc)),
            Err(err) => tracing::error!(error = %err, "backlog fetch failed"),
          }
          match ops_result {
            Ok(snapshot) => ops.set(Some(snapshot)),
            Err(err) => tracing::error!(error = %err, "ops fetch failed"),
          }
          match metrics_result {
            Ok(snapshot) => metrics.set(Some(snapshot)),
            Err(err) => tracing::error!(error = %err, "metrics fetch failed"),
          }
          match apps_result {
            Ok(page) => apps.set(Some(page.items)),
            Err(err) => tracing::error!(error = %err, "apps fetch failed"),
          }

          tracing::info!(tick, "suite refresh settled");
        });

        || ()
      }
    );
  }

  let on_refresh = {
    let refresh_tick =
      refresh_tick.clone();
    Callback::from(move |_| {
      refresh_tick
        .set(*refresh_tick + 1);
    })
  };

  html! {
      <div class="page">
          <div class="hero">
              <h1>{ "Suite Status" }</h1>
              <div class="card-actions">
                  <button id="refresh" class="btn" onclick={on_refresh}>{ "Refresh" }</button>
                  <Link<Route> classes="btn ghost" to={Route::Dashboard}>{ "All Tasks" }</Link<Route>>
              </div>
          </div>
          <div class="suite-grid">
              { notes_panel("Sprint", &sprint, "No sprint data.") }
              { notes_panel("Backlog", &backlog, "No backlog data.") }
              { ops_panel(&ops) }
              { metrics_panel(&metrics) }
          </div>
          { apps_panel(&apps) }
      </div>
  }
}

fn kv(key: &str, value: String) -> Html {
  html! {
      <div class="kv">
          <span class="k">{ key.to_string() }</span>
          <span>{ value }</span>
      </div>
  }
}

fn notes_panel(
  title: &str,
  doc: &Option<NotesDoc>,
  fallback: &str
) -> Html {
  let Some(doc) = doc else {
    return loading_panel(title);
  };

  let content =
    if doc.content.is_empty() {
      fallback.to_string()
    } else {
      doc.content.clone()
    };

  html! {
      <div class="panel">
          <div class="header">{ title.to_string() }</div>
          <pre class="content">{ content }</pre>
          <div class="updated">{ format!("updated {}", fmt_epoch(doc.updated_at)) }</div>
      </div>
  }
}

fn ops_panel(
  ops: &Option<OpsSnapshot>
) -> Html {
  let Some(ops) = ops else {
    return loading_panel("Operations");
  };

  html! {
      <div class="panel">
          <div class="header">{ "Operations" }</div>
          { kv("DMs", ops.dms.to_string()) }
          { kv("Replies", ops.replies.to_string()) }
          { kv("Errors", ops.errors.to_string()) }
          { kv("Mentions", ops.mentions.to_string()) }
          { kv("Runtime errors", ops.runtime_errors.to_string()) }
          <div class="mono small">{ ops.log_path.clone() }</div>
          <div class="small">{ ops.last_event.clone() }</div>
          <div class="updated">{ "live" }</div>
      </div>
  }
}

fn metrics_panel(
  metrics: &Option<MetricsSnapshot>
) -> Html {
  let Some(metrics) = metrics else {
    return loading_panel("Usage");
  };

  // A collector error replaces the
  // updated line and nothing else.
  let updated = if let Some(error) =
    metrics.error.clone()
  {
    error
  } else {
    metrics
      .updated_at
      .clone()
      .unwrap_or_else(|| {
        "live".to_string()
      })
  };

  let totals = token_totals(metrics);
  let fallback_count =
    |count: Option<u64>| {
      count
        .map(|c| c.to_string())
        .unwrap_or_else(|| {
          NOT_AVAILABLE.to_string()
        })
    };

  html! {
      <div class="panel">
          <div class="header">{ "Usage" }</div>
          { kv("Codex tokens 24h", totals.codex_24h.to_string()) }
          { kv("Codex tokens 1h", totals.codex_1h.to_string()) }
          { kv("Anthropic tokens 24h", totals.anthropic_24h.to_string()) }
          { kv("Anthropic tokens 1h", totals.anthropic_1h.to_string()) }
          { kv("OpenClaw calls 24h", fallback_count(metrics.openclaw_calls_24h)) }
          { kv("Slack replies 1h", fallback_count(metrics.slack_replies_1h)) }
          {
              kv(
                  "Agents",
                  metrics
                      .supervisor_backlog_summary
                      .clone()
                      .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
              )
          }
          { kv("GCP cost 24h", cost_display(metrics)) }
          { kv("VM", vm_summary(metrics)) }
          <div class="updated">{ updated }</div>
      </div>
  }
}

fn apps_panel(
  apps: &Option<Vec<AppCardDto>>
) -> Html {
  let Some(apps) = apps else {
    return loading_panel("Apps");
  };

  html! {
      <div class="panel">
          <div class="header">{ "Apps" }</div>
          {
              if apps.is_empty() {
                  html! { <div class="empty">{ "No apps configured." }</div> }
              } else {
                  html! {
                      <div id="app-grid" class="app-grid">
                          {
                              for apps.iter().map(|app| html! {
                                  <AppCard key={app.name.clone()} app={app.clone()} />
                              })
                          }
                      </div>
                  }
              }
          }
      </div>
  }
}

fn loading_panel(title: &str) -> Html {
  html! {
      <div class="panel">
          <div class="header">{ title.to_string() }</div>
          <div class="empty">{ "Loading..." }</div>
      </div>
  }
}
