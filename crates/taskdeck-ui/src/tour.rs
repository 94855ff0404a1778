//! In-page UAT walkthrough. Activated
//! with `?uat=1` on the dashboard
//! route; steps a floating badge and
//! an outline highlight through the
//! page without committing any data.

use gloo::timers::future::TimeoutFuture;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  Element,
  HtmlElement,
  HtmlInputElement
};

const TOUR_CONFIG_TOML: &str =
  include_str!("../assets/uat.toml");
const BADGE_ID: &str = "uat-step-label";
const HIGHLIGHT_ATTR: &str =
  "data-uat-highlight";
const HIGHLIGHT_OUTLINE: &str =
  "3px solid #e36f45";

#[derive(Clone, Deserialize)]
struct TourConfig {
  #[serde(default = "default_step_ms")]
  step_ms:       u32,
  #[serde(
    default = "default_title_pattern"
  )]
  title_pattern: String
}

fn default_step_ms() -> u32 {
  3000
}

fn default_title_pattern() -> String {
  "All Tasks".to_string()
}

impl Default for TourConfig {
  fn default() -> Self {
    TourConfig {
      step_ms:       default_step_ms(),
      title_pattern:
        default_title_pattern()
    }
  }
}

fn load_config() -> TourConfig {
  match toml::from_str::<TourConfig>(
    TOUR_CONFIG_TOML
  ) {
    | Ok(config) => {
      tracing::info!(
        step_ms = config.step_ms,
        "loaded walkthrough config"
      );
      config
    }
    | Err(error) => {
      tracing::error!(%error, "failed to parse walkthrough config; using defaults");
      TourConfig::default()
    }
  }
}

fn search_param(
  key: &str
) -> Option<String> {
  let search = web_sys::window()?
    .location()
    .search()
    .ok()?;
  let params =
    web_sys::UrlSearchParams::new_with_str(
      &search
    )
    .ok()?;
  params.get(key)
}

pub fn requested() -> bool {
  search_param("uat").as_deref()
    == Some("1")
}

fn dwell_ms(
  config: &TourConfig
) -> u32 {
  search_param("uat_step_ms")
    .and_then(|raw| raw.parse().ok())
    .unwrap_or(config.step_ms)
}

pub async fn run() {
  let config = load_config();
  let dwell = dwell_ms(&config);
  let Some(document) =
    web_sys::window()
      .and_then(|w| w.document())
  else {
    return;
  };

  show_step(
    &document,
    "All Tasks dashboard loaded",
    Some(".hero"),
    dwell
  )
  .await;

  show_step(
    &document,
    "Filters panel",
    Some(".filters"),
    dwell
  )
  .await;
  fill_input(&document, "#q", "test");
  TimeoutFuture::new(400).await;
  fill_input(&document, "#q", "");

  show_step(
    &document,
    "New Task panel (not submitting)",
    Some("#toggle-add"),
    dwell
  )
  .await;
  click(&document, "#toggle-add");
  TimeoutFuture::new(600).await;
  fill_input(
    &document,
    "#new-title",
    "UAT demo task (not saved)"
  );
  fill_input(
    &document,
    "#new-tags",
    "uat,demo"
  );
  fill_input(
    &document,
    "#new-next",
    "Confirm UI behavior"
  );
  TimeoutFuture::new(800).await;
  click(&document, "#toggle-add");

  show_step(
    &document,
    "Task cards list",
    Some(".cards"),
    dwell
  )
  .await;

  let cards = document
    .query_selector_all(".card")
    .map(|list| list.length())
    .unwrap_or(0);

  if cards > 0 {
    show_step(
      &document,
      "Open the draft email modal",
      Some(
        ".card-actions \
         button:nth-of-type(2)"
      ),
      dwell
    )
    .await;
    click_button_with_text(
      &document,
      ".card-actions button",
      "Draft Email"
    );
    TimeoutFuture::new(600).await;
    show_step(
      &document,
      "Draft email modal with \
       approval gate",
      Some("#draft-email"),
      dwell
    )
    .await;
    click(&document, "#draft-close");
  } else {
    show_step(
      &document,
      "No tasks found (verify data \
       ingestion)",
      Some(".cards"),
      dwell
    )
    .await;
  }

  show_step(
    &document,
    "Sync to Excel requires explicit \
     APPROVE",
    Some("#sync-excel"),
    dwell
  )
  .await;

  let title = document.title();
  let matched = title
    .to_lowercase()
    .contains(
      &config
        .title_pattern
        .to_lowercase()
    );

  if matched {
    tracing::info!(title = %title, "walkthrough finished");
    show_step(
      &document,
      "Walkthrough complete",
      None,
      dwell
    )
    .await;
  } else {
    tracing::error!(title = %title, expected = %config.title_pattern, "unexpected page title at end of walkthrough");
    show_step(
      &document,
      "Walkthrough failed: \
       unexpected page title",
      None,
      dwell
    )
    .await;
  }
}

async fn show_step(
  document: &Document,
  label: &str,
  selector: Option<&str>,
  dwell: u32
) {
  if let Some(existing) = document
    .get_element_by_id(BADGE_ID)
  {
    existing.remove();
  }

  clear_highlights(document);

  if let Some(selector) = selector {
    if let Ok(Some(target)) = document
      .query_selector(selector)
    {
      highlight(&target);
    }
  }

  if let Ok(badge) =
    document.create_element("div")
  {
    badge.set_id(BADGE_ID);
    badge
      .set_text_content(Some(label));
    if let Some(el) =
      badge.dyn_ref::<HtmlElement>()
    {
      let style = el.style();
      let rules = [
        ("position", "fixed"),
        ("bottom", "24px"),
        ("left", "24px"),
        ("z-index", "9999"),
        ("padding", "10px 14px"),
        ("border-radius", "12px"),
        ("background", "#1f1a17"),
        ("color", "#fff"),
        ("font-size", "14px"),
        (
          "box-shadow",
          "0 10px 20px \
           rgba(0,0,0,0.2)"
        )
      ];
      for (prop, value) in rules {
        let _ = style
          .set_property(prop, value);
      }
    }
    if let Some(body) = document.body()
    {
      let _ = body.append_child(&badge);
    }
  }

  tracing::debug!(
    step = label,
    "walkthrough step"
  );
  TimeoutFuture::new(dwell).await;
}

fn clear_highlights(
  document: &Document
) {
  let Ok(marked) = document
    .query_selector_all(&format!(
      "[{HIGHLIGHT_ATTR}]"
    ))
  else {
    return;
  };

  for index in 0..marked.length() {
    let Some(node) = marked.item(index)
    else {
      continue;
    };
    let Ok(element) =
      node.dyn_into::<Element>()
    else {
      continue;
    };

    let _ = element
      .remove_attribute(HIGHLIGHT_ATTR);
    if let Some(el) = element
      .dyn_ref::<HtmlElement>()
    {
      let _ = el
        .style()
        .remove_property("outline");
      let _ = el
        .style()
        .remove_property(
          "outline-offset"
        );
    }
  }
}

fn highlight(target: &Element) {
  let _ = target.set_attribute(
    HIGHLIGHT_ATTR,
    "true"
  );
  if let Some(el) =
    target.dyn_ref::<HtmlElement>()
  {
    let style = el.style();
    let _ = style.set_property(
      "outline",
      HIGHLIGHT_OUTLINE
    );
    let _ = style.set_property(
      "outline-offset",
      "4px"
    );
  }
}

fn fill_input(
  document: &Document,
  selector: &str,
  value: &str
) {
  let Ok(Some(element)) =
    document.query_selector(selector)
  else {
    return;
  };
  let Ok(input) = element
    .dyn_into::<HtmlInputElement>()
  else {
    return;
  };

  input.set_value(value);

  // Bubbling input event so the view
  // state picks the value up.
  let init = web_sys::EventInit::new();
  init.set_bubbles(true);
  if let Ok(event) =
    web_sys::Event::new_with_event_init_dict(
      "input", &init
    )
  {
    let _ = input.dispatch_event(&event);
  }
}

fn click(
  document: &Document,
  selector: &str
) {
  let Ok(Some(element)) =
    document.query_selector(selector)
  else {
    return;
  };
  if let Some(el) =
    element.dyn_ref::<HtmlElement>()
  {
    el.click();
  }
}

fn click_button_with_text(
  document: &Document,
  selector: &str,
  text: &str
) {
  let Ok(buttons) = document
    .query_selector_all(selector)
  else {
    return;
  };

  for index in 0..buttons.length() {
    let Some(node) =
      buttons.item(index)
    else {
      continue;
    };
    let Some(el) =
      node.dyn_ref::<HtmlElement>()
    else {
      continue;
    };

    let label = el
      .text_content()
      .unwrap_or_default();
    if label.contains(text) {
      el.click();
      return;
    }
  }
}
