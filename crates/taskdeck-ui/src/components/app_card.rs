use taskdeck_shared::AppCardDto;
use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct AppCardProps {
  pub app: AppCardDto
}

#[function_component(AppCard)]
pub fn app_card(
  props: &AppCardProps
) -> Html {
  let app = &props.app;
  let status = if app.status.is_empty()
  {
    "dev".to_string()
  } else {
    app.status.clone()
  };
  let name = if app.name.is_empty() {
    "Unnamed".to_string()
  } else {
    app.name.clone()
  };

  html! {
      <div class="app-card">
          <div class="app-header">
              <div class="app-title">{ name }</div>
              <span class={classes!("app-status", status.clone())}>{ status.clone() }</span>
          </div>
          <div class="app-desc">{ app.description.clone() }</div>
          <div class="app-links">
              {
                  if app.primary_url.is_empty() {
                      html! {}
                  } else {
                      html! {
                          <a class="btn small" href={app.primary_url.clone()} target="_blank">{ "Open" }</a>
                      }
                  }
              }
              {
                  if app.patch_url.is_empty() {
                      html! {}
                  } else {
                      html! {
                          <a class="btn ghost small" href={app.patch_url.clone()} target="_blank">{ "Patch" }</a>
                      }
                  }
              }
          </div>
          <div class="mono small">{ app.repo.clone() }</div>
      </div>
  }
}
