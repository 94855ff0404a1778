use taskdeck_shared::query::TaskQuery;
use taskdeck_shared::render::STATUS_CHOICES;
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  UseStateHandle,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FiltersPanelProps {
  pub query:
    UseStateHandle<TaskQuery>,
  pub tag_options: Vec<String>,
  pub on_refresh:
    Callback<web_sys::MouseEvent>,
  pub on_toggle_add:
    Callback<web_sys::MouseEvent>
}

#[function_component(FiltersPanel)]
pub fn filters_panel(
  props: &FiltersPanelProps
) -> Html {
  let query = props.query.clone();

  let on_q_input = {
    let query = query.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        let mut current =
          (*query).clone();
        current.q = input.value();
        query.set(current);
      }
    )
  };

  let on_tag_input = {
    let query = query.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        let mut current =
          (*query).clone();
        current.tag = input.value();
        query.set(current);
      }
    )
  };

  let on_status_change = {
    let query = query.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let select: web_sys::HtmlSelectElement =
          e.target_unchecked_into();
        let mut current =
          (*query).clone();
        current.status = select.value();
        query.set(current);
      }
    )
  };

  let on_limit_input = {
    let query = query.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        let mut current =
          (*query).clone();
        current.limit = input.value();
        query.set(current);
      }
    )
  };

  html! {
      <div class="filters">
          <input
              id="q"
              value={query.q.clone()}
              placeholder="Search tasks"
              oninput={on_q_input}
          />
          <input
              id="tag"
              value={query.tag.clone()}
              placeholder="Tag"
              list="tag-options"
              oninput={on_tag_input}
          />
          <datalist id="tag-options">
              {
                  for props.tag_options.iter().map(|tag| html! {
                      <option value={tag.clone()} />
                  })
              }
          </datalist>
          <select id="status" value={query.status.clone()} onchange={on_status_change}>
              <option value="">{ "All statuses" }</option>
              {
                  for STATUS_CHOICES.iter().map(|status| html! {
                      <option value={*status} selected={query.status == *status}>{ *status }</option>
                  })
              }
          </select>
          <input
              id="limit"
              value={query.limit.clone()}
              placeholder="200"
              size="5"
              oninput={on_limit_input}
          />
          <button id="refresh" class="btn" onclick={props.on_refresh.clone()}>
              { "Refresh" }
          </button>
          <button id="toggle-add" class="btn ghost" onclick={props.on_toggle_add.clone()}>
              { "New Task" }
          </button>
      </div>
  }
}
