use taskdeck_shared::render::{
  STATUS_CHOICES,
  card_title,
  detail_line,
  pill_class,
  split_tags
};
use taskdeck_shared::{
  TaskDto,
  TaskPatch
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  classes,
  function_component,
  html,
  use_state
};

use super::DraftTab;

#[derive(Properties, PartialEq)]
pub struct TaskCardProps {
  pub task:     TaskDto,
  pub on_save:
    Callback<(String, TaskPatch)>,
  pub on_draft:
    Callback<(TaskDto, DraftTab)>
}

/// One task card. The inline editor
/// is local state; cards are keyed
/// per refresh so an open editor is
/// discarded whenever the list is
/// rebuilt.
#[function_component(TaskCard)]
pub fn task_card(
  props: &TaskCardProps
) -> Html {
  let task = &props.task;
  let editor_open = use_state(|| false);
  let patch = {
    let task = task.clone();
    use_state(move || TaskPatch {
      status:      task.status,
      due_date:    task.due_date,
      tags:        task.tags,
      next_action: task.next_action,
      notes:       task.notes
    })
  };

  let on_toggle_edit = {
    let editor_open = editor_open.clone();
    Callback::from(move |_| {
      editor_open.set(!*editor_open);
    })
  };

  let on_save_click = {
    let on_save = props.on_save.clone();
    let id = task.id.clone();
    let patch = patch.clone();
    Callback::from(move |_| {
      on_save.emit((
        id.clone(),
        (*patch).clone()
      ));
    })
  };

  let draft_click = |tab: DraftTab| {
    let on_draft =
      props.on_draft.clone();
    let task = task.clone();
    Callback::from(move |_| {
      on_draft.emit((
        task.clone(),
        tab.clone()
      ));
    })
  };

  let on_status_change = {
    let patch = patch.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let select: web_sys::HtmlSelectElement =
          e.target_unchecked_into();
        let mut current =
          (*patch).clone();
        current.status = select.value();
        patch.set(current);
      }
    )
  };

  let patch_input = |field: fn(
    &mut TaskPatch,
    String
  )| {
    let patch = patch.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        let mut current =
          (*patch).clone();
        field(
          &mut current,
          input.value()
        );
        patch.set(current);
      }
    )
  };

  let on_notes_input = {
    let patch = patch.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let area: web_sys::HtmlTextAreaElement =
          e.target_unchecked_into();
        let mut current =
          (*patch).clone();
        current.notes = area.value();
        patch.set(current);
      }
    )
  };

  html! {
      <div class="card">
          <h3>{ card_title(task) }</h3>
          <div class="meta">
              <span class={pill_class(&task.status)}>{ task.status.clone() }</span>
              {
                  if task.due_date.is_empty() {
                      html! {}
                  } else {
                      html! { <span class="pill">{ format!("Due {}", task.due_date) }</span> }
                  }
              }
              {
                  if task.priority.is_empty() {
                      html! {}
                  } else {
                      html! { <span class="pill">{ format!("Priority {}", task.priority) }</span> }
                  }
              }
              {
                  for split_tags(&task.tags).into_iter().map(|tag| html! {
                      <span class="pill">{ tag }</span>
                  })
              }
          </div>
          <div class="meta">{ detail_line(task) }</div>
          <div class="card-actions">
              <button class="btn ghost" onclick={on_toggle_edit}>{ "Edit" }</button>
              <button class="btn ghost" onclick={draft_click(DraftTab::Email)}>{ "Draft Email" }</button>
              <button class="btn ghost" onclick={draft_click(DraftTab::Event)}>{ "Draft Event" }</button>
          </div>
          <div class={classes!("editor", (!*editor_open).then_some("hidden"))}>
              <select value={patch.status.clone()} onchange={on_status_change}>
                  {
                      for STATUS_CHOICES.iter().map(|status| html! {
                          <option value={*status} selected={patch.status == *status}>{ *status }</option>
                      })
                  }
              </select>
              <input
                  value={patch.due_date.clone()}
                  placeholder="YYYY-MM-DD"
                  oninput={patch_input(|patch, value| patch.due_date = value)}
              />
              <input
                  value={patch.tags.clone()}
                  placeholder="tags"
                  oninput={patch_input(|patch, value| patch.tags = value)}
              />
              <input
                  value={patch.next_action.clone()}
                  placeholder="next action"
                  oninput={patch_input(|patch, value| patch.next_action = value)}
              />
              <textarea
                  value={patch.notes.clone()}
                  placeholder="notes"
                  rows="2"
                  oninput={on_notes_input}
              />
              <button class="btn" onclick={on_save_click}>{ "Save" }</button>
          </div>
      </div>
  }
}
