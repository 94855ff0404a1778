use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  UseStateHandle,
  classes,
  function_component,
  html
};

/// Creation panel inputs. The status
/// select keeps its last choice when
/// the other fields are cleared
/// after a save.
#[derive(Clone, PartialEq, Eq)]
pub struct NewTaskForm {
  pub title:       String,
  pub tags:        String,
  pub status:      String,
  pub due_date:    String,
  pub priority:    String,
  pub next_action: String,
  pub notes:       String
}

impl Default for NewTaskForm {
  fn default() -> Self {
    NewTaskForm {
      title:       String::new(),
      tags:        String::new(),
      status:      "Not Started"
        .to_string(),
      due_date:    String::new(),
      priority:    String::new(),
      next_action: String::new(),
      notes:       String::new()
    }
  }
}

impl NewTaskForm {
  /// Clears every input except the
  /// status select.
  pub fn cleared(&self) -> Self {
    NewTaskForm {
      status: self.status.clone(),
      ..NewTaskForm::default()
    }
  }
}

#[derive(Properties, PartialEq)]
pub struct CreatePanelProps {
  pub open: bool,
  pub form:
    UseStateHandle<NewTaskForm>,
  pub on_save:
    Callback<web_sys::MouseEvent>
}

#[function_component(CreatePanel)]
pub fn create_panel(
  props: &CreatePanelProps
) -> Html {
  let form = props.form.clone();

  let text_input = |field: fn(
    &mut NewTaskForm,
    String
  )| {
    let form = form.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        let mut current =
          (*form).clone();
        field(
          &mut current,
          input.value()
        );
        form.set(current);
      }
    )
  };

  let on_status_change = {
    let form = form.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let select: web_sys::HtmlSelectElement =
          e.target_unchecked_into();
        let mut current =
          (*form).clone();
        current.status = select.value();
        form.set(current);
      }
    )
  };

  let on_notes_input = {
    let form = form.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let area: web_sys::HtmlTextAreaElement =
          e.target_unchecked_into();
        let mut current =
          (*form).clone();
        current.notes = area.value();
        form.set(current);
      }
    )
  };

  html! {
      <div id="add-panel" class={classes!("add-panel", (!props.open).then_some("hidden"))}>
          <input
              id="new-title"
              value={form.title.clone()}
              placeholder="Title"
              oninput={text_input(|form, value| form.title = value)}
          />
          <input
              id="new-tags"
              value={form.tags.clone()}
              placeholder="tags, comma, separated"
              oninput={text_input(|form, value| form.tags = value)}
          />
          <select id="new-status" value={form.status.clone()} onchange={on_status_change}>
              <option value="Not Started" selected={form.status == "Not Started"}>{ "Not Started" }</option>
              <option value="In-Progress" selected={form.status == "In-Progress"}>{ "In-Progress" }</option>
              <option value="Completed" selected={form.status == "Completed"}>{ "Completed" }</option>
          </select>
          <input
              id="new-due"
              value={form.due_date.clone()}
              placeholder="YYYY-MM-DD"
              oninput={text_input(|form, value| form.due_date = value)}
          />
          <input
              id="new-priority"
              value={form.priority.clone()}
              placeholder="Priority"
              oninput={text_input(|form, value| form.priority = value)}
          />
          <input
              id="new-next"
              value={form.next_action.clone()}
              placeholder="Next action"
              oninput={text_input(|form, value| form.next_action = value)}
          />
          <textarea
              id="new-notes"
              value={form.notes.clone()}
              placeholder="Notes"
              rows="2"
              oninput={on_notes_input}
          />
          <button id="save-new" class="btn" onclick={props.on_save.clone()}>
              { "Save" }
          </button>
      </div>
  }
}
