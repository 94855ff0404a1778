use taskdeck_shared::draft::{
  email_prefill,
  event_prefill
};
use taskdeck_shared::{
  EmailDraftArgs,
  EventDraftArgs,
  TaskDto
};
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

#[derive(Clone, PartialEq, Eq)]
pub enum DraftTab {
  Email,
  Event
}

/// Everything the modal needs while
/// it is open, including the active
/// task reference. Dropping the
/// whole state on close is what
/// clears that reference.
#[derive(Clone, PartialEq)]
pub struct DraftModalState {
  pub task:     TaskDto,
  pub tab:      DraftTab,
  pub email:    EmailDraftArgs,
  pub event:    EventDraftArgs,
  pub approval: String,
  pub note:     Option<String>,
  pub response: Option<String>,
  pub busy:     bool
}

impl DraftModalState {
  pub fn open_for(
    task: TaskDto,
    tab: DraftTab
  ) -> Self {
    DraftModalState {
      email: email_prefill(&task),
      event: event_prefill(&task),
      task,
      tab,
      approval: String::new(),
      note: None,
      response: None,
      busy: false
    }
  }
}

#[derive(Properties, PartialEq)]
pub struct DraftModalProps {
  pub state: UseStateHandle<
    Option<DraftModalState>
  >,
  pub on_preview: Callback<()>,
  pub on_commit:  Callback<()>,
  pub on_close:   Callback<()>
}

#[function_component(DraftModal)]
pub fn draft_modal(
  props: &DraftModalProps
) -> Html {
  let state = props.state.clone();
  let Some(current) = (*state).clone()
  else {
    return html! {};
  };

  let on_backdrop_click = {
    let on_close = props.on_close.clone();
    Callback::from(move |_| {
      on_close.emit(());
    })
  };

  let on_modal_click = Callback::from(
    |e: web_sys::MouseEvent| {
      e.stop_propagation();
    }
  );

  let on_close_click = {
    let on_close = props.on_close.clone();
    Callback::from(move |_| {
      on_close.emit(());
    })
  };

  let select_tab = |tab: DraftTab| {
    let state = state.clone();
    Callback::from(move |_| {
      if let Some(mut current) =
        (*state).clone()
      {
        current.tab = tab.clone();
        current.note = None;
        state.set(Some(current));
      }
    })
  };

  let email_input = |field: fn(
    &mut EmailDraftArgs,
    String
  )| {
    let state = state.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        if let Some(mut current) =
          (*state).clone()
        {
          field(
            &mut current.email,
            input.value()
          );
          current.note = None;
          state.set(Some(current));
        }
      }
    )
  };

  let event_input = |field: fn(
    &mut EventDraftArgs,
    String
  )| {
    let state = state.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        if let Some(mut current) =
          (*state).clone()
        {
          field(
            &mut current.event,
            input.value()
          );
          current.note = None;
          state.set(Some(current));
        }
      }
    )
  };

  let on_email_body_input = {
    let state = state.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let area: web_sys::HtmlTextAreaElement =
          e.target_unchecked_into();
        if let Some(mut current) =
          (*state).clone()
        {
          current.email.body =
            area.value();
          current.note = None;
          state.set(Some(current));
        }
      }
    )
  };

  let on_event_description_input = {
    let state = state.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let area: web_sys::HtmlTextAreaElement =
          e.target_unchecked_into();
        if let Some(mut current) =
          (*state).clone()
        {
          current.event.description =
            area.value();
          current.note = None;
          state.set(Some(current));
        }
      }
    )
  };

  let on_approval_input = {
    let state = state.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        if let Some(mut current) =
          (*state).clone()
        {
          current.approval =
            input.value();
          current.note = None;
          state.set(Some(current));
        }
      }
    )
  };

  let on_preview_click = {
    let on_preview =
      props.on_preview.clone();
    Callback::from(move |_| {
      on_preview.emit(());
    })
  };

  let on_commit_click = {
    let on_commit =
      props.on_commit.clone();
    Callback::from(move |_| {
      on_commit.emit(());
    })
  };

  let email_tab =
    current.tab == DraftTab::Email;
  let busy = current.busy;

  html! {
      <div class="modal-backdrop" onclick={on_backdrop_click}>
          <div id="draft-email" class="modal" onclick={on_modal_click}>
              <div class="hero">
                  <h1>{ "Draft" }</h1>
                  <button id="draft-close" class="btn ghost" onclick={on_close_click}>{ "Close" }</button>
              </div>
              <div class="tabs">
                  <button
                      class={classes!("btn", email_tab.then_some("active"))}
                      onclick={select_tab(DraftTab::Email)}
                  >
                      { "Email" }
                  </button>
                  <button
                      class={classes!("btn", (!email_tab).then_some("active"))}
                      onclick={select_tab(DraftTab::Event)}
                  >
                      { "Event" }
                  </button>
              </div>
              {
                  if email_tab {
                      html! {
                          <>
                              <div class="field">
                                  <label>{ "To" }</label>
                                  <input
                                      value={current.email.to.clone()}
                                      placeholder="person@example.com"
                                      oninput={email_input(|email, value| email.to = value)}
                                  />
                              </div>
                              <div class="field">
                                  <label>{ "Subject" }</label>
                                  <input
                                      value={current.email.subject.clone()}
                                      oninput={email_input(|email, value| email.subject = value)}
                                  />
                              </div>
                              <div class="field">
                                  <label>{ "Body" }</label>
                                  <textarea
                                      value={current.email.body.clone()}
                                      rows="6"
                                      oninput={on_email_body_input}
                                  />
                              </div>
                          </>
                      }
                  } else {
                      html! {
                          <>
                              <div class="field">
                                  <label>{ "Title" }</label>
                                  <input
                                      value={current.event.title.clone()}
                                      oninput={event_input(|event, value| event.title = value)}
                                  />
                              </div>
                              <div class="field">
                                  <label>{ "Start" }</label>
                                  <input
                                      value={current.event.start.clone()}
                                      placeholder="YYYY-MM-DDTHH:MM"
                                      oninput={event_input(|event, value| event.start = value)}
                                  />
                              </div>
                              <div class="field">
                                  <label>{ "End" }</label>
                                  <input
                                      value={current.event.end.clone()}
                                      placeholder="YYYY-MM-DDTHH:MM"
                                      oninput={event_input(|event, value| event.end = value)}
                                  />
                              </div>
                              <div class="field">
                                  <label>{ "Timezone" }</label>
                                  <input
                                      value={current.event.timezone.clone()}
                                      oninput={event_input(|event, value| event.timezone = value)}
                                  />
                              </div>
                              <div class="field">
                                  <label>{ "Location" }</label>
                                  <input
                                      value={current.event.location.clone()}
                                      oninput={event_input(|event, value| event.location = value)}
                                  />
                              </div>
                              <div class="field">
                                  <label>{ "Attendees" }</label>
                                  <input
                                      value={current.event.attendees.clone()}
                                      placeholder="comma,separated,emails"
                                      oninput={event_input(|event, value| event.attendees = value)}
                                  />
                              </div>
                              <div class="field">
                                  <label>{ "Calendar" }</label>
                                  <input
                                      value={current.event.calendar_name.clone()}
                                      oninput={event_input(|event, value| event.calendar_name = value)}
                                  />
                              </div>
                              <div class="field">
                                  <label>{ "Description" }</label>
                                  <textarea
                                      value={current.event.description.clone()}
                                      rows="4"
                                      oninput={on_event_description_input}
                                  />
                              </div>
                          </>
                      }
                  }
              }
              <div class="field">
                  <label>{ "Type APPROVE to allow commit" }</label>
                  <input
                      id="draft-approve"
                      value={current.approval.clone()}
                      placeholder="APPROVE"
                      oninput={on_approval_input}
                  />
              </div>
              {
                  if let Some(note) = current.note.clone() {
                      html! { <div class="note">{ note }</div> }
                  } else {
                      html! {}
                  }
              }
              <div class="card-actions">
                  <button class="btn" onclick={on_preview_click} disabled={busy}>
                      { if busy { "Working..." } else { "Preview" } }
                  </button>
                  <button class="btn" onclick={on_commit_click} disabled={busy}>
                      { "Commit" }
                  </button>
              </div>
              {
                  if let Some(response) = current.response.clone() {
                      html! { <pre class="response">{ response }</pre> }
                  } else {
                      html! {}
                  }
              }
          </div>
      </div>
  }
}
