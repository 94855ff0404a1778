use gloo::console::log;
use taskdeck_shared::draft::approval_ok;
use taskdeck_shared::query::TaskQuery;
use taskdeck_shared::render::tally;
use taskdeck_shared::{
  TagsPage,
  TaskCreate,
  TaskDto,
  TaskPatch,
  TasksPage,
  WritebackArgs,
  WritebackResult
};
use wasm_bindgen::JsCast;
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
use crate::components::{
  CreatePanel,
  DraftModal,
  DraftModalState,
  DraftTab,
  FiltersPanel,
  NewTaskForm,
  TaskCard
};
use crate::tour;

/// The dashboard view controller.
/// All transient page state lives in
/// these hooks; the backend is the
/// sole source of truth and every
/// mutation ends in a full refetch
/// and rebuild of the card list.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
  let filters =
    use_state(TaskQuery::default);
  let tasks =
    use_state(Vec::<TaskDto>::new);
  let status_line = use_state(|| {
    "Loading...".to_string()
  });
  let tag_options =
    use_state(Vec::<String>::new);
  let add_open = use_state(|| false);
  let new_task =
    use_state(NewTaskForm::default);
  let draft = use_state(|| {
    None::<DraftModalState>
  });
  let writeback_note =
    use_state(String::new);
  let refresh_tick =
    use_state(|| 0_u64);

  {
    let tasks = tasks.clone();
    let status_line =
      status_line.clone();
    let filters = filters.clone();

    use_effect_with(
      *refresh_tick,
      move |tick| {
        let tick = *tick;

        wasm_bindgen_futures::spawn_local(async move {
          status_line.set("Loading...".to_string());
          let url = api::tasks_url(&filters);
          tracing::info!(tick, url = %url, "refreshing task list");

          match api::get_json::<TasksPage>(&url).await {
            Ok(page) => {
              status_line.set(format!("Loaded {} tasks", page.items.len()));
              tasks.set(page.items);
            }
            Err(err) => {
              // Prior render stays in place on failure.
              tracing::error!(error = %err, "task list refresh failed");
            }
          }
        });

        || ()
      }
    );
  }

  {
    let tag_options =
      tag_options.clone();

    use_effect_with((), move |_| {
      wasm_bindgen_futures::spawn_local(async move {
        match api::get_json::<TagsPage>("/api/tags").await {
          Ok(page) => tag_options.set(page.items),
          Err(err) => {
            tracing::error!(error = %err, "tag list fetch failed");
          }
        }
      });

      || ()
    });
  }

  // Escape closes the draft modal
  // while it is open.
  {
    let draft = draft.clone();

    use_effect_with(
      (*draft).is_some(),
      move |open| {
        let listener =
          open.then(|| {
            let draft = draft.clone();
            gloo::events::EventListener::new(
              &gloo::utils::document(),
              "keydown",
              move |event| {
                let escape = event
                  .dyn_ref::<web_sys::KeyboardEvent>()
                  .is_some_and(|e| e.key() == "Escape");
                if escape {
                  draft.set(None);
                }
              }
            )
          });

        move || drop(listener)
      }
    );
  }

  {
    use_effect_with((), move |_| {
      if tour::requested() {
        wasm_bindgen_futures::spawn_local(tour::run());
      }

      || ()
    });
  }

  let on_refresh = {
    let refresh_tick =
      refresh_tick.clone();
    Callback::from(move |_| {
      refresh_tick
        .set(*refresh_tick + 1);
    })
  };

  let on_toggle_add = {
    let add_open = add_open.clone();
    Callback::from(move |_| {
      add_open.set(!*add_open);
    })
  };

  let on_save_new = {
    let new_task = new_task.clone();
    let refresh_tick =
      refresh_tick.clone();

    Callback::from(move |_| {
      let payload = {
        let form = (*new_task).clone();
        TaskCreate {
          title:       form.title,
          tags:        form.tags,
          status:      form.status,
          due_date:    form.due_date,
          priority:    form.priority,
          next_action: form.next_action,
          notes:       form.notes
        }
      };
      let new_task = new_task.clone();
      let refresh_tick =
        refresh_tick.clone();

      wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) =
          api::post_json::<serde_json::Value, _>("/api/tasks", &payload).await
        {
          // Not surfaced; the refetch shows what actually landed.
          tracing::error!(error = %err, "task create failed");
        }
        new_task.set((*new_task).cleared());
        refresh_tick.set(*refresh_tick + 1);
      });
    })
  };

  let on_save_edit = {
    let refresh_tick =
      refresh_tick.clone();

    Callback::from(
      move |(id, patch): (
        String,
        TaskPatch
      )| {
        let refresh_tick =
          refresh_tick.clone();

        wasm_bindgen_futures::spawn_local(async move {
          if let Err(err) = api::patch_json::<serde_json::Value, _>(
            &format!("/api/tasks/{id}"),
            &patch
          )
          .await
          {
            tracing::error!(error = %err, task_id = %id, "task update failed");
          }
          refresh_tick.set(*refresh_tick + 1);
        });
      }
    )
  };

  let on_open_draft = {
    let draft = draft.clone();
    Callback::from(
      move |(task, tab): (
        TaskDto,
        DraftTab
      )| {
        ui_debug(
          "draft.open",
          &task.id
        );
        draft.set(Some(
          DraftModalState::open_for(
            task, tab
          )
        ));
      }
    )
  };

  let on_close_draft = {
    let draft = draft.clone();
    Callback::from(move |_: ()| {
      draft.set(None);
    })
  };

  let on_preview = {
    let draft = draft.clone();
    Callback::from(move |_: ()| {
      let Some(current) =
        (*draft).clone()
      else {
        return;
      };

      let mut started = current.clone();
      started.busy = true;
      draft.set(Some(started));

      let draft = draft.clone();
      wasm_bindgen_futures::spawn_local(async move {
        let result = send_draft(&current, false, None).await;
        apply_draft_result(&draft, result);
      });
    })
  };

  let on_commit = {
    let draft = draft.clone();
    Callback::from(move |_: ()| {
      let Some(current) =
        (*draft).clone()
      else {
        return;
      };

      if !approval_ok(&current.approval)
      {
        ui_debug(
          "draft.commit.blocked",
          "approval gate not satisfied"
        );
        let mut blocked =
          current.clone();
        blocked.note = Some(
          "Type APPROVE (exactly) to \
           commit this draft."
            .to_string()
        );
        draft.set(Some(blocked));
        return;
      }

      let approve = current
        .approval
        .trim()
        .to_string();
      let mut started = current.clone();
      started.busy = true;
      draft.set(Some(started));

      let draft = draft.clone();
      wasm_bindgen_futures::spawn_local(async move {
        let result = send_draft(&current, true, Some(approve)).await;
        apply_draft_result(&draft, result);
      });
    })
  };

  let on_sync_excel = {
    let writeback_note =
      writeback_note.clone();

    Callback::from(move |_| {
      let Some(window) =
        web_sys::window()
      else {
        return;
      };
      let entered = window
        .prompt_with_message(
          "Type APPROVE to sync the \
           Excel workbook"
        )
        .ok()
        .flatten()
        .unwrap_or_default();
      if entered.trim().is_empty() {
        return;
      }

      let writeback_note =
        writeback_note.clone();
      wasm_bindgen_futures::spawn_local(async move {
        let args = WritebackArgs { approve: entered };
        match api::post_json::<WritebackResult, _>("/api/writeback", &args).await {
          Ok(result) => {
            let text = result
              .stdout
              .or(result.error)
              .unwrap_or_else(|| "writeback complete".to_string());
            writeback_note.set(text);
          }
          Err(err) => writeback_note.set(err),
        }
      });
    })
  };

  let counts = tally(&tasks);

  html! {
      <div class="page">
          <div class="hero">
              <h1>{ "All Tasks" }</h1>
              <div class="counts">
                  <span>{ "Total " }<b id="count-total">{ counts.total }</b></span>
                  <span>{ "Open " }<b id="count-open">{ counts.open }</b></span>
                  <span>{ "Done " }<b id="count-done">{ counts.done }</b></span>
              </div>
              <div class="card-actions">
                  <button id="sync-excel" class="btn" onclick={on_sync_excel}>
                      { "Sync to Excel" }
                  </button>
                  <Link<Route> classes="btn ghost" to={Route::Suite}>{ "Suite" }</Link<Route>>
              </div>
          </div>
          <div id="statusline" class="statusline">{ (*status_line).clone() }</div>
          {
              if writeback_note.is_empty() {
                  html! {}
              } else {
                  html! { <div class="statusline mono">{ (*writeback_note).clone() }</div> }
              }
          }
          <FiltersPanel
              query={filters.clone()}
              tag_options={(*tag_options).clone()}
              on_refresh={on_refresh}
              on_toggle_add={on_toggle_add}
          />
          <CreatePanel
              open={*add_open}
              form={new_task.clone()}
              on_save={on_save_new}
          />
          <div id="cards" class="cards">
              {
                  for tasks.iter().map(|task| html! {
                      <TaskCard
                          key={format!("{}:{}", task.id, *refresh_tick)}
                          task={task.clone()}
                          on_save={on_save_edit.clone()}
                          on_draft={on_open_draft.clone()}
                      />
                  })
              }
          </div>
          <DraftModal
              state={draft.clone()}
              on_preview={on_preview}
              on_commit={on_commit}
              on_close={on_close_draft}
          />
      </div>
  }
}

async fn send_draft(
  current: &DraftModalState,
  commit: bool,
  approve: Option<String>
) -> Result<serde_json::Value, String>
{
  match current.tab {
    | DraftTab::Email => {
      let mut args =
        current.email.clone();
      args.commit = commit;
      args.approve = approve;
      api::post_json(
        "/api/drafts/email",
        &args
      )
      .await
    }
    | DraftTab::Event => {
      let mut args =
        current.event.clone();
      args.commit = commit;
      args.approve = approve;
      api::post_json(
        "/api/drafts/event",
        &args
      )
      .await
    }
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}

/// Applies a draft response to the
/// modal if it is still open; a
/// close during flight drops the
/// result on the floor.
fn apply_draft_result(
  draft: &yew::UseStateHandle<
    Option<DraftModalState>
  >,
  result: Result<
    serde_json::Value,
    String
  >
) {
  let Some(mut latest) =
    (**draft).clone()
  else {
    return;
  };

  latest.busy = false;
  match result {
    | Ok(value) => {
      latest.response = Some(
        serde_json::to_string_pretty(
          &value
        )
        .unwrap_or_else(|_| {
          value.to_string()
        })
      );
      latest.note = None;
    }
    | Err(err) => {
      latest.note = Some(err);
    }
  }

  draft.set(Some(latest));
}
