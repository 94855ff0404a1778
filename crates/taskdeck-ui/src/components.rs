mod app_card;
mod create_panel;
mod draft_modal;
mod filters_panel;
mod task_card;

pub use app_card::AppCard;
pub use create_panel::{
  CreatePanel,
  NewTaskForm
};
pub use draft_modal::{
  DraftModal,
  DraftModalState,
  DraftTab
};
pub use filters_panel::FiltersPanel;
pub use task_card::TaskCard;
