use yew::{
  Html,
  function_component,
  html
};
use yew_router::prelude::{
  BrowserRouter,
  Routable,
  Switch
};

use crate::dashboard::Dashboard;
use crate::suite::Suite;

#[derive(
  Clone, Routable, PartialEq,
)]
pub enum Route {
  #[at("/")]
  Dashboard,
  #[at("/suite")]
  Suite,
  #[not_found]
  #[at("/404")]
  NotFound
}

fn switch(route: Route) -> Html {
  match route {
    | Route::Dashboard
    | Route::NotFound => {
      html! { <Dashboard /> }
    }
    | Route::Suite => {
      html! { <Suite /> }
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  html! {
      <BrowserRouter>
          <Switch<Route> render={switch} />
      </BrowserRouter>
  }
}
