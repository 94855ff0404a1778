//! Thin fetch layer over the backend
//! REST endpoints. Every helper
//! returns a displayable error
//! string; callers decide whether to
//! surface or just log it.

use gloo::net::http::{
  Request,
  Response
};
use serde::{
  Serialize,
  de::DeserializeOwned
};
use taskdeck_shared::query::TaskQuery;

/// Task list URL with the filter
/// query applied. Encoding goes
/// through the browser's own
/// `URLSearchParams`.
pub fn tasks_url(
  query: &TaskQuery
) -> String {
  let params =
    web_sys::UrlSearchParams::new()
      .expect("URLSearchParams");

  for (key, value) in query.pairs() {
    params.append(key, &value);
  }

  format!(
    "/api/tasks?{}",
    String::from(params.to_string())
  )
}

async fn decode<R>(
  response: Response
) -> Result<R, String>
where
  R: DeserializeOwned
{
  if response.ok() {
    return response
      .json::<R>()
      .await
      .map_err(|e| {
        format!("decode error: {e}")
      });
  }

  let status = response.status();
  let body = response
    .json::<serde_json::Value>()
    .await
    .unwrap_or_default();

  match body
    .get("error")
    .and_then(|v| v.as_str())
  {
    | Some(error) => {
      Err(error.to_string())
    }
    | None => Err(format!(
      "request failed with status \
       {status}"
    ))
  }
}

pub async fn get_json<R>(
  path: &str
) -> Result<R, String>
where
  R: DeserializeOwned
{
  let response = Request::get(path)
    .send()
    .await
    .map_err(|e| {
      format!("request error: {e}")
    })?;

  decode(response).await
}

pub async fn post_json<R, B>(
  path: &str,
  body: &B
) -> Result<R, String>
where
  R: DeserializeOwned,
  B: Serialize + ?Sized
{
  let response = Request::post(path)
    .json(body)
    .map_err(|e| {
      format!(
        "failed to encode body: {e}"
      )
    })?
    .send()
    .await
    .map_err(|e| {
      format!("request error: {e}")
    })?;

  decode(response).await
}

pub async fn patch_json<R, B>(
  path: &str,
  body: &B
) -> Result<R, String>
where
  R: DeserializeOwned,
  B: Serialize + ?Sized
{
  let response = Request::patch(path)
    .json(body)
    .map_err(|e| {
      format!(
        "failed to encode body: {e}"
      )
    })?
    .send()
    .await
    .map_err(|e| {
      format!("request error: {e}")
    })?;

  decode(response).await
}
