use gloo::net::http::{
  Request,
  Response
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use taskdeck_shared::{
  CompletedPatch,
  TitlePatch,
  TodoCreate,
  TodoDto
};

use crate::config::AppConfig;

// Every failure collapses into one
// generic signal; callers map it to a
// banner message.

fn endpoint(
  config: &AppConfig,
  path: &str
) -> String {
  format!(
    "{}{}",
    config
      .api_base_url
      .trim_end_matches('/'),
    path
  )
}

async fn read_json<R>(
  response: Response
) -> Result<R, String>
where
  R: DeserializeOwned,
{
  if !response.ok() {
    return Err(format!(
      "unexpected status {}",
      response.status()
    ));
  }

  response
    .json::<R>()
    .await
    .map_err(|e| {
      format!("decode error: {e}")
    })
}

async fn patch_todo<B>(
  config: &AppConfig,
  id: u64,
  body: &B
) -> Result<TodoDto, String>
where
  B: Serialize + ?Sized,
{
  let url = endpoint(
    config,
    &format!("/todos/{id}")
  );
  let request = Request::patch(&url)
    .json(body)
    .map_err(|e| {
      format!(
        "failed to encode body: {e}"
      )
    })?;
  let response = request
    .send()
    .await
    .map_err(|e| {
      format!("request error: {e}")
    })?;

  read_json(response).await
}

pub async fn list_todos(
  config: &AppConfig
) -> Result<Vec<TodoDto>, String> {
  let url = endpoint(
    config,
    &format!(
      "/todos?userId={}",
      config.user_id
    )
  );
  let response = Request::get(&url)
    .send()
    .await
    .map_err(|e| {
      format!("request error: {e}")
    })?;

  read_json(response).await
}

pub async fn create_todo(
  config: &AppConfig,
  title: &str,
  completed: bool
) -> Result<TodoDto, String> {
  let body = TodoCreate {
    user_id: config.user_id,
    title: title.to_string(),
    completed
  };
  let request = Request::post(
    &endpoint(config, "/todos")
  )
  .json(&body)
  .map_err(|e| {
    format!(
      "failed to encode body: {e}"
    )
  })?;
  let response = request
    .send()
    .await
    .map_err(|e| {
      format!("request error: {e}")
    })?;

  read_json(response).await
}

pub async fn set_completed(
  config: &AppConfig,
  id: u64,
  completed: bool
) -> Result<TodoDto, String> {
  patch_todo(
    config,
    id,
    &CompletedPatch {
      completed
    }
  )
  .await
}

pub async fn set_title(
  config: &AppConfig,
  id: u64,
  title: &str
) -> Result<TodoDto, String> {
  patch_todo(
    config,
    id,
    &TitlePatch {
      title: title.to_string()
    }
  )
  .await
}

pub async fn delete_todo(
  config: &AppConfig,
  id: u64
) -> Result<(), String> {
  let url = endpoint(
    config,
    &format!("/todos/{id}")
  );
  let response = Request::delete(&url)
    .send()
    .await
    .map_err(|e| {
      format!("request error: {e}")
    })?;

  if !response.ok() {
    return Err(format!(
      "unexpected status {}",
      response.status()
    ));
  }

  Ok(())
}
