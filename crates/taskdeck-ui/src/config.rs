use serde::Deserialize;

const APP_CONFIG_TOML: &str =
  include_str!(
    "../assets/taskdeck.toml"
  );

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct AppConfig {
  pub api_base_url: String,
  pub user_id:      u64
}

impl AppConfig {
  fn is_valid(&self) -> bool {
    self.user_id != 0
      && !self
        .api_base_url
        .trim()
        .is_empty()
  }
}

pub fn load_app_config()
-> Option<AppConfig> {
  match toml::from_str::<AppConfig>(
    APP_CONFIG_TOML
  ) {
    | Ok(config)
      if config.is_valid() =>
    {
      Some(config)
    }
    | Ok(config) => {
      tracing::warn!(
        user_id = config.user_id,
        "rejected app config"
      );
      None
    }
    | Err(err) => {
      tracing::error!(
        error = %err,
        "failed to parse embedded \
         app config"
      );
      None
    }
  }
}
