use yew::{
  Html,
  function_component,
  html
};

#[function_component(ConfigWarning)]
pub fn config_warning() -> Html {
  html! {
      <section class="config-warning">
          <h1>{ "taskdeck is not configured" }</h1>
          <p>
              { "Set a non-zero user_id and an api_base_url in assets/taskdeck.toml, then rebuild the frontend." }
          </p>
      </section>
  }
}
