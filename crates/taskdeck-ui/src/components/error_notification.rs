use taskdeck_shared::UiError;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ErrorNotificationProps {
  pub error:      Option<UiError>,
  pub on_dismiss: Callback<()>
}

#[function_component(ErrorNotification)]
pub fn error_notification(
  props: &ErrorNotificationProps
) -> Html {
  let hidden = props.error.is_none();
  let message = props
    .error
    .map(|error| error.to_string())
    .unwrap_or_default();

  let onclick = {
    let on_dismiss =
      props.on_dismiss.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_dismiss.emit(());
      }
    )
  };

  html! {
      <div
          class={classes!(
              "notification",
              "is-danger",
              "is-light",
              "has-text-weight-normal",
              hidden.then_some("hidden")
          )}
      >
          <button type="button" class="delete" onclick={onclick} />
          { message }
      </div>
  }
}
