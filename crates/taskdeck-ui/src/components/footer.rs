use taskdeck_shared::FilterKind;
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
pub struct FooterProps {
  pub filter:             FilterKind,
  pub items_left:         usize,
  pub clear_disabled:     bool,
  pub on_filter:
    Callback<FilterKind>,
  pub on_clear_completed: Callback<()>
}

#[function_component(Footer)]
pub fn footer(
  props: &FooterProps
) -> Html {
  let on_clear = {
    let on_clear_completed =
      props.on_clear_completed.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_clear_completed.emit(());
      }
    )
  };

  html! {
      <footer class="todoapp__footer">
          <span class="todo-count">
              { format!("{} items left", props.items_left) }
          </span>

          <nav class="filter">
              {
                  for FilterKind::all().into_iter().map(|kind| {
                      let on_filter = props.on_filter.clone();
                      let selected = kind == props.filter;
                      let href = match kind {
                          | FilterKind::All => "#/".to_string(),
                          | _ => format!("#/{}", kind.as_key())
                      };
                      html! {
                          <a
                              class={classes!("filter__link", selected.then_some("selected"))}
                              href={href}
                              onclick={move |e: MouseEvent| {
                                  e.prevent_default();
                                  on_filter.emit(kind);
                              }}
                          >
                              { kind.label() }
                          </a>
                      }
                  })
              }
          </nav>

          <button
              type="button"
              class="todoapp__clear-completed"
              disabled={props.clear_disabled}
              onclick={on_clear}
          >
              { "Clear completed" }
          </button>
      </footer>
  }
}
