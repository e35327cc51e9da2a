use gloo::console::{debug, log, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::counter::{button_text, Counter, CounterAction};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: SiteConfig,
}

/// Logos, heading, the counter button and the footer.
#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let cfg = &props.config;
    let counter = use_reducer(Counter::default);

    let on_click = {
        let counter = counter.clone();
        Callback::from(move |_: MouseEvent| {
            // dispatch doesn't update this handle until the next render
            let next = counter.value.saturating_add(1);
            counter.dispatch(CounterAction::Increment);
            debug!(format!("counter -> {next}"));
        })
    };

    html! {
        <>
          <div>
            { for cfg.logos.iter().map(|logo| html! {
                <a href={logo.href.clone()} target="_blank" rel="noopener noreferrer">
                  <img src={logo.src.clone()} class={classes!("logo", logo.class.clone())} alt={logo.alt.clone()} />
                </a>
            })}
          </div>
          <h1>{ cfg.heading.clone() }</h1>
          <div class="card">
            <button onclick={on_click}>{ button_text(&cfg.button_label, counter.value) }</button>
          </div>
          <p class="read-the-docs">{ cfg.tagline.clone() }</p>
          <p class="read-the-docs">
            { "made with ❤ " }
            <a target="_blank" rel="noopener noreferrer" href={cfg.profile_url.clone()}>{ cfg.profile_handle.clone() }</a>
          </p>
        </>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(SiteConfig::default);

    // Load site.json once; keep the built-in page if it's missing or broken.
    {
        let config = config.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match SiteConfig::load().await {
                    Ok(c) => {
                        log!("site.json applied");
                        config.set(c);
                    }
                    Err(e) => warn!(format!("using built-in page: {e}")),
                }
            });
            || ()
        });
    }

    html! { <Landing config={(*config).clone()} /> }
}
