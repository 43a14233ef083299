/// Main page: URL input, scrape and download buttons, status panel

use std::cell::RefCell;
use std::rc::Rc;

use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::AppConfig;
use crate::controller::{Controller, Effect, Msg};
use crate::csv_export::trigger_download;
use crate::scrape::{FetchTransport, scrape_comments};
use crate::ui::components::StatusPanel;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    #[prop_or_default]
    pub config: AppConfig,
}

/// Handles shared by every event callback
#[derive(Clone)]
struct Dispatcher {
    controller: Rc<RefCell<Controller>>,
    redraw: UseForceUpdateHandle,
    config: AppConfig,
}

impl Dispatcher {
    fn send(&self, msg: Msg) {
        let effects = self.controller.borrow_mut().update(msg);
        self.redraw.force_update();

        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect) {
        match effect {
            Effect::Scrape { shortcode } => {
                let dispatcher = self.clone();
                spawn_local(async move {
                    let outcome = scrape_comments(&FetchTransport, &dispatcher.config, &shortcode).await;
                    dispatcher.send(Msg::ScrapeFinished(outcome));
                });
            }
            Effect::Download(export) => {
                let result = trigger_download(&export);
                self.send(Msg::DownloadFinished(result));
            }
        }
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let controller = use_mut_ref(Controller::new);
    let redraw = use_force_update();

    let dispatcher = Dispatcher {
        controller: controller.clone(),
        redraw,
        config: props.config.clone(),
    };

    let on_input = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                dispatcher.send(Msg::InputChanged(input.value()));
            }
        })
    };

    let on_scrape = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_| dispatcher.send(Msg::ScrapeClicked))
    };

    let on_download = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_| dispatcher.send(Msg::DownloadClicked))
    };

    let (input, view) = {
        let controller = controller.borrow();
        (controller.input().to_string(), controller.view())
    };

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Instagram Comment Scraper"}</h1>

            <div class="flex-column-gap">
                <input
                    type="text"
                    placeholder="https://www.instagram.com/p/SHORTCODE/"
                    value={input}
                    oninput={on_input}
                    class="search-input"
                />
                <Button onclick={on_scrape} disabled={!view.scrape_enabled} variant={ButtonVariant::Primary} block={true}>
                    {"Scrape Comments"}
                </Button>
            </div>

            <StatusPanel view={view.clone()} />

            if view.download_visible {
                <Button onclick={on_download} disabled={!view.download_enabled} variant={ButtonVariant::Secondary} block={true}>
                    {format!("📥 {}", view.download_label)}
                </Button>
            }
        </div>
    }
}
