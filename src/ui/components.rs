/// Status panel: the loading, success and error regions

use crate::status::StatusView;
use patternfly_yew::prelude::*;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusPanelProps {
    pub view: StatusView,
}

#[function_component(StatusPanel)]
pub fn status_panel(props: &StatusPanelProps) -> Html {
    let view = &props.view;

    html! {
        <div class="message-top-margin">
            if let Some(msg) = &view.loading {
                <div class="loading-text-center">
                    <Spinner />
                    <p class="loading-text">{msg}</p>
                </div>
            }
            if let Some(msg) = &view.success {
                <Alert r#type={AlertType::Success} title={"Done"} inline={true}>
                    {msg.clone()}
                    if let Some(sentiment) = &view.sentiment {
                        <p class="sentiment-summary">{sentiment}</p>
                    }
                </Alert>
            }
            if let Some(msg) = &view.error {
                <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                    {msg.clone()}
                </Alert>
            }
        </div>
    }
}
