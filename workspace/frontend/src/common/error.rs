use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertKind {
    #[default]
    Error,
    Warning,
    Success,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Error => "alert-error",
            AlertKind::Warning => "alert-warning",
            AlertKind::Success => "alert-success",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            AlertKind::Error => "fas fa-exclamation-circle",
            AlertKind::Warning => "fas fa-exclamation-triangle",
            AlertKind::Success => "fas fa-check-circle",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct InlineAlertProps {
    pub message: String,
    #[prop_or_default]
    pub title: Option<String>,
    #[prop_or_default]
    pub kind: AlertKind,
}

/// Message shown next to the control that produced it.
#[function_component(InlineAlert)]
pub fn inline_alert(props: &InlineAlertProps) -> Html {
    if props.kind == AlertKind::Error {
        log::warn!("Displaying error to user: {}", props.message);
    }

    html! {
        <div role="alert" class={classes!("alert", props.kind.class())}>
            <i class={props.kind.icon()}></i>
            <div class="flex flex-col">
                {if let Some(title) = &props.title {
                    html! { <span class="font-semibold">{title}</span> }
                } else {
                    html! {}
                }}
                <span class="text-sm">{&props.message}</span>
            </div>
        </div>
    }
}
