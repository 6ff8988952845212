use yew::prelude::*;

use crate::hooks::use_services;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastType {
    Success,
    Error,
}

impl ToastType {
    fn alert_class(self) -> &'static str {
        match self {
            ToastType::Success => "alert-success",
            ToastType::Error => "alert-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub toast_type: ToastType,
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub add_toast: Callback<(String, ToastType)>,
}

impl ToastContext {
    pub fn show_success(&self, message: impl Into<String>) {
        self.add_toast.emit((message.into(), ToastType::Success));
    }

    pub fn show_error(&self, message: impl Into<String>) {
        self.add_toast.emit((message.into(), ToastType::Error));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

enum ToastAction {
    Add(Toast),
    Remove(usize),
}

#[derive(Default, PartialEq)]
struct ToastList {
    toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: std::rc::Rc<Self>, action: Self::Action) -> std::rc::Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Add(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        std::rc::Rc::new(Self { toasts })
    }
}

/// Corner notifications that dismiss themselves after the configured delay.
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let services = use_services();
    let list = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0usize);
    let duration_ms = services.settings.toast_duration_ms;

    let add_toast = {
        let list = list.clone();

        Callback::from(move |(message, toast_type): (String, ToastType)| {
            let id = {
                let mut next_id = next_id.borrow_mut();
                *next_id += 1;
                *next_id
            };
            list.dispatch(ToastAction::Add(Toast { id, message, toast_type }));

            let dispatcher = list.dispatcher();
            gloo_timers::callback::Timeout::new(duration_ms, move || {
                dispatcher.dispatch(ToastAction::Remove(id));
            })
            .forget();
        })
    };

    let context = ToastContext { add_toast };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for list.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let dispatcher = list.dispatcher();
                        Callback::from(move |_| dispatcher.dispatch(ToastAction::Remove(id)))
                    };

                    html! {
                        <div key={id} class={classes!("alert", toast.toast_type.alert_class(), "shadow-lg")}>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[hook]
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext is provided by ToastProvider")
}
