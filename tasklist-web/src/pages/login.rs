use crate::api::TodoClient;
use crate::config::FrontendConfig;
use crate::models::app_state::AppState;
use crate::notify;
use crate::routes::MainRoute;
use crate::session::BrowserSession;
use i18nrs::yew::use_translation;
use shared::controllers::{AuthFlow, AuthOutcome, LOGIN_REQUIRED_MESSAGE, auth_event};
use shared::errors::ClientResult;
use shared::session::SessionStore;
use shared::state::{AuthEvent, AuthMode, AuthPhase};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_dispatch;

/// Login page state driven through `use_reducer`.
#[derive(Default, PartialEq)]
struct LoginPhase(AuthPhase);

impl Reducible for LoginPhase {
    type Action = AuthEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0.on(action)))
    }
}

fn bind(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            handle.set(input.value());
        }
    })
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (i18n, ..) = use_translation();
    let phase = use_reducer(LoginPhase::default);
    let username = use_state(String::new);
    let password = use_state(String::new);
    let reg_username = use_state(String::new);
    let reg_email = use_state(String::new);
    let reg_password = use_state(String::new);
    let navigator = use_navigator();
    let app_dispatch = use_dispatch::<AppState>();

    // Applies the result of an attempt to the page and the app state.
    let finish = {
        let phase = phase.dispatcher();
        Callback::from(move |result: ClientResult<AuthOutcome>| {
            phase.dispatch(auth_event(&result));
            match result {
                Ok(AuthOutcome::Authenticated) => {
                    app_dispatch.set(AppState {
                        token: BrowserSession.get(),
                    });
                    if let Some(ref nav) = navigator {
                        nav.push(&MainRoute::Dashboard);
                    }
                }
                Ok(AuthOutcome::LoginRequired) => notify::alert(LOGIN_REQUIRED_MESSAGE),
                Err(ref error) => notify::report(error),
            }
        })
    };

    let on_login = {
        let phase = phase.clone();
        let username = username.clone();
        let password = password.clone();
        let finish = finish.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if phase.0.is_busy() {
                return;
            }
            phase.dispatch(AuthEvent::Submit);
            let username = (*username).clone();
            let password = (*password).clone();
            let finish = finish.clone();
            spawn_local(async move {
                let flow = AuthFlow::new(
                    TodoClient::shared(),
                    BrowserSession,
                    FrontendConfig::new().features(),
                );
                finish.emit(flow.login(&username, &password).await);
            });
        })
    };

    let on_register = {
        let phase = phase.clone();
        let username = reg_username.clone();
        let email = reg_email.clone();
        let password = reg_password.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if phase.0.is_busy() {
                return;
            }
            phase.dispatch(AuthEvent::Submit);
            let username = (*username).clone();
            let email = (*email).clone();
            let password = (*password).clone();
            let finish = finish.clone();
            spawn_local(async move {
                let flow = AuthFlow::new(
                    TodoClient::shared(),
                    BrowserSession,
                    FrontendConfig::new().features(),
                );
                finish.emit(flow.register(&username, &email, &password).await);
            });
        })
    };

    let toggle = |event: AuthEvent| {
        let phase = phase.clone();
        Callback::from(move |click: MouseEvent| {
            click.prevent_default();
            phase.dispatch(event.clone());
        })
    };
    let show_register = toggle(AuthEvent::ShowRegister);
    let show_login = toggle(AuthEvent::ShowLogin);

    let is_busy = phase.0.is_busy();
    let error = phase.0.error().map(|message| {
        html! {
            <div class="alert alert-error">
                <span>{ message.to_string() }</span>
            </div>
        }
    });

    let form = match phase.0.form() {
        Some(AuthMode::Register) => html! {
            <form id="registerForm" class="card-body" onsubmit={on_register}>
                <h2 class="card-title text-2xl">{ i18n.t("register.title") }</h2>
                { for error }
                <div class="form-control">
                    <label class="label" for="registerUsername">
                        <span class="label-text">{ i18n.t("register.username") }</span>
                    </label>
                    <input
                        id="registerUsername"
                        class="input input-bordered"
                        type="text"
                        required=true
                        value={(*reg_username).clone()}
                        oninput={bind(&reg_username)}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="registerEmail">
                        <span class="label-text">{ i18n.t("register.email") }</span>
                    </label>
                    <input
                        id="registerEmail"
                        class="input input-bordered"
                        type="email"
                        required=true
                        value={(*reg_email).clone()}
                        oninput={bind(&reg_email)}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="registerPassword">
                        <span class="label-text">{ i18n.t("register.password") }</span>
                    </label>
                    <input
                        id="registerPassword"
                        class="input input-bordered"
                        type="password"
                        required=true
                        value={(*reg_password).clone()}
                        oninput={bind(&reg_password)}
                    />
                </div>
                <div class="form-control mt-6">
                    <button class="btn btn-primary" type="submit" disabled={is_busy}>
                        { if is_busy { i18n.t("register.busy") } else { i18n.t("register.submit") } }
                    </button>
                </div>
                <a id="showLogin" class="link link-primary" href="#" onclick={show_login}>
                    { i18n.t("register.switch") }
                </a>
            </form>
        },
        _ => html! {
            <form id="loginForm" class="card-body" onsubmit={on_login}>
                <h2 class="card-title text-2xl">{ i18n.t("login.title") }</h2>
                { for error }
                <div class="form-control">
                    <label class="label" for="loginUsername">
                        <span class="label-text">{ i18n.t("login.username") }</span>
                    </label>
                    <input
                        id="loginUsername"
                        class="input input-bordered"
                        type="text"
                        required=true
                        value={(*username).clone()}
                        oninput={bind(&username)}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="loginPassword">
                        <span class="label-text">{ i18n.t("login.password") }</span>
                    </label>
                    <input
                        id="loginPassword"
                        class="input input-bordered"
                        type="password"
                        required=true
                        value={(*password).clone()}
                        oninput={bind(&password)}
                    />
                </div>
                <div class="form-control mt-6">
                    <button class="btn btn-primary" type="submit" disabled={is_busy}>
                        { if is_busy { i18n.t("login.busy") } else { i18n.t("login.submit") } }
                    </button>
                </div>
                <a id="showRegister" class="link link-primary" href="#" onclick={show_register}>
                    { i18n.t("login.switch") }
                </a>
            </form>
        },
    };

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                { form }
            </div>
        </div>
    }
}
