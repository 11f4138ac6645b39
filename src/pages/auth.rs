use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::{bind_input, ErrorAlert};
use crate::route::{navigate, Route};
use crate::session::take_redirect;
use crate::storage::SessionStorage;
use crate::validate;

#[derive(Clone, Copy, PartialEq)]
enum AuthMode {
    Login,
    Register,
}

#[derive(Properties, PartialEq)]
struct AuthFormProps {
    mode: AuthMode,
}

#[function_component(AuthForm)]
fn auth_form(props: &AuthFormProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let is_login = props.mode == AuthMode::Login;

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }
            let credentials = match validate::credentials(&username, &password) {
                Ok(credentials) => credentials,
                Err(msg) => {
                    error.set(Some(msg));
                    return;
                }
            };

            loading.set(true);
            error.set(None);

            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                let result = if is_login {
                    api::login(&credentials).await
                } else {
                    api::register(&credentials).await
                };

                match result {
                    Ok(()) if is_login => navigate(&take_redirect(&SessionStorage)),
                    Ok(()) => navigate(&Route::Login.path()),
                    Err(e) => {
                        log::warn!("authentication failed: {:#}", e);
                        error.set(Some(e.to_string()));
                        loading.set(false);
                    }
                }
            });
        })
    };

    html! {
        <section class="col-md-6 col-lg-4 mx-auto">
            <h1 class="h3 mb-3">{ if is_login { "Login" } else { "Register" } }</h1>
            <ErrorAlert message={(*error).clone()} />
            <form onsubmit={on_submit}>
                <div class="mb-3">
                    <label class="form-label" for="username">{"Username"}</label>
                    <input id="username" class="form-control" type="text" autocomplete="username" value={(*username).clone()} oninput={bind_input(&username)} />
                </div>
                <div class="mb-3">
                    <label class="form-label" for="password">{"Password"}</label>
                    <input
                        id="password"
                        class="form-control"
                        type="password"
                        autocomplete={if is_login { "current-password" } else { "new-password" }}
                        value={(*password).clone()}
                        oninput={bind_input(&password)}
                    />
                </div>
                <button type="submit" class="btn btn-primary w-100" disabled={*loading}>
                    { if *loading { "Please wait..." } else if is_login { "Login" } else { "Register" } }
                </button>
            </form>
            <p class="mt-3 text-center text-muted">
                { if is_login { "No account? " } else { "Already have an account? " } }
                <a href={if is_login { Route::Register.path() } else { Route::Login.path() }}>
                    { if is_login { "Register" } else { "Login" } }
                </a>
            </p>
        </section>
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    html! { <AuthForm mode={AuthMode::Login} /> }
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    html! { <AuthForm mode={AuthMode::Register} /> }
}
