mod accordion;
mod aggregate;
mod api;
mod components;
mod config;
mod format;
mod models;
mod pages;
mod route;
mod session;
mod storage;
mod validate;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use components::NavBar;
use pages::{BudgetPage, BudgetsPage, CreateBudgetPage, EditBudgetPage, LoginPage, RegisterPage};
use route::{current_route, Route};
use session::redirect_to_login;

#[derive(Clone, Copy, PartialEq)]
enum AuthStatus {
    Checking,
    Authenticated,
    Unauthenticated,
}

#[function_component(App)]
fn app() -> Html {
    let route = use_state(current_route);
    let auth_status = use_state(|| AuthStatus::Checking);

    {
        let auth_status = auth_status.clone();
        let route = *route;
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    if api::check_authenticated().await {
                        auth_status.set(AuthStatus::Authenticated);
                    } else if route.is_protected() {
                        redirect_to_login();
                    } else {
                        auth_status.set(AuthStatus::Unauthenticated);
                    }
                });
                || ()
            },
            (),
        );
    }

    let logged_in = match *auth_status {
        AuthStatus::Checking => None,
        AuthStatus::Authenticated => Some(true),
        AuthStatus::Unauthenticated => Some(false),
    };

    if route.is_protected() && *auth_status != AuthStatus::Authenticated {
        return html! {
            <div class="min-vh-100 d-flex align-items-center justify-content-center text-muted">
                {"Checking session..."}
            </div>
        };
    }

    let content = match *route {
        Route::Budgets => html! { <BudgetsPage /> },
        Route::Budget(id) => html! { <BudgetPage budget_id={id} /> },
        Route::EditBudget(id) => html! { <EditBudgetPage budget_id={id} /> },
        Route::CreateBudget => html! { <CreateBudgetPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::NotFound => html! {
            <section class="text-center py-5">
                <h1 class="h3">{"Page not found"}</h1>
                <a href={Route::Budgets.path()}>{"Back to your budgets"}</a>
            </section>
        },
    };

    html! {
        <>
            <NavBar active={*route} logged_in={logged_in} />
            <main class="container pb-5">
                { content }
            </main>
        </>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("budget frontend starting, api base {:?}", config::api_base_url());
    yew::Renderer::<App>::new().render();
}
