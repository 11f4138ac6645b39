use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::route::{navigate, Route};
use crate::session::forget_redirect;
use crate::storage::SessionStorage;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub active: Route,
    /// `None` until the session check has finished.
    pub logged_in: Option<bool>,
}

struct NavLink {
    label: &'static str,
    route: Route,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let logging_out = use_state(|| false);

    let on_logout = {
        let logging_out = logging_out.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if *logging_out {
                return;
            }
            logging_out.set(true);
            spawn_local(async move {
                if let Err(e) = api::logout().await {
                    log::error!("error logging out: {:#}", e);
                }
                forget_redirect(&SessionStorage);
                navigate(&Route::Login.path());
            });
        })
    };

    let links = match props.logged_in {
        Some(true) => vec![
            NavLink { label: "Budgets", route: Route::Budgets },
            NavLink { label: "Create Budget", route: Route::CreateBudget },
        ],
        Some(false) => vec![
            NavLink { label: "Login", route: Route::Login },
            NavLink { label: "Register", route: Route::Register },
        ],
        None => vec![],
    };

    html! {
        <nav class="navbar navbar-expand bg-body-tertiary mb-4">
            <div class="container">
                <a class="navbar-brand" href="/budgets">{"Budget App"}</a>
                <ul class="navbar-nav me-auto">
                    { for links.iter().map(|link| {
                        let active = link.route == props.active;
                        html! {
                            <li class="nav-item">
                                <a
                                    class={classes!("nav-link", active.then_some("active"))}
                                    aria-current={active.then_some("page")}
                                    href={link.route.path()}
                                >
                                    { link.label }
                                </a>
                            </li>
                        }
                    }) }
                </ul>
                if props.logged_in == Some(true) {
                    <a class="nav-link" href="/login" onclick={on_logout}>
                        { if *logging_out { "Logging out..." } else { "Logout" } }
                    </a>
                }
            </div>
        </nav>
    }
}
