use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::{report_error, ErrorAlert};
use crate::format::{duration_label, format_currency};
use crate::models::Budget;
use crate::route::Route;

#[function_component(BudgetsPage)]
pub fn budgets_page() -> Html {
    let budgets = use_state(Vec::<Budget>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let budgets = budgets.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::fetch_budgets().await {
                        Ok(list) => {
                            log::debug!("loaded {} budgets", list.len());
                            budgets.set(list);
                        }
                        Err(e) => report_error(&e, &error),
                    }
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    html! {
        <section>
            <div class="d-flex justify-content-between align-items-center mb-3">
                <h1 class="h3">{"Your Budgets"}</h1>
                <a class="btn btn-primary" href={Route::CreateBudget.path()}>{"Create Budget"}</a>
            </div>
            <ErrorAlert message={(*error).clone()} />
            { if *loading {
                html! { <p class="text-muted">{"Loading..."}</p> }
            } else if budgets.is_empty() && error.is_none() {
                html! { <p class="text-muted">{"No budgets yet. Create one to get started."}</p> }
            } else {
                html! {
                    <ul class="list-group">
                        { for budgets.iter().map(|budget| html! {
                            <li key={budget.id} class="list-group-item d-flex justify-content-between align-items-center">
                                <a href={Route::Budget(budget.id).path()}>{ budget.name.clone() }</a>
                                <span class="text-muted">
                                    { format!("{} · {}", format_currency(budget.gross_income), duration_label(budget.month_duration)) }
                                </span>
                            </li>
                        }) }
                    </ul>
                }
            }}
        </section>
    }
}
