use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::{bind_input, bind_select, report_error, ErrorAlert};
use crate::models::BudgetUpdate;
use crate::route::{navigate, Route};
use crate::validate;

struct BudgetFields {
    name: UseStateHandle<String>,
    gross_income: UseStateHandle<String>,
    month_duration: UseStateHandle<String>,
}

fn budget_fields(fields: &BudgetFields) -> Html {
    html! {
        <>
            <div class="mb-3">
                <label class="form-label" for="name">{"Name"}</label>
                <input id="name" class="form-control" type="text" value={(*fields.name).clone()} oninput={bind_input(&fields.name)} />
            </div>
            <div class="mb-3">
                <label class="form-label" for="gross_income">{"Gross income"}</label>
                <input id="gross_income" class="form-control" type="number" step="0.01" min="0" value={(*fields.gross_income).clone()} oninput={bind_input(&fields.gross_income)} />
            </div>
            <div class="mb-3">
                <label class="form-label" for="month_duration">{"Duration"}</label>
                <select id="month_duration" class="form-select" onchange={bind_select(&fields.month_duration)}>
                    <option value="1" selected={*fields.month_duration == "1"}>{"Monthly"}</option>
                    <option value="12" selected={*fields.month_duration == "12"}>{"Yearly"}</option>
                </select>
            </div>
        </>
    }
}

#[function_component(CreateBudgetPage)]
pub fn create_budget_page() -> Html {
    let fields = BudgetFields {
        name: use_state(String::new),
        gross_income: use_state(String::new),
        month_duration: use_state(|| "1".to_string()),
    };
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let on_submit = {
        let name = fields.name.clone();
        let gross_income = fields.gross_income.clone();
        let month_duration = fields.month_duration.clone();
        let error = error.clone();
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }
            let payload = match validate::new_budget(&name, &gross_income, &month_duration) {
                Ok(payload) => payload,
                Err(msg) => {
                    error.set(Some(msg));
                    return;
                }
            };

            error.set(None);
            saving.set(true);

            let error = error.clone();
            let saving = saving.clone();
            spawn_local(async move {
                match api::create_budget(&payload).await {
                    Ok(budget) => navigate(&Route::Budget(budget.id).path()),
                    Err(e) => {
                        report_error(&e, &error);
                        saving.set(false);
                    }
                }
            });
        })
    };

    html! {
        <section class="col-lg-6">
            <h1 class="h3 mb-3">{"Create Budget"}</h1>
            <ErrorAlert message={(*error).clone()} />
            <form onsubmit={on_submit}>
                { budget_fields(&fields) }
                <button type="submit" class="btn btn-primary" disabled={*saving} aria-busy={(*saving).then_some("true")}>
                    { if *saving { "Creating..." } else { "Create Budget" } }
                </button>
            </form>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct EditBudgetPageProps {
    pub budget_id: i64,
}

#[function_component(EditBudgetPage)]
pub fn edit_budget_page(props: &EditBudgetPageProps) -> Html {
    let budget_id = props.budget_id;
    let fields = BudgetFields {
        name: use_state(String::new),
        gross_income: use_state(String::new),
        month_duration: use_state(|| "1".to_string()),
    };
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    {
        let name = fields.name.clone();
        let gross_income = fields.gross_income.clone();
        let month_duration = fields.month_duration.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |budget_id| {
                let budget_id = *budget_id;
                spawn_local(async move {
                    match api::fetch_budget(budget_id).await {
                        Ok(budget) => {
                            name.set(budget.name);
                            gross_income.set(budget.gross_income.to_string());
                            month_duration.set(budget.month_duration.to_string());
                        }
                        Err(e) => report_error(&e, &error),
                    }
                    loading.set(false);
                });
                || ()
            },
            budget_id,
        );
    }

    let on_submit = {
        let name = fields.name.clone();
        let gross_income = fields.gross_income.clone();
        let month_duration = fields.month_duration.clone();
        let error = error.clone();
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }
            let checked = match validate::new_budget(&name, &gross_income, &month_duration) {
                Ok(checked) => checked,
                Err(msg) => {
                    error.set(Some(msg));
                    return;
                }
            };
            let update = BudgetUpdate {
                budget_id,
                name: Some(checked.name),
                gross_income: Some(checked.gross_income),
                month_duration: Some(checked.month_duration),
            };

            error.set(None);
            saving.set(true);

            let error = error.clone();
            let saving = saving.clone();
            spawn_local(async move {
                match api::edit_budget(&update).await {
                    Ok(_) => {
                        log::info!("updated budget {}", budget_id);
                        navigate(&Route::Budget(budget_id).path());
                    }
                    Err(e) => {
                        report_error(&e, &error);
                        saving.set(false);
                    }
                }
            });
        })
    };

    html! {
        <section class="col-lg-6">
            <h1 class="h3 mb-3">{"Edit Budget"}</h1>
            <ErrorAlert message={(*error).clone()} />
            { if *loading {
                html! { <p class="text-muted">{"Loading..."}</p> }
            } else {
                html! {
                    <form onsubmit={on_submit}>
                        { budget_fields(&fields) }
                        <div class="d-flex gap-2">
                            <button type="submit" class="btn btn-primary" disabled={*saving}>
                                { if *saving { "Saving..." } else { "Save Changes" } }
                            </button>
                            <a class="btn btn-outline-secondary" href={Route::Budget(budget_id).path()}>{"Cancel"}</a>
                        </div>
                    </form>
                }
            }}
        </section>
    }
}
