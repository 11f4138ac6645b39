use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::aggregate::{group_items_by_category, net_income, total_expenses};
use crate::api;
use crate::components::{report_error, AddItemForm, CategoryAccordion, EditItemForm, ErrorAlert};
use crate::format::{duration_label, format_currency};
use crate::models::{Budget, BudgetItem};
use crate::route::{confirm, navigate, Route};

#[derive(Properties, PartialEq)]
pub struct BudgetPageProps {
    pub budget_id: i64,
}

#[function_component(BudgetPage)]
pub fn budget_page(props: &BudgetPageProps) -> Html {
    let budget_id = props.budget_id;
    let budget = use_state(|| None::<Budget>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let action_error = use_state(|| None::<String>);
    let categories = use_state(Vec::<String>::new);
    let editing = use_state(|| None::<BudgetItem>);
    let deleting = use_state(|| false);
    let deleting_item = use_state(|| None::<i64>);

    {
        let budget = budget.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |budget_id| {
                let budget_id = *budget_id;
                spawn_local(async move {
                    match api::fetch_budget(budget_id).await {
                        Ok(loaded) => {
                            log::debug!(
                                "budget {} has {} items totalling {}",
                                loaded.id,
                                loaded.items.len(),
                                total_expenses(&loaded.items)
                            );
                            error.set(None);
                            budget.set(Some(loaded));
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

    {
        let categories = categories.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::fetch_categories().await {
                        Ok(list) => categories.set(list),
                        Err(e) => log::warn!("item categories unavailable: {:#}", e),
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_saved = {
        let budget = budget.clone();
        let editing = editing.clone();
        Callback::from(move |updated: Budget| {
            editing.set(None);
            budget.set(Some(updated));
        })
    };

    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |item: BudgetItem| editing.set(Some(item)))
    };

    let on_cancel_edit = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(None))
    };

    let on_delete_item = {
        let budget = budget.clone();
        let editing = editing.clone();
        let deleting_item = deleting_item.clone();
        let action_error = action_error.clone();
        Callback::from(move |item: BudgetItem| {
            if (*deleting_item).is_some() {
                return;
            }
            if !confirm("Delete this item?\n\nThis cannot be undone.") {
                return;
            }
            if (*editing).as_ref().map(|e| e.id) == Some(item.id) {
                editing.set(None);
            }
            deleting_item.set(Some(item.id));
            let budget = budget.clone();
            let deleting_item = deleting_item.clone();
            let action_error = action_error.clone();
            spawn_local(async move {
                let reloaded = match api::delete_item(budget_id, item.id).await {
                    Ok(()) => {
                        log::info!("deleted item {} from budget {}", item.id, budget_id);
                        api::fetch_budget(budget_id).await
                    }
                    Err(e) => Err(e),
                };
                match reloaded {
                    Ok(updated) => {
                        action_error.set(None);
                        budget.set(Some(updated));
                    }
                    Err(e) => report_error(&e, &action_error),
                }
                deleting_item.set(None);
            });
        })
    };

    let on_delete_budget = {
        let deleting = deleting.clone();
        let action_error = action_error.clone();
        Callback::from(move |_| {
            if *deleting {
                return;
            }
            if !confirm("Are you sure you want to delete this budget?\n\nThis action cannot be undone.") {
                return;
            }
            deleting.set(true);
            let deleting = deleting.clone();
            let action_error = action_error.clone();
            spawn_local(async move {
                match api::delete_budget(budget_id).await {
                    Ok(()) => navigate(&Route::Budgets.path()),
                    Err(e) => {
                        report_error(&e, &action_error);
                        deleting.set(false);
                    }
                }
            });
        })
    };

    let body = match (&*budget, *loading) {
        (_, true) => html! { <p class="text-muted">{"Loading..."}</p> },
        (None, false) => html! {},
        (Some(budget), false) => {
            let groups = group_items_by_category(&budget.items);
            let expenses = groups.grand_total();
            let net = net_income(budget.gross_income, expenses);

            html! {
                <>
                    <div class="d-flex justify-content-between align-items-start mb-3">
                        <h1 class="h3">{ format!("Budget: \"{}\"", budget.name) }</h1>
                        <div class="d-flex gap-2">
                            <a class="btn btn-outline-secondary" href={Route::EditBudget(budget.id).path()}>{"Edit Budget"}</a>
                            <button class="btn btn-outline-danger" type="button" onclick={on_delete_budget} disabled={*deleting}>
                                { if *deleting { "Deleting..." } else { "Delete Budget" } }
                            </button>
                        </div>
                    </div>
                    <dl class="row mb-4">
                        <dt class="col-sm-3">{"Gross income"}</dt>
                        <dd class="col-sm-9">{ format_currency(budget.gross_income) }</dd>
                        <dt class="col-sm-3">{"Duration"}</dt>
                        <dd class="col-sm-9">{ duration_label(budget.month_duration) }</dd>
                        <dt class="col-sm-3">{"Total expenses"}</dt>
                        <dd class="col-sm-9">{ format_currency(expenses) }</dd>
                        <dt class="col-sm-3">{"Net income"}</dt>
                        <dd class={classes!("col-sm-9", net.is_negative.then_some("text-danger"))}>
                            { format_currency(net.net_income) }
                        </dd>
                    </dl>
                    <ErrorAlert message={(*action_error).clone()} />
                    if let Some(item) = &*editing {
                        <EditItemForm
                            key={item.id}
                            budget_id={budget.id}
                            item={item.clone()}
                            categories={(*categories).clone()}
                            on_saved={on_saved.clone()}
                            on_cancel={on_cancel_edit}
                        />
                    }
                    <AddItemForm budget_id={budget.id} categories={(*categories).clone()} on_saved={on_saved} />
                    { if groups.is_empty() {
                        html! { <p class="text-muted">{"This budget has no items yet."}</p> }
                    } else {
                        html! {
                            <>
                                <h2 class="h5">{ format!("Categories ({})", groups.len()) }</h2>
                                <div class="accordion" id="budget-categories">
                                    { for groups.iter().enumerate().map(|(position, (category, bucket))| html! {
                                        <CategoryAccordion
                                            key={category.to_string()}
                                            position={position}
                                            budget_id={budget.id}
                                            category={category.to_string()}
                                            bucket={bucket.clone()}
                                            deleting={*deleting_item}
                                            on_edit={on_edit.clone()}
                                            on_delete={on_delete_item.clone()}
                                        />
                                    }) }
                                </div>
                            </>
                        }
                    }}
                </>
            }
        }
    };

    html! {
        <section>
            <ErrorAlert message={(*error).clone()} />
            { body }
        </section>
    }
}
