use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::form::{bind_input, bind_select, report_error, ErrorAlert};
use crate::api;
use crate::format::format_category_label;
use crate::models::{Budget, BudgetItem, BudgetItemUpdate};
use crate::validate;

fn category_options(categories: &[String], selected: &str) -> Html {
    let mut options: Vec<&str> = categories.iter().map(String::as_str).collect();
    if !selected.is_empty() && !options.contains(&selected) {
        options.push(selected);
    }
    html! {
        <>
            <option value="" selected={selected.is_empty()} disabled={true}>{"Choose a category"}</option>
            { for options.into_iter().map(|cat| html! {
                <option value={cat.to_string()} selected={cat == selected}>{ format_category_label(cat) }</option>
            }) }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct AddItemFormProps {
    pub budget_id: i64,
    pub categories: Vec<String>,
    pub on_saved: Callback<Budget>,
}

#[function_component(AddItemForm)]
pub fn add_item_form(props: &AddItemFormProps) -> Html {
    let name = use_state(String::new);
    let category = use_state(String::new);
    let total = use_state(String::new);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let on_submit = {
        let name = name.clone();
        let category = category.clone();
        let total = total.clone();
        let error = error.clone();
        let saving = saving.clone();
        let budget_id = props.budget_id;
        let on_saved = props.on_saved.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }
            let payload = match validate::new_item(budget_id, &name, &category, &total) {
                Ok(payload) => payload,
                Err(msg) => {
                    error.set(Some(msg));
                    return;
                }
            };

            error.set(None);
            saving.set(true);

            let name = name.clone();
            let category = category.clone();
            let total = total.clone();
            let error = error.clone();
            let saving = saving.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                match api::create_item(&payload).await {
                    Ok(budget) => {
                        log::info!("added item {:?} to budget {}", payload.name, budget_id);
                        name.set(String::new());
                        category.set(String::new());
                        total.set(String::new());
                        on_saved.emit(budget);
                    }
                    Err(e) => report_error(&e, &error),
                }
                saving.set(false);
            });
        })
    };

    html! {
        <form class="card card-body mb-4" onsubmit={on_submit}>
            <h3 class="h5 mb-3">{"Add Item"}</h3>
            <ErrorAlert message={(*error).clone()} />
            <div class="row g-2">
                <div class="col-md-4">
                    <select class="form-select" onchange={bind_select(&category)}>
                        { category_options(&props.categories, &category) }
                    </select>
                </div>
                <div class="col-md-4">
                    <input class="form-control" type="text" placeholder="Item name" value={(*name).clone()} oninput={bind_input(&name)} />
                </div>
                <div class="col-md-2">
                    <input class="form-control" type="number" step="0.01" min="0" placeholder="0.00" value={(*total).clone()} oninput={bind_input(&total)} />
                </div>
                <div class="col-md-2 d-grid">
                    <button type="submit" class="btn btn-primary" disabled={*saving} aria-busy={(*saving).then_some("true")}>
                        { if *saving { "Saving..." } else { "Add Item" } }
                    </button>
                </div>
            </div>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct EditItemFormProps {
    pub budget_id: i64,
    pub item: BudgetItem,
    pub categories: Vec<String>,
    pub on_saved: Callback<Budget>,
    pub on_cancel: Callback<()>,
}

#[function_component(EditItemForm)]
pub fn edit_item_form(props: &EditItemFormProps) -> Html {
    let name = use_state(|| props.item.name.clone());
    let category = use_state(|| props.item.category.clone().unwrap_or_default());
    let total = use_state(|| props.item.total.to_string());
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let on_submit = {
        let name = name.clone();
        let category = category.clone();
        let total = total.clone();
        let error = error.clone();
        let saving = saving.clone();
        let budget_id = props.budget_id;
        let item_id = props.item.id;
        let on_saved = props.on_saved.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }
            let checked = match validate::new_item(budget_id, &name, &category, &total) {
                Ok(checked) => checked,
                Err(msg) => {
                    error.set(Some(msg));
                    return;
                }
            };
            let update = BudgetItemUpdate {
                budget_id,
                item_id,
                name: Some(checked.name),
                category: Some(checked.category),
                total: Some(checked.total),
            };

            error.set(None);
            saving.set(true);

            let error = error.clone();
            let saving = saving.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                match api::edit_item(&update).await {
                    Ok(budget) => {
                        log::info!("updated item {} in budget {}", item_id, budget_id);
                        on_saved.emit(budget);
                    }
                    Err(e) => report_error(&e, &error),
                }
                saving.set(false);
            });
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };

    html! {
        <form class="card card-body mb-4 border-primary" onsubmit={on_submit}>
            <h3 class="h5 mb-3">{ format!("Edit \"{}\"", props.item.name) }</h3>
            <ErrorAlert message={(*error).clone()} />
            <div class="row g-2">
                <div class="col-md-4">
                    <select class="form-select" onchange={bind_select(&category)}>
                        { category_options(&props.categories, &category) }
                    </select>
                </div>
                <div class="col-md-4">
                    <input class="form-control" type="text" value={(*name).clone()} oninput={bind_input(&name)} />
                </div>
                <div class="col-md-2">
                    <input class="form-control" type="number" step="0.01" min="0" value={(*total).clone()} oninput={bind_input(&total)} />
                </div>
                <div class="col-md-2 d-flex gap-2">
                    <button type="submit" class="btn btn-primary" disabled={*saving}>
                        { if *saving { "Saving..." } else { "Save" } }
                    </button>
                    <button type="button" class="btn btn-outline-secondary" onclick={on_cancel} disabled={*saving}>
                        {"Cancel"}
                    </button>
                </div>
            </div>
        </form>
    }
}
