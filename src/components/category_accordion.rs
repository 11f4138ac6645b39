use yew::prelude::*;

use crate::accordion::AccordionStateStore;
use crate::aggregate::CategoryBucket;
use crate::format::{category_dom_id, format_category_label, format_currency};
use crate::models::BudgetItem;

#[derive(Properties, PartialEq)]
pub struct CategoryAccordionProps {
    pub position: usize,
    pub budget_id: i64,
    pub category: String,
    pub bucket: CategoryBucket,
    /// Item whose delete request is in flight, if any.
    pub deleting: Option<i64>,
    pub on_edit: Callback<BudgetItem>,
    pub on_delete: Callback<BudgetItem>,
}

/// Delete buttons stay disabled while any item delete is running.
fn delete_button(deleting: Option<i64>, item_id: i64) -> (bool, &'static str) {
    match deleting {
        Some(id) if id == item_id => (true, "Deleting..."),
        Some(_) => (true, "Delete"),
        None => (false, "Delete"),
    }
}

#[function_component(CategoryAccordion)]
pub fn category_accordion(props: &CategoryAccordionProps) -> Html {
    let open = {
        let budget_id = props.budget_id;
        let category = props.category.clone();
        use_state(move || AccordionStateStore::browser().restore(budget_id, &category))
    };

    let on_toggle = {
        let open = open.clone();
        let budget_id = props.budget_id;
        let category = props.category.clone();
        Callback::from(move |_| {
            let next = !*open;
            AccordionStateStore::browser().persist(budget_id, &category, next);
            open.set(next);
        })
    };

    let dom_id = category_dom_id(props.position, &props.category);
    let label = format_category_label(&props.category);

    html! {
        <div class="accordion-item">
            <h2 class="accordion-header" id={format!("heading-{}", dom_id)}>
                <button
                    class={classes!("accordion-button", (!*open).then_some("collapsed"))}
                    type="button"
                    aria-expanded={(*open).to_string()}
                    aria-controls={format!("collapse-{}", dom_id)}
                    onclick={on_toggle}
                >
                    <div class="d-flex justify-content-between w-100 pe-3">
                        <span>{ label }</span>
                        <strong>{ format_currency(props.bucket.total) }</strong>
                    </div>
                </button>
            </h2>
            <div
                id={format!("collapse-{}", dom_id)}
                class={classes!("accordion-collapse", "collapse", (*open).then_some("show"))}
                aria-labelledby={format!("heading-{}", dom_id)}
            >
                <div class="accordion-body p-0">
                    <ul class="list-group list-group-flush">
                        { for props.bucket.items.iter().map(|item| {
                            let on_edit = {
                                let on_edit = props.on_edit.clone();
                                let item = item.clone();
                                Callback::from(move |_| on_edit.emit(item.clone()))
                            };
                            let on_delete = {
                                let on_delete = props.on_delete.clone();
                                let item = item.clone();
                                Callback::from(move |_| on_delete.emit(item.clone()))
                            };
                            let (delete_disabled, delete_label) = delete_button(props.deleting, item.id);
                            html! {
                                <li key={item.id} class="list-group-item d-flex justify-content-between align-items-center">
                                    <span>{ item.name.clone() }</span>
                                    <div class="d-flex gap-2 align-items-center">
                                        <span>{ format_currency(item.total) }</span>
                                        <button class="btn btn-sm btn-outline-secondary" type="button" title="Edit item" onclick={on_edit}>
                                            {"Edit"}
                                        </button>
                                        <button class="btn btn-sm btn-outline-danger" type="button" title="Delete item" onclick={on_delete} disabled={delete_disabled}>
                                            { delete_label }
                                        </button>
                                    </div>
                                </li>
                            }
                        }) }
                    </ul>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_buttons_lock_while_a_delete_runs() {
        assert_eq!(delete_button(None, 4), (false, "Delete"));
        assert_eq!(delete_button(Some(4), 4), (true, "Deleting..."));
        assert_eq!(delete_button(Some(4), 9), (true, "Delete"));
    }
}
