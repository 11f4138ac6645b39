mod category_accordion;
mod form;
mod item_form;
mod nav;

pub use category_accordion::CategoryAccordion;
pub use form::{bind_input, bind_select, report_error, ErrorAlert};
pub use item_form::{AddItemForm, EditItemForm};
pub use nav::NavBar;
