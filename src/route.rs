#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Route {
    Budgets,
    Budget(i64),
    EditBudget(i64),
    CreateBudget,
    Login,
    Register,
    NotFound,
}

impl Route {
    /// Resolves `/budget/35`, `/budget/35/edit`, and the legacy
    /// `/budget?id=35` form. `query` is the raw search string, with or
    /// without the leading `?`.
    pub fn parse(path: &str, query: &str) -> Route {
        let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
        match parts.as_slice() {
            [] | ["budgets"] => Route::Budgets,
            ["budget"] => match query_param(query, "id").and_then(|id| parse_id(&id)) {
                Some(id) => Route::Budget(id),
                None => Route::NotFound,
            },
            ["budget", id] => parse_id(id).map_or(Route::NotFound, Route::Budget),
            ["budget", id, "edit"] => parse_id(id).map_or(Route::NotFound, Route::EditBudget),
            ["create_budget"] => Route::CreateBudget,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Budgets => "/budgets".to_string(),
            Route::Budget(id) => format!("/budget/{}", id),
            Route::EditBudget(id) => format!("/budget/{}/edit", id),
            Route::CreateBudget => "/create_budget".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::NotFound => "/".to_string(),
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Route::Budgets | Route::Budget(_) | Route::EditBudget(_) | Route::CreateBudget
        )
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok()
}

fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn current_route() -> Route {
    let location = web_sys::window().map(|window| window.location());
    let path = location
        .as_ref()
        .and_then(|l| l.pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    let query = location
        .as_ref()
        .and_then(|l| l.search().ok())
        .unwrap_or_default();
    Route::parse(&path, &query)
}

pub fn navigate(path: &str) {
    log::debug!("navigating to {}", path);
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(path) {
            log::error!("navigation to {} failed: {:?}", path, e);
        }
    }
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
