//! Single checklist screen: item list, add/delete/toggle, inline rename.

use std::time::Duration;

use dioxus::prelude::*;

use api::{ApiError, ChecklistItem};
use ui::components::{Button, ButtonVariant, ErrorBanner, Input};
use ui::{alert, confirm, make_client, use_session, validate};

use crate::guards::RequireAuth;
use crate::Route;

/// How long the not-found and unauthorized notices stay up before the view
/// navigates away on its own.
const REDIRECT_DELAY: Duration = Duration::from_millis(2000);
/// How long an empty-rename complaint stays visible.
const EDIT_ERROR_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, PartialEq)]
enum DetailState {
    Loading,
    Ready {
        name: String,
        items: Vec<ChecklistItem>,
    },
    NotFound,
    Unauthorized,
    Error(String),
}

/// One item being renamed. Holding the draft here, keyed by item id, means
/// only one row can ever be in edit mode.
#[derive(Debug, Clone, PartialEq)]
struct EditDraft {
    id: i64,
    text: String,
}

/// A rejected checklist or item fetch either invalidates the session (401,
/// leave for login) or is a plain load failure the user can retry from here.
fn classify_load_error(err: &ApiError) -> DetailState {
    if err.is_unauthorized() {
        DetailState::Unauthorized
    } else {
        DetailState::Error("Failed to load checklist. Try again.".to_string())
    }
}

/// Drop one item from local state by identity, without a refetch.
fn remove_item(items: &mut Vec<ChecklistItem>, id: i64) {
    items.retain(|item| item.id != id);
}

/// The API has no single-checklist endpoint, so the loader pulls the whole
/// collection and resolves the route id against it before fetching items.
async fn load_detail(client: &api::Client, token: &str, id: i64) -> DetailState {
    let checklists = match client.list_checklists(token).await {
        Ok(checklists) => checklists,
        Err(err) => {
            tracing::error!("failed to fetch checklists for {id}: {err}");
            return classify_load_error(&err);
        }
    };

    let Some(checklist) = checklists.into_iter().find(|checklist| checklist.id == id) else {
        return DetailState::NotFound;
    };

    match client.list_items(token, id).await {
        Ok(items) => DetailState::Ready {
            name: checklist.name,
            items,
        },
        Err(err) => {
            tracing::error!("failed to fetch items for checklist {id}: {err}");
            classify_load_error(&err)
        }
    }
}

#[component]
pub fn ChecklistDetail(id: i64) -> Element {
    rsx! {
        RequireAuth {
            ChecklistDetailPage { id: id }
        }
    }
}

#[component]
fn ChecklistDetailPage(id: i64) -> Element {
    // Track the route param in a signal so the loader re-runs on param change
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let session = use_session();
    let nav = use_navigator();

    let mut state = use_signal(|| DetailState::Loading);
    let mut action_error = use_signal(|| Option::<String>::None);
    let mut new_item = use_signal(String::new);
    let mut editing = use_signal(|| Option::<EditDraft>::None);
    let mut edit_error = use_signal(|| Option::<String>::None);

    // The delayed navigations below live inside this scope's task, so leaving
    // the view early also cancels the pending redirect.
    let mut loader = use_resource(move || async move {
        let id = id_signal();
        state.set(DetailState::Loading);
        action_error.set(None);
        let Some(token) = session.read().token().map(str::to_string) else {
            return;
        };

        let outcome = load_detail(&make_client(), &token, id).await;
        state.set(outcome.clone());

        match outcome {
            DetailState::NotFound => {
                ui::sleep(REDIRECT_DELAY).await;
                nav.replace(Route::Checklists {});
            }
            DetailState::Unauthorized => {
                ui::sleep(REDIRECT_DELAY).await;
                nav.replace(Route::Login {});
            }
            _ => {}
        }
    });

    let handle_add = move |evt: FormEvent| {
        evt.prevent_default();
        let name = new_item();
        if !validate::required(&name) {
            alert("Item name is required");
            return;
        }
        spawn(async move {
            let Some(token) = session.read().token().map(str::to_string) else {
                return;
            };
            match make_client().add_item(&token, id_signal(), &name).await {
                Ok(()) => {
                    new_item.set(String::new());
                    loader.restart();
                }
                Err(err) => {
                    tracing::error!("failed to add item: {err}");
                    action_error.set(Some("Could not add item.".to_string()));
                }
            }
        });
    };

    let mut handle_delete = move |item_id: i64| {
        if !confirm("Delete this item?") {
            return;
        }
        spawn(async move {
            let Some(token) = session.read().token().map(str::to_string) else {
                return;
            };
            match make_client()
                .delete_item(&token, id_signal(), item_id)
                .await
            {
                Ok(()) => {
                    if let DetailState::Ready { items, .. } = &mut *state.write() {
                        remove_item(items, item_id);
                    }
                }
                Err(err) => {
                    tracing::error!("failed to delete item {item_id}: {err}");
                    action_error.set(Some("Could not delete item.".to_string()));
                }
            }
        });
    };

    let mut handle_toggle = move |item_id: i64| {
        spawn(async move {
            let Some(token) = session.read().token().map(str::to_string) else {
                return;
            };
            if let Err(err) = make_client()
                .toggle_item(&token, id_signal(), item_id)
                .await
            {
                tracing::error!("failed to toggle item {item_id}: {err}");
                action_error.set(Some("Could not toggle status.".to_string()));
            }
            // Whatever the call reported, resync with the server's truth.
            loader.restart();
        });
    };

    let mut save_edit = move || {
        let Some(draft) = editing() else {
            return;
        };
        if !validate::required(&draft.text) {
            edit_error.set(Some("Item name cannot be empty!".to_string()));
            spawn(async move {
                ui::sleep(EDIT_ERROR_DELAY).await;
                edit_error.set(None);
            });
            return;
        }
        spawn(async move {
            let Some(token) = session.read().token().map(str::to_string) else {
                return;
            };
            match make_client()
                .rename_item(&token, id_signal(), draft.id, &draft.text)
                .await
            {
                Ok(()) => {
                    editing.set(None);
                    loader.restart();
                }
                Err(err) => {
                    tracing::error!("failed to rename item {}: {err}", draft.id);
                    action_error.set(Some("Could not edit item.".to_string()));
                }
            }
        });
    };

    let content = match state() {
        DetailState::Loading => rsx! {
            div { class: "screen-center",
                p { class: "loading", "Loading checklist details..." }
            }
        },
        DetailState::NotFound => rsx! {
            ErrorScreen { message: "Checklist not found. Redirecting...", show_back: false }
        },
        DetailState::Unauthorized => rsx! {
            ErrorScreen { message: "Unauthorized. Redirecting to login...", show_back: false }
        },
        DetailState::Error(message) => rsx! {
            ErrorScreen { message: "{message}", show_back: true }
        },
        DetailState::Ready { name, items } => rsx! {
            header { class: "page-header",
                h1 {
                    "Checklist: "
                    span { class: "accent", "{name}" }
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        nav.push(Route::Checklists {});
                    },
                    "Back to checklists"
                }
            }

            form { class: "card form-row", onsubmit: handle_add,
                Input {
                    class: "grow",
                    placeholder: "Add a new item to this checklist...",
                    value: new_item(),
                    oninput: move |evt: FormEvent| new_item.set(evt.value()),
                }
                Button { r#type: "submit", "Add Item" }
            }

            if let Some(message) = action_error() {
                ErrorBanner { message: "{message}" }
            }
            if let Some(message) = edit_error() {
                ErrorBanner { message: "{message}" }
            }

            if items.is_empty() {
                div { class: "card empty-state",
                    p { "No items in this checklist yet." }
                    p { "Start by adding your first item above!" }
                }
            } else {
                ul { class: "item-list",
                    for item in items {
                        ItemRow {
                            key: "{item.id}",
                            item: item.clone(),
                            editing: editing,
                            on_toggle: move |item_id| handle_toggle(item_id),
                            on_delete: move |item_id| handle_delete(item_id),
                            on_save: move |_| save_edit(),
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "page",
            {content}
        }
    }
}

#[component]
fn ItemRow(
    item: ChecklistItem,
    editing: Signal<Option<EditDraft>>,
    on_toggle: EventHandler<i64>,
    on_delete: EventHandler<i64>,
    on_save: EventHandler<()>,
) -> Element {
    let mut editing = editing;
    let item_id = item.id;
    let editing_this = editing().map(|draft| draft.id) == Some(item_id);
    let editing_any = editing().is_some();

    rsx! {
        li { class: "card item-row",
            input {
                class: "item-check",
                r#type: "checkbox",
                checked: item.done,
                onchange: move |_| on_toggle.call(item_id),
            }
            if editing_this {
                Input {
                    class: "grow edit-input",
                    value: editing().map(|draft| draft.text).unwrap_or_default(),
                    autofocus: true,
                    oninput: move |evt: FormEvent| {
                        if let Some(draft) = &mut *editing.write() {
                            draft.text = evt.value();
                        }
                    },
                    onkeydown: move |evt: KeyboardEvent| {
                        match evt.key() {
                            Key::Enter => on_save.call(()),
                            Key::Escape => editing.set(None),
                            _ => {}
                        }
                    },
                }
                Button {
                    title: "Save changes",
                    onclick: move |_| on_save.call(()),
                    "Save"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    title: "Cancel editing",
                    onclick: move |_| editing.set(None),
                    "Cancel"
                }
            } else {
                span {
                    class: if item.done { "item-name done" } else { "item-name" },
                    title: "Click to edit",
                    onclick: {
                        let name = item.name.clone();
                        move |_| {
                            editing.set(Some(EditDraft {
                                id: item_id,
                                text: name.clone(),
                            }))
                        }
                    },
                    "{item.name}"
                }
            }
            if !editing_any {
                Button {
                    variant: ButtonVariant::Danger,
                    class: "item-delete",
                    title: "Delete item",
                    onclick: move |_| on_delete.call(item_id),
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn ErrorScreen(message: String, show_back: bool) -> Element {
    let nav = use_navigator();

    rsx! {
        div { class: "screen-center",
            ErrorBanner { message: "{message}" }
            if show_back {
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| {
                        nav.replace(Route::Checklists {});
                    },
                    "Go to checklists"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<ChecklistItem> {
        vec![
            ChecklistItem {
                id: 10,
                name: "milk".to_string(),
                done: false,
            },
            ChecklistItem {
                id: 11,
                name: "eggs".to_string(),
                done: true,
            },
            ChecklistItem {
                id: 12,
                name: "bread".to_string(),
                done: false,
            },
        ]
    }

    #[test]
    fn test_unauthorized_fetch_maps_to_unauthorized_state() {
        let err = ApiError::Status {
            status: 401,
            message: None,
        };
        assert_eq!(classify_load_error(&err), DetailState::Unauthorized);
    }

    #[test]
    fn test_other_failures_map_to_generic_error() {
        for status in [400, 403, 404, 500] {
            let err = ApiError::Status {
                status,
                message: Some("whatever the server said".to_string()),
            };
            assert_eq!(
                classify_load_error(&err),
                DetailState::Error("Failed to load checklist. Try again.".to_string())
            );
        }
    }

    #[test]
    fn test_remove_item_removes_exactly_one_id() {
        let mut list = items();
        remove_item(&mut list, 11);
        assert_eq!(
            list.iter().map(|item| item.id).collect::<Vec<_>>(),
            vec![10, 12]
        );
    }

    #[test]
    fn test_remove_item_with_unknown_id_is_noop() {
        // A failed delete never touches local state, so the stale row stays
        // visible until the next full reload.
        let mut list = items();
        remove_item(&mut list, 99);
        assert_eq!(list, items());
    }
}
