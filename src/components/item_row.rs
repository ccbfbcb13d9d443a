//! Item Row Component
//!
//! One table row with bought toggle and delete controls.

use leptos::prelude::*;

use crate::components::IconButton;
use crate::models::Item;
use crate::store::{store_remove_item, store_toggle_item, use_app_store};

#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let store = use_app_store();

    let id = item.id;
    let is_bought = item.is_bought;

    view! {
        <tr>
            <td class=if is_bought { "strikethrough" } else { "" }>{item.name.clone()}</td>
            <td>{item.shop_name()}</td>
            <td>{item.category_name()}</td>
            <td>
                <button
                    type="button"
                    class=if is_bought { "btn btn-success" } else { "btn btn-warning" }
                    on:click=move |_| store_toggle_item(&store, id)
                >
                    {if is_bought { "Satın Alındı" } else { "Satın Al" }}
                </button>
            </td>
            <td>
                <IconButton title="Sil" on_click=move || store_remove_item(&store, id) />
            </td>
        </tr>
    }
}
