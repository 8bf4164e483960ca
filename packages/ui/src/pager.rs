use dioxus::prelude::*;

use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::state::{PaginationModel, PAGE_SIZES};
use crate::Icon;

/// Table footer: rows-per-page select and previous/next.
#[component]
pub fn Pager(
    pagination: PaginationModel,
    total: u64,
    on_change: EventHandler<PaginationModel>,
) -> Element {
    let label = pagination.range_label(total);
    rsx! {
        div {
            class: "flex items-center justify-end gap-4 px-4 py-3 text-sm text-gray-600 border-t",
            label {
                class: "flex items-center gap-2",
                "Rows per page:"
                select {
                    class: "border border-gray-300 rounded px-2 py-1",
                    value: "{pagination.page_size}",
                    onchange: move |evt: FormEvent| {
                        if let Ok(size) = evt.value().parse::<usize>() {
                            on_change.call(pagination.with_page_size(size));
                        }
                    },
                    for size in PAGE_SIZES {
                        option { key: "{size}", value: "{size}", selected: size == pagination.page_size, "{size}" }
                    }
                }
            }
            span { "{label}" }
            button {
                r#type: "button",
                class: "p-1 rounded hover:bg-gray-100 disabled:opacity-30",
                title: "Previous page",
                disabled: !pagination.has_previous(),
                onclick: move |_| on_change.call(pagination.with_page(pagination.page.saturating_sub(1), total)),
                Icon { icon: FaChevronLeft, width: 12, height: 12 }
            }
            button {
                r#type: "button",
                class: "p-1 rounded hover:bg-gray-100 disabled:opacity-30",
                title: "Next page",
                disabled: !pagination.has_next(total),
                onclick: move |_| on_change.call(pagination.with_page(pagination.page + 1, total)),
                Icon { icon: FaChevronRight, width: 12, height: 12 }
            }
        }
    }
}
