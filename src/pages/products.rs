//! Products Page
//!
//! Product table with client-side filter/search/sort over one cached list,
//! plus an optional live feed polled on its own interval while the checkbox
//! is checked.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::api;
use crate::components::{FilterBar, ProductTable};
use crate::state::filter::ProductFilter;
use crate::state::global::GlobalState;
use crate::state::poll::PollSwitch;
use crate::state::seq::FetchKind;

/// Live feed refresh period
const LIVE_INTERVAL_MS: u32 = 10_000;

/// Products page component
#[component]
pub fn Products() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let filter = create_rw_signal(ProductFilter::default());
    let (live, set_live) = create_signal(false);

    // Initial product load on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            load_products(state).await;
        });
    });

    // Live feed interval, engaged and disengaged by the checkbox. Disengaging
    // drops the interval handle, so no further tick can fire.
    let poll: Rc<RefCell<PollSwitch<gloo_timers::callback::Interval>>> =
        Rc::new(RefCell::new(PollSwitch::new()));

    let state_for_live = state.clone();
    let poll_for_live = Rc::clone(&poll);
    create_effect(move |_| {
        if live.get() {
            let state = state_for_live.clone();

            // Immediate refresh, then poll
            let state_now = state.clone();
            let filtros = filter.get_untracked().live_query();
            spawn_local(async move {
                load_live_products(state_now, filtros).await;
            });

            let interval = gloo_timers::callback::Interval::new(LIVE_INTERVAL_MS, move || {
                let state = state.clone();
                let filtros = filter.get_untracked().live_query();
                spawn_local(async move {
                    load_live_products(state, filtros).await;
                });
            });
            poll_for_live.borrow_mut().engage(interval);
        } else if poll_for_live.borrow().is_running() {
            poll_for_live.borrow_mut().disengage();
        }
    });

    let poll_for_cleanup = Rc::clone(&poll);
    on_cleanup(move || {
        poll_for_cleanup.borrow_mut().disengage();
    });

    let products = state.products;

    view! {
        <div class="space-y-6">
            // Header with live feed toggle
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Produtos"</h1>
                    <p class="text-gray-400 mt-1">
                        {move || format!("{} produtos em cache", products.get().len())}
                    </p>
                </div>

                <label class="flex items-center space-x-2 cursor-pointer select-none">
                    <input
                        type="checkbox"
                        prop:checked=move || live.get()
                        on:change=move |ev| set_live.set(event_target_checked(&ev))
                        class="w-4 h-4 accent-amber-500"
                    />
                    <span class="text-sm text-gray-300">"Tempo real"</span>
                    {move || {
                        live.get().then(|| view! {
                            <span class="w-2 h-2 bg-green-400 rounded-full pulse" />
                        })
                    }}
                </label>
            </div>

            // Filter controls
            <FilterBar filter=filter />

            // Table (first 50 matching rows)
            <ProductTable filter=filter />
        </div>
    }
}

/// Load the full product listing into the cache. Sequenced together with
/// [`load_live_products`], which writes the same signal.
async fn load_products(state: GlobalState) {
    let token = state.seq.begin(FetchKind::Products);
    match api::fetch_products().await {
        Ok(products) => {
            if state.seq.is_current(FetchKind::Products, token) {
                state.products.set(products);
                state.products_error.set(None);
            }
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to fetch products: {}", e).into());
            if state.seq.is_current(FetchKind::Products, token) {
                state.products_error.set(Some(e));
            }
        }
    }
}

/// One tick of the live feed; stale responses are discarded.
///
/// Shares `FetchKind::Products` with [`load_products`]: both write the same
/// table, so a token from either loader supersedes the other's in-flight
/// request.
async fn load_live_products(state: GlobalState, filtros: String) {
    let token = state.seq.begin(FetchKind::Products);
    match api::fetch_live_products(&filtros).await {
        Ok(products) => {
            if state.seq.is_current(FetchKind::Products, token) {
                state.products.set(products);
                state.products_error.set(None);
            }
        }
        Err(e) => {
            // Keep the cached list; the next tick retries
            web_sys::console::error_1(&format!("Live feed error: {}", e).into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::seq::FetchSeq;

    // The mount-time listing and the live feed both fill the product table.
    // A mount response that resolves after a live payload is stale and must
    // not replace it.
    #[test]
    fn late_full_listing_does_not_clobber_live_feed() {
        let seq = FetchSeq::new();
        let mut table: Vec<&str> = Vec::new();

        let mount = seq.begin(FetchKind::Products);
        let live = seq.begin(FetchKind::Products);

        // The live payload comes back first and is applied
        if seq.is_current(FetchKind::Products, live) {
            table = vec!["live-row"];
        }
        // The earlier mount response arrives afterwards and is discarded
        if seq.is_current(FetchKind::Products, mount) {
            table = vec!["mount-row"];
        }

        assert_eq!(table, vec!["live-row"]);
    }
}
