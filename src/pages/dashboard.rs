//! Dashboard Page
//!
//! Main view: summary cards, curve distribution bar chart, top-products donut
//! and low-stock alerts. Refreshes every 30 seconds while mounted.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::api;
use crate::components::{
    ChartSkeleton, CurveBarChart, CurveValueList, GoalCard, SummaryCards, TopProductsDonut,
    TopProductsList,
};
use crate::state::charts::{ChartInstance, ChartSlot};
use crate::state::global::{GlobalState, LOW_STOCK_THRESHOLD};
use crate::state::poll::PollSwitch;
use crate::state::seq::FetchKind;

/// Dashboard refresh period
const REFRESH_INTERVAL_MS: u32 = 30_000;

/// How many curve-A products feed the donut
const DONUT_TOP_N: usize = 5;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Initial load on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            load_dashboard(state.clone()).await;
            check_stock_alerts(state).await;
        });
    });

    // Fixed-interval auto-refresh, cancelled when the page unmounts
    let poll: Rc<RefCell<PollSwitch<gloo_timers::callback::Interval>>> =
        Rc::new(RefCell::new(PollSwitch::new()));

    let state_for_poll = state.clone();
    poll.borrow_mut().engage(gloo_timers::callback::Interval::new(
        REFRESH_INTERVAL_MS,
        move || {
            let state = state_for_poll.clone();
            spawn_local(async move {
                load_dashboard(state.clone()).await;
                check_stock_alerts(state).await;
            });
        },
    ));

    // Stop polling and destroy the chart instances when the page unmounts
    let poll_for_cleanup = Rc::clone(&poll);
    let state_for_cleanup = state.clone();
    on_cleanup(move || {
        poll_for_cleanup.borrow_mut().disengage();
        state_for_cleanup.charts.update(|c| {
            c.release(ChartSlot::CurveBar);
            c.release(ChartSlot::TopDonut);
        });
    });

    // Bind the bar chart whenever the summary changes
    let state_for_bar = state.clone();
    create_effect(move |_| {
        let summary = state_for_bar.summary.get();
        let instance = ChartInstance::single(
            vec!["Curva A".into(), "Curva B".into(), "Curva C".into()],
            vec![
                summary.curve_a as f64,
                summary.curve_b as f64,
                summary.curve_c as f64,
            ],
        );
        state_for_bar
            .charts
            .update(|c| c.bind(ChartSlot::CurveBar, instance));
    });

    // Bind the donut whenever the curve listing changes
    let state_for_donut = state.clone();
    create_effect(move |_| {
        let items = state_for_donut.curve_items.get();
        let top: Vec<_> = items
            .iter()
            .filter(|i| i.curve == "A")
            .take(DONUT_TOP_N)
            .collect();

        let instance = ChartInstance::single(
            top.iter().map(|i| i.sku.clone()).collect(),
            top.iter().map(|i| i.sale_price).collect(),
        );
        state_for_donut
            .charts
            .update(|c| c.bind(ChartSlot::TopDonut, instance));
    });

    let state_for_refresh = state.clone();
    let refresh_now = move |_| {
        let state = state_for_refresh.clone();
        spawn_local(async move {
            load_dashboard(state.clone()).await;
            check_stock_alerts(state.clone()).await;
            state.show_success("Dados atualizados!");
        });
    };

    let fallback = state.summary_is_fallback;

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Visão geral do estoque por curva ABC"</p>
                </div>

                <button
                    on:click=refresh_now
                    class="px-4 py-2 bg-amber-600 hover:bg-amber-700 rounded-lg
                           font-medium transition-colors"
                >
                    "Atualizar"
                </button>
            </div>

            // Fallback notice when showing emergency data
            {move || {
                fallback.get().then(|| view! {
                    <div class="bg-red-900/40 border border-red-700 text-red-300
                                rounded-lg px-4 py-3 text-sm">
                        "Sem conexão com o servidor: exibindo dados de emergência."
                    </div>
                })
            }}

            // Summary cards
            <SummaryCards />

            // Charts (skeleton only on first load, before any listing arrived)
            {
                let loading = state.loading;
                let curve_items = state.curve_items;
                move || {
                    if loading.get() && curve_items.get().is_empty() {
                        view! {
                            <div class="grid md:grid-cols-2 gap-8">
                                <ChartSkeleton />
                                <ChartSkeleton />
                            </div>
                        }
                        .into_view()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 gap-8">
                                <section class="bg-gray-800 rounded-xl p-6">
                                    <h2 class="text-xl font-semibold mb-4">"Distribuição ABC"</h2>
                                    <CurveBarChart />
                                </section>

                                <section class="bg-gray-800 rounded-xl p-6">
                                    <h2 class="text-xl font-semibold mb-4">"Top Curva A por Preço"</h2>
                                    <TopProductsDonut />
                                </section>
                            </div>
                        }
                        .into_view()
                    }
                }
            }

            // Sales goal, top products and curve-value ranking
            <div class="grid md:grid-cols-3 gap-8">
                <GoalCard />
                <TopProductsList />
                <CurveValueList />
            </div>
        </div>
    }
}

/// Fetch-and-render cycle: summary then curve listing. Each response is
/// applied only if its token is still current, so a slow poll can never
/// overwrite data from a newer one.
pub async fn load_dashboard(state: GlobalState) {
    state.loading.set(true);

    let token = state.seq.begin(FetchKind::Summary);
    match api::fetch_dashboard_summary().await {
        Ok(summary) => {
            if state.seq.is_current(FetchKind::Summary, token) {
                state.apply_summary(summary);
            }
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to fetch summary: {}", e).into());
            if state.seq.is_current(FetchKind::Summary, token) {
                state.apply_summary_fallback();
            }
        }
    }

    let token = state.seq.begin(FetchKind::CurveListing);
    match api::fetch_curve_listing().await {
        Ok(items) => {
            if state.seq.is_current(FetchKind::CurveListing, token) {
                state.curve_items.set(items);
            }
        }
        Err(e) => {
            // The total-value card keeps its previous listing on failure
            web_sys::console::error_1(&format!("Failed to fetch curve listing: {}", e).into());
        }
    }

    state.loading.set(false);
}

/// Check curve-A products for critically low stock and raise an alert
async fn check_stock_alerts(state: GlobalState) {
    let token = state.seq.begin(FetchKind::Alerts);
    match api::fetch_curve_products("A").await {
        Ok(products) => {
            if !state.seq.is_current(FetchKind::Alerts, token) {
                return;
            }

            let low: Vec<_> = products
                .into_iter()
                .filter(|p| p.stock <= LOW_STOCK_THRESHOLD)
                .collect();

            if let Some(message) = stock_alert_message(low.len()) {
                state.show_alert(&message);
            }
            state.low_stock.set(low);
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to check stock alerts: {}", e).into());
        }
    }
}

/// Toast text for a low-stock check, raised on every check that finds any
fn stock_alert_message(low_count: usize) -> Option<String> {
    (low_count > 0).then(|| format!("{} produtos com estoque baixo!", low_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_repeats_while_stock_stays_low() {
        // The same count on consecutive checks still raises a toast
        assert_eq!(
            stock_alert_message(3).as_deref(),
            Some("3 produtos com estoque baixo!")
        );
        assert_eq!(
            stock_alert_message(3).as_deref(),
            Some("3 produtos com estoque baixo!")
        );
    }

    #[test]
    fn no_alert_when_nothing_is_low() {
        assert_eq!(stock_alert_message(0), None);
    }
}
