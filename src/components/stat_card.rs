//! Stat Card Components
//!
//! Pure projection of summary fields into cards. No two-way binding: the
//! cards only read signals and format values.

use leptos::*;

use crate::format;
use crate::state::global::{inventory_value, GlobalState};

/// Generic stat card with a label and a reactive value
#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] accent: Option<&'static str>,
) -> impl IntoView {
    let accent = accent.unwrap_or("text-white");

    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition-colors">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class=format!("text-3xl font-bold mt-2 {}", accent)>
                {move || value.get()}
            </div>
        </div>
    }
}

/// Summary row: total value, profit, product count and per-curve counts
#[component]
pub fn SummaryCards() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Extract the signals we need (RwSignal is Copy)
    let curve_items = state.curve_items;
    let summary = state.summary;

    let total_value =
        Signal::derive(move || format::currency(inventory_value(&curve_items.get())));
    let total_profit = Signal::derive(move || format::currency(summary.get().total_profit));
    let total_products = Signal::derive(move || summary.get().total_products.to_string());
    let curve_a = Signal::derive(move || summary.get().curve_a.to_string());
    let curve_b = Signal::derive(move || summary.get().curve_b.to_string());
    let curve_c = Signal::derive(move || summary.get().curve_c.to_string());

    view! {
        <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-4">
            <StatCard label="Valor em Estoque" value=total_value />
            <StatCard label="Lucro Total" value=total_profit accent="text-green-400" />
            <StatCard label="Produtos" value=total_products />
            <StatCard label="Curva A" value=curve_a accent="text-amber-400" />
            <StatCard label="Curva B" value=curve_b accent="text-blue-400" />
            <StatCard label="Curva C" value=curve_c accent="text-gray-300" />
        </div>
    }
}

/// Monthly sales against the configured goal, with growth indicator
#[component]
pub fn GoalCard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let summary = state.summary;

    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Vendas do Mês"</h2>

            <div class="flex items-baseline space-x-3">
                <span class="text-3xl font-bold">
                    {move || format::currency(summary.get().monthly_sales)}
                </span>
                <span class="text-gray-400 text-sm">
                    {move || format!("meta {}", format::currency(summary.get().monthly_goal))}
                </span>
            </div>

            // Progress bar toward the goal
            <div class="w-full bg-gray-700 rounded-full h-2 mt-4">
                <div
                    class="bg-amber-500 h-2 rounded-full transition-all"
                    style=move || {
                        let progress = summary.get().goal_progress().clamp(0.0, 100.0);
                        format!("width: {:.0}%", progress)
                    }
                />
            </div>

            <div class="flex items-center justify-between mt-3 text-sm">
                <span class="text-gray-400">
                    {move || format!("{} da meta", format::percent(summary.get().goal_progress()))}
                </span>
                {move || {
                    let growth = summary.get().growth;
                    let (arrow, color) = if growth > 0.0 {
                        ("↑", "text-green-400")
                    } else if growth < 0.0 {
                        ("↓", "text-red-400")
                    } else {
                        ("→", "text-gray-400")
                    };
                    view! {
                        <span class=color>
                            {arrow} " " {format::percent(growth)}
                        </span>
                    }
                }}
            </div>
        </div>
    }
}

/// Highest-value items in the curve listing, with the running share of
/// inventory value each one closes
#[component]
pub fn CurveValueList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let curve_items = state.curve_items;

    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Maior Valor em Estoque"</h2>

            <div class="space-y-2">
                {move || {
                    let mut items = curve_items.get();
                    if items.is_empty() {
                        return view! {
                            <p class="text-gray-400 text-sm">"Sem itens na curva"</p>
                        }
                        .into_view();
                    }

                    items.sort_by(|a, b| {
                        b.total_value
                            .partial_cmp(&a.total_value)
                            .unwrap_or(std::cmp::Ordering::Equal)
                    });

                    items
                        .iter()
                        .take(5)
                        .map(|item| {
                            view! {
                                <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                                    <span class="text-sm">
                                        {crate::format::short_name(&item.name, 30)}
                                    </span>
                                    <span class="text-sm text-right">
                                        <span class="font-semibold">
                                            {format::currency(item.total_value)}
                                        </span>
                                        <span class="text-gray-400 ml-2">
                                            {format!("acum. {}", format::percent(item.cumulative_percent))}
                                        </span>
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

/// Top products by profit, from the summary payload
#[component]
pub fn TopProductsList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let summary = state.summary;

    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Top Produtos"</h2>

            <div class="space-y-2">
                {move || {
                    let s = summary.get();
                    if s.top_products.is_empty() {
                        return view! {
                            <p class="text-gray-400 text-sm">"Sem produtos no ranking"</p>
                        }
                        .into_view();
                    }

                    s.top_products
                        .iter()
                        .zip(s.top_profits.iter().chain(std::iter::repeat(&0.0)))
                        .take(10)
                        .map(|(name, profit)| {
                            view! {
                                <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                                    <span class="text-sm">{crate::format::short_name(name, 30)}</span>
                                    <span class="font-semibold text-sm">
                                        {format::currency(*profit)}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
