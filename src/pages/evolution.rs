//! Evolution Page
//!
//! Date-ranged view of the monthly ABC curve evolution, drawn as one line per
//! curve. Defaults to the last six months.

use chrono::{Datelike, NaiveDate};
use leptos::*;

use crate::api;
use crate::components::{EvolutionLineChart, Loading};
use crate::state::charts::{ChartInstance, ChartSlot};
use crate::state::global::GlobalState;
use crate::state::seq::FetchKind;

/// Evolution page component
#[component]
pub fn Evolution() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let today = chrono::Local::now().date_naive();
    let (range_start, range_end) = default_range(today);
    let (inicio, set_inicio) = create_signal(range_start.format("%Y-%m-%d").to_string());
    let (fim, set_fim) = create_signal(range_end.format("%Y-%m-%d").to_string());

    // Load the default range on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        let inicio = inicio.get_untracked();
        let fim = fim.get_untracked();
        spawn_local(async move {
            load_evolution(state, inicio, fim).await;
        });
    });

    // Bind the line chart whenever the series changes
    let state_for_chart = state.clone();
    create_effect(move |_| {
        let points = state_for_chart.evolution.get();
        let instance = ChartInstance {
            labels: points.iter().map(|p| p.mes.clone()).collect(),
            series: vec![
                points.iter().map(|p| p.curva_a as f64).collect(),
                points.iter().map(|p| p.curva_b as f64).collect(),
                points.iter().map(|p| p.curva_c as f64).collect(),
            ],
        };
        state_for_chart
            .charts
            .update(|c| c.bind(ChartSlot::EvolutionLine, instance));
    });

    // Destroy the chart instance when the page unmounts
    let state_for_cleanup = state.clone();
    on_cleanup(move || {
        state_for_cleanup
            .charts
            .update(|c| c.release(ChartSlot::EvolutionLine));
    });

    let state_for_search = state.clone();
    let search = move |_| {
        let state = state_for_search.clone();
        let inicio = inicio.get();
        let fim = fim.get();
        spawn_local(async move {
            load_evolution(state, inicio, fim).await;
        });
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Evolução"</h1>
                <p class="text-gray-400 mt-1">"Produtos por curva ao longo dos meses"</p>
            </div>

            // Date range controls
            <div class="flex flex-wrap items-end gap-3">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Início"</label>
                    <input
                        type="date"
                        prop:value=move || inicio.get()
                        on:input=move |ev| set_inicio.set(event_target_value(&ev))
                        class="bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-amber-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Fim"</label>
                    <input
                        type="date"
                        prop:value=move || fim.get()
                        on:input=move |ev| set_fim.set(event_target_value(&ev))
                        class="bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-amber-500 focus:outline-none"
                    />
                </div>
                <button
                    on:click=search
                    class="px-4 py-2 bg-amber-600 hover:bg-amber-700 rounded-lg
                           font-medium transition-colors"
                >
                    "Buscar"
                </button>
            </div>

            // Chart
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Evolução Mensal"</h2>
                {
                    let loading = state.loading;
                    move || {
                        if loading.get() {
                            view! { <Loading /> }.into_view()
                        } else {
                            view! { <EvolutionLineChart /> }.into_view()
                        }
                    }
                }
            </section>
        </div>
    }
}

/// Default window: from the first day of the month five months back to today
fn default_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let mut year = today.year();
    let mut month = today.month() as i32 - 5;
    if month < 1 {
        month += 12;
        year -= 1;
    }
    let start = NaiveDate::from_ymd_opt(year, month as u32, 1).unwrap_or(today);
    (start, today)
}

async fn load_evolution(state: GlobalState, inicio: String, fim: String) {
    state.loading.set(true);

    let token = state.seq.begin(FetchKind::Evolution);
    match api::fetch_evolution(&inicio, &fim).await {
        Ok(response) => {
            if state.seq.is_current(FetchKind::Evolution, token) {
                web_sys::console::log_1(
                    &format!(
                        "Evolution: {} periods from {}",
                        response.evolucao.len(),
                        response.fonte
                    )
                    .into(),
                );
                state.evolution.set(response.evolucao);
            }
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to fetch evolution: {}", e).into());
            if state.seq.is_current(FetchKind::Evolution, token) {
                state.show_error(&format!("Erro ao carregar evolução: {}", e));
            }
        }
    }

    state.loading.set(false);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_range_spans_six_calendar_months() {
        let (start, end) = default_range(date(2025, 10, 7));
        assert_eq!(start, date(2025, 5, 1));
        assert_eq!(end, date(2025, 10, 7));
    }

    #[test]
    fn default_range_crosses_year_boundary() {
        let (start, _) = default_range(date(2025, 3, 15));
        assert_eq!(start, date(2024, 10, 1));

        let (start, _) = default_range(date(2026, 1, 2));
        assert_eq!(start, date(2025, 8, 1));
    }
}
