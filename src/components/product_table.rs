//! Product Table
//!
//! Filter bar plus table over the cached product list. The derived view is
//! recomputed on every keystroke and the whole table body re-renders.

use leptos::*;

use crate::format;
use crate::state::filter::{CurveFilter, ProductFilter, SortKey, MAX_TABLE_ROWS};
use crate::state::global::GlobalState;

/// Search, curve and sort controls bound to a shared `ProductFilter` signal
#[component]
pub fn FilterBar(filter: RwSignal<ProductFilter>) -> impl IntoView {
    view! {
        <div class="flex flex-col md:flex-row gap-3">
            <input
                type="text"
                placeholder="Buscar por SKU ou nome..."
                prop:value=move || filter.get().search
                on:input=move |ev| {
                    let search = event_target_value(&ev);
                    filter.update(|f| f.search = search);
                }
                class="flex-1 bg-gray-700 rounded-lg px-4 py-2
                       border border-gray-600 focus:border-amber-500 focus:outline-none"
            />

            <select
                on:change=move |ev| {
                    let curve = CurveFilter::from_value(&event_target_value(&ev));
                    filter.update(|f| f.curve = curve);
                }
                class="bg-gray-700 rounded-lg px-4 py-2
                       border border-gray-600 focus:border-amber-500 focus:outline-none"
            >
                <option value="todas">"Todas as curvas"</option>
                <option value="A">"Curva A"</option>
                <option value="B">"Curva B"</option>
                <option value="C">"Curva C"</option>
            </select>

            <select
                on:change=move |ev| {
                    let sort = SortKey::from_value(&event_target_value(&ev));
                    filter.update(|f| f.sort = sort);
                }
                class="bg-gray-700 rounded-lg px-4 py-2
                       border border-gray-600 focus:border-amber-500 focus:outline-none"
            >
                <option value="name">"Nome"</option>
                <option value="stock_asc">"Menor estoque"</option>
                <option value="stock_desc">"Maior estoque"</option>
                <option value="price_desc">"Maior preço"</option>
            </select>
        </div>
    }
}

/// Product table rendering the filtered view, capped at 50 rows
#[component]
pub fn ProductTable(filter: RwSignal<ProductFilter>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let products = state.products;
    let products_error = state.products_error;

    view! {
        <div class="overflow-x-auto bg-gray-800 rounded-xl">
            <table class="w-full text-sm">
                <thead>
                    <tr class="text-left text-gray-400 border-b border-gray-700">
                        <th class="px-4 py-3">"SKU"</th>
                        <th class="px-4 py-3">"Produto"</th>
                        <th class="px-4 py-3 text-right">"Estoque"</th>
                        <th class="px-4 py-3 text-right">"Preço"</th>
                        <th class="px-4 py-3">"Curva"</th>
                        <th class="px-4 py-3">"Localização"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        if let Some(error) = products_error.get() {
                            return view! {
                                <tr>
                                    <td colspan="6" class="px-4 py-6 text-center text-red-400">
                                        "Erro ao carregar produtos: " {error}
                                    </td>
                                </tr>
                            }
                            .into_view();
                        }

                        let view_rows = filter.get().apply(&products.get());

                        if view_rows.is_empty() {
                            return view! {
                                <tr>
                                    <td colspan="6" class="px-4 py-6 text-center text-gray-400">
                                        "Nenhum produto encontrado"
                                    </td>
                                </tr>
                            }
                            .into_view();
                        }

                        view_rows
                            .into_iter()
                            .take(MAX_TABLE_ROWS)
                            .map(|p| {
                                let low = p.stock <= crate::state::global::LOW_STOCK_THRESHOLD;
                                view! {
                                    <tr class="border-b border-gray-700 last:border-0 hover:bg-gray-750">
                                        <td class="px-4 py-2 font-mono text-xs">{p.sku}</td>
                                        <td class="px-4 py-2">{p.name}</td>
                                        <td class=format!(
                                            "px-4 py-2 text-right {}",
                                            if low { "text-red-400 font-semibold" } else { "" }
                                        )>
                                            {p.stock}
                                        </td>
                                        <td class="px-4 py-2 text-right">
                                            {format::currency(p.price)}
                                        </td>
                                        <td class="px-4 py-2">
                                            <CurveBadge curve=p.curve />
                                        </td>
                                        <td class="px-4 py-2 text-gray-400">{p.location}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

/// Colored badge for the ABC curve
#[component]
fn CurveBadge(curve: String) -> impl IntoView {
    let color = match curve.as_str() {
        "A" => "bg-amber-500",
        "B" => "bg-blue-500",
        "C" => "bg-gray-500",
        _ => "bg-gray-600",
    };

    view! {
        <span class=format!("{} text-xs px-2 py-0.5 rounded-full text-white", color)>
            {curve}
        </span>
    }
}
