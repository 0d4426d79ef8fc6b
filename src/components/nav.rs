//! Navigation Component
//!
//! Header bar with brand, links and the low-stock alert badge.

use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let low_stock = state.low_stock;

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"📦"</span>
                        <span class="text-xl font-bold text-white">"Estoque ABC"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Dashboard" />
                        <NavLink href="/produtos" label="Produtos" />
                        <NavLink href="/evolucao" label="Evolução" />
                        <NavLink href="/config" label="Configurações" />

                        // Low stock alert badge
                        {move || {
                            let count = low_stock.get().len();
                            (count > 0).then(|| view! {
                                <span
                                    class="ml-2 bg-red-600 text-white text-xs font-bold
                                           px-2 py-1 rounded-full"
                                    title="Produtos da curva A com estoque baixo"
                                >
                                    {count}
                                </span>
                            })
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
