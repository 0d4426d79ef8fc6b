//! Global Application State
//!
//! Reactive state management using Leptos signals. One `GlobalState` is
//! provided through context; every page and component reads from it. All data
//! here is transient: the most recently fetched payload fully replaces the
//! previous one, and nothing survives a page reload except the API URL kept in
//! localStorage.

use leptos::*;

use super::charts::ChartSlots;
use super::seq::FetchSeq;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Latest dashboard summary (replaced wholesale on each poll)
    pub summary: RwSignal<DashboardSummary>,
    /// Whether the summary currently shown is the emergency fallback
    pub summary_is_fallback: RwSignal<bool>,
    /// ABC curve listing used for the total-value card and the donut chart
    pub curve_items: RwSignal<Vec<CurveItem>>,
    /// Cached product list backing the client-side filter/sort
    pub products: RwSignal<Vec<Product>>,
    /// Error from the last product fetch, shown inline in the table
    pub products_error: RwSignal<Option<String>>,
    /// Monthly evolution series for the line chart
    pub evolution: RwSignal<Vec<EvolutionPoint>>,
    /// Curve-A products with critically low stock
    pub low_stock: RwSignal<Vec<Product>>,
    /// Chart slot registry (one live instance per slot)
    pub charts: RwSignal<ChartSlots>,
    /// Monotonic request tokens, one sequence per fetch kind
    pub seq: FetchSeq,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Stock alert message (for toasts)
    pub alert: RwSignal<Option<String>>,
}

/// Aggregated dashboard metrics from `GET /dashboard/dados`.
///
/// Every numeric field is precomputed by the backend; `atualizacao` arrives
/// already formatted as `dd/mm/yyyy HH:MM`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct DashboardSummary {
    #[serde(default)]
    pub atualizacao: String,
    #[serde(default, rename = "total_produtos")]
    pub total_products: u32,
    #[serde(default, rename = "lucro_total")]
    pub total_profit: f64,
    #[serde(default, rename = "curvaA")]
    pub curve_a: u32,
    #[serde(default, rename = "curvaB")]
    pub curve_b: u32,
    #[serde(default, rename = "curvaC")]
    pub curve_c: u32,
    #[serde(default, rename = "produtos_top")]
    pub top_products: Vec<String>,
    #[serde(default, rename = "lucros_top")]
    pub top_profits: Vec<f64>,
    #[serde(default, rename = "vendas_mes")]
    pub monthly_sales: f64,
    #[serde(default, rename = "meta_mensal")]
    pub monthly_goal: f64,
    #[serde(default, rename = "crescimento")]
    pub growth: f64,
    #[serde(default)]
    pub fonte: String,
}

impl DashboardSummary {
    /// Emergency values shown when the summary fetch fails. The cards must
    /// always render something, never throw.
    pub fn emergency() -> Self {
        Self {
            atualizacao: String::new(),
            total_products: 300,
            total_profit: 15_000.0,
            curve_a: 151,
            curve_b: 79,
            curve_c: 70,
            top_products: vec!["Sistema Indisponível".to_string()],
            top_profits: vec![0.0],
            monthly_sales: 19_500.0,
            monthly_goal: 25_000.0,
            growth: 0.0,
            fonte: "Dados de Emergência".to_string(),
        }
    }

    /// Progress toward the monthly goal, in percent
    pub fn goal_progress(&self) -> f64 {
        if self.monthly_goal <= 0.0 {
            return 0.0;
        }
        self.monthly_sales / self.monthly_goal * 100.0
    }
}

impl Default for DashboardSummary {
    fn default() -> Self {
        Self::emergency()
    }
}

/// One row of the ABC curve listing from `GET /curvaabc`
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct CurveItem {
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub sale_price: f64,
    #[serde(default, rename = "valor_total")]
    pub total_value: f64,
    #[serde(default, rename = "perc_acumulado")]
    pub cumulative_percent: f64,
    #[serde(rename = "curva")]
    pub curve: String,
}

/// Total inventory value over a curve listing (Σ sale_price × stock)
pub fn inventory_value(items: &[CurveItem]) -> f64 {
    items.iter().map(|i| i.sale_price * i.stock as f64).sum()
}

/// Row-shaped product record from `GET /api/produtos` and the live feed
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Product {
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub stock: i64,
    #[serde(default, alias = "sale_price")]
    pub price: f64,
    #[serde(default, rename = "curva", alias = "curve")]
    pub curve: String,
    #[serde(default, rename = "localizacao", alias = "location")]
    pub location: String,
}

/// Curve-A stock at or below this level raises an alert
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// One month of the evolution series from `GET /curvaabc/evolucao`
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct EvolutionPoint {
    /// Month label, "YYYY-MM"
    pub mes: String,
    #[serde(default)]
    pub curva_a: i64,
    #[serde(default)]
    pub curva_b: i64,
    #[serde(default)]
    pub curva_c: i64,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        summary: create_rw_signal(DashboardSummary::emergency()),
        summary_is_fallback: create_rw_signal(true),
        curve_items: create_rw_signal(Vec::new()),
        products: create_rw_signal(Vec::new()),
        products_error: create_rw_signal(None),
        evolution: create_rw_signal(Vec::new()),
        low_stock: create_rw_signal(Vec::new()),
        charts: create_rw_signal(ChartSlots::new()),
        seq: FetchSeq::new(),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        alert: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Replace the summary with freshly fetched data
    pub fn apply_summary(&self, summary: DashboardSummary) {
        self.summary.set(summary);
        self.summary_is_fallback.set(false);
    }

    /// Fall back to the emergency summary after a failed fetch
    pub fn apply_summary_fallback(&self) {
        self.summary.set(DashboardSummary::emergency());
        self.summary_is_fallback.set(true);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Show a stock alert (auto-clears after timeout)
    pub fn show_alert(&self, message: &str) {
        self.alert.set(Some(message.to_string()));

        let alert_signal = self.alert;
        gloo_timers::callback::Timeout::new(5000, move || {
            alert_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emergency_summary_matches_documented_values() {
        let s = DashboardSummary::emergency();
        assert_eq!(s.total_products, 300);
        assert_eq!(s.total_profit, 15_000.0);
        assert_eq!((s.curve_a, s.curve_b, s.curve_c), (151, 79, 70));
        assert_eq!(s.monthly_sales, 19_500.0);
        assert_eq!(s.monthly_goal, 25_000.0);
        assert_eq!(s.growth, 0.0);
        assert_eq!(s.fonte, "Dados de Emergência");
        assert_eq!(s.top_products, vec!["Sistema Indisponível".to_string()]);
    }

    #[test]
    fn summary_deserializes_portuguese_field_names() {
        let json = r#"{
            "atualizacao": "07/10/2025 15:55",
            "total_produtos": 42,
            "lucro_total": 1234.5,
            "curvaA": 10, "curvaB": 20, "curvaC": 12,
            "produtos_top": ["Mouse Gamer RGB"],
            "lucros_top": [99.9],
            "vendas_mes": 5000.0,
            "meta_mensal": 25000.0,
            "crescimento": 8.5,
            "fonte": "Dados Reais"
        }"#;
        let s: DashboardSummary = serde_json::from_str(json).unwrap();
        assert_eq!(s.total_products, 42);
        assert_eq!(s.curve_b, 20);
        assert_eq!(s.growth, 8.5);
        assert_eq!(s.atualizacao, "07/10/2025 15:55");
    }

    #[test]
    fn summary_tolerates_missing_fields() {
        let s: DashboardSummary = serde_json::from_str("{}").unwrap();
        assert_eq!(s.total_products, 0);
        assert!(s.top_products.is_empty());
    }

    #[test]
    fn goal_progress_handles_zero_goal() {
        let mut s = DashboardSummary::emergency();
        assert_eq!(s.goal_progress(), 78.0);
        s.monthly_goal = 0.0;
        assert_eq!(s.goal_progress(), 0.0);
    }

    #[test]
    fn inventory_value_sums_price_times_stock() {
        let items = vec![
            CurveItem {
                sku: "SKU1".into(),
                name: "Teclado Mecânico".into(),
                stock: 3,
                sale_price: 100.0,
                total_value: 300.0,
                cumulative_percent: 60.0,
                curve: "A".into(),
            },
            CurveItem {
                sku: "SKU2".into(),
                name: "Cabo USB-C".into(),
                stock: 10,
                sale_price: 5.0,
                total_value: 50.0,
                cumulative_percent: 100.0,
                curve: "C".into(),
            },
        ];
        assert_eq!(inventory_value(&items), 350.0);
        assert_eq!(inventory_value(&[]), 0.0);
    }

    #[test]
    fn product_accepts_both_wire_spellings() {
        let pt: Product =
            serde_json::from_str(r#"{"sku":"S1","name":"Fone","curva":"A","localizacao":"B2"}"#)
                .unwrap();
        assert_eq!(pt.curve, "A");
        assert_eq!(pt.location, "B2");

        let en: Product =
            serde_json::from_str(r#"{"sku":"S1","name":"Fone","curve":"B","location":"C1"}"#)
                .unwrap();
        assert_eq!(en.curve, "B");
        assert_eq!(en.location, "C1");

        // /curva/{tipo} rows carry sale_price instead of price
        let row: Product =
            serde_json::from_str(r#"{"sku":"S2","name":"Webcam 4K","sale_price":199.9,"stock":2}"#)
                .unwrap();
        assert_eq!(row.price, 199.9);
    }
}
