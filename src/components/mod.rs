//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod loading;
pub mod nav;
pub mod product_table;
pub mod stat_card;
pub mod toast;

pub use chart::{CurveBarChart, EvolutionLineChart, TopProductsDonut};
pub use loading::{ChartSkeleton, Loading};
pub use nav::Nav;
pub use product_table::{FilterBar, ProductTable};
pub use stat_card::{CurveValueList, GoalCard, SummaryCards, TopProductsList};
pub use toast::Toast;
