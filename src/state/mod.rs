//! State Management
//!
//! Global reactive state, request sequencing and chart slot registry.

pub mod charts;
pub mod filter;
pub mod global;
pub mod poll;
pub mod seq;

pub use charts::{ChartInstance, ChartSlot, ChartSlots};
pub use filter::{CurveFilter, ProductFilter, SortKey};
pub use global::{
    provide_global_state, CurveItem, DashboardSummary, EvolutionPoint, GlobalState, Product,
};
pub use poll::PollSwitch;
pub use seq::{FetchKind, FetchSeq};
