//! Chart Slot Registry
//!
//! View-state for the canvas charts. Each slot holds at most one live
//! instance; binding a new dataset replaces (destroys) whatever was bound
//! before, so stacked re-creations can never leak instances. Components redraw
//! from the bound instance inside a reactive effect.

use std::collections::HashMap;

/// The chart slots the dashboard renders into
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    /// Bar chart of product counts per ABC curve
    CurveBar,
    /// Donut of the top curve-A products by sale price
    TopDonut,
    /// Line chart of the monthly curve evolution
    EvolutionLine,
}

/// Dataset bound to a chart slot
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartInstance {
    pub labels: Vec<String>,
    /// One or more series of equal length, drawn in order
    pub series: Vec<Vec<f64>>,
}

impl ChartInstance {
    pub fn single(labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            labels,
            series: vec![values],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.is_empty())
    }
}

/// Registry mapping slots to their single live instance
#[derive(Clone, Debug, Default)]
pub struct ChartSlots {
    slots: HashMap<ChartSlot, ChartInstance>,
}

impl ChartSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `instance` to `slot`, replacing any prior instance
    pub fn bind(&mut self, slot: ChartSlot, instance: ChartInstance) {
        self.slots.insert(slot, instance);
    }

    /// Currently bound instance for `slot`, if any
    pub fn get(&self, slot: ChartSlot) -> Option<&ChartInstance> {
        self.slots.get(&slot)
    }

    /// Drop the instance bound to `slot`
    pub fn release(&mut self, slot: ChartSlot) {
        self.slots.remove(&slot);
    }
}

#[cfg(test)]
impl ChartSlots {
    /// Number of live instances across all slots
    fn live_count(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(values: Vec<f64>) -> ChartInstance {
        ChartInstance::single(
            vec!["Curva A".into(), "Curva B".into(), "Curva C".into()],
            values,
        )
    }

    #[test]
    fn binding_twice_leaves_one_instance() {
        let mut slots = ChartSlots::new();
        slots.bind(ChartSlot::CurveBar, bar(vec![1.0, 2.0, 3.0]));
        slots.bind(ChartSlot::CurveBar, bar(vec![4.0, 5.0, 6.0]));

        assert_eq!(slots.live_count(), 1);
        let bound = slots.get(ChartSlot::CurveBar).unwrap();
        assert_eq!(bound.series[0], vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn slots_are_independent() {
        let mut slots = ChartSlots::new();
        slots.bind(ChartSlot::CurveBar, bar(vec![1.0]));
        slots.bind(ChartSlot::TopDonut, ChartInstance::default());

        assert_eq!(slots.live_count(), 2);
        assert!(slots.get(ChartSlot::EvolutionLine).is_none());
    }

    #[test]
    fn release_drops_the_instance() {
        let mut slots = ChartSlots::new();
        slots.bind(ChartSlot::EvolutionLine, ChartInstance::default());
        slots.release(ChartSlot::EvolutionLine);

        assert_eq!(slots.live_count(), 0);
        assert!(slots.get(ChartSlot::EvolutionLine).is_none());
    }

    #[test]
    fn empty_instance_detection() {
        assert!(ChartInstance::default().is_empty());
        assert!(!ChartInstance::single(vec!["A".into()], vec![1.0]).is_empty());
    }
}
