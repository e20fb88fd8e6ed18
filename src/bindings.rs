use std::collections::BTreeMap;
use std::fmt;

use crate::chart::{self, ChartSpec};
use crate::data::filter::{FilterState, PayloadRange, SiteFilter};
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Inputs, outputs and change events
// ---------------------------------------------------------------------------

/// A user-controlled input a binding can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterInput {
    Site,
    PayloadRange,
}

/// Emitted after the filter state accepted a new value.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterChange {
    Site(SiteFilter),
    PayloadRange(PayloadRange),
}

impl FilterChange {
    pub fn input(&self) -> FilterInput {
        match self {
            FilterChange::Site(_) => FilterInput::Site,
            FilterChange::PayloadRange(_) => FilterInput::PayloadRange,
        }
    }
}

/// A chart display region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChartSlot {
    SuccessPie,
    PayloadScatter,
}

impl fmt::Display for ChartSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartSlot::SuccessPie => f.write_str("success-pie-chart"),
            ChartSlot::PayloadScatter => f.write_str("success-payload-scatter-chart"),
        }
    }
}

// ---------------------------------------------------------------------------
// Displayed charts
// ---------------------------------------------------------------------------

/// The chart objects currently on screen, one per slot.
///
/// Only [`RenderBindings`] can write here, and only by replacing a whole chart.
#[derive(Debug, Default)]
pub struct Charts {
    slots: BTreeMap<ChartSlot, ChartSpec>,
}

impl Charts {
    pub fn get(&self, slot: ChartSlot) -> Option<&ChartSpec> {
        self.slots.get(&slot)
    }

    fn replace(&mut self, slot: ChartSlot, spec: ChartSpec) {
        self.slots.insert(slot, spec);
    }
}

// ---------------------------------------------------------------------------
// Bindings
// ---------------------------------------------------------------------------

pub type ChartBuilder = fn(&Dataset, &FilterState) -> ChartSpec;

/// Subscription of one chart slot to a set of inputs.
pub struct Binding {
    inputs: Vec<FilterInput>,
    output: ChartSlot,
    build: ChartBuilder,
}

impl Binding {
    pub fn new(output: ChartSlot, inputs: &[FilterInput], build: ChartBuilder) -> Self {
        Binding {
            inputs: inputs.to_vec(),
            output,
            build,
        }
    }

    pub fn output(&self) -> ChartSlot {
        self.output
    }

    pub fn listens_to(&self, input: FilterInput) -> bool {
        self.inputs.contains(&input)
    }
}

/// Ordered registry of bindings.  Dispatch is synchronous and follows
/// registration order; each slot has at most one binding.
#[derive(Default)]
pub struct RenderBindings {
    bindings: Vec<Binding>,
}

impl RenderBindings {
    /// The dashboard wiring: the pie follows the site, the scatter follows
    /// both site and payload range.
    pub fn dashboard() -> Self {
        RenderBindings {
            bindings: vec![
                Binding::new(ChartSlot::SuccessPie, &[FilterInput::Site], chart::success_pie),
                Binding::new(
                    ChartSlot::PayloadScatter,
                    &[FilterInput::Site, FilterInput::PayloadRange],
                    chart::payload_scatter,
                ),
            ],
        }
    }

    /// Add a binding.  A slot that already has a writer is refused and the
    /// binding is handed back.
    pub fn register(&mut self, binding: Binding) -> Result<(), Binding> {
        if self.bindings.iter().any(|b| b.output == binding.output) {
            return Err(binding);
        }
        self.bindings.push(binding);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Build every chart from scratch, e.g. when a session starts.
    pub fn render_all(&self, dataset: &Dataset, filters: &FilterState, charts: &mut Charts) {
        for binding in &self.bindings {
            charts.replace(binding.output, (binding.build)(dataset, filters));
        }
    }

    /// Re-run every binding subscribed to the changed input and replace its
    /// chart.  Returns the replaced slots in invocation order.
    pub fn dispatch(
        &self,
        change: &FilterChange,
        dataset: &Dataset,
        filters: &FilterState,
        charts: &mut Charts,
    ) -> Vec<ChartSlot> {
        let input = change.input();
        let mut replaced = Vec::new();
        for binding in self.bindings.iter().filter(|b| b.listens_to(input)) {
            let spec = (binding.build)(dataset, filters);
            log::debug!("{:?} → replacing {} ({})", change, binding.output, spec.title());
            charts.replace(binding.output, spec);
            replaced.push(binding.output);
        }
        replaced
    }
}
