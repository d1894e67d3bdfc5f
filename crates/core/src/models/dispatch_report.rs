use crate::prelude::*;

#[derive(Debug, Clone, Getters, CopyGetters, Builder)]
pub struct DispatchReport {
    #[getset(get_copy = "pub")]
    final_state: DispatchState,

    /// Sum of all planned amounts, in base units.
    #[getset(get_copy = "pub")]
    planned_total: BaseUnits,

    #[getset(get = "pub")]
    results: Vec<TransferResult>,
}

impl DispatchReport {
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }
}
