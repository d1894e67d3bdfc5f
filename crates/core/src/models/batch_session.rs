use crate::prelude::*;

/// Everything planned for one run. Owned by the [`Dispatcher`] from
/// preparation until the run ends.
#[derive(Debug, Clone, Getters, CopyGetters, Builder)]
pub struct BatchSession {
    #[getset(get = "pub")]
    recipients: Vec<Address>,

    #[getset(get = "pub")]
    plans: Vec<TransferPlan>,

    /// Balance when the plan was made, in base units.
    #[getset(get_copy = "pub")]
    starting_balance: BaseUnits,

    #[getset(get = "pub")]
    currency: Currency,
}

impl BatchSession {
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}
