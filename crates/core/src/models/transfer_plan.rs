use crate::prelude::*;

/// One planned transfer. The amount is fixed when the plan is made, so the
/// value checked at preflight is the value sent and logged.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct TransferPlan {
    #[getset(get = "pub")]
    recipient: Address,

    #[getset(get_copy = "pub")]
    amount: Decimal,

    #[getset(get = "pub")]
    currency_kind: CurrencyKind,
}

impl TransferPlan {
    pub fn new(recipient: Address, amount: Decimal, currency_kind: CurrencyKind) -> Self {
        Self {
            recipient,
            amount: amount.normalize(),
            currency_kind,
        }
    }
}
