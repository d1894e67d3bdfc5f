use crate::prelude::*;

use std::path::PathBuf;

/// Everything the operator provided for a run, as typed.
#[derive(Debug, Clone, Builder)]
pub struct OperatorInput {
    #[builder(into)]
    recipients_path: PathBuf,

    #[builder(into)]
    audit_log_path: PathBuf,

    seed: Option<u64>,

    min_amount: Decimal,
    max_amount: Decimal,
    min_delay_secs: u64,
    max_delay_secs: u64,
}

impl OperatorInput {
    /// Validates the input. Bounds that are inverted are replaced rather than
    /// rejected and each replacement is returned next to the parameters.
    pub fn into_parameters(
        self,
    ) -> Result<(DispatchParameters, Vec<ConfigCorrection>), InvalidCliArgs> {
        let amount_range = AmountRange::corrected(self.min_amount, self.max_amount)?;
        let delay_range = DelayRange::corrected(self.min_delay_secs, self.max_delay_secs);

        let corrections = [amount_range.correction(), delay_range.correction()]
            .into_iter()
            .flatten()
            .cloned()
            .collect();

        let parameters = DispatchParameters::builder()
            .recipients_path(self.recipients_path)
            .audit_log_path(self.audit_log_path)
            .amount_range(*amount_range.value())
            .delay_range(*delay_range.value())
            .maybe_seed(self.seed)
            .build();
        Ok((parameters, corrections))
    }
}

impl TryFrom<OperatorInput> for DispatchParameters {
    type Error = InvalidCliArgs;

    fn try_from(input: OperatorInput) -> Result<Self, Self::Error> {
        let (parameters, corrections) = input.into_parameters()?;
        for correction in corrections {
            warn!("⚠️ {correction}");
        }
        Ok(parameters)
    }
}
