use crate::prelude::*;

impl<E: TransferExecutor> Dispatcher<E> {
    /// Loads the recipients and plans one transfer for each of them.
    ///
    /// Amounts for the whole batch are drawn here, up front, so the preflight
    /// total is exactly what will be sent.
    pub async fn prepare(&mut self) -> Result<BatchSession> {
        let prepared = self.load_and_plan().await;
        if let Err(e) = &prepared {
            self.abort(e);
        }
        prepared
    }

    async fn load_and_plan(&mut self) -> Result<BatchSession> {
        self.transition(DispatchState::Loading);
        let recipients = load_recipients(self.parameters.recipients_path())?;
        if recipients.is_empty() {
            warn!("No valid recipients, nothing will be sent");
        }

        self.transition(DispatchState::Planning);
        let plans = self.plan(&recipients)?;
        let starting_balance = self.executor.balance().await?;

        Ok(BatchSession::builder()
            .recipients(recipients)
            .plans(plans)
            .starting_balance(starting_balance)
            .currency(self.executor.currency().clone())
            .build())
    }

    fn plan(&mut self, recipients: &[Address]) -> Result<Vec<TransferPlan>, PlanningError> {
        let currency = self.executor.currency();
        let mut randomizer = AmountRandomizer::new(
            self.parameters.amount_range(),
            currency.amount_precision(),
            &mut self.rng,
        )?;
        Ok(recipients
            .iter()
            .map(|recipient| {
                TransferPlan::new(*recipient, randomizer.next_amount(), *currency.kind())
            })
            .collect())
    }
}
