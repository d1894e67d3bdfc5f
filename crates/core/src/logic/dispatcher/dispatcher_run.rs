use crate::prelude::*;

impl<E: TransferExecutor> Dispatcher<E> {
    /// Creates the audit log, runs the preflight gate and sends every planned
    /// transfer. A failed transfer is logged and the run moves on; only
    /// errors before the first transfer, or a failing audit log, end it.
    pub async fn run(&mut self, session: BatchSession) -> Result<DispatchReport> {
        let mut audit_log = match AuditLog::create(self.parameters.audit_log_path()) {
            Ok(audit_log) => audit_log,
            Err(e) => {
                let e = Error::from(e);
                self.abort(&e);
                return Err(e);
            }
        };

        self.transition(DispatchState::PreflightCheck);
        let planned_total = match check_solvency(&self.executor, session.plans()).await {
            Ok(total) => total,
            Err(e) => {
                let e = Error::from(e);
                self.abort(&e);
                return Err(e);
            }
        };

        self.transition(DispatchState::Dispatching);
        let results = self.dispatch(&session, &mut audit_log).await?;

        self.transition(DispatchState::Completed);
        let report = DispatchReport::builder()
            .final_state(self.state)
            .planned_total(planned_total)
            .results(results)
            .build();
        info!(
            "📄 Done: {} succeeded, {} failed. Log saved to {}",
            report.succeeded(),
            report.failed(),
            audit_log.path().display()
        );
        Ok(report)
    }

    async fn dispatch(
        &mut self,
        session: &BatchSession,
        audit_log: &mut AuditLog,
    ) -> Result<Vec<TransferResult>> {
        let executor = &self.executor;
        let currency = session.currency();
        let mut delays = DelayScheduler::new(*self.parameters.delay_range(), &mut self.rng);
        let mut results = Vec::with_capacity(session.plans().len());

        for (index, plan) in session.plans().iter().enumerate() {
            let result = executor.execute(plan).await;
            if result.is_success() {
                info!(
                    "✅ Sent {} {} to {} ({})",
                    plan.amount(),
                    currency.symbol(),
                    plan.recipient(),
                    result.detail()
                );
            } else {
                warn!("❌ Failed: {} ({})", plan.recipient(), result.detail());
            }
            audit_log.append(&result)?;

            if result.is_success() && executor.refreshes_balance() {
                match executor.balance().await {
                    Ok(balance) => info!(
                        "💰 Remaining balance: {}",
                        currency.display_base_units(balance)
                    ),
                    Err(e) => warn!("Could not refresh balance: {e}"),
                }
            }
            results.push(result);

            if index + 1 < session.plans().len() {
                delays.pause().await;
            }
        }
        Ok(results)
    }
}
