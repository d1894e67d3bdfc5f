use crate::prelude::*;

/// Exact sum of all planned amounts, in base units.
pub fn total_needed(
    plans: &[TransferPlan],
    currency: &Currency,
) -> Result<BaseUnits, PreflightError> {
    plans.iter().try_fold(0, |total: BaseUnits, plan| {
        let amount = currency.to_base_units(plan.amount())?;
        total
            .checked_add(amount)
            .ok_or(PreflightError::TotalOverflow)
    })
}

/// Fails unless `balance` covers `needed`.
pub fn verify_solvency(
    balance: BaseUnits,
    needed: BaseUnits,
    currency: &Currency,
) -> Result<(), PreflightError> {
    if balance < needed {
        return Err(PreflightError::InsufficientBalance {
            balance: currency.display_base_units(balance),
            needed: currency.display_base_units(needed),
        });
    }
    Ok(())
}

/// Gates a run: queries the live balance and checks it against the whole
/// plan. Returns the planned total.
pub async fn check_solvency<E>(
    executor: &E,
    plans: &[TransferPlan],
) -> Result<BaseUnits, PreflightError>
where
    E: TransferExecutor + ?Sized,
{
    let currency = executor.currency();
    let needed = total_needed(plans, currency)?;
    let balance = executor.balance().await?;
    verify_solvency(balance, needed, currency)?;
    info!(
        "✅ Balance sufficient: {} available, {} needed",
        currency.display_base_units(balance),
        currency.display_base_units(needed)
    );
    Ok(needed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{str::FromStr, sync::Arc};

    const RECIPIENT: Address = Address([0xaa; 20]);

    fn plans(amounts: &[&str]) -> Vec<TransferPlan> {
        amounts
            .iter()
            .map(|a| {
                TransferPlan::new(RECIPIENT, Decimal::from_str(a).unwrap(), CurrencyKind::Native)
            })
            .collect()
    }

    fn tea() -> Currency {
        Currency::builder()
            .kind(CurrencyKind::Native)
            .symbol("TEA")
            .decimals(18)
            .build()
    }

    #[test]
    fn total_has_no_rounding_drift() {
        let plans = plans(&["0.1"; 10]);
        assert_eq!(total_needed(&plans, &tea()).unwrap(), 10u128.pow(18));
    }

    #[test]
    fn empty_plan_needs_nothing() {
        assert_eq!(total_needed(&[], &tea()).unwrap(), 0);
        assert!(verify_solvency(0, 0, &tea()).is_ok());
    }

    #[test]
    fn gate_opens_iff_balance_covers_total() {
        let currency = tea();
        for (balance, needed) in [(5u128, 5u128), (6, 5), (0, 0), (u128::MAX, u128::MAX)] {
            assert!(verify_solvency(balance, needed, &currency).is_ok());
        }
        for (balance, needed) in [(4u128, 5u128), (0, 1), (u128::MAX - 1, u128::MAX)] {
            assert!(matches!(
                verify_solvency(balance, needed, &currency),
                Err(PreflightError::InsufficientBalance { .. })
            ));
        }
    }

    #[test]
    fn overflowing_total_is_reported() {
        let currency = Currency::builder()
            .kind(CurrencyKind::Native)
            .symbol("HUGE")
            .decimals(37)
            .build();
        let plans = plans(&["20", "20"]);
        assert!(matches!(
            total_needed(&plans, &currency),
            Err(PreflightError::TotalOverflow)
        ));
    }

    #[tokio::test]
    async fn check_uses_live_balance() {
        let ledger = Arc::new(ScriptedLedger::new(20_000_000_000_000_000, 0));
        let executor = NativeTransferExecutor::new(ledger.clone(), "TEA", 18);

        let total = check_solvency(&executor, &plans(&["0.01", "0.01"])).await.unwrap();
        assert_eq!(total, 20_000_000_000_000_000);
        assert_eq!(ledger.balance_queries(), 1);

        let result = check_solvency(&executor, &plans(&["0.01", "0.011"])).await;
        assert!(matches!(
            result,
            Err(PreflightError::InsufficientBalance { .. })
        ));
    }
}
