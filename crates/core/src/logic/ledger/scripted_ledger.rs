use crate::prelude::*;

use async_trait::async_trait;
use std::{
    collections::HashSet,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

/// In-memory ledger for tests: balances move on every confirmed transfer and
/// chosen recipients are rejected.
#[derive(Debug)]
pub(crate) struct ScriptedLedger {
    sender: Address,
    native_balance: Mutex<BaseUnits>,
    token_balance: Mutex<BaseUnits>,
    token_metadata: TokenMetadata,
    rejected_recipients: HashSet<Address>,
    answered_balance_queries: Option<usize>,
    sent: Mutex<Vec<(Address, BaseUnits)>>,
    balance_queries: AtomicUsize,
}

impl ScriptedLedger {
    pub(crate) fn new(native_balance: BaseUnits, token_balance: BaseUnits) -> Self {
        Self {
            sender: Address([0x11; 20]),
            native_balance: Mutex::new(native_balance),
            token_balance: Mutex::new(token_balance),
            token_metadata: TokenMetadata::builder().symbol("TKN").decimals(6).build(),
            rejected_recipients: HashSet::new(),
            answered_balance_queries: None,
            sent: Mutex::new(Vec::new()),
            balance_queries: AtomicUsize::new(0),
        }
    }

    pub(crate) fn rejecting(mut self, recipient: Address) -> Self {
        self.rejected_recipients.insert(recipient);
        self
    }

    /// Answers the first `answered` balance queries, fails every later one.
    pub(crate) fn failing_balance_after(mut self, answered: usize) -> Self {
        self.answered_balance_queries = Some(answered);
        self
    }

    /// Confirmed transfers in submission order.
    pub(crate) fn sent(&self) -> Vec<(Address, BaseUnits)> {
        self.sent.lock().unwrap().clone()
    }

    pub(crate) fn balance_queries(&self) -> usize {
        self.balance_queries.load(Ordering::SeqCst)
    }

    fn count_balance_query(&self) -> Result<(), LedgerError> {
        let previous = self.balance_queries.fetch_add(1, Ordering::SeqCst);
        match self.answered_balance_queries {
            Some(answered) if previous >= answered => Err(LedgerError::Query {
                underlying: "connection reset by peer".to_owned(),
            }),
            _ => Ok(()),
        }
    }

    fn transfer(
        &self,
        balance: &Mutex<BaseUnits>,
        recipient: Address,
        amount: BaseUnits,
    ) -> Result<TxHash, LedgerError> {
        if self.rejected_recipients.contains(&recipient) {
            return Err(LedgerError::Submission {
                underlying: format!("execution reverted for {recipient}"),
            });
        }
        let mut balance = balance.lock().unwrap();
        let Some(remaining) = balance.checked_sub(amount) else {
            return Err(LedgerError::Submission {
                underlying: "insufficient funds for gas * price + value".to_owned(),
            });
        };
        *balance = remaining;
        let mut sent = self.sent.lock().unwrap();
        sent.push((recipient, amount));
        Ok(TxHash::from(format!("0x{:064x}", sent.len())))
    }
}

#[async_trait]
impl LedgerClient for ScriptedLedger {
    fn sender_address(&self) -> Address {
        self.sender
    }

    async fn native_balance(&self) -> Result<BaseUnits, LedgerError> {
        self.count_balance_query()?;
        Ok(*self.native_balance.lock().unwrap())
    }

    async fn send_native(
        &self,
        recipient: Address,
        amount: BaseUnits,
    ) -> Result<TxHash, LedgerError> {
        self.transfer(&self.native_balance, recipient, amount)
    }

    async fn token_metadata(&self, _contract: Address) -> Result<TokenMetadata, LedgerError> {
        Ok(self.token_metadata.clone())
    }

    async fn token_balance(&self, _contract: Address) -> Result<BaseUnits, LedgerError> {
        self.count_balance_query()?;
        Ok(*self.token_balance.lock().unwrap())
    }

    async fn send_token(
        &self,
        _contract: Address,
        recipient: Address,
        amount: BaseUnits,
    ) -> Result<TxHash, LedgerError> {
        self.transfer(&self.token_balance, recipient, amount)
    }
}
