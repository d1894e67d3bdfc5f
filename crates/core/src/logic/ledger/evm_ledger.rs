use crate::prelude::*;

use async_trait::async_trait;
use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, Middleware, PendingTransaction, Provider},
    signers::{LocalWallet, Signer},
    types::{TransactionRequest, H160, H256, U256, U64},
};
use std::{sync::Arc, time::Duration};

/// Maximal number of connection attempts.
pub const MAX_ATTEMPTS: usize = 10;
/// Delay period between failed connection attempts.
pub const RETRY_DELAY: Duration = Duration::from_secs(1);

mod bindings {
    ethers::contract::abigen!(
        Erc20,
        r#"[
            function symbol() external view returns (string)
            function decimals() external view returns (uint8)
            function balanceOf(address account) external view returns (uint256)
            function transfer(address to, uint256 amount) external returns (bool)
        ]"#
    );
}

use bindings::Erc20;

type Client = SignerMiddleware<Provider<Http>, LocalWallet>;

/// [`LedgerClient`] for EVM chains over JSON-RPC, signing locally.
#[derive(Debug, Clone)]
pub struct EvmLedger {
    client: Arc<Client>,
}

impl EvmLedger {
    /// Tries [`MAX_ATTEMPTS`] times to reach the node at `rpc_url`, then binds
    /// `private_key` to the chain id it reports.
    pub async fn connect(rpc_url: &Url, private_key: &str) -> Result<Self, LedgerError> {
        let wallet: LocalWallet =
            private_key
                .trim()
                .parse()
                .map_err(|e: ethers::signers::WalletError| LedgerError::InvalidSigningKey {
                    underlying: e.to_string(),
                })?;

        let provider = Provider::new(Http::new(rpc_url.clone()));
        let chain_id = fetch_chain_id(&provider, rpc_url).await?;
        let wallet = wallet.with_chain_id(chain_id);
        info!(
            "🔗 Connected to {rpc_url} (chain id {chain_id}) as {}",
            Address(wallet.address().0)
        );

        let client = SignerMiddleware::new(provider, wallet);
        Ok(Self {
            client: Arc::new(client),
        })
    }

    fn token(&self, contract: Address) -> Erc20<Client> {
        Erc20::new(h160(contract), self.client.clone())
    }
}

async fn fetch_chain_id(provider: &Provider<Http>, rpc_url: &Url) -> Result<u64, LedgerError> {
    let mut last_error = String::new();
    for attempt in 1..=MAX_ATTEMPTS {
        info!("Attempt #{attempt}: Connecting to {rpc_url}");
        match provider.get_chainid().await {
            Ok(chain_id) => return Ok(chain_id.low_u64()),
            Err(err) => {
                warn!("RPC client {rpc_url} error: {err:?}");
                last_error = err.to_string();
                tokio::time::sleep(RETRY_DELAY).await;
            }
        }
    }

    error!("Failed to connect to {rpc_url} after {MAX_ATTEMPTS} attempts");
    Err(LedgerError::Connect {
        url: rpc_url.to_string(),
        underlying: last_error,
    })
}

fn h160(address: Address) -> H160 {
    H160(address.0)
}

fn tx_hash_of(hash: H256) -> TxHash {
    TxHash::from(format!("{hash:#x}"))
}

fn to_base_units(value: U256) -> Result<BaseUnits, LedgerError> {
    if value > U256::from(BaseUnits::MAX) {
        return Err(LedgerError::ValueTooLarge {
            value: value.to_string(),
        });
    }
    Ok(value.as_u128())
}

fn query_error(e: impl std::fmt::Display) -> LedgerError {
    LedgerError::Query {
        underlying: e.to_string(),
    }
}

fn submission_error(e: impl std::fmt::Display) -> LedgerError {
    LedgerError::Submission {
        underlying: e.to_string(),
    }
}

/// Waits for the receipt of `pending`. A receipt with status `0` is a revert.
async fn await_confirmation(pending: PendingTransaction<'_, Http>) -> Result<TxHash, LedgerError> {
    let tx_hash = tx_hash_of(pending.tx_hash());
    debug!("Waiting for confirmation of {tx_hash}");
    match pending.await {
        Ok(Some(receipt)) if receipt.status == Some(U64::zero()) => {
            Err(LedgerError::Reverted { tx_hash })
        }
        Ok(Some(_)) => Ok(tx_hash),
        Ok(None) => Err(LedgerError::Dropped { tx_hash }),
        Err(e) => Err(LedgerError::Confirmation {
            tx_hash,
            underlying: e.to_string(),
        }),
    }
}

#[async_trait]
impl LedgerClient for EvmLedger {
    fn sender_address(&self) -> Address {
        Address(self.client.address().0)
    }

    async fn native_balance(&self) -> Result<BaseUnits, LedgerError> {
        let balance = self
            .client
            .get_balance(self.client.address(), None)
            .await
            .map_err(query_error)?;
        to_base_units(balance)
    }

    async fn send_native(
        &self,
        recipient: Address,
        amount: BaseUnits,
    ) -> Result<TxHash, LedgerError> {
        let request = TransactionRequest::new()
            .to(h160(recipient))
            .value(U256::from(amount));
        let pending = self
            .client
            .send_transaction(request, None)
            .await
            .map_err(submission_error)?;
        await_confirmation(pending).await
    }

    async fn token_metadata(&self, contract: Address) -> Result<TokenMetadata, LedgerError> {
        let token = self.token(contract);
        let symbol = token.symbol().call().await.map_err(query_error)?;
        let decimals = token.decimals().call().await.map_err(query_error)?;
        Ok(TokenMetadata::builder()
            .symbol(symbol)
            .decimals(decimals)
            .build())
    }

    async fn token_balance(&self, contract: Address) -> Result<BaseUnits, LedgerError> {
        let balance = self
            .token(contract)
            .balance_of(self.client.address())
            .call()
            .await
            .map_err(query_error)?;
        to_base_units(balance)
    }

    async fn send_token(
        &self,
        contract: Address,
        recipient: Address,
        amount: BaseUnits,
    ) -> Result<TxHash, LedgerError> {
        let token = self.token(contract);
        let call = token.transfer(h160(recipient), U256::from(amount));
        let pending = call.send().await.map_err(submission_error)?;
        await_confirmation(pending).await
    }
}
