//! # Test Support
//!
//! In-memory chain clients shared by unit and scenario tests.
//!
//! [`MockLedger`] answers ERC-20 reads from tables keyed by selector and
//! records every simulated and submitted call, so tests can assert on the
//! exact transactions an orchestrator produced. [`MockClientFactory`] hands
//! out clients bound to a descriptor's URL that all share one ledger.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ethers::types::{Address, Bytes, TxHash, U256};

use crate::domain::entities::{Account, CallRequest};
use crate::domain::value_objects::ChainDescriptor;
use crate::infrastructure::blockchain::client::{
    ChainReader, ChainWriter, ClientError, ClientFactory, ClientResult,
};
use crate::infrastructure::blockchain::contracts::{self, call_args, erc20, selector};

/// Well-known development key; never funded on a real network.
pub const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcbc84c2a8c4f1b23f";

/// Returns the development account.
pub fn dev_account() -> Account {
    Account::from_private_key(DEV_KEY).unwrap()
}

/// Returns a deterministic test address.
pub fn addr(n: u64) -> Address {
    Address::from_low_u64_be(n)
}

/// One whole unit at 18 decimals.
pub fn ether(n: u64) -> U256 {
    U256::from(n) * U256::exp10(18)
}

fn word(value: U256) -> Bytes {
    let mut out = [0u8; 32];
    value.to_big_endian(&mut out);
    Bytes::from(out.to_vec())
}

fn word_address(value: U256) -> Address {
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    Address::from_slice(&bytes[12..])
}

// ============================================================================
// Mock Ledger
// ============================================================================

/// Shared chain state behind mock clients.
#[derive(Debug, Default)]
pub struct MockLedger {
    native_balances: Mutex<HashMap<Address, U256>>,
    token_balances: Mutex<HashMap<(Address, Address), U256>>,
    allowances: Mutex<HashMap<(Address, Address, Address), U256>>,
    decimals: Mutex<HashMap<Address, u8>>,
    gas_price: Mutex<U256>,
    simulated: Mutex<Vec<CallRequest>>,
    sent: Mutex<Vec<CallRequest>>,
    reverting: Mutex<Vec<[u8; 4]>>,
    should_fail_send: Mutex<bool>,
    should_fail_reads: Mutex<bool>,
    should_fail_receipt: Mutex<bool>,
    network_calls: AtomicUsize,
}

impl MockLedger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_native_balance(&self, owner: Address, balance: U256) {
        self.native_balances.lock().unwrap().insert(owner, balance);
    }

    pub fn set_token_balance(&self, token: Address, owner: Address, balance: U256) {
        self.token_balances
            .lock()
            .unwrap()
            .insert((token, owner), balance);
    }

    pub fn set_allowance(&self, token: Address, owner: Address, spender: Address, amount: U256) {
        self.allowances
            .lock()
            .unwrap()
            .insert((token, owner, spender), amount);
    }

    pub fn allowance(&self, token: Address, owner: Address, spender: Address) -> U256 {
        self.allowances
            .lock()
            .unwrap()
            .get(&(token, owner, spender))
            .copied()
            .unwrap_or_default()
    }

    pub fn set_decimals(&self, token: Address, decimals: u8) {
        self.decimals.lock().unwrap().insert(token, decimals);
    }

    pub fn set_gas_price(&self, price: U256) {
        *self.gas_price.lock().unwrap() = price;
    }

    /// Makes simulations of the given method signature revert.
    pub fn revert_on(&self, signature: &str) {
        self.reverting.lock().unwrap().push(selector(signature));
    }

    pub fn set_fail_send(&self, fail: bool) {
        *self.should_fail_send.lock().unwrap() = fail;
    }

    pub fn set_fail_reads(&self, fail: bool) {
        *self.should_fail_reads.lock().unwrap() = fail;
    }

    pub fn set_fail_receipt(&self, fail: bool) {
        *self.should_fail_receipt.lock().unwrap() = fail;
    }

    pub fn simulated(&self) -> Vec<CallRequest> {
        self.simulated.lock().unwrap().clone()
    }

    pub fn sent(&self) -> Vec<CallRequest> {
        self.sent.lock().unwrap().clone()
    }

    /// Total number of RPC calls of any kind.
    pub fn network_calls(&self) -> usize {
        self.network_calls.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.network_calls.fetch_add(1, Ordering::SeqCst);
    }

    fn check_reads(&self) -> ClientResult<()> {
        if *self.should_fail_reads.lock().unwrap() {
            return Err(ClientError::Rpc("mock read failure".to_string()));
        }
        Ok(())
    }

    fn balance(&self, owner: Address) -> ClientResult<U256> {
        self.touch();
        self.check_reads()?;
        Ok(self
            .native_balances
            .lock()
            .unwrap()
            .get(&owner)
            .copied()
            .unwrap_or_default())
    }

    fn price(&self) -> ClientResult<U256> {
        self.touch();
        self.check_reads()?;
        Ok(*self.gas_price.lock().unwrap())
    }

    fn call(&self, request: &CallRequest) -> ClientResult<Bytes> {
        self.touch();
        let data = request.data.clone().unwrap_or_default();
        let sel = request.selector();
        let args = call_args(&data).unwrap_or_default();

        if sel == Some(selector(erc20::BALANCE_OF)) {
            self.check_reads()?;
            let owner = word_address(args[0]);
            let balance = self
                .token_balances
                .lock()
                .unwrap()
                .get(&(request.to, owner))
                .copied()
                .unwrap_or_default();
            return Ok(word(balance));
        }
        if sel == Some(selector(erc20::ALLOWANCE)) {
            self.check_reads()?;
            let owner = word_address(args[0]);
            let spender = word_address(args[1]);
            return Ok(word(self.allowance(request.to, owner, spender)));
        }
        if sel == Some(selector(erc20::DECIMALS)) {
            self.check_reads()?;
            return match self.decimals.lock().unwrap().get(&request.to) {
                Some(decimals) => Ok(word(U256::from(*decimals))),
                None => Err(ClientError::Reverted("execution reverted".to_string())),
            };
        }

        if let Some(sel) = sel
            && self.reverting.lock().unwrap().contains(&sel)
        {
            return Err(ClientError::Reverted(format!(
                "execution reverted: {}",
                hex_selector(sel)
            )));
        }
        self.simulated.lock().unwrap().push(request.clone());
        Ok(Bytes::new())
    }

    fn send(&self, sender: Address, request: &CallRequest) -> ClientResult<TxHash> {
        self.touch();
        if *self.should_fail_send.lock().unwrap() {
            return Err(ClientError::Rpc("mock send failure".to_string()));
        }

        if request.selector() == Some(selector(erc20::INCREASE_ALLOWANCE)) {
            let data = request.data.clone().unwrap_or_default();
            let args = call_args(&data).unwrap_or_default();
            let spender = word_address(args[0]);
            let current = self.allowance(request.to, sender, spender);
            self.set_allowance(request.to, sender, spender, current + args[1]);
        }

        let mut sent = self.sent.lock().unwrap();
        sent.push(request.clone());
        Ok(TxHash::from_low_u64_be(sent.len() as u64))
    }

    fn receipt(&self, hash: TxHash) -> ClientResult<()> {
        self.touch();
        if *self.should_fail_receipt.lock().unwrap() {
            return Err(ClientError::TransactionFailed {
                hash,
                reason: "mock receipt failure".to_string(),
            });
        }
        Ok(())
    }
}

fn hex_selector(sel: [u8; 4]) -> String {
    sel.iter().map(|b| format!("{b:02x}")).collect()
}

/// Decodes the argument words of a recorded call.
pub fn args_of(request: &CallRequest) -> Vec<U256> {
    let data = request.data.clone().unwrap_or_default();
    contracts::call_args(&data).unwrap_or_default()
}

/// Decodes an address argument word.
pub fn address_arg(word: U256) -> Address {
    word_address(word)
}

// ============================================================================
// Mock Clients
// ============================================================================

/// Client bound to one descriptor, backed by a shared ledger.
#[derive(Debug)]
pub struct MockClient {
    ledger: Arc<MockLedger>,
    rpc_url: String,
    chain_id: u64,
    sender: Address,
}

#[async_trait]
impl ChainReader for MockClient {
    fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    async fn get_balance(&self, owner: Address) -> ClientResult<U256> {
        self.ledger.balance(owner)
    }

    async fn get_gas_price(&self) -> ClientResult<U256> {
        self.ledger.price()
    }

    async fn call(&self, request: &CallRequest) -> ClientResult<Bytes> {
        self.ledger.call(request)
    }
}

#[async_trait]
impl ChainWriter for MockClient {
    fn sender(&self) -> Address {
        self.sender
    }

    async fn send_transaction(&self, request: &CallRequest) -> ClientResult<TxHash> {
        self.ledger.send(self.sender, request)
    }

    async fn wait_for_receipt(&self, hash: TxHash) -> ClientResult<()> {
        self.ledger.receipt(hash)
    }
}

/// Factory handing out [`MockClient`]s over one ledger.
#[derive(Debug)]
pub struct MockClientFactory {
    ledger: Arc<MockLedger>,
    built: Mutex<Vec<String>>,
    should_fail: Mutex<bool>,
}

impl MockClientFactory {
    pub fn new(ledger: Arc<MockLedger>) -> Arc<Self> {
        Arc::new(Self {
            ledger,
            built: Mutex::new(Vec::new()),
            should_fail: Mutex::new(false),
        })
    }

    /// URLs of every client built so far, in order.
    pub fn built_urls(&self) -> Vec<String> {
        self.built.lock().unwrap().clone()
    }

    pub fn set_fail(&self, fail: bool) {
        *self.should_fail.lock().unwrap() = fail;
    }

    fn build(&self, descriptor: &ChainDescriptor, sender: Address) -> ClientResult<MockClient> {
        if *self.should_fail.lock().unwrap() {
            return Err(ClientError::Connection("mock transport failure".to_string()));
        }
        self.built.lock().unwrap().push(descriptor.rpc_url.clone());
        Ok(MockClient {
            ledger: Arc::clone(&self.ledger),
            rpc_url: descriptor.rpc_url.clone(),
            chain_id: descriptor.chain_id,
            sender,
        })
    }
}

impl ClientFactory for MockClientFactory {
    fn read_client(&self, descriptor: &ChainDescriptor) -> ClientResult<Arc<dyn ChainReader>> {
        Ok(Arc::new(self.build(descriptor, Address::zero())?))
    }

    fn write_client(
        &self,
        descriptor: &ChainDescriptor,
        account: &Account,
    ) -> ClientResult<Arc<dyn ChainWriter>> {
        Ok(Arc::new(self.build(descriptor, account.address())?))
    }
}
