//! # Use Case Scenario Tests
//!
//! End-to-end flows through the orchestrators against the in-memory ledger.
//!
//! # Test Categories
//!
//! - **Bridge**: every call shape, allowance handling, failure wrapping
//! - **Stake**: chain gating, validation, dispatch
//! - **Transfer**: explicit amounts and balance sweeps
//! - **Balance**: balance views and the wallet summary

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::sync::Arc;

use ethers::types::{Address, TxHash, U256};

use crate::application::dto::{BridgeRequest, StakeAction, StakeRequest, TransferRequest};
use crate::application::services::TransactionDispatcher;
use crate::application::use_cases::{
    BalanceQueries, BridgeOrchestrator, StakeOrchestrator, TransferOrchestrator,
};
use crate::domain::errors::{AllowanceIncrease, WalletError};
use crate::domain::value_objects::{ChainName, SupportedChain};
use crate::infrastructure::blockchain::contracts::{self, bridge, erc20, selector, stake};
use crate::infrastructure::blockchain::registry::ChainRegistry;
use crate::infrastructure::blockchain::tokens::TokenRegistry;
use crate::test_support::{
    MockClientFactory, MockLedger, addr, address_arg, args_of, dev_account, ether,
};

const FEE: u64 = 2_000_000_000_000_000;
const MIN_GAS_LIMIT: u32 = 1;

struct Harness {
    ledger: Arc<MockLedger>,
    factory: Arc<MockClientFactory>,
    registry: Arc<ChainRegistry>,
    dispatcher: TransactionDispatcher,
}

impl Harness {
    fn new() -> Self {
        let ledger = MockLedger::new();
        let factory = MockClientFactory::new(ledger.clone());
        let registry = Arc::new(ChainRegistry::new(dev_account(), factory.clone()));
        let dispatcher = TransactionDispatcher::new(registry.clone());
        Self {
            ledger,
            factory,
            registry,
            dispatcher,
        }
    }

    fn sender(&self) -> Address {
        self.dispatcher.sender()
    }

    fn bridge(&self) -> BridgeOrchestrator {
        BridgeOrchestrator::new(self.dispatcher.clone(), U256::from(FEE), MIN_GAS_LIMIT)
    }

    fn stake(&self) -> StakeOrchestrator {
        StakeOrchestrator::new(self.dispatcher.clone())
    }

    fn tokens(&self) -> Arc<TokenRegistry> {
        Arc::new(TokenRegistry::with_common_tokens().unwrap())
    }

    fn transfer(&self) -> TransferOrchestrator {
        TransferOrchestrator::new(self.dispatcher.clone(), self.tokens())
    }

    fn queries(&self) -> BalanceQueries {
        BalanceQueries::new(self.dispatcher.clone(), self.tokens())
    }
}

fn hex(address: Address) -> String {
    format!("{address:?}")
}

fn l1_token() -> Address {
    addr(0x11)
}

fn l2_token() -> Address {
    addr(0x22)
}

fn recipient() -> Address {
    addr(0xbeef)
}

// ============================================================================
// Bridge
// ============================================================================

#[tokio::test]
async fn native_deposit_to_self_end_to_end() {
    let h = Harness::new();
    let request = BridgeRequest::new("bsc", "opBNB", "1");

    let result = h.bridge().bridge(&request).await.unwrap();

    let sent = h.ledger.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, contracts::L1_STANDARD_BRIDGE);
    assert_eq!(sent[0].selector(), Some(selector(bridge::DEPOSIT_ETH)));
    assert_eq!(sent[0].value, ether(1));
    assert_eq!(args_of(&sent[0])[0], U256::from(MIN_GAS_LIMIT));
    assert_eq!(h.ledger.simulated().len(), 1);

    assert_eq!(result.to, contracts::L1_STANDARD_BRIDGE);
    assert_eq!(result.value, ether(1));
    assert_eq!(result.from, h.sender());
    assert_eq!(result.chain, "bsc");
}

#[tokio::test]
async fn recipient_equal_to_sender_is_self_bridge() {
    let h = Harness::new();
    let request = BridgeRequest::new("bsc", "opBNB", "1").with_recipient(hex(h.sender()));

    h.bridge().bridge(&request).await.unwrap();

    assert_eq!(
        h.ledger.sent()[0].selector(),
        Some(selector(bridge::DEPOSIT_ETH))
    );
}

#[tokio::test]
async fn native_deposit_to_recipient() {
    let h = Harness::new();
    let request = BridgeRequest::new("bsc", "opBNB", "0.5").with_recipient(hex(recipient()));

    h.bridge().bridge(&request).await.unwrap();

    let sent = h.ledger.sent();
    assert_eq!(sent[0].selector(), Some(selector(bridge::DEPOSIT_ETH_TO)));
    assert_eq!(sent[0].value, ether(1) / 2);
    assert_eq!(address_arg(args_of(&sent[0])[0]), recipient());
}

#[tokio::test]
async fn erc20_deposit_raises_allowance_then_deposits() {
    let h = Harness::new();
    h.ledger.set_decimals(l1_token(), 6);
    let request =
        BridgeRequest::new("bsc", "opBNB", "2.5").with_tokens(hex(l1_token()), hex(l2_token()));

    h.bridge().bridge(&request).await.unwrap();

    let sent = h.ledger.sent();
    assert_eq!(sent.len(), 2);

    assert_eq!(sent[0].to, l1_token());
    assert_eq!(sent[0].selector(), Some(selector(erc20::INCREASE_ALLOWANCE)));
    let allowance_args = args_of(&sent[0]);
    assert_eq!(address_arg(allowance_args[0]), contracts::L1_STANDARD_BRIDGE);
    assert_eq!(allowance_args[1], U256::from(2_500_000));

    assert_eq!(sent[1].to, contracts::L1_STANDARD_BRIDGE);
    assert_eq!(sent[1].selector(), Some(selector(bridge::DEPOSIT_ERC20)));
    assert_eq!(sent[1].value, U256::zero());
    let args = args_of(&sent[1]);
    assert_eq!(address_arg(args[0]), l1_token());
    assert_eq!(address_arg(args[1]), l2_token());
    assert_eq!(args[2], U256::from(2_500_000));
    assert_eq!(args[3], U256::from(MIN_GAS_LIMIT));
}

#[tokio::test]
async fn erc20_deposit_to_recipient_with_partial_allowance() {
    let h = Harness::new();
    h.ledger.set_decimals(l1_token(), 18);
    h.ledger.set_allowance(
        l1_token(),
        h.sender(),
        contracts::L1_STANDARD_BRIDGE,
        ether(1),
    );
    let request = BridgeRequest::new("bsc", "opBNB", "3")
        .with_tokens(hex(l1_token()), hex(l2_token()))
        .with_recipient(hex(recipient()));

    h.bridge().bridge(&request).await.unwrap();

    let sent = h.ledger.sent();
    assert_eq!(sent.len(), 2);
    // only the shortfall is approved
    assert_eq!(args_of(&sent[0])[1], ether(2));

    assert_eq!(sent[1].selector(), Some(selector(bridge::DEPOSIT_ERC20_TO)));
    assert_eq!(sent[1].value, U256::zero());
    let args = args_of(&sent[1]);
    assert_eq!(address_arg(args[2]), recipient());
    assert_eq!(args[3], ether(3));
}

#[tokio::test]
async fn erc20_deposit_with_sufficient_allowance_skips_approval() {
    let h = Harness::new();
    h.ledger.set_decimals(l1_token(), 18);
    h.ledger.set_allowance(
        l1_token(),
        h.sender(),
        contracts::L1_STANDARD_BRIDGE,
        ether(10),
    );
    let request =
        BridgeRequest::new("bsc", "opBNB", "3").with_tokens(hex(l1_token()), hex(l2_token()));

    h.bridge().bridge(&request).await.unwrap();

    let sent = h.ledger.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].selector(), Some(selector(bridge::DEPOSIT_ERC20)));
}

#[tokio::test]
async fn native_withdrawal_to_self_adds_fee() {
    let h = Harness::new();
    let request = BridgeRequest::new("opBNB", "bsc", "1");

    let result = h.bridge().bridge(&request).await.unwrap();

    let sent = h.ledger.sent();
    assert_eq!(sent[0].to, contracts::L2_STANDARD_BRIDGE);
    assert_eq!(sent[0].selector(), Some(selector(bridge::WITHDRAW)));
    assert_eq!(sent[0].value, ether(1) + U256::from(FEE));
    let args = args_of(&sent[0]);
    assert_eq!(address_arg(args[0]), contracts::L2_NATIVE_TOKEN);
    assert_eq!(args[1], ether(1));
    assert_eq!(result.chain, "opBNB");
}

#[tokio::test]
async fn native_withdrawal_to_recipient_adds_fee() {
    let h = Harness::new();
    let request = BridgeRequest::new("opBNB", "bsc", "1").with_recipient(hex(recipient()));

    h.bridge().bridge(&request).await.unwrap();

    let sent = h.ledger.sent();
    assert_eq!(sent[0].selector(), Some(selector(bridge::WITHDRAW_TO)));
    assert_eq!(sent[0].value, ether(1) + U256::from(FEE));
    let args = args_of(&sent[0]);
    assert_eq!(address_arg(args[0]), contracts::L2_NATIVE_TOKEN);
    assert_eq!(address_arg(args[1]), recipient());
}

#[tokio::test]
async fn erc20_withdrawal_to_self_adds_fee() {
    let h = Harness::new();
    h.ledger.set_decimals(l2_token(), 18);
    let request =
        BridgeRequest::new("opBNB", "bsc", "4").with_tokens(hex(l2_token()), hex(l1_token()));

    h.bridge().bridge(&request).await.unwrap();

    let sent = h.ledger.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(
        address_arg(args_of(&sent[0])[0]),
        contracts::L2_STANDARD_BRIDGE
    );
    assert_eq!(sent[1].selector(), Some(selector(bridge::WITHDRAW)));
    assert_eq!(sent[1].value, ether(4) + U256::from(FEE));
    assert_eq!(address_arg(args_of(&sent[1])[0]), l2_token());
}

#[tokio::test]
async fn erc20_withdrawal_to_recipient_sends_fee_only() {
    // Known quirk: this shape attaches the delegation fee alone as value,
    // unlike the three sibling withdrawal shapes.
    let h = Harness::new();
    h.ledger.set_decimals(l2_token(), 18);
    let request = BridgeRequest::new("opBNB", "bsc", "4")
        .with_tokens(hex(l2_token()), hex(l1_token()))
        .with_recipient(hex(recipient()));

    let result = h.bridge().bridge(&request).await.unwrap();

    let sent = h.ledger.sent();
    assert_eq!(sent[1].to, contracts::L2_STANDARD_BRIDGE);
    assert_eq!(sent[1].selector(), Some(selector(bridge::WITHDRAW_TO)));
    assert_eq!(sent[1].value, U256::from(FEE));
    let args = args_of(&sent[1]);
    assert_eq!(address_arg(args[0]), l2_token());
    assert_eq!(address_arg(args[1]), recipient());
    assert_eq!(args[2], ether(4));
    assert_eq!(result.value, U256::from(FEE));
}

#[tokio::test]
async fn unsupported_direction_makes_no_network_calls() {
    let h = Harness::new();

    for (from, to) in [
        ("bsc", "bsc"),
        ("opBNB", "opBNB"),
        ("bscTestnet", "opBNBTestnet"),
        ("opBNBTestnet", "bsc"),
    ] {
        let request = BridgeRequest::new(from, to, "1");
        let err = h.bridge().bridge(&request).await.unwrap_err();

        assert!(matches!(err, WalletError::BridgeFailed { .. }), "{from} -> {to}");
        assert!(matches!(
            err.root_cause(),
            WalletError::UnsupportedDirection { .. }
        ));
        assert!(err.is_validation());
        assert!(err.allowance_tx().is_none());
    }

    assert_eq!(h.ledger.network_calls(), 0);
    assert!(h.factory.built_urls().is_empty());
}

#[tokio::test]
async fn malformed_bridge_inputs_fail_before_network() {
    let h = Harness::new();

    let missing_amount = BridgeRequest::new("bsc", "opBNB", "");
    let err = h.bridge().bridge(&missing_amount).await.unwrap_err();
    assert_eq!(err.root_cause(), &WalletError::MissingField("amount"));

    let bad_recipient = BridgeRequest::new("bsc", "opBNB", "1").with_recipient("alice.bnb");
    let err = h.bridge().bridge(&bad_recipient).await.unwrap_err();
    assert!(matches!(err.root_cause(), WalletError::InvalidAddress(_)));

    let bad_amount = BridgeRequest::new("bsc", "opBNB", "1.2.3");
    let err = h.bridge().bridge(&bad_amount).await.unwrap_err();
    assert!(matches!(err.root_cause(), WalletError::InvalidAmount(_)));

    assert_eq!(h.ledger.network_calls(), 0);
}

#[tokio::test]
async fn bridge_revert_after_allowance_reports_allowance_tx() {
    let h = Harness::new();
    h.ledger.set_decimals(l1_token(), 18);
    h.ledger.revert_on(bridge::DEPOSIT_ERC20);
    let request =
        BridgeRequest::new("bsc", "opBNB", "1").with_tokens(hex(l1_token()), hex(l2_token()));

    let err = h.bridge().bridge(&request).await.unwrap_err();

    assert!(matches!(
        err.root_cause(),
        WalletError::SimulationReverted(_)
    ));
    assert_eq!(
        err.allowance(),
        Some(AllowanceIncrease::confirmed(TxHash::from_low_u64_be(1)))
    );
    // the confirmed approval is not rolled back
    assert_eq!(h.ledger.sent().len(), 1);
    assert_eq!(
        h.ledger
            .allowance(l1_token(), h.sender(), contracts::L1_STANDARD_BRIDGE),
        ether(1)
    );
}

#[tokio::test]
async fn unconfirmed_allowance_is_reported_on_failure() {
    let h = Harness::new();
    h.ledger.set_decimals(l1_token(), 18);
    h.ledger.set_fail_receipt(true);
    let request =
        BridgeRequest::new("bsc", "opBNB", "1").with_tokens(hex(l1_token()), hex(l2_token()));

    let err = h.bridge().bridge(&request).await.unwrap_err();

    assert!(matches!(err.root_cause(), WalletError::SubmissionFailed(_)));
    assert_eq!(
        err.allowance(),
        Some(AllowanceIncrease::submitted(TxHash::from_low_u64_be(1)))
    );
    assert!(err.to_string().contains("unconfirmed"));
    // the bridge call itself is never sent
    assert_eq!(h.ledger.sent().len(), 1);
}

#[tokio::test]
async fn unreadable_decimals_fail_the_bridge() {
    let h = Harness::new();
    let request =
        BridgeRequest::new("bsc", "opBNB", "1").with_tokens(hex(l1_token()), hex(l2_token()));

    let err = h.bridge().bridge(&request).await.unwrap_err();

    assert!(matches!(err.root_cause(), WalletError::ReadFailed(_)));
    assert!(err.allowance_tx().is_none());
    assert!(h.ledger.sent().is_empty());
}

#[tokio::test]
async fn bridge_submission_failure_is_wrapped() {
    let h = Harness::new();
    h.ledger.set_fail_send(true);

    let err = h
        .bridge()
        .bridge(&BridgeRequest::new("opBNB", "bsc", "1"))
        .await
        .unwrap_err();

    assert!(matches!(err, WalletError::BridgeFailed { .. }));
    assert!(matches!(err.root_cause(), WalletError::SubmissionFailed(_)));
}

// ============================================================================
// Stake
// ============================================================================

fn validator() -> Address {
    addr(0xa1)
}

#[tokio::test]
async fn delegate_sends_amount_to_stake_hub() {
    let h = Harness::new();
    let request = StakeRequest::new("bsc", StakeAction::Delegate)
        .with_amount("1")
        .with_to_validator(hex(validator()));

    let result = h.stake().stake(&request).await.unwrap();

    let sent = h.ledger.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, contracts::STAKE_HUB);
    assert_eq!(sent[0].selector(), Some(selector(stake::DELEGATE)));
    assert_eq!(sent[0].value, ether(1));
    let args = args_of(&sent[0]);
    assert_eq!(address_arg(args[0]), validator());
    assert_eq!(args[1], U256::one());
    assert_eq!(result.to, contracts::STAKE_HUB);
}

#[tokio::test]
async fn undelegate_and_claim_carry_no_value() {
    let h = Harness::new();

    let undelegate = StakeRequest::new("bsc", StakeAction::Undelegate)
        .with_amount("2")
        .with_from_validator(hex(validator()));
    h.stake().stake(&undelegate).await.unwrap();

    let claim = StakeRequest::new("BSC", StakeAction::Claim)
        .with_amount("9")
        .with_from_validator(hex(validator()));
    h.stake().stake(&claim).await.unwrap();

    let sent = h.ledger.sent();
    assert_eq!(sent[0].selector(), Some(selector(stake::UNDELEGATE)));
    assert_eq!(sent[0].value, U256::zero());
    assert_eq!(args_of(&sent[0])[1], ether(2));

    assert_eq!(sent[1].selector(), Some(selector(stake::CLAIM)));
    assert_eq!(sent[1].value, U256::zero());
    assert_eq!(args_of(&sent[1])[1], U256::zero());
}

#[tokio::test]
async fn staking_off_mainnet_is_unsupported() {
    let h = Harness::new();

    for chain in ["opBNB", "bscTestnet", "opBNBTestnet"] {
        let request = StakeRequest::new(chain, StakeAction::Claim)
            .with_from_validator(hex(validator()));
        let err = h.stake().stake(&request).await.unwrap_err();
        assert!(matches!(err, WalletError::UnsupportedChain(_)), "{chain}");
    }
    assert_eq!(h.ledger.network_calls(), 0);
}

#[tokio::test]
async fn stake_missing_field_fails_before_dispatch() {
    let h = Harness::new();

    let request = StakeRequest::new("bsc", StakeAction::Delegate).with_amount("1");
    let err = h.stake().stake(&request).await.unwrap_err();

    assert_eq!(err, WalletError::MissingField("toValidator"));
    assert_eq!(h.ledger.network_calls(), 0);
}

#[tokio::test]
async fn stake_revert_is_wrapped() {
    let h = Harness::new();
    h.ledger.revert_on(stake::REDELEGATE);
    let request = StakeRequest::new("bsc", StakeAction::Redelegate)
        .with_amount("1")
        .with_from_validator(hex(validator()))
        .with_to_validator(hex(addr(0xa2)));

    let err = h.stake().stake(&request).await.unwrap_err();

    assert!(matches!(err, WalletError::StakeFailed { .. }));
    assert!(matches!(
        err.root_cause(),
        WalletError::SimulationReverted(_)
    ));
    assert!(h.ledger.sent().is_empty());
}

// ============================================================================
// Transfer
// ============================================================================

#[tokio::test]
async fn native_sweep_reserves_gas_and_pins_it() {
    let h = Harness::new();
    let gas_price = U256::from(5_000_000_000u64);
    h.ledger.set_native_balance(h.sender(), ether(1));
    h.ledger.set_gas_price(gas_price);

    let request = TransferRequest::new("bsc", hex(recipient()));
    let result = h.transfer().transfer(&request).await.unwrap();

    let expected = ether(1) - gas_price * U256::from(21_000);
    let sent = h.ledger.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, recipient());
    assert_eq!(sent[0].value, expected);
    assert_eq!(sent[0].gas, Some(U256::from(21_000)));
    assert_eq!(sent[0].gas_price, Some(gas_price));
    assert_eq!(result.value, expected);
}

#[tokio::test]
async fn native_sweep_below_reserved_gas_is_rejected() {
    let h = Harness::new();
    h.ledger.set_native_balance(h.sender(), U256::from(1_000));
    h.ledger.set_gas_price(U256::from(1));

    let err = h
        .transfer()
        .transfer(&TransferRequest::new("bsc", hex(recipient())))
        .await
        .unwrap_err();

    assert!(matches!(err, WalletError::InsufficientBalance(_)));
    assert!(h.ledger.sent().is_empty());
}

#[tokio::test]
async fn native_transfer_with_amount_and_data() {
    let h = Harness::new();
    let request = TransferRequest::new("opBNB", hex(recipient()))
        .with_token("BNB")
        .with_amount("0.25")
        .with_data("0xdeadbeef");

    h.transfer().transfer(&request).await.unwrap();

    let sent = h.ledger.sent();
    assert_eq!(sent[0].value, ether(1) / 4);
    assert_eq!(
        sent[0].data.as_ref().map(|d| d.to_vec()),
        Some(vec![0xde, 0xad, 0xbe, 0xef])
    );
    assert_eq!(sent[0].gas, None);
}

#[tokio::test]
async fn erc20_sweep_sends_whole_balance() {
    let h = Harness::new();
    let token = addr(0x70);
    h.ledger.set_token_balance(token, h.sender(), U256::from(777));

    let request = TransferRequest::new("bsc", hex(recipient())).with_token(hex(token));
    h.transfer().transfer(&request).await.unwrap();

    let sent = h.ledger.sent();
    assert_eq!(sent[0].to, token);
    assert_eq!(sent[0].selector(), Some(selector(erc20::TRANSFER)));
    assert_eq!(sent[0].value, U256::zero());
    let args = args_of(&sent[0]);
    assert_eq!(address_arg(args[0]), recipient());
    assert_eq!(args[1], U256::from(777));
}

#[tokio::test]
async fn erc20_amount_uses_token_decimals() {
    let h = Harness::new();
    let tokens = TokenRegistry::with_common_tokens().unwrap();
    let usdt = tokens
        .get_address("USDT", &ChainName::from(SupportedChain::Bsc))
        .unwrap();
    h.ledger.set_decimals(usdt, 6);

    let request = TransferRequest::new("bsc", hex(recipient()))
        .with_token("usdt")
        .with_amount("12.5");
    h.transfer().transfer(&request).await.unwrap();

    let sent = h.ledger.sent();
    assert_eq!(sent[0].to, usdt);
    assert_eq!(args_of(&sent[0])[1], U256::from(12_500_000));
}

#[tokio::test]
async fn call_data_on_token_transfer_is_rejected() {
    let h = Harness::new();
    let request = TransferRequest::new("bsc", hex(recipient()))
        .with_token("USDT")
        .with_amount("1")
        .with_data("0x01");

    let err = h.transfer().transfer(&request).await.unwrap_err();

    assert!(matches!(err, WalletError::InvalidRequest(_)));
    assert_eq!(h.ledger.network_calls(), 0);
}

#[tokio::test]
async fn unknown_token_symbol_fails_resolution() {
    let h = Harness::new();
    let request = TransferRequest::new("opBNB", hex(recipient())).with_token("FDUSD");

    let err = h.transfer().transfer(&request).await.unwrap_err();
    assert!(matches!(err, WalletError::TokenResolutionFailed(_)));
}

// ============================================================================
// Balance and summary
// ============================================================================

#[tokio::test]
async fn balance_defaults_to_signing_account() {
    let h = Harness::new();
    h.ledger.set_native_balance(h.sender(), ether(3));

    let balance = h.queries().balance("opBNB", None, None).await.unwrap();

    assert_eq!(balance.owner, h.sender());
    assert_eq!(balance.symbol, "BNB");
    assert_eq!(balance.decimals, 18);
    assert_eq!(balance.formatted, "3");
    assert_eq!(balance.raw, ether(3).to_string());
}

#[tokio::test]
async fn token_balance_uses_registry_symbol() {
    let h = Harness::new();
    let wbnb = TokenRegistry::with_common_tokens()
        .unwrap()
        .get_address("WBNB", &ChainName::from(SupportedChain::Bsc))
        .unwrap();
    h.ledger.set_token_balance(wbnb, addr(5), U256::from(1_500_000));
    h.ledger.set_decimals(wbnb, 6);

    let balance = h
        .queries()
        .balance("bsc", Some("wbnb"), Some(&hex(addr(5))))
        .await
        .unwrap();

    assert_eq!(balance.symbol, "WBNB");
    assert_eq!(balance.token, Some(wbnb));
    assert_eq!(balance.formatted, "1.5");
}

#[tokio::test]
async fn summary_follows_current_chain() {
    let h = Harness::new();
    h.ledger.set_native_balance(h.sender(), ether(2));

    let err = h.queries().summary().await.unwrap_err();
    assert!(matches!(err, WalletError::InvalidRequest(_)));

    h.registry
        .set_current(ChainName::from(SupportedChain::OpBnb))
        .await
        .unwrap();
    let summary = h.queries().summary().await.unwrap();

    assert_eq!(summary.address, h.sender());
    assert_eq!(summary.chain, "opBNB");
    assert_eq!(summary.chain_id, 204);
    assert_eq!(summary.balance.formatted, "2");
}

#[tokio::test]
async fn current_chain_does_not_steer_transactions() {
    let h = Harness::new();
    h.registry
        .set_current(ChainName::from(SupportedChain::OpBnb))
        .await
        .unwrap();

    let result = h
        .bridge()
        .bridge(&BridgeRequest::new("bsc", "opBNB", "1"))
        .await
        .unwrap();

    assert_eq!(result.chain, "bsc");
    assert_eq!(result.to, contracts::L1_STANDARD_BRIDGE);
}
