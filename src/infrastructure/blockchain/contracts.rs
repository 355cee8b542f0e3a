//! # Contract ABIs
//!
//! Fixed contract addresses and call-data encoders for the ERC-20, bridge
//! and staking calls the wallet issues.
//!
//! Encoding follows the usual layout: a 4-byte selector derived from the
//! canonical signature followed by `ethers::abi::encode` of the arguments.

use ethers::abi::{Token, encode};
use ethers::types::{Address, Bytes, H160, U256};
use ethers::utils::id;

/// L1 standard bridge on BSC.
pub const L1_STANDARD_BRIDGE: Address = H160([
    0xf0, 0x5f, 0x0e, 0x43, 0x62, 0x85, 0x9c, 0x33, 0x31, 0xcb, 0x93, 0x95, 0xcb, 0xc2, 0x01, 0xe3,
    0xfa, 0x67, 0x57, 0xea,
]);

/// L2 standard bridge predeploy on opBNB.
pub const L2_STANDARD_BRIDGE: Address = H160([
    0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x10,
]);

/// Token address the L2 bridge uses for the native currency.
pub const L2_NATIVE_TOKEN: Address = H160([
    0xde, 0xad, 0xde, 0xad, 0xde, 0xad, 0xde, 0xad, 0xde, 0xad, 0xde, 0xad, 0xde, 0xad, 0xde, 0xad,
    0xde, 0xad, 0x00, 0x00,
]);

/// Validator staking hub on BSC.
pub const STAKE_HUB: Address = H160([
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x20, 0x02,
]);

/// ERC-20 method signatures.
pub mod erc20 {
    /// `transfer(address,uint256)`
    pub const TRANSFER: &str = "transfer(address,uint256)";
    /// `balanceOf(address)`
    pub const BALANCE_OF: &str = "balanceOf(address)";
    /// `allowance(address,address)`
    pub const ALLOWANCE: &str = "allowance(address,address)";
    /// `decimals()`
    pub const DECIMALS: &str = "decimals()";
    /// `increaseAllowance(address,uint256)`
    pub const INCREASE_ALLOWANCE: &str = "increaseAllowance(address,uint256)";
}

/// Bridge method signatures.
pub mod bridge {
    /// Native deposit to the sender.
    pub const DEPOSIT_ETH: &str = "depositETH(uint32,bytes)";
    /// Native deposit to a recipient.
    pub const DEPOSIT_ETH_TO: &str = "depositETHTo(address,uint32,bytes)";
    /// ERC-20 deposit to the sender.
    pub const DEPOSIT_ERC20: &str = "depositERC20(address,address,uint256,uint32,bytes)";
    /// ERC-20 deposit to a recipient.
    pub const DEPOSIT_ERC20_TO: &str =
        "depositERC20To(address,address,address,uint256,uint32,bytes)";
    /// Withdrawal to the sender.
    pub const WITHDRAW: &str = "withdraw(address,uint256,uint32,bytes)";
    /// Withdrawal to a recipient.
    pub const WITHDRAW_TO: &str = "withdrawTo(address,address,uint256,uint32,bytes)";
}

/// Staking hub method signatures.
pub mod stake {
    /// `delegate(address,bool)`
    pub const DELEGATE: &str = "delegate(address,bool)";
    /// `undelegate(address,uint256)`
    pub const UNDELEGATE: &str = "undelegate(address,uint256)";
    /// `redelegate(address,address,uint256,bool)`
    pub const REDELEGATE: &str = "redelegate(address,address,uint256,bool)";
    /// `claim(address,uint256)`
    pub const CLAIM: &str = "claim(address,uint256)";
}

/// Returns the 4-byte selector of a canonical signature.
#[must_use]
pub fn selector(signature: &str) -> [u8; 4] {
    id(signature)
}

/// Encodes a call: selector followed by the ABI-encoded arguments.
#[must_use]
pub fn encode_call(signature: &str, args: &[Token]) -> Bytes {
    let encoded = encode(args);
    let mut calldata = Vec::with_capacity(4 + encoded.len());
    calldata.extend_from_slice(&selector(signature));
    calldata.extend_from_slice(&encoded);
    Bytes::from(calldata)
}

fn uint32(value: u32) -> Token {
    Token::Uint(U256::from(value))
}

fn empty_bytes() -> Token {
    Token::Bytes(Vec::new())
}

// ============================================================================
// ERC-20
// ============================================================================

/// `transfer(to, amount)`
#[must_use]
pub fn erc20_transfer(to: Address, amount: U256) -> Bytes {
    encode_call(erc20::TRANSFER, &[Token::Address(to), Token::Uint(amount)])
}

/// `balanceOf(owner)`
#[must_use]
pub fn erc20_balance_of(owner: Address) -> Bytes {
    encode_call(erc20::BALANCE_OF, &[Token::Address(owner)])
}

/// `allowance(owner, spender)`
#[must_use]
pub fn erc20_allowance(owner: Address, spender: Address) -> Bytes {
    encode_call(
        erc20::ALLOWANCE,
        &[Token::Address(owner), Token::Address(spender)],
    )
}

/// `decimals()`
#[must_use]
pub fn erc20_decimals() -> Bytes {
    encode_call(erc20::DECIMALS, &[])
}

/// `increaseAllowance(spender, delta)`
#[must_use]
pub fn erc20_increase_allowance(spender: Address, delta: U256) -> Bytes {
    encode_call(
        erc20::INCREASE_ALLOWANCE,
        &[Token::Address(spender), Token::Uint(delta)],
    )
}

// ============================================================================
// Bridge
// ============================================================================

/// `depositETH(minGasLimit, extraData)`
#[must_use]
pub fn deposit_eth(min_gas_limit: u32) -> Bytes {
    encode_call(bridge::DEPOSIT_ETH, &[uint32(min_gas_limit), empty_bytes()])
}

/// `depositETHTo(to, minGasLimit, extraData)`
#[must_use]
pub fn deposit_eth_to(to: Address, min_gas_limit: u32) -> Bytes {
    encode_call(
        bridge::DEPOSIT_ETH_TO,
        &[Token::Address(to), uint32(min_gas_limit), empty_bytes()],
    )
}

/// `depositERC20(l1Token, l2Token, amount, minGasLimit, extraData)`
#[must_use]
pub fn deposit_erc20(l1_token: Address, l2_token: Address, amount: U256, min_gas_limit: u32) -> Bytes {
    encode_call(
        bridge::DEPOSIT_ERC20,
        &[
            Token::Address(l1_token),
            Token::Address(l2_token),
            Token::Uint(amount),
            uint32(min_gas_limit),
            empty_bytes(),
        ],
    )
}

/// `depositERC20To(l1Token, l2Token, to, amount, minGasLimit, extraData)`
#[must_use]
pub fn deposit_erc20_to(
    l1_token: Address,
    l2_token: Address,
    to: Address,
    amount: U256,
    min_gas_limit: u32,
) -> Bytes {
    encode_call(
        bridge::DEPOSIT_ERC20_TO,
        &[
            Token::Address(l1_token),
            Token::Address(l2_token),
            Token::Address(to),
            Token::Uint(amount),
            uint32(min_gas_limit),
            empty_bytes(),
        ],
    )
}

/// `withdraw(l2Token, amount, minGasLimit, extraData)`
#[must_use]
pub fn withdraw(l2_token: Address, amount: U256, min_gas_limit: u32) -> Bytes {
    encode_call(
        bridge::WITHDRAW,
        &[
            Token::Address(l2_token),
            Token::Uint(amount),
            uint32(min_gas_limit),
            empty_bytes(),
        ],
    )
}

/// `withdrawTo(l2Token, to, amount, minGasLimit, extraData)`
#[must_use]
pub fn withdraw_to(l2_token: Address, to: Address, amount: U256, min_gas_limit: u32) -> Bytes {
    encode_call(
        bridge::WITHDRAW_TO,
        &[
            Token::Address(l2_token),
            Token::Address(to),
            Token::Uint(amount),
            uint32(min_gas_limit),
            empty_bytes(),
        ],
    )
}

// ============================================================================
// Staking
// ============================================================================

/// `delegate(operator, delegateVotePower)`
#[must_use]
pub fn stake_delegate(operator: Address, delegate_vote_power: bool) -> Bytes {
    encode_call(
        stake::DELEGATE,
        &[Token::Address(operator), Token::Bool(delegate_vote_power)],
    )
}

/// `undelegate(operator, shares)`
#[must_use]
pub fn stake_undelegate(operator: Address, shares: U256) -> Bytes {
    encode_call(
        stake::UNDELEGATE,
        &[Token::Address(operator), Token::Uint(shares)],
    )
}

/// `redelegate(from, to, shares, delegateVotePower)`
#[must_use]
pub fn stake_redelegate(
    from: Address,
    to: Address,
    shares: U256,
    delegate_vote_power: bool,
) -> Bytes {
    encode_call(
        stake::REDELEGATE,
        &[
            Token::Address(from),
            Token::Address(to),
            Token::Uint(shares),
            Token::Bool(delegate_vote_power),
        ],
    )
}

/// `claim(operator, requestNumber)`; zero claims every matured request.
#[must_use]
pub fn stake_claim(operator: Address, request_number: U256) -> Bytes {
    encode_call(
        stake::CLAIM,
        &[Token::Address(operator), Token::Uint(request_number)],
    )
}

// ============================================================================
// Decoding
// ============================================================================

/// Decodes a single `uint256` return value.
#[must_use]
pub fn decode_u256(data: &[u8]) -> Option<U256> {
    let word = data.get(0..32)?;
    Some(U256::from_big_endian(word))
}

/// Decodes a `uint8` return value such as `decimals()`.
#[must_use]
pub fn decode_u8(data: &[u8]) -> Option<u8> {
    let value = decode_u256(data)?;
    if value > U256::from(u8::MAX) {
        return None;
    }
    u8::try_from(value.low_u64()).ok()
}

/// Returns the argument words of encoded call data, selector stripped.
#[must_use]
pub fn call_args(data: &[u8]) -> Option<Vec<U256>> {
    let args = data.get(4..)?;
    if args.len() % 32 != 0 {
        return None;
    }
    Some(args.chunks(32).map(U256::from_big_endian).collect())
}
