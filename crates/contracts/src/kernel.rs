//! Kernel v3.1 calldata and nonce encoding

use crate::gen::{
    kernel_api::{ExecuteCall, InitializeCall},
    kernel_factory_api::CreateAccountCall,
};
use ethers::{
    abi::{encode, AbiEncode, Token},
    types::{Address, Bytes, U256},
};
use keel_primitives::{
    constants::kernel::{
        CALL_TYPE_BATCH, CALL_TYPE_SINGLE, VALIDATION_TYPE_VALIDATOR, VALIDATOR_MODE_DEFAULT,
        VALIDATOR_TYPE_ROOT,
    },
    Call,
};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KernelEncodingError {
    #[error("at least one call is required")]
    NoCalls,
}

/// `ValidationId` of a validator plugin: `0x01 ‖ validator`
pub fn root_validator_id(validator: Address) -> [u8; 21] {
    let mut id = [0u8; 21];
    id[0] = VALIDATION_TYPE_VALIDATOR;
    id[1..].copy_from_slice(validator.as_bytes());
    id
}

/// Salt passed to the factory for the given account index
pub fn account_salt(index: u64) -> [u8; 32] {
    let mut salt = [0u8; 32];
    U256::from(index).to_big_endian(&mut salt);
    salt
}

/// `initialize` calldata making `owner` the signer of the root ECDSA validator
pub fn initialize_data(validator: Address, owner: Address) -> Bytes {
    InitializeCall {
        root_validator: root_validator_id(validator),
        hook: Address::zero(),
        validator_data: owner.as_bytes().to_vec().into(),
        hook_data: Bytes::default(),
        init_config: vec![],
    }
    .encode()
    .into()
}

/// Factory calldata deploying the account (`factoryData` of the user operation)
pub fn create_account_data(init_data: Bytes, index: u64) -> Bytes {
    CreateAccountCall { data: init_data, salt: account_salt(index) }.encode().into()
}

/// Entry point nonce key: `mode ‖ type ‖ validator ‖ uint16 key` (uint192)
pub fn nonce_key(validator: Address, key: u16) -> U256 {
    let mut buf = [0u8; 24];
    buf[0] = VALIDATOR_MODE_DEFAULT;
    buf[1] = VALIDATOR_TYPE_ROOT;
    buf[2..22].copy_from_slice(validator.as_bytes());
    buf[22..24].copy_from_slice(&key.to_be_bytes());
    U256::from_big_endian(&buf)
}

/// ERC-7579 execution mode with default exec type and no selector/payload
pub fn exec_mode(call_type: u8) -> [u8; 32] {
    let mut mode = [0u8; 32];
    mode[0] = call_type;
    mode
}

/// Encodes calls into a Kernel `execute` call, a batch if there is more than one
pub fn encode_calls(calls: &[Call]) -> Result<Bytes, KernelEncodingError> {
    let call = match calls {
        [] => return Err(KernelEncodingError::NoCalls),
        [single] => ExecuteCall {
            exec_mode: exec_mode(CALL_TYPE_SINGLE),
            execution_calldata: [
                single.to.as_bytes().to_vec(),
                single.value.encode(),
                single.data.to_vec(),
            ]
            .concat()
            .into(),
        },
        batch => {
            let executions = batch
                .iter()
                .map(|c| {
                    Token::Tuple(vec![
                        Token::Address(c.to),
                        Token::Uint(c.value),
                        Token::Bytes(c.data.to_vec()),
                    ])
                })
                .collect();
            ExecuteCall {
                exec_mode: exec_mode(CALL_TYPE_BATCH),
                execution_calldata: encode(&[Token::Array(executions)]).into(),
            }
        }
    };

    Ok(call.encode().into())
}
