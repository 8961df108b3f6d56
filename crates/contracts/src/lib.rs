//! Smart contract interfaces of the entry point (v0.7), the Kernel account (v3.1), its factory
//! and ERC-20 tokens.

pub mod entry_point;
mod error;
mod gen;
pub mod kernel;
pub mod kernel_factory;

pub use entry_point::EntryPoint;
pub use error::{decode_revert_error, decode_revert_string, ContractCallError};
pub use gen::{entry_point_api, erc20, kernel_api, kernel_factory_api, ERC20};
pub use kernel::KernelEncodingError;
pub use kernel_factory::KernelFactory;
