//! Mock node, bundler and paymaster for end-to-end tests of the Kernel account client


#[cfg(test)]
mod account_tests;
#[cfg(test)]
mod paymaster_tests;
#[cfg(test)]
mod send_tests;
