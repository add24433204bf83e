#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;
#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

pub mod constants;
pub mod contract;
pub mod dependencies;
pub mod errors;
pub mod events;
pub mod gateway;
pub mod oracle;
pub mod reserve;
pub mod storage;
pub mod types;
pub mod validator;

pub use contract::*;

#[cfg(test)]
mod tests;
