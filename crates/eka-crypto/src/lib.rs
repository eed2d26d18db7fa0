#![forbid(unsafe_code)]

pub mod hash;
pub mod keys;
pub mod signature;

#[cfg(test)]
mod proptests;
