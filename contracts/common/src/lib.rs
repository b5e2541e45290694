//! Shared helpers for the lock-staking contract suite.
//!
//! This crate provides:
//! - [`ownable`]: single-owner bookkeeping in instance storage. Contracts
//!   call these helpers after `require_auth()` and map a `false`/`None`
//!   outcome onto their own error enum.

#![no_std]

pub mod ownable;

pub use ownable::*;
