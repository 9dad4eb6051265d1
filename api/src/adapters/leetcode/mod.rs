//! LeetCode adapter
//!
//! Implementation of the LeetCode statistics client.

pub mod client;

pub use client::LeetCodeClientImpl;
