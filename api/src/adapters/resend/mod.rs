//! Resend adapter
//!
//! Implementation of the Mailer port for the Resend email API.

pub mod client;

pub use client::ResendMailer;
