//! Ephemeral-key request authentication.
//!
//! A primary account (an externally controlled wallet) certifies a fresh
//! secp256k1 keypair with one delegated signature. Each HTTP request is then
//! signed with the ephemeral private key, and the server validates the
//! per-request signature together with the certificate, recovering the
//! primary address without ever seeing a private key.
//!
//! This crate implements:
//! - Ephemeral key issuance against an injected account provider
//! - Per-request header signing
//! - The server-side validation pipeline
//! - Certificate and identity string codecs

#![forbid(unsafe_code)]

// Protocol operations
pub mod issuer;
pub mod signer;
pub mod validator;

// Codecs
pub mod certificate;
pub mod identity;

// Supporting modules
pub mod config;
pub mod digest;
pub mod network;
pub mod provider;
pub mod types;

// Test utilities
pub mod harness;
