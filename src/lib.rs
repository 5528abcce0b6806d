// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! QRTeller: rotating-QR terminal authentication with FaceID enrollment
//!
//! This crate provides the backend API for bank-account holders to log in,
//! obtain short-lived rotating QR tokens for terminal authentication, and
//! manage an optional facial-recognition credential.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;
use services::{FaceIdClient, IdentityClient, TokenSigner};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub identity: IdentityClient,
    pub faceid: FaceIdClient,
    pub signer: TokenSigner,
}
