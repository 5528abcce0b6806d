// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod faceid;
pub mod identity;
pub mod qr;
pub mod rotation;
pub mod token;

pub use faceid::{DeleteOutcome, FaceIdClient};
pub use identity::{IdentityClient, IdentityUser};
pub use rotation::{QrFrame, RotationFeed};
pub use token::TokenSigner;
