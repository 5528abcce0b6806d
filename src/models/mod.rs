// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod faceid;
pub mod preferences;
pub mod user;

pub use faceid::EnrollmentReceipt;
pub use preferences::Preferences;
pub use user::UserProfile;
