//! Constants shared across tests.
//!
//! Placeholder values, not real credentials.

/// Secret used to sign and verify session tokens in tests.
pub static TEST_JWT_SECRET: &str = "canteen_test_jwt_secret";

/// Plain text password stored (hashed) on fixture restaurants.
pub static TEST_PASSWORD: &str = "correct horse battery staple";

/// bcrypt cost used by fixtures, kept at the minimum so tests stay fast.
pub static TEST_BCRYPT_COST: u32 = 4;
