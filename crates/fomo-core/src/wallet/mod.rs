//! Wallet identity and the server-side registration record.

mod address;
mod record;

pub use address::WalletAddress;
pub use record::{WalletCheck, WalletRegistrationRequest};
