//! Account repository interface and test double.

mod mock;
#[path = "trait.rs"]
mod trait_;

pub use mock::MockAccountRepository;
pub use trait_::AccountRepository;
