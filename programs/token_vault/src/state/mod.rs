pub mod reserve;
pub mod vault_state;

pub use reserve::*;
pub use vault_state::*;
