pub mod initialize_vault;
pub mod allocate;
pub mod recover_failed_lock;
pub mod claim_reserve;
pub mod reserve_queries;
pub mod vault_queries;
pub mod receive_native;

pub use initialize_vault::*;
pub use allocate::*;
pub use recover_failed_lock::*;
pub use claim_reserve::*;
pub use reserve_queries::*;
pub use vault_queries::*;
pub use receive_native::*;
