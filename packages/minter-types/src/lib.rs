pub mod config;
pub mod metadata;
pub mod msg;
pub mod types;

pub use crate::config::{Config, ConfigurationError, SupplyCaps};
pub use crate::metadata::{token_uri, UriError};
pub use crate::msg::{InstantiateMsg, MigrateMsg, QueryMsg};
pub use crate::types::{Pool, QuotaCounters, UserDetails};
