pub mod blocks;
pub mod health;
pub mod transactions;

pub use blocks::BlocksService;
pub use health::HealthService;
pub use transactions::TransactionsService;
