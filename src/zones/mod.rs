//! Piles and the table.
//!
//! ## Key Types
//!
//! - `Hand`: a player's draw pile and reserve pile, and the recycler
//! - `WarPool`: cards staked on an unresolved tie chain
//! - `Table`: both hands, the pool and the reset counter for one game

pub mod hand;
pub mod pool;
pub mod table;

pub use hand::Hand;
pub use pool::WarPool;
pub use table::Table;
