//! CLI command implementations.

pub mod columns;
pub mod simulate;

// Re-export argument structs for convenience
pub use columns::ColumnsArgs;
pub use simulate::SimulateArgs;
