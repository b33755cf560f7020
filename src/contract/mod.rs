// ============================================================================
// CONTRACT - ABI y binding del contrato de cofres desplegado
// ============================================================================

pub mod abi;
pub mod binding;

pub use binding::VaultContract;
