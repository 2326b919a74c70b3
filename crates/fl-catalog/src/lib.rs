//! fl-catalog: read-only pipe-material and fitting catalogs.
//!
//! Static data consumed at the collaborator boundary: material codes resolve
//! to absolute roughness, fitting codes to a loss coefficient and display
//! name. Unknown codes fail here with [`CatalogError::InvalidCode`], never
//! inside the numerical core.

pub mod error;
pub mod fittings;
pub mod materials;

pub use error::{CatalogError, CatalogResult};
pub use fittings::{FittingEntry, fitting, fittings};
pub use materials::{MaterialEntry, material, materials};
