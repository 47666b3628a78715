//! Lender catalogue data structures and CSV loading

mod data;
pub mod loader;

pub use data::{Catalogue, LenderOffer};
pub use loader::{load_catalogue, load_catalogue_from_reader};
