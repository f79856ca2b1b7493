//! Card system: identities, static card data, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: One of the nineteen base-game cards
//! - `CardCategory`: Activation group (red, green, blue, purple, landmark)
//! - `CardInfo`: Cost and deck count for a card
//! - `CardCatalog`: Read-only lookup over the static table

pub mod definition;
pub mod registry;

pub use definition::{CardCategory, CardId, CardInfo, InitialCount};
pub use registry::{CardCatalog, VALID_ESTABLISHMENTS, VALID_LANDMARKS};
