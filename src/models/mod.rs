//! Seating domain models.
//!
//! Plain records exchanged with the persistence/service layer. Wire names
//! are camelCase so records round-trip with the service's JSON unchanged.
//!
//! # Roles
//!
//! | Type | Role |
//! |------|------|
//! | Guest | Item to place |
//! | Table | Capacity-bounded bin |
//! | Preference | Weighted pairwise soft constraint |
//! | Assignment | Output row (guest → table × seat) |

mod assignment;
mod guest;
mod preference;
mod table;

pub use assignment::{occupancy, Assignment};
pub use guest::Guest;
pub use preference::{Preference, PreferenceType};
pub use table::{total_capacity, Table};
