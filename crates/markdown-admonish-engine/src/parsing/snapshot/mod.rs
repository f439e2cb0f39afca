pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{ElementSnap, Snap, normalize};
