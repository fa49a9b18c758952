pub mod hit;
pub mod layout;

pub use hit::{Hit, hit_test};
