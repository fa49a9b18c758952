pub mod id;
pub mod model;
pub mod ops;
pub mod store;

pub use id::InstanceId;
pub use model::*;
pub use ops::{Operand, Operation, Outcome, Rejection, Report};
pub use store::InstanceStore;
