pub use self::{memory::*, mongo::*};

mod memory;
mod mongo;
