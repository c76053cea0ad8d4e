pub mod batch;
pub mod iupac;
pub mod transform;

pub use batch::*;
pub use iupac::*;
pub use transform::*;
