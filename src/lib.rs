pub mod config;
pub mod debug;
pub mod definition;
pub mod descriptors;
pub mod error;
pub mod naming;
pub mod types;


pub use config::*;
pub use definition::*;
pub use descriptors::*;
pub use error::{DescriptorError, ErrorCollection, ErrorKind};
pub use naming::*;
pub use types::*;
