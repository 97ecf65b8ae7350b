pub mod cstring;
pub mod slice;

pub use cstring::CStrPosition;
pub use slice::SlicePosition;
