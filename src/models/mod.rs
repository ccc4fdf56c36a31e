pub mod bar;
pub mod result;
pub mod symbol;

pub use bar::{Bar, START_MARKER, STOP_MARKER};
pub use result::{DecodeResult, EncodeResult, Status};
