pub mod algorithms;
pub mod codec;

pub use algorithms::{body, codeword, frame, header, math};
