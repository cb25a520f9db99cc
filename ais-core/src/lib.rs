//! ais-core: Pure decode library for AIS six-bit messages.
//!
//! No async, no I/O, just bit handling and message decoding. Sentence
//! framing and checksums belong to the caller (see `ais-feeder`).

pub mod bits;
pub mod config;
pub mod factory;
pub mod fields;
pub mod parser;
pub mod position;
pub mod reassembly;
pub mod sixbit;
pub mod static_data;
pub mod types;

#[cfg(test)]
mod test_util;

// Re-export commonly used types at crate root
pub use bits::BitVector;
pub use factory::{create, decode_payload, decode_sixbit};
pub use fields::FieldCodec;
pub use parser::{FieldSpec, MessageParser};
pub use reassembly::{CarrierSentence, FragmentReassembler, MessageFilter};
pub use sixbit::Sixbit;
pub use types::*;
