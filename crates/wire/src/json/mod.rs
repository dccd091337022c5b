//! JSON argument codec
//!
//! Every JSON-valued command argument travels as its compact JSON text and
//! every JSON-valued reply comes back the same way. Numeric replies of the
//! increment/multiply commands are bare numerals and have their own decoder.

mod decode;
mod encode;

pub use decode::{decode_json, decode_number, DecodeError};
pub use encode::encode_json;
