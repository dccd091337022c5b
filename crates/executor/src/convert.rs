//! Reply decoding and error conversion.
//!
//! Turns a store [`Reply`] into an [`Output`] according to the operation's
//! result rule, and maps lower-layer errors into the executor's [`Error`].

use rejson_core::JsonType;
use rejson_wire::{decode_json, decode_number, ConnectionError, DecodeError, Reply};
use tracing::warn;

use crate::catalog::{OperationDescriptor, ResultRule};
use crate::{Error, Output, Result};

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Error::Decode {
            reason: err.to_string(),
        }
    }
}

impl From<ConnectionError> for Error {
    fn from(err: ConnectionError) -> Self {
        Error::Transport {
            reason: err.to_string(),
        }
    }
}

/// Classify a store error reply.
///
/// The text is kept verbatim. Replies reporting a wrong type become
/// `WrongType`; everything else is `Store`.
pub(crate) fn error_from_reply(message: String) -> Error {
    if message.to_ascii_lowercase().contains("wrong type") {
        Error::WrongType { message }
    } else {
        Error::Store { message }
    }
}

fn unexpected(descriptor: &OperationDescriptor, reply: &Reply) -> Error {
    Error::Decode {
        reason: format!(
            "unexpected {} reply for {}",
            reply.kind(),
            descriptor.wire
        ),
    }
}

/// Decode a reply with the descriptor's result rule.
pub(crate) fn decode_reply(descriptor: &OperationDescriptor, reply: Reply) -> Result<Output> {
    if let Reply::Error(message) = reply {
        warn!(target: "rejson::executor", command = descriptor.wire, error = %message, "Store returned an error");
        return Err(error_from_reply(message));
    }

    match (descriptor.result, reply) {
        (ResultRule::Raw, reply) => Ok(Output::Resp(reply)),
        (ResultRule::Ack, Reply::Status(s)) if s == "OK" => Ok(Output::Bool(true)),
        (ResultRule::Ack, other) => Err(Error::Write {
            reply: match other {
                Reply::Status(s) | Reply::Bulk(s) => s,
                other => other.kind().to_string(),
            },
        }),
        (_, Reply::Nil) => Ok(Output::Nil),
        (ResultRule::Json, Reply::Bulk(text)) => Ok(Output::Json(decode_json(&text)?)),
        (ResultRule::JsonList, Reply::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Reply::Nil => Ok(None),
                Reply::Bulk(text) => Ok(Some(decode_json(&text)?)),
                other => Err(unexpected(descriptor, &other)),
            })
            .collect::<Result<Vec<_>>>()
            .map(Output::JsonList),
        (ResultRule::Flag, Reply::Integer(n)) => Ok(Output::Bool(n > 0)),
        (ResultRule::Integer, Reply::Integer(n)) => Ok(Output::Int(n)),
        (ResultRule::Number, Reply::Bulk(text)) | (ResultRule::Number, Reply::Status(text)) => {
            Ok(Output::Number(decode_number(&text)?))
        }
        (ResultRule::Number, Reply::Integer(n)) => Ok(Output::Number(n.into())),
        (ResultRule::Keys, Reply::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Reply::Bulk(k) | Reply::Status(k) => Ok(k),
                other => Err(unexpected(descriptor, &other)),
            })
            .collect::<Result<Vec<_>>>()
            .map(Output::Keys),
        (ResultRule::TypeTag, Reply::Status(tag)) | (ResultRule::TypeTag, Reply::Bulk(tag)) => tag
            .parse::<JsonType>()
            .map(Output::Type)
            .map_err(|e| Error::Decode {
                reason: e.to_string(),
            }),
        (_, other) => Err(unexpected(descriptor, &other)),
    }
}
