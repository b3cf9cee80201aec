//! Indented tree rendering for values and packets.
//!
//! One line per value, two spaces of indent per nesting level:
//!
//! ```text
//! OBJECT {2}
//!   name: STRING "alice"
//!   scores: STRICT_ARRAY [2]
//!     NUMBER 1
//!     NUMBER 2.5
//! ```
//!
//! Property values are prefixed with their key. A `TYPED_OBJECT` prints its
//! class name after the label instead, since that is what its `name` holds.

use std::fmt::{self, Write};

use crate::marker::Marker;
use crate::packet::{ContextHeader, Message, Packet};
use crate::value::{Payload, Value};

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self, 0)
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PACKET v{} ({}, {})",
            self.version,
            plural(self.headers.len(), "header"),
            plural(self.messages.len(), "message"),
        )?;
        for header in &self.headers {
            f.write_char('\n')?;
            write_header(f, header)?;
        }
        for message in &self.messages {
            f.write_char('\n')?;
            write_message(f, message)?;
        }
        Ok(())
    }
}

fn write_header<W: Write>(out: &mut W, header: &ContextHeader) -> fmt::Result {
    write!(
        out,
        "header {:?} must_understand={} length={}",
        header.name,
        header.must_understand,
        length_label(header.length),
    )?;
    out.write_char('\n')?;
    write_value(out, &header.value, 1)
}

fn write_message<W: Write>(out: &mut W, message: &Message) -> fmt::Result {
    write!(
        out,
        "message target={:?} response={:?} length={}",
        message.target_uri,
        message.response_uri,
        length_label(message.length),
    )?;
    out.write_char('\n')?;
    write_value(out, &message.body, 1)
}

/// Render `value` at the given depth, children on following lines.
pub fn write_value<W: Write>(out: &mut W, value: &Value, depth: usize) -> fmt::Result {
    write!(out, "{:width$}", "", width = depth * 2)?;

    if value.marker != Marker::TypedObject
        && let Some(name) = &value.name
    {
        write!(out, "{name}: ")?;
    }

    match value.marker {
        Marker::Unknown(id) => write!(out, "UNKNOWN({id:#04x})")?,
        marker => out.write_str(marker.label())?,
    }

    match &value.payload {
        Payload::Empty => Ok(()),
        Payload::Number(n) => write!(out, " {n}"),
        Payload::Boolean(b) => write!(out, " {b}"),
        Payload::String(s) => write!(out, " {s:?}"),
        Payload::Elements(items) => {
            write!(out, " [{}]", items.len())?;
            write_children(out, items, depth)
        }
        Payload::Properties(props) => {
            if value.marker == Marker::TypedObject {
                write!(out, " {}", value.name.as_deref().unwrap_or("?"))?;
            }
            write!(out, " {{{}}}", props.len())?;
            write_children(out, props, depth)
        }
    }
}

fn write_children<W: Write>(out: &mut W, children: &[Value], depth: usize) -> fmt::Result {
    for child in children {
        out.write_char('\n')?;
        write_value(out, child, depth + 1)?;
    }
    Ok(())
}

fn length_label(length: Option<u32>) -> String {
    length.map_or_else(|| "unknown".to_string(), |n| n.to_string())
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
