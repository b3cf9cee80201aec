/// Default nesting limit for keyed containers and strict arrays.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Default cap on the declared element count of a strict array.
pub const DEFAULT_MAX_ARRAY_LEN: usize = 1 << 20;

/// Default cap on the number of values one session may produce.
pub const DEFAULT_MAX_VALUES: usize = 1 << 21;

/// Configuration for a decode session.
///
/// ```text
/// ┌─────────────────┬─────────────────────────────────────────────────────┐
/// │ Field           │ Purpose                                             │
/// ├─────────────────┼─────────────────────────────────────────────────────┤
/// │ unknown_markers │ What to do with a byte that is not a value marker   │
/// │ max_depth       │ Nesting limit; deeper input is a malformed stream   │
/// │ max_array_len   │ Largest strict-array count accepted from the wire   │
/// │ max_values      │ Values one session may produce, copies included     │
/// └─────────────────┴─────────────────────────────────────────────────────┘
/// ```
///
/// The decoder recurses once per nesting level, so `max_depth` bounds the
/// stack. A few bytes of input can stand for far more values: a strict
/// array of nulls spends no bytes per element, and every backreference
/// copies the whole subtree it points at. Nested arrays and chains of
/// references multiply, so only `max_values`, counted across the session,
/// bounds the size of the decoded tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    pub unknown_markers: UnknownMarkerPolicy,
    pub max_depth: usize,
    pub max_array_len: usize,
    pub max_values: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            unknown_markers: UnknownMarkerPolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            max_array_len: DEFAULT_MAX_ARRAY_LEN,
            max_values: DEFAULT_MAX_VALUES,
        }
    }
}

impl DecoderConfig {
    /// Default limits, unknown markers rejected.
    pub fn strict() -> Self {
        Self {
            unknown_markers: UnknownMarkerPolicy::Reject,
            ..Self::default()
        }
    }
}

/// Handling of marker bytes outside the AMF0 value set (including a stray
/// OBJECT_END in value position).
///
/// ```text
/// ┌──────────┬────────────────────────────────────────────────────────┐
/// │ Policy   │ Behaviour                                              │
/// ├──────────┼────────────────────────────────────────────────────────┤
/// │ Lenient  │ Value with the raw marker and an empty payload;        │
/// │          │ no payload bytes consumed (default)                    │
/// │ Reject   │ DecodeError::MalformedStream                           │
/// └──────────┴────────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownMarkerPolicy {
    #[default]
    Lenient,
    Reject,
}
