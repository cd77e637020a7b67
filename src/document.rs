//! Front-matter document accumulation and rendering.

use std::fmt;

use itertools::Itertools as _;
use linked_hash_map::LinkedHashMap;

/// Line delimiting the front-matter block above and below.
const FRONT_MATTER_DELIMITER: &str = "+++";

/// Value of a front-matter metadata entry.
///
/// Rendering is exhaustive over the shape: a [`Scalar`] is emitted as a
/// quoted (and escaped) string, a [`List`] as an unquoted bracket literal of
/// quoted elements, e.g. `tags = ["web", "login"]`.
///
/// [`List`]: MetadataValue::List
/// [`Scalar`]: MetadataValue::Scalar
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MetadataValue {
    /// Single value, rendered quoted.
    Scalar(String),

    /// Ordered sequence of values, rendered as a bracket literal.
    List(Vec<String>),
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(v) => write!(f, "\"{}\"", escape(v)),
            Self::List(vs) => write!(
                f,
                "[{}]",
                vs.iter().map(|v| format!("\"{}\"", escape(v))).join(", "),
            ),
        }
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<usize> for MetadataValue {
    fn from(value: usize) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<Vec<String>> for MetadataValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

/// Accumulator for a single [Hugo] content document: an insertion-ordered
/// metadata mapping plus an append-only body buffer, rendered as a
/// `+++`-delimited front-matter block followed by the body.
///
/// Performs no I/O and cannot fail; writing the rendered output somewhere is
/// the caller's business.
///
/// [Hugo]: https://gohugo.io
#[derive(Clone, Debug)]
pub struct Document {
    /// Document title, always rendered as the first metadata entry.
    title: String,

    /// Metadata entries, rendered in insertion order.
    meta: LinkedHashMap<String, MetadataValue>,

    /// Body lines accumulated so far, each terminated by `\n`.
    buffer: String,
}

impl Document {
    /// Creates a new empty [`Document`] titled `title`, with its metadata
    /// seeded with the given `tags` list.
    #[must_use]
    pub fn new(title: impl Into<String>, tags: Vec<String>) -> Self {
        let mut meta = LinkedHashMap::new();
        meta.insert("tags".to_owned(), MetadataValue::List(tags));
        Self {
            title: title.into(),
            meta,
            buffer: String::new(),
        }
    }

    /// Title of this [`Document`].
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Appends `line` plus a line terminator to the body buffer.
    ///
    /// The buffer grows without bound; a single feature's documentation is
    /// expected to stay small.
    pub fn write_line(&mut self, line: impl AsRef<str>) {
        self.buffer.push_str(line.as_ref());
        self.buffer.push('\n');
    }

    /// Inserts or overwrites the metadata entry under `key`.
    pub fn set_meta(&mut self, key: impl Into<String>, value: impl Into<MetadataValue>) {
        self.meta.insert(key.into(), value.into());
    }

    /// Renders the front-matter block: `title` first, then the metadata
    /// entries in insertion order, then a `date` entry, delimited by `+++`
    /// lines.
    ///
    /// The `date` is the current local time with microsecond precision and is
    /// recomputed on every call, so two renders of the same [`Document`] may
    /// differ in that line.
    #[must_use]
    pub fn header(&self) -> String {
        let mut lines = vec![
            FRONT_MATTER_DELIMITER.to_owned(),
            format!("title = \"{}\"", escape(&self.title)),
        ];
        lines.extend(self.meta.iter().map(|(key, value)| format!("{key} = {value}")));
        let date = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.6f");
        lines.push(format!("date = \"{date}\""));
        lines.push(FRONT_MATTER_DELIMITER.to_owned());
        lines.join("\n")
    }

    /// Renders the whole document: [`header()`] plus a blank line plus the
    /// body buffer.
    ///
    /// [`header()`]: Document::header
    #[must_use]
    pub fn contents(&self) -> String {
        format!("{}\n\n{}", self.header(), self.buffer)
    }
}

/// Escapes `value` for embedding into a double-quoted front-matter string.
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
