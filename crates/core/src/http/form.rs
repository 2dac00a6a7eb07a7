/// One named part of a `multipart/form-data` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    /// Plain text field.
    Text { name: String, value: String },
    /// Field whose value is sent as raw bytes, without a file name.
    Bytes { name: String, value: Vec<u8> },
    /// File attachment.
    File {
        name: String,
        file_name: String,
        content: Vec<u8>,
    },
}

impl FormPart {
    /// Field name of the part.
    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. }
            | FormPart::Bytes { name, .. }
            | FormPart::File { name, .. } => name,
        }
    }
}

/// Ordered list of form parts. Parts are written in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBody {
    parts: Vec<FormPart>,
}

impl FormBody {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text field.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Append a text field only when `value` is non-empty.
    pub fn text_if_present(self, name: impl Into<String>, value: &str) -> Self {
        if value.is_empty() {
            self
        } else {
            self.text(name, value)
        }
    }

    /// Append a field carrying raw bytes.
    pub fn bytes(mut self, name: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.parts.push(FormPart::Bytes {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Append a file part.
    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        self.parts.push(FormPart::File {
            name: name.into(),
            file_name: file_name.into(),
            content: content.into(),
        });
        self
    }

    /// All parts in order.
    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    /// Consume the form, yielding its parts.
    pub fn into_parts(self) -> Vec<FormPart> {
        self.parts
    }

    /// Names of all parts in order.
    pub fn field_names(&self) -> Vec<&str> {
        self.parts.iter().map(FormPart::name).collect()
    }

    /// Value of the first text field called `name`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            FormPart::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Value of the first byte field called `name`.
    pub fn bytes_field(&self, name: &str) -> Option<&[u8]> {
        self.parts.iter().find_map(|part| match part {
            FormPart::Bytes { name: n, value } if n == name => Some(value.as_slice()),
            _ => None,
        })
    }

    /// First file part called `name`, as `(file_name, content)`.
    pub fn file_part(&self, name: &str) -> Option<(&str, &[u8])> {
        self.parts.iter().find_map(|part| match part {
            FormPart::File {
                name: n,
                file_name,
                content,
            } if n == name => Some((file_name.as_str(), content.as_slice())),
            _ => None,
        })
    }

    /// Total payload size in bytes, ignoring multipart framing.
    pub fn payload_len(&self) -> usize {
        self.parts
            .iter()
            .map(|part| match part {
                FormPart::Text { value, .. } => value.len(),
                FormPart::Bytes { value, .. } => value.len(),
                FormPart::File { content, .. } => content.len(),
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_keep_insertion_order() {
        let form = FormBody::new()
            .text("b", "2")
            .text("a", "1")
            .file("file", "x.txt", b"data".to_vec());
        assert_eq!(form.field_names(), vec!["b", "a", "file"]);
    }

    #[test]
    fn test_text_if_present_skips_empty_values() {
        let form = FormBody::new()
            .text_if_present("title", "")
            .text_if_present("comment", "hi");
        assert_eq!(form.field_names(), vec!["comment"]);
        assert_eq!(form.field("comment"), Some("hi"));
        assert_eq!(form.field("title"), None);
    }

    #[test]
    fn test_file_part_lookup() {
        let form = FormBody::new().file("photo", "cat.png", vec![1, 2, 3]);
        assert_eq!(form.file_part("photo"), Some(("cat.png", &[1u8, 2, 3][..])));
        assert_eq!(form.field("photo"), None);
        assert_eq!(form.payload_len(), 3);
    }

    #[test]
    fn test_bytes_field_keeps_raw_bytes() {
        let form = FormBody::new().bytes("content", vec![0xff, 0x00, 0xfe, b'a']);
        assert_eq!(form.field_names(), vec!["content"]);
        assert_eq!(form.bytes_field("content"), Some(&[0xffu8, 0x00, 0xfe, b'a'][..]));
        assert_eq!(form.field("content"), None);
        assert_eq!(form.payload_len(), 4);
    }
}
