//! JSON rendering for converted documents.

use crate::types::Document;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

const INDENT: &[u8] = b"    ";

/// Render a document as pretty JSON with a four-space indent and a trailing
/// newline. The same document always renders to the same bytes.
pub fn to_json(document: &Document) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut ser)?;
    buf.push(b'\n');
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_layout() {
        let doc = parse_document("q.md", "#### Q\n- [x] yes\n", "2024-01-01T00:00:00.000Z");
        let expected = r#"{
    "name_of_markdown": "q.md",
    "questions": [
        {
            "question": "Q",
            "picture_url": "",
            "correct_answer": 0,
            "options": [
                {
                    "option_text": "yes",
                    "is_correct": true
                }
            ],
            "question_markdown": "",
            "updated_at": "2024-01-01T00:00:00.000Z"
        }
    ]
}
"#;
        assert_eq!(to_json(&doc).unwrap(), expected);
    }

    #[test]
    fn test_render_empty_document() {
        let doc = parse_document("empty.md", "", "2024-01-01T00:00:00.000Z");
        assert_eq!(
            to_json(&doc).unwrap(),
            "{\n    \"name_of_markdown\": \"empty.md\",\n    \"questions\": []\n}\n"
        );
    }

    #[test]
    fn test_render_round_trips() {
        let doc = parse_document(
            "code.md",
            "#### Q\n![d](d.png)\n```\n\t\"quoted\" \\ text\n```\n- [ ] a\n",
            "2024-01-01T00:00:00.000Z",
        );
        let json = to_json(&doc).unwrap();
        let back: crate::types::Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
        assert_eq!(to_json(&back).unwrap(), json);
    }
}
