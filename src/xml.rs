use quick_xml::events::Event;
use quick_xml::Reader;
use serde::de::DeserializeOwned;

use crate::error::DecodeError;

/// Deserializes an XML document whose root element must be `root`.
///
/// quick-xml ignores the root tag name during deserialization, so the
/// document is scanned for its first element before handing it to serde.
pub fn decode_body<T>(body: &[u8], root: &'static str) -> Result<T, DecodeError>
where
    T: DeserializeOwned,
{
    let text = std::str::from_utf8(body)?;
    check_root(text, root)?;
    Ok(quick_xml::de::from_str(text)?)
}

fn check_root(text: &str, expected: &'static str) -> Result<(), DecodeError> {
    let mut reader = Reader::from_str(text);
    loop {
        match reader.read_event()? {
            Event::Start(element) | Event::Empty(element) => {
                let name = element.local_name();
                return if name.as_ref() == expected.as_bytes() {
                    Ok(())
                } else {
                    Err(DecodeError::UnexpectedRoot {
                        expected,
                        found: String::from_utf8_lossy(name.as_ref()).into_owned(),
                    })
                };
            }
            Event::Eof => return Err(DecodeError::EmptyDocument),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Greeting {
        #[serde(rename = "@Lang")]
        lang: String,
        #[serde(rename = "Word", default)]
        words: Vec<String>,
    }

    #[test]
    fn test_decode_with_declaration() {
        let body = br#"<?xml version="1.0" encoding="utf-8"?>
            <Greeting Lang="en"><Word>hello</Word><Word>world</Word></Greeting>"#;

        let greeting: Greeting = decode_body(body, "Greeting").unwrap();
        assert_eq!(greeting.lang, "en");
        assert_eq!(greeting.words, vec!["hello", "world"]);
    }

    #[test]
    fn test_wrong_root_is_rejected() {
        let body = br#"<Farewell Lang="en"><Word>bye</Word></Farewell>"#;

        let result = decode_body::<Greeting>(body, "Greeting");
        match result {
            Err(DecodeError::UnexpectedRoot { expected, found }) => {
                assert_eq!(expected, "Greeting");
                assert_eq!(found, "Farewell");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            decode_body::<Greeting>(b"", "Greeting"),
            Err(DecodeError::EmptyDocument)
        ));
        assert!(matches!(
            decode_body::<Greeting>(b"not xml at all", "Greeting"),
            Err(DecodeError::EmptyDocument)
        ));
        assert!(matches!(
            decode_body::<Greeting>(&[0xff, 0xfe, 0x00], "Greeting"),
            Err(DecodeError::Utf8(_))
        ));
        assert!(decode_body::<Greeting>(b"<Greeting Lang=\"en\"><Word>", "Greeting").is_err());
    }

    #[test]
    fn test_missing_required_attribute() {
        let body = br#"<Greeting><Word>hello</Word></Greeting>"#;
        assert!(matches!(
            decode_body::<Greeting>(body, "Greeting"),
            Err(DecodeError::Schema(_))
        ));
    }
}
