//! Text extraction from SOAP responses.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{Error, ErrorKind, Result};
use crate::types::EnvelopeFault;

/// Text content of every element named `tag`, in document order.
///
/// Elements match on local name, so `<sf:statusCode>` matches `statusCode`.
/// The text of an element includes the text of its descendants. An empty
/// vector means no element matched.
pub fn extract_node_values(xml: &str, tag: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut values: Vec<String> = Vec::new();
    // (index into `values`, depth at which the element opened)
    let mut open: Vec<(usize, usize)> = Vec::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                depth += 1;
                if e.local_name().as_ref() == tag.as_bytes() {
                    open.push((values.len(), depth));
                    values.push(String::new());
                }
            }
            Event::Empty(e) => {
                if e.local_name().as_ref() == tag.as_bytes() {
                    values.push(String::new());
                }
            }
            Event::End(_) => {
                if open.last().is_some_and(|&(_, d)| d == depth) {
                    open.pop();
                }
                depth = depth.saturating_sub(1);
            }
            Event::Text(t) => {
                if !open.is_empty() {
                    let text = t
                        .unescape()
                        .map_err(|e| Error::new(ErrorKind::Parse(e.to_string())))?;
                    for &(i, _) in &open {
                        values[i].push_str(&text);
                    }
                }
            }
            Event::CData(c) => {
                let text = String::from_utf8_lossy(&c);
                for &(i, _) in &open {
                    values[i].push_str(&text);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(Error::new(ErrorKind::Parse(format!(
            "unexpected end of document with {depth} unclosed element(s)"
        ))));
    }

    Ok(values)
}

/// Envelope-level SOAP fault, if the document carries one.
pub(crate) fn parse_envelope_fault(xml: &str) -> Option<EnvelopeFault> {
    if !xml.contains("faultcode") {
        return None;
    }

    let fault_code = extract_node_values(xml, "faultcode").ok()?.into_iter().next()?;
    let fault_string = extract_node_values(xml, "faultstring")
        .ok()
        .and_then(|v| v.into_iter().next())
        .unwrap_or_else(|| "Unknown error".to_string());

    Some(EnvelopeFault {
        fault_code: fault_code.trim().to_string(),
        fault_string: fault_string.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_single_and_multiple_values() {
        let xml = "<a><b>bbb</b><c>ccc</c><c>ddd</c></a>";
        assert_eq!(extract_node_values(xml, "b").unwrap(), vec!["bbb"]);
        assert_eq!(extract_node_values(xml, "c").unwrap(), vec!["ccc", "ddd"]);
    }

    #[test]
    fn test_extract_missing_tag_is_empty() {
        let xml = "<a><b>bbb</b><c>ccc</c></a>";
        assert!(extract_node_values(xml, "z").unwrap().is_empty());
    }

    #[test]
    fn test_extract_ignores_namespace_prefix() {
        let xml = r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
            <soapenv:Body><sf:fullName xmlns:sf="urn:x">FuseApp</sf:fullName></soapenv:Body>
        </soapenv:Envelope>"#;
        assert_eq!(extract_node_values(xml, "fullName").unwrap(), vec!["FuseApp"]);
        assert_eq!(extract_node_values(xml, "Body").unwrap().len(), 1);
    }

    #[test]
    fn test_extract_unescapes_entities_and_cdata() {
        let xml = "<r><message>a &lt;b&gt; &amp; c</message><message><![CDATA[<raw>]]></message></r>";
        assert_eq!(
            extract_node_values(xml, "message").unwrap(),
            vec!["a <b> & c", "<raw>"]
        );
    }

    #[test]
    fn test_extract_includes_descendant_text() {
        let xml = "<errors><message>bad</message><statusCode>ERR</statusCode></errors>";
        assert_eq!(extract_node_values(xml, "errors").unwrap(), vec!["badERR"]);
    }

    #[test]
    fn test_extract_nested_matches_in_start_order() {
        let xml = "<x>outer-<x>inner</x></x>";
        assert_eq!(
            extract_node_values(xml, "x").unwrap(),
            vec!["outer-inner", "inner"]
        );
    }

    #[test]
    fn test_extract_empty_element() {
        let xml = "<r><fullName/><fullName></fullName></r>";
        assert_eq!(extract_node_values(xml, "fullName").unwrap(), vec!["", ""]);
    }

    #[test]
    fn test_extract_with_declaration() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?><result><success>true</success></result>"#;
        assert_eq!(extract_node_values(xml, "success").unwrap(), vec!["true"]);
    }

    #[test]
    fn test_extract_malformed_xml() {
        let err = extract_node_values("<a><b>text</a>", "b").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Parse(_)));

        let err = extract_node_values("<a><b>text", "b").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Parse(_)));
    }

    #[test]
    fn test_parse_envelope_fault() {
        let xml = r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
            <soapenv:Body>
                <soapenv:Fault>
                    <faultcode>sf:INVALID_SESSION_ID</faultcode>
                    <faultstring>INVALID_SESSION_ID: Invalid Session ID found in SessionHeader</faultstring>
                </soapenv:Fault>
            </soapenv:Body>
        </soapenv:Envelope>"#;

        let fault = parse_envelope_fault(xml).unwrap();
        assert_eq!(fault.fault_code, "sf:INVALID_SESSION_ID");
        assert!(fault.fault_string.starts_with("INVALID_SESSION_ID"));
    }

    #[test]
    fn test_parse_envelope_fault_none_for_success() {
        assert!(parse_envelope_fault("<result><success>true</success></result>").is_none());
        assert!(parse_envelope_fault("Service Unavailable").is_none());
    }
}
