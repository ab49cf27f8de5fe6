use super::*;

#[test]
fn test_parse_nested_elements() {
    let root = Element::parse(
        r#"<Element lang="en">
             <Name><![CDATA[ title ]]></Name>
             <Empty/>
             <Note>a &amp; b</Note>
           </Element>"#,
    )
    .unwrap();

    assert_eq!(root.name, "Element");
    assert_eq!(root.attribute("lang"), Some("en"));
    assert_eq!(root.elements().count(), 3);
    assert_eq!(root.child("Name").unwrap().text(), " title ");
    assert_eq!(root.child("Name").unwrap().text_trim(), "title");
    assert!(root.child("Empty").unwrap().children.is_empty());
    assert_eq!(root.child("Note").unwrap().text(), "a & b");
    assert!(root.child("Missing").is_none());
}

#[test]
fn test_write_preserves_cdata() {
    let element = Element::new("Name")
        .with_attribute("kind", "a\"b")
        .with_cdata("<b>bold</b>");
    let xml = element.to_xml().unwrap();
    assert!(xml.contains("<![CDATA[<b>bold</b>]]>"), "{xml}");

    let back = Element::parse(&xml).unwrap();
    assert_eq!(back, element);
}

#[test]
fn test_cdata_terminator_is_written_as_text() {
    let element = Element::new("String").with_cdata("x]]>y");
    let xml = element.to_xml().unwrap();
    assert!(!xml.contains("CDATA"), "{xml}");
    assert_eq!(Element::parse(&xml).unwrap().text(), "x]]>y");
}

#[test]
fn test_remove_children() {
    let mut root = Element::new("root")
        .with_child(Element::new("Properties"))
        .with_child(Element::new("Other"))
        .with_child(Element::new("Properties"));
    assert_eq!(root.remove_children("Properties"), 2);
    assert_eq!(root.elements().map(|e| e.name.as_str()).collect::<Vec<_>>(), vec!["Other"]);
    assert_eq!(root.remove_children("Properties"), 0);
}

#[test]
fn test_set_attribute_replaces() {
    let mut element = Element::new("link").with_attribute("type", "WEAK");
    element.set_attribute("type", "STRONG");
    assert_eq!(element.attributes.len(), 1);
    assert_eq!(element.attribute("type"), Some("STRONG"));
}

#[test]
fn test_parse_rejects_broken_documents() {
    assert!(Element::parse("").is_err());
    assert!(Element::parse("<a><b></a>").is_err());
    assert!(matches!(
        Element::parse("<a/><b/>"),
        Err(XmlError::Malformed(_))
    ));
}
