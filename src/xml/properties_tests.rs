use super::*;
use crate::property::{PropertyConfig, PropertyConfigs, PropertyMap, PropertyType};
use crate::resource::{InMemoryRepository, RequestContext, Resource, ResourceId};
use std::str::FromStr;

const A: &str = "aaaaaaaa-0000-4000-8000-000000000001";
const B: &str = "bbbbbbbb-0000-4000-8000-000000000002";

const STORED: &str = r#"<Element>
  <Uri><![CDATA[/sites/default/page.html]]></Uri>
  <Properties>
    <Name><![CDATA[teaser]]></Name>
    <Value><String><![CDATA[ Hello ]]></String></Value>
  </Properties>
  <Properties>
    <Name><![CDATA[images]]></Name>
    <Value>
      <FileList>
        <Uri>
          <link type="WEAK">
            <target><![CDATA[/sites/default/a.png]]></target>
            <uuid>aaaaaaaa-0000-4000-8000-000000000001</uuid>
          </link>
        </Uri>
        <Uri/>
        <Uri>
          <link type="STRONG">
            <target><![CDATA[/sites/default/b.png]]></target>
            <uuid>bbbbbbbb-0000-4000-8000-000000000002</uuid>
          </link>
        </Uri>
      </FileList>
    </Value>
  </Properties>
  <Properties>
    <Name><![CDATA[pending]]></Name>
  </Properties>
  <Properties>
    <Name><![CDATA[unset]]></Name>
    <Value/>
  </Properties>
</Element>"#;

fn fixture() -> (InMemoryRepository, RequestContext) {
    let mut repo = InMemoryRepository::new();
    repo.add_resource(Resource::new(
        ResourceId::from_str(A).unwrap(),
        "/sites/default/a.png",
        "image",
    ));
    repo.add_resource(Resource::new(
        ResourceId::from_str(B).unwrap(),
        "/sites/default/b.png",
        "image",
    ));
    (repo, RequestContext::new("/sites/default"))
}

fn configs() -> PropertyConfigs {
    [
        PropertyConfig::new("teaser", PropertyType::String),
        PropertyConfig::new("images", PropertyType::VfsList),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_read_properties() {
    let element = Element::parse(STORED).unwrap();
    let props = read_properties(&element).unwrap();
    assert_eq!(props.len(), 2);
    assert_eq!(props["teaser"], "Hello");
    assert_eq!(props["images"], format!("{A},{B}"));
}

#[test]
fn test_read_rejects_property_without_name() {
    let element = Element::parse("<Element><Properties><Value/></Properties></Element>").unwrap();
    let err = read_properties(&element).unwrap_err();
    assert!(matches!(err, XmlError::MissingNode(_)));
    let message = err.message().expect("message");
    assert_eq!(message.key, "ERR_XMLCONTENT_UNKNOWN_ELEM_PATH_SCHEMA_1");
    assert_eq!(message.args, vec!["Properties/Name".to_string()]);
    assert_eq!(
        err.to_string(),
        "Unknown element path \"Properties/Name\" in the property schema."
    );
}

#[test]
fn test_save_replaces_stored_properties() {
    let (repo, ctx) = fixture();
    let mut element = Element::parse(STORED).unwrap();

    let mut props = PropertyMap::new();
    props.insert("teaser".to_string(), "Bye".to_string());
    props.insert("images".to_string(), format!("/b.png,/missing.png,{A}"));
    props.insert("unconfigured".to_string(), "x".to_string());
    save_properties(&repo, &ctx, &mut element, &props, &configs());

    // the unrelated child survives, the old entries are gone
    assert_eq!(element.children_named("Uri").count(), 1);
    assert_eq!(element.children_named("Properties").count(), 2);

    let stored = read_properties(&element).unwrap();
    assert_eq!(stored["teaser"], "Bye");
    assert_eq!(stored["images"], format!("{B},{A}"));
    assert!(!stored.contains_key("unconfigured"));
}

#[test]
fn test_saved_links_are_weak_and_carry_root_paths() {
    let (repo, ctx) = fixture();
    let mut element = Element::new("Element");
    let mut props = PropertyMap::new();
    props.insert("images".to_string(), A.to_string());
    save_properties(&repo, &ctx, &mut element, &props, &configs());

    let node = PropertyNode::decode(element.child("Properties").unwrap()).unwrap();
    let Some(PropertyValueNode::FileList(uris)) = node.value else {
        panic!("expected a file list");
    };
    let link = uris[0].link.as_ref().unwrap();
    assert_eq!(link.relation, RelationType::Weak);
    assert_eq!(link.target, "/sites/default/a.png");
    assert_eq!(link.uuid.to_string(), A);
}

#[test]
fn test_saved_document_survives_text_round_trip() {
    let (repo, ctx) = fixture();
    let mut element = Element::new("Element");
    let mut props = PropertyMap::new();
    props.insert("teaser".to_string(), "<p>rich & text</p>".to_string());
    props.insert("images".to_string(), format!("{A},{B}"));
    save_properties(&repo, &ctx, &mut element, &props, &configs());

    let xml = element.to_xml().unwrap();
    assert!(xml.contains("<![CDATA[<p>rich & text</p>]]>"), "{xml}");
    assert!(xml.contains(r#"<link type="WEAK">"#), "{xml}");

    let reparsed = Element::parse(&xml).unwrap();
    assert_eq!(read_properties(&reparsed).unwrap(), props);
}

#[test]
fn test_relation_type_parsing() {
    assert_eq!("weak".parse::<RelationType>().unwrap(), RelationType::Weak);
    assert_eq!("XML_STRONG".parse::<RelationType>().unwrap(), RelationType::Strong);
    assert!("sideways".parse::<RelationType>().is_err());
}
