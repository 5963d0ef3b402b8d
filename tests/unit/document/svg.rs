use super::*;

const DOC: &str = r#"<svg width='800' height='800' viewBox='0 0 1024 1024' xmlns='http://www.w3.org/2000/svg'>
<circle cx="10" cy="10" r="5" />
<path id="first" d="M0,0 L1,0 L1,1 Z" fill="none" stroke="black" />
<path stroke="red" d="M5,5 C5,6 6,6 6,5" />
<path stroke="blue" />
</svg>
"#;

#[test]
fn extracts_every_d_attribute_in_order() {
    assert_eq!(
        extract_path_data(DOC),
        vec!["M0,0 L1,0 L1,1 Z".to_string(), "M5,5 C5,6 6,6 6,5".to_string()]
    );
}

#[test]
fn paths_without_d_are_skipped() {
    assert!(extract_path_data("<path stroke='red' />").is_empty());
    // `id=\"` must not be mistaken for a d attribute.
    assert!(extract_path_data("<path id=\"x\" />").is_empty());
}

#[test]
fn first_path_data_errors_when_absent() {
    assert_eq!(first_path_data(DOC).unwrap(), "M0,0 L1,0 L1,1 Z");
    assert!(matches!(
        first_path_data("<svg><circle r='4'/></svg>"),
        Err(MorphError::Validation(_))
    ));
}

#[test]
fn wrapped_document_is_extractable_again() {
    let d = "M0,0 L1,0 L1,1 L0,1 Z";
    let doc = wrap_document(d, ViewBox::default());
    assert!(doc.starts_with(
        "<svg width='800' height='800' viewBox='0 0 1024 1024' xmlns='http://www.w3.org/2000/svg'>"
    ));
    assert_eq!(extract_path_data(&doc), vec![d.to_string()]);
}

#[test]
fn view_box_dimensions_are_configurable() {
    let vb = ViewBox {
        width: 500,
        height: 500,
        view_w: 500,
        view_h: 500,
    };
    let doc = wrap_document("M0,0 L1,1", vb);
    assert!(doc.contains("width='500'"));
    assert!(doc.contains("viewBox='0 0 500 500'"));
}
