//! Whole-file emission from fixture seed tables.

use instgen_core::DerivativeOrder;
use instgen_emit::{decl_name, Family, InstantiationWriter};
use instgen_table::InstantiationInfo;
use instgen_test_utils::fixtures::{mixed_3d, vector_2d};

fn generate(info: &InstantiationInfo, families: &[Family]) -> String {
    let mut writer = InstantiationWriter::new(Vec::new(), "instances.inst").unwrap();
    writer.write_families(info, families).unwrap();
    String::from_utf8(writer.into_inner()).unwrap()
}

#[test]
fn header_then_one_line_per_entity() {
    let info = InstantiationInfo::new(&vector_2d(), DerivativeOrder::new(1));
    let text = generate(&info, &Family::ALL);
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("// This file was automatically generated from instances.inst")
    );
    assert_eq!(
        lines.next(),
        Some("// DO NOT edit as it will be overwritten.")
    );
    assert_eq!(lines.next(), Some(""));
    for line in lines {
        assert!(line.starts_with("template class "), "{line}");
        assert!(line.ends_with(" ;"), "{line}");
    }
}

#[test]
fn no_declaration_written_twice() {
    let info = InstantiationInfo::new(&mixed_3d(), DerivativeOrder::new(2));
    let text = generate(&info, &Family::ALL);
    let body: Vec<&str> = text.lines().skip(3).collect();
    let mut seen = std::collections::HashSet::new();
    for line in &body {
        assert!(seen.insert(*line), "duplicate: {line}");
    }
}

#[test]
fn families_follow_table_order() {
    let info = InstantiationInfo::new(&vector_2d(), DerivativeOrder::new(1));
    let text = generate(&info, &[Family::ValueTable]);
    let expected: Vec<String> = info
        .containers()
        .value_tables()
        .iter()
        .map(|t| format!("template class {} ;", decl_name(t)))
        .collect();
    let body: Vec<&str> = text.lines().skip(3).collect();
    assert_eq!(body, expected);
}

#[test]
fn planar_vector_physical_spaces() {
    let info = InstantiationInfo::new(&vector_2d(), DerivativeOrder::new(1));
    let text = generate(&info, &[Family::PhysicalSpace]);
    let body: Vec<&str> = text.lines().skip(3).collect();
    assert_eq!(
        body,
        vec![
            "template class PhysicalSpace <BSplineSpace<2,2,1>, PushForward<Transformation::h_grad, 2, 0> > ;",
            "template class PhysicalSpace <BSplineSpace<1,2,1>, PushForward<Transformation::h_grad, 1, 1> > ;",
            "template class PhysicalSpace <NURBSSpace<2,2,1>, PushForward<Transformation::h_grad, 2, 0> > ;",
            "template class PhysicalSpace <NURBSSpace<1,2,1>, PushForward<Transformation::h_grad, 1, 1> > ;",
        ]
    );
}
