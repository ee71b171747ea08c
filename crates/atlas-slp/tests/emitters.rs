use atlas_core::{EmissionContext, TargetFormat};
use atlas_slp::{render, Program, SlpRecord};
use indoc::indoc;
use serde_json::json;

fn records(value: serde_json::Value) -> Vec<SlpRecord> {
    serde_json::from_value(value).unwrap()
}

fn m11_context() -> EmissionContext {
    EmissionContext::new("M_{11}", "A_6.2_3")
        .with_version("3")
        .with_ids("M11_maxes", "M11max1")
        .with_order_index("720", "11")
        .with_sources("Generators from R. A. Wilson.\nSee the ATLAS.")
}

fn m11_program() -> Program {
    Program::from_records(&records(json!([[3, 1, 0, 2], [4, 3, 1, -1], [5, 4, 0, 1]])))
}

#[test]
fn test_magma_layout() {
    let expected = indoc! {"
        /*
        Online Atlas of Group Representations, version 3.

        Straight-line program for maximal subgroup generator.

        A_6.2_3 < M_{11}.

        Order: 720, Index: 11

        Generators from R. A. Wilson.
        See the ATLAS.
        */

        function M11_M11max1(G)

        w1 := G.1; w2 := G.2;
        w3 := w1 * w2;
        w4 := w3 ^ -1;
        w5 := w4 * w1;

        return sub<G |[w1, w2]>;

        end function;"};

    assert_eq!(render(&m11_program(), &m11_context(), &TargetFormat::Magma), expected);
}

#[test]
fn test_magma_without_sources_or_ids() {
    let ctx = EmissionContext::new("J_1", "L_2(11)")
        .with_ids("", "J1max1")
        .with_order_index("660", "266");
    let program = Program::new().with_generator_count(2);

    let expected = indoc! {"
        /*
        Online Atlas of Group Representations, version unknown.

        Straight-line program for maximal subgroup generator.

        L_2(11) < J_1.

        Order: 660, Index: 266
        */

        function G_J1max1(G)

        w1 := G.1; w2 := G.2;

        return sub<G |[w1, w2]>;

        end function;"};

    assert_eq!(render(&program, &ctx, &TargetFormat::Magma), expected);
}

#[test]
fn test_meataxe_layout() {
    let expected = indoc! {"
        # Online Atlas of Group Representations, version 3.
        #
        # Straight-line program for maximal subgroup generator.
        #
        # A_6.2_3 < M_{11}.
        # Order: 720, Index: 11
        # Generators from R. A. Wilson.
        # See the ATLAS.

        cp g.1 z1
        cp g.2 z2
        zmu z1 z2 z3
        ziv z3 z4
        zmu z4 z1 z5
        cp z1 h.1
        cp z2 h.2"};

    assert_eq!(render(&m11_program(), &m11_context(), &TargetFormat::Meataxe), expected);
}

#[test]
fn test_meataxe_general_power_and_marker() {
    let program = Program::from_records(&records(json!([
        [3, 1, 0, 2],
        [3, 3, 1, 5],
        [4, 2, 1, -1],
        [3]
    ])));
    let out = render(&program, &EmissionContext::default(), &TargetFormat::Meataxe);
    let body: Vec<&str> = out.split("\n\n").nth(1).unwrap().lines().collect();

    assert_eq!(
        body,
        vec![
            "cp g.1 z1",
            "cp g.2 z2",
            "cp g.3 z3",
            "zmu z1 z2 z3",
            "zpo z3 5 z3",
            "ziv z2 z4",
            "cp z1 h.1",
            "cp z2 h.2",
            "cp z3 h.3",
        ]
    );
}

#[test]
fn test_text_layout() {
    let expected = indoc! {"
        Straight-line program for a maximal subgroup.
        A_6.2_3 < M_{11}.
        Order: 720, Index: 11

        Initial generators: w1, w2

        Set w3 = w1 · w2.
        Set w4 = w3^-1.
        Set w5 = w4 · w1.

        The maximal subgroup is generated by w1, w2."};

    assert_eq!(render(&m11_program(), &m11_context(), &TargetFormat::Text), expected);
}

#[test]
fn test_text_with_three_generators() {
    let program = Program::from_records(&records(json!([[3, 1, 0, 2], [3]])));
    let out = render(&program, &m11_context(), &TargetFormat::Text);
    assert!(out.contains("\nInitial generators: w1, w2, …, w3\n"));
    assert!(out.ends_with("\nThe maximal subgroup is generated by w1, w2, w3."));
}

#[test]
fn test_nonzero_kind_always_means_power() {
    let program = Program::from_records(&records(json!([[3, 1, 0, 2], [4, 3, 5, 0], [2]])));
    assert_eq!(program.ngens(), 2);

    let out = render(&program, &EmissionContext::default(), &TargetFormat::Text);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Straight-line program for a maximal subgroup.",
            " < .",
            "Order: , Index: ",
            "",
            "Initial generators: w1, w2",
            "",
            "Set w3 = w1 · w2.",
            "Set w4 = w3^0.",
            "",
            "The maximal subgroup is generated by w1, w2.",
        ]
    );
}

#[test]
fn test_unknown_format() {
    let out = render(&m11_program(), &m11_context(), &"Foo".parse().unwrap());
    assert_eq!(out, "Format Foo not implemented yet.");
}

#[test]
fn test_malformed_record_is_ignored_by_every_emitter() {
    let with_bad = Program::from_records(&records(json!([[3, 1, 0, 2], [4, 3, 1]])));
    let without = Program::from_records(&records(json!([[3, 1, 0, 2]])));

    for format in [TargetFormat::Magma, TargetFormat::Meataxe, TargetFormat::Text] {
        assert_eq!(
            render(&with_bad, &m11_context(), &format),
            render(&without, &m11_context(), &format),
            "{} output differs",
            format
        );
    }
}

#[test]
fn test_empty_program() {
    let program = Program::from_records(&[]);
    let out = render(&program, &EmissionContext::default(), &TargetFormat::Meataxe);
    assert!(out.ends_with("\n\ncp g.1 z1\ncp g.2 z2\ncp z1 h.1\ncp z2 h.2"));
}

#[test]
fn test_sources_line_endings_in_meataxe() {
    let ctx = EmissionContext::default().with_sources("first\r\nsecond");
    let out = render(&Program::new(), &ctx, &TargetFormat::Meataxe);
    assert!(out.contains("\n# first\n# second\n\n"));
}
