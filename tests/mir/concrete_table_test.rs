//! Concrete-table inheritance: ancestors' columns are pushed down.

use schemaforge::mir::normalize;
use schemaforge::model::{Column, Design, InheritanceKind, Relation, Table};

fn shapes() -> Design {
    let mut design = Design::new(InheritanceKind::ConcreteTable);
    design
        .tables
        .push(Table::new("Shape").with_id("sh").abstract_table());
    design.tables.push(Table::new("Circle").with_id("ci"));
    design
        .columns
        .push(Column::new("sh", "color", "TEXT").with_id("sh_color"));
    design
        .columns
        .push(Column::new("ci", "radius", "REAL").with_id("ci_radius"));
    design.relations.push(Relation::inherits("ci", "sh"));
    design
}

fn sorted_names(design: &Design, table_id: &str) -> Vec<String> {
    let mut names: Vec<String> = design.columns_of(table_id).map(|c| c.name.clone()).collect();
    names.sort();
    names
}

#[test]
fn test_abstract_root_is_dropped() {
    let mir = normalize(&shapes()).unwrap();

    assert_eq!(mir.tables.len(), 1);
    assert_eq!(mir.tables[0].name, "Circle");
    assert_eq!(sorted_names(&mir, "ci"), vec!["color", "radius"]);
    assert!(mir.columns_of("sh").next().is_none());
    assert!(mir.relations.is_empty());
}

#[test]
fn test_multi_level_chain_accumulates() {
    let mut design = shapes();
    design.tables.push(Table::new("Ring").with_id("ri"));
    design
        .columns
        .push(Column::new("ri", "inner_radius", "REAL"));
    design.relations.push(Relation::inherits("ri", "ci"));

    let mir = normalize(&design).unwrap();
    assert_eq!(
        sorted_names(&mir, "ri"),
        vec!["color", "inner_radius", "radius"]
    );
    assert_eq!(sorted_names(&mir, "ci"), vec!["color", "radius"]);
}

#[test]
fn test_concrete_root_is_kept() {
    let mut design = shapes();
    design.tables[0].is_abstract = false;

    let mir = normalize(&design).unwrap();
    assert_eq!(mir.tables.len(), 2);
    assert_eq!(sorted_names(&mir, "sh"), vec!["color"]);
}

#[test]
fn test_abstract_flag_ignored_by_other_kinds() {
    let mut design = shapes();
    design.inheritance_kind = InheritanceKind::ClassTable;
    let mir = normalize(&design).unwrap();
    assert_eq!(mir.tables.len(), 2);
}
