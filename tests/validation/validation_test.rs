//! Integration tests for the relationship gates and design checks.

use schemaforge::model::{Column, Design, Relation, RelationKind, Table};
use schemaforge::validation::{
    can_add_data_relation, can_add_inheritance, check_inheritance_edge, validate_design,
    DesignIssue, EdgeRejection,
};

/// Vehicle <- Car <- SportsCar, plus an unrelated Garage.
fn vehicles() -> Design {
    let mut design = Design::default();
    design.tables.push(Table::new("Vehicle").with_id("ve"));
    design.tables.push(Table::new("Car").with_id("car"));
    design.tables.push(Table::new("SportsCar").with_id("sc"));
    design.tables.push(Table::new("Garage").with_id("ga"));
    design
        .columns
        .push(Column::new("ve", "id", "INT").with_id("ve_id").primary_key());
    design
        .columns
        .push(Column::new("ga", "id", "INT").with_id("ga_id").primary_key());
    design
        .columns
        .push(Column::new("ga", "vehicle_id", "INT").with_id("ga_ve").foreign_key());
    design
        .columns
        .push(Column::new("ga", "address", "TEXT").with_id("ga_addr"));
    design.relations.push(Relation::inherits("car", "ve"));
    design.relations.push(Relation::inherits("sc", "car"));
    design
}

#[test]
fn test_self_edge_rejected() {
    assert!(!can_add_inheritance(&vehicles(), "ga", "ga"));
}

#[test]
fn test_second_parent_rejected() {
    let design = vehicles();
    assert!(!can_add_inheritance(&design, "car", "ga"));
    assert_eq!(
        check_inheritance_edge(&design, "car", "ga"),
        Err(EdgeRejection::MultipleInheritance("Car".into()))
    );
}

#[test]
fn test_cycle_closing_edges_rejected() {
    let design = vehicles();
    // root onto its grandchild and onto its child
    assert!(!can_add_inheritance(&design, "ve", "sc"));
    assert!(!can_add_inheritance(&design, "ve", "car"));
}

#[test]
fn test_legal_edges_accepted() {
    let design = vehicles();
    assert!(can_add_inheritance(&design, "ga", "sc"));
    assert!(can_add_inheritance(&design, "ve", "ga"));
}

#[test]
fn test_accepted_edges_keep_graph_acyclic() {
    let mut design = vehicles();
    let ids = ["ve", "car", "sc", "ga"];
    for source in ids {
        for target in ids {
            if can_add_inheritance(&design, source, target) {
                design.relations.push(Relation::inherits(source, target));
            }
        }
    }
    assert!(validate_design(&design).is_empty());
}

#[test]
fn test_data_edge_gate() {
    let design = vehicles();
    assert!(can_add_data_relation(
        &design,
        "ve",
        "ve_id",
        "ga",
        "ga_ve",
        RelationKind::OneToMany
    ));
    // target is neither primary nor foreign key
    assert!(!can_add_data_relation(
        &design,
        "ve",
        "ve_id",
        "ga",
        "ga_addr",
        RelationKind::OneToMany
    ));
    // source must be a primary key
    assert!(!can_add_data_relation(
        &design,
        "ga",
        "ga_ve",
        "ve",
        "ve_id",
        RelationKind::OneToOne
    ));
    // never inheritance between columns
    assert!(!can_add_data_relation(
        &design,
        "ve",
        "ve_id",
        "ga",
        "ga_ve",
        RelationKind::InheritsFrom
    ));
}

#[test]
fn test_rejection_messages() {
    assert_eq!(
        EdgeRejection::SourceNotPrimaryKey("name".into()).to_string(),
        "Connection must originate from a primary key column, 'name' is not one"
    );
    assert!(EdgeRejection::InheritanceCycle {
        child: "A".into(),
        parent: "B".into()
    }
    .to_string()
    .contains("cycle"));
}

#[test]
fn test_validate_design_reports_relation_column_on_wrong_table() {
    let mut design = vehicles();
    design.relations.push(Relation::between(
        RelationKind::OneToMany,
        "ga",
        "ve_id",
        "ga",
        "ga_ve",
    ));
    let issues = validate_design(&design);
    assert_eq!(issues.len(), 1);
    assert!(matches!(&issues[0], DesignIssue::DanglingRelation { missing, .. } if missing.contains("ve_id")));
    assert!(issues[0].to_string().contains("references unknown"));
}
