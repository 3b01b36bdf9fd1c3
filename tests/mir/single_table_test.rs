//! Single-table inheritance: every hierarchy collapses into its root.

use schemaforge::mir::normalize;
use schemaforge::model::{Column, Design, InheritanceKind, Relation, RelationKind, Table};

fn abc() -> Design {
    let mut design = Design::new(InheritanceKind::SingleTable);
    design.tables.push(Table::new("A").with_id("a"));
    design.tables.push(Table::new("B").with_id("b"));
    design.tables.push(Table::new("C").with_id("c"));
    design
        .columns
        .push(Column::new("a", "id", "INT").with_id("a_id").primary_key());
    design.columns.push(Column::new("b", "b1", "TEXT").with_id("b1"));
    design.columns.push(Column::new("c", "c1", "REAL").with_id("c1"));
    design.columns.push(Column::new("c", "c2", "BLOB").with_id("c2"));
    design.relations.push(Relation::inherits("b", "a"));
    design.relations.push(Relation::inherits("c", "b"));
    design
}

#[test]
fn test_chain_collapses_into_root() {
    let mir = normalize(&abc()).unwrap();

    assert_eq!(mir.tables.len(), 1);
    assert_eq!(mir.tables[0].name, "A");

    let names: Vec<&str> = mir.columns_of("a").map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["id", "b1", "c1", "c2", "A_TYPE"]);
    assert!(mir.columns.iter().all(|c| c.table_id == "a"));
    assert_eq!(mir.count_relations(RelationKind::InheritsFrom), 0);
}

#[test]
fn test_discriminator_added_once_per_hierarchy() {
    let mut design = abc();
    design.tables.push(Table::new("X").with_id("x"));
    design.tables.push(Table::new("Y").with_id("y"));
    design.relations.push(Relation::inherits("y", "x"));

    let mir = normalize(&design).unwrap();
    let discriminators: Vec<&str> = mir
        .columns
        .iter()
        .filter(|c| c.name.ends_with("_TYPE"))
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(discriminators, vec!["A_TYPE", "X_TYPE"]);
}

#[test]
fn test_relations_into_removed_members_follow_the_root() {
    let mut design = abc();
    design.tables.push(Table::new("Owner").with_id("ow"));
    design
        .columns
        .push(Column::new("ow", "id", "INT").with_id("ow_id").primary_key());
    design
        .columns
        .push(Column::new("c", "owner_id", "INT").with_id("c_ow").foreign_key());
    design.relations.push(Relation::between(
        RelationKind::OneToMany,
        "ow",
        "ow_id",
        "c",
        "c_ow",
    ));

    let mir = normalize(&design).unwrap();
    assert_eq!(mir.relations.len(), 1);
    let relation = &mir.relations[0];
    assert_eq!(relation.source_table_id, "ow");
    assert_eq!(relation.target_table_id, "a");
    assert_eq!(mir.column("c_ow").unwrap().table_id, "a");
}

#[test]
fn test_relations_out_of_removed_members_keep_their_target() {
    let mut design = abc();
    design.tables.push(Table::new("Badge").with_id("bd"));
    design
        .columns
        .push(Column::new("b", "badge_key", "INT").with_id("b_key").primary_key());
    design
        .columns
        .push(Column::new("bd", "holder", "INT").with_id("bd_holder").foreign_key());
    design.relations.push(Relation::between(
        RelationKind::OneToOne,
        "b",
        "b_key",
        "bd",
        "bd_holder",
    ));

    let mir = normalize(&design).unwrap();
    assert_eq!(mir.relations.len(), 1);
    let relation = &mir.relations[0];
    assert_eq!(relation.source_table_id, "a");
    assert_eq!(relation.source_column_id.as_deref(), Some("b_key"));
    assert_eq!(relation.target_table_id, "bd");
    assert_eq!(relation.target_column_id.as_deref(), Some("bd_holder"));
    assert!(mir.table("bd").is_some());
}

#[test]
fn test_abstract_root_survives_merge() {
    let mut design = abc();
    design.tables[0].is_abstract = true;
    let mir = normalize(&design).unwrap();
    assert_eq!(mir.tables.len(), 1);
    assert!(mir.tables[0].is_abstract);
}
