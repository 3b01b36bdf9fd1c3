//! Many-to-many relations become junction tables.

use schemaforge::mir::normalize;
use schemaforge::model::{Column, Design, InheritanceKind, Relation, RelationKind, Table};

fn school() -> Design {
    let mut design = Design::default();
    design.tables.push(Table::new("Student").with_id("st"));
    design.tables.push(Table::new("Course").with_id("co"));
    design
        .columns
        .push(Column::new("st", "id", "INT").with_id("st_id").primary_key());
    design
        .columns
        .push(Column::new("co", "id", "INT").with_id("co_id").primary_key());
    design.relations.push(Relation::between(
        RelationKind::ManyToMany,
        "st",
        "st_id",
        "co",
        "co_id",
    ));
    design
}

#[test]
fn test_junction_table_created() {
    let mir = normalize(&school()).unwrap();

    assert_eq!(mir.tables.len(), 3);
    let junction = mir.table_by_name("Student_Course").unwrap();

    let names: Vec<&str> = mir
        .columns_of(&junction.id)
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["StudentId", "CourseId"]);
    for column in mir.columns_of(&junction.id) {
        assert!(column.is_primary_key);
        assert!(column.is_foreign_key);
        assert!(!column.is_nullable);
    }

    assert_eq!(mir.count_relations(RelationKind::ManyToMany), 0);
    let links: Vec<&Relation> = mir.relations_to(&junction.id).collect();
    assert_eq!(links.len(), 2);
    assert!(links.iter().all(|r| r.kind == RelationKind::OneToMany));
    assert_eq!(links[0].source_table_id, "st");
    assert_eq!(links[0].source_column_id.as_deref(), Some("st_id"));
    assert_eq!(links[1].source_table_id, "co");
    assert_eq!(links[1].source_column_id.as_deref(), Some("co_id"));
}

#[test]
fn test_junction_uses_post_inheritance_names() {
    // Pupil is merged into Student before junctions are built
    let mut design = school();
    design.inheritance_kind = InheritanceKind::SingleTable;
    design.tables.push(Table::new("Pupil").with_id("pu"));
    design.relations.push(Relation::inherits("pu", "st"));
    design.relations[0].source_table_id = "pu".to_string();

    let mir = normalize(&design).unwrap();
    assert!(mir.table_by_name("Student_Course").is_some());
    assert!(mir.table("pu").is_none());
}

#[test]
fn test_dangling_many_to_many_left_in_place() {
    let mut design = school();
    design.relations[0].target_column_id = Some("missing".to_string());

    let mir = normalize(&design).unwrap();
    assert_eq!(mir.tables.len(), 2);
    assert_eq!(mir.relations, design.relations);
}
