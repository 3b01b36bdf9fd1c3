//! Class-table inheritance: every table stays, descendants share the root key.

use schemaforge::mir::normalize;
use schemaforge::model::{Column, Design, InheritanceKind, Relation, RelationKind, Table};

fn people() -> Design {
    let mut design = Design::new(InheritanceKind::ClassTable);
    design.tables.push(Table::new("Person").with_id("pe"));
    design.tables.push(Table::new("Employee").with_id("em"));
    design
        .columns
        .push(Column::new("pe", "id", "INT").with_id("pe_id").primary_key());
    design
        .columns
        .push(Column::new("em", "salary", "DECIMAL(10, 2)").with_id("em_sal"));
    design.relations.push(Relation::inherits("em", "pe"));
    design
}

#[test]
fn test_child_gains_shared_key() {
    let mir = normalize(&people()).unwrap();

    assert_eq!(mir.tables.len(), 2);
    let link = mir.column_by_name("em", "id").unwrap();
    assert_eq!(link.data_type, "INT");
    assert!(link.is_primary_key);
    assert!(link.is_foreign_key);
    assert!(link.is_unique);
    assert!(!link.is_nullable);

    assert_eq!(mir.relations.len(), 1);
    let relation = &mir.relations[0];
    assert_eq!(relation.kind, RelationKind::OneToOne);
    assert_eq!(relation.source_table_id, "pe");
    assert_eq!(relation.source_column_id.as_deref(), Some("pe_id"));
    assert_eq!(relation.target_table_id, "em");
    assert_eq!(relation.target_column_id.as_deref(), Some(link.id.as_str()));
}

#[test]
fn test_original_columns_untouched() {
    let design = people();
    let mir = normalize(&design).unwrap();
    for column in &design.columns {
        assert_eq!(mir.column(&column.id), Some(column));
    }
    assert_eq!(mir.columns.len(), design.columns.len() + 1);
}

#[test]
fn test_missing_root_key_is_tolerated() {
    let mut design = people();
    design.columns[0].is_primary_key = false;

    let mir = normalize(&design).unwrap();
    assert_eq!(mir.tables.len(), 2);
    assert_eq!(mir.columns.len(), 2);
    assert!(mir.relations.is_empty());
}
