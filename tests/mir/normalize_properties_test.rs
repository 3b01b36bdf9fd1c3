//! Properties that hold for every normalized design.

use schemaforge::mir::{normalize, NormalizeError};
use schemaforge::model::{Column, Design, InheritanceKind, Relation, RelationKind, Table};

const KINDS: [InheritanceKind; 3] = [
    InheritanceKind::SingleTable,
    InheritanceKind::ClassTable,
    InheritanceKind::ConcreteTable,
];

/// One three-level hierarchy plus two many-to-many edges out of Keeper.
fn zoo(kind: InheritanceKind) -> Design {
    let mut design = Design::new(kind);
    let tables = [
        ("an", "Animal"),
        ("ma", "Mammal"),
        ("do", "Dog"),
        ("ca", "Cat"),
        ("ke", "Keeper"),
        ("en", "Enclosure"),
    ];
    for (id, name) in tables {
        design.tables.push(Table::new(name).with_id(id));
    }

    for (table, id) in [("an", "an_id"), ("ke", "ke_id"), ("en", "en_id")] {
        design
            .columns
            .push(Column::new(table, "id", "INT").with_id(id).primary_key());
    }
    design.columns.push(Column::new("ma", "fur", "TEXT"));
    design.columns.push(Column::new("do", "breed", "TEXT"));
    design.columns.push(Column::new("ca", "lives", "INT"));

    design.relations.push(Relation::inherits("ma", "an"));
    design.relations.push(Relation::inherits("do", "ma"));
    design.relations.push(Relation::inherits("ca", "ma"));
    design.relations.push(Relation::between(
        RelationKind::ManyToMany,
        "ke",
        "ke_id",
        "an",
        "an_id",
    ));
    design.relations.push(Relation::between(
        RelationKind::ManyToMany,
        "ke",
        "ke_id",
        "en",
        "en_id",
    ));
    design
}

#[test]
fn test_no_inheritance_or_many_to_many_remains() {
    for kind in KINDS {
        let mir = normalize(&zoo(kind)).unwrap();
        assert_eq!(mir.count_relations(RelationKind::InheritsFrom), 0, "{kind}");
        assert_eq!(mir.count_relations(RelationKind::ManyToMany), 0, "{kind}");
        assert_eq!(mir.inheritance_kind, kind);
    }
}

#[test]
fn test_every_column_has_a_table() {
    for kind in KINDS {
        let mir = normalize(&zoo(kind)).unwrap();
        for column in &mir.columns {
            assert!(
                mir.table(&column.table_id).is_some(),
                "{kind}: orphan column {}",
                column.name
            );
        }
    }
}

#[test]
fn test_normalize_is_deterministic_in_shape() {
    for kind in KINDS {
        let design = zoo(kind);
        let first = normalize(&design).unwrap();
        let second = normalize(&design).unwrap();
        let names = |d: &Design| d.tables.iter().map(|t| t.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&first), names(&second));
        assert_eq!(first.columns.len(), second.columns.len());
        assert_eq!(first.relations.len(), second.relations.len());
    }
}

#[test]
fn test_table_sets_per_kind() {
    let names = |kind| {
        normalize(&zoo(kind))
            .unwrap()
            .tables
            .iter()
            .map(|t| t.name.clone())
            .collect::<Vec<_>>()
    };

    assert_eq!(
        names(InheritanceKind::SingleTable),
        vec!["Animal", "Keeper", "Enclosure", "Keeper_Animal", "Keeper_Enclosure"]
    );
    assert_eq!(
        names(InheritanceKind::ClassTable),
        vec![
            "Animal",
            "Mammal",
            "Dog",
            "Cat",
            "Keeper",
            "Enclosure",
            "Keeper_Animal",
            "Keeper_Enclosure"
        ]
    );
    assert_eq!(
        names(InheritanceKind::ConcreteTable),
        names(InheritanceKind::ClassTable)
    );
}

#[test]
fn test_many_to_many_into_dropped_abstract_table_is_left_dangling() {
    let mut design = zoo(InheritanceKind::ConcreteTable);
    design.tables[0].is_abstract = true;

    let mir = normalize(&design).unwrap();
    let names: Vec<&str> = mir.tables.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Mammal", "Dog", "Cat", "Keeper", "Enclosure", "Keeper_Enclosure"]
    );
    assert_eq!(mir.count_relations(RelationKind::ManyToMany), 1);
    assert!(mir.column_by_name("ma", "id").is_some());
}

#[test]
fn test_cyclic_input_fails_fast() {
    let mut design = zoo(InheritanceKind::SingleTable);
    design.relations.push(Relation::inherits("an", "do"));

    match normalize(&design) {
        Err(NormalizeError::InheritanceCycle { tables }) => {
            assert!(tables.contains(&"Animal".to_string()));
            assert!(tables.contains(&"Dog".to_string()));
        }
        other => panic!("expected a cycle error, got {:?}", other),
    }
}
