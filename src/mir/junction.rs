//! Many-to-many expansion into junction tables.

use tracing::{debug, warn};

use crate::model::{Column, Design, Relation, RelationKind, Table};

/// Replace every resolvable `ManyToMany` relation with a junction table
/// and two `OneToMany` relations.
///
/// A relation whose tables or columns do not resolve is kept as is. Each
/// relation gets its own junction, even between the same pair of tables.
pub(super) fn expand_many_to_many(design: &mut Design) {
    let mut kept = Vec::with_capacity(design.relations.len());
    let mut tables = Vec::new();
    let mut columns = Vec::new();
    let mut relations = Vec::new();

    for relation in std::mem::take(&mut design.relations) {
        if relation.kind != RelationKind::ManyToMany {
            kept.push(relation);
            continue;
        }

        let Some(junction) = Junction::resolve(design, &relation) else {
            warn!(
                source_table_id = %relation.source_table_id,
                target_table_id = %relation.target_table_id,
                "many-to-many relation has unresolved endpoints, leaving it as is"
            );
            kept.push(relation);
            continue;
        };

        let (table, table_columns, table_relations) = junction.build();
        tables.push(table);
        columns.extend(table_columns);
        relations.extend(table_relations);
    }

    debug!(junctions = tables.len(), "many-to-many relations expanded");
    design.relations = kept;
    design.relations.extend(relations);
    design.tables.extend(tables);
    design.columns.extend(columns);
}

/// The resolved endpoints of one many-to-many relation.
struct Junction<'a> {
    source: &'a Table,
    source_key: &'a Column,
    target: &'a Table,
    target_key: &'a Column,
}

impl<'a> Junction<'a> {
    fn resolve(design: &'a Design, relation: &Relation) -> Option<Self> {
        Some(Self {
            source: design.table(&relation.source_table_id)?,
            source_key: design.column(relation.source_column_id.as_deref()?)?,
            target: design.table(&relation.target_table_id)?,
            target_key: design.column(relation.target_column_id.as_deref()?)?,
        })
    }

    fn build(&self) -> (Table, Vec<Column>, Vec<Relation>) {
        let mut table = Table::new(format!("{}_{}", self.source.name, self.target.name));
        table.position = self.source.position.midpoint(&self.target.position);

        let source_ref = self.key_column(&table, self.source, self.source_key);
        let target_ref = self.key_column(&table, self.target, self.target_key);

        let relations = vec![
            Relation::between(
                RelationKind::OneToMany,
                self.source.id.as_str(),
                self.source_key.id.as_str(),
                table.id.as_str(),
                source_ref.id.as_str(),
            ),
            Relation::between(
                RelationKind::OneToMany,
                self.target.id.as_str(),
                self.target_key.id.as_str(),
                table.id.as_str(),
                target_ref.id.as_str(),
            ),
        ];

        (table, vec![source_ref, target_ref], relations)
    }

    /// `<Referenced>Id`, typed like the referenced key.
    fn key_column(&self, junction: &Table, referenced: &Table, key: &Column) -> Column {
        Column::new(
            junction.id.as_str(),
            format!("{}Id", referenced.name),
            key.data_type.as_str(),
        )
        .primary_key()
        .foreign_key()
    }
}
