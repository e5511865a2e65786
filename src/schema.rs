//! Declarative table definitions rendered to SQLite DDL.

/// Name of the end-station lookup table.
pub const STATIONS_TABLE: &str = "end_stations";
/// Name of the routes table.
pub const ROUTES_TABLE: &str = "routes";

/// Schema definition for the SQLite database
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    pub tables: Vec<TableDefinition>,
}

impl Schema {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    pub fn add_table(mut self, table: TableDefinition) -> Self {
        self.tables.push(table);
        self
    }

    /// One `CREATE TABLE IF NOT EXISTS` statement per table, in declaration order.
    pub fn to_sql(&self) -> String {
        self.tables
            .iter()
            .map(TableDefinition::to_sql)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
    pub foreign_keys: Vec<ForeignKey>,
}

impl TableDefinition {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            columns: Vec::new(),
            foreign_keys: Vec::new(),
        }
    }

    pub fn with_column(mut self, column: ColumnDefinition) -> Self {
        self.columns.push(column);
        self
    }

    pub fn with_foreign_key(mut self, key: ForeignKey) -> Self {
        self.foreign_keys.push(key);
        self
    }

    pub fn to_sql(&self) -> String {
        let mut parts: Vec<String> = self.columns.iter().map(ColumnDefinition::to_sql).collect();
        parts.extend(self.foreign_keys.iter().map(ForeignKey::to_sql));
        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n    {}\n);",
            self.name,
            parts.join(",\n    ")
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    pub name: String,
    pub data_type: DataType,
    pub constraints: Vec<ColumnConstraint>,
}

impl ColumnDefinition {
    pub fn new(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            constraints: Vec::new(),
        }
    }

    pub fn with_constraint(mut self, constraint: ColumnConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    fn to_sql(&self) -> String {
        let mut sql = format!("{} {}", self.name, self.data_type.as_sql());
        for constraint in &self.constraints {
            sql.push(' ');
            sql.push_str(constraint.as_sql());
        }
        sql
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DataType {
    Integer,
    Text,
}

impl DataType {
    fn as_sql(self) -> &'static str {
        match self {
            DataType::Integer => "INTEGER",
            DataType::Text => "TEXT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnConstraint {
    /// `PRIMARY KEY AUTOINCREMENT`, the surrogate key of a table.
    PrimaryKey,
    NotNull,
}

impl ColumnConstraint {
    fn as_sql(self) -> &'static str {
        match self {
            ColumnConstraint::PrimaryKey => "PRIMARY KEY AUTOINCREMENT",
            ColumnConstraint::NotNull => "NOT NULL",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKey {
    pub column: String,
    pub foreign_table: String,
    pub foreign_column: String,
}

impl ForeignKey {
    pub fn new(column: &str, foreign_table: &str, foreign_column: &str) -> Self {
        Self {
            column: column.to_string(),
            foreign_table: foreign_table.to_string(),
            foreign_column: foreign_column.to_string(),
        }
    }

    fn to_sql(&self) -> String {
        format!(
            "FOREIGN KEY({}) REFERENCES {}({})",
            self.column, self.foreign_table, self.foreign_column
        )
    }
}

/// End stations are deduplicated into their own table; start names stay inline
/// on each route.
pub fn routes_schema() -> Schema {
    let stations = TableDefinition::new(STATIONS_TABLE)
        .with_column(
            ColumnDefinition::new("station_id", DataType::Integer)
                .with_constraint(ColumnConstraint::PrimaryKey),
        )
        .with_column(
            ColumnDefinition::new("station_title", DataType::Text)
                .with_constraint(ColumnConstraint::NotNull),
        );

    let routes = TableDefinition::new(ROUTES_TABLE)
        .with_column(
            ColumnDefinition::new("route_id", DataType::Integer)
                .with_constraint(ColumnConstraint::PrimaryKey),
        )
        .with_column(
            ColumnDefinition::new("start_name", DataType::Text)
                .with_constraint(ColumnConstraint::NotNull),
        )
        .with_column(
            ColumnDefinition::new("station_id", DataType::Integer)
                .with_constraint(ColumnConstraint::NotNull),
        )
        .with_column(
            ColumnDefinition::new("route_number", DataType::Integer)
                .with_constraint(ColumnConstraint::NotNull),
        )
        .with_foreign_key(ForeignKey::new("station_id", STATIONS_TABLE, "station_id"));

    Schema::new().add_table(stations).add_table(routes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stations_table_ddl() {
        let schema = routes_schema();
        assert_eq!(
            schema.tables[0].to_sql(),
            "CREATE TABLE IF NOT EXISTS end_stations (\n    \
             station_id INTEGER PRIMARY KEY AUTOINCREMENT,\n    \
             station_title TEXT NOT NULL\n);"
        );
    }

    #[test]
    fn routes_table_references_stations() {
        let sql = routes_schema().tables[1].to_sql();
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS routes ("));
        assert!(sql.contains("route_number INTEGER NOT NULL"));
        assert!(sql.contains("FOREIGN KEY(station_id) REFERENCES end_stations(station_id)"));
    }

    #[test]
    fn tables_render_in_declaration_order() {
        let sql = routes_schema().to_sql();
        let stations = sql.find("end_stations (").unwrap();
        let routes = sql.find("routes (").unwrap();
        assert!(stations < routes);
    }
}
