//! Column sets and row flattening for every entity table.

use api::{City, Country, Entity, State, User};

use crate::table::{CellValue, Column, Row};

/// A record that can be shown by [`crate::DataTable`].
pub trait TableRecord: Entity {
    fn columns() -> Vec<Column>;
    fn cells(&self) -> Vec<CellValue>;

    fn row(&self) -> Row {
        Row {
            key: self.id().to_string(),
            cells: self.cells(),
        }
    }
}

pub fn rows<E: TableRecord>(records: &[E]) -> Vec<Row> {
    records.iter().map(TableRecord::row).collect()
}

/// The record behind a row key.
pub fn find_by_key<'a, E: Entity>(records: &'a [E], key: &str) -> Option<&'a E> {
    records.iter().find(|record| record.id().to_string() == key)
}

impl TableRecord for Country {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("CountryCode", "Country Code"),
            Column::new("CountryName", "Country Name"),
            Column::new("SortSeq", "Sort Sequence"),
            Column::new("Active", "Active"),
        ]
    }

    fn cells(&self) -> Vec<CellValue> {
        vec![
            CellValue::text(&self.country_code),
            CellValue::text(&self.country_name),
            CellValue::Int(self.sort_seq),
            CellValue::Flag(self.active),
        ]
    }
}

impl TableRecord for State {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("StateCode", "State Code"),
            Column::new("StateName", "State Name"),
            Column::new("CountryCode", "Country Code"),
            Column::new("SortSeq", "Sort Sequence"),
            Column::new("Active", "Active"),
        ]
    }

    fn cells(&self) -> Vec<CellValue> {
        vec![
            CellValue::text(&self.state_code),
            CellValue::text(&self.state_name),
            CellValue::optional(Some(&self.country_code)),
            CellValue::Int(self.sort_seq),
            CellValue::Flag(self.active),
        ]
    }
}

impl TableRecord for City {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("CityName", "City Name"),
            Column::new("StateCode", "State Code"),
            Column::new("CountryCode", "Country Code"),
            Column::new("SortSeq", "Sort Sequence"),
            Column::new("Active", "Active"),
        ]
    }

    fn cells(&self) -> Vec<CellValue> {
        vec![
            CellValue::text(&self.city_name),
            CellValue::optional(self.state_code.as_deref()),
            CellValue::optional(self.country_code.as_deref()),
            CellValue::Int(self.sort_seq),
            CellValue::Flag(self.active),
        ]
    }
}

impl TableRecord for User {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("id", "ID"),
            Column::new("email", "Email"),
            Column::new("phone", "Phone"),
            Column::new("password", "Password").unsorted(),
            Column::new("createdAt", "Created"),
            Column::new("updatedAt", "Updated"),
        ]
    }

    fn cells(&self) -> Vec<CellValue> {
        vec![
            CellValue::Int(self.id),
            CellValue::text(&self.email),
            CellValue::optional(Some(&self.phone)),
            CellValue::Secret(self.password.clone()),
            CellValue::optional(Some(&format_timestamp(&self.created_at))),
            CellValue::optional(Some(&format_timestamp(&self.updated_at))),
        ]
    }
}

/// `2024-01-31T09:15:00.000Z` → `2024-01-31 09:15:00`. Anything else is
/// shown as served.
pub fn format_timestamp(raw: &str) -> String {
    match raw.split_once('T') {
        Some((date, time)) if date.len() == 10 => {
            let time = time.trim_end_matches('Z');
            let time = time.split('.').next().unwrap_or(time);
            format!("{date} {time}")
        }
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_line_up_with_columns() {
        let city = City {
            id: "c1".into(),
            city_name: "Springfield".into(),
            state_code: None,
            country_code: Some("US".into()),
            sort_seq: 4,
            active: false,
        };
        let row = city.row();
        assert_eq!(row.key, "c1");
        assert_eq!(row.cells.len(), City::columns().len());
        assert_eq!(row.cells[1], CellValue::Missing);
        assert_eq!(row.cells[4].display(), "No");
    }

    #[test]
    fn test_user_password_is_secret() {
        let user = User {
            id: 3,
            email: "a@b.com".into(),
            phone: "555".into(),
            password: "pw".into(),
            created_at: "2024-01-31T09:15:00.000Z".into(),
            updated_at: String::new(),
        };
        let row = user.row();
        assert_eq!(row.key, "3");
        assert!(matches!(row.cells[3], CellValue::Secret(_)));
        assert_eq!(row.cells[4].display(), "2024-01-31 09:15:00");
        assert_eq!(row.cells[5], CellValue::Missing);
        assert_eq!(find_by_key(&[user.clone()], "3"), Some(&user));
    }

    #[test]
    fn test_geo_tables_share_common_columns() {
        let common = |columns: Vec<Column>| {
            columns
                .into_iter()
                .filter(|c| c.id == "SortSeq" || c.id == "Active")
                .collect::<Vec<_>>()
        };
        let country = common(Country::columns());
        assert_eq!(country.len(), 2);
        assert!(country.iter().all(|c| c.sortable));
        assert_eq!(country, common(State::columns()));
        assert_eq!(country, common(City::columns()));
        assert_eq!(country[0].label, "Sort Sequence");
    }

    #[test]
    fn test_format_timestamp_passthrough() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
