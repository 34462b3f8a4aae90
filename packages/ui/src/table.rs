//! # List-table engine
//!
//! [`TableState`] holds the three pieces of view state a list screen keeps on
//! top of its fetched collection: a global filter, at most one sort column and
//! a page window. [`TableState::view`] derives the visible page from the full
//! collection every time, in the order filter → sort → page slice. Nothing is
//! ever paged or sorted server-side.
//!
//! The engine knows nothing about entities. Screens flatten their records into
//! [`Row`]s of [`CellValue`]s (see [`crate::columns`]) and keep the row `key`
//! to map actions back to a record.

use std::cmp::Ordering;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_PAGE_SIZES: [usize; 3] = [5, 10, 25];
/// Shown for every secret regardless of its length.
pub const SECRET_MASK: &str = "******";

/// One cell of a row, typed for display, filtering and sorting.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Text(String),
    Int(i64),
    /// Rendered `Yes` / `No`.
    Flag(bool),
    /// Rendered masked unless revealed, never matched by the filter.
    Secret(String),
    /// Rendered `N/A`.
    Missing,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// `Missing` for `None` or blank strings.
    pub fn optional(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => CellValue::Text(v.to_string()),
            _ => CellValue::Missing,
        }
    }

    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Int(n) => n.to_string(),
            CellValue::Flag(true) => "Yes".to_string(),
            CellValue::Flag(false) => "No".to_string(),
            CellValue::Secret(_) => SECRET_MASK.to_string(),
            CellValue::Missing => "N/A".to_string(),
        }
    }

    /// Case-insensitive substring match; `needle` is already lowercase.
    fn matches(&self, needle: &str) -> bool {
        match self {
            CellValue::Secret(_) => false,
            other => other.display().to_lowercase().contains(needle),
        }
    }

    fn compare(&self, other: &CellValue) -> Ordering {
        use CellValue::*;
        match (self, other) {
            (Missing, Missing) => Ordering::Equal,
            (Missing, _) => Ordering::Less,
            (_, Missing) => Ordering::Greater,
            (Int(a), Int(b)) => a.cmp(b),
            (Flag(a), Flag(b)) => a.cmp(b),
            (Text(a), Text(b)) | (Secret(a), Secret(b)) => {
                a.to_lowercase().cmp(&b.to_lowercase())
            }
            (a, b) => a.display().to_lowercase().cmp(&b.display().to_lowercase()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub id: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub filterable: bool,
}

impl Column {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            sortable: true,
            filterable: true,
        }
    }

    pub const fn unsorted(mut self) -> Self {
        self.sortable = false;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    /// Identifier of the underlying record.
    pub key: String,
    pub cells: Vec<CellValue>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub column: usize,
    pub direction: SortDirection,
}

/// Derived page of a collection.
#[derive(Clone, Debug, PartialEq)]
pub struct TableView {
    pub rows: Vec<Row>,
    /// Rows surviving the filter, across all pages.
    pub filtered_count: usize,
    pub page_index: usize,
    pub page_count: usize,
}

impl TableView {
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page_index + 1, self.page_count.max(1))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableState {
    filter: String,
    sort: Option<SortSpec>,
    page_index: usize,
    page_size: usize,
    page_sizes: Vec<usize>,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZES.to_vec())
    }
}

/// Number of pages for `count` rows; zero rows still make one (empty) page.
pub fn page_count(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

impl TableState {
    pub fn new(page_size: usize, mut page_sizes: Vec<usize>) -> Self {
        let page_size = page_size.max(1);
        page_sizes.retain(|size| *size > 0);
        if !page_sizes.contains(&page_size) {
            page_sizes.push(page_size);
        }
        page_sizes.sort_unstable();
        page_sizes.dedup();
        Self {
            filter: String::new(),
            sort: None,
            page_index: 0,
            page_size,
            page_sizes,
        }
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_sizes(&self) -> &[usize] {
        &self.page_sizes
    }

    pub fn sort_direction(&self, column: usize) -> Option<SortDirection> {
        self.sort
            .filter(|spec| spec.column == column)
            .map(|spec| spec.direction)
    }

    /// A new filter always starts from the first page.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.page_index = 0;
    }

    /// Ascending → descending → none on the same column; another column
    /// replaces the active sort and starts ascending.
    pub fn toggle_sort(&mut self, column: usize) {
        self.sort = match self.sort {
            Some(SortSpec {
                column: active,
                direction: SortDirection::Ascending,
            }) if active == column => Some(SortSpec {
                column,
                direction: SortDirection::Descending,
            }),
            Some(SortSpec {
                column: active,
                direction: SortDirection::Descending,
            }) if active == column => None,
            _ => Some(SortSpec {
                column,
                direction: SortDirection::Ascending,
            }),
        };
    }

    /// Keep the first visible row on screen, then clamp to the `count` rows
    /// currently passing the filter.
    pub fn set_page_size(&mut self, page_size: usize, count: usize) {
        let page_size = page_size.max(1);
        let top_row = self.page_index * self.page_size;
        self.page_size = page_size;
        self.page_index = top_row / page_size;
        self.clamp(count);
    }

    pub fn clamp(&mut self, count: usize) {
        self.page_index = self.page_index.min(page_count(count, self.page_size) - 1);
    }

    /// Judged on the page actually shown for `count` rows.
    pub fn can_previous(&self, count: usize) -> bool {
        self.page_index.min(page_count(count, self.page_size) - 1) > 0
    }

    pub fn can_next(&self, count: usize) -> bool {
        self.page_index + 1 < page_count(count, self.page_size)
    }

    pub fn first_page(&mut self) {
        self.page_index = 0;
    }

    /// Step back from the page shown for `count` rows, not from a stale
    /// index left behind by a shrunken collection.
    pub fn previous_page(&mut self, count: usize) {
        self.clamp(count);
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn next_page(&mut self, count: usize) {
        if self.can_next(count) {
            self.page_index += 1;
        }
    }

    pub fn last_page(&mut self, count: usize) {
        self.page_index = page_count(count, self.page_size) - 1;
    }

    /// Filter, sort and slice `rows`. Only `filterable` columns take part in
    /// the filter.
    pub fn view(&self, columns: &[Column], rows: &[Row]) -> TableView {
        let needle = self.filter.trim().to_lowercase();
        let mut visible: Vec<&Row> = rows
            .iter()
            .filter(|row| {
                needle.is_empty()
                    || row
                        .cells
                        .iter()
                        .zip(columns)
                        .any(|(cell, column)| column.filterable && cell.matches(&needle))
            })
            .collect();

        if let Some(spec) = self.sort {
            let cell = |row: &Row| row.cells.get(spec.column).cloned().unwrap_or(CellValue::Missing);
            visible.sort_by(|a, b| {
                let ordering = cell(a).compare(&cell(b));
                match spec.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        let filtered_count = visible.len();
        let page_count = page_count(filtered_count, self.page_size);
        let page_index = self.page_index.min(page_count - 1);
        let rows = visible
            .into_iter()
            .skip(page_index * self.page_size)
            .take(self.page_size)
            .cloned()
            .collect();

        TableView {
            rows,
            filtered_count,
            page_index,
            page_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<Column> {
        vec![
            Column::new("code", "Code"),
            Column::new("name", "Name"),
            Column::new("seq", "Sort Seq"),
            Column::new("secret", "Secret"),
        ]
    }

    fn row(key: usize, code: &str, name: &str, seq: i64) -> Row {
        Row {
            key: key.to_string(),
            cells: vec![
                CellValue::text(code),
                CellValue::text(name),
                CellValue::Int(seq),
                CellValue::Secret("hunter2".into()),
            ],
        }
    }

    fn sample(n: usize) -> Vec<Row> {
        (0..n)
            .map(|i| {
                let code = format!("C{:02}", (i * 7) % n);
                let name = if i % 3 == 0 { format!("North {i}") } else { format!("South {i}") };
                row(i, &code, &name, ((i * 5) % 4) as i64)
            })
            .collect()
    }

    fn keys(view: &TableView) -> Vec<String> {
        view.rows.iter().map(|r| r.key.clone()).collect()
    }

    fn is_subsequence(part: &[Row], whole: &[Row]) -> bool {
        let mut it = whole.iter();
        part.iter().all(|p| it.any(|w| w.key == p.key))
    }

    #[test]
    fn test_filtered_view_is_subsequence_matching_filter() {
        let rows = sample(40);
        for filter in ["", "north", "SOUTH 1", "c0", "zzz", "hunter"] {
            let mut state = TableState::default();
            state.set_filter(filter);
            for page in 0..5 {
                state.first_page();
                for _ in 0..page {
                    state.next_page(rows.len());
                }
                let view = state.view(&columns(), &rows);
                assert!(is_subsequence(&view.rows, &rows));
                let needle = filter.to_lowercase();
                for r in &view.rows {
                    assert!(
                        needle.is_empty()
                            || r.cells[..3]
                                .iter()
                                .any(|c| c.display().to_lowercase().contains(&needle))
                    );
                }
            }
        }
    }

    #[test]
    fn test_secret_cells_are_not_filtered() {
        let rows = sample(5);
        let mut state = TableState::default();
        state.set_filter("hunter2");
        assert_eq!(state.view(&columns(), &rows).filtered_count, 0);
    }

    #[test]
    fn test_unfilterable_column_ignored() {
        let rows = sample(5);
        let mut cols = columns();
        cols[1].filterable = false;
        let mut state = TableState::default();
        state.set_filter("north");
        assert_eq!(state.view(&cols, &rows).filtered_count, 0);
    }

    #[test]
    fn test_sort_cycle_returns_to_unsorted() {
        let rows = sample(12);
        let mut state = TableState::default();
        let original = keys(&state.view(&columns(), &rows));

        state.toggle_sort(2);
        assert_eq!(state.sort_direction(2), Some(SortDirection::Ascending));
        let asc = state.view(&columns(), &rows);
        let seqs: Vec<_> = asc.rows.iter().map(|r| r.cells[2].clone()).collect();
        assert!(seqs.windows(2).all(|w| w[0].compare(&w[1]) != Ordering::Greater));

        state.toggle_sort(2);
        assert_eq!(state.sort_direction(2), Some(SortDirection::Descending));

        state.toggle_sort(2);
        assert_eq!(state.sort(), None);
        assert_eq!(keys(&state.view(&columns(), &rows)), original);
    }

    #[test]
    fn test_other_column_replaces_sort() {
        let mut state = TableState::default();
        state.toggle_sort(0);
        state.toggle_sort(0);
        state.toggle_sort(1);
        assert_eq!(state.sort_direction(0), None);
        assert_eq!(state.sort_direction(1), Some(SortDirection::Ascending));
    }

    #[test]
    fn test_sort_is_stable() {
        let rows = vec![
            row(0, "B", "x", 2),
            row(1, "A", "x", 1),
            row(2, "C", "x", 2),
            row(3, "D", "x", 1),
        ];
        let mut state = TableState::default();
        state.toggle_sort(2);
        assert_eq!(keys(&state.view(&columns(), &rows)), ["1", "3", "0", "2"]);
        state.toggle_sort(2);
        assert_eq!(keys(&state.view(&columns(), &rows)), ["0", "2", "1", "3"]);
    }

    #[test]
    fn test_numbers_sort_numerically_and_missing_first() {
        let rows = vec![
            Row { key: "a".into(), cells: vec![CellValue::Int(10)] },
            Row { key: "b".into(), cells: vec![CellValue::Missing] },
            Row { key: "c".into(), cells: vec![CellValue::Int(9)] },
        ];
        let cols = vec![Column::new("n", "N")];
        let mut state = TableState::default();
        state.toggle_sort(0);
        assert_eq!(keys(&state.view(&cols, &rows)), ["b", "c", "a"]);
    }

    #[test]
    fn test_text_sort_ignores_case() {
        let rows = vec![row(0, "b", "", 0), row(1, "A", "", 0), row(2, "C", "", 0)];
        let mut state = TableState::default();
        state.toggle_sort(0);
        assert_eq!(keys(&state.view(&columns(), &rows)), ["1", "0", "2"]);
    }

    #[test]
    fn test_unsorted_column_header() {
        let col = Column::new("actions", "Actions").unsorted();
        assert!(!col.sortable);
    }

    #[test]
    fn test_page_index_in_range_after_page_size_change() {
        for count in [0usize, 1, 9, 10, 11, 24, 25, 26, 60] {
            let rows = sample(count);
            for from in [5usize, 10, 25] {
                for to in [5usize, 10, 25] {
                    let mut state = TableState::default();
                    state.set_page_size(from, count);
                    state.last_page(count);
                    state.set_page_size(to, count);
                    let pages = count.div_ceil(to);
                    if count == 0 {
                        assert_eq!(state.page_index(), 0);
                    } else {
                        assert!(state.page_index() < pages);
                    }
                    assert_eq!(state.view(&columns(), &rows).page_index, state.page_index());
                }
            }
        }
    }

    #[test]
    fn test_page_size_change_keeps_top_row() {
        let mut state = TableState::default();
        state.set_page_size(5, 60);
        for _ in 0..4 {
            state.next_page(60);
        }
        // Top row is 20
        state.set_page_size(10, 60);
        assert_eq!(state.page_index(), 2);
        state.set_page_size(25, 60);
        assert_eq!(state.page_index(), 0);
    }

    #[test]
    fn test_view_clamps_when_collection_shrinks() {
        let mut state = TableState::default();
        state.last_page(35);
        assert_eq!(state.page_index(), 3);
        let view = state.view(&columns(), &sample(12));
        assert_eq!(view.page_index, 1);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.label(), "Page 2 of 2");
    }

    #[test]
    fn test_navigation_stops_at_bounds() {
        let mut state = TableState::default();
        assert!(!state.can_previous(25));
        state.previous_page(25);
        assert_eq!(state.page_index(), 0);

        state.last_page(25);
        assert_eq!(state.page_index(), 2);
        assert!(!state.can_next(25));
        state.next_page(25);
        assert_eq!(state.page_index(), 2);
        assert!(state.can_previous(25));

        state.first_page();
        assert_eq!(state.page_index(), 0);
    }

    #[test]
    fn test_filter_resets_page() {
        let mut state = TableState::default();
        state.last_page(40);
        state.set_filter("north");
        assert_eq!(state.page_index(), 0);
    }

    #[test]
    fn test_empty_collection_has_one_page() {
        let view = TableState::default().view(&columns(), &[]);
        assert_eq!(view.page_count, 1);
        assert_eq!(view.label(), "Page 1 of 1");
        assert!(view.rows.is_empty());
    }

    #[test]
    fn test_page_sizes_include_configured_default() {
        let state = TableState::new(20, vec![25, 5, 0, 10]);
        assert_eq!(state.page_sizes(), [5, 10, 20, 25]);
        assert_eq!(state.page_size(), 20);
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(CellValue::Flag(true).display(), "Yes");
        assert_eq!(CellValue::Flag(false).display(), "No");
        assert_eq!(CellValue::Missing.display(), "N/A");
        assert_eq!(CellValue::optional(Some(" ")), CellValue::Missing);
        assert_eq!(CellValue::Secret("abc".into()).display(), SECRET_MASK);
        assert_eq!(
            CellValue::Secret("a much longer secret".into()).display(),
            SECRET_MASK
        );
    }

    #[test]
    fn test_previous_page_after_collection_shrinks() {
        let mut state = TableState::default();
        state.last_page(35);
        assert_eq!(state.page_index(), 3);

        let rows = sample(12);
        let shown = state.view(&columns(), &rows).page_index;
        assert_eq!(shown, 1);
        assert!(state.can_previous(rows.len()));

        state.previous_page(rows.len());
        let view = state.view(&columns(), &rows);
        assert_eq!(view.page_index, 0);
        assert_eq!(state.page_index(), 0);
        assert!(!state.can_previous(rows.len()));
    }

    #[test]
    fn test_can_previous_on_emptied_collection() {
        let mut state = TableState::default();
        state.last_page(30);
        assert!(!state.can_previous(0));
        state.clamp(0);
        assert_eq!(state.page_index(), 0);
    }
}
