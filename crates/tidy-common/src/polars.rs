//! Conversions between [`Table`] and Polars `DataFrame`.
//!
//! Ingestion reads files through Polars and export writes through Polars;
//! everything in between works on the owned [`Table`] model.

use chrono::{DateTime, NaiveDateTime};
use polars::prelude::{
    Column, DataFrame, DataType, IntoColumn, NamedFrom, PolarsError, PolarsResult, Series, TimeUnit,
};
use tidy_model::{CellValue, Column as TableColumn, ColumnType, Table};

/// Timestamps cross the bridge as milliseconds since the Unix epoch.
const TIMESTAMP_DTYPE: DataType = DataType::Datetime(TimeUnit::Milliseconds, None);

/// Builds a [`Table`] from a DataFrame, keeping column order.
///
/// The declared column type follows the Polars dtype, so an all-null integer
/// column stays `Integer`. Dtypes without a direct counterpart are read as
/// text.
pub fn table_from_dataframe(df: &DataFrame) -> PolarsResult<Table> {
    let columns = df
        .get_columns()
        .iter()
        .map(column_from_polars)
        .collect::<PolarsResult<Vec<_>>>()?;
    Table::with_row_count(columns, df.height())
        .map_err(|err| PolarsError::ComputeError(err.to_string().into()))
}

fn column_from_polars(column: &Column) -> PolarsResult<TableColumn> {
    let name = column.name().as_str();
    let series = column.as_materialized_series();
    let dtype = series.dtype();

    let (kind, cells) = if dtype.is_integer() {
        let ca = series.cast(&DataType::Int64)?;
        let cells = ca
            .i64()?
            .into_iter()
            .map(|v| v.map_or(CellValue::Missing, CellValue::Integer))
            .collect();
        (ColumnType::Integer, cells)
    } else if dtype.is_float() {
        let ca = series.cast(&DataType::Float64)?;
        let cells = ca
            .f64()?
            .into_iter()
            .map(|v| v.map_or(CellValue::Missing, CellValue::Float))
            .collect();
        (ColumnType::Float, cells)
    } else {
        match dtype {
            DataType::Boolean => {
                let cells = series
                    .bool()?
                    .into_iter()
                    .map(|v| v.map_or(CellValue::Missing, CellValue::Boolean))
                    .collect();
                (ColumnType::Boolean, cells)
            }
            DataType::Date | DataType::Datetime(_, _) => {
                let ms = series.cast(&TIMESTAMP_DTYPE)?.cast(&DataType::Int64)?;
                let cells = ms
                    .i64()?
                    .into_iter()
                    .map(|v| {
                        v.and_then(timestamp_from_millis)
                            .map_or(CellValue::Missing, CellValue::Timestamp)
                    })
                    .collect();
                (ColumnType::Timestamp, cells)
            }
            DataType::Null => (ColumnType::Text, vec![CellValue::Missing; series.len()]),
            _ => {
                let text = series.cast(&DataType::String)?;
                let cells = text
                    .str()?
                    .into_iter()
                    .map(|v| v.map_or(CellValue::Missing, |s| CellValue::Text(s.to_string())))
                    .collect();
                (ColumnType::Text, cells)
            }
        }
    };

    Ok(TableColumn::with_kind(name, kind, cells))
}

/// Builds a DataFrame from a [`Table`], keeping column order.
///
/// Categorical and mixed columns are written as strings.
pub fn table_to_dataframe(table: &Table) -> PolarsResult<DataFrame> {
    let columns = table
        .columns()
        .iter()
        .map(column_to_polars)
        .collect::<PolarsResult<Vec<_>>>()?;
    DataFrame::new(columns)
}

fn column_to_polars(column: &TableColumn) -> PolarsResult<Column> {
    let name = column.name();
    let cells = column.cells();
    let series = match column.kind() {
        ColumnType::Integer => {
            let v: Vec<Option<i64>> = cells
                .iter()
                .map(|cell| match cell {
                    CellValue::Integer(v) => Some(*v),
                    _ => None,
                })
                .collect();
            Series::new(name.into(), v)
        }
        ColumnType::Float => {
            let v: Vec<Option<f64>> = cells.iter().map(CellValue::as_f64).collect();
            Series::new(name.into(), v)
        }
        ColumnType::Boolean => {
            let v: Vec<Option<bool>> = cells
                .iter()
                .map(|cell| match cell {
                    CellValue::Boolean(v) => Some(*v),
                    _ => None,
                })
                .collect();
            Series::new(name.into(), v)
        }
        ColumnType::Timestamp => {
            let v: Vec<Option<i64>> = cells
                .iter()
                .map(|cell| match cell {
                    CellValue::Timestamp(ts) => Some(ts.and_utc().timestamp_millis()),
                    _ => None,
                })
                .collect();
            Series::new(name.into(), v).cast(&TIMESTAMP_DTYPE)?
        }
        ColumnType::Text | ColumnType::Categorical | ColumnType::Mixed => {
            let v: Vec<Option<String>> = cells
                .iter()
                .map(|cell| (!cell.is_missing()).then(|| cell.to_string()))
                .collect();
            Series::new(name.into(), v)
        }
    };
    Ok(series.into_column())
}

/// Converts epoch milliseconds to a naive UTC timestamp.
pub fn timestamp_from_millis(ms: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(ms).map(|dt| dt.naive_utc())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn sample_frame() -> DataFrame {
        let cols = vec![
            Series::new("id".into(), &[Some(1i64), Some(2), None]).into_column(),
            Series::new("score".into(), &[Some(1.5f64), None, Some(3.0)]).into_column(),
            Series::new("name".into(), &[Some("a"), None, Some("c")]).into_column(),
            Series::new("flag".into(), &[Some(true), Some(false), None]).into_column(),
        ];
        DataFrame::new(cols).unwrap()
    }

    #[test]
    fn test_table_from_dataframe_keeps_types() {
        let table = table_from_dataframe(&sample_frame()).unwrap();
        assert_eq!(table.column_names(), vec!["id", "score", "name", "flag"]);
        assert_eq!(table.shape().rows, 3);

        let id = table.column("id").unwrap();
        assert_eq!(id.kind(), ColumnType::Integer);
        assert_eq!(id.cells()[2], CellValue::Missing);

        assert_eq!(table.column("score").unwrap().kind(), ColumnType::Float);
        assert_eq!(
            table.column("name").unwrap().cells()[0],
            CellValue::Text("a".to_string())
        );
        assert_eq!(table.column("flag").unwrap().kind(), ColumnType::Boolean);
    }

    #[test]
    fn test_all_null_integer_column_stays_integer() {
        let cols = vec![Series::new("n".into(), &[None::<i64>, None]).into_column()];
        let table = table_from_dataframe(&DataFrame::new(cols).unwrap()).unwrap();
        let n = table.column("n").unwrap();
        assert_eq!(n.kind(), ColumnType::Integer);
        assert_eq!(n.missing_count(), 2);
    }

    #[test]
    fn test_table_to_dataframe() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        let table = Table::new(vec![
            TableColumn::new("when", vec![CellValue::Timestamp(ts), CellValue::Missing]),
            TableColumn::new(
                "grade",
                vec![
                    CellValue::Label("x".to_string()),
                    CellValue::Label("y".to_string()),
                ],
            ),
        ])
        .unwrap();

        let df = table_to_dataframe(&table).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.column("when").unwrap().dtype(), &TIMESTAMP_DTYPE);
        assert_eq!(df.column("grade").unwrap().dtype(), &DataType::String);

        let back = table_from_dataframe(&df).unwrap();
        assert_eq!(
            back.column("when").unwrap().cells()[0],
            CellValue::Timestamp(ts)
        );
    }
}
