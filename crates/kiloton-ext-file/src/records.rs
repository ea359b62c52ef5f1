//! CSV test record source.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use kiloton_core::{Coordinates, Country, TestDate, TestRecord};

use crate::error::{FileError, FileResult};

// =============================================================================
// COLUMN LAYOUT
// =============================================================================

/// Column headers of the CORGIS nuclear explosions file.
///
/// The upstream spellings ("Cordinates", "Yeild") are part of the format.
pub mod columns {
    /// Country credited with the test.
    pub const COUNTRY: &str = "WEAPON SOURCE COUNTRY";
    /// Deployment site label.
    pub const DEPLOYMENT_LOCATION: &str = "WEAPON DEPLOYMENT LOCATION";
    /// Site latitude.
    pub const LATITUDE: &str = "Location.Cordinates.Latitude";
    /// Site longitude.
    pub const LONGITUDE: &str = "Location.Cordinates.Longitude";
    /// Lower-bound yield in kilotons.
    pub const YIELD_LOWER: &str = "Data.Yeild.Lower";
    /// Upper-bound yield in kilotons.
    pub const YIELD_UPPER: &str = "Data.Yeild.Upper";
    /// Stated purpose.
    pub const PURPOSE: &str = "Data.Purpose";
    /// Device or test name.
    pub const NAME: &str = "Data.Name";
    /// Deployment type.
    pub const TYPE: &str = "Data.Type";
    /// Day of month.
    pub const DAY: &str = "Date.Day";
    /// Month.
    pub const MONTH: &str = "Date.Month";
    /// Year.
    pub const YEAR: &str = "Date.Year";

    /// Columns that must appear in the header.
    pub const REQUIRED: [&str; 9] = [
        COUNTRY,
        LATITUDE,
        LONGITUDE,
        YIELD_LOWER,
        YIELD_UPPER,
        NAME,
        DAY,
        MONTH,
        YEAR,
    ];
}

/// CSV row. Every field is optional so that completeness can be judged
/// per row instead of failing the whole file.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "WEAPON SOURCE COUNTRY", default)]
    country: Option<String>,
    #[serde(rename = "WEAPON DEPLOYMENT LOCATION", default)]
    deployment_location: Option<String>,
    #[serde(rename = "Location.Cordinates.Latitude", default)]
    latitude: Option<f64>,
    #[serde(rename = "Location.Cordinates.Longitude", default)]
    longitude: Option<f64>,
    #[serde(rename = "Data.Yeild.Lower", default)]
    yield_lower: Option<f64>,
    #[serde(rename = "Data.Yeild.Upper", default)]
    yield_upper: Option<f64>,
    #[serde(rename = "Data.Purpose", default)]
    purpose: Option<String>,
    #[serde(rename = "Data.Name", default)]
    name: Option<String>,
    #[serde(rename = "Data.Type", default)]
    test_type: Option<String>,
    #[serde(rename = "Date.Day", default)]
    day: Option<u32>,
    #[serde(rename = "Date.Month", default)]
    month: Option<u32>,
    #[serde(rename = "Date.Year", default)]
    year: Option<i32>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// `NaN` and `inf` parse as floats but mark a missing measurement.
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Required values of a row, once all are known to be present.
struct Complete {
    country: String,
    name: String,
    yield_lower: f64,
    yield_upper: f64,
    lat: f64,
    lon: f64,
    year: i32,
    month: u32,
    day: u32,
}

impl RawRow {
    /// Splits the row into its required values, or names the first empty
    /// required column.
    fn split(&mut self) -> Result<Complete, &'static str> {
        Ok(Complete {
            country: non_blank(self.country.take()).ok_or(columns::COUNTRY)?,
            name: non_blank(self.name.take()).ok_or(columns::NAME)?,
            yield_lower: finite(self.yield_lower).ok_or(columns::YIELD_LOWER)?,
            yield_upper: finite(self.yield_upper).ok_or(columns::YIELD_UPPER)?,
            lat: finite(self.latitude).ok_or(columns::LATITUDE)?,
            lon: finite(self.longitude).ok_or(columns::LONGITUDE)?,
            year: self.year.ok_or(columns::YEAR)?,
            month: self.month.ok_or(columns::MONTH)?,
            day: self.day.ok_or(columns::DAY)?,
        })
    }
}

// =============================================================================
// CSV TEST SOURCE
// =============================================================================

/// Outcome of reading a test record file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Complete records, in file order.
    pub records: Vec<TestRecord>,
    /// Rows dropped because a required field was empty.
    pub dropped: usize,
}

/// CSV-based test record source.
///
/// Reads the CORGIS nuclear explosions layout. Rows with an empty required
/// field are dropped by default; a `NaN` or infinite number counts as empty.
/// A non-numeric or otherwise unparseable field fails the load with its line
/// number.
///
/// Only the required columns decide completeness. A row with an empty
/// purpose, type or deployment location is kept and the field left `None`,
/// unlike a whole-row `dropna`.
#[derive(Debug, Clone)]
pub struct CsvTestSource {
    file_path: PathBuf,
    drop_incomplete: bool,
}

impl CsvTestSource {
    /// Creates a source for the file at `file_path`. Nothing is read until
    /// [`load`](Self::load).
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
            drop_incomplete: true,
        }
    }

    /// Sets whether rows with empty required fields are dropped (the
    /// default) or rejected.
    #[must_use]
    pub fn drop_incomplete(mut self, drop: bool) -> Self {
        self.drop_incomplete = drop;
        self
    }

    /// Path of the data file.
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Reads the file.
    pub fn load(&self) -> FileResult<LoadReport> {
        if !self.file_path.exists() {
            return Err(FileError::NotFound(self.file_path.clone()));
        }

        log::debug!("loading test records from {}", self.file_path.display());
        let file = std::fs::File::open(&self.file_path)?;
        Self::from_reader(file, self.drop_incomplete)
    }

    /// Reads records from any reader holding CSV text with a header row.
    pub fn from_reader<R: io::Read>(reader: R, drop_incomplete: bool) -> FileResult<LoadReport> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        if let Some(missing) = columns::REQUIRED
            .iter()
            .find(|column| !headers.iter().any(|h| h == **column))
        {
            return Err(FileError::MissingColumn(*missing));
        }

        let mut report = LoadReport::default();
        let mut raw = csv::StringRecord::new();

        while reader.read_record(&mut raw)? {
            let line = raw.position().map_or(0, csv::Position::line);

            let mut row: RawRow = raw.deserialize(Some(&headers)).map_err(|e| FileError::Parse {
                line,
                message: e.to_string(),
            })?;

            let complete = match row.split() {
                Ok(complete) => complete,
                Err(column) if drop_incomplete => {
                    log::trace!("line {}: dropping row, '{}' is empty", line, column);
                    report.dropped += 1;
                    continue;
                }
                Err(column) => return Err(FileError::MissingField { line, column }),
            };

            report.records.push(build_record(line, complete, row)?);
        }

        if report.dropped > 0 {
            log::warn!("dropped {} incomplete rows", report.dropped);
        }
        log::debug!("loaded {} test records", report.records.len());

        Ok(report)
    }
}

fn build_record(line: u64, complete: Complete, extra: RawRow) -> FileResult<TestRecord> {
    let invalid = |source| FileError::Invalid { line, source };

    let country = Country::new(&complete.country).map_err(invalid)?;
    let date = TestDate::from_ymd(complete.year, complete.month, complete.day).map_err(invalid)?;
    let location = Coordinates::new(complete.lat, complete.lon).map_err(invalid)?;

    let mut record = TestRecord::new(complete.name, country, complete.yield_lower, complete.yield_upper)
        .with_date(date)
        .with_location(location);

    record.deployment_location = non_blank(extra.deployment_location);
    record.purpose = non_blank(extra.purpose);
    record.test_type = non_blank(extra.test_type);

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use kiloton_core::KilotonError;
    use std::io::Write;

    const HEADER: &str = "WEAPON SOURCE COUNTRY,WEAPON DEPLOYMENT LOCATION,Data.Source,\
Location.Cordinates.Latitude,Location.Cordinates.Longitude,Data.Magnitude.Body,\
Data.Magnitude.Surface,Location.Cordinates.Depth,Data.Yeild.Lower,Data.Yeild.Upper,\
Data.Purpose,Data.Name,Data.Type,Date.Day,Date.Month,Date.Year";

    fn csv_text(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text.push('\n');
        text
    }

    #[test]
    fn test_reads_corgis_layout() {
        let text = csv_text(&[
            "USA,Alamogordo,DOE,32.54,-105.57,0,0,-0.1,21,21,Wr,Trinity,Tower,16,7,1945",
            "USSR,Semi Kazakh,DOE,48,76,0,0,-0.03,22,22,Wr,RDS-1, Tower ,29,8,1949",
        ]);

        let report = CsvTestSource::from_reader(text.as_bytes(), true).unwrap();
        assert_eq!(report.dropped, 0);
        assert_eq!(report.records.len(), 2);

        let trinity = &report.records[0];
        assert_eq!(trinity.name, "Trinity");
        assert_eq!(trinity.country.as_str(), "USA");
        assert_relative_eq!(trinity.yield_upper, 21.0);
        assert_eq!(trinity.date.unwrap().to_string(), "1945-07-16");
        assert_relative_eq!(trinity.location.unwrap().lon, -105.57);
        assert_eq!(trinity.deployment_location.as_deref(), Some("Alamogordo"));

        // Fields are trimmed.
        assert_eq!(report.records[1].test_type.as_deref(), Some("Tower"));
    }

    #[test]
    fn test_incomplete_rows_dropped() {
        let text = csv_text(&[
            "USA,Nts,DOE,37,-116,0,0,0,,0.5,Wr,Gap,Shaft,1,1,1970",
            "USA,Nts,DOE,37,-116,0,0,0,1,2,Wr,Ok,Shaft,1,1,1970",
            "USA,Nts,DOE,37,-116,0,0,0,1,2,Wr,,Shaft,1,1,1970",
        ]);

        let report = CsvTestSource::from_reader(text.as_bytes(), true).unwrap();
        assert_eq!(report.dropped, 2);
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].name, "Ok");
    }

    #[test]
    fn test_incomplete_rows_rejected_when_not_dropping() {
        let text = csv_text(&["USA,Nts,DOE,37,-116,0,0,0,1,,Wr,Gap,Shaft,1,1,1970"]);

        let err = CsvTestSource::from_reader(text.as_bytes(), false).unwrap_err();
        assert!(matches!(
            err,
            FileError::MissingField {
                line: 2,
                column: "Data.Yeild.Upper"
            }
        ));
    }

    #[test]
    fn test_nan_yield_counts_as_missing() {
        let text = csv_text(&[
            "USA,Nts,DOE,37,-116,0,0,0,1,NaN,Wr,Ghost,Shaft,1,1,1970",
            "USSR,Novaya Zemlya,DOE,73.85,54.5,0,0,0,50000,58000,Wr,Tsar,Airdrop,30,10,1961",
            "USA,Nts,DOE,37,-116,0,0,0,inf,1,Wr,Endless,Shaft,2,1,1970",
        ]);

        let report = CsvTestSource::from_reader(text.as_bytes(), true).unwrap();
        assert_eq!(report.dropped, 2);
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].name, "Tsar");

        let err = CsvTestSource::from_reader(text.as_bytes(), false).unwrap_err();
        assert!(matches!(
            err,
            FileError::MissingField {
                line: 2,
                column: "Data.Yeild.Upper"
            }
        ));
    }

    #[test]
    fn test_optional_labels_may_be_empty() {
        let text = csv_text(&["UK,,DOE,-29.9,131.5,0,0,0,1,2,,Totem,,15,10,1953"]);

        let report = CsvTestSource::from_reader(text.as_bytes(), true).unwrap();
        let record = &report.records[0];
        assert!(record.deployment_location.is_none());
        assert!(record.purpose.is_none());
        assert!(record.test_type.is_none());
    }

    #[test]
    fn test_non_numeric_yield_is_parse_error() {
        let text = csv_text(&["USA,Nts,DOE,37,-116,0,0,0,big,2,Wr,Bad,Shaft,1,1,1970"]);

        let err = CsvTestSource::from_reader(text.as_bytes(), true).unwrap_err();
        assert!(matches!(err, FileError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let text = csv_text(&["USA,Nts,DOE,37,-116,0,0,0,1,2,Wr,Bad,Shaft,31,2,1970"]);

        let err = CsvTestSource::from_reader(text.as_bytes(), true).unwrap_err();
        assert!(matches!(
            err,
            FileError::Invalid {
                line: 2,
                source: KilotonError::InvalidDate { .. }
            }
        ));
    }

    #[test]
    fn test_missing_column() {
        let text = "WEAPON SOURCE COUNTRY,Data.Name\nUSA,Trinity\n";
        let err = CsvTestSource::from_reader(text.as_bytes(), true).unwrap_err();
        assert!(matches!(err, FileError::MissingColumn(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            csv_text(&["CHINA,Lop Nor,DOE,41.5,88.5,0,0,0,20,22,Wr,596,Tower,16,10,1964"])
        )
        .unwrap();

        let source = CsvTestSource::new(file.path());
        assert_eq!(source.path(), file.path());

        let report = source.load().unwrap();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].country.as_str(), "CHINA");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = CsvTestSource::new(dir.path().join("absent.csv"));
        assert!(matches!(source.load(), Err(FileError::NotFound(_))));
    }
}
