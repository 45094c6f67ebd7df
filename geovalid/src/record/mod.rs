//! Parser for survey record files.
//!
//! The input is a header-first, comma-separated text format. The header
//! names the columns; data rows may order columns arbitrarily as long as
//! the required ones are present:
//!
//! - `AreaID`, `ALat1`, `ALon1`, `ALat2`, `ALon2` - the area identifier and
//!   its two diagonal corners
//! - `SectorID`, `c1`, `d1` .. `c4`, `d4` - the sector identifier and its
//!   four corners (`cN` = latitude, `dN` = longitude)
//!
//! Fields are plain tokens without quoting. Blank lines are skipped. The
//! parser is streaming: rows are yielded as they are read, each carrying
//! its input line number on failure.

use std::io::{BufRead, BufReader, Read};

use crate::coord::Coordinate;
use crate::survey::SurveyRecord;

/// Errors from survey record parsing.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input is empty: expected a header line")]
    MissingHeader,

    #[error("Header is missing required column '{column}'")]
    MissingColumn { column: String },

    #[error("Line {line}: expected {expected} fields, found {found}")]
    MalformedLine {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: column '{column}' holds '{value}', expected a number")]
    InvalidNumber {
        line: usize,
        column: String,
        value: String,
    },
}

/// Parser for the survey record format.
pub struct RecordParser;

impl RecordParser {
    /// Parses records from a reader.
    ///
    /// The header line is consumed eagerly so column positions are known;
    /// data rows are then yielded one at a time.
    pub fn parse<R: Read>(
        reader: R,
    ) -> Result<impl Iterator<Item = Result<SurveyRecord, RecordError>>, RecordError> {
        let mut reader = BufReader::new(reader);

        let mut header = String::new();
        if reader.read_line(&mut header)? == 0 {
            return Err(RecordError::MissingHeader);
        }
        let columns = ColumnMap::from_header(&header)?;

        Ok(RecordIterator {
            reader,
            columns,
            line_buffer: String::new(),
            line_number: 1,
        })
    }

    /// Parses every record into a vector, stopping at the first error.
    ///
    /// Validation never starts on a partially readable batch, so a single
    /// malformed row fails the whole read.
    pub fn read_all<R: Read>(reader: R) -> Result<Vec<SurveyRecord>, RecordError> {
        Self::parse(reader)?.collect()
    }
}

/// Column positions resolved from the header line.
struct ColumnMap {
    width: usize,
    area_id: usize,
    area_corners: [(usize, usize); 2],
    sector_id: usize,
    sector_corners: [(usize, usize); 4],
}

impl ColumnMap {
    fn from_header(header: &str) -> Result<Self, RecordError> {
        let names: Vec<&str> = header.trim_end().split(',').map(str::trim).collect();

        let find = |column: &str| {
            names
                .iter()
                .position(|name| *name == column)
                .ok_or_else(|| RecordError::MissingColumn {
                    column: column.to_string(),
                })
        };

        Ok(Self {
            width: names.len(),
            area_id: find("AreaID")?,
            area_corners: [
                (find("ALat1")?, find("ALon1")?),
                (find("ALat2")?, find("ALon2")?),
            ],
            sector_id: find("SectorID")?,
            sector_corners: [
                (find("c1")?, find("d1")?),
                (find("c2")?, find("d2")?),
                (find("c3")?, find("d3")?),
                (find("c4")?, find("d4")?),
            ],
        })
    }
}

/// Iterator yielding one record per data line.
struct RecordIterator<R: BufRead> {
    reader: R,
    columns: ColumnMap,
    line_buffer: String,
    line_number: usize,
}

impl<R: BufRead> RecordIterator<R> {
    fn parse_line(&self, line: &str) -> Result<SurveyRecord, RecordError> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();

        if fields.len() != self.columns.width {
            return Err(RecordError::MalformedLine {
                line: self.line_number,
                expected: self.columns.width,
                found: fields.len(),
            });
        }

        let number = |index: usize, column: &str| -> Result<f64, RecordError> {
            fields[index]
                .parse()
                .map_err(|_| RecordError::InvalidNumber {
                    line: self.line_number,
                    column: column.to_string(),
                    value: fields[index].to_string(),
                })
        };

        let corner = |(lat, lon): (usize, usize),
                      names: (&str, &str)|
         -> Result<Coordinate, RecordError> {
            Ok(Coordinate::new(
                number(lat, names.0)?,
                number(lon, names.1)?,
            ))
        };

        let columns = &self.columns;

        Ok(SurveyRecord {
            area_id: fields[columns.area_id].to_string(),
            area_corners: [
                corner(columns.area_corners[0], ("ALat1", "ALon1"))?,
                corner(columns.area_corners[1], ("ALat2", "ALon2"))?,
            ],
            sector_id: fields[columns.sector_id].to_string(),
            sector_corners: [
                corner(columns.sector_corners[0], ("c1", "d1"))?,
                corner(columns.sector_corners[1], ("c2", "d2"))?,
                corner(columns.sector_corners[2], ("c3", "d3"))?,
                corner(columns.sector_corners[3], ("c4", "d4"))?,
            ],
        })
    }
}

impl<R: BufRead> Iterator for RecordIterator<R> {
    type Item = Result<SurveyRecord, RecordError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line_buffer.clear();
            self.line_number += 1;

            match self.reader.read_line(&mut self.line_buffer) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e.into())),
            }

            let line = self.line_buffer.trim_end_matches(['\r', '\n']);
            if line.trim().is_empty() {
                continue;
            }

            return Some(self.parse_line(line));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "AreaID,ALat1,ALon1,ALat2,ALon2,SectorID,c1,d1,c2,d2,c3,d3,c4,d4";

    #[test]
    fn test_parse_single_record() {
        let input = format!(
            "{}\nA1,5,1,1,4,S1,1.5,1.5,2,1.5,2,2,1.5,2\n",
            HEADER
        );

        let records = RecordParser::read_all(input.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.area_id, "A1");
        assert_eq!(record.sector_id, "S1");
        assert_eq!(record.area_corners[0], Coordinate::new(5.0, 1.0));
        assert_eq!(record.area_corners[1], Coordinate::new(1.0, 4.0));
        assert_eq!(record.sector_corners[0], Coordinate::new(1.5, 1.5));
        assert_eq!(record.sector_corners[3], Coordinate::new(1.5, 2.0));
    }

    #[test]
    fn test_parse_reordered_columns() {
        let input = "SectorID,AreaID,ALat1,ALon1,ALat2,ALon2,c1,d1,c2,d2,c3,d3,c4,d4\n\
                     S9,A7,5,1,1,4,1.5,1.5,2,1.5,2,2,1.5,2\n";

        let records = RecordParser::read_all(input.as_bytes()).unwrap();

        assert_eq!(records[0].area_id, "A7");
        assert_eq!(records[0].sector_id, "S9");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let input = format!(
            "{}\n\nA1,5,1,1,4,S1,1.5,1.5,2,1.5,2,2,1.5,2\n\n",
            HEADER
        );

        let records = RecordParser::read_all(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_empty_input_is_missing_header() {
        let result = RecordParser::read_all("".as_bytes());
        assert!(matches!(result, Err(RecordError::MissingHeader)));
    }

    #[test]
    fn test_missing_column_reported_by_name() {
        let input = "AreaID,ALat1,ALon1,ALat2,ALon2,c1,d1,c2,d2,c3,d3,c4,d4\n";
        let err = RecordParser::read_all(input.as_bytes()).unwrap_err();

        match err {
            RecordError::MissingColumn { column } => assert_eq!(column, "SectorID"),
            other => panic!("Expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_short_row_reports_field_counts() {
        let input = format!("{}\nA1,5,1\n", HEADER);
        let err = RecordParser::read_all(input.as_bytes()).unwrap_err();

        match err {
            RecordError::MalformedLine {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 14);
                assert_eq!(found, 3);
            }
            other => panic!("Expected MalformedLine, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_number_reports_line_and_column() {
        let input = format!(
            "{}\nA1,5,1,1,4,S1,1.5,1.5,2,1.5,2,2,1.5,2\nA1,5,x,1,4,S2,1.5,1.5,2,1.5,2,2,1.5,2\n",
            HEADER
        );
        let err = RecordParser::read_all(input.as_bytes()).unwrap_err();

        match err {
            RecordError::InvalidNumber { line, column, value } => {
                assert_eq!(line, 3);
                assert_eq!(column, "ALon1");
                assert_eq!(value, "x");
            }
            other => panic!("Expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_streaming_iteration_yields_each_row() {
        let input = format!(
            "{}\nA1,5,1,1,4,S1,1.5,1.5,2,1.5,2,2,1.5,2\nA1,5,1,1,4,S2,3,2.5,3.5,2.5,3.5,3,3,3\n",
            HEADER
        );

        let rows: Vec<_> = RecordParser::parse(input.as_bytes())
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].sector_id, "S2");
    }
}
