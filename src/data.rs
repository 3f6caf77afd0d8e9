//! Loading of shot logs from CSV and JSON files.
//!
//! This is the validation boundary: column headers are trimmed, labels are
//! parsed into the closed enums, and rows with a non-positive xG are dropped
//! here so the analytics never see them.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::domain::{Location, Outcome, Shot, ShotType, Situation};

#[derive(Debug, Error)]
pub enum DataError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported file type {0:?}")]
    UnsupportedFileType(String),

    #[error("missing header line")]
    MissingHeader,

    #[error("missing column {0:?}")]
    MissingColumn(&'static str),

    #[error("line {line}: missing field {column:?}")]
    MissingField { line: usize, column: &'static str },

    #[error("line {line}: invalid {column} {value:?}")]
    InvalidField {
        line: usize,
        column: &'static str,
        value: String,
    },
}

/// Loads a shot log, dispatching on the file extension (`.csv` or `.json`).
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Shot>, DataError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .unwrap_or_default()
        .to_string_lossy()
        .to_lowercase();
    match extension.as_str() {
        "csv" => read_csv(path),
        "json" => read_json(path),
        other => Err(DataError::UnsupportedFileType(other.into())),
    }
}

pub fn read_csv(path: impl AsRef<Path>) -> Result<Vec<Shot>, DataError> {
    let file = File::open(path)?;
    parse_csv(BufReader::new(file))
}

pub fn read_json(path: impl AsRef<Path>) -> Result<Vec<Shot>, DataError> {
    let file = File::open(path)?;
    let shots: Vec<Shot> = serde_json::from_reader(file)?;
    Ok(shots.into_iter().filter(|shot| shot.xg > 0.0).collect())
}

const PLAYER: &str = "player";
const X: &str = "X";
const Y: &str = "Y";
const XG: &str = "xG";
const RESULT: &str = "result";
const SITUATION: &str = "situation";
const SHOT_TYPE: &str = "shotType";

struct Columns {
    player: usize,
    x: usize,
    y: usize,
    xg: usize,
    result: usize,
    situation: usize,
    shot_type: usize,
}
impl Columns {
    fn resolve(header: &str) -> Result<Self, DataError> {
        let indexes: FxHashMap<&str, usize> = header
            .split(',')
            .map(str::trim)
            .enumerate()
            .map(|(index, name)| (name, index))
            .collect();
        let locate = |name: &'static str| {
            indexes
                .get(name)
                .copied()
                .ok_or(DataError::MissingColumn(name))
        };
        Ok(Self {
            player: locate(PLAYER)?,
            x: locate(X)?,
            y: locate(Y)?,
            xg: locate(XG)?,
            result: locate(RESULT)?,
            situation: locate(SITUATION)?,
            shot_type: locate(SHOT_TYPE)?,
        })
    }
}

fn parse_csv(reader: impl BufRead) -> Result<Vec<Shot>, DataError> {
    let mut lines = reader.lines();
    let header = lines.next().ok_or(DataError::MissingHeader)??;
    let columns = Columns::resolve(&header)?;

    let mut shots = vec![];
    for (offset, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_number = offset + 2;
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let xg: f64 = parse_field(&fields, columns.xg, line_number, XG)?;
        if xg <= 0.0 {
            continue;
        }
        shots.push(Shot {
            player: field(&fields, columns.player, line_number, PLAYER)?.to_string(),
            xg,
            outcome: parse_field(&fields, columns.result, line_number, RESULT)?,
            situation: parse_field(&fields, columns.situation, line_number, SITUATION)?,
            shot_type: parse_field(&fields, columns.shot_type, line_number, SHOT_TYPE)?,
            location: Location {
                x: parse_field(&fields, columns.x, line_number, X)?,
                y: parse_field(&fields, columns.y, line_number, Y)?,
            },
        });
    }
    Ok(shots)
}

fn field<'a>(
    fields: &'a [&str],
    index: usize,
    line: usize,
    column: &'static str,
) -> Result<&'a str, DataError> {
    fields
        .get(index)
        .copied()
        .ok_or(DataError::MissingField { line, column })
}

fn parse_field<T: FromStr>(
    fields: &[&str],
    index: usize,
    line: usize,
    column: &'static str,
) -> Result<T, DataError> {
    let value = field(fields, index, line, column)?;
    value.parse().map_err(|_| DataError::InvalidField {
        line,
        column,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const CSV: &str = "\
player,X,Y,xG,result,situation,shotType
Cristiano Ronaldo,0.885,0.5,0.76,Goal,Penalty,RightFoot
Cristiano Ronaldo,0.92,0.37,0.12,SavedShot,OpenPlay,LeftFoot
Cristiano Ronaldo,0.88,0.62,0.0,MissedShots,OpenPlay,Head
Cristiano Ronaldo,0.97,0.48,0.05,BlockedShot,FromCorner,Head
";

    #[test]
    fn parse_well_formed() {
        let shots = parse_csv(Cursor::new(CSV)).unwrap();
        // the zero-xG row is dropped at this boundary
        assert_eq!(3, shots.len());
        let first = &shots[0];
        assert_eq!("Cristiano Ronaldo", first.player);
        assert_eq!(0.76, first.xg);
        assert_eq!(Outcome::Goal, first.outcome);
        assert_eq!(Situation::Penalty, first.situation);
        assert_eq!(ShotType::RightFoot, first.shot_type);
        assert_eq!(0.885, first.location.x);
        assert_eq!(Outcome::Saved, shots[1].outcome);
        assert_eq!(Outcome::Blocked, shots[2].outcome);
    }

    #[test]
    fn column_order_is_immaterial() {
        let csv = "\
xG,result,player,situation,shotType,Y,X
0.33,Goal,Son Heung-Min,OpenPlay,LeftFoot,0.44,0.9
";
        let shots = parse_csv(Cursor::new(csv)).unwrap();
        assert_eq!(1, shots.len());
        assert_eq!("Son Heung-Min", shots[0].player);
        assert_eq!(0.33, shots[0].xg);
        assert_eq!(0.9, shots[0].location.x);
    }

    #[test]
    fn headers_are_trimmed() {
        let csv = " player , X , Y , xG , result , situation , shotType\n\
                    Kane,0.9,0.5,0.4,Goal,OpenPlay,RightFoot\n";
        let shots = parse_csv(Cursor::new(csv)).unwrap();
        assert_eq!(1, shots.len());
    }

    #[test]
    fn missing_column() {
        let csv = "player,X,Y,result,situation,shotType\n";
        match parse_csv(Cursor::new(csv)) {
            Err(DataError::MissingColumn(column)) => assert_eq!(XG, column),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unknown_outcome_label() {
        let csv = "player,X,Y,xG,result,situation,shotType\n\
                   Kane,0.9,0.5,0.4,OwnGoal,OpenPlay,RightFoot\n";
        match parse_csv(Cursor::new(csv)) {
            Err(DataError::InvalidField {
                line,
                column,
                value,
            }) => {
                assert_eq!(2, line);
                assert_eq!(RESULT, column);
                assert_eq!("OwnGoal", value);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn short_row() {
        let csv = "player,X,Y,xG,result,situation,shotType\n\
                   Kane,0.9,0.5,0.4,Goal\n";
        match parse_csv(Cursor::new(csv)) {
            Err(DataError::MissingField { line, column }) => {
                assert_eq!(2, line);
                assert_eq!(SITUATION, column);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn blank_lines_are_skipped() {
        let csv = "player,X,Y,xG,result,situation,shotType\n\n\
                   Kane,0.9,0.5,0.4,Goal,OpenPlay,RightFoot\n\n";
        let shots = parse_csv(Cursor::new(csv)).unwrap();
        assert_eq!(1, shots.len());
    }

    #[test]
    fn json_labels_match_dataset() {
        let json = r#"[
            {
                "player": "Cristiano Ronaldo",
                "xg": 0.12,
                "outcome": "SavedShot",
                "situation": "OpenPlay",
                "shot_type": "RightFoot",
                "location": { "x": 0.9, "y": 0.5 }
            }
        ]"#;
        let shots: Vec<Shot> = serde_json::from_str(json).unwrap();
        assert_eq!(1, shots.len());
        assert_eq!(Outcome::Saved, shots[0].outcome);
    }
}
