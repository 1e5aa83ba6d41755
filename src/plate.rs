//! Registration plate parsing. Plate-parity queries need the numeric
//! segment of a registration; the scheme for extracting it is pluggable so
//! malformed input is a handled error, not a crash in the middle of a scan.

/// Extracts the numeric plate segment from a registration string.
pub trait PlateParser: Send + Sync {
    fn plate_number(&self, registration: &str) -> Result<u64, PlateError>;
}

/// Default scheme for `REGION-NUMBER-SUFFIX` registrations: the token after
/// the first `-` is the plate number (`KA-01-HH-1234` → 1).
#[derive(Debug, Default, Clone, Copy)]
pub struct DashDelimited;

impl PlateParser for DashDelimited {
    fn plate_number(&self, registration: &str) -> Result<u64, PlateError> {
        let segment = registration
            .split('-')
            .nth(1)
            .ok_or_else(|| PlateError::MissingSegment {
                registration: registration.to_string(),
            })?;
        segment.parse().map_err(|_| PlateError::NotNumeric {
            registration: registration.to_string(),
            segment: segment.to_string(),
        })
    }
}

#[derive(Debug)]
pub enum PlateError {
    MissingSegment { registration: String },
    NotNumeric { registration: String, segment: String },
}

impl std::fmt::Display for PlateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlateError::MissingSegment { registration } => {
                write!(f, "registration {registration} has no numeric segment")
            }
            PlateError::NotNumeric {
                registration,
                segment,
            } => {
                write!(
                    f,
                    "registration {registration}: segment {segment:?} is not numeric"
                )
            }
        }
    }
}

impl std::error::Error for PlateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_delimited_extracts_second_token() {
        assert_eq!(DashDelimited.plate_number("KA-01-HH-1234").unwrap(), 1);
        assert_eq!(DashDelimited.plate_number("KA-02-CD-2222").unwrap(), 2);
        assert_eq!(DashDelimited.plate_number("MH-7777").unwrap(), 7777);
    }

    #[test]
    fn missing_segment_is_reported() {
        let err = DashDelimited.plate_number("NODASHES").unwrap_err();
        assert!(matches!(err, PlateError::MissingSegment { .. }));
        assert!(err.to_string().contains("NODASHES"));
    }

    #[test]
    fn non_numeric_segment_is_reported() {
        let err = DashDelimited.plate_number("KA-XX-1234").unwrap_err();
        match &err {
            PlateError::NotNumeric { segment, .. } => assert_eq!(segment, "XX"),
            other => panic!("expected NotNumeric, got {other:?}"),
        }
        assert!(err.to_string().contains("KA-XX-1234"));
    }

    #[test]
    fn empty_segment_is_not_numeric() {
        let err = DashDelimited.plate_number("KA--HH").unwrap_err();
        assert!(matches!(err, PlateError::NotNumeric { .. }));
    }
}
