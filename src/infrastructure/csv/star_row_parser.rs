// ============================================================
// STAR CSV READER
// ============================================================
// Header resolution and defensive per-row parsing of catalog text

use csv::{ByteRecord, ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info, warn};

use crate::domain::catalog::{
    CatalogWarning, ColumnSchema, CoordinateSupport, HeaderIndex, RaUnit, StarRecord,
    DEFAULT_MAGNITUDE,
};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Output of one parse pass
#[derive(Debug, Clone, Default)]
pub struct ParsedCatalog {
    pub header: HeaderIndex,
    pub support: Option<CoordinateSupport>,
    pub records: Vec<StarRecord>,
    pub warnings: Vec<CatalogWarning>,

    /// Data rows left unread because of the record cap
    pub skipped_by_cap: usize,

    /// Non-blank data rows seen, including malformed and capped ones
    pub data_rows: usize,
}

/// CSV reader for star catalogs with name-resolved columns.
///
/// Each physical line is one row (`\n`, `\r\n` and a lone `\r` all end a
/// line); fields within a line follow CSV quoting rules, so a quoted name
/// may contain commas.
pub struct StarCsvReader {
    schema: ColumnSchema,
    ra_unit: RaUnit,

    /// 0 = unlimited
    max_records: usize,

    line_reader: ReaderBuilder,
}

impl StarCsvReader {
    pub fn new(schema: ColumnSchema) -> Self {
        let mut line_reader = ReaderBuilder::new();
        line_reader
            .has_headers(false)
            .delimiter(b',')
            .trim(Trim::All)
            .flexible(true);

        Self {
            schema,
            ra_unit: RaUnit::default(),
            max_records: 0,
            line_reader,
        }
    }

    pub fn with_ra_unit(mut self, ra_unit: RaUnit) -> Self {
        self.ra_unit = ra_unit;
        self
    }

    pub fn with_max_records(mut self, max_records: usize) -> Self {
        self.max_records = max_records;
        self
    }

    /// Parse catalog text. Never fails: problems end up in `warnings`.
    pub fn parse(&self, content: &[u8]) -> ParsedCatalog {
        let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

        let mut parsed = ParsedCatalog::default();
        let mut header: Option<HeaderIndex> = None;
        let mut capped = false;

        for (idx, raw_line) in physical_lines(content).enumerate() {
            let line = idx + 1;

            if raw_line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            if header.is_none() {
                header = Some(self.resolve_header(raw_line, &mut parsed));
                continue;
            }
            let Some(header) = header.as_ref() else {
                continue;
            };

            parsed.data_rows += 1;

            if capped {
                parsed.skipped_by_cap += 1;
                continue;
            }
            if self.max_records > 0 && parsed.records.len() >= self.max_records {
                capped = true;
                parsed.skipped_by_cap += 1;
                continue;
            }

            match self.read_row(raw_line) {
                Ok(record) => parsed.records.push(self.parse_row(header, &record, line)),
                Err(reason) => {
                    debug!(line, reason = %reason, "Skipping malformed row");
                    parsed.warnings.push(CatalogWarning::MalformedRow {
                        line,
                        content: String::from_utf8_lossy(raw_line).into_owned(),
                        reason,
                    });
                }
            }
        }

        if let Some(header) = header {
            parsed.header = header;
        }

        if parsed.data_rows == 0 {
            warn!("Catalog contains no data rows");
            parsed.warnings.push(CatalogWarning::EmptyCatalog);
        }

        if capped {
            info!(
                cap = self.max_records,
                skipped = parsed.skipped_by_cap,
                "Record cap reached"
            );
            parsed.warnings.push(CatalogWarning::RecordCapReached {
                cap: self.max_records,
                skipped: parsed.skipped_by_cap,
            });
        }

        parsed
    }

    /// Split one physical line into fields
    fn split_line(&self, raw_line: &[u8]) -> csv::Result<ByteRecord> {
        let mut reader = self.line_reader.from_reader(raw_line);
        let mut record = ByteRecord::new();
        reader.read_byte_record(&mut record)?;
        Ok(record)
    }

    fn read_row(&self, raw_line: &[u8]) -> Result<StringRecord, String> {
        let record = self.split_line(raw_line).map_err(|e| e.to_string())?;
        StringRecord::from_byte_record(record).map_err(|e| e.utf8_error().to_string())
    }

    fn resolve_header(&self, raw_line: &[u8], parsed: &mut ParsedCatalog) -> HeaderIndex {
        let index = match self.split_line(raw_line) {
            Ok(record) => {
                let fields: Vec<String> = record
                    .iter()
                    .map(|field| String::from_utf8_lossy(field).into_owned())
                    .collect();
                HeaderIndex::from_fields(fields.iter().map(String::as_str))
            }
            Err(_) => HeaderIndex::from_line(&String::from_utf8_lossy(raw_line)),
        };
        let support = index.coordinate_support(&self.schema);

        debug!(headers = %index.headers().join(","), "Catalog header parsed");

        if support.any() {
            info!(systems = %support.describe(), "Detected coordinate systems");
        } else {
            warn!(
                headers = %index.headers().join(","),
                "No usable coordinate columns; need x,y,z or ra,dec"
            );
            parsed.warnings.push(CatalogWarning::MissingCoordinateSystem {
                headers: index.headers().to_vec(),
            });
        }

        parsed.support = Some(support);
        index
    }

    fn parse_row(&self, header: &HeaderIndex, record: &StringRecord, line: usize) -> StarRecord {
        let row = RowView { header, record };
        let schema = &self.schema;

        StarRecord {
            line,
            right_ascension: row
                .number(&schema.right_ascension)
                .map(|ra| self.ra_unit.to_degrees(ra)),
            declination: row.number(&schema.declination),
            x: row.number(&schema.x),
            y: row.number(&schema.y),
            z: row.number(&schema.z),
            magnitude: row.number(&schema.magnitude).unwrap_or(DEFAULT_MAGNITUDE),
            color_index: row.number(&schema.color_index),
            spectral_type: row.text(&schema.spectral_type).to_string(),
            proper_name: row.text(&schema.proper_name).to_string(),
        }
    }
}

/// Name-based field access over one record
struct RowView<'a> {
    header: &'a HeaderIndex,
    record: &'a StringRecord,
}

impl<'a> RowView<'a> {
    fn field(&self, column: &str) -> Option<&'a str> {
        let idx = self.header.position(column)?;
        self.record.get(idx)
    }

    fn text(&self, column: &str) -> &'a str {
        self.field(column).unwrap_or("")
    }

    /// Locale-invariant float; unparsable and non-finite values count as absent
    fn number(&self, column: &str) -> Option<f32> {
        self.field(column)?
            .parse::<f32>()
            .ok()
            .filter(|value| value.is_finite())
    }
}

/// Split on `\n`, `\r\n` or a lone `\r`, one item per physical line
fn physical_lines(content: &[u8]) -> impl Iterator<Item = &[u8]> + '_ {
    let mut rest = Some(content);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(pos) => {
                let crlf = current[pos] == b'\r' && current.get(pos + 1) == Some(&b'\n');
                rest = Some(&current[pos + if crlf { 2 } else { 1 }..]);
                Some(&current[..pos])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}
