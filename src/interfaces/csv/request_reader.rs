use crate::domain::request::ChargeRequest;
use crate::error::ChargeError;
use std::io::Read;

/// Streams charge requests from CSV input.
///
/// Empty cells deserialize as absent fields; rows are surfaced one by one
/// so a malformed row does not abort the batch.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn requests(self) -> impl Iterator<Item = Result<ChargeRequest, ChargeError>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(ChargeError::from))
    }
}
