use brighella_domain::DomainError;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// First character-string of the first TXT record in answer order.
    ///
    /// `record` only labels errors. TXT records carrying no strings are
    /// skipped; bytes are decoded as lossy UTF-8.
    pub fn first_txt(
        response_bytes: &[u8],
        expected_id: u16,
        record: &str,
    ) -> Result<String, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.id() != expected_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response id {} does not match query id {}",
                message.id(),
                expected_id
            )));
        }

        let rcode = message.response_code();
        if rcode != ResponseCode::NoError {
            return Err(DomainError::DnsResponseCode {
                record: record.to_string(),
                rcode: Self::rcode_to_status(rcode).to_string(),
            });
        }

        debug!(
            record = %record,
            answers = message.answers().len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        message
            .answers()
            .iter()
            .find_map(|answer| match answer.data() {
                RData::TXT(txt) => txt
                    .txt_data()
                    .first()
                    .map(|bytes| String::from_utf8_lossy(bytes).into_owned()),
                _ => None,
            })
            .ok_or_else(|| DomainError::TxtRecordNotFound(record.to_string()))
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
