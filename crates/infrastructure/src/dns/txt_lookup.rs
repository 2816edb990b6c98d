use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::UdpTransport;
use async_trait::async_trait;
use brighella_application::ports::TxtLookup;
use brighella_domain::{DomainError, TxtRecordQuery};
use std::time::Duration;
use tracing::{debug, instrument};

/// [`TxtLookup`] over plain UDP. Every call is a fresh round trip.
pub struct HickoryTxtLookup {
    timeout: Duration,
}

impl HickoryTxtLookup {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn from_millis(timeout_ms: u64) -> Self {
        Self::new(Duration::from_millis(timeout_ms))
    }
}

#[async_trait]
impl TxtLookup for HickoryTxtLookup {
    #[instrument(skip(self), fields(record = %query.record_name, resolver = %query.resolver))]
    async fn lookup_txt(&self, query: &TxtRecordQuery) -> Result<String, DomainError> {
        let fqdn = query.fqdn();
        let (id, message) = MessageBuilder::build_txt_query(&fqdn)?;

        let transport = UdpTransport::new(query.resolver);
        let response = transport.send(&message, self.timeout).await?;

        let value = ResponseParser::first_txt(&response, id, &query.record_name)?;
        debug!(value = %value, "TXT record resolved");

        Ok(value)
    }
}
