//! Event handler wired in at the composition root.

use std::convert::Infallible;

use storefront_catalog::{CatalogEvent, SectionEvent};
use storefront_events::{Event, EventSink};

/// Logs every section event; stands in for the cart and navigation subsystems.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSink;

impl EventSink<SectionEvent> for LoggingSink {
    type Error = Infallible;

    fn publish(&self, message: SectionEvent) -> Result<(), Self::Error> {
        let session_id = message.session_id();
        let sequence_number = message.sequence_number();
        let event = message.payload();

        match event {
            CatalogEvent::ViewMoreRequested(_) => {
                tracing::info!(
                    %session_id,
                    sequence_number,
                    event_type = event.event_type(),
                    "View more clicked"
                );
            }
            CatalogEvent::AddToCartRequested(e) => {
                tracing::info!(
                    %session_id,
                    sequence_number,
                    event_type = event.event_type(),
                    product_id = %e.product_id,
                    "Added product {} to cart",
                    e.product_id
                );
            }
        }
        Ok(())
    }
}
