use tracing::debug;

/// Quality attached to a published property, mirroring the usual
/// idle/ok/busy/alert property-state vocabulary of astronomy control
/// protocols.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PropertyQuality {
    Idle,
    Ok,
    Busy,
    Alert,
}

/// Where refreshed quantities go. The core calls `publish` once per poll per
/// changed quantity and does not care how the value reaches a client.
pub trait PropertySink {
    fn publish(&mut self, name: &str, value: f64, quality: PropertyQuality);
}

/// Sink that renders property updates as debug-level log lines. Stands in
/// for a client-facing registration protocol in the simulator binary.
#[derive(Debug, Default)]
pub struct TracingSink;

impl PropertySink for TracingSink {
    fn publish(&mut self, name: &str, value: f64, quality: PropertyQuality) {
        debug!(property = name, value, quality = ?quality, "property updated");
    }
}
